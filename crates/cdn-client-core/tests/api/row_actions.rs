use std::sync::atomic::Ordering;

use cdn_client_core::pages::{NotificationLevel, RowAction};
use cdn_shared::const_config::admin::ADMIN_USER_ID;
use serde_json::json;

use crate::helpers::{cookie_for_id, no_cb, spawn_app, BackendResponses};

fn delete_abc() -> RowAction {
    RowAction::DeleteFile {
        filename: "abc.png".to_string(),
    }
}

#[tokio::test]
async fn declining_the_confirmation_sends_nothing() {
    // Arrange
    let app = spawn_app(BackendResponses {
        files: json!({"error": null, "files": ["https://cdn.example/abc.png"]}),
        ..Default::default()
    })
    .await;
    let mut page = app.page_for_cookie(None);
    app.drive(&mut page, |page| page.file_rows().is_some()).await;
    let rows_before = page.file_rows();

    page.request_row_action(delete_abc());
    assert_eq!(
        page.pending_confirmation().unwrap().confirm_prompt(),
        "Are you sure you want to delete this file?"
    );

    // Act
    page.resolve_confirmation(false, &app.client, no_cb);
    app.settle(&mut page).await;

    // Assert - no request, no state change
    assert_eq!(app.backend.delete_hits.load(Ordering::SeqCst), 0);
    assert_eq!(page.file_rows(), rows_before);
    assert!(page.pending_confirmation().is_none());
    assert!(!page.has_notifications());
}

#[tokio::test]
async fn confirmed_file_delete_sends_filename_and_refreshes() {
    // Arrange
    let app = spawn_app(BackendResponses {
        files: json!({"error": null, "files": ["https://cdn.example/abc.png"]}),
        ..Default::default()
    })
    .await;
    let mut page = app.page_for_cookie(None);
    app.drive(&mut page, |page| page.file_rows().is_some()).await;

    page.request_row_action(delete_abc());

    // Act
    page.resolve_confirmation(true, &app.client, no_cb);
    app.drive(&mut page, |_| {
        app.backend.files_hits.load(Ordering::SeqCst) == 2
    })
    .await;

    // Assert
    assert_eq!(app.backend.delete_hits.load(Ordering::SeqCst), 1);
    assert_eq!(
        app.backend
            .last_delete_query
            .lock()
            .expect("mutex poisoned")
            .clone()
            .unwrap(),
        "filename=abc.png"
    );
}

#[tokio::test]
async fn confirmed_revoke_sends_user_id_and_refreshes_both_lists() {
    // Arrange
    let app = spawn_app(BackendResponses {
        users: json!({"error": null, "users": [{"_id": "42"}]}),
        ..Default::default()
    })
    .await;
    let cookie = cookie_for_id(&format!(r#"{{"id":"{ADMIN_USER_ID}"}}"#));
    let mut page = app.page_for_cookie(Some(&cookie));
    app.drive(&mut page, |page| {
        page.file_rows().is_some() && page.user_rows().is_some()
    })
    .await;

    page.request_row_action(RowAction::RevokeUser {
        user_id: "42".to_string(),
    });
    assert_eq!(
        page.pending_confirmation().unwrap().confirm_prompt(),
        "Are you sure you want to remove access from this user?"
    );

    // Act
    page.resolve_confirmation(true, &app.client, no_cb);
    app.drive(&mut page, |_| {
        app.backend.users_hits.load(Ordering::SeqCst) == 2
            && app.backend.files_hits.load(Ordering::SeqCst) == 2
    })
    .await;

    // Assert
    assert_eq!(app.backend.delete_hits.load(Ordering::SeqCst), 1);
    assert_eq!(
        app.backend
            .last_delete_query
            .lock()
            .expect("mutex poisoned")
            .clone()
            .unwrap(),
        "user_id=42"
    );
}

#[tokio::test]
async fn delete_error_notifies_and_keeps_rows() {
    // Arrange
    let app = spawn_app(BackendResponses {
        files: json!({"error": null, "files": ["https://cdn.example/abc.png"]}),
        delete: json!({"error": "not yours"}),
        ..Default::default()
    })
    .await;
    let mut page = app.page_for_cookie(None);
    app.drive(&mut page, |page| page.file_rows().is_some()).await;

    page.request_row_action(delete_abc());

    // Act
    page.resolve_confirmation(true, &app.client, no_cb);
    app.drive(&mut page, |page| page.has_notifications()).await;

    // Assert - the user hears about it and the stale rows stay visible
    let notification = page.take_notification().unwrap();
    assert_eq!(notification.level, NotificationLevel::Error);
    assert_eq!(notification.message, "not yours");
    assert_eq!(app.backend.files_hits.load(Ordering::SeqCst), 1);
    assert!(page.file_rows().is_some());
}
