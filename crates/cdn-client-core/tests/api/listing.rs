use std::sync::atomic::Ordering;

use cdn_client_core::{
    pages::{FileRow, ListingPage, NotificationLevel, UserRow},
    Client,
};
use cdn_shared::{const_config::admin::ADMIN_USER_ID, session::SessionContext};
use serde_json::json;

use crate::helpers::{cookie_for_id, no_cb, spawn_app, BackendResponses};

#[tokio::test]
async fn one_row_per_file_with_derived_labels() {
    // Arrange
    let app = spawn_app(BackendResponses {
        files: json!({
            "error": null,
            "files": [
                "https://cdn.example/abc.png",
                "https://cdn.example/383287544336613385/notes.txt",
            ]
        }),
        ..Default::default()
    })
    .await;
    let mut page = app.page_for_cookie(None);

    // Act
    app.drive(&mut page, |page| page.file_rows().is_some()).await;

    // Assert - order preserving projection of the response
    let rows = page.file_rows().unwrap();
    assert_eq!(
        rows,
        [
            FileRow {
                label: "abc.png".to_string(),
                url: "https://cdn.example/abc.png".to_string(),
            },
            FileRow {
                label: "notes.txt".to_string(),
                url: "https://cdn.example/383287544336613385/notes.txt".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn null_files_renders_empty_state_without_error() {
    // Arrange
    let app = spawn_app(BackendResponses {
        files: json!({"error": null, "files": null}),
        ..Default::default()
    })
    .await;
    let mut page = app.page_for_cookie(None);

    // Act
    app.drive(&mut page, |page| page.file_rows().is_some()).await;

    // Assert
    assert!(page.file_rows().unwrap().is_empty());
    assert!(!page.has_notifications());
}

#[tokio::test]
async fn error_payload_notifies_and_renders_nothing() {
    // Arrange
    let app = spawn_app(BackendResponses {
        files: json!({"error": "boom", "files": null}),
        ..Default::default()
    })
    .await;
    let mut page = app.page_for_cookie(None);

    // Act
    app.drive(&mut page, |page| page.has_notifications()).await;

    // Assert
    let notification = page.take_notification().unwrap();
    assert_eq!(notification.level, NotificationLevel::Error);
    assert_eq!(notification.message, "boom");
    assert_eq!(page.file_rows(), None);
}

#[tokio::test]
async fn user_rows_use_display_label_rules() {
    // Arrange
    let app = spawn_app(BackendResponses {
        users: json!({
            "error": null,
            "users": [
                {"_id": "42", "username": "mooshi", "discriminator": "0001"},
                {"_id": "77"},
            ]
        }),
        ..Default::default()
    })
    .await;
    let cookie = cookie_for_id(&format!(r#"{{"id":"{ADMIN_USER_ID}"}}"#));
    let mut page = app.page_for_cookie(Some(&cookie));

    // Act
    app.drive(&mut page, |page| page.user_rows().is_some()).await;

    // Assert
    let rows = page.user_rows().unwrap();
    assert_eq!(
        rows,
        [
            UserRow {
                label: "mooshi#0001".to_string(),
                user_id: "42".to_string(),
            },
            UserRow {
                label: "77".to_string(),
                user_id: "77".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn unreachable_server_notifies_instead_of_silently_logging() {
    // Arrange - nothing is listening on this address
    let client = Client::new("http://127.0.0.1:9".to_string());
    let mut page = ListingPage::new(SessionContext::Anonymous);

    // Act
    for _ in 0..200 {
        page.poll(&client, no_cb);
        if page.has_notifications() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    // Assert - transport failures surface to the user like any other failure
    let notification = page.take_notification().unwrap();
    assert_eq!(notification.level, NotificationLevel::Error);
    assert!(notification.message.contains("loading files"));
    assert_eq!(page.file_rows(), None);
}

#[tokio::test]
async fn listing_is_refetched_not_cached_across_refresh() {
    // Arrange
    let app = spawn_app(BackendResponses::default()).await;
    let mut page = app.page_for_cookie(None);
    app.drive(&mut page, |page| page.file_rows().is_some()).await;
    assert_eq!(app.backend.files_hits.load(Ordering::SeqCst), 1);

    // Act
    page.refresh();
    app.drive(&mut page, |page| page.file_rows().is_some()).await;

    // Assert
    assert_eq!(app.backend.files_hits.load(Ordering::SeqCst), 2);
}
