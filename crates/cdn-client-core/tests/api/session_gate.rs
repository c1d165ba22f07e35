use std::sync::atomic::Ordering;

use cdn_shared::{const_config::admin::ADMIN_USER_ID, session::SessionContext};

use crate::helpers::{cookie_for_id, spawn_app, BackendResponses};

#[tokio::test]
async fn admin_cookie_triggers_users_fetch() {
    // Arrange
    let app = spawn_app(BackendResponses::default()).await;
    let cookie = cookie_for_id(&format!(r#"{{"id":"{ADMIN_USER_ID}"}}"#));
    let mut page = app.page_for_cookie(Some(&cookie));
    assert!(page.session().is_admin());

    // Act
    app.drive(&mut page, |page| {
        page.file_rows().is_some() && page.user_rows().is_some()
    })
    .await;

    // Assert
    assert_eq!(app.backend.users_hits.load(Ordering::SeqCst), 1);
    assert_eq!(app.backend.files_hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn non_admin_cookie_never_requests_users() {
    // Arrange
    let app = spawn_app(BackendResponses::default()).await;
    let cookie = cookie_for_id(r#"{"id":"1"}"#);
    let mut page = app.page_for_cookie(Some(&cookie));
    assert!(!page.session().is_admin());

    // Act
    app.drive(&mut page, |page| page.file_rows().is_some()).await;
    app.settle(&mut page).await;

    // Assert - files fetched, users never requested (not merely hidden)
    assert_eq!(app.backend.files_hits.load(Ordering::SeqCst), 1);
    assert_eq!(app.backend.users_hits.load(Ordering::SeqCst), 0);
    assert_eq!(page.user_rows(), None);
}

#[tokio::test]
async fn missing_cookie_never_requests_users() {
    // Arrange
    let app = spawn_app(BackendResponses::default()).await;
    let mut page = app.page_for_cookie(None);
    assert_eq!(page.session(), &SessionContext::Anonymous);

    // Act
    app.drive(&mut page, |page| page.file_rows().is_some()).await;
    app.settle(&mut page).await;

    // Assert
    assert_eq!(app.backend.users_hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_cookie_does_not_break_page_init() {
    // Arrange
    let app = spawn_app(BackendResponses::default()).await;
    let mut page = app.page_for_cookie(Some("definitely not base64 json"));

    // Act - the page still loads as anonymous
    app.drive(&mut page, |page| page.file_rows().is_some()).await;

    // Assert
    assert_eq!(page.session(), &SessionContext::Anonymous);
    assert_eq!(app.backend.users_hits.load(Ordering::SeqCst), 0);
}
