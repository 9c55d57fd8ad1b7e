use crate::helpers::{get_text_body, mount_members, TestApp};

use reqwest::header::{LOCATION, SET_COOKIE};
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_toggle_language_and_redirect(app: &mut TestApp) {
    mount_members(app, json!([])).await;

    let response = app.post_toggle("language", "/team").await;
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers()[LOCATION], "/team");

    let cookie = response.headers()[SET_COOKIE]
        .to_str()
        .expect("cookie header is ascii");
    assert!(cookie.starts_with("lang=pt"), "unexpected cookie: {cookie}");

    let body = get_text_body(app.get_team(&[]).await).await;
    assert!(body.contains("Nenhum membro ainda."));

    app.post_toggle("language", "/team").await;
    let body = get_text_body(app.get_team(&[]).await).await;
    assert!(body.contains("No members yet."));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_toggle_theme(app: &mut TestApp) {
    let body = get_text_body(app.get_home(&[]).await).await;
    assert!(body.contains(r#"data-theme="light""#));

    let response = app.post_toggle("theme", "/").await;
    assert_eq!(response.status().as_u16(), 303);

    let body = get_text_body(app.get_home(&[]).await).await;
    assert!(body.contains(r#"data-theme="dark""#));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_toggle_editing_mode(app: &mut TestApp) {
    mount_members(app, json!([])).await;

    let response = app.post_toggle("editing", "/team?menu=open").await;
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers()[LOCATION], "/team?menu=open");

    let body = get_text_body(app.get_team(&[]).await).await;
    assert!(body.contains(r#"class="link-button""#));

    app.post_toggle("editing", "/team").await;
    let body = get_text_body(app.get_team(&[]).await).await;
    assert!(!body.contains("link-button"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_for_foreign_return_path(app: &mut TestApp) {
    for return_to in [
        "https://example.com",
        "//example.com",
        "team",
        "/team\nX-Injected: 1",
    ] {
        let response = app.post_toggle("theme", return_to).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "accepted return path {return_to}"
        );
        assert!(response.headers().get(SET_COOKIE).is_none());
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_422_for_missing_return_path(app: &mut TestApp) {
    let response = app
        .http_client
        .post(format!("{}/preferences/theme", &app.address))
        .form(&[("other", "/")])
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 422);
}
