use crate::helpers::{get_text_body, TestApp};

use reqwest::header::ACCEPT_LANGUAGE;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_render_navbar_and_call_to_action(app: &mut TestApp) {
    let response = app.get_home(&[]).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_text_body(response).await;
    assert!(body.contains(r#"<header class="navbar""#));
    assert!(body.contains(r#"<span class="accent">together</span>"#));
    assert!(body.contains(">Get started<"));
    assert!(body.contains(">Join<"));
    assert!(!body.contains("modal-overlay"));
    assert!(!body.contains("mobile-menu"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_open_join_modal_from_query(app: &mut TestApp) {
    let body = get_text_body(app.get_home(&[("modal", "join")]).await).await;
    assert!(body.contains("modal-overlay"));
    assert!(body.contains(">Join PodCodar<"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_ignore_unknown_modal(app: &mut TestApp) {
    let body = get_text_body(app.get_home(&[("modal", "other")]).await).await;
    assert!(!body.contains("modal-overlay"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_open_mobile_menu_from_query(app: &mut TestApp) {
    let body = get_text_body(app.get_home(&[("menu", "open")]).await).await;
    assert!(body.contains(r#"class="mobile-menu""#));
    assert!(body.contains("Close Menu"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_reject_unknown_menu_state(app: &mut TestApp) {
    let response = app.get_home(&[("menu", "sideways")]).await;
    assert_eq!(response.status().as_u16(), 400);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_negotiate_portuguese(app: &mut TestApp) {
    let response = app
        .http_client
        .get(format!("{}/", &app.address))
        .header(ACCEPT_LANGUAGE, "pt-BR,pt;q=0.9")
        .send()
        .await
        .expect("Failed to execute request");

    let body = get_text_body(response).await;
    assert!(body.contains(">Começar<"));
    assert!(body.contains(r#"<span class="accent">junto</span>"#));
}
