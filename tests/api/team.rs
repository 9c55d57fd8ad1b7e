use crate::helpers::{
    count_member_cards, get_text_body, mount_members, mount_members_failure,
    TestApp,
};

use serde_json::json;
use std::time::Duration;
use test_context::test_context;
use wiremock::{matchers::path, Mock, ResponseTemplate};

#[test_context(TestApp)]
#[tokio::test]
async fn should_render_shortened_names(app: &mut TestApp) {
    mount_members(app, json!([{"id": "1", "name": "Ada Lovelace Byron"}])).await;

    let response = app.get_team(&[]).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_text_body(response).await;
    assert_eq!(count_member_cards(&body), 1);
    assert!(body.contains(r#"data-key="1""#));
    assert!(body.contains(">Ada Lovelace<"));
    assert!(!body.contains("Byron"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_keep_single_word_names(app: &mut TestApp) {
    mount_members(app, json!([{"id": "2", "name": "Grace"}])).await;

    let body = get_text_body(app.get_team(&[]).await).await;
    assert_eq!(count_member_cards(&body), 1);
    assert!(body.contains(r#"data-key="2""#));
    assert!(body.contains(">Grace<"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_keep_order_and_duplicate_ids(app: &mut TestApp) {
    mount_members(
        app,
        json!([
            {"id": "b", "name": "Grace Brewster Hopper", "role": "Mentor"},
            {"id": "a", "name": "Alan Turing"},
            {"id": "a", "name": "Alan Twin"},
        ]),
    )
    .await;

    let body = get_text_body(app.get_team(&[]).await).await;
    assert_eq!(count_member_cards(&body), 3);
    assert_eq!(body.matches(r#"data-key="a""#).count(), 2);

    let grace = body.find(">Grace Brewster<").expect("Grace is rendered");
    let alan = body.find(">Alan Turing<").expect("Alan is rendered");
    let twin = body.find(">Alan Twin<").expect("Alan Twin is rendered");
    assert!(grace < alan && alan < twin, "cards are out of order");
    assert!(body.contains(">Mentor<"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_render_empty_message(app: &mut TestApp) {
    mount_members(app, json!([])).await;

    let body = get_text_body(app.get_team(&[]).await).await;
    assert_eq!(count_member_cards(&body), 0);
    assert!(body.contains("No members yet."));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_render_localized_empty_message(app: &mut TestApp) {
    mount_members(app, json!([])).await;

    let body = get_text_body(app.get_team_with_cookie("lang=pt").await).await;
    assert!(body.contains("Nenhum membro ainda."));
    assert!(body.contains(r#"<html lang="pt""#));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_render_error_message_without_cards(app: &mut TestApp) {
    mount_members_failure(app, 500).await;

    let response = app.get_team(&[]).await;
    assert_eq!(
        response.status().as_u16(),
        200,
        "fetch failures must not fail the page"
    );

    let body = get_text_body(response).await;
    assert!(body.contains(
        r#"<p class="fetch-error">Request failed with status code 500</p>"#
    ));
    assert_eq!(count_member_cards(&body), 0);
    assert!(!body.contains("No members yet."));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_render_error_for_malformed_listing(app: &mut TestApp) {
    mount_members(app, json!({"unexpected": true})).await;

    let body = get_text_body(app.get_team(&[]).await).await;
    assert!(body.contains("Member service returned a malformed listing"));
    assert_eq!(count_member_cards(&body), 0);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_fetch_once_within_revalidation_window(app: &mut TestApp) {
    Mock::given(path("/members"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": "1", "name": "Ada"}])),
        )
        .expect(1)
        .mount(&app.members_server)
        .await;

    for _ in 0..3 {
        let body = get_text_body(app.get_team(&[]).await).await;
        assert_eq!(count_member_cards(&body), 1);
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_show_add_button_only_in_editing_mode(app: &mut TestApp) {
    mount_members(app, json!([])).await;

    let body = get_text_body(app.get_team(&[]).await).await;
    assert!(!body.contains("link-button"));

    let body =
        get_text_body(app.get_team_with_cookie("editing-mode=true").await).await;
    assert!(body.contains(r#"class="link-button""#));
    assert!(body.contains(">+</a>"));
}

#[tokio::test]
async fn should_regenerate_after_revalidation_interval() {
    let app = TestApp::with_revalidate(Duration::ZERO).await;
    Mock::given(path("/members"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": "1", "name": "Ada Lovelace"}])),
        )
        .up_to_n_times(1)
        .mount(&app.members_server)
        .await;
    mount_members(&app, json!([{"id": "2", "name": "Grace Hopper"}])).await;

    let body = get_text_body(app.get_team(&[]).await).await;
    assert!(body.contains(">Ada Lovelace<"));

    let mut refreshed = false;
    for _ in 0..50 {
        let body = get_text_body(app.get_team(&[]).await).await;
        if body.contains(">Grace Hopper<") {
            refreshed = true;
            break;
        }
        assert!(body.contains(">Ada Lovelace<"), "stale page is served");
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert!(refreshed, "team page was never regenerated");
}
