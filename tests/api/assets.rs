use crate::helpers::TestApp;

use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_serve_stylesheet(app: &mut TestApp) {
    let response = app.get_path("/assets/site.css").await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.headers()["content-type"], "text/css");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_missing_asset(app: &mut TestApp) {
    let response = app.get_path("/assets/missing.css").await;
    assert_eq!(response.status().as_u16(), 404);
}
