use crate::helpers::{
    get_json_response_body, mount_members, mount_members_failure, TestApp,
};

use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_display_members(app: &mut TestApp) {
    mount_members(
        app,
        json!([
            {"id": "1", "name": "Ada Lovelace Byron", "photoUrl": "https://example.com/ada.png"},
            {"id": "2", "name": "Grace"},
        ]),
    )
    .await;

    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "type": "object",
      "properties": {
        "members": {
          "type": "array",
          "items": {
            "type": "object",
            "required": ["id", "name"],
            "properties": {
              "id": { "type": "string", "minLength": 1 },
              "name": { "type": "string" },
              "role": { "type": "string" },
              "photoUrl": { "type": "string" },
              "githubUrl": { "type": "string" }
            }
          }
        },
        "error": { "type": "null" }
      },
      "required": ["members", "error"]
    });

    let response = app.get_team_data().await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_json_response_body(response).await;
    assert!(
        jsonschema::is_valid(&schema, &body),
        "response does not match schema"
    );
    assert_eq!(
        body,
        json!({
            "members": [
                {"id": "1", "name": "Ada Lovelace", "photoUrl": "https://example.com/ada.png"},
                {"id": "2", "name": "Grace"},
            ],
            "error": null
        })
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_fetch_error(app: &mut TestApp) {
    mount_members_failure(app, 404).await;

    let body = get_json_response_body(app.get_team_data().await).await;
    assert_eq!(
        body,
        json!({
            "members": null,
            "error": {"message": "Request failed with status code 404"}
        })
    );
}
