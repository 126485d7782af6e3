mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, post_json, setup_test_app};

#[tokio::test]
async fn test_estimate_base_and_addons() {
    let (app, _) = setup_test_app();

    let response = app
        .oneshot(post_json(
            "/estimate",
            &json!({
                "arch": "upper",
                "selected_teeth": ["U1", "U2"],
                "per_tooth": [{"tooth_id": "U1", "addons": ["heart"]}]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["currency"], "USD");
    assert_eq!(body["total"], json!(120.0));
    assert_eq!(
        body["breakdown"],
        json!([
            {"label": "Base (2 teeth)", "amount": 100.0},
            {"label": "Add-ons", "amount": 20.0}
        ])
    );
    assert!(body["disclaimer"].as_str().is_some_and(|d| !d.is_empty()));
}

#[tokio::test]
async fn test_estimate_rejects_unselected_tooth() {
    let (app, _) = setup_test_app();

    let response = app
        .oneshot(post_json(
            "/estimate",
            &json!({
                "arch": "upper",
                "selected_teeth": ["U1"],
                "per_tooth": [{"tooth_id": "U2"}]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "per_tooth tooth_id 'U2' is not in selected_teeth"
    );
}

#[tokio::test]
async fn test_estimate_rejects_empty_selection() {
    let (app, _) = setup_test_app();

    let response = app
        .oneshot(post_json(
            "/estimate",
            &json!({"arch": "lower", "selected_teeth": []}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("selected_teeth must contain at least one tooth")
    );
}

#[tokio::test]
async fn test_estimate_rejects_unknown_arch() {
    let (app, _) = setup_test_app();

    let response = app
        .oneshot(post_json(
            "/estimate",
            &json!({"arch": "middle", "selected_teeth": ["U1"]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_estimate_requires_arch() {
    let (app, _) = setup_test_app();

    let response = app
        .oneshot(post_json("/estimate", &json!({"selected_teeth": ["U1"]})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "arch is required");
}

#[tokio::test]
async fn test_estimate_is_deterministic() {
    let (app, _) = setup_test_app();
    let request = json!({
        "arch": "both",
        "selected_teeth": ["U1", "U2", "L1"],
        "per_tooth": [
            {"tooth_id": "U1", "addons": ["heart", "unknown-addon"]},
            {"tooth_id": "L1", "addons": ["heart"]}
        ]
    });

    let first = body_json(app.clone().oneshot(post_json("/estimate", &request)).await.unwrap()).await;
    let second = body_json(app.oneshot(post_json("/estimate", &request)).await.unwrap()).await;

    assert_eq!(first, second);
    assert_eq!(first["total"], json!(190.0));
}
