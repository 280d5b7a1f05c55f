//! Integration tests for `ApiClient` against an in-process axum server.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use catalog::{ApiClient, ApiConfig, ApiError, CreateTarget, SelectOption};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

fn client(base: &str) -> ApiClient {
    ApiClient::new(ApiConfig::new(base)).expect("client")
}

#[tokio::test]
async fn fetches_category_tree() {
    let router = Router::new().route(
        "/categories",
        get(|| async {
            Json(json!([
                {"id": 1, "title": "Lighting", "subcategories": [
                    {"id": 7, "title": "Lamps", "categoryId": 1}
                ]}
            ]))
        }),
    );
    let base = serve(router).await;

    let categories = client(&base).categories().await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].subcategories[0].id, 7);
}

#[tokio::test]
async fn scoped_fetches_use_subcategory_id() {
    let router = Router::new()
        .route(
            "/categories/subcategory/{id}/features",
            get(|Path(id): Path<i64>| async move {
                Json(json!([{
                    "id": id * 10,
                    "title": "Color",
                    "variant": "select",
                    "possibleValues": [{"id": 10, "value": "Red"}]
                }]))
            }),
        )
        .route(
            "/categories/subcategory/{id}/use-cases",
            get(|Path(id): Path<i64>| async move { Json(json!([{"id": id, "title": "Indoor"}])) }),
        );
    let base = serve(router).await;
    let api = client(&base);

    let features = api.feature_types(3).await.unwrap();
    assert_eq!(features[0].id, 30);
    assert_eq!(features[0].options(), vec![SelectOption::new("Red", 10)]);

    let use_cases = api.use_cases(4).await.unwrap();
    assert_eq!(use_cases[0].id, 4);
}

#[tokio::test]
async fn create_option_posts_field_and_returns_option() {
    let seen: Arc<Mutex<Vec<Value>>> = Arc::default();
    let router = Router::new()
        .route(
            "/product-features/{id}/values",
            post(
                |State(seen): State<Arc<Mutex<Vec<Value>>>>, Json(body): Json<Value>| async move {
                    let label = body["value"].as_str().unwrap_or_default().to_string();
                    seen.lock().unwrap().push(body);
                    Json(json!({"label": label, "value": 11}))
                },
            ),
        )
        .with_state(seen.clone());
    let base = serve(router).await;

    let created = client(&base)
        .create_option(&CreateTarget::FeatureValue { feature_id: 1 }, "Blue")
        .await
        .unwrap();

    assert_eq!(created, SelectOption::new("Blue", 11));
    assert_eq!(*seen.lock().unwrap(), vec![json!({"value": "Blue"})]);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let router = Router::new().route(
        "/categories/subcategory/{id}/labels",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = serve(router).await;

    let err = client(&base).labels(1).await.unwrap_err();
    match err {
        ApiError::Status { status, body, .. } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let router = Router::new().route(
        "/categories/subcategory/{id}/standards",
        get(|| async { Json(json!({"not": "a list"})) }),
    );
    let base = serve(router).await;

    let err = client(&base).standards(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }), "{err}");
}

#[tokio::test]
async fn interceptor_runs_on_every_request() {
    let router = Router::new().route(
        "/categories",
        get(|headers: HeaderMap| async move {
            if headers.get("x-editor-session").is_some() {
                (StatusCode::OK, Json(json!([])))
            } else {
                (StatusCode::UNAUTHORIZED, Json(json!({"error": "missing"})))
            }
        }),
    );
    let base = serve(router).await;

    let plain = client(&base);
    let err = plain.categories().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));

    let intercepted = client(&base)
        .with_interceptor(|req: reqwest::RequestBuilder| req.header("x-editor-session", "1"));
    assert!(intercepted.categories().await.unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}")).categories().await.unwrap_err();
    assert!(err.is_transport(), "{err}");
}
