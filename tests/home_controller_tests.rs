use axum::{
    Router,
    http::{Request, StatusCode},
    routing::get,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use bandwatch::{AppState, config::Settings, controllers::home_controller, routes, services};

fn test_state() -> AppState {
    // No request in this file ever reaches an upstream, so the URLs only
    // need to be well-formed.
    let settings = Settings {
        supabase_url: "http://127.0.0.1:1".to_string(),
        supabase_key: "test-key".to_string(),
        market_data_url: "http://127.0.0.1:1".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
    };

    let registry = services::registry::RegistryClient::new(
        settings.supabase_url.clone(),
        settings.supabase_key.clone(),
    );
    let market = services::market_data::MarketDataClient::new(settings.market_data_url.clone());

    AppState {
        settings,
        registry,
        market,
    }
}

async fn response_body_json(res: axum::response::Response) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_returns_status_payload() {
    let app = Router::new().route("/", get(home_controller::root));

    let req = Request::builder()
        .uri("/")
        .body(axum::body::Body::empty())
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = response_body_json(res).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn health_returns_ok() {
    let app = Router::new().route("/health", get(home_controller::health));

    let req = Request::builder()
        .uri("/health")
        .body(axum::body::Body::empty())
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn unknown_path_returns_404_detail() {
    let app = routes::app(test_state());

    let req = Request::builder()
        .uri("/no-such-page")
        .body(axum::body::Body::empty())
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = response_body_json(res).await;
    assert_eq!(body["detail"], "not found");
}
