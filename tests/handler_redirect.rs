mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use link_shortener::api::handlers::redirect_handler;
use link_shortener::state::AppState;

fn create_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let state = common::create_test_state();
    let link = common::create_test_link(&state, "https://example.com/a/b").await;
    let server = create_server(state);

    let response = server.get(&format!("/{}", link.code)).await;

    response.assert_status(axum::http::StatusCode::FOUND);
    let location = response.header("location");
    assert_eq!(location, "https://example.com/a/b");
}

#[tokio::test]
async fn test_redirect_counts_each_click() {
    let state = common::create_test_state();
    let link = common::create_test_link(&state, "https://example.com").await;
    let server = create_server(state.clone());

    for _ in 0..3 {
        server
            .get(&format!("/{}", link.code))
            .await
            .assert_status(axum::http::StatusCode::FOUND);
    }

    let stats = state.link_service.stats(&link.code).await.unwrap();
    assert_eq!(stats.click_count, 3);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let state = common::create_test_state();
    let server = create_server(state.clone());

    let response = server.get("/nope12").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["short_code"], "nope12");
    assert_eq!(state.link_service.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_redirect_codes_are_case_sensitive() {
    let state = common::create_test_state();
    let link = common::create_test_link(&state, "https://example.com").await;
    let server = create_server(state);

    let flipped: String = link
        .code
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect();

    // Codes made only of digits have no other case.
    if flipped != link.code {
        server.get(&format!("/{}", flipped)).await.assert_status_not_found();
    }
}
