use axum::{Router, routing::get};
use axum_test::TestServer;
use wikiviews::api::handlers::{healthcheck_handler, ping_handler};

fn server() -> TestServer {
    let app = Router::new()
        .route("/healthcheck", get(healthcheck_handler))
        .route("/ping", get(ping_handler));

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_healthcheck() {
    let response = server().get("/healthcheck").await;

    response.assert_status_ok();
    response.assert_text("ok");
}

#[tokio::test]
async fn test_ping() {
    let response = server().get("/ping").await;

    response.assert_status_ok();
    response.assert_text("pong");
}
