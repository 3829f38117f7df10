use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use tower::ServiceExt;

fn app() -> axum::Router {
    let state = dc_console::router::ConsoleState::default();
    dc_console::router::console_router(state)
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}

#[tokio::test]
async fn data_route_before_login_returns_not_initialized() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/projects")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_string(resp).await;
    assert!(body.contains(r#""code":"NOT_INITIALIZED""#));
    assert!(body.contains("Database not initialized. Please login again."));
}

#[tokio::test]
async fn logout_succeeds_with_no_active_session_and_is_idempotent() {
    let app = app();

    for _ in 0..2 {
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/auth/logout")
                    .body(Body::empty())
                    .expect("failed to build request"),
            )
            .await
            .expect("request failed");

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains(r#""success":true"#));
    }
}

#[tokio::test]
async fn login_against_refused_port_surfaces_connection_error() {
    // Nothing listens on port 1; the connect is refused immediately.
    let credentials = r#"{
        "host": "127.0.0.1",
        "port": 1,
        "database": "pgcompare",
        "user": "admin",
        "password": "pw"
    }"#;

    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("content-type", "application/json")
                .body(Body::from(credentials))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_string(resp).await;
    assert!(body.contains(r#""code":"CONNECTION_FAILED""#));
}

#[tokio::test]
async fn session_status_reports_disconnected_default_schema() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/auth/session")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains(r#""connected":false"#));
    assert!(body.contains(r#""schema":"pgcompare""#));
}

#[tokio::test]
async fn create_project_with_blank_name_is_rejected_before_data_access() {
    // Validation runs ahead of session lookup, so no login is needed.
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/projects")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"project_name":""}"#))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_string(resp).await;
    assert!(body.contains("Project name is required"));
}
