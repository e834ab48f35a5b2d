use super::*;
use crate::test_support::RecordingObserver;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;

async fn spawn_server(app: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

fn transport_for(base_url: &str, observer: Arc<RecordingObserver>) -> HttpTransport {
    let settings = ClientSettings {
        api_base_url: base_url.to_string(),
        ..ClientSettings::default()
    };
    HttpTransport::with_observer(&settings, observer).expect("transport")
}

#[tokio::test]
async fn posts_json_body_and_returns_decoded_response() {
    let app = Router::new().route(
        "/api/echo",
        post(|Json(body): Json<Value>| async move { Json(json!({ "received": body })) }),
    );
    let base_url = spawn_server(app).await;
    let observer = Arc::new(RecordingObserver::default());
    let transport = transport_for(&base_url, observer.clone());

    let value = transport
        .send(HttpMethod::Post, "/api/echo", Some(json!({ "text": "halo" })))
        .await
        .expect("send");

    assert_eq!(value, json!({ "received": { "text": "halo" } }));

    let events = observer.events();
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[0],
        TransportEvent::Request {
            method: "POST",
            path: "/api/echo".to_string(),
        }
    );
    assert!(matches!(
        &events[1],
        TransportEvent::Response { method: "POST", path, status: 200, .. } if path == "/api/echo"
    ));
}

#[tokio::test]
async fn base_url_path_prefix_is_preserved() {
    let app = Router::new().route(
        "/buddy/health",
        get(|| async { Json(json!({ "status": "healthy" })) }),
    );
    let base_url = spawn_server(app).await;
    let transport = transport_for(
        &format!("{base_url}/buddy/"),
        Arc::new(RecordingObserver::default()),
    );

    let value = transport
        .send(HttpMethod::Get, "/health", None)
        .await
        .expect("send");
    assert_eq!(value["status"], "healthy");
}

#[tokio::test]
async fn non_success_status_carries_status_and_body() {
    let app = Router::new().route(
        "/api/simplify/text",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "Error simplifying text: model offline" })),
            )
        }),
    );
    let base_url = spawn_server(app).await;
    let observer = Arc::new(RecordingObserver::default());
    let transport = transport_for(&base_url, observer.clone());

    let err = transport
        .send(HttpMethod::Post, "/api/simplify/text", Some(json!({})))
        .await
        .expect_err("500 should fail");

    assert_eq!(err.status(), Some(500));
    assert_eq!(
        err.body(),
        Some(&json!({ "detail": "Error simplifying text: model offline" }))
    );
    assert!(err.to_string().contains("model offline"));

    let events = observer.events();
    assert!(matches!(
        events.last(),
        Some(TransportEvent::Failed { status: Some(500), .. })
    ));
}

#[tokio::test]
async fn non_json_error_body_is_kept_as_text() {
    let app = Router::new().route(
        "/api/tutor/ask",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream exploded") }),
    );
    let base_url = spawn_server(app).await;
    let transport = transport_for(&base_url, Arc::new(RecordingObserver::default()));

    let err = transport
        .send(HttpMethod::Post, "/api/tutor/ask", Some(json!({})))
        .await
        .expect_err("502 should fail");

    assert_eq!(err.status(), Some(502));
    assert_eq!(err.body(), Some(&json!("upstream exploded")));
}

#[tokio::test]
async fn slow_server_times_out() {
    let app = Router::new().route(
        "/api/simplify/steps",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({}))
        }),
    );
    let base_url = spawn_server(app).await;
    let settings = ClientSettings {
        api_base_url: base_url,
        request_timeout: Duration::from_millis(150),
        ..ClientSettings::default()
    };
    let observer = Arc::new(RecordingObserver::default());
    let transport = HttpTransport::with_observer(&settings, observer.clone()).expect("transport");

    let err = transport
        .send(HttpMethod::Post, "/api/simplify/steps", Some(json!({})))
        .await
        .expect_err("should time out");

    assert!(err.is_timeout(), "unexpected error: {err}");
    assert_eq!(err.status(), None);
    assert!(matches!(
        observer.events().last(),
        Some(TransportEvent::Failed { status: None, .. })
    ));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let transport = transport_for(
        &format!("http://{addr}"),
        Arc::new(RecordingObserver::default()),
    );
    let err = transport
        .send(HttpMethod::Get, "/health", None)
        .await
        .expect_err("nothing is listening");

    assert!(matches!(err, TransportError::Network { .. }), "got {err:?}");
}

#[tokio::test]
async fn success_with_non_json_body_is_rejected() {
    let app = Router::new().route("/", get(|| async { "plain text" }));
    let base_url = spawn_server(app).await;
    let transport = transport_for(&base_url, Arc::new(RecordingObserver::default()));

    let err = transport
        .send(HttpMethod::Get, "/", None)
        .await
        .expect_err("not json");

    assert!(matches!(
        err,
        TransportError::InvalidBody { status: 200, .. }
    ));
}

#[tokio::test]
async fn truncated_error_body_still_reports_status() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            let _ = socket
                .write_all(
                    b"HTTP/1.1 503 Service Unavailable\r\ncontent-type: application/json\r\ncontent-length: 100\r\n\r\n{\"detail\":",
                )
                .await;
            let _ = socket.shutdown().await;
        }
    });

    let transport = transport_for(
        &format!("http://{addr}"),
        Arc::new(RecordingObserver::default()),
    );
    let err = transport
        .send(HttpMethod::Get, "/health", None)
        .await
        .expect_err("503 should fail");

    assert_eq!(err.status(), Some(503));
    assert_eq!(err.body(), None);
}
