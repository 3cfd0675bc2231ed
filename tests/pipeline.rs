//! Request pipeline integration: screen controller -> fetch worker -> HTTP
//! transport -> outcome applied to state, against a local stub server.

use std::sync::Arc;
use std::time::Duration;

use newsq::app::spawn_fetch_worker;
use newsq::logic::{apply_outcome, trigger};
use newsq::sources::{HttpTransport, Transport};
use newsq::state::{AppState, Endpoint, LoadPhase, ResponseStatus, Screen};
use newsq::theme::Settings;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::{mpsc, oneshot};

/// What: Serve one canned HTTP response and report the request line.
///
/// Output:
/// - `host:port` of the stub and a receiver for the first request line.
async fn serve_once(response: String) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("local addr");
    let (line_tx, line_rx) = oneshot::channel();
    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = vec![0; 8192];
            let n = socket.read(&mut buf).await.unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let _ = line_tx.send(request.lines().next().unwrap_or_default().to_string());
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });
    (addr.to_string(), line_rx)
}

fn local_app(authority: &str) -> (AppState, Arc<dyn Transport>) {
    let app = AppState {
        endpoint: Endpoint {
            scheme: "http".to_string(),
            authority: authority.to_string(),
        },
        ..AppState::default()
    };
    let settings = Settings {
        api_scheme: "http".to_string(),
        api_authority: authority.to_string(),
        ..Settings::default()
    };
    let transport: Arc<dyn Transport> =
        Arc::new(HttpTransport::from_settings(&settings).expect("build client"));
    (app, transport)
}

#[tokio::test]
/// What: A 503 from the API surfaces as an HTTP error message on the screen.
///
/// Inputs:
/// - Stub server answering `503 Service Unavailable`.
///
/// Output:
/// - World screen ends `Failed`, empty, with message `503 Service Unavailable`.
async fn service_unavailable_reaches_the_screen() {
    let (authority, _line) = serve_once(
        "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
            .to_string(),
    )
    .await;
    let (mut app, transport) = local_app(&authority);
    let (req_tx, req_rx) = mpsc::unbounded_channel();
    let (out_tx, mut out_rx) = mpsc::unbounded_channel();
    let _worker = spawn_fetch_worker(req_rx, out_tx, transport, Duration::ZERO);

    assert!(trigger(&mut app, Screen::World, &req_tx));
    assert_eq!(app.world.phase, LoadPhase::Loading);

    let outcome = tokio::time::timeout(Duration::from_secs(5), out_rx.recv())
        .await
        .expect("outcome in time")
        .expect("worker alive");
    assert_eq!(
        outcome.result,
        Err(ResponseStatus::HttpError {
            code: 503,
            message: "Service Unavailable".to_string(),
        })
    );
    assert!(apply_outcome(&mut app, outcome));
    assert_eq!(app.world.phase, LoadPhase::Failed);
    assert!(app.world.stories.is_empty());
    assert_eq!(app.world.message.as_deref(), Some("503 Service Unavailable"));
}

#[tokio::test]
/// What: A successful World listing lands in state with the expected request.
///
/// Inputs:
/// - Stub server returning two stories.
///
/// Output:
/// - Request targets `/world` with listing parameters and one `api-key`;
///   the screen holds both stories with the first selected.
async fn world_listing_is_delivered() {
    let body = r#"{"response":{"status":"ok","results":[
        {"id":"world/a","sectionId":"world","sectionName":"World news","webPublicationDate":"2025-10-11T10:00:00Z","webTitle":"First","webUrl":"https://www.theguardian.com/world/a","apiUrl":"https://content.guardianapis.com/world/a","fields":{"headline":"First headline"}},
        {"id":"world/b","sectionId":"world","sectionName":"World news","webPublicationDate":"2025-10-11T09:00:00Z","webTitle":"Second","webUrl":"https://www.theguardian.com/world/b","apiUrl":"https://content.guardianapis.com/world/b"}
    ]}}"#;
    let (authority, line) = serve_once(format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    ))
    .await;
    let (mut app, transport) = local_app(&authority);
    let (req_tx, req_rx) = mpsc::unbounded_channel();
    let (out_tx, mut out_rx) = mpsc::unbounded_channel();
    let _worker = spawn_fetch_worker(req_rx, out_tx, transport, Duration::ZERO);

    trigger(&mut app, Screen::World, &req_tx);
    let outcome = tokio::time::timeout(Duration::from_secs(5), out_rx.recv())
        .await
        .expect("outcome in time")
        .expect("worker alive");
    assert!(apply_outcome(&mut app, outcome));

    let request_line = line.await.expect("request seen");
    assert!(request_line.starts_with("GET /world?"), "{request_line}");
    assert!(request_line.contains("page-size=30"));
    assert_eq!(request_line.matches("api-key=").count(), 1);

    assert_eq!(app.world.phase, LoadPhase::Delivered);
    assert_eq!(app.world.stories.len(), 2);
    assert_eq!(app.world.stories[0].display_headline(), "First headline");
    assert_eq!(app.world.stories[1].display_headline(), "Second");
    assert_eq!(app.world.selected(), Some(0));
}
