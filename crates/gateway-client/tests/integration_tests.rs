//! Integration tests for gateway-client
//!
//! These tests spin up mock gateways and drive the client and the probe
//! runner against them, so the wire behavior (one GET per probe, verbatim
//! query parameters, print-on-any-status, abort-on-transport-failure)
//! stays pinned down.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::routing::get;
use axum::Router;
use pretty_assertions::assert_eq;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use gateway_client::runner::{self, RecordingSink};
use gateway_client::testing::TestServer;
use gateway_client::{smoke_suite, GatewayClient, Probe, ProbeSection};

// =============================================================================
// Mock Gateway
// =============================================================================

/// Requests seen by the mock gateway, in arrival order
#[derive(Clone, Default)]
struct SeenRequests {
    inner: Arc<Mutex<Vec<(String, String)>>>,
}

impl SeenRequests {
    fn record(&self, uri: &Uri) {
        self.inner.lock().unwrap().push((
            uri.path().to_string(),
            uri.query().unwrap_or_default().to_string(),
        ));
    }

    fn paths(&self) -> Vec<String> {
        self.inner.lock().unwrap().iter().map(|(p, _)| p.clone()).collect()
    }

    fn query_for(&self, path: &str) -> Option<String> {
        self.inner
            .lock()
            .unwrap()
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, q)| q.clone())
    }
}

async fn record_and_answer(
    State(seen): State<SeenRequests>,
    uri: Uri,
) -> (StatusCode, axum::Json<serde_json::Value>) {
    seen.record(&uri);
    (StatusCode::OK, axum::Json(serde_json::json!({"result": "ok"})))
}

/// A gateway that answers every path with `{"result":"ok"}` and remembers
/// everything it was asked.
fn recording_router(seen: SeenRequests) -> Router {
    Router::new().fallback(record_and_answer).with_state(seen)
}

fn section(title: &str, probes: Vec<Probe>) -> ProbeSection {
    ProbeSection::new(title, probes)
}

// =============================================================================
// Endpoint Methods
// =============================================================================

#[tokio::test]
async fn test_ping_api_returns_raw_body() {
    let router = Router::new().route("/api/pingApi", get(|| async { "OK" }));
    let server = TestServer::start(router).await.expect("start server");

    let response = server.client.ping_api().await.expect("ping");
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "OK");
}

#[tokio::test]
async fn test_block_hash_query_encoding() {
    let seen = SeenRequests::default();
    let server = TestServer::start(recording_router(seen.clone()))
        .await
        .expect("start server");

    server
        .client
        .chain_block_hash(Some(36430))
        .await
        .expect("block hash");

    let query = seen.query_for("/api/rpc/chain/getBlockHash").unwrap();
    assert!(
        query.contains("websocket=ws%3A%2F%2F1.2.3.4%3A9944"),
        "websocket not encoded verbatim: {}",
        query
    );
    assert!(query.contains("block_number=36430"), "query: {}", query);
}

#[tokio::test]
async fn test_typed_methods_hit_expected_paths() {
    let seen = SeenRequests::default();
    let server = TestServer::start(recording_router(seen.clone()))
        .await
        .expect("start server");
    let client = server.client();

    client.ping_node().await.unwrap();
    client.system_health().await.unwrap();
    client.staking_eras_reward_points(Some(630)).await.unwrap();
    client
        .slash_amount("HsGrsqL4nCBCW2ovc4kKG98c4mFp99BHRFkBSRZW1ETDe3U", None)
        .await
        .unwrap();
    client.derive_staking_validators().await.unwrap();

    assert_eq!(
        seen.paths(),
        vec![
            "/api/pingNode",
            "/api/rpc/system/health",
            "/api/query/staking/erasRewardPoints",
            "/api/custom/getSlashAmount",
            "/api/derive/staking/validators",
        ]
    );

    let reward_query = seen
        .query_for("/api/query/staking/erasRewardPoints")
        .unwrap();
    assert!(reward_query.contains("era_index=630"));

    let slash_query = seen.query_for("/api/custom/getSlashAmount").unwrap();
    assert!(slash_query
        .contains("account_address=HsGrsqL4nCBCW2ovc4kKG98c4mFp99BHRFkBSRZW1ETDe3U"));
    assert!(!slash_query.contains("block_hash"));
}

#[tokio::test]
async fn test_non_2xx_is_not_an_error() {
    let router = Router::new().route(
        "/api/query/session/validators",
        get(|| async {
            (
                StatusCode::BAD_REQUEST,
                r#"{"error":"An API for ws://2.3.4.5:9944 needs to be setup before it can be queried"}"#,
            )
        }),
    );
    let server = TestServer::start(router).await.expect("start server");

    let probe = Probe::new("/api/query/session/validators").param("websocket", "ws://2.3.4.5:9944");
    let response = server.client.probe(&probe).await.expect("probe");

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!response.is_success());
    assert!(response.body.contains("needs to be setup"));
}

// =============================================================================
// Probe Runner
// =============================================================================

#[tokio::test]
async fn test_runner_one_get_per_probe_in_declaration_order() {
    let seen = SeenRequests::default();
    let server = TestServer::start(recording_router(seen.clone()))
        .await
        .expect("start server");

    let sections = vec![
        section(
            "Status",
            vec![
                Probe::new("/api/pingApi"),
                Probe::new("/api/pingNode").param("websocket", "ws://1.2.3.4:9944"),
            ],
        ),
        section(
            "Chain",
            vec![Probe::new("/api/rpc/chain/getFinalizedHead")
                .param("websocket", "ws://1.2.3.4:9944")],
        ),
    ];

    let mut sink = RecordingSink::default();
    let summary = runner::run(server.client(), &sections, &mut sink)
        .await
        .expect("run");

    assert_eq!(summary.sections, 2);
    assert_eq!(summary.probes, 3);
    assert_eq!(sink.sections, vec!["Status", "Chain"]);
    assert_eq!(
        seen.paths(),
        vec![
            "/api/pingApi",
            "/api/pingNode",
            "/api/rpc/chain/getFinalizedHead",
        ]
    );
}

#[tokio::test]
async fn test_runner_is_stateless_between_runs() {
    let seen = SeenRequests::default();
    let server = TestServer::start(recording_router(seen.clone()))
        .await
        .expect("start server");

    let sections = vec![section("Status", vec![Probe::new("/api/pingApi")])];

    let mut first = RecordingSink::default();
    runner::run(server.client(), &sections, &mut first)
        .await
        .expect("first run");
    let mut second = RecordingSink::default();
    runner::run(server.client(), &sections, &mut second)
        .await
        .expect("second run");

    assert_eq!(first.responses, second.responses);
    assert_eq!(seen.paths().len(), 2);
}

#[tokio::test]
async fn test_runner_continues_after_server_error() {
    let router = Router::new()
        .route("/api/pingApi", get(|| async { "pong" }))
        .route(
            "/api/query/council/members",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    r#"{"error":"storage unavailable"}"#,
                )
            }),
        )
        .route("/api/query/session/validators", get(|| async { r#"["v1"]"# }));
    let server = TestServer::start(router).await.expect("start server");

    let ws = "ws://1.2.3.4:9944";
    let sections = vec![section(
        "Mixed",
        vec![
            Probe::new("/api/pingApi"),
            Probe::new("/api/query/council/members").param("websocket", ws),
            Probe::new("/api/query/session/validators").param("websocket", ws),
        ],
    )];

    let mut sink = RecordingSink::default();
    let summary = runner::run(server.client(), &sections, &mut sink)
        .await
        .expect("run survives the 500");

    assert_eq!(summary.probes, 3);
    let statuses: Vec<u16> = sink.responses.iter().map(|(_, s, _)| *s).collect();
    assert_eq!(statuses, vec![200, 500, 200]);
    assert_eq!(sink.responses[1].2, r#"{"error":"storage unavailable"}"#);
}

#[tokio::test]
async fn test_runner_aborts_when_connection_refused() {
    // Bind a port, then free it again so nothing answers there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GatewayClient::new(&format!("http://{}", addr), "ws://1.2.3.4:9944").unwrap();

    let sections = vec![section(
        "Status",
        vec![
            Probe::new("/api/pingApi"),
            Probe::new("/api/getConnectionsList"),
        ],
    )];

    let mut sink = RecordingSink::default();
    let result = runner::run(&client, &sections, &mut sink).await;

    assert!(result.is_err());
    assert!(sink.responses.is_empty());
}

/// Answer `n` HTTP requests on a raw socket (one connection each, with
/// `Connection: close`), then stop listening entirely.
async fn serve_n_then_refuse(n: usize) -> std::net::SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        for _ in 0..n {
            let (mut stream, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => return,
            };

            // Read until the end of the request headers
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                match stream.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(k) => {
                        request.extend_from_slice(&buf[..k]);
                        if request.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                }
            }

            let body = r#"{"result":"ok"}"#;
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
        // Listener drops here; later connections are refused.
    });

    addr
}

#[tokio::test]
async fn test_runner_stops_after_backend_goes_away() {
    let addr = serve_n_then_refuse(2).await;
    let client = GatewayClient::new(&format!("http://{}", addr), "ws://1.2.3.4:9944").unwrap();

    let ws = "ws://1.2.3.4:9944";
    let sections = vec![section(
        "Status",
        vec![
            Probe::new("/api/pingApi"),
            Probe::new("/api/pingNode").param("websocket", ws),
            Probe::new("/api/getConnectionsList"),
            Probe::new("/api/rpc/system/chain").param("websocket", ws),
        ],
    )];

    let mut sink = RecordingSink::default();
    let result = runner::run(&client, &sections, &mut sink).await;

    assert!(result.is_err(), "third probe should hit a dead backend");
    assert_eq!(sink.responses.len(), 2);
    assert_eq!(sink.responses[0].0, "/api/pingApi");
    assert_eq!(sink.responses[1].0, "/api/pingNode");
}

// =============================================================================
// Smoke Suite End-to-End
// =============================================================================

#[tokio::test]
async fn test_smoke_suite_walks_whole_surface() {
    let seen = SeenRequests::default();
    let server = TestServer::start(recording_router(seen.clone()))
        .await
        .expect("start server");

    let suite = smoke_suite(server.client().websocket());
    let mut sink = RecordingSink::default();
    let summary = runner::run(server.client(), &suite, &mut sink)
        .await
        .expect("run suite");

    assert_eq!(summary.sections, 15);
    assert_eq!(summary.probes, 42);
    assert_eq!(seen.paths().len(), 42);
    assert_eq!(seen.paths().first().map(String::as_str), Some("/api/pingApi"));
    assert_eq!(
        seen.paths().last().map(String::as_str),
        Some("/api/query/session/validators")
    );
    assert!(sink
        .responses
        .iter()
        .all(|(_, status, body)| *status == 200 && body.as_str() == r#"{"result":"ok"}"#));

    // The final probe deliberately names a connection the gateway lacks
    let last_query = seen
        .inner
        .lock()
        .unwrap()
        .last()
        .map(|(_, q)| q.clone())
        .unwrap();
    assert!(last_query.contains("websocket=ws%3A%2F%2F2.3.4.5%3A9944"));
}
