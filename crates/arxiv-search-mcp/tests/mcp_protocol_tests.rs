//! Tests for MCP protocol JSON-RPC handling.
//!
//! Covers dispatch in `McpServer`, the stdio loop and the HTTP router.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use arxiv_search_mcp::client::ArxivSearchClient;
use arxiv_search_mcp::config::Config;
use arxiv_search_mcp::server::transport::{JsonRpcRequest, create_router};
use arxiv_search_mcp::server::{McpServer, stdio};

fn server_for(uri: &str) -> McpServer {
    let client = ArxivSearchClient::new(Config::for_testing(uri)).unwrap();
    McpServer::new(client)
}

fn offline_server() -> McpServer {
    server_for("http://127.0.0.1:1")
}

fn request(value: Value) -> JsonRpcRequest {
    serde_json::from_value(value).unwrap()
}

async fn dispatch(server: &McpServer, value: Value) -> Value {
    let response = server.handle_request(&request(value)).await.expect("expected a response");
    serde_json::to_value(response).unwrap()
}

/// Find the response with the given id.
fn by_id(responses: &[Value], id: i64) -> &Value {
    responses.iter().find(|r| r["id"] == id).unwrap_or_else(|| panic!("no response for id {id}"))
}

/// Run the stdio loop over `input` and return one JSON value per output line,
/// in the order they were written.
async fn run_stdio(server: McpServer, input: &str) -> Vec<Value> {
    let mut output = Vec::new();
    stdio::serve(Arc::new(server), input.as_bytes(), &mut output).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

// =============================================================================
// Dispatch
// =============================================================================

#[tokio::test]
async fn test_initialize_echoes_protocol_version() {
    let server = offline_server();
    let response = dispatch(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {"protocolVersion": "2025-03-26"}
        }),
    )
    .await;

    assert_eq!(response["id"], 1);
    assert_eq!(response["result"]["protocolVersion"], "2025-03-26");
    assert_eq!(response["result"]["serverInfo"]["name"], "arxiv-search");
    assert!(response["result"]["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn test_initialize_defaults_protocol_version() {
    let server = offline_server();
    let response =
        dispatch(&server, json!({"jsonrpc": "2.0", "id": 1, "method": "initialize"})).await;
    assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
}

#[tokio::test]
async fn test_tools_list() {
    let server = offline_server();
    let response =
        dispatch(&server, json!({"jsonrpc": "2.0", "id": "a", "method": "tools/list"})).await;

    let tools = response["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0]["name"], "search_paper");
    assert_eq!(tools[0]["inputSchema"]["required"], json!(["search_term"]));
    assert!(!tools[0]["description"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_tools_call_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"title": "Paper A"}])))
        .mount(&mock_server)
        .await;

    let server = server_for(&mock_server.uri());
    let response = dispatch(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": {"name": "search_paper", "arguments": {"search_term": "a"}}
        }),
    )
    .await;

    assert_eq!(response["result"]["isError"], false);
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    assert_eq!(serde_json::from_str::<Value>(text).unwrap(), json!([{"title": "Paper A"}]));
}

#[tokio::test]
async fn test_tools_call_upstream_failure_is_not_protocol_error() {
    let server = offline_server();
    let response = dispatch(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 2,
            "method": "tools/call",
            "params": {"name": "search_paper", "arguments": {"search_term": "q"}}
        }),
    )
    .await;

    assert!(response.get("error").is_none());
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    let failure: Value = serde_json::from_str(text).unwrap();
    assert_eq!(failure["status"], "failed");
}

#[tokio::test]
async fn test_tools_call_invalid_arguments_sets_is_error() {
    let server = offline_server();
    let response = dispatch(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": {"name": "search_paper", "arguments": {}}
        }),
    )
    .await;

    assert_eq!(response["result"]["isError"], true);
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("search_term"));
}

#[tokio::test]
async fn test_tools_call_unknown_tool() {
    let server = offline_server();
    let response = dispatch(
        &server,
        json!({
            "jsonrpc": "2.0",
            "id": 4,
            "method": "tools/call",
            "params": {"name": "exhaustive_search", "arguments": {}}
        }),
    )
    .await;

    assert_eq!(response["error"]["code"], -32602);
    assert!(response["error"]["message"].as_str().unwrap().contains("exhaustive_search"));
}

#[tokio::test]
async fn test_tools_call_missing_name() {
    let server = offline_server();
    let response =
        dispatch(&server, json!({"jsonrpc": "2.0", "id": 5, "method": "tools/call", "params": {}}))
            .await;
    assert_eq!(response["error"]["code"], -32602);
}

#[tokio::test]
async fn test_unknown_method() {
    let server = offline_server();
    let response =
        dispatch(&server, json!({"jsonrpc": "2.0", "id": 6, "method": "resources/list"})).await;
    assert_eq!(response["error"]["code"], -32601);
    assert!(response.get("result").is_none());
}

#[tokio::test]
async fn test_ping() {
    let server = offline_server();
    let response = dispatch(&server, json!({"jsonrpc": "2.0", "id": 8, "method": "ping"})).await;
    assert_eq!(response["result"], json!({}));
}

#[tokio::test]
async fn test_notification_gets_no_response() {
    let server = offline_server();
    let response = server
        .handle_request(&request(json!({"jsonrpc": "2.0", "method": "notifications/initialized"})))
        .await;
    assert!(response.is_none());
}

#[tokio::test]
async fn test_notification_with_wrong_version_gets_no_response() {
    let server = offline_server();
    let response = server
        .handle_request(&request(json!({"jsonrpc": "1.0", "method": "notifications/initialized"})))
        .await;
    assert!(response.is_none());
}

#[tokio::test]
async fn test_wrong_jsonrpc_version_rejected() {
    let server = offline_server();
    let response = dispatch(&server, json!({"jsonrpc": "1.0", "id": 9, "method": "ping"})).await;
    assert_eq!(response["error"]["code"], -32600);
}

#[test]
fn test_server_lists_and_finds_tools() {
    let server = offline_server();
    assert_eq!(server.list_tools().len(), 1);
    assert!(server.get_tool("search_paper").is_some());
    assert!(server.get_tool("missing").is_none());
    assert!(server.context().client.has_api_key());
}

// =============================================================================
// Stdio Transport
// =============================================================================

#[tokio::test]
async fn test_stdio_session() {
    let server = offline_server();
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n",
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
        "\n",
    );

    let responses = run_stdio(server, input).await;

    assert_eq!(responses.len(), 2);
    assert!(by_id(&responses, 1)["result"]["serverInfo"].is_object());
    assert_eq!(by_id(&responses, 2)["result"]["tools"][0]["name"], "search_paper");
}

#[tokio::test]
async fn test_stdio_parse_error_continues() {
    let server = offline_server();
    let input = "{not json}\n{\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"ping\"}\n";

    let responses = run_stdio(server, input).await;

    assert_eq!(responses.len(), 2);
    let parse_error = responses.iter().find(|r| r["id"].is_null()).unwrap();
    assert_eq!(parse_error["error"]["code"], -32700);
    assert_eq!(by_id(&responses, 3)["result"], json!({}));
}

#[tokio::test]
async fn test_stdio_slow_call_does_not_block_ping() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"title": "Slow Paper"}]))
                .set_delay(Duration::from_millis(800)),
        )
        .mount(&mock_server)
        .await;

    let server = server_for(&mock_server.uri());
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"search_paper","arguments":{"search_term":"slow"}}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#,
        "\n",
    );

    let responses = run_stdio(server, input).await;

    // Both answered, the ping first
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["id"], 2);
    assert_eq!(responses[1]["id"], 1);
    assert_eq!(responses[1]["result"]["isError"], false);
    let text = responses[1]["result"]["content"][0]["text"].as_str().unwrap();
    assert_eq!(serde_json::from_str::<Value>(text).unwrap(), json!([{"title": "Slow Paper"}]));
}

#[tokio::test]
async fn test_stdio_concurrent_calls_all_answered() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(3)
        .mount(&mock_server)
        .await;

    let server = server_for(&mock_server.uri());
    let input: String = (1..=3)
        .map(|id| {
            let call = json!({
                "jsonrpc": "2.0",
                "id": id,
                "method": "tools/call",
                "params": {"name": "search_paper", "arguments": {"search_term": format!("q{id}")}}
            });
            format!("{call}\n")
        })
        .collect();

    let responses = run_stdio(server, &input).await;

    assert_eq!(responses.len(), 3);
    for id in 1..=3 {
        assert_eq!(by_id(&responses, id)["result"]["isError"], false);
    }
}

// =============================================================================
// HTTP Transport
// =============================================================================

#[tokio::test]
async fn test_http_health() {
    let router = create_router(Arc::new(offline_server()));

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "arxiv-search");
}

#[tokio::test]
async fn test_http_mcp_post() {
    let router = create_router(Arc::new(offline_server()));

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/mcp")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["result"]["tools"][0]["name"], "search_paper");
}

#[tokio::test]
async fn test_http_malformed_body_is_parse_error() {
    let router = create_router(Arc::new(offline_server()));

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/mcp")
                .header("content-type", "application/json")
                .body(Body::from("{not json}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["jsonrpc"], "2.0");
    assert_eq!(json["error"]["code"], -32700);
    assert_eq!(json["id"], Value::Null);
}

#[tokio::test]
async fn test_http_notification_accepted() {
    let router = create_router(Arc::new(offline_server()));

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/mcp")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
}
