mod common;

use common::RecordingHandler;
use serde_json::{json, Value};
use statuslens::config::PluginSettings;
use statuslens::host::*;
use statuslens::plugin::StatusPlugin;

fn server(handler: RecordingHandler) -> HostServer {
    HostServer::new(StatusPlugin::new(
        PluginSettings::default(),
        Box::new(handler),
    ))
}

fn request(id: Value, method: &str, params: Value) -> JsonRpcRequest {
    serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params,
    }))
    .unwrap()
}

fn call(server: &mut HostServer, method: &str, params: Value) -> JsonRpcResponse {
    server
        .handle_request(&request(json!(1), method, params))
        .expect("request with id must get a response")
}

#[test]
fn test_initialize_and_query() {
    let mut server = server(RecordingHandler::ok("browser"));
    let init = call(&mut server, "initialize", json!({ "theme": "Light" }));
    let metadata = init.result.unwrap();
    assert_eq!(metadata["name"], "HTTP Status Codes");

    let resp = call(
        &mut server,
        "query",
        json!({ "search": "404", "action_keyword": "http" }),
    );
    let results = &resp.result.unwrap()["results"];
    assert_eq!(results.as_array().unwrap().len(), 1);
    assert_eq!(results[0]["title"], "404 Not Found");
    assert_eq!(results[0]["icon_path"], "Images/statuslens.light.png");
}

#[test]
fn test_global_query_returns_empty_results() {
    let mut server = server(RecordingHandler::ok("browser"));
    call(&mut server, "initialize", json!({}));
    let resp = call(&mut server, "query", json!({ "search": "404" }));
    assert_eq!(resp.result.unwrap()["results"], json!([]));
}

#[test]
fn test_query_without_search_is_invalid_params() {
    let mut server = server(RecordingHandler::ok("browser"));
    call(&mut server, "initialize", json!({}));
    let resp = call(&mut server, "query", json!({}));
    assert_eq!(resp.error.unwrap().code, ErrorCode::InvalidParams.as_i32());
}

#[test]
fn test_settings_update_changes_links() {
    let mut server = server(RecordingHandler::ok("browser"));
    call(&mut server, "initialize", json!({}));
    let resp = call(
        &mut server,
        "settings/update",
        json!({ "options": [{ "key": "ReferenceType", "value": 1 }] }),
    );
    assert_eq!(resp.result.unwrap()["reference_type"], 1);

    let resp = call(
        &mut server,
        "query",
        json!({ "search": "500", "action_keyword": "http" }),
    );
    assert_eq!(
        resp.result.unwrap()["results"][0]["target_url"],
        "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/500"
    );
}

#[test]
fn test_activate_reports_failure() {
    let handler = RecordingHandler::no_handler("browser");
    let mut server = server(handler.clone());
    call(&mut server, "initialize", json!({}));
    let resp = call(
        &mut server,
        "activate",
        json!({ "target_url": "http://tools.ietf.org/html/rfc7231#section-6.5.4" }),
    );
    assert_eq!(resp.result.unwrap()["success"], false);
    assert_eq!(handler.opened().len(), 1);
}

#[test]
fn test_theme_changed_returns_icon() {
    let mut server = server(RecordingHandler::ok("browser"));
    let resp = call(&mut server, "theme/changed", json!({ "theme": "Dark" }));
    assert_eq!(
        resp.result.unwrap()["icon_path"],
        "Images/statuslens.dark.png"
    );
}

#[test]
fn test_unknown_method() {
    let mut server = server(RecordingHandler::ok("browser"));
    let resp = call(&mut server, "tools/list", json!({}));
    assert_eq!(resp.error.unwrap().code, -32601);
}

#[test]
fn test_notifications_get_no_response() {
    let mut server = server(RecordingHandler::ok("browser"));
    let note: JsonRpcRequest =
        serde_json::from_value(json!({ "jsonrpc": "2.0", "method": "initialized" })).unwrap();
    assert!(server.handle_request(&note).is_none());
}

#[test]
fn test_initialized_with_id_gets_reply() {
    let mut server = server(RecordingHandler::ok("browser"));
    let resp = server
        .handle_request(&request(json!(9), "initialized", json!({})))
        .expect("initialized sent with an id must be answered");
    assert_eq!(resp.id, json!(9));
    assert_eq!(resp.result.unwrap(), json!({}));
}

#[test]
fn test_dispose_marks_plugin_disposed() {
    let mut server = server(RecordingHandler::ok("browser"));
    call(&mut server, "initialize", json!({}));
    let resp = call(&mut server, "dispose", Value::Null);
    assert!(resp.result.is_some());
    assert!(server.plugin().is_disposed());
}

#[tokio::test]
async fn test_serve_over_stream() {
    let mut server = server(RecordingHandler::ok("browser"));
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        "\n",
        "not json\n",
        r#"{"jsonrpc":"2.0","method":"initialized"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"query","params":{"search":"301","action_keyword":"http"}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":3,"method":"dispose"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":4,"method":"ping"}"#,
        "\n",
    );
    let mut output = Vec::new();
    server
        .serve(input.as_bytes(), &mut output)
        .await
        .unwrap();

    let lines: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1]["error"]["code"], -32700);
    assert_eq!(lines[2]["result"]["results"][0]["title"], "301 Moved Permanently");
    assert_eq!(lines[3]["id"], 3);
}
