// End-to-end contract tests for the MCP endpoint.
//
// Each test spins up the actix service the way init_server wires it and
// drives it through the wire surface: envelope shapes, status codes, CORS
// headers, and the canned payload texts.

use actix_web::http::{Method, StatusCode};
use actix_web::{test, web, App};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use pandaagi_mcp::{api, resources, tools};

macro_rules! service {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(tools::init_registry()))
                .configure(api::routes::configure),
        )
        .await
    };
}

fn rpc(method: &str, params: Value, id: Value) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/")
        .set_json(json!({ "method": method, "params": params, "id": id }))
}

#[actix_web::test]
async fn options_preflight_returns_cors_headers() {
    let app = service!();
    let req = test::TestRequest::with_uri("/")
        .method(Method::OPTIONS)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers().clone();
    assert_eq!(headers.get("Access-Control-Allow-Origin").unwrap(), "*");
    assert_eq!(
        headers.get("Access-Control-Allow-Headers").unwrap(),
        "Content-Type"
    );
    assert_eq!(
        headers.get("Access-Control-Allow-Methods").unwrap(),
        "POST, OPTIONS"
    );

    let body = test::read_body(resp).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn non_post_verbs_are_rejected() {
    let app = service!();
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let req = test::TestRequest::with_uri("/")
            .method(method.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", method);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Method not allowed" }));
    }
}

#[actix_web::test]
async fn malformed_body_takes_internal_error_path() {
    let app = service!();
    let req = test::TestRequest::post()
        .uri("/")
        .set_payload("this is not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["error"]["code"], -32603);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Internal error: "));
    // The request id is deliberately not echoed on this path
    assert_eq!(body["id"], Value::Null);
}

#[actix_web::test]
async fn unknown_method_echoes_id() {
    let app = service!();
    let resp = test::call_service(&app, rpc("mcp/foo", json!({}), json!(42)).to_request()).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], -32601);
    assert_eq!(body["error"]["message"], "Method not found");
    assert_eq!(body["id"], 42);
}

#[actix_web::test]
async fn init_is_deterministic_bar_the_id() {
    let app = service!();

    let first: Value = test::read_body_json(
        test::call_service(&app, rpc("mcp/init", json!({}), json!(1)).to_request()).await,
    )
    .await;
    let second: Value = test::read_body_json(
        test::call_service(&app, rpc("mcp/init", json!({}), json!("two")).to_request()).await,
    )
    .await;

    assert_eq!(first["result"], second["result"]);
    assert_eq!(first["id"], 1);
    assert_eq!(second["id"], "two");

    assert_eq!(first["jsonrpc"], "2.0");
    assert_eq!(first["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(first["result"]["capabilities"], json!({"tools": {}, "resources": {}}));
    assert_eq!(first["result"]["serverInfo"]["name"], "pandaagi-mcp-server");
    assert_eq!(first["result"]["serverInfo"]["version"], "1.0.0");
}

#[actix_web::test]
async fn list_tools_reports_the_five_descriptors_in_order() {
    let app = service!();
    let body: Value = test::read_body_json(
        test::call_service(&app, rpc("mcp/listTools", json!({}), json!(null)).to_request()).await,
    )
    .await;

    let tools = body["result"]["tools"].as_array().unwrap();
    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec![
            "create-agent",
            "run-agent-task",
            "generate-analysis-report",
            "create-dashboard",
            "deploy-web-app",
        ]
    );

    let create_agent = &tools[0];
    assert_eq!(create_agent["schema"]["required"], json!(["name"]));
    assert_eq!(create_agent["schema"]["additionalProperties"], json!(false));
    assert_eq!(
        create_agent["schema"]["properties"]["environment"]["enum"],
        json!(["local", "docker"])
    );
    assert_eq!(
        create_agent["schema"]["properties"]["workspace_path"]["default"],
        "./agent_workspace"
    );
}

#[actix_web::test]
async fn create_agent_builds_configuration_text() {
    let app = service!();
    let params = json!({ "name": "create-agent", "args": { "name": "X" } });
    let resp =
        test::call_service(&app, rpc("mcp/callTool", params, json!(9)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 9);
    let content = body["result"]["content"].as_array().unwrap();
    assert_eq!(content.len(), 1);
    assert_eq!(content[0]["type"], "text");

    let text = content[0]["text"].as_str().unwrap();
    assert!(text.contains("\"name\": \"X\""));
    assert!(text.contains("\"environment\": \"local\""));
    assert!(text.contains("\"status\": \"ready\""));
    assert!(text.contains("```python"));

    let tail = text.split("\"agentId\": \"agent-").nth(1).unwrap();
    let digits = tail.split('"').next().unwrap();
    assert!(!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));
}

#[actix_web::test]
async fn unknown_tool_is_invalid_params() {
    let app = service!();
    let params = json!({ "name": "mint-tokens", "args": {} });
    let resp = test::call_service(&app, rpc("mcp/callTool", params, json!(3)).to_request()).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], -32602);
    assert_eq!(body["error"]["message"], "Unknown tool");
    assert_eq!(body["id"], 3);
}

#[actix_web::test]
async fn call_tool_without_args_is_internal_error() {
    let app = service!();
    let params = json!({ "name": "create-agent" });
    let resp =
        test::call_service(&app, rpc("mcp/callTool", params, json!(5)).to_request()).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], -32603);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Internal error: "));
    assert_eq!(body["id"], Value::Null);

    // Null args are as absent as no args at all
    let params = json!({ "name": "create-agent", "args": null });
    let resp =
        test::call_service(&app, rpc("mcp/callTool", params, json!(6)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn unknown_tool_without_args_is_still_unknown() {
    let app = service!();
    let params = json!({ "name": "mint-tokens" });
    let resp = test::call_service(&app, rpc("mcp/callTool", params, json!(4)).to_request()).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], -32602);
    assert_eq!(body["error"]["message"], "Unknown tool");
    assert_eq!(body["id"], 4);
}

#[actix_web::test]
async fn non_object_body_dispatches_as_unknown_method() {
    let app = service!();
    for payload in ["42", "\"x\"", "[]"] {
        let req = test::TestRequest::post()
            .uri("/")
            .insert_header(("Content-Type", "application/json"))
            .set_payload(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", payload);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], -32601);
        assert_eq!(body["error"]["message"], "Method not found");
        assert_eq!(body["id"], Value::Null);
    }
}

#[actix_web::test]
async fn call_tool_without_params_is_internal_error() {
    let app = service!();
    let req = test::TestRequest::post()
        .uri("/")
        .set_json(json!({ "method": "mcp/callTool", "id": 5 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], -32603);
    assert_eq!(body["id"], Value::Null);
}

#[actix_web::test]
async fn run_agent_task_picks_keyword_response() {
    let app = service!();

    let params = json!({ "name": "run-agent-task", "args": { "task": "tell me a joke" } });
    let body: Value = test::read_body_json(
        test::call_service(&app, rpc("mcp/callTool", params, json!(1)).to_request()).await,
    )
    .await;
    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("Why don't pandas ever get tired?"));

    let params = json!({ "name": "run-agent-task", "args": { "task": "build a tiny tool" } });
    let body: Value = test::read_body_json(
        test::call_service(&app, rpc("mcp/callTool", params, json!(2)).to_request()).await,
    )
    .await;
    let text = body["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.ends_with(
        "Task will be executed by the PandaAGI agent with full autonomous capabilities including web access, file operations, and code execution."
    ));
}

#[actix_web::test]
async fn list_resources_reports_the_four_documents() {
    let app = service!();
    let body: Value = test::read_body_json(
        test::call_service(&app, rpc("mcp/listResources", json!({}), json!(0)).to_request())
            .await,
    )
    .await;

    let listed = body["result"]["resources"].as_array().unwrap();
    let uris: Vec<&str> = listed.iter().map(|r| r["uri"].as_str().unwrap()).collect();
    assert_eq!(
        uris,
        vec![
            "docs://pandaagi-docs",
            "docs://pandaagi-quickstart",
            "docs://agent-best-practices",
            "docs://pandaagi-examples",
        ]
    );
    assert!(listed
        .iter()
        .all(|r| r["metadata"]["mimeType"] == "text/markdown"));
}

#[actix_web::test]
async fn read_resource_returns_the_fixed_text() {
    let app = service!();
    let params = json!({ "uri": "docs://pandaagi-docs" });
    let resp =
        test::call_service(&app, rpc("mcp/readResource", params, json!(7)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let contents = body["result"]["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0]["uri"], "docs://pandaagi-docs");
    assert_eq!(
        contents[0]["text"].as_str().unwrap(),
        resources::read_resource("docs://pandaagi-docs").unwrap()
    );
}

#[actix_web::test]
async fn missing_resource_is_not_found() {
    let app = service!();
    let params = json!({ "uri": "docs://missing" });
    let resp =
        test::call_service(&app, rpc("mcp/readResource", params, json!(8)).to_request()).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], -32602);
    assert_eq!(body["error"]["message"], "Resource not found");
    assert_eq!(body["id"], 8);
}

#[actix_web::test]
async fn post_responses_carry_cors_and_content_type() {
    let app = service!();
    let resp =
        test::call_service(&app, rpc("mcp/init", json!({}), json!(1)).to_request()).await;

    assert_eq!(
        resp.headers().get("Access-Control-Allow-Origin").unwrap(),
        "*"
    );
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );
}

#[actix_web::test]
async fn health_endpoint_reports_ok() {
    let app = service!();
    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], pandaagi_mcp::SERVER_VERSION);
}
