//! MCP stdio server: line-delimited JSON-RPC 2.0 over stdin/stdout.
//!
//! Reads one request per line, writes one response per line. Logs go to
//! stderr — stdout carries the protocol. The loop ends when stdin closes.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use lyearn_core::client::ActionItemApi;

use crate::tools;

const SERVER_NAME: &str = "lyearn";
const PROTOCOL_VERSION: &str = "2024-11-05";

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 protocol types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcResponse {
    fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

const PARSE_ERROR: i32 = -32700;
const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

// ---------------------------------------------------------------------------
// Server loop
// ---------------------------------------------------------------------------

pub fn run(api: &dyn ActionItemApi) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    tracing::info!("lyearn MCP server listening on stdio");

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let raw: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                write_response(
                    &stdout,
                    &JsonRpcResponse::error(None, PARSE_ERROR, format!("parse error: {e}")),
                )?;
                continue;
            }
        };

        // Notifications have no "id" key — do not respond
        if !raw
            .as_object()
            .map(|o| o.contains_key("id"))
            .unwrap_or(false)
        {
            continue;
        }

        let request: JsonRpcRequest = match serde_json::from_value(raw) {
            Ok(r) => r,
            Err(e) => {
                write_response(
                    &stdout,
                    &JsonRpcResponse::error(None, INVALID_REQUEST, format!("invalid request: {e}")),
                )?;
                continue;
            }
        };

        let response = handle_request(&request, api);
        write_response(&stdout, &response)?;
    }

    tracing::info!("stdin closed, shutting down");
    Ok(())
}

fn write_response(stdout: &std::io::Stdout, response: &JsonRpcResponse) -> anyhow::Result<()> {
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, response)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Request dispatch (pub for unit tests)
// ---------------------------------------------------------------------------

pub fn handle_request(req: &JsonRpcRequest, api: &dyn ActionItemApi) -> JsonRpcResponse {
    match req.method.as_str() {
        "initialize" => JsonRpcResponse::success(
            req.id.clone(),
            serde_json::json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        ),

        "resources/list" => JsonRpcResponse::success(
            req.id.clone(),
            serde_json::json!({ "resources": tools::list_resources() }),
        ),

        "prompts/list" => JsonRpcResponse::success(
            req.id.clone(),
            serde_json::json!({ "prompts": tools::list_prompts() }),
        ),

        "tools/list" => JsonRpcResponse::success(
            req.id.clone(),
            serde_json::json!({ "tools": tools::list_tools() }),
        ),

        "tools/call" => {
            let params = match &req.params {
                Some(p) => p,
                None => {
                    return JsonRpcResponse::error(req.id.clone(), INVALID_PARAMS, "missing params");
                }
            };

            let tool_name = match params["name"].as_str() {
                Some(n) => n,
                None => {
                    return JsonRpcResponse::error(
                        req.id.clone(),
                        INVALID_PARAMS,
                        "missing tool name in params",
                    );
                }
            };

            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            // Every outcome of the call itself — including validation and
            // delegate failures — is a JSON-RPC success; the failure lands
            // inside the result payload.
            let outcome = tools::call_tool(tool_name, args, api);
            JsonRpcResponse::success(
                req.id.clone(),
                serde_json::to_value(&outcome)
                    .unwrap_or_else(|e| serde_json::json!({"error": e.to_string()})),
            )
        }

        other => JsonRpcResponse::error(
            req.id.clone(),
            METHOD_NOT_FOUND,
            format!("method not found: {other}"),
        ),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
