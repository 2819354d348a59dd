//! Capability catalogs and tool-call semantics.
//!
//! The server advertises three static catalogs (resources, prompts, tools)
//! and executes exactly one mutating operation: `create_action_item`.

pub mod create_action_item;

use serde::Serialize;
use serde_json::{json, Value};

use lyearn_core::client::ActionItemApi;

/// Known tool names, parsed from the wire.
///
/// Anything unrecognized routes to the no-op arm rather than an error, so
/// the "unknown capability" behavior stays auditable in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    CreateActionItem,
    Unknown,
}

impl ToolName {
    pub fn parse(name: &str) -> Self {
        match name {
            create_action_item::NAME => ToolName::CreateActionItem,
            _ => ToolName::Unknown,
        }
    }
}

/// One text block in a content-shaped tool response.
#[derive(Debug, Serialize)]
pub struct ToolContent {
    pub r#type: &'static str,
    pub text: String,
}

/// Result of a tools/call invocation.
///
/// Two distinct wire shapes: a content list for success, no-op, and caught
/// failures, and a bare `error` field for schema validation failures. Both
/// are JSON-RPC successes; keep the shapes separate.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ToolOutcome {
    Content { content: Vec<ToolContent> },
    Invalid { error: &'static str },
}

impl ToolOutcome {
    pub fn text(msg: impl Into<String>) -> Self {
        ToolOutcome::Content {
            content: vec![ToolContent {
                r#type: "text",
                text: msg.into(),
            }],
        }
    }

    pub fn invalid_arguments() -> Self {
        ToolOutcome::Invalid {
            error: "Invalid arguments provided",
        }
    }
}

/// Fixed catalog for resources/list.
pub fn list_resources() -> Value {
    json!([
        {
            "id": "action_items",
            "name": "Action Items",
            "description": "Manage action items and their status",
            "type": "collection"
        }
    ])
}

/// Fixed catalog for prompts/list.
pub fn list_prompts() -> Value {
    json!([
        {
            "id": create_action_item::NAME,
            "name": "Create Action Item",
            "description": "Create a new action item with title and status",
            "inputSchema": create_action_item::input_schema()
        }
    ])
}

/// Fixed catalog for tools/list.
pub fn list_tools() -> Value {
    json!([
        {
            "name": create_action_item::NAME,
            "description": create_action_item::DESCRIPTION,
            "inputSchema": create_action_item::input_schema()
        }
    ])
}

/// Dispatch a tools/call by name.
///
/// String arguments are decoded as JSON first; a decode failure is reported
/// inside a content response, never escalated to a protocol error.
pub fn call_tool(name: &str, args: Value, api: &dyn ActionItemApi) -> ToolOutcome {
    let args = match normalize_args(args) {
        Ok(v) => v,
        Err(e) => return error_text(&e.to_string()),
    };

    match ToolName::parse(name) {
        ToolName::CreateActionItem => create_action_item::call(&args, api),
        ToolName::Unknown => ToolOutcome::text("Nothing happened"),
    }
}

/// Decode string-encoded arguments; pass everything else through untouched.
fn normalize_args(args: Value) -> serde_json::Result<Value> {
    match args {
        Value::String(s) => serde_json::from_str(&s),
        other => Ok(other),
    }
}

pub(crate) fn error_text(message: &str) -> ToolOutcome {
    let message = if message.is_empty() {
        "Unknown error"
    } else {
        message
    };
    ToolOutcome::text(format!(
        "An error occurred while processing the request: {message}"
    ))
}
