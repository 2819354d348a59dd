use serde_json::{json, Value};

use lyearn_core::action_item::ActionItemRequest;
use lyearn_core::client::ActionItemApi;

use super::ToolOutcome;

pub const NAME: &str = "create_action_item";
pub const DESCRIPTION: &str = "Create a new Action Item";

/// JSON Schema for the tool arguments.
pub fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": {
                "type": "string",
                "description": "Title of Action Item"
            },
            "status": {
                "type": "string",
                "description": "Status of Action Item"
            }
        },
        "required": ["title", "status"]
    })
}

/// Validate the arguments and delegate to the API.
///
/// `status` is required by the schema but only `title` is forwarded.
pub fn call(args: &Value, api: &dyn ActionItemApi) -> ToolOutcome {
    let request = match ActionItemRequest::from_args(args) {
        Some(r) => r,
        None => return ToolOutcome::invalid_arguments(),
    };

    match api.create_action_item(&request.title) {
        Ok(()) => ToolOutcome::text(format!(
            "Successfully created action item: {}",
            request.title
        )),
        Err(e) => super::error_text(&e.to_string()),
    }
}
