//! Create an action item directly from the command line.
//!
//! Same validation surface as the MCP tool; `status` is accepted for
//! parity with the schema but only the title reaches the API.

use lyearn_core::action_item::ActionItemRequest;
use lyearn_core::client::ActionItemApi;

use crate::output;

pub fn run(api: &dyn ActionItemApi, title: &str, status: &str, json: bool) -> anyhow::Result<()> {
    let request = ActionItemRequest {
        title: title.to_string(),
        status: status.to_string(),
    };

    api.create_action_item(&request.title)?;

    if json {
        output::print_json(&request)?;
    } else {
        println!("Successfully created action item: {}", request.title);
    }
    Ok(())
}
