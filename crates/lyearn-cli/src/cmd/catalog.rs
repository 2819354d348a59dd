//! Print the static resource, prompt, and tool catalogs.

use serde_json::{json, Value};

use crate::output;
use crate::tools;

pub fn run(json: bool) -> anyhow::Result<()> {
    let resources = tools::list_resources();
    let prompts = tools::list_prompts();
    let tool_list = tools::list_tools();

    if json {
        return output::print_json(&json!({
            "resources": resources,
            "prompts": prompts,
            "tools": tool_list,
        }));
    }

    output::print_section("resources", &entries(&resources));
    output::print_section("prompts", &entries(&prompts));
    output::print_section("tools", &entries(&tool_list));
    Ok(())
}

/// Collapse catalog entries to (name, description) pairs for display.
fn entries(catalog: &Value) -> Vec<(String, String)> {
    catalog
        .as_array()
        .into_iter()
        .flatten()
        .map(|entry| {
            let name = entry["name"]
                .as_str()
                .or_else(|| entry["id"].as_str())
                .unwrap_or("?");
            let description = entry["description"].as_str().unwrap_or("");
            (name.to_string(), description.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_cover_every_catalog() {
        assert_eq!(
            entries(&tools::list_resources()),
            vec![(
                "Action Items".to_string(),
                "Manage action items and their status".to_string()
            )]
        );
        assert_eq!(entries(&tools::list_prompts())[0].0, "Create Action Item");
        assert_eq!(entries(&tools::list_tools())[0].0, "create_action_item");
    }

    #[test]
    fn entries_of_empty_catalog_is_empty() {
        assert!(entries(&json!([])).is_empty());
    }
}
