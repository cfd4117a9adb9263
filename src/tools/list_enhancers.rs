//! list_enhancers tool implementation

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::info;

use super::ToolResult;
use crate::enhancers::EnhancerRegistry;

/// Tool definition for MCP
pub struct ListEnhancersToolDef {
    pub name: &'static str,
    pub description: &'static str,
}

/// Static tool definition
pub static LIST_ENHANCERS_TOOL: ListEnhancersToolDef = ListEnhancersToolDef {
    name: "list_enhancers",
    description: "Lists all available prompt enhancement strategies",
};

impl ListEnhancersToolDef {
    pub fn get_input_schema() -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }
}

/// List enhancers tool
pub struct ListEnhancersTool {
    registry: Arc<EnhancerRegistry>,
}

impl ListEnhancersTool {
    pub fn new(registry: Arc<EnhancerRegistry>) -> Self {
        Self { registry }
    }

    /// Execute the tool, returning the loaded strategies in registry order
    pub async fn execute(&self) -> ToolResult {
        info!("Listing available enhancers");

        let enhancers: Vec<Value> = self
            .registry
            .list()
            .map(|e| {
                json!({
                    "name": e.name(),
                    "description": e.description(),
                })
            })
            .collect();

        ToolResult {
            text: Value::Array(enhancers).to_string(),
        }
    }
}
