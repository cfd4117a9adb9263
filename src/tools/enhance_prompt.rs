//! enhance_prompt tool implementation

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info};

use super::ToolResult;
use crate::enhancers::EnhancerRegistry;

/// Tool definition for MCP
pub struct EnhancePromptToolDef {
    pub name: &'static str,
    pub description: &'static str,
}

/// Static tool definition
pub static ENHANCE_PROMPT_TOOL: EnhancePromptToolDef = EnhancePromptToolDef {
    name: "enhance_prompt",
    description: "Enhances a prompt by adding context, examples, or specialized instructions",
};

impl EnhancePromptToolDef {
    /// Input schema; the strategy enum reflects the enhancers actually
    /// loaded into the registry.
    pub fn get_input_schema(registry: &EnhancerRegistry) -> Value {
        json!({
            "type": "object",
            "properties": {
                "prompt": {
                    "type": "string",
                    "minLength": 1,
                    "description": "The original prompt to enhance"
                },
                "strategy": {
                    "type": "string",
                    "enum": registry.names(),
                    "description": "The enhancement strategy to use"
                },
                "options": {
                    "type": "object",
                    "description": "Strategy-specific options"
                }
            },
            "required": ["prompt", "strategy"]
        })
    }
}

/// Tool arguments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnhancePromptArgs {
    pub prompt: Option<String>,
    pub strategy: Option<String>,
    pub options: Option<Value>,
}

/// Enhance prompt tool
pub struct EnhancePromptTool {
    registry: Arc<EnhancerRegistry>,
}

impl EnhancePromptTool {
    pub fn new(registry: Arc<EnhancerRegistry>) -> Self {
        Self { registry }
    }

    /// Execute the tool. Every failure is translated into the
    /// `{"error": ...}` envelope rather than escaping as a transport error.
    pub async fn execute(&self, args: EnhancePromptArgs) -> ToolResult {
        let prompt = match &args.prompt {
            Some(p) if !p.is_empty() => p,
            _ => return error_envelope("prompt is required"),
        };

        let strategy = match &args.strategy {
            Some(s) if !s.is_empty() => s,
            _ => return error_envelope("strategy is required"),
        };

        info!("Enhancing prompt using strategy: {}", strategy);

        let enhancer = match self.registry.resolve(strategy) {
            Ok(e) => e,
            Err(e) => {
                error!("Error enhancing prompt: {}", e);
                return error_envelope(&e.to_string());
            }
        };

        let options = args.options.unwrap_or(Value::Null);

        match enhancer.enhance(prompt, &options) {
            Ok(result) => {
                info!("Successfully enhanced prompt");
                match serde_json::to_string(&result) {
                    Ok(text) => ToolResult { text },
                    Err(e) => error_envelope(&e.to_string()),
                }
            }
            Err(e) => {
                error!("Error enhancing prompt: {}", e);
                error_envelope(&e.to_string())
            }
        }
    }
}

fn error_envelope(message: &str) -> ToolResult {
    ToolResult {
        text: json!({ "error": message }).to_string(),
    }
}
