//! Tools module

pub mod enhance_prompt;
pub mod list_enhancers;

pub use enhance_prompt::EnhancePromptTool;
pub use list_enhancers::ListEnhancersTool;

/// Text result returned by every tool
#[derive(Debug, Clone)]
pub struct ToolResult {
    pub text: String,
}
