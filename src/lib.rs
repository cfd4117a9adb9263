//! prompt-boost library - MCP server for prompt enhancement strategies

pub mod config;
pub mod enhancers;
pub mod error;
pub mod legacy;
pub mod mcp;
pub mod tools;

// Re-export commonly used types
pub use config::{Config, LogLevel};
pub use enhancers::{Enhancer, EnhancementResult, EnhancerRegistry};
pub use error::EnhanceError;
