//! Prompt enhancement strategies
//!
//! Each enhancer is a stateless transformer implementing the [`Enhancer`]
//! trait: given a prompt and a JSON options mapping it produces a transformed
//! prompt plus descriptive metadata. Enhancers never mutate their inputs and
//! hold no per-call state, so concurrent invocations need no locking.

mod context;
mod domain_knowledge;
mod example;
mod instruction;
mod registry;

pub use context::{ContextDepth, ContextEnhancer, ContextOptions, ContextType};
pub use domain_knowledge::{
    DomainKnowledgeEnhancer, DomainKnowledgeOptions, KnowledgeDepth,
};
pub use example::{ExampleEnhancer, ExampleOptions, ExampleType, Position};
pub use instruction::{InstructionEnhancer, InstructionOptions, InstructionType};
pub use registry::EnhancerRegistry;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EnhanceError;

/// Result of a single enhancement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementResult {
    /// The transformed prompt
    pub enhanced_prompt: String,
    /// Descriptive metadata: always `strategy` and `modifications`, plus the
    /// enhancer's resolved option values under their wire names
    pub metadata: Value,
}

/// A named, stateless prompt transformer.
///
/// Implementations parse their own typed options struct out of the open JSON
/// mapping; unknown keys are ignored, present keys with values of the wrong
/// shape fail with [`EnhanceError::InvalidOptions`].
pub trait Enhancer: Send + Sync {
    /// Unique strategy identifier, stable for the process lifetime
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Transform `prompt` according to `options`
    fn enhance(&self, prompt: &str, options: &Value) -> Result<EnhancementResult, EnhanceError>;
}

impl std::fmt::Debug for dyn Enhancer + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enhancer").field("name", &self.name()).finish()
    }
}

/// Deserialize a typed options struct from the open JSON mapping.
///
/// A JSON `null` (options omitted by the caller) yields the defaults.
pub(crate) fn parse_options<T>(options: &Value) -> Result<T, EnhanceError>
where
    T: for<'de> Deserialize<'de> + Default,
{
    if options.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(options.clone())?)
}
