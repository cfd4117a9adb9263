//! Enhancer registry - resolves strategy names to implementations

use tracing::info;

use super::{
    ContextEnhancer, DomainKnowledgeEnhancer, Enhancer, ExampleEnhancer, InstructionEnhancer,
};
use crate::config::Config;
use crate::error::EnhanceError;

/// Holds the fixed set of enhancers in insertion order:
/// context, example, instruction, domain-knowledge.
///
/// Built once at process start from the injected configuration and shared
/// read-only afterwards.
pub struct EnhancerRegistry {
    enhancers: Vec<Box<dyn Enhancer>>,
}

impl EnhancerRegistry {
    /// Registry containing every enhancer
    pub fn new() -> Self {
        Self {
            enhancers: vec![
                Box::new(ContextEnhancer),
                Box::new(ExampleEnhancer),
                Box::new(InstructionEnhancer),
                Box::new(DomainKnowledgeEnhancer),
            ],
        }
    }

    /// Registry filtered to `config.enabled_enhancers`; an empty list means
    /// all enhancers stay enabled.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new();

        if !config.enabled_enhancers.is_empty() {
            registry
                .enhancers
                .retain(|e| config.enabled_enhancers.iter().any(|n| n == e.name()));
            info!(
                "Loading specific enhancers: {}",
                registry.names().join(", ")
            );
        } else {
            info!("Loading all enhancers: {}", registry.names().join(", "));
        }

        registry
    }

    /// All registered enhancers, in insertion order
    pub fn list(&self) -> impl Iterator<Item = &dyn Enhancer> + '_ {
        self.enhancers.iter().map(|e| e.as_ref())
    }

    /// Look up an enhancer by strategy name
    pub fn resolve(&self, name: &str) -> Result<&dyn Enhancer, EnhanceError> {
        self.enhancers
            .iter()
            .find(|e| e.name() == name)
            .map(|e| e.as_ref())
            .ok_or_else(|| EnhanceError::UnknownStrategy(name.to_string()))
    }

    /// Names of all registered enhancers, in insertion order
    pub fn names(&self) -> Vec<&'static str> {
        self.enhancers.iter().map(|e| e.name()).collect()
    }
}

impl Default for EnhancerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
