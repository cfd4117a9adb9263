//! Context enhancer - prepends contextual information derived from key terms

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use super::{parse_options, Enhancer, EnhancementResult};
use crate::error::EnhanceError;

/// Flavor of context added to the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextType {
    #[default]
    General,
    Technical,
    Creative,
    Analytical,
}

impl ContextType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContextType::General => "general",
            ContextType::Technical => "technical",
            ContextType::Creative => "creative",
            ContextType::Analytical => "analytical",
        }
    }
}

/// How much context to add
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextDepth {
    Minimal,
    #[default]
    Moderate,
    Extensive,
}

impl ContextDepth {
    pub fn as_str(self) -> &'static str {
        match self {
            ContextDepth::Minimal => "minimal",
            ContextDepth::Moderate => "moderate",
            ContextDepth::Extensive => "extensive",
        }
    }
}

/// Options accepted by the context enhancer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContextOptions {
    pub context_type: ContextType,
    pub depth: ContextDepth,
    pub include_definitions: bool,
    pub include_background: bool,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            context_type: ContextType::General,
            depth: ContextDepth::Moderate,
            include_definitions: true,
            include_background: true,
        }
    }
}

/// Enhances prompts by adding relevant contextual information
#[derive(Debug, Default)]
pub struct ContextEnhancer;

impl Enhancer for ContextEnhancer {
    fn name(&self) -> &'static str {
        "context"
    }

    fn description(&self) -> &'static str {
        "Enhances prompts by adding relevant contextual information"
    }

    fn enhance(&self, prompt: &str, options: &Value) -> Result<EnhancementResult, EnhanceError> {
        let opts: ContextOptions = parse_options(options)?;
        debug!("Enhancing prompt with context: {:?}", opts);

        let key_terms = extract_key_terms(prompt);
        let additions = generate_context(&key_terms, &opts);
        let enhanced_prompt = combine(prompt, &additions);

        Ok(EnhancementResult {
            enhanced_prompt,
            metadata: json!({
                "strategy": self.name(),
                "modifications": [format!("Added {} context elements", additions.len())],
                "contextType": opts.context_type.as_str(),
                "depth": opts.depth.as_str(),
                "keyTerms": key_terms,
            }),
        })
    }
}

/// Extract naive key terms: capitalized letter-runs and double-quoted phrases,
/// deduplicated in first-seen order. No real NLP here by design.
fn extract_key_terms(prompt: &str) -> Vec<String> {
    static CAPITALIZED: OnceLock<Regex> = OnceLock::new();
    static QUOTED: OnceLock<Regex> = OnceLock::new();

    let capitalized =
        CAPITALIZED.get_or_init(|| Regex::new(r"\b[A-Z][a-zA-Z]*\b").expect("valid regex"));
    let quoted = QUOTED.get_or_init(|| Regex::new(r#""([^"]+)""#).expect("valid regex"));

    let mut seen = HashSet::new();
    let mut terms = Vec::new();

    for m in capitalized.find_iter(prompt) {
        if seen.insert(m.as_str().to_string()) {
            terms.push(m.as_str().to_string());
        }
    }
    for caps in quoted.captures_iter(prompt) {
        let term = &caps[1];
        if seen.insert(term.to_string()) {
            terms.push(term.to_string());
        }
    }

    terms
}

fn generate_context(key_terms: &[String], opts: &ContextOptions) -> Vec<String> {
    let mut additions = Vec::new();

    if opts.include_definitions && !key_terms.is_empty() {
        for term in key_terms {
            additions.push(format!("{}: A term relevant to this prompt.", term));
        }
    }

    if opts.include_background {
        additions.push("Background: Additional context to help understand the prompt.".to_string());
    }

    if opts.depth == ContextDepth::Extensive {
        additions.push("Extended context: More detailed information about the topic.".to_string());
    }

    match opts.context_type {
        ContextType::General => {}
        ContextType::Technical => additions.push(
            "Technical context: Specialized information for technical understanding.".to_string(),
        ),
        ContextType::Creative => additions
            .push("Creative context: Information to inspire creative thinking.".to_string()),
        ContextType::Analytical => additions
            .push("Analytical context: Information to support analytical reasoning.".to_string()),
    }

    additions
}

/// Prepend the context block; with nothing to add the prompt passes through
/// untouched, no stray headers.
fn combine(prompt: &str, additions: &[String]) -> String {
    if additions.is_empty() {
        return prompt.to_string();
    }

    format!("\nCONTEXT:\n{}\n\nPROMPT:\n{}", additions.join("\n"), prompt)
}
