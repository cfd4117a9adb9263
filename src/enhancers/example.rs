//! Example enhancer - inserts placeholder example blocks

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use super::{parse_options, Enhancer, EnhancementResult};
use crate::error::EnhanceError;

/// Style of generated examples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleType {
    #[default]
    Simple,
    Detailed,
    Diverse,
}

impl ExampleType {
    pub fn as_str(self) -> &'static str {
        match self {
            ExampleType::Simple => "simple",
            ExampleType::Detailed => "detailed",
            ExampleType::Diverse => "diverse",
        }
    }

    fn phrase(self) -> &'static str {
        match self {
            ExampleType::Simple => "A simple example related to the prompt.",
            ExampleType::Detailed => "A detailed example with step-by-step explanation.",
            ExampleType::Diverse => "A diverse example showing different aspects of the prompt.",
        }
    }
}

/// Where the examples block is placed relative to the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Before,
    After,
}

impl Position {
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Before => "before",
            Position::After => "after",
        }
    }
}

/// Options accepted by the example enhancer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExampleOptions {
    pub example_count: i64,
    pub example_type: ExampleType,
    pub position: Position,
}

impl Default for ExampleOptions {
    fn default() -> Self {
        Self {
            example_count: 2,
            example_type: ExampleType::Simple,
            position: Position::Before,
        }
    }
}

/// Enhances prompts by adding relevant examples
#[derive(Debug, Default)]
pub struct ExampleEnhancer;

impl Enhancer for ExampleEnhancer {
    fn name(&self) -> &'static str {
        "example"
    }

    fn description(&self) -> &'static str {
        "Enhances prompts by adding relevant examples"
    }

    fn enhance(&self, prompt: &str, options: &Value) -> Result<EnhancementResult, EnhanceError> {
        let opts: ExampleOptions = parse_options(options)?;
        debug!("Enhancing prompt with examples: {:?}", opts);

        let examples = generate_examples(opts.example_count, opts.example_type);
        let enhanced_prompt = combine(prompt, &examples, opts.position);

        Ok(EnhancementResult {
            enhanced_prompt,
            metadata: json!({
                "strategy": self.name(),
                "modifications": [format!("Added {} examples", examples.len())],
                "exampleType": opts.example_type.as_str(),
                "position": opts.position.as_str(),
            }),
        })
    }
}

/// Generate 1-indexed placeholder examples; zero or negative counts yield none.
fn generate_examples(count: i64, example_type: ExampleType) -> Vec<String> {
    if count <= 0 {
        return Vec::new();
    }

    (1..=count)
        .map(|i| format!("Example {}: {}", i, example_type.phrase()))
        .collect()
}

fn combine(prompt: &str, examples: &[String], position: Position) -> String {
    if examples.is_empty() {
        return prompt.to_string();
    }

    let section = format!("\nEXAMPLES:\n{}\n", examples.join("\n\n"));

    match position {
        Position::Before => format!("{}\n\nPROMPT:\n{}", section, prompt),
        Position::After => format!("{}\n\n{}", prompt, section),
    }
}
