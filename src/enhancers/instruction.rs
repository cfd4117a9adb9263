//! Instruction enhancer - appends directive sentences after the prompt

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use super::{parse_options, Enhancer, EnhancementResult};
use crate::error::EnhanceError;

/// Kind of directive sentence to lead with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstructionType {
    #[default]
    Clarity,
    Reasoning,
    Structure,
    Comprehensive,
}

impl InstructionType {
    pub fn as_str(self) -> &'static str {
        match self {
            InstructionType::Clarity => "clarity",
            InstructionType::Reasoning => "reasoning",
            InstructionType::Structure => "structure",
            InstructionType::Comprehensive => "comprehensive",
        }
    }

    fn sentence(self) -> &'static str {
        match self {
            InstructionType::Clarity => "Please provide a clear and concise response.",
            InstructionType::Reasoning => "Please explain your reasoning process thoroughly.",
            InstructionType::Structure => {
                "Please structure your response with clear sections and headings."
            }
            InstructionType::Comprehensive => {
                "Please provide a comprehensive response that covers all aspects of the question."
            }
        }
    }
}

/// Options accepted by the instruction enhancer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstructionOptions {
    pub instruction_type: InstructionType,
    pub add_step_by_step: bool,
    pub add_reasoning: bool,
}

impl Default for InstructionOptions {
    fn default() -> Self {
        Self {
            instruction_type: InstructionType::Clarity,
            add_step_by_step: true,
            add_reasoning: true,
        }
    }
}

/// Enhances prompts by refining instructions for better reasoning and clarity
#[derive(Debug, Default)]
pub struct InstructionEnhancer;

impl Enhancer for InstructionEnhancer {
    fn name(&self) -> &'static str {
        "instruction"
    }

    fn description(&self) -> &'static str {
        "Enhances prompts by refining instructions for better reasoning and clarity"
    }

    fn enhance(&self, prompt: &str, options: &Value) -> Result<EnhancementResult, EnhanceError> {
        let opts: InstructionOptions = parse_options(options)?;
        debug!("Enhancing prompt with instructions: {:?}", opts);

        let additions = generate_instructions(&opts);

        // The type sentence is always present, so the section is never empty
        // and the block is always appended after the prompt.
        let enhanced_prompt = format!(
            "{}\n\n\nINSTRUCTIONS:\n{}\n",
            prompt,
            additions.join("\n")
        );

        Ok(EnhancementResult {
            enhanced_prompt,
            metadata: json!({
                "strategy": self.name(),
                "modifications": [format!("Added {} instruction enhancements", additions.len())],
                "instructionType": opts.instruction_type.as_str(),
                "addedStepByStep": opts.add_step_by_step,
                "addedReasoning": opts.add_reasoning,
            }),
        })
    }
}

fn generate_instructions(opts: &InstructionOptions) -> Vec<String> {
    let mut additions = vec![opts.instruction_type.sentence().to_string()];

    if opts.add_step_by_step {
        additions.push("Break down your approach into clear, sequential steps.".to_string());
    }

    if opts.add_reasoning {
        additions
            .push("For each conclusion, explain the reasoning that led you to it.".to_string());
    }

    additions
}
