//! Legacy template-chain enhancement surface.
//!
//! A deprecated alternate API predating the strategy registry: three
//! single-purpose functions that pick canned prose by numeric depth/count
//! (1-5) or instruction type and substitute it into a configured template,
//! plus a "comprehensive" orchestration chaining all three. New callers
//! should go through [`crate::enhancers::EnhancerRegistry`] instead.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::error::EnhanceError;

/// Inclusive bounds for legacy depth/count parameters
const MIN_LEVEL: u8 = 1;
const MAX_LEVEL: u8 = 5;

/// Instruction flavors of the legacy path. These predate the registry's
/// instruction types and carry different prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegacyInstructionType {
    #[default]
    Clarity,
    Creativity,
    Precision,
    Reasoning,
    Custom,
}

/// Substitute generated content and the original prompt into a two-placeholder
/// template. This is the single substitution primitive behind every legacy
/// function.
fn render_template(template: &str, placeholder: &str, content: &str, prompt: &str) -> String {
    template
        .replacen(placeholder, content, 1)
        .replacen("{{PROMPT}}", prompt, 1)
}

/// Enhance a prompt with canned context prose about `topic`.
///
/// Without a topic the prompt passes through unchanged; this is checked
/// before range validation, matching the historical behavior.
pub fn enhance_with_context(
    config: &Config,
    prompt: &str,
    topic: Option<&str>,
    depth: u8,
) -> Result<String, EnhanceError> {
    let topic = match topic {
        Some(t) if !t.is_empty() => t,
        _ => return Ok(prompt.to_string()),
    };

    if !(MIN_LEVEL..=MAX_LEVEL).contains(&depth) {
        return Err(EnhanceError::OutOfRange {
            what: "Depth",
            min: MIN_LEVEL,
            max: MAX_LEVEL,
        });
    }

    debug!("Legacy context enhancement: topic={}, depth={}", topic, depth);

    let context = context_for_topic(topic, depth);
    Ok(render_template(
        &config.context_template,
        "{{CONTEXT}}",
        &context,
        prompt,
    ))
}

fn context_for_topic(topic: &str, depth: u8) -> String {
    match depth {
        1 => format!("Basic information about {}.", topic),
        2 => format!(
            "Basic information about {}, including key concepts and terminology.",
            topic
        ),
        3 => format!(
            "Comprehensive overview of {}, including key concepts, terminology, and common applications.",
            topic
        ),
        4 => format!(
            "Detailed information about {}, including history, key concepts, terminology, applications, and current trends.",
            topic
        ),
        _ => format!(
            "Expert-level information about {}, including detailed history, theoretical foundations, key concepts, terminology, applications, current trends, and future directions.",
            topic
        ),
    }
}

/// Enhance a prompt with up to five canned examples about `topic`.
pub fn enhance_with_examples(
    config: &Config,
    prompt: &str,
    topic: Option<&str>,
    count: u8,
) -> Result<String, EnhanceError> {
    let topic = match topic {
        Some(t) if !t.is_empty() => t,
        _ => return Ok(prompt.to_string()),
    };

    if !(MIN_LEVEL..=MAX_LEVEL).contains(&count) {
        return Err(EnhanceError::OutOfRange {
            what: "Example count",
            min: MIN_LEVEL,
            max: MAX_LEVEL,
        });
    }

    debug!("Legacy example enhancement: topic={}, count={}", topic, count);

    let pool = [
        format!("Example 1 related to {}: This is a simple demonstration.", topic),
        format!("Example 2 related to {}: This shows a more complex case.", topic),
        format!("Example 3 related to {}: This illustrates an edge case.", topic),
        format!("Example 4 related to {}: This demonstrates best practices.", topic),
        format!("Example 5 related to {}: This shows common pitfalls to avoid.", topic),
    ];

    let examples = pool[..count as usize].join("\n\n");
    Ok(render_template(
        &config.example_template,
        "{{EXAMPLES}}",
        &examples,
        prompt,
    ))
}

/// Enhance a prompt with a canned instruction paragraph.
///
/// `Custom` uses the caller-provided text; a `Custom` request without text
/// falls back to the clarity prose.
pub fn enhance_with_instructions(
    config: &Config,
    prompt: &str,
    instruction_type: LegacyInstructionType,
    custom_instructions: Option<&str>,
) -> String {
    let instructions = match (instruction_type, custom_instructions) {
        (LegacyInstructionType::Custom, Some(text)) if !text.is_empty() => text.to_string(),
        (t, _) => instructions_for_type(t).to_string(),
    };

    debug!("Legacy instruction enhancement: type={:?}", instruction_type);

    render_template(
        &config.instruction_template,
        "{{INSTRUCTIONS}}",
        &instructions,
        prompt,
    )
}

fn instructions_for_type(instruction_type: LegacyInstructionType) -> &'static str {
    match instruction_type {
        LegacyInstructionType::Clarity | LegacyInstructionType::Custom => {
            "Please provide a clear, well-structured response. Use simple language, avoid jargon unless necessary, and organize information logically with headings and bullet points where appropriate."
        }
        LegacyInstructionType::Creativity => {
            "Please provide a creative and innovative response. Think outside the box, consider unconventional approaches, and explore multiple perspectives or solutions."
        }
        LegacyInstructionType::Precision => {
            "Please provide a precise and accurate response. Focus on factual information, cite sources where possible, and be explicit about levels of certainty. Avoid ambiguity and vague statements."
        }
        LegacyInstructionType::Reasoning => {
            "Please provide a response that demonstrates clear reasoning. Explain your thought process step-by-step, consider multiple angles, identify assumptions, and evaluate the strength of different arguments or approaches."
        }
    }
}

/// Chain context, examples, and instructions, each step consuming the
/// previous step's output as its prompt.
pub fn enhance_comprehensive(
    config: &Config,
    prompt: &str,
    topic: Option<&str>,
    depth: u8,
    count: u8,
    instruction_type: LegacyInstructionType,
) -> Result<String, EnhanceError> {
    let with_context = enhance_with_context(config, prompt, topic, depth)?;
    let with_examples = enhance_with_examples(config, &with_context, topic, count)?;
    Ok(enhance_with_instructions(
        config,
        &with_examples,
        instruction_type,
        None,
    ))
}
