//! Domain knowledge enhancer - prepends domain-specific knowledge blocks

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use super::{parse_options, Enhancer, EnhancementResult};
use crate::error::EnhanceError;

/// How deep the domain knowledge goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeDepth {
    Basic,
    #[default]
    Intermediate,
    Advanced,
}

impl KnowledgeDepth {
    pub fn as_str(self) -> &'static str {
        match self {
            KnowledgeDepth::Basic => "basic",
            KnowledgeDepth::Intermediate => "intermediate",
            KnowledgeDepth::Advanced => "advanced",
        }
    }

    fn line(self, domain: &str) -> String {
        match self {
            KnowledgeDepth::Basic => format!(
                "Basic {} concepts: Foundational information about this domain.",
                domain
            ),
            KnowledgeDepth::Intermediate => format!(
                "Intermediate {} concepts: More detailed information about this domain.",
                domain
            ),
            KnowledgeDepth::Advanced => format!(
                "Advanced {} concepts: Specialized information for experts in this domain.",
                domain
            ),
        }
    }
}

/// Options accepted by the domain knowledge enhancer. `domain` is the one
/// mandatory option in the whole strategy set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DomainKnowledgeOptions {
    pub domain: Option<String>,
    pub depth: KnowledgeDepth,
    pub include_terminology: Option<bool>,
    pub include_principles: Option<bool>,
}

/// Enhances prompts by adding domain-specific knowledge
#[derive(Debug, Default)]
pub struct DomainKnowledgeEnhancer;

impl Enhancer for DomainKnowledgeEnhancer {
    fn name(&self) -> &'static str {
        "domain-knowledge"
    }

    fn description(&self) -> &'static str {
        "Enhances prompts by adding domain-specific knowledge"
    }

    fn enhance(&self, prompt: &str, options: &Value) -> Result<EnhancementResult, EnhanceError> {
        let opts: DomainKnowledgeOptions = parse_options(options)?;
        debug!("Enhancing prompt with domain knowledge: {:?}", opts);

        let domain = match opts.domain.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => return Err(EnhanceError::MissingDomain),
        };

        let include_terminology = opts.include_terminology.unwrap_or(true);
        let include_principles = opts.include_principles.unwrap_or(true);

        let additions =
            generate_knowledge(domain, opts.depth, include_terminology, include_principles);

        // The "Domain:" line is always present, so the block is never empty.
        let enhanced_prompt = format!(
            "\nDOMAIN KNOWLEDGE:\n{}\n\nPROMPT:\n{}",
            additions.join("\n"),
            prompt
        );

        Ok(EnhancementResult {
            enhanced_prompt,
            metadata: json!({
                "strategy": self.name(),
                "modifications": [format!("Added {} domain knowledge elements", additions.len())],
                "domain": domain,
                "depth": opts.depth.as_str(),
            }),
        })
    }
}

fn generate_knowledge(
    domain: &str,
    depth: KnowledgeDepth,
    include_terminology: bool,
    include_principles: bool,
) -> Vec<String> {
    let mut additions = vec![format!("Domain: {}", domain)];

    if include_terminology {
        additions.push(format!(
            "{} Terminology: Key terms relevant to this domain.",
            domain
        ));
    }

    if include_principles {
        additions.push(format!(
            "{} Principles: Fundamental principles in this domain.",
            domain
        ));
    }

    additions.push(depth.line(domain));

    additions
}
