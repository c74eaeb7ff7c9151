//! HPI drafting service — prompt assembly plus backend dispatch.
//!
//! With a configured backend the encounter form becomes a scribe prompt
//! submitted for generation; without one the service produces the
//! deterministic local draft so the endpoint stays usable offline.

pub mod generation;
pub mod prompt;

use serde::Serialize;

use self::generation::{GenerationError, GptClient, TextGenerator};
pub use self::prompt::EncounterForm;

/// Where a narrative came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeSource {
    Backend,
    LocalDraft,
}

/// A finished HPI draft.
#[derive(Debug, Clone, Serialize)]
pub struct HpiResult {
    pub generated_hpi: String,
    pub source: NarrativeSource,
}

/// HPI drafting service. Holds the configured generator, if any.
pub struct HpiService {
    generator: Option<Box<dyn TextGenerator>>,
}

impl HpiService {
    /// Configure from the environment. Logs which path was selected.
    pub fn from_env() -> Self {
        match GptClient::from_env() {
            Some(client) => {
                tracing::info!(
                    backend = %client.base_url(),
                    model = %client.model(),
                    "HPI generation backend configured"
                );
                Self {
                    generator: Some(Box::new(client)),
                }
            }
            None => {
                tracing::info!("No generation backend configured; serving local HPI drafts");
                Self { generator: None }
            }
        }
    }

    /// Use an explicit generator (tests, alternative backends).
    pub fn with_generator(generator: Box<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// Local-draft-only service.
    pub fn local_only() -> Self {
        Self { generator: None }
    }

    pub fn is_backed(&self) -> bool {
        self.generator.is_some()
    }

    /// Draft an HPI narrative for the encounter.
    pub fn draft(&self, form: &EncounterForm) -> Result<HpiResult, GenerationError> {
        match &self.generator {
            Some(generator) => {
                let user_prompt = prompt::build_hpi_prompt(form);
                let text = generator.generate(prompt::SCRIBE_SYSTEM_PROMPT, &user_prompt)?;
                Ok(HpiResult {
                    generated_hpi: text,
                    source: NarrativeSource::Backend,
                })
            }
            None => Ok(HpiResult {
                generated_hpi: prompt::local_draft(form),
                source: NarrativeSource::LocalDraft,
            }),
        }
    }
}
