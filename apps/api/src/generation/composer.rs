//! Resume composition: profile (and optionally a job description) in,
//! backend-written resume text out.
//!
//! The composer owns prompt construction only. Everything about talking to
//! the backend, including error classification, lives behind `TextGenerator`.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::generation::prompts::{BASIC_RESUME_PROMPT, TARGETED_RESUME_PROMPT};
use crate::llm_client::{GenerationError, TextGenerator};
use crate::models::UserProfile;

// ────────────────────────────────────────────────────────────────────────────
// Prompt construction
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptVariant {
    Basic,
    Targeted { job_description: String },
}

impl PromptVariant {
    pub fn for_job(job_description: Option<&str>) -> Self {
        match job_description {
            Some(description) => PromptVariant::Targeted {
                job_description: description.to_string(),
            },
            None => PromptVariant::Basic,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PromptVariant::Basic => "basic",
            PromptVariant::Targeted { .. } => "targeted",
        }
    }
}

/// Fills the variant's template from the profile. Blank profile fields are
/// embedded as-is; the backend is trusted to cope.
pub fn build_prompt(profile: &UserProfile, variant: &PromptVariant) -> String {
    let (template, job_description) = match variant {
        PromptVariant::Basic => (BASIC_RESUME_PROMPT, ""),
        PromptVariant::Targeted { job_description } => {
            (TARGETED_RESUME_PROMPT, job_description.as_str())
        }
    };

    let education = &profile.education;
    let skills = profile.skills.join(", ");
    let projects = profile
        .projects
        .iter()
        .map(|p| format!("- {}", p.title))
        .collect::<Vec<_>>()
        .join("\n");
    let experience = profile
        .experience
        .iter()
        .map(|e| format!("- {} at {} ({})", e.role, e.company_name, e.duration))
        .collect::<Vec<_>>()
        .join("\n");

    fill(
        template,
        &[
            ("job_description", job_description),
            ("name", profile.name.as_str()),
            ("email", profile.email.as_str()),
            ("phone", profile.phone.as_str()),
            ("skills", skills.as_str()),
            ("graduation_degree", education.graduation_degree.as_str()),
            ("graduation_institute", education.graduation_institute.as_str()),
            ("graduation_year", education.graduation_year.as_str()),
            ("twelfth_board", education.twelfth_board.as_str()),
            ("twelfth_year", education.twelfth_year.as_str()),
            ("tenth_board", education.tenth_board.as_str()),
            ("tenth_year", education.tenth_year.as_str()),
            ("projects", projects.as_str()),
            ("experience", experience.as_str()),
        ],
    )
}

/// Single pass over the template: substituted text is never scanned again,
/// and unknown `{...}` sequences are copied through.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let value = tail.find('}').and_then(|close| {
            let key = &tail[1..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (close, *v))
        });
        match value {
            Some((close, value)) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Composer
// ────────────────────────────────────────────────────────────────────────────

/// Stateless apart from its backend handle; safe to share across requests.
#[derive(Clone)]
pub struct ResumeComposer {
    generator: Arc<dyn TextGenerator>,
}

impl ResumeComposer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Basic resume when `job_description` is `None`, targeted otherwise.
    pub async fn compose(
        &self,
        profile: &UserProfile,
        job_description: Option<&str>,
    ) -> Result<String, GenerationError> {
        let variant = PromptVariant::for_job(job_description);
        let prompt = build_prompt(profile, &variant);
        debug!("Composing {} resume ({} char prompt)", variant.label(), prompt.len());

        let result = self.generator.generate(&prompt).await;
        log_outcome(&variant, &result);
        result
    }

    /// As [`ResumeComposer::compose`], but gives up with
    /// `GenerationError::Cancelled` as soon as `token` fires.
    pub async fn compose_cancellable(
        &self,
        profile: &UserProfile,
        job_description: Option<&str>,
        token: &CancellationToken,
    ) -> Result<String, GenerationError> {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!("Resume generation cancelled");
                Err(GenerationError::Cancelled)
            }
            result = self.compose(profile, job_description) => result,
        }
    }
}

fn log_outcome(variant: &PromptVariant, result: &Result<String, GenerationError>) {
    match result {
        Ok(text) => info!("Generated {} resume: {} chars", variant.label(), text.len()),
        Err(e) if e.is_cancelled() => {}
        Err(e) => warn!("Error generating {} resume: {e}", variant.label()),
    }
}
