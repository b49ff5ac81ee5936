//! Plan orchestration: composes validation output, the model path, the
//! parser, and the fallback synthesizer into one response per request.
//!
//! The flow per request: the caller validates the brief at the boundary,
//! then calls [`Generator::generate`] exactly once. Every terminal state
//! yields exactly one [`PlanResponse`]; nothing here retries, streams, or
//! panics.

use std::sync::Arc;

use serde::Serialize;

use crate::brief::CampaignBrief;
use crate::model::ModelClient;
use crate::plan::{CampaignPlan, SYSTEM_PERSONA, build_prompt, parse_plan, synthesize_fallback};

/// Warning attached when no model credential is configured.
pub const NO_MODEL_WARNING: &str =
    "no model credential is configured; returning a deterministic fallback plan";

/// Warning attached when the model call failed.
pub const MODEL_FAILED_WARNING: &str =
    "the model call failed; returning a deterministic fallback plan";

/// The response body for one generation request.
///
/// Exactly one of `plan` and `raw` is populated. `plan` and `raw` always
/// serialize (as `null` when absent) so the presentation layer can branch on
/// them; `warning` and `notice` are omitted when empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub plan: Option<CampaignPlan>,
    pub raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl PlanResponse {
    fn with_plan(plan: CampaignPlan, notice: Option<String>) -> Self {
        Self {
            plan: Some(plan),
            raw: None,
            warning: None,
            notice,
        }
    }

    fn fallback(plan: CampaignPlan, warning: &str) -> Self {
        Self {
            plan: Some(plan),
            raw: None,
            warning: Some(warning.to_owned()),
            notice: None,
        }
    }

    fn raw_surfaced(raw: Option<String>, notice: Option<String>) -> Self {
        Self {
            plan: None,
            raw,
            warning: None,
            notice,
        }
    }
}

/// Request-scoped plan generation.
///
/// Holds only the optional model client; there is no other state, so a
/// single `Generator` is safely shared across concurrent requests.
pub struct Generator {
    model: Option<Arc<dyn ModelClient>>,
}

impl Generator {
    pub fn new(model: Option<Arc<dyn ModelClient>>) -> Self {
        Self { model }
    }

    /// Name of the configured model client, or "fallback" when none is.
    pub fn model_name(&self) -> &str {
        self.model.as_deref().map_or("fallback", |m| m.name())
    }

    /// Produce one plan response for a validated brief.
    ///
    /// The fallback synthesizer covers unavailability and call failure only.
    /// A response that arrived but cannot be parsed is surfaced raw -- a
    /// malformed model answer is never silently replaced with fabricated
    /// structure.
    pub async fn generate(&self, brief: &CampaignBrief) -> PlanResponse {
        let Some(client) = &self.model else {
            tracing::info!("no model configured; synthesizing fallback plan");
            return PlanResponse::fallback(synthesize_fallback(brief), NO_MODEL_WARNING);
        };

        let prompt = build_prompt(brief);
        match client.complete(SYSTEM_PERSONA, &prompt).await {
            Ok(text) => {
                let outcome = parse_plan(&text);
                match outcome.plan {
                    Some(plan) => PlanResponse::with_plan(plan, outcome.message),
                    None => {
                        tracing::warn!("model output unparseable; surfacing raw text");
                        PlanResponse::raw_surfaced(outcome.raw, outcome.message)
                    }
                }
            }
            Err(err) => {
                // Logged server-side only; the client sees a generic warning.
                tracing::warn!(model = client.name(), error = %err, "model call failed");
                PlanResponse::fallback(synthesize_fallback(brief), MODEL_FAILED_WARNING)
            }
        }
    }
}
