//! Model-output parser with best-effort recovery.
//!
//! Two-stage attempt: a strict decode of the full text, then a bounded
//! substring decode between the first `{` and the last `}` for models that
//! wrap the JSON in prose or code fences. The outer-span heuristic can
//! mis-extract when the surrounding prose itself contains a stray `}` before
//! the real JSON opens; that is a known, accepted limitation.

use thiserror::Error;

use super::types::CampaignPlan;

/// Notice attached when the plan was recovered from surrounding prose.
pub const RECOVERED_MESSAGE: &str =
    "plan was recovered from surrounding prose in the model output";

/// Notice attached when the model output could not be parsed at all.
pub const UNPARSEABLE_MESSAGE: &str =
    "model output could not be parsed as a structured plan";

/// Result of parsing model output.
///
/// Exactly one of `plan` and `raw` is `Some`. `message` carries a recovery
/// notice (plan present) or the unparseable notice (raw present).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub plan: Option<CampaignPlan>,
    pub raw: Option<String>,
    pub message: Option<String>,
}

/// Why a candidate text failed to decode into a valid plan.
#[derive(Debug, Error)]
enum DecodeError {
    #[error("JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("plan field {0} is empty")]
    EmptyField(&'static str),
}

/// Parse raw model output into a plan, recovering from prose-wrapped JSON.
pub fn parse_plan(model_text: &str) -> ParseOutcome {
    // Stage 1: strict decode of the whole text.
    match decode(model_text.trim()) {
        Ok(plan) => {
            return ParseOutcome {
                plan: Some(plan),
                raw: None,
                message: None,
            };
        }
        Err(err) => tracing::debug!(error = %err, "strict plan decode failed"),
    }

    // Stage 2: outermost brace span. First `{` to last `}`, deliberately not
    // the first balanced span -- models sometimes emit explanatory text with
    // stray braces before the real JSON block.
    if let Some(candidate) = outer_brace_span(model_text) {
        match decode(candidate) {
            Ok(plan) => {
                return ParseOutcome {
                    plan: Some(plan),
                    raw: None,
                    message: Some(RECOVERED_MESSAGE.to_owned()),
                };
            }
            Err(err) => tracing::debug!(error = %err, "recovered-span plan decode failed"),
        }
    }

    // Stage 3: surface the raw text unchanged; the caller decides what to do
    // with it. No fallback plan is fabricated here.
    ParseOutcome {
        plan: None,
        raw: Some(model_text.to_owned()),
        message: Some(UNPARSEABLE_MESSAGE.to_owned()),
    }
}

/// The substring from the first `{` to the last `}`, if both exist in order.
fn outer_brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start < end { Some(&text[start..=end]) } else { None }
}

/// Decode a candidate text and check the plan shape.
fn decode(text: &str) -> Result<CampaignPlan, DecodeError> {
    let plan: CampaignPlan = serde_json::from_str(text)?;
    validate_shape(&plan)?;
    Ok(plan)
}

/// A plan is only usable when every list field is non-empty.
fn validate_shape(plan: &CampaignPlan) -> Result<(), DecodeError> {
    if plan.summary.success_metrics.is_empty() {
        return Err(DecodeError::EmptyField("summary.successMetrics"));
    }
    if plan.ideal_customer_profile.company_traits.is_empty() {
        return Err(DecodeError::EmptyField("idealCustomerProfile.companyTraits"));
    }
    if plan.ideal_customer_profile.buyer_persona.is_empty() {
        return Err(DecodeError::EmptyField("idealCustomerProfile.buyerPersona"));
    }
    if plan.ideal_customer_profile.pain_points.is_empty() {
        return Err(DecodeError::EmptyField("idealCustomerProfile.painPoints"));
    }
    if plan.messaging_pillars.is_empty() {
        return Err(DecodeError::EmptyField("messagingPillars"));
    }
    if plan.messaging_pillars.iter().any(|p| p.proof_points.is_empty()) {
        return Err(DecodeError::EmptyField("messagingPillars[].proofPoints"));
    }
    if plan.channel_strategy.is_empty() {
        return Err(DecodeError::EmptyField("channelStrategy"));
    }
    if plan.automation_workflow.is_empty() {
        return Err(DecodeError::EmptyField("automationWorkflow"));
    }
    if plan.automation_workflow.iter().any(|f| f.steps.is_empty()) {
        return Err(DecodeError::EmptyField("automationWorkflow[].steps"));
    }
    if plan.experiments.is_empty() {
        return Err(DecodeError::EmptyField("experiments"));
    }
    if plan.next_steps.is_empty() {
        return Err(DecodeError::EmptyField("nextSteps"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::{BudgetLevel, CampaignBrief, Channel, Goal, Timeframe, Tone};
    use crate::plan::synthesize_fallback;

    fn sample_brief() -> CampaignBrief {
        CampaignBrief {
            business_name: "Acme Robotics".to_owned(),
            industry: "industrial automation".to_owned(),
            product_description: "A plug-and-play robotic arm".to_owned(),
            target_customer: "Operations leads".to_owned(),
            unique_value: "Installs in one day".to_owned(),
            goals: vec![Goal::Leads],
            channels: vec![Channel::Email, Channel::Webinar],
            tone: Tone::Friendly,
            offer: "Free automation audit".to_owned(),
            notes: None,
            budget_level: BudgetLevel::Lean,
            timeframe: Timeframe::TwoWeeks,
        }
    }

    fn valid_plan_json() -> String {
        // The fallback synthesizer emits a schema-conformant plan, which
        // makes it a convenient source of valid JSON.
        serde_json::to_string(&synthesize_fallback(&sample_brief())).unwrap()
    }

    #[test]
    fn parses_exact_json() {
        let json = valid_plan_json();
        let outcome = parse_plan(&json);
        assert!(outcome.plan.is_some());
        assert_eq!(outcome.raw, None);
        assert_eq!(outcome.message, None);
    }

    #[test]
    fn parses_json_with_surrounding_whitespace() {
        let json = format!("\n\n  {}  \n", valid_plan_json());
        let outcome = parse_plan(&json);
        assert!(outcome.plan.is_some());
        assert_eq!(outcome.message, None, "whitespace alone is not a recovery");
    }

    #[test]
    fn recovers_json_wrapped_in_prose() {
        let text = format!("Sure! Here you go: {} Hope that helps.", valid_plan_json());
        let outcome = parse_plan(&text);
        assert!(outcome.plan.is_some(), "should recover plan from prose");
        assert_eq!(outcome.raw, None);
        assert_eq!(outcome.message.as_deref(), Some(RECOVERED_MESSAGE));
    }

    #[test]
    fn recovers_json_wrapped_in_code_fence() {
        let text = format!("```json\n{}\n```", valid_plan_json());
        let outcome = parse_plan(&text);
        assert!(outcome.plan.is_some(), "should recover plan from code fence");
        assert_eq!(outcome.message.as_deref(), Some(RECOVERED_MESSAGE));
    }

    #[test]
    fn surfaces_raw_text_when_unparseable() {
        let text = "I cannot help with that.";
        let outcome = parse_plan(text);
        assert_eq!(outcome.plan, None);
        assert_eq!(outcome.raw.as_deref(), Some(text));
        assert_eq!(outcome.message.as_deref(), Some(UNPARSEABLE_MESSAGE));
    }

    #[test]
    fn surfaces_raw_text_on_schema_mismatch() {
        let text = r#"{"summary": "this is not the right shape"}"#;
        let outcome = parse_plan(text);
        assert_eq!(outcome.plan, None);
        assert_eq!(outcome.raw.as_deref(), Some(text));
    }

    #[test]
    fn rejects_plan_with_empty_list_field() {
        let mut value: serde_json::Value = serde_json::from_str(&valid_plan_json()).unwrap();
        value["nextSteps"] = serde_json::json!([]);
        let text = value.to_string();
        let outcome = parse_plan(&text);
        assert_eq!(outcome.plan, None, "empty nextSteps should fail shape check");
        assert_eq!(outcome.raw.as_deref(), Some(text.as_str()));
    }

    #[test]
    fn stray_closing_brace_before_json_defeats_recovery() {
        // Known limitation of the outer-span heuristic: a stray `}` in the
        // prose shifts the span start past nothing but leaves the candidate
        // `{...}` span covering non-JSON prose.
        let text = format!("Weird prose }} with a brace. {}", valid_plan_json());
        let outcome = parse_plan(&text);
        // first '{' is the real one here, so this still recovers...
        assert!(outcome.plan.is_some());

        // ...but a stray '{' before the prose does defeat it.
        let text = format!("{{ weird prose. {}", valid_plan_json());
        let outcome = parse_plan(&text);
        assert_eq!(outcome.plan, None, "stray opening brace defeats recovery");
        assert!(outcome.raw.is_some());
    }

    #[test]
    fn brace_span_requires_order() {
        assert_eq!(outer_brace_span("} no open after {"), None);
        assert_eq!(outer_brace_span("no braces at all"), None);
        assert_eq!(outer_brace_span("{}"), Some("{}"));
    }
}
