//! Wire types for the campaign plan.
//!
//! These map one-to-one onto the JSON contract the presentation layer
//! consumes (camelCase field names). The same shape is what the model is
//! instructed to emit, so `serde` deserialization doubles as the first
//! stage of model-output validation.

use serde::{Deserialize, Serialize};

/// The structured multi-section campaign blueprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPlan {
    pub summary: CampaignSummary,
    pub ideal_customer_profile: IdealCustomerProfile,
    pub messaging_pillars: Vec<MessagingPillar>,
    pub channel_strategy: Vec<ChannelPlay>,
    pub automation_workflow: Vec<AutomationFlow>,
    pub experiments: Vec<Experiment>,
    pub next_steps: Vec<String>,
}

/// Top-of-plan summary: the single goal the campaign optimizes for, how
/// success is measured, and the positioning angle everything hangs off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    pub north_star: String,
    pub success_metrics: Vec<String>,
    pub positioning_theme: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdealCustomerProfile {
    pub company_traits: Vec<String>,
    pub buyer_persona: Vec<String>,
    pub pain_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingPillar {
    pub title: String,
    pub angle: String,
    pub proof_points: Vec<String>,
}

/// One play per selected channel, in brief order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelPlay {
    pub channel: String,
    pub objective: String,
    pub play: String,
    pub cadence: String,
    pub sample_copy: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationFlow {
    pub name: String,
    pub trigger: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experiment {
    pub hypothesis: String,
    pub experiment: String,
    pub metric: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_wire_format() {
        let value = json!({
            "summary": {
                "northStar": "Book 20 demos",
                "successMetrics": ["demos booked"],
                "positioningTheme": "fastest setup"
            },
            "idealCustomerProfile": {
                "companyTraits": ["50-200 employees"],
                "buyerPersona": ["Head of Ops"],
                "painPoints": ["manual work"]
            },
            "messagingPillars": [
                {"title": "Speed", "angle": "live in a day", "proofPoints": ["1-day install"]}
            ],
            "channelStrategy": [
                {"channel": "Email", "objective": "open conversations", "play": "3-touch sequence",
                 "cadence": "Weekly", "sampleCopy": "Hi {{firstName}}"}
            ],
            "automationWorkflow": [
                {"name": "Nurture", "trigger": "form submit", "steps": ["send welcome"]}
            ],
            "experiments": [
                {"hypothesis": "shorter subject lines win", "experiment": "A/B subjects", "metric": "open rate"}
            ],
            "nextSteps": ["set up tracking"]
        });

        let plan: CampaignPlan = serde_json::from_value(value).expect("should deserialize");
        assert_eq!(plan.summary.north_star, "Book 20 demos");
        assert_eq!(plan.channel_strategy[0].sample_copy, "Hi {{firstName}}");
        assert_eq!(plan.next_steps, vec!["set up tracking"]);
    }

    #[test]
    fn serializes_back_to_camel_case() {
        let plan = CampaignPlan {
            summary: CampaignSummary {
                north_star: "n".into(),
                success_metrics: vec!["m".into()],
                positioning_theme: "p".into(),
            },
            ideal_customer_profile: IdealCustomerProfile {
                company_traits: vec!["t".into()],
                buyer_persona: vec!["b".into()],
                pain_points: vec!["pp".into()],
            },
            messaging_pillars: vec![MessagingPillar {
                title: "t".into(),
                angle: "a".into(),
                proof_points: vec!["p".into()],
            }],
            channel_strategy: vec![ChannelPlay {
                channel: "Email".into(),
                objective: "o".into(),
                play: "p".into(),
                cadence: "Weekly".into(),
                sample_copy: "s".into(),
            }],
            automation_workflow: vec![AutomationFlow {
                name: "n".into(),
                trigger: "t".into(),
                steps: vec!["s".into()],
            }],
            experiments: vec![Experiment {
                hypothesis: "h".into(),
                experiment: "e".into(),
                metric: "m".into(),
            }],
            next_steps: vec!["go".into()],
        };

        let value = serde_json::to_value(&plan).unwrap();
        assert!(value["summary"]["northStar"].is_string());
        assert!(value["idealCustomerProfile"]["painPoints"].is_array());
        assert!(value["channelStrategy"][0]["sampleCopy"].is_string());
        assert!(value["nextSteps"].is_array());
    }

    #[test]
    fn missing_section_fails_deserialization() {
        let value = json!({
            "summary": {
                "northStar": "n",
                "successMetrics": ["m"],
                "positioningTheme": "p"
            }
        });
        assert!(serde_json::from_value::<CampaignPlan>(value).is_err());
    }
}
