//! Deterministic fallback plan synthesis.
//!
//! Used whenever no model credential is configured or the model call fails.
//! Pure function over an already-validated brief: no I/O, no randomness, and
//! it cannot fail -- every interpolated field is a non-empty string by the
//! time it gets here. This output is user-visible, so the templates below
//! are the product, not placeholders.

use crate::brief::{CampaignBrief, Timeframe};

use super::types::{
    AutomationFlow, CampaignPlan, CampaignSummary, ChannelPlay, Experiment,
    IdealCustomerProfile, MessagingPillar,
};

/// Synthesize a complete, schema-conformant plan from the brief alone.
pub fn synthesize_fallback(brief: &CampaignBrief) -> CampaignPlan {
    let cadence = match brief.timeframe {
        Timeframe::TwoWeeks => "3x weekly",
        _ => "Weekly",
    };

    let channel_strategy: Vec<ChannelPlay> = brief
        .channels
        .iter()
        .map(|channel| ChannelPlay {
            channel: channel.label().to_owned(),
            objective: format!(
                "Open conversations with {} and qualify interest",
                brief.target_customer
            ),
            play: format!(
                "Run a {} {} sequence: three touches per prospect, one clear call to action each",
                brief.budget_level,
                channel.label()
            ),
            cadence: cadence.to_owned(),
            sample_copy: format!(
                "Hi {{{{firstName}}}} -- {}. Worth a quick look?",
                brief.offer
            ),
        })
        .collect();

    CampaignPlan {
        summary: CampaignSummary {
            north_star: format!(
                "Build a predictable lead pipeline for {} over the next {}",
                brief.business_name, brief.timeframe
            ),
            success_metrics: vec![
                "Qualified leads per week".to_owned(),
                "Reply rate on outbound messages".to_owned(),
                "Meetings booked".to_owned(),
                "Cost per qualified lead".to_owned(),
            ],
            positioning_theme: format!(
                "Lead every message with what sets you apart: {}",
                brief.unique_value.to_lowercase()
            ),
        },
        ideal_customer_profile: IdealCustomerProfile {
            company_traits: vec![
                format!("Operates in or adjacent to the {} space", brief.industry),
                "Has an active, budgeted need this quarter".to_owned(),
                "Small enough to decide quickly, large enough to pay".to_owned(),
            ],
            buyer_persona: vec![
                "Owns the number your product moves".to_owned(),
                "Evaluates tools hands-on before involving procurement".to_owned(),
                "Responds to peer proof over vendor claims".to_owned(),
            ],
            pain_points: vec![
                "Current approach is manual and does not scale".to_owned(),
                "Past solutions over-promised and under-delivered".to_owned(),
                "No clear way to measure what is working".to_owned(),
            ],
        },
        messaging_pillars: vec![
            MessagingPillar {
                title: "Value driver".to_owned(),
                angle: format!(
                    "Show concretely how {} moves the buyer's core metric",
                    brief.product_description
                ),
                proof_points: vec![
                    "Lead with one specific, measurable outcome".to_owned(),
                    "Quantify the cost of the status quo".to_owned(),
                    "Name the result a comparable customer saw".to_owned(),
                ],
            },
            MessagingPillar {
                title: "Risk reducer".to_owned(),
                angle: "Make trying it feel safe and reversible".to_owned(),
                proof_points: vec![
                    "Offer a low-commitment first step".to_owned(),
                    "Show how quickly they see first value".to_owned(),
                    "Spell out what happens if it does not fit".to_owned(),
                ],
            },
        ],
        channel_strategy,
        automation_workflow: vec![AutomationFlow {
            name: "New lead nurture".to_owned(),
            trigger: "A new lead submits the campaign form or replies to outreach".to_owned(),
            steps: vec![
                "Send a same-day welcome note that restates the offer".to_owned(),
                "Follow up in two days with one proof point and a question".to_owned(),
                "Hand off to a human as soon as the lead replies".to_owned(),
            ],
        }],
        experiments: vec![
            Experiment {
                hypothesis: "A shorter, single-question opener outperforms the full pitch".to_owned(),
                experiment: "Split the first touch 50/50 between the two openers for one cadence cycle".to_owned(),
                metric: "Reply rate".to_owned(),
            },
            Experiment {
                hypothesis: "Leading with the offer beats leading with the product".to_owned(),
                experiment: "Swap the order of offer and product lines in the second touch".to_owned(),
                metric: "Positive reply rate".to_owned(),
            },
        ],
        next_steps: vec![
            "Pick the single success metric the team reviews weekly".to_owned(),
            "Load the first 50 prospects into the top channel".to_owned(),
            "Ship the first cadence cycle and log every reply".to_owned(),
            "Review results at the end of the first cycle and cut what is not working".to_owned(),
        ],
    }
}
