//! Prompt construction: renders a validated brief into the single user
//! message sent to the model.
//!
//! Pure and deterministic: the same brief always produces the same prompt,
//! which keeps the model path testable without a network.

use crate::brief::CampaignBrief;

/// System message fixing the assistant persona and the JSON-only contract.
pub const SYSTEM_PERSONA: &str = "You are a senior growth marketer who designs \
lead-generation campaigns for small and mid-size businesses. You respond with \
a single JSON object and nothing else: no prose, no markdown, no code fences.";

/// JSON shape reference included in the prompt.
const SCHEMA_REFERENCE: &str = r#"## Output Shape

Emit exactly one JSON object with this structure (field names are literal):

{
  "summary": {
    "northStar": "string",
    "successMetrics": ["string", ...],
    "positioningTheme": "string"
  },
  "idealCustomerProfile": {
    "companyTraits": ["string", ...],
    "buyerPersona": ["string", ...],
    "painPoints": ["string", ...]
  },
  "messagingPillars": [
    { "title": "string", "angle": "string", "proofPoints": ["string", ...] }
  ],
  "channelStrategy": [
    {
      "channel": "string",
      "objective": "string",
      "play": "string",
      "cadence": "string",
      "sampleCopy": "string"
    }
  ],
  "automationWorkflow": [
    { "name": "string", "trigger": "string", "steps": ["string", ...] }
  ],
  "experiments": [
    { "hypothesis": "string", "experiment": "string", "metric": "string" }
  ],
  "nextSteps": ["string", ...]
}

Every array must contain at least one entry. channelStrategy must contain
exactly one entry per selected channel, in the order the channels are listed
in the brief.
"#;

/// Build the user prompt for a validated brief.
///
/// Interpolates every brief field into a fixed template, then appends the
/// output-shape contract.
pub fn build_prompt(brief: &CampaignBrief) -> String {
    let mut prompt = String::with_capacity(2048);

    prompt.push_str("# Campaign Brief\n\n");
    prompt.push_str(&format!("- **Business:** {}\n", brief.business_name));
    prompt.push_str(&format!("- **Industry:** {}\n", brief.industry));
    prompt.push_str(&format!("- **Product:** {}\n", brief.product_description));
    prompt.push_str(&format!("- **Target customer:** {}\n", brief.target_customer));
    prompt.push_str(&format!("- **Unique value:** {}\n", brief.unique_value));

    let goals: Vec<&str> = brief.goals.iter().map(|g| g.label()).collect();
    prompt.push_str(&format!("- **Goals:** {}\n", goals.join(", ")));

    let channels: Vec<&str> = brief.channels.iter().map(|c| c.label()).collect();
    prompt.push_str(&format!("- **Channels (in order):** {}\n", channels.join(", ")));

    prompt.push_str(&format!("- **Tone:** {}\n", brief.tone));
    prompt.push_str(&format!("- **Offer:** {}\n", brief.offer));
    prompt.push_str(&format!("- **Budget level:** {}\n", brief.budget_level));
    prompt.push_str(&format!("- **Timeframe:** {}\n", brief.timeframe));

    if let Some(notes) = &brief.notes {
        prompt.push_str(&format!("- **Notes:** {notes}\n"));
    }

    prompt.push('\n');
    prompt.push_str(
        "Design a lead-generation campaign blueprint for this business. \
         Ground every section in the brief above; write sampleCopy in the \
         requested tone and reference the offer in it.\n\n",
    );

    prompt.push_str(SCHEMA_REFERENCE);
    prompt.push('\n');
    prompt.push_str(
        "Respond with ONLY the JSON object. Do not wrap it in code fences. \
         Do not add commentary before or after it.\n",
    );

    prompt
}
