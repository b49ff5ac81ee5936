//! Request validation for inbound campaign briefs.
//!
//! An explicit hand-rolled validator over `serde_json::Value`: the brief
//! shape is small and fixed, so field-by-field checks with per-field error
//! attribution beat a derive. Returns the first violation per field; never
//! panics and never short-circuits before every field has been inspected.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

use super::types::{BudgetLevel, CampaignBrief, Channel, Goal, Timeframe, Tone};

/// Maximum length (chars, after trimming) for name-like fields.
pub const MAX_SHORT_FIELD: usize = 120;

/// Maximum length (chars, after trimming) for description-like fields.
pub const MAX_LONG_FIELD: usize = 1000;

/// Field-to-message map returned on validation failure.
///
/// Serializes as `{"fieldErrors": {"businessName": "...", ...}}`. Holds at
/// most one message per field (the first violation found).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    pub field_errors: BTreeMap<String, String>,
}

impl FieldErrors {
    /// Record an error for `field` unless one is already present.
    fn record(&mut self, field: &str, message: impl Into<String>) {
        self.field_errors
            .entry(field.to_owned())
            .or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }
}

/// Validate an unvalidated request body into a [`CampaignBrief`].
///
/// Every field is checked even after earlier fields fail, so the caller gets
/// a complete error map in one round trip.
pub fn validate(raw: &Value) -> Result<CampaignBrief, FieldErrors> {
    let mut errors = FieldErrors::default();

    let Some(obj) = raw.as_object() else {
        errors.record("body", "request body must be a JSON object");
        return Err(errors);
    };

    let business_name = required_string(obj, "businessName", MAX_SHORT_FIELD, &mut errors);
    let industry = required_string(obj, "industry", MAX_SHORT_FIELD, &mut errors);
    let product_description = required_string(obj, "productDescription", MAX_LONG_FIELD, &mut errors);
    let target_customer = required_string(obj, "targetCustomer", MAX_LONG_FIELD, &mut errors);
    let unique_value = required_string(obj, "uniqueValue", MAX_LONG_FIELD, &mut errors);
    let goals = enum_list::<Goal>(obj, "goals", &Goal::allowed(), &mut errors);
    let channels = enum_list::<Channel>(obj, "channels", &Channel::allowed(), &mut errors);
    let tone = enum_field::<Tone>(obj, "tone", &Tone::allowed(), &mut errors);
    let offer = required_string(obj, "offer", MAX_LONG_FIELD, &mut errors);
    let notes = optional_string(obj, "notes", MAX_LONG_FIELD, &mut errors);
    let budget_level = enum_field::<BudgetLevel>(obj, "budgetLevel", &BudgetLevel::allowed(), &mut errors);
    let timeframe = enum_field::<Timeframe>(obj, "timeframe", &Timeframe::allowed(), &mut errors);

    match (
        business_name,
        industry,
        product_description,
        target_customer,
        unique_value,
        goals,
        channels,
        tone,
        offer,
        notes,
        budget_level,
        timeframe,
    ) {
        (
            Some(business_name),
            Some(industry),
            Some(product_description),
            Some(target_customer),
            Some(unique_value),
            Some(goals),
            Some(channels),
            Some(tone),
            Some(offer),
            Some(notes),
            Some(budget_level),
            Some(timeframe),
        ) if errors.is_empty() => Ok(CampaignBrief {
            business_name,
            industry,
            product_description,
            target_customer,
            unique_value,
            goals,
            channels,
            tone,
            offer,
            notes,
            budget_level,
            timeframe,
        }),
        _ => Err(errors),
    }
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

/// A required string field: present, a string, non-empty after trim, bounded.
fn required_string(
    obj: &Map<String, Value>,
    field: &str,
    max_len: usize,
    errors: &mut FieldErrors,
) -> Option<String> {
    match obj.get(field) {
        None | Some(Value::Null) => {
            errors.record(field, format!("{field} is required"));
            None
        }
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                errors.record(field, format!("{field} must not be empty"));
                None
            } else if trimmed.chars().count() > max_len {
                errors.record(field, format!("{field} must be at most {max_len} characters"));
                None
            } else {
                Some(trimmed.to_owned())
            }
        }
        Some(_) => {
            errors.record(field, format!("{field} must be a string"));
            None
        }
    }
}

/// An optional string field: absent, null, or empty-after-trim becomes `None`.
///
/// The outer `Option` signals a validation error; `Some(None)` means the
/// field was legitimately absent.
fn optional_string(
    obj: &Map<String, Value>,
    field: &str,
    max_len: usize,
    errors: &mut FieldErrors,
) -> Option<Option<String>> {
    match obj.get(field) {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(None)
            } else if trimmed.chars().count() > max_len {
                errors.record(field, format!("{field} must be at most {max_len} characters"));
                None
            } else {
                Some(Some(trimmed.to_owned()))
            }
        }
        Some(_) => {
            errors.record(field, format!("{field} must be a string"));
            None
        }
    }
}

/// A single-valued enumeration field.
fn enum_field<T: FromStr>(
    obj: &Map<String, Value>,
    field: &str,
    allowed: &str,
    errors: &mut FieldErrors,
) -> Option<T> {
    match obj.get(field) {
        None | Some(Value::Null) => {
            errors.record(field, format!("{field} is required"));
            None
        }
        Some(Value::String(s)) => match s.trim().parse::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                errors.record(field, format!("{field} must be one of: {allowed}"));
                None
            }
        },
        Some(_) => {
            errors.record(field, format!("{field} must be a string"));
            None
        }
    }
}

/// An array of enumeration values: min length 1, logically deduplicated with
/// insertion order preserved.
fn enum_list<T: FromStr + PartialEq + Copy>(
    obj: &Map<String, Value>,
    field: &str,
    allowed: &str,
    errors: &mut FieldErrors,
) -> Option<Vec<T>> {
    let entries = match obj.get(field) {
        None | Some(Value::Null) => {
            errors.record(field, format!("{field} is required"));
            return None;
        }
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            errors.record(field, format!("{field} must be an array"));
            return None;
        }
    };

    if entries.is_empty() {
        errors.record(field, format!("select at least one of: {allowed}"));
        return None;
    }

    let mut values: Vec<T> = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(s) = entry.as_str() else {
            errors.record(field, format!("{field} entries must be strings"));
            return None;
        };
        match s.trim().parse::<T>() {
            Ok(value) => {
                if !values.contains(&value) {
                    values.push(value);
                }
            }
            Err(_) => {
                errors.record(
                    field,
                    format!("{field} contains an unknown value {s:?}; allowed: {allowed}"),
                );
                return None;
            }
        }
    }

    Some(values)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_brief_json() -> Value {
        json!({
            "businessName": "Acme Robotics",
            "industry": "industrial automation",
            "productDescription": "A plug-and-play robotic arm for small factories",
            "targetCustomer": "Operations leads at mid-size manufacturers",
            "uniqueValue": "Installs in one day without custom integration work",
            "goals": ["leads", "demos"],
            "channels": ["email", "linkedin"],
            "tone": "professional",
            "offer": "Free on-site automation audit",
            "notes": "Avoid jargon.",
            "budgetLevel": "balanced",
            "timeframe": "30 days"
        })
    }

    #[test]
    fn accepts_valid_brief() {
        let brief = validate(&valid_brief_json()).expect("valid brief should pass");
        assert_eq!(brief.business_name, "Acme Robotics");
        assert_eq!(brief.goals, vec![Goal::Leads, Goal::Demos]);
        assert_eq!(brief.channels, vec![Channel::Email, Channel::Linkedin]);
        assert_eq!(brief.tone, Tone::Professional);
        assert_eq!(brief.budget_level, BudgetLevel::Balanced);
        assert_eq!(brief.timeframe, Timeframe::ThirtyDays);
        assert_eq!(brief.notes.as_deref(), Some("Avoid jargon."));
    }

    #[test]
    fn rejects_missing_business_name() {
        let mut body = valid_brief_json();
        body.as_object_mut().unwrap().remove("businessName");
        let errors = validate(&body).unwrap_err();
        assert_eq!(errors.get("businessName"), Some("businessName is required"));
    }

    #[test]
    fn rejects_whitespace_only_string() {
        let mut body = valid_brief_json();
        body["offer"] = json!("   ");
        let errors = validate(&body).unwrap_err();
        assert_eq!(errors.get("offer"), Some("offer must not be empty"));
    }

    #[test]
    fn rejects_over_length_string() {
        let mut body = valid_brief_json();
        body["businessName"] = json!("x".repeat(MAX_SHORT_FIELD + 1));
        let errors = validate(&body).unwrap_err();
        assert!(
            errors.get("businessName").unwrap().contains("at most"),
            "expected a length error, got: {errors:?}"
        );
    }

    #[test]
    fn rejects_empty_goals_array() {
        let mut body = valid_brief_json();
        body["goals"] = json!([]);
        let errors = validate(&body).unwrap_err();
        assert!(
            errors.get("goals").is_some(),
            "error should be attributed to goals, got: {errors:?}"
        );
    }

    #[test]
    fn rejects_unknown_tone() {
        let mut body = valid_brief_json();
        body["tone"] = json!("sarcastic");
        let errors = validate(&body).unwrap_err();
        let message = errors.get("tone").expect("tone error expected");
        assert!(
            message.contains("must be one of"),
            "unexpected message: {message}"
        );
    }

    #[test]
    fn rejects_unknown_channel_value() {
        let mut body = valid_brief_json();
        body["channels"] = json!(["email", "carrier-pigeon"]);
        let errors = validate(&body).unwrap_err();
        let message = errors.get("channels").expect("channels error expected");
        assert!(
            message.contains("carrier-pigeon"),
            "message should name the offending value: {message}"
        );
    }

    #[test]
    fn rejects_non_string_field() {
        let mut body = valid_brief_json();
        body["industry"] = json!(42);
        let errors = validate(&body).unwrap_err();
        assert_eq!(errors.get("industry"), Some("industry must be a string"));
    }

    #[test]
    fn rejects_non_object_body() {
        let errors = validate(&json!([1, 2, 3])).unwrap_err();
        assert!(errors.get("body").is_some());
    }

    #[test]
    fn deduplicates_channels_preserving_order() {
        let mut body = valid_brief_json();
        body["channels"] = json!(["linkedin", "email", "linkedin", "email"]);
        let brief = validate(&body).expect("duplicates are legal, just collapsed");
        assert_eq!(brief.channels, vec![Channel::Linkedin, Channel::Email]);
    }

    #[test]
    fn trims_string_fields() {
        let mut body = valid_brief_json();
        body["businessName"] = json!("  Acme Robotics  ");
        let brief = validate(&body).expect("trimmed value is valid");
        assert_eq!(brief.business_name, "Acme Robotics");
    }

    #[test]
    fn empty_notes_becomes_none() {
        let mut body = valid_brief_json();
        body["notes"] = json!("   ");
        let brief = validate(&body).expect("empty notes are fine");
        assert_eq!(brief.notes, None);

        body.as_object_mut().unwrap().remove("notes");
        let brief = validate(&body).expect("absent notes are fine");
        assert_eq!(brief.notes, None);
    }

    #[test]
    fn collects_errors_across_fields() {
        let body = json!({
            "industry": "retail",
            "goals": [],
            "tone": "shouty"
        });
        let errors = validate(&body).unwrap_err();
        assert!(errors.get("businessName").is_some());
        assert!(errors.get("goals").is_some());
        assert!(errors.get("tone").is_some());
        assert!(errors.get("timeframe").is_some());
    }

    #[test]
    fn first_violation_per_field_wins() {
        let mut errors = FieldErrors::default();
        errors.record("offer", "first");
        errors.record("offer", "second");
        assert_eq!(errors.get("offer"), Some("first"));
    }

    #[test]
    fn field_errors_serialize_under_field_errors_key() {
        let mut body = valid_brief_json();
        body.as_object_mut().unwrap().remove("businessName");
        let errors = validate(&body).unwrap_err();
        let value = serde_json::to_value(&errors).unwrap();
        assert!(value["fieldErrors"]["businessName"].is_string());
    }
}
