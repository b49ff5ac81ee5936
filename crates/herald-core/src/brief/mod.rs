//! Campaign brief: request types, closed enumerations, and the validator.

pub mod types;
pub mod validate;

pub use types::{BudgetLevel, CampaignBrief, Channel, Goal, Timeframe, Tone};
pub use validate::{FieldErrors, MAX_LONG_FIELD, MAX_SHORT_FIELD, validate};
