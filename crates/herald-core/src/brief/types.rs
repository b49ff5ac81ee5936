//! The validated campaign brief and its closed enumerations.
//!
//! Each enumeration implements `FromStr` over its wire value (the string the
//! client submits) and `Display` over the same value. `label()` returns the
//! human-readable form used in prompts and generated plans.

use std::fmt;
use std::str::FromStr;

/// Error returned when a string is not a member of a closed enumeration.
#[derive(Debug, Clone)]
pub struct InvalidEnumValue {
    /// Name of the enumeration (e.g. "tone").
    pub name: &'static str,
    /// The offending value.
    pub value: String,
}

impl fmt::Display for InvalidEnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {:?}", self.name, self.value)
    }
}

impl std::error::Error for InvalidEnumValue {}

// ---------------------------------------------------------------------------
// Goal
// ---------------------------------------------------------------------------

/// Campaign goal selected in the brief.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    Leads,
    Demos,
    Signups,
    Sales,
    Awareness,
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Goal::Leads,
        Goal::Demos,
        Goal::Signups,
        Goal::Sales,
        Goal::Awareness,
    ];

    /// Wire value, as submitted by the client.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Leads => "leads",
            Self::Demos => "demos",
            Self::Signups => "signups",
            Self::Sales => "sales",
            Self::Awareness => "awareness",
        }
    }

    /// Human-readable form for prompts and plans.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Leads => "generate qualified leads",
            Self::Demos => "book product demos",
            Self::Signups => "grow signups",
            Self::Sales => "close direct sales",
            Self::Awareness => "build brand awareness",
        }
    }

    /// All wire values joined for error messages.
    pub fn allowed() -> String {
        Self::ALL.map(|g| g.as_str()).join(", ")
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leads" => Ok(Self::Leads),
            "demos" => Ok(Self::Demos),
            "signups" => Ok(Self::Signups),
            "sales" => Ok(Self::Sales),
            "awareness" => Ok(Self::Awareness),
            other => Err(InvalidEnumValue {
                name: "goal",
                value: other.to_owned(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Channel
// ---------------------------------------------------------------------------

/// Marketing channel selected in the brief.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Email,
    Linkedin,
    ColdOutreach,
    Content,
    PaidSocial,
    Webinar,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::Email,
        Channel::Linkedin,
        Channel::ColdOutreach,
        Channel::Content,
        Channel::PaidSocial,
        Channel::Webinar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Linkedin => "linkedin",
            Self::ColdOutreach => "cold-outreach",
            Self::Content => "content",
            Self::PaidSocial => "paid-social",
            Self::Webinar => "webinar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Linkedin => "LinkedIn",
            Self::ColdOutreach => "Cold outreach",
            Self::Content => "Content",
            Self::PaidSocial => "Paid social",
            Self::Webinar => "Webinar",
        }
    }

    pub fn allowed() -> String {
        Self::ALL.map(|c| c.as_str()).join(", ")
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "linkedin" => Ok(Self::Linkedin),
            "cold-outreach" => Ok(Self::ColdOutreach),
            "content" => Ok(Self::Content),
            "paid-social" => Ok(Self::PaidSocial),
            "webinar" => Ok(Self::Webinar),
            other => Err(InvalidEnumValue {
                name: "channel",
                value: other.to_owned(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tone
// ---------------------------------------------------------------------------

/// Voice the campaign copy should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Friendly,
    Professional,
    Bold,
    Technical,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Friendly,
        Tone::Professional,
        Tone::Bold,
        Tone::Technical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Friendly => "friendly",
            Self::Professional => "professional",
            Self::Bold => "bold",
            Self::Technical => "technical",
        }
    }

    pub fn allowed() -> String {
        Self::ALL.map(|t| t.as_str()).join(", ")
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "friendly" => Ok(Self::Friendly),
            "professional" => Ok(Self::Professional),
            "bold" => Ok(Self::Bold),
            "technical" => Ok(Self::Technical),
            other => Err(InvalidEnumValue {
                name: "tone",
                value: other.to_owned(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// BudgetLevel
// ---------------------------------------------------------------------------

/// How aggressively the campaign spends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetLevel {
    Lean,
    Balanced,
    Aggressive,
}

impl BudgetLevel {
    pub const ALL: [BudgetLevel; 3] = [
        BudgetLevel::Lean,
        BudgetLevel::Balanced,
        BudgetLevel::Aggressive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lean => "lean",
            Self::Balanced => "balanced",
            Self::Aggressive => "aggressive",
        }
    }

    pub fn allowed() -> String {
        Self::ALL.map(|b| b.as_str()).join(", ")
    }
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetLevel {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lean" => Ok(Self::Lean),
            "balanced" => Ok(Self::Balanced),
            "aggressive" => Ok(Self::Aggressive),
            other => Err(InvalidEnumValue {
                name: "budget level",
                value: other.to_owned(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Timeframe
// ---------------------------------------------------------------------------

/// Campaign duration. Wire values keep their natural spelling ("2 weeks").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeframe {
    TwoWeeks,
    ThirtyDays,
    NinetyDays,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [
        Timeframe::TwoWeeks,
        Timeframe::ThirtyDays,
        Timeframe::NinetyDays,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoWeeks => "2 weeks",
            Self::ThirtyDays => "30 days",
            Self::NinetyDays => "90 days",
        }
    }

    pub fn allowed() -> String {
        Self::ALL.map(|t| t.as_str()).join(", ")
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2 weeks" => Ok(Self::TwoWeeks),
            "30 days" => Ok(Self::ThirtyDays),
            "90 days" => Ok(Self::NinetyDays),
            other => Err(InvalidEnumValue {
                name: "timeframe",
                value: other.to_owned(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// CampaignBrief
// ---------------------------------------------------------------------------

/// A validated campaign brief.
///
/// Constructed only by [`super::validate`]; every string field is trimmed and
/// non-empty, and `goals`/`channels` are deduplicated with insertion order
/// preserved. Request-scoped: created per request, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignBrief {
    pub business_name: String,
    pub industry: String,
    pub product_description: String,
    pub target_customer: String,
    pub unique_value: String,
    pub goals: Vec<Goal>,
    pub channels: Vec<Channel>,
    pub tone: Tone,
    pub offer: String,
    pub notes: Option<String>,
    pub budget_level: BudgetLevel,
    pub timeframe: Timeframe,
}
