use super::types::{EmissionCategory, EmissionType};
use crate::error::{FootprintError, Result};
use crate::validation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::num::NonZeroU32;
use std::{fmt, str::FromStr};

/// Emissions per category, in kg CO2e. Only categories with entries appear.
pub type CategoryBreakdown = BTreeMap<EmissionCategory, f64>;

/// One accepted line of usage: a typed emission source and its average daily amount.
///
/// Built only through validation, so `daily_usage` is always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEntry", into = "RawEntry")]
pub struct EmissionEntry {
    kind: EmissionType,
    daily_usage: f64,
}

impl EmissionEntry {
    pub fn new(kind: impl Into<EmissionType>, daily_usage: f64) -> Result<Self> {
        let kind = kind.into();
        validation::validate_entry(
            &EntryDraft::new()
                .with_category(kind.category())
                .with_type(kind.as_str())
                .with_daily_usage(daily_usage),
        )
    }

    pub(crate) fn from_validated(kind: EmissionType, daily_usage: f64) -> Self {
        Self { kind, daily_usage }
    }

    pub fn kind(&self) -> EmissionType {
        self.kind
    }

    pub fn category(&self) -> EmissionCategory {
        self.kind.category()
    }

    pub fn daily_usage(&self) -> f64 {
        self.daily_usage
    }
}

/// Parses `category:type:usage`, e.g. `transportation:gasoline_car:10`.
impl FromStr for EmissionEntry {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, ':');
        let (Some(category), Some(type_name), Some(usage)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(FootprintError::Parse(format!(
                "Expected <category>:<type>:<daily usage>, got '{}'",
                s
            )));
        };

        let category: EmissionCategory = category.parse()?;
        let daily_usage: f64 = usage.trim().parse().map_err(|_| {
            FootprintError::InvalidEntry(format!("daily usage '{}' is not a number", usage))
        })?;

        validation::validate_entry(
            &EntryDraft::new()
                .with_category(category)
                .with_type(type_name)
                .with_daily_usage(daily_usage),
        )
    }
}

impl fmt::Display for EmissionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.category(), self.kind, self.daily_usage)
    }
}

/// On-disk shape of an entry. Accepts the camelCase `dailyUsage` key as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawEntry {
    category: EmissionCategory,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(alias = "dailyUsage")]
    daily_usage: f64,
}

impl TryFrom<RawEntry> for EmissionEntry {
    type Error = FootprintError;

    fn try_from(raw: RawEntry) -> Result<Self> {
        validation::validate_entry(
            &EntryDraft::new()
                .with_category(raw.category)
                .with_type(raw.type_name)
                .with_daily_usage(raw.daily_usage),
        )
    }
}

impl From<EmissionEntry> for RawEntry {
    fn from(entry: EmissionEntry) -> Self {
        Self {
            category: entry.category(),
            type_name: entry.kind.as_str().to_string(),
            daily_usage: entry.daily_usage,
        }
    }
}

/// A partially filled entry as collected from user input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub category: Option<EmissionCategory>,
    pub type_name: Option<String>,
    pub daily_usage: Option<f64>,
}

impl EntryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: EmissionCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_daily_usage(mut self, daily_usage: f64) -> Self {
        self.daily_usage = Some(daily_usage);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.type_name.is_none() && self.daily_usage.is_none()
    }
}

impl From<EmissionEntry> for EntryDraft {
    fn from(entry: EmissionEntry) -> Self {
        EntryDraft::new()
            .with_category(entry.category())
            .with_type(entry.kind.as_str())
            .with_daily_usage(entry.daily_usage)
    }
}

/// A strictly positive whole number of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct NumberOfDays(NonZeroU32);

impl NumberOfDays {
    pub const ONE: NumberOfDays = NumberOfDays(NonZeroU32::MIN);

    /// See [`validation::validate_days`].
    pub fn new(days: i64) -> Result<Self> {
        validation::validate_days(days)
    }

    pub fn from_nonzero(days: NonZeroU32) -> Self {
        Self(days)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    pub(crate) fn as_f64(self) -> f64 {
        f64::from(self.0.get())
    }
}

impl Default for NumberOfDays {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<i64> for NumberOfDays {
    type Error = FootprintError;

    fn try_from(days: i64) -> Result<Self> {
        Self::new(days)
    }
}

impl From<NumberOfDays> for u32 {
    fn from(days: NumberOfDays) -> Self {
        days.get()
    }
}

impl FromStr for NumberOfDays {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self> {
        validation::parse_days(s)
    }
}

impl fmt::Display for NumberOfDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of running the calculator over a set of entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionSummary {
    pub entries: Vec<EmissionEntry>,
    pub number_of_days: NumberOfDays,
    /// kg CO2e over the whole period
    pub total_carbon_footprint: f64,
    pub by_category: CategoryBreakdown,
}
