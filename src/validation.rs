//! Input validation for emission entries and day counts.

use crate::error::{FootprintError, Result};
use crate::model::{EmissionEntry, EmissionType, EntryDraft, NumberOfDays};
use std::num::NonZeroU32;

/// Whether a draft is complete and well-formed enough to enter a calculation.
///
/// Never fails; use [`validate_entry`] to learn why a draft was rejected.
pub fn is_valid(draft: &EntryDraft) -> bool {
    validate_entry(draft).is_ok()
}

/// Validates a draft and turns it into an accepted entry.
pub fn validate_entry(draft: &EntryDraft) -> Result<EmissionEntry> {
    let category = draft
        .category
        .ok_or_else(|| FootprintError::InvalidEntry("category is required".to_string()))?;

    let type_name = match draft.type_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(FootprintError::InvalidEntry(
                "type is required".to_string(),
            ));
        }
    };

    let kind = EmissionType::parse_in(category, type_name).map_err(|_| {
        FootprintError::InvalidEntry(format!(
            "'{}' is not a {} type",
            type_name, category
        ))
    })?;

    let daily_usage = draft
        .daily_usage
        .ok_or_else(|| FootprintError::InvalidEntry("daily usage is required".to_string()))?;
    validate_daily_usage(daily_usage)?;

    Ok(EmissionEntry::from_validated(kind, daily_usage))
}

/// Largest accepted daily usage. At this bound the biggest factor over
/// `u32::MAX` days still yields a finite total.
pub const MAX_DAILY_USAGE: f64 = 1e9;

/// Daily usage must be a finite number in `(0, MAX_DAILY_USAGE]`.
pub fn validate_daily_usage(daily_usage: f64) -> Result<()> {
    if !daily_usage.is_finite() {
        return Err(FootprintError::InvalidEntry(format!(
            "daily usage must be a finite number, got {}",
            daily_usage
        )));
    }
    if daily_usage <= 0.0 {
        return Err(FootprintError::InvalidEntry(format!(
            "daily usage must be greater than zero, got {}",
            daily_usage
        )));
    }
    if daily_usage > MAX_DAILY_USAGE {
        return Err(FootprintError::InvalidEntry(format!(
            "daily usage must be at most {}, got {}",
            MAX_DAILY_USAGE, daily_usage
        )));
    }
    Ok(())
}

/// Validates a day count. Zero, negative and out-of-range values are rejected.
pub fn validate_days(days: i64) -> Result<NumberOfDays> {
    if days < 1 {
        return Err(FootprintError::InvalidDayCount(format!(
            "must be at least 1, got {}",
            days
        )));
    }
    let days = u32::try_from(days)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| {
            FootprintError::InvalidDayCount(format!(
                "must be at most {}, got {}",
                u32::MAX,
                days
            ))
        })?;
    Ok(NumberOfDays::from_nonzero(days))
}

/// Parses a day count typed by a user. Blank and non-integer input is rejected.
pub fn parse_days(input: &str) -> Result<NumberOfDays> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FootprintError::InvalidDayCount(
            "a number of days is required".to_string(),
        ));
    }
    let days: i64 = input.parse().map_err(|_| {
        FootprintError::InvalidDayCount(format!("'{}' is not a whole number", input))
    })?;
    validate_days(days)
}
