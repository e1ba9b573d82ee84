//! In-memory working set for interactive use.
//!
//! Holds the ordered list of accepted entries, the entry currently being
//! filled in, and the raw day-count field. Every mutation of the list goes
//! through [`validation::is_valid`] first.

use crate::calculator;
use crate::error::{FootprintError, Result};
use crate::model::{EmissionCategory, EmissionEntry, EmissionSummary, EntryDraft, NumberOfDays};
use crate::validation;
use std::fmt;

/// Raw contents of the day-count field. Blank is distinct from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaysInput {
    Blank,
    Value(i64),
}

impl DaysInput {
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(DaysInput::Blank);
        }
        input.parse().map(DaysInput::Value).map_err(|_| {
            FootprintError::InvalidDayCount(format!("'{}' is not a whole number", input))
        })
    }

    pub fn to_days(self) -> Result<NumberOfDays> {
        match self {
            DaysInput::Blank => Err(FootprintError::InvalidDayCount(
                "a number of days is required".to_string(),
            )),
            DaysInput::Value(days) => validation::validate_days(days),
        }
    }
}

impl Default for DaysInput {
    fn default() -> Self {
        DaysInput::Value(1)
    }
}

impl From<NumberOfDays> for DaysInput {
    fn from(days: NumberOfDays) -> Self {
        DaysInput::Value(i64::from(days.get()))
    }
}

impl fmt::Display for DaysInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaysInput::Blank => Ok(()),
            DaysInput::Value(days) => write!(f, "{}", days),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Worksheet {
    entries: Vec<EmissionEntry>,
    current: EntryDraft,
    days: DaysInput,
}

impl Worksheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<EmissionEntry>, days: NumberOfDays) -> Self {
        Self {
            entries,
            current: EntryDraft::default(),
            days: days.into(),
        }
    }

    pub fn entries(&self) -> &[EmissionEntry] {
        &self.entries
    }

    pub fn current(&self) -> &EntryDraft {
        &self.current
    }

    pub fn days(&self) -> DaysInput {
        self.days
    }

    /// Replaces the in-progress draft as given.
    pub fn update_current(&mut self, draft: EntryDraft) {
        self.current = draft;
    }

    /// Picks a category for the in-progress draft. A different category drops
    /// the chosen type, since types belong to one category.
    pub fn set_current_category(&mut self, category: EmissionCategory) {
        if self.current.category != Some(category) {
            self.current.type_name = None;
        }
        self.current.category = Some(category);
    }

    /// Appends the draft if it validates, clearing the in-progress draft.
    ///
    /// Returns false and changes nothing when the draft is invalid.
    pub fn add_entry(&mut self, draft: &EntryDraft) -> bool {
        match validation::validate_entry(draft) {
            Ok(entry) => {
                tracing::debug!(entry = %entry, position = self.entries.len(), "Adding entry");
                self.entries.push(entry);
                self.current = EntryDraft::default();
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "Rejected entry");
                false
            }
        }
    }

    /// Validates and appends the in-progress draft.
    pub fn commit_current(&mut self) -> bool {
        let draft = self.current.clone();
        self.add_entry(&draft)
    }

    /// Removes the entry at `index`. Out-of-range indices are ignored.
    pub fn remove_entry(&mut self, index: usize) -> Option<EmissionEntry> {
        if index < self.entries.len() {
            let removed = self.entries.remove(index);
            tracing::debug!(entry = %removed, index, "Removed entry");
            Some(removed)
        } else {
            None
        }
    }

    pub fn set_days(&mut self, days: DaysInput) {
        self.days = days;
    }

    pub fn is_valid_number_of_days(&self) -> bool {
        self.days.to_days().is_ok()
    }

    /// Summary of the current entries, or `InvalidDayCount` if the day field is not usable.
    pub fn summary(&self) -> Result<EmissionSummary> {
        let days = self.days.to_days()?;
        Ok(calculator::summarize(&self.entries, days))
    }
}
