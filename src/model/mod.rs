//! Data models for footprint.
//!
//! This module defines the core data structures:
//!
//! - [`EmissionCategory`]: transportation, home energy, food
//! - [`EmissionType`]: a category-tagged emission source (gasoline car, natural gas, beef, ...)
//! - [`EmissionEntry`]: a validated source plus its average daily usage
//! - [`EntryDraft`]: a partially filled entry awaiting validation
//! - [`NumberOfDays`]: the period a calculation covers
//! - [`EmissionSummary`]: the calculator's report

mod entry;
mod types;

pub use entry::{CategoryBreakdown, EmissionEntry, EmissionSummary, EntryDraft, NumberOfDays};
pub use types::{EmissionCategory, EmissionType, FoodType, HomeEnergyType, TransportationType};
