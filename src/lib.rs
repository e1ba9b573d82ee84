//! # Footprint - a carbon footprint estimator
//!
//! Footprint turns average daily usage figures (kilometres travelled, energy
//! consumed, food eaten) into an estimated carbon footprint in kg CO2e, using
//! a fixed table of emission factors.
//!
//! ## Features
//!
//! - **Typed factor table**: every category has its own type enum, so a
//!   mismatched pair such as transportation/beef cannot be looked up
//! - **Pure calculator**: totals and per-category breakdowns over any number of days
//! - **Entry sheets**: batch input in TOML, YAML or JSON
//! - **Interactive worksheet**: build up entries line by line
//!
//! ## Quick Start
//!
//! ```bash
//! # Show what can be tracked
//! footprint types transportation
//!
//! # One week of driving 10 km a day and eating 0.5 kg of beef a day
//! footprint calc -e transportation:gasoline_car:10 -e food:beef:0.5 -d 7
//!
//! # Summarize a sheet
//! footprint report week.toml
//! ```
//!
//! ## Library use
//!
//! ```
//! use footprint::calculator::{emissions_by_category, total_emissions};
//! use footprint::model::{EmissionEntry, FoodType, NumberOfDays, TransportationType};
//!
//! let entries = vec![
//!     EmissionEntry::new(TransportationType::GasolineCar, 10.0).unwrap(),
//!     EmissionEntry::new(FoodType::Beef, 0.5).unwrap(),
//! ];
//! let week = NumberOfDays::new(7).unwrap();
//!
//! assert!((total_emissions(&entries, week) - 109.2).abs() < 1e-9);
//! assert_eq!(emissions_by_category(&entries, week).len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`calculator`]: Totals and per-category breakdowns
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`factors`]: Emission factor and unit tables
//! - [`model`]: Categories, types, entries and summaries
//! - [`storage`]: Entry sheet files
//! - [`validation`]: Entry and day-count validation
//! - [`worksheet`]: In-memory working set for interactive use

/// Emission totals over a set of entries.
pub mod calculator;

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.footprint.toml` configuration files and discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `FootprintError` enum and `Result<T>` type alias.
pub mod error;

pub mod factors;

pub mod logging;

/// Data models for footprint.
///
/// Includes `EmissionCategory`, `EmissionType`, `EmissionEntry` and `NumberOfDays`.
pub mod model;

/// Entry sheet storage in TOML, YAML or JSON.
pub mod storage;

/// Input validation utilities.
///
/// Decides which entries and day counts may enter a calculation.
pub mod validation;

pub mod worksheet;
