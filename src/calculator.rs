//! Emission totals over a set of entries.
//!
//! Every entry contributes `daily_usage × factor × days`. The functions here
//! are pure; a [`NumberOfDays`] is always at least one.

use crate::factors::factor_of;
use crate::model::{CategoryBreakdown, EmissionEntry, EmissionSummary, NumberOfDays};

/// kg CO2e produced by one entry over the period.
pub fn entry_emissions(entry: &EmissionEntry, days: NumberOfDays) -> f64 {
    entry.daily_usage() * factor_of(entry.kind()) * days.as_f64()
}

/// Sum of every entry's contribution. Zero for no entries.
pub fn total_emissions(entries: &[EmissionEntry], days: NumberOfDays) -> f64 {
    entries
        .iter()
        .map(|entry| entry_emissions(entry, days))
        .sum()
}

/// Contributions grouped by category. Categories without entries are absent.
pub fn emissions_by_category(entries: &[EmissionEntry], days: NumberOfDays) -> CategoryBreakdown {
    let mut breakdown = CategoryBreakdown::new();
    for entry in entries {
        *breakdown.entry(entry.category()).or_insert(0.0) += entry_emissions(entry, days);
    }
    breakdown
}

pub fn summarize(entries: &[EmissionEntry], days: NumberOfDays) -> EmissionSummary {
    let summary = EmissionSummary {
        entries: entries.to_vec(),
        number_of_days: days,
        total_carbon_footprint: total_emissions(entries, days),
        by_category: emissions_by_category(entries, days),
    };
    tracing::debug!(
        entries = entries.len(),
        days = days.get(),
        total = summary.total_carbon_footprint,
        "Calculated emissions"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        EmissionCategory, FoodType, HomeEnergyType, NumberOfDays, TransportationType,
    };

    const EPSILON: f64 = 1e-9;

    fn days(n: i64) -> NumberOfDays {
        NumberOfDays::new(n).unwrap()
    }

    fn scenario() -> Vec<EmissionEntry> {
        vec![
            EmissionEntry::new(TransportationType::GasolineCar, 10.0).unwrap(),
            EmissionEntry::new(FoodType::Beef, 0.5).unwrap(),
        ]
    }

    #[test]
    fn test_empty_entries() {
        assert_eq!(total_emissions(&[], days(30)), 0.0);
        assert!(emissions_by_category(&[], days(30)).is_empty());
    }

    #[test]
    fn test_week_of_driving_and_beef() {
        let entries = scenario();
        let total = total_emissions(&entries, days(7));
        assert!((total - 109.2).abs() < EPSILON);

        let breakdown = emissions_by_category(&entries, days(7));
        assert_eq!(breakdown.len(), 2);
        assert!((breakdown[&EmissionCategory::Transportation] - 14.7).abs() < EPSILON);
        assert!((breakdown[&EmissionCategory::Food] - 94.5).abs() < EPSILON);
        assert!(!breakdown.contains_key(&EmissionCategory::HomeEnergy));
    }

    #[test]
    fn test_linear_in_days() {
        let entries = scenario();
        for d in [1, 3, 10, 365] {
            let single = total_emissions(&entries, days(d));
            let double = total_emissions(&entries, days(2 * d));
            assert!((double - 2.0 * single).abs() < EPSILON * double.max(1.0));
        }
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let mut entries = scenario();
        entries.push(EmissionEntry::new(HomeEnergyType::Electricity, 12.5).unwrap());
        entries.push(EmissionEntry::new(FoodType::Vegetables, 0.3).unwrap());
        entries.push(EmissionEntry::new(TransportationType::Train, 40.0).unwrap());

        let d = days(14);
        let sum: f64 = emissions_by_category(&entries, d).values().sum();
        assert!((sum - total_emissions(&entries, d)).abs() < EPSILON);
    }

    #[test]
    fn test_zero_factor_types_contribute_nothing() {
        let entries = vec![
            EmissionEntry::new(TransportationType::Biking, 25.0).unwrap(),
            EmissionEntry::new(TransportationType::Walking, 3.0).unwrap(),
            EmissionEntry::new(HomeEnergyType::SolarEnergy, 1000.0).unwrap(),
        ];
        for entry in &entries {
            assert_eq!(entry_emissions(entry, days(365)), 0.0);
        }
        assert_eq!(total_emissions(&entries, days(365)), 0.0);

        // Present with zero: they still have entries.
        let breakdown = emissions_by_category(&entries, days(365));
        assert_eq!(breakdown[&EmissionCategory::Transportation], 0.0);
        assert_eq!(breakdown[&EmissionCategory::HomeEnergy], 0.0);
    }

    #[test]
    fn test_order_independent() {
        let entries = scenario();
        let reversed: Vec<_> = entries.iter().rev().copied().collect();
        assert!(
            (total_emissions(&entries, days(5)) - total_emissions(&reversed, days(5))).abs()
                < EPSILON
        );
    }

    #[test]
    fn test_largest_inputs_stay_finite() {
        use crate::factors::list_types_for;
        use crate::validation::MAX_DAILY_USAGE;

        let entries: Vec<EmissionEntry> = EmissionCategory::ALL
            .into_iter()
            .flat_map(list_types_for)
            .map(|kind| EmissionEntry::new(kind, MAX_DAILY_USAGE).unwrap())
            .collect();
        let longest = days(i64::from(u32::MAX));

        let summary = summarize(&entries, longest);
        assert!(summary.total_carbon_footprint.is_finite());
        assert!(summary.by_category.values().all(|v| v.is_finite()));

        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("null"));
        let back: EmissionSummary = serde_json::from_str(&json).unwrap();
        let total = summary.total_carbon_footprint;
        assert!((back.total_carbon_footprint - total).abs() <= total * EPSILON);
    }

    #[test]
    fn test_summarize() {
        let summary = summarize(&scenario(), days(7));
        assert_eq!(summary.entries.len(), 2);
        assert_eq!(summary.number_of_days.get(), 7);
        assert!((summary.total_carbon_footprint - 109.2).abs() < EPSILON);
        assert_eq!(summary.by_category.len(), 2);
    }
}
