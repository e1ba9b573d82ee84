//! Emission factor and unit tables.
//!
//! Factors are kg CO2e per unit of daily usage. Transportation is measured
//! in km, food in kg, and home energy per fuel (kWh, m³, L). The tables are
//! compiled in and never change while the process runs.

use crate::error::Result;
use crate::model::{
    EmissionCategory, EmissionType, FoodType, HomeEnergyType, TransportationType,
};

/// Unit shown for home energy when no type has been picked yet.
pub const FALLBACK_HOME_ENERGY_UNIT: &str = "unit";

pub fn transportation_factor(t: TransportationType) -> f64 {
    match t {
        TransportationType::Plane => 0.1, // per passenger km
        TransportationType::GasolineCar => 0.21,
        TransportationType::ElectricCar => 0.075,
        TransportationType::Train => 0.04,
        TransportationType::Biking => 0.0,
        TransportationType::Walking => 0.0,
    }
}

pub fn home_energy_factor(t: HomeEnergyType) -> f64 {
    match t {
        HomeEnergyType::Electricity => 0.4, // grid average of 0.3-0.5
        HomeEnergyType::NaturalGas => 2.2,
        HomeEnergyType::HeatingOil => 2.5,
        HomeEnergyType::SolarEnergy => 0.0,
    }
}

pub fn food_factor(t: FoodType) -> f64 {
    match t {
        FoodType::Chicken => 6.9,
        FoodType::Rice => 2.7,
        FoodType::Fruits => 0.9,
        FoodType::Beef => 27.0,
        FoodType::Pork => 7.2,
        FoodType::Vegetables => 1.0,
    }
}

/// Emission factor for a category-tagged type. Total over every valid pair.
pub fn factor_of(kind: EmissionType) -> f64 {
    match kind {
        EmissionType::Transportation(t) => transportation_factor(t),
        EmissionType::HomeEnergy(t) => home_energy_factor(t),
        EmissionType::Food(t) => food_factor(t),
    }
}

/// String-keyed lookup for callers holding untyped input.
///
/// Fails with [`FootprintError::UnknownFactor`](crate::error::FootprintError::UnknownFactor)
/// when `type_name` is not a type of `category`.
pub fn lookup_factor(category: EmissionCategory, type_name: &str) -> Result<f64> {
    let kind = EmissionType::parse_in(category, type_name)?;
    let factor = factor_of(kind);
    tracing::debug!(category = %category, kind = %kind, factor, "Resolved emission factor");
    Ok(factor)
}

/// Valid types for a category, in table order.
pub fn list_types_for(category: EmissionCategory) -> Vec<EmissionType> {
    match category {
        EmissionCategory::Transportation => TransportationType::ALL
            .into_iter()
            .map(EmissionType::Transportation)
            .collect(),
        EmissionCategory::HomeEnergy => HomeEnergyType::ALL
            .into_iter()
            .map(EmissionType::HomeEnergy)
            .collect(),
        EmissionCategory::Food => FoodType::ALL.into_iter().map(EmissionType::Food).collect(),
    }
}

/// Display unit for a category, refined by type for home energy.
pub fn unit_label_for(category: EmissionCategory, kind: Option<EmissionType>) -> &'static str {
    match (category, kind) {
        (EmissionCategory::HomeEnergy, Some(EmissionType::HomeEnergy(t))) => match t {
            HomeEnergyType::Electricity | HomeEnergyType::SolarEnergy => "kWh",
            HomeEnergyType::NaturalGas => "m³",
            HomeEnergyType::HeatingOil => "L",
        },
        (EmissionCategory::HomeEnergy, _) => FALLBACK_HOME_ENERGY_UNIT,
        (EmissionCategory::Transportation, _) => "km",
        (EmissionCategory::Food, _) => "kg",
    }
}

/// Short factor description such as `0.21 kg CO₂e/km`.
pub fn emission_description(kind: EmissionType) -> String {
    format!(
        "{} kg CO₂e/{}",
        factor_of(kind),
        unit_label_for(kind.category(), Some(kind))
    )
}

/// Turns a snake_case key into a title, e.g. `gasoline_car` -> `Gasoline Car`.
pub fn format_type_label(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FootprintError;

    #[test]
    fn test_every_listed_type_has_non_negative_factor() {
        for category in EmissionCategory::ALL {
            let types = list_types_for(category);
            assert!(!types.is_empty());
            for kind in types {
                assert_eq!(kind.category(), category);
                let factor = lookup_factor(category, kind.as_str()).unwrap();
                assert!(factor >= 0.0, "{} has negative factor", kind);
                assert_eq!(factor, factor_of(kind));
            }
        }
    }

    #[test]
    fn test_list_types_keeps_table_order() {
        let names: Vec<_> = list_types_for(EmissionCategory::HomeEnergy)
            .into_iter()
            .map(|t| t.as_str())
            .collect();
        assert_eq!(
            names,
            ["electricity", "natural_gas", "heating_oil", "solar_energy"]
        );
        assert_eq!(list_types_for(EmissionCategory::Transportation).len(), 6);
        assert_eq!(list_types_for(EmissionCategory::Food).len(), 6);
    }

    #[test]
    fn test_known_factors() {
        assert_eq!(factor_of(TransportationType::GasolineCar.into()), 0.21);
        assert_eq!(factor_of(FoodType::Beef.into()), 27.0);
        assert_eq!(factor_of(HomeEnergyType::NaturalGas.into()), 2.2);
    }

    #[test]
    fn test_lookup_factor_unknown_pair() {
        let err = lookup_factor(EmissionCategory::Transportation, "beef").unwrap_err();
        match err {
            FootprintError::UnknownFactor {
                category,
                type_name,
            } => {
                assert_eq!(category, "transportation");
                assert_eq!(type_name, "beef");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(unit_label_for(EmissionCategory::Transportation, None), "km");
        assert_eq!(unit_label_for(EmissionCategory::Food, None), "kg");
        assert_eq!(unit_label_for(EmissionCategory::HomeEnergy, None), "unit");
        assert_eq!(
            unit_label_for(
                EmissionCategory::HomeEnergy,
                Some(HomeEnergyType::NaturalGas.into())
            ),
            "m³"
        );
        assert_eq!(
            unit_label_for(
                EmissionCategory::HomeEnergy,
                Some(HomeEnergyType::HeatingOil.into())
            ),
            "L"
        );
    }

    #[test]
    fn test_emission_description() {
        assert_eq!(
            emission_description(TransportationType::GasolineCar.into()),
            "0.21 kg CO₂e/km"
        );
        assert_eq!(emission_description(FoodType::Beef.into()), "27 kg CO₂e/kg");
        assert_eq!(
            emission_description(HomeEnergyType::Electricity.into()),
            "0.4 kg CO₂e/kWh"
        );
    }

    #[test]
    fn test_format_type_label() {
        assert_eq!(format_type_label("gasoline_car"), "Gasoline Car");
        assert_eq!(format_type_label("home_energy"), "Home Energy");
        assert_eq!(format_type_label("beef"), "Beef");
    }
}
