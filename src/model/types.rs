use crate::error::{FootprintError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Normalizes user input to the snake_case wire form (`Gasoline Car` -> `gasoline_car`).
fn normalize_key(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionCategory {
    Transportation,
    HomeEnergy,
    Food,
}

impl EmissionCategory {
    pub const ALL: [EmissionCategory; 3] = [
        EmissionCategory::Transportation,
        EmissionCategory::HomeEnergy,
        EmissionCategory::Food,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EmissionCategory::Transportation => "transportation",
            EmissionCategory::HomeEnergy => "home_energy",
            EmissionCategory::Food => "food",
        }
    }
}

impl fmt::Display for EmissionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmissionCategory {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_key(s).as_str() {
            "transportation" | "transport" => Ok(EmissionCategory::Transportation),
            "home_energy" | "energy" => Ok(EmissionCategory::HomeEnergy),
            "food" => Ok(EmissionCategory::Food),
            _ => Err(FootprintError::Parse(format!("Invalid category: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportationType {
    Plane,
    GasolineCar,
    ElectricCar,
    Train,
    Biking,
    Walking,
}

impl TransportationType {
    pub const ALL: [TransportationType; 6] = [
        TransportationType::Plane,
        TransportationType::GasolineCar,
        TransportationType::ElectricCar,
        TransportationType::Train,
        TransportationType::Biking,
        TransportationType::Walking,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TransportationType::Plane => "plane",
            TransportationType::GasolineCar => "gasoline_car",
            TransportationType::ElectricCar => "electric_car",
            TransportationType::Train => "train",
            TransportationType::Biking => "biking",
            TransportationType::Walking => "walking",
        }
    }
}

impl FromStr for TransportationType {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| FootprintError::Parse(format!("Invalid transportation type: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeEnergyType {
    Electricity,
    NaturalGas,
    HeatingOil,
    SolarEnergy,
}

impl HomeEnergyType {
    pub const ALL: [HomeEnergyType; 4] = [
        HomeEnergyType::Electricity,
        HomeEnergyType::NaturalGas,
        HomeEnergyType::HeatingOil,
        HomeEnergyType::SolarEnergy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HomeEnergyType::Electricity => "electricity",
            HomeEnergyType::NaturalGas => "natural_gas",
            HomeEnergyType::HeatingOil => "heating_oil",
            HomeEnergyType::SolarEnergy => "solar_energy",
        }
    }
}

impl FromStr for HomeEnergyType {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| FootprintError::Parse(format!("Invalid home energy type: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodType {
    Chicken,
    Rice,
    Fruits,
    Beef,
    Pork,
    Vegetables,
}

impl FoodType {
    pub const ALL: [FoodType; 6] = [
        FoodType::Chicken,
        FoodType::Rice,
        FoodType::Fruits,
        FoodType::Beef,
        FoodType::Pork,
        FoodType::Vegetables,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FoodType::Chicken => "chicken",
            FoodType::Rice => "rice",
            FoodType::Fruits => "fruits",
            FoodType::Beef => "beef",
            FoodType::Pork => "pork",
            FoodType::Vegetables => "vegetables",
        }
    }
}

impl FromStr for FoodType {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| FootprintError::Parse(format!("Invalid food type: {}", s)))
    }
}

/// An emission type tagged with the category it belongs to.
///
/// Each variant wraps only the types valid for that category, so a
/// mismatched pair such as transportation/beef cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmissionType {
    Transportation(TransportationType),
    HomeEnergy(HomeEnergyType),
    Food(FoodType),
}

impl EmissionType {
    pub fn category(self) -> EmissionCategory {
        match self {
            EmissionType::Transportation(_) => EmissionCategory::Transportation,
            EmissionType::HomeEnergy(_) => EmissionCategory::HomeEnergy,
            EmissionType::Food(_) => EmissionCategory::Food,
        }
    }

    /// Snake_case name of the type without its category.
    pub fn as_str(self) -> &'static str {
        match self {
            EmissionType::Transportation(t) => t.as_str(),
            EmissionType::HomeEnergy(t) => t.as_str(),
            EmissionType::Food(t) => t.as_str(),
        }
    }

    /// Resolves a type name within a category.
    ///
    /// Returns [`FootprintError::UnknownFactor`] when the name is not one of
    /// the category's types.
    pub fn parse_in(category: EmissionCategory, type_name: &str) -> Result<Self> {
        let parsed = match category {
            EmissionCategory::Transportation => {
                type_name.parse().map(EmissionType::Transportation)
            }
            EmissionCategory::HomeEnergy => type_name.parse().map(EmissionType::HomeEnergy),
            EmissionCategory::Food => type_name.parse().map(EmissionType::Food),
        };
        parsed.map_err(|_| FootprintError::UnknownFactor {
            category: category.to_string(),
            type_name: type_name.to_string(),
        })
    }
}

impl fmt::Display for EmissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TransportationType> for EmissionType {
    fn from(t: TransportationType) -> Self {
        EmissionType::Transportation(t)
    }
}

impl From<HomeEnergyType> for EmissionType {
    fn from(t: HomeEnergyType) -> Self {
        EmissionType::HomeEnergy(t)
    }
}

impl From<FoodType> for EmissionType {
    fn from(t: FoodType) -> Self {
        EmissionType::Food(t)
    }
}
