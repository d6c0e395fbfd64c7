use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

/// Kinds of stop a traveller can look for along a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    GasStations,
    SightSeeing,
    Restrooms,
    Restaurants,
    Groceries,
    ChargingStations,
}

/// Search radius in meters for sight seeing queries.
pub const WIDE_SEARCH_RADIUS: f64 = 8000.0;
/// Search radius in meters for every other category.
pub const DEFAULT_SEARCH_RADIUS: f64 = 3200.0;

impl Category {
    pub const ALL: [Category; 6] = [
        Category::GasStations,
        Category::SightSeeing,
        Category::Restrooms,
        Category::Restaurants,
        Category::Groceries,
        Category::ChargingStations,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::GasStations => "gas_stations",
            Self::SightSeeing => "sight_seeing",
            Self::Restrooms => "restrooms",
            Self::Restaurants => "restaurants",
            Self::Groceries => "groceries",
            Self::ChargingStations => "charging_stations",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::GasStations => "Gas Stations",
            Self::SightSeeing => "Sight Seeing",
            Self::Restrooms => "Restrooms",
            Self::Restaurants => "Restaurants",
            Self::Groceries => "Groceries",
            Self::ChargingStations => "Charging Stations",
        }
    }

    /// Place type understood by the places provider.
    pub fn place_type(&self) -> &'static str {
        match self {
            Self::GasStations => "gas_station",
            Self::SightSeeing => "tourist_attraction",
            Self::Restrooms => "convenience_store",
            Self::Restaurants => "restaurant",
            Self::Groceries => "supermarket",
            Self::ChargingStations => "charging_station",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    pub fn from_place_type(place_type: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.place_type() == place_type)
    }

    pub fn search_radius(&self) -> f64 {
        match self {
            Self::SightSeeing => WIDE_SEARCH_RADIUS,
            _ => DEFAULT_SEARCH_RADIUS,
        }
    }
}

/// Accepts the wire name, the display label or the provider place type.
impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .or_else(|| Self::from_label(s))
            .or_else(|| Self::from_place_type(s))
            .ok_or_else(invalid_input_error)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub category: Category,
    pub label: String,
    pub place_type: String,
}

impl From<Category> for CategoryInfo {
    fn from(category: Category) -> Self {
        Self {
            category,
            label: category.label().into(),
            place_type: category.place_type().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_type_table_is_bidirectional() {
        for category in Category::ALL {
            assert_eq!(Category::from_place_type(category.place_type()), Some(category));
            assert_eq!(Category::from_label(category.label()), Some(category));
        }

        assert_eq!(Category::from_place_type("bakery"), None);
        assert_eq!(Category::from_label("Bakeries"), None);
    }

    #[test]
    fn sight_seeing_searches_wider() {
        assert_eq!(Category::SightSeeing.search_radius(), 8000.0);
        assert_eq!(Category::Restaurants.search_radius(), 3200.0);
        assert_eq!(Category::ChargingStations.search_radius(), 3200.0);
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Category::GasStations).unwrap();
        assert_eq!(json, "\"gas_stations\"");

        let category: Category = serde_json::from_str("\"sight_seeing\"").unwrap();
        assert_eq!(category, Category::SightSeeing);
    }

    #[test]
    fn parses_name_label_or_place_type() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.name()));
            assert_eq!(category.name().parse::<Category>(), Ok(category));
        }

        assert_eq!("Gas Stations".parse::<Category>(), Ok(Category::GasStations));
        assert_eq!("supermarket".parse::<Category>(), Ok(Category::Groceries));
        assert_eq!("bakery".parse::<Category>(), Err(invalid_input_error()));
    }
}
