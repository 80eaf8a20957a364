use serde::{Deserialize, Serialize};

/// Optional constraints applied when listing properties.
///
/// Every field left to `None` imposes no constraint on its dimension, so the
/// default value matches every property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertySearch {
    /// Case-insensitive substring of the property city
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    pub minimum_price_per_night: Option<i32>,
    pub maximum_price_per_night: Option<i32>,
    /// Lower bound on the mean review rating
    pub minimum_rating: Option<f64>,
}

impl PropertySearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn with_minimum_price_per_night(mut self, price: i32) -> Self {
        self.minimum_price_per_night = Some(price);
        self
    }

    pub fn with_maximum_price_per_night(mut self, price: i32) -> Self {
        self.maximum_price_per_night = Some(price);
        self
    }

    pub fn with_minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// Returns the city filter, if any. Blank values are treated as absent.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.trim().is_empty())
    }
}
