use serde::{Deserialize, Serialize};

// ////////////////////////////////////////////////////////////////////////////
// PROPERTY
// ////////////////////////////////////////////////////////////////////////////

/// A rental listing as stored in the `properties` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

/// Data required to publish a new [`Property`], the id is generated by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

// ////////////////////////////////////////////////////////////////////////////
// LISTING
// ////////////////////////////////////////////////////////////////////////////

/// A [`Property`] returned by a search, enriched with the mean rating of its reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    #[serde(flatten)]
    pub property: Property,
    /// Mean of all review ratings, `None` when the property was never reviewed
    pub average_rating: Option<f64>,
}

impl PropertyListing {
    pub fn id(&self) -> i32 {
        self.property.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_property_optional_fields() {
        let raw = r#"{
            "owner_id": 1,
            "title": "Cozy cabin",
            "thumbnail_photo_url": "https://img/thumb.jpg",
            "cover_photo_url": "https://img/cover.jpg",
            "cost_per_night": 120,
            "country": "Canada",
            "street": "1 Lake Rd",
            "city": "Whistler",
            "province": "BC",
            "post_code": "V0N 1B0"
        }"#;

        let property: NewProperty = serde_json::from_str(raw).unwrap();

        assert_eq!(property.description, None);
        assert_eq!(property.parking_spaces, 0);
        assert_eq!(property.number_of_bedrooms, 0);
        assert_eq!(property.cost_per_night, 120);
    }

    #[test]
    fn listing_is_flattened() {
        let listing = PropertyListing {
            property: Property {
                id: 7,
                owner_id: 1,
                title: "Loft".to_owned(),
                description: None,
                thumbnail_photo_url: "t".to_owned(),
                cover_photo_url: "c".to_owned(),
                cost_per_night: 90,
                parking_spaces: 1,
                number_of_bathrooms: 1,
                number_of_bedrooms: 2,
                country: "Canada".to_owned(),
                street: "2 Main St".to_owned(),
                city: "Toronto".to_owned(),
                province: "ON".to_owned(),
                post_code: "M5V".to_owned(),
            },
            average_rating: None,
        };

        let value = serde_json::to_value(&listing).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["city"], "Toronto");
        assert!(value["average_rating"].is_null());
        assert_eq!(listing.id(), 7);
    }
}
