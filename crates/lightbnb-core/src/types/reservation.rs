use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stay booked by a guest, as stored in the `reservations` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i32,
    pub guest_id: i32,
    pub property_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A [`Reservation`] joined with a summary of the reserved property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestReservation {
    #[serde(flatten)]
    pub reservation: Reservation,
    pub title: String,
    pub cover_photo_url: String,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: i32,
    pub parking_spaces: i32,
    pub cost_per_night: i32,
    /// Mean rating of the reserved property, `None` when it has no reviews
    pub average_rating: Option<f64>,
}
