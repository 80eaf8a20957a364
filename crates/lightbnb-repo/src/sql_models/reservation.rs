use crate::{Database, Error};
use chrono::NaiveDate;
use lightbnb_core::types;

#[derive(Debug, sqlx::FromRow)]
pub struct GuestReservationRecord {
    pub id: i32,
    pub guest_id: i32,
    pub property_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    pub title: String,
    pub cover_photo_url: String,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: i32,
    pub parking_spaces: i32,
    pub cost_per_night: i32,

    pub average_rating: Option<f64>,
}

impl From<GuestReservationRecord> for types::GuestReservation {
    fn from(value: GuestReservationRecord) -> Self {
        Self {
            reservation: types::Reservation {
                id: value.id,
                guest_id: value.guest_id,
                property_id: value.property_id,
                start_date: value.start_date,
                end_date: value.end_date,
            },
            title: value.title,
            cover_photo_url: value.cover_photo_url,
            number_of_bedrooms: value.number_of_bedrooms,
            number_of_bathrooms: value.number_of_bathrooms,
            parking_spaces: value.parking_spaces,
            cost_per_night: value.cost_per_night,
            average_rating: value.average_rating,
        }
    }
}

/// Returns the reservations of a guest, most recent stay first.
///
/// Each reservation carries the mean rating of the reserved property, `NULL`
/// if the property has no reviews.
pub async fn reservation_find_all_by_guest<'e, E>(
    exe: E,
    guest_id: i32,
    limit: u32,
) -> Result<Vec<GuestReservationRecord>, Error>
where
    E: sqlx::Executor<'e, Database = Database>,
{
    let res = sqlx::query_as::<_, GuestReservationRecord>(
        r#"
            SELECT
                reservations.id,
                reservations.guest_id,
                reservations.property_id,
                reservations.start_date,
                reservations.end_date,
                properties.title,
                properties.cover_photo_url,
                properties.number_of_bedrooms,
                properties.number_of_bathrooms,
                properties.parking_spaces,
                properties.cost_per_night,
                AVG(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON properties.id = reservations.property_id
            LEFT JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE reservations.guest_id = $1
            GROUP BY reservations.id, properties.id
            ORDER BY reservations.start_date DESC, reservations.id DESC
            LIMIT $2
        "#,
    )
    .bind(guest_id)
    .bind(i64::from(limit))
    .fetch_all(exe)
    .await?;
    Ok(res)
}
