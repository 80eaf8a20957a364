use crate::{Database, Error};
use lightbnb_core::types;
use lightbnb_query as query;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;

#[derive(Debug, sqlx::FromRow)]
pub struct PropertyRecord {
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

impl From<PropertyRecord> for types::Property {
    fn from(value: PropertyRecord) -> Self {
        Self {
            id: value.id,
            owner_id: value.owner_id,
            title: value.title,
            description: value.description,
            thumbnail_photo_url: value.thumbnail_photo_url,
            cover_photo_url: value.cover_photo_url,
            cost_per_night: value.cost_per_night,
            parking_spaces: value.parking_spaces,
            number_of_bathrooms: value.number_of_bathrooms,
            number_of_bedrooms: value.number_of_bedrooms,
            country: value.country,
            street: value.street,
            city: value.city,
            province: value.province,
            post_code: value.post_code,
        }
    }
}

/// A property row followed by its aggregated rating
#[derive(Debug, sqlx::FromRow)]
pub struct PropertyListingRecord {
    #[sqlx(flatten)]
    pub property: PropertyRecord,
    pub average_rating: Option<f64>,
}

impl From<PropertyListingRecord> for types::PropertyListing {
    fn from(value: PropertyListingRecord) -> Self {
        Self {
            property: value.property.into(),
            average_rating: value.average_rating,
        }
    }
}

pub async fn property_create<'e, E>(
    exe: E,
    property: &types::NewProperty,
) -> Result<PropertyRecord, Error>
where
    E: sqlx::Executor<'e, Database = Database>,
{
    let res = sqlx::query_as::<_, PropertyRecord>(
        r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
                country, street, city, province, post_code
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING
                id, owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
                country, street, city, province, post_code
        "#,
    )
    .bind(property.owner_id)
    .bind(&property.title)
    .bind(&property.description)
    .bind(&property.thumbnail_photo_url)
    .bind(&property.cover_photo_url)
    .bind(property.cost_per_night)
    .bind(property.parking_spaces)
    .bind(property.number_of_bathrooms)
    .bind(property.number_of_bedrooms)
    .bind(&property.country)
    .bind(&property.street)
    .bind(&property.city)
    .bind(&property.province)
    .bind(&property.post_code)
    .fetch_one(exe)
    .await?;
    Ok(res)
}

/// Runs a property listing statement, binding its parameters by position.
pub async fn property_search<'e, E>(
    exe: E,
    stmt: &query::Statement,
) -> Result<Vec<PropertyListingRecord>, Error>
where
    E: sqlx::Executor<'e, Database = Database>,
{
    let q = sqlx::query_as::<_, PropertyListingRecord>(stmt.sql());
    let res = bind_params(q, stmt.params()).fetch_all(exe).await?;
    Ok(res)
}

fn bind_params<'q, O>(
    mut q: QueryAs<'q, Database, O, PgArguments>,
    params: &'q [query::Value],
) -> QueryAs<'q, Database, O, PgArguments> {
    for param in params {
        q = match param {
            query::Value::Text(v) => q.bind(v.as_str()),
            query::Value::Integer(v) => q.bind(*v),
            query::Value::BigInt(v) => q.bind(*v),
            query::Value::Float(v) => q.bind(*v),
        };
    }
    q
}
