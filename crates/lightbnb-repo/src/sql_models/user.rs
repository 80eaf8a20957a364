use crate::{Database, Error};
use lightbnb_core::types;

#[derive(Debug, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<UserRecord> for types::User {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            password: value.password,
        }
    }
}

pub async fn user_find_by_email<'e, E>(exe: E, email: &str) -> Result<Option<UserRecord>, Error>
where
    E: sqlx::Executor<'e, Database = Database>,
{
    let res = sqlx::query_as::<_, UserRecord>(
        "SELECT id, name, email, password FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(exe)
    .await?;
    Ok(res)
}

pub async fn user_find_by_id<'e, E>(exe: E, id: i32) -> Result<Option<UserRecord>, Error>
where
    E: sqlx::Executor<'e, Database = Database>,
{
    let res = sqlx::query_as::<_, UserRecord>(
        "SELECT id, name, email, password FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(exe)
    .await?;
    Ok(res)
}

pub async fn user_create<'e, E>(exe: E, user: &types::NewUser) -> Result<UserRecord, Error>
where
    E: sqlx::Executor<'e, Database = Database>,
{
    let res = sqlx::query_as::<_, UserRecord>(
        r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
        "#,
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password)
    .fetch_one(exe)
    .await?;
    Ok(res)
}
