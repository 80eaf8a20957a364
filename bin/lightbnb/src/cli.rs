use clap::{ArgGroup, Args, Parser, Subcommand};
use lightbnb_core::{params, types};
use lightbnb_repo as repo;
use std::path::PathBuf;
use std::time::Duration;

/// Command line access to the LightBnB listing database
#[derive(Parser, Debug)]
#[command(name = "lightbnb", version)]
pub struct Cli {
    /// PostgreSQL connection url
    #[arg(long, env = params::env::DATABASE_URL, hide_env_values = true)]
    pub database_url: String,

    /// Maximum number of pooled connections
    #[arg(long, env = params::env::MAX_CONNECTIONS, default_value_t = params::DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds to wait for a free connection
    #[arg(long, env = params::env::ACQUIRE_TIMEOUT_SECS, default_value_t = params::DEFAULT_ACQUIRE_TIMEOUT_SECS)]
    pub acquire_timeout: u64,

    /// Pretty print the JSON output
    #[arg(long)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn repo_config(&self) -> Result<repo::Config, repo::Error> {
        let config = repo::Config::try_from_str(&self.database_url)?
            .with_max_connections(self.max_connections)
            .with_acquire_timeout(Duration::from_secs(self.acquire_timeout));
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List properties matching every given filter, cheapest first
    Search(SearchArgs),
    /// Look up a user by email or id
    User(UserArgs),
    /// Register a new user
    AddUser(AddUserArgs),
    /// List the reservations of a guest, most recent first
    Reservations(ReservationsArgs),
    /// Publish a new property described by a JSON document
    AddProperty(AddPropertyArgs),
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Case-insensitive part of the city name
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub owner_id: Option<i32>,
    #[arg(long)]
    pub minimum_price_per_night: Option<i32>,
    #[arg(long)]
    pub maximum_price_per_night: Option<i32>,
    #[arg(long)]
    pub minimum_rating: Option<f64>,
    #[arg(long)]
    pub limit: Option<u32>,
}

impl From<&SearchArgs> for types::PropertySearch {
    fn from(value: &SearchArgs) -> Self {
        Self {
            city: value.city.clone(),
            owner_id: value.owner_id,
            minimum_price_per_night: value.minimum_price_per_night,
            maximum_price_per_night: value.maximum_price_per_night,
            minimum_rating: value.minimum_rating,
        }
    }
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("lookup").required(true).args(["email", "id"])))]
pub struct UserArgs {
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub id: Option<i32>,
}

#[derive(Args, Debug)]
pub struct AddUserArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

impl From<AddUserArgs> for types::NewUser {
    fn from(value: AddUserArgs) -> Self {
        Self::new(value.name, value.email, value.password)
    }
}

#[derive(Args, Debug)]
pub struct ReservationsArgs {
    #[arg(long)]
    pub guest_id: i32,
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Args, Debug)]
pub struct AddPropertyArgs {
    /// JSON file describing the property, read from stdin if missing
    #[arg(long)]
    pub file: Option<PathBuf>,
}
