//! Dispatches each subcommand to the matching repository facade.
use crate::cli::{AddPropertyArgs, Command};
use crate::error::Error;
use lightbnb_core::types;
use lightbnb_repo as repo;
use log::info;
use std::io::Read;

/// Runs `command` against the repository, returning its result as JSON.
pub async fn execute(repo: &repo::Repository, command: Command) -> Result<serde_json::Value, Error> {
    let value = match command {
        Command::Search(args) => {
            let search = types::PropertySearch::from(&args);
            let listings = repo::FacadeProperty::new(repo.clone())
                .search(&search, args.limit)
                .await?;
            info!("{} properties found", listings.len());
            serde_json::to_value(listings)?
        }
        Command::User(args) => {
            let users = repo::FacadeUser::new(repo.clone());
            let user = match (args.email, args.id) {
                (Some(email), _) => users.find_by_email(&email).await?,
                (None, Some(id)) => users.find_by_id(id).await?,
                // Prevented by the argument group
                (None, None) => None,
            };
            serde_json::to_value(user)?
        }
        Command::AddUser(args) => {
            let user = repo::FacadeUser::new(repo.clone())
                .create(&args.into())
                .await?;
            info!("user `{}` registered", user.id);
            serde_json::to_value(user)?
        }
        Command::Reservations(args) => {
            let reservations = repo::FacadeReservation::new(repo.clone())
                .all_for_guest(args.guest_id, args.limit)
                .await?;
            serde_json::to_value(reservations)?
        }
        Command::AddProperty(args) => {
            let payload = read_new_property(&args)?;
            let property = repo::FacadeProperty::new(repo.clone())
                .create(&payload)
                .await?;
            info!("property `{}` published", property.id);
            serde_json::to_value(property)?
        }
    };

    Ok(value)
}

fn read_new_property(args: &AddPropertyArgs) -> Result<types::NewProperty, Error> {
    let raw = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(serde_json::from_str(&raw)?)
}
