use crate as repo;
use crate::Error;
use lightbnb_core::types;
use log::{error, trace};

pub struct FacadeUser {
    repo: repo::Repository,
}

impl FacadeUser {
    pub fn new(repo: repo::Repository) -> Self {
        Self { repo }
    }

    /// Finds the user registered with `email`, if any.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<types::User>, Error> {
        trace!("searching user with email `{email}`");

        let record = repo::user_find_by_email(self.repo.pool(), email)
            .await
            .inspect_err(|e| error!("unable to search user by email :: {e}"))?;

        Ok(record.map(Into::into))
    }

    /// Finds the user with the given id, if any.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<types::User>, Error> {
        trace!("searching user `{id}`");

        let record = repo::user_find_by_id(self.repo.pool(), id)
            .await
            .inspect_err(|e| error!("unable to search user by id :: {e}"))?;

        Ok(record.map(Into::into))
    }

    /// Registers a new user and returns the stored record, including its id.
    ///
    /// Fails if the email is already registered, see [`Error::is_unique_violation`].
    pub async fn create(&self, user: &types::NewUser) -> Result<types::User, Error> {
        trace!("creating user `{}`", user.email);

        let record = repo::user_create(self.repo.pool(), user)
            .await
            .inspect_err(|e| error!("unable to create user :: {e}"))?;

        Ok(record.into())
    }
}
