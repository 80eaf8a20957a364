use crate as repo;
use crate::Error;
use lightbnb_core::{params, types};
use log::{error, trace};

pub struct FacadeReservation {
    repo: repo::Repository,
}

impl FacadeReservation {
    pub fn new(repo: repo::Repository) -> Self {
        Self { repo }
    }

    /// Returns the reservations of `guest_id`, most recent first, together
    /// with a summary of each reserved property.
    ///
    /// At most `limit` reservations are returned, [`params::DEFAULT_LIMIT`] if
    /// no limit is given.
    pub async fn all_for_guest(
        &self,
        guest_id: i32,
        limit: Option<u32>,
    ) -> Result<Vec<types::GuestReservation>, Error> {
        let limit = limit.unwrap_or(params::DEFAULT_LIMIT);
        trace!("listing up to {limit} reservations of guest `{guest_id}`");

        let records = repo::reservation_find_all_by_guest(self.repo.pool(), guest_id, limit)
            .await
            .inspect_err(|e| error!("unable to list reservations :: {e}"))?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}
