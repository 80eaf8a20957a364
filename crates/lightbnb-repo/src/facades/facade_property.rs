use crate as repo;
use crate::Error;
use lightbnb_core::types;
use lightbnb_query as query;
use log::{error, trace};

pub struct FacadeProperty {
    repo: repo::Repository,
}

impl FacadeProperty {
    pub fn new(repo: repo::Repository) -> Self {
        Self { repo }
    }

    /// Lists the properties matching every filter set in `search`, cheapest
    /// first, each with the mean rating of its reviews.
    ///
    /// At most `limit` properties are returned, [`lightbnb_core::params::DEFAULT_LIMIT`]
    /// if no limit is given. Properties without reviews are listed with no
    /// rating, but never satisfy a minimum rating filter.
    pub async fn search(
        &self,
        search: &types::PropertySearch,
        limit: Option<u32>,
    ) -> Result<Vec<types::PropertyListing>, Error> {
        let stmt = query::PropertyQuery::from_search(search, limit).build();

        let records = repo::property_search(self.repo.pool(), &stmt)
            .await
            .inspect_err(|e| error!("unable to search properties :: {e}"))?;

        trace!("found {} properties", records.len());

        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Publishes a new property and returns the stored record, including its id.
    pub async fn create(&self, property: &types::NewProperty) -> Result<types::Property, Error> {
        trace!(
            "creating property `{}` for owner `{}`",
            property.title, property.owner_id
        );

        let record = repo::property_create(self.repo.pool(), property)
            .await
            .inspect_err(|e| error!("unable to create property :: {e}"))?;

        Ok(record.into())
    }
}
