//! Place search service

use std::sync::Arc;

use domain::{DomainError, Place};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::PlaceSearchPort;

/// Maximum accepted query length in characters
const MAX_QUERY_CHARS: usize = 100;

/// Free-text place lookup
pub struct PlaceService {
    search: Arc<dyn PlaceSearchPort>,
}

impl std::fmt::Debug for PlaceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceService").finish_non_exhaustive()
    }
}

impl PlaceService {
    /// Create a new place service
    pub fn new(search: Arc<dyn PlaceSearchPort>) -> Self {
        Self { search }
    }

    /// Search places matching `query`
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank or overlong query and
    /// `ExternalService` if the search provider fails.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Place>, ApplicationError> {
        let query = normalize_query(query)?;
        let places = self.search.search(query).await?;
        debug!(count = places.len(), "Place search completed");
        Ok(places)
    }

    /// Resolve `query` to its best matching place
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the provider has no match, in addition to the
    /// errors of [`PlaceService::search`].
    #[instrument(skip(self))]
    pub async fn locate(&self, query: &str) -> Result<Place, ApplicationError> {
        self.search(query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ApplicationError::NotFound(format!("No place matches '{}'", query.trim())))
    }
}

fn normalize_query(query: &str) -> Result<&str, ApplicationError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(
            DomainError::ValidationError("search query must not be empty".to_string()).into(),
        );
    }
    if query.chars().count() > MAX_QUERY_CHARS {
        return Err(DomainError::ValidationError(format!(
            "search query must be at most {MAX_QUERY_CHARS} characters"
        ))
        .into());
    }
    Ok(query)
}
