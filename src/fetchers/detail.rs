use super::{decode, endpoint_url};
use crate::http::HttpClient;
use crate::model::Meal;
use crate::FetchError;
use log::debug;
use std::sync::Arc;

/// Looks up a single meal by id via `lookup.php`
pub struct DetailFetcher {
    client: Arc<dyn HttpClient>,
    base_url: String,
}

impl DetailFetcher {
    pub fn new(client: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the meal with `id`.
    ///
    /// # Errors
    /// - [`FetchError::InvalidId`] for a blank id, before any request is made
    /// - [`FetchError::Transport`] if the request fails
    /// - [`FetchError::DataNotFound`] if the response has no body
    /// - [`FetchError::Decode`] if the body is not a meals envelope
    /// - [`FetchError::MealNotFound`] if the envelope holds no meals
    pub async fn fetch(&self, id: &str) -> Result<Meal, FetchError> {
        if id.trim().is_empty() {
            return Err(FetchError::InvalidId(id.to_string()));
        }

        let url = endpoint_url(&self.base_url, "lookup.php", "i", id)?;
        let body = self.client.get(url.as_str()).await?;
        if body.is_empty() {
            return Err(FetchError::DataNotFound);
        }

        let result = decode(&body)?;
        if result.meals.len() > 1 {
            debug!(
                "Lookup for {} returned {} meals, using the first",
                id,
                result.meals.len()
            );
        }
        result
            .meals
            .into_iter()
            .next()
            .ok_or(FetchError::MealNotFound)
    }
}
