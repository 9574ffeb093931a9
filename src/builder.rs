use std::sync::Arc;
use std::time::Duration;

use crate::config::MealDbConfig;
use crate::http::{HttpClient, ReqwestClient};
use crate::{FetchError, MealsManager};

/// Builder for configuring a [`MealsManager`]
#[derive(Default)]
pub struct MealsManagerBuilder {
    config: Option<MealDbConfig>,
    base_url: Option<String>,
    category: Option<String>,
    timeout: Option<Duration>,
    client: Option<Arc<dyn HttpClient>>,
}

impl MealsManagerBuilder {
    /// Start from an explicit configuration instead of the defaults
    ///
    /// # Example
    /// ```
    /// use fetch_meal::{MealDbConfig, MealsManager};
    ///
    /// let builder = MealsManager::builder().config(MealDbConfig::default());
    /// ```
    pub fn config(mut self, config: MealDbConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Point both the directory and the detail endpoints at one base URL
    ///
    /// # Example
    /// ```
    /// use fetch_meal::MealsManager;
    ///
    /// let builder = MealsManager::builder().base_url("http://localhost:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Category listed by the directory fetch
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// Ignored when a custom client is supplied with [`client`](Self::client).
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Use a custom [`HttpClient`] instead of the reqwest-backed default
    pub fn client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the manager
    ///
    /// # Errors
    /// Returns `FetchError` if:
    /// - the category is blank
    /// - the HTTP client cannot be created
    pub fn build(self) -> Result<MealsManager, FetchError> {
        let mut config = self.config.unwrap_or_default();

        if let Some(url) = self.base_url {
            config.directory_base_url = url.clone();
            config.detail_base_url = url;
        }
        if let Some(category) = self.category {
            config.category = category;
        }

        if config.category.trim().is_empty() {
            return Err(FetchError::BuilderError(
                "Category cannot be empty".to_string(),
            ));
        }

        let client = match self.client {
            Some(client) => client,
            None => Arc::new(ReqwestClient::new(
                self.timeout.or_else(|| config.timeout_duration()),
            )?),
        };

        Ok(MealsManager::new(client, &config))
    }
}
