use crate::builder::MealsManagerBuilder;
use crate::config::MealDbConfig;
use crate::fetchers::{DetailFetcher, DirectoryFetcher};
use crate::http::HttpClient;
use crate::model::Meal;
use crate::store::MealStore;
use crate::FetchError;
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::watch;

/// Binds the directory and detail fetchers to one observable [`MealStore`]
pub struct MealsManager {
    directory: DirectoryFetcher,
    detail: DetailFetcher,
    store: MealStore,
}

impl MealsManager {
    pub fn builder() -> MealsManagerBuilder {
        MealsManagerBuilder::default()
    }

    pub fn from_config(config: &MealDbConfig) -> Result<Self, FetchError> {
        Self::builder().config(config.clone()).build()
    }

    pub(crate) fn new(client: Arc<dyn HttpClient>, config: &MealDbConfig) -> Self {
        Self {
            directory: DirectoryFetcher::new(
                client.clone(),
                config.directory_base_url.clone(),
                config.category.clone(),
            ),
            detail: DetailFetcher::new(client, config.detail_base_url.clone()),
            store: MealStore::new(),
        }
    }

    pub fn store(&self) -> &MealStore {
        &self.store
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Meal>> {
        self.store.subscribe()
    }

    pub fn meals(&self) -> Vec<Meal> {
        self.store.snapshot()
    }

    /// Re-fetch the directory and replace the stored list.
    ///
    /// Failures are logged and leave the previous list in place.
    pub async fn refresh_directory(&self) {
        match self.directory.fetch().await {
            Ok(meals) => {
                info!(
                    "Loaded {} {} meals",
                    meals.len(),
                    self.directory.category()
                );
                self.store.replace_all(meals);
            }
            Err(e) => warn!("Failed to fetch meals: {}", e),
        }
    }

    /// Fetch one meal's details and patch it into the stored list if present
    pub async fn load_details(&self, id: &str) -> Result<Meal, FetchError> {
        let meal = self.detail.fetch(id).await?;
        if !self.store.update_meal(meal.clone()) {
            debug!("Meal {} is not in the current directory", meal.id);
        }
        Ok(meal)
    }
}
