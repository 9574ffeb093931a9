#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

pub mod builder;
pub mod config;
pub mod error;
pub mod fetchers;
pub mod http;
pub mod manager;
pub mod model;
pub mod store;
pub mod uniffi_bindings;

pub use builder::MealsManagerBuilder;
pub use config::MealDbConfig;
pub use error::FetchError;
pub use http::{HttpClient, ReqwestClient};
pub use manager::MealsManager;
pub use model::{extract_ingredients, Ingredient, Meal};
pub use store::MealStore;

/// Fetch the dessert directory with default settings
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), fetch_meal::FetchError> {
/// for meal in fetch_meal::fetch_desserts().await? {
///     println!("{} {}", meal.id, meal.name);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn fetch_desserts() -> Result<Vec<Meal>, FetchError> {
    let config = MealDbConfig::default();
    let client = std::sync::Arc::new(ReqwestClient::new(config.timeout_duration())?);
    fetchers::DirectoryFetcher::new(client, config.directory_base_url, config.category)
        .fetch()
        .await
}

/// Look up one meal by id with default settings
pub async fn fetch_meal_details(id: &str) -> Result<Meal, FetchError> {
    let config = MealDbConfig::default();
    let client = std::sync::Arc::new(ReqwestClient::new(config.timeout_duration())?);
    fetchers::DetailFetcher::new(client, config.detail_base_url)
        .fetch(id)
        .await
}
