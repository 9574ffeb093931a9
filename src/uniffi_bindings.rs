//! UniFFI bindings for fetch-meal
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::{FetchError, Ingredient, Meal, MealsManager};

/// FFI-compatible meal summary
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiMeal {
    pub id: String,
    pub name: String,
    /// Thumbnail URL, if the API supplied one
    pub thumbnail: Option<String>,
    /// Ingredients split out of the raw comma-separated field
    pub ingredients: Vec<FfiIngredient>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredient {
    pub name: String,
    pub measurement: String,
}

impl From<Ingredient> for FfiIngredient {
    fn from(ingredient: Ingredient) -> Self {
        FfiIngredient {
            name: ingredient.name,
            measurement: ingredient.measurement,
        }
    }
}

impl From<Meal> for FfiMeal {
    fn from(meal: Meal) -> Self {
        let ingredients = meal.ingredients().into_iter().map(Into::into).collect();
        FfiMeal {
            id: meal.id,
            name: meal.name,
            thumbnail: meal.thumbnail,
            ingredients,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiFetchError {
    /// Network failure or non-success HTTP status
    Transport { message: String },
    /// Response carried no data
    DataNotFound { message: String },
    /// No meal exists for the requested id
    MealNotFound { message: String },
    /// Response body could not be decoded
    Decode { message: String },
    /// Invalid input provided
    InvalidInput { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiFetchError::Transport { message } => write!(f, "Transport error: {}", message),
            FfiFetchError::DataNotFound { message } => write!(f, "{}", message),
            FfiFetchError::MealNotFound { message } => write!(f, "{}", message),
            FfiFetchError::Decode { message } => write!(f, "Decode error: {}", message),
            FfiFetchError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiFetchError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiFetchError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiFetchError {}

impl From<FetchError> for FfiFetchError {
    fn from(err: FetchError) -> Self {
        let message = err.to_string();
        match err {
            FetchError::Transport(_) => FfiFetchError::Transport { message },
            FetchError::DataNotFound => FfiFetchError::DataNotFound { message },
            FetchError::MealNotFound => FfiFetchError::MealNotFound { message },
            FetchError::Decode(_) => FfiFetchError::Decode { message },
            FetchError::InvalidId(_) | FetchError::InvalidUrl(_) => {
                FfiFetchError::InvalidInput { message }
            }
            FetchError::BuilderError(_) | FetchError::ConfigError(_) => {
                FfiFetchError::ConfigError { message }
            }
        }
    }
}

/// Configuration for fetching meals
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiFetchConfig {
    /// Optional base URL for both endpoints (uses TheMealDB if not specified)
    pub base_url: Option<String>,
    /// Optional category (uses "Dessert" if not specified)
    pub category: Option<String>,
    /// Optional timeout in seconds (uses client default if not specified)
    pub timeout_seconds: Option<u64>,
}

fn build_manager(config: Option<FfiFetchConfig>) -> Result<MealsManager, FfiFetchError> {
    let config = config.unwrap_or_default();
    let mut builder = MealsManager::builder();

    if let Some(base_url) = config.base_url {
        builder = builder.base_url(base_url);
    }

    if let Some(category) = config.category {
        builder = builder.category(category);
    }

    if let Some(timeout_secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    Ok(builder.build()?)
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiFetchError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiFetchError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Fetch the dessert directory
///
/// Network and decode failures are logged and yield an empty list; only
/// configuration or runtime setup failures return `Err`.
///
/// # Arguments
/// * `config` - Optional configuration for the fetch
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn fetch_desserts(config: Option<FfiFetchConfig>) -> Result<Vec<FfiMeal>, FfiFetchError> {
    let manager = build_manager(config)?;
    let rt = create_runtime()?;
    rt.block_on(async {
        manager.refresh_directory().await;
        Ok(manager.meals().into_iter().map(Into::into).collect())
    })
}

/// Fetch a single meal by id
///
/// # Arguments
/// * `id` - TheMealDB meal id
/// * `config` - Optional configuration for the fetch
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn fetch_meal_details(
    id: String,
    config: Option<FfiFetchConfig>,
) -> Result<FfiMeal, FfiFetchError> {
    let manager = build_manager(config)?;
    let rt = create_runtime()?;
    rt.block_on(async { Ok(manager.load_details(&id).await?.into()) })
}

/// Split a raw comma-separated ingredient string
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn extract_ingredients(raw: Option<String>) -> Vec<FfiIngredient> {
    crate::extract_ingredients(raw.as_deref())
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Long-lived manager for a list screen and its detail screens
#[cfg_attr(feature = "uniffi", derive(uniffi::Object))]
pub struct FfiMealsManager {
    runtime: tokio::runtime::Runtime,
    manager: MealsManager,
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
impl FfiMealsManager {
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn new(config: Option<FfiFetchConfig>) -> Result<Arc<Self>, FfiFetchError> {
        Ok(Arc::new(Self {
            runtime: create_runtime()?,
            manager: build_manager(config)?,
        }))
    }

    /// Re-fetch the directory; failures leave the current list unchanged
    pub fn refresh_directory(&self) {
        self.runtime.block_on(self.manager.refresh_directory());
    }

    pub fn meals(&self) -> Vec<FfiMeal> {
        self.manager.meals().into_iter().map(Into::into).collect()
    }

    /// Fetch details and update the matching entry in `meals()`
    pub fn load_details(&self, id: String) -> Result<FfiMeal, FfiFetchError> {
        let meal = self.runtime.block_on(self.manager.load_details(&id))?;
        Ok(meal.into())
    }
}
