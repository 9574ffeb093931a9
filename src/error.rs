use thiserror::Error;

/// Errors that can occur while fetching meals
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a usable response
    #[error("Failed to fetch URL: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The response carried no body
    #[error("Data not found")]
    DataNotFound,

    /// The lookup succeeded but returned zero meals
    #[error("Meal not found")]
    MealNotFound,

    /// The response body was not a valid meals envelope
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Meal ids must be non-empty
    #[error("Invalid meal id: {0:?}")]
    InvalidId(String),

    /// Endpoint URL could not be built from the configured base
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl FetchError {
    /// True for the two domain "nothing there" outcomes of a detail fetch
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::DataNotFound | FetchError::MealNotFound)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_messages() {
        assert_eq!(FetchError::DataNotFound.to_string(), "Data not found");
        assert_eq!(FetchError::MealNotFound.to_string(), "Meal not found");
    }

    #[test]
    fn test_classification() {
        assert!(FetchError::MealNotFound.is_not_found());
        assert!(FetchError::DataNotFound.is_not_found());
        assert!(!FetchError::MealNotFound.is_transport());

        let transport = FetchError::Transport("connection reset".into());
        assert!(transport.is_transport());
        assert!(!transport.is_not_found());

        let decode: FetchError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(!decode.is_transport());
        assert!(!decode.is_not_found());
    }
}
