use super::{decode, endpoint_url};
use crate::http::HttpClient;
use crate::model::Meal;
use crate::FetchError;
use log::debug;
use std::sync::Arc;

/// Lists every meal in one category via `filter.php`
pub struct DirectoryFetcher {
    client: Arc<dyn HttpClient>,
    base_url: String,
    category: String,
}

impl DirectoryFetcher {
    pub fn new(
        client: Arc<dyn HttpClient>,
        base_url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            category: category.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Fetch the directory in API response order
    pub async fn fetch(&self) -> Result<Vec<Meal>, FetchError> {
        let url = endpoint_url(&self.base_url, "filter.php", "c", &self.category)?;
        let body = self.client.get(url.as_str()).await?;
        let result = decode(&body)?;
        debug!(
            "Fetched {} meals in category {}",
            result.meals.len(),
            self.category
        );
        Ok(result.meals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetchers::testing::StaticClient;

    #[tokio::test]
    async fn test_fetch_keeps_response_order() {
        let client = Arc::new(StaticClient::body(
            r#"{"meals": [
                {"idMeal": "2", "strMeal": "Bakewell tart", "strMealThumb": "https://img/2.jpg"},
                {"idMeal": "1", "strMeal": "Apam balik", "strMealThumb": null}
            ]}"#,
        ));
        let fetcher = DirectoryFetcher::new(client.clone(), "https://api.test/v1", "Dessert");

        let meals = fetcher.fetch().await.unwrap();
        let ids: Vec<&str> = meals.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(meals[1].thumbnail, None);

        let requested = client.requested.lock().unwrap();
        assert_eq!(requested[0], "https://api.test/v1/filter.php?c=Dessert");
    }

    #[tokio::test]
    async fn test_fetch_empty_meals() {
        let client = Arc::new(StaticClient::body(r#"{"meals": []}"#));
        let fetcher = DirectoryFetcher::new(client, "https://api.test/v1", "Dessert");
        assert!(fetcher.fetch().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_decode_error() {
        let client = Arc::new(StaticClient::body("<html>oops</html>"));
        let fetcher = DirectoryFetcher::new(client, "https://api.test/v1", "Dessert");
        let err = fetcher.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_transport_error() {
        let client = Arc::new(StaticClient::failing("connection refused"));
        let fetcher = DirectoryFetcher::new(client, "https://api.test/v1", "Dessert");
        assert!(fetcher.fetch().await.unwrap_err().is_transport());
    }
}
