use crate::FetchError;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

/// Minimal HTTP capability the fetchers depend on
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET `url` and return the raw response body
    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// [`HttpClient`] backed by a shared `reqwest` client
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport(
                format!("Request failed with status: {}", status).into(),
            ));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_get_returns_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/ping")
            .with_status(200)
            .with_body("pong")
            .create_async()
            .await;

        let client = ReqwestClient::new(None).unwrap();
        let body = client.get(&format!("{}/ping", server.url())).await.unwrap();
        assert_eq!(body, b"pong");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_non_success_is_transport() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/ping")
            .with_status(503)
            .create_async()
            .await;

        let client = ReqwestClient::new(Some(Duration::from_secs(5))).unwrap();
        let err = client
            .get(&format!("{}/ping", server.url()))
            .await
            .unwrap_err();
        assert!(err.is_transport());
        assert!(err.to_string().contains("503"));
    }
}
