mod detail;
mod directory;

pub use detail::DetailFetcher;
pub use directory::DirectoryFetcher;

use crate::model::MealsResult;
use crate::FetchError;
use reqwest::Url;

/// Join `endpoint` onto `base` and attach a single query parameter
fn endpoint_url(base: &str, endpoint: &str, key: &str, value: &str) -> Result<Url, FetchError> {
    let raw = format!("{}/{}", base.trim_end_matches('/'), endpoint);
    Url::parse_with_params(&raw, &[(key, value)])
        .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", raw, e)))
}

fn decode(body: &[u8]) -> Result<MealsResult, FetchError> {
    Ok(serde_json::from_slice(body)?)
}
