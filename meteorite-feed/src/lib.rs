mod endpoints;
pub mod error;
mod models;
pub mod numeric;

pub use models::{Coordinates, Field, Record};

use anyhow::Result;
use error::APIError;
use serde::de::DeserializeOwned;

/// Fetches all meteorite landings from the NASA open data catalog.
pub async fn get_records() -> Result<Vec<Record>> {
    get_records_from(&endpoints::landings()).await
}

/// Fetches meteorite landings from any endpoint serving the catalog format.
pub async fn get_records_from(url: &str) -> Result<Vec<Record>> {
    get(url).await
}

/// Decodes a JSON array of catalog records.
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    Ok(serde_json::from_str(text)?)
}

/// The URL of the default landings dataset.
pub fn default_url() -> String {
    endpoints::landings()
}

async fn get<T: DeserializeOwned>(url: &str) -> Result<T> {
    let resp = reqwest::get(url).await?;

    let status = resp.status();
    if status.as_u16() > 399 {
        let body = resp.text().await?;
        let reason = status.canonical_reason().unwrap_or_default();
        return Err(APIError::from_body(status.as_u16(), reason, &body).into());
    }

    let body = resp.json().await?;
    Ok(body)
}
