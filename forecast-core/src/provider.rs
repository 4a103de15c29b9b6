use crate::{Config, WeatherSnapshot, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions plus the daily forecast for a free-text location.
    async fn fetch_forecast(&self, location: &str) -> anyhow::Result<WeatherSnapshot>;
}

/// Construct the weatherapi.com provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured for weatherapi.\n\
                 Hint: run `forecast configure` and enter your API key."
        )
    })?;

    let provider = WeatherApiProvider::new(api_key.to_owned())
        .with_base_url(config.base_url.clone())
        .with_timeout(std::time::Duration::from_secs(config.timeout_secs))?;

    Ok(Box::new(provider))
}
