use crate::{
    Config, LookupError, WeatherRequest, WeatherSnapshot, provider::mock::MockProvider,
};
use async_trait::async_trait;
use std::{convert::TryFrom, fmt::Debug};
use tracing::debug;

pub mod mock;
pub mod response;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Mock,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Mock => "mock",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::Mock]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "mock" => Ok(ProviderId::Mock),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: mock."
            )),
        }
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, request: &WeatherRequest) -> Result<WeatherSnapshot, LookupError>;
}

/// Validate a raw query and run it against the provider.
///
/// Empty input is rejected up front; the provider is never called for it.
pub async fn lookup(
    provider: &dyn WeatherProvider,
    query: &str,
) -> Result<WeatherSnapshot, LookupError> {
    let city = query.trim();
    if city.is_empty() {
        return Err(LookupError::EmptyQuery);
    }

    debug!(city, "looking up weather");
    provider
        .fetch(&WeatherRequest { city: city.to_string() })
        .await
}

/// Construct a provider for an explicit ProviderId.
pub fn provider_for(id: ProviderId) -> Box<dyn WeatherProvider> {
    match id {
        ProviderId::Mock => Box::new(MockProvider::new()),
    }
}

/// Construct the default provider from config, using the `default_provider` field.
pub fn default_provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let id = config.default_provider_id()?;
    Ok(provider_for(id))
}
