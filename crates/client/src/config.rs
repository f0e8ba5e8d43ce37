use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_url = std::env::var("API_URL").context("Cannot load API_URL env variable")?;
        Ok(Self::with_api_url(api_url))
    }

    /// Like [`Config::from_env`] with the API URL given explicitly.
    pub fn with_api_url(api_url: String) -> Self {
        Self {
            api_url,
            api_key: std::env::var("API_KEY")
                .ok()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
        }
    }
}
