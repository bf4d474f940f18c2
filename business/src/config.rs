use log::info;
use serde::Deserialize;
use ustr::Ustr;

/// API host used by native builds when `LEADLOOP_API_BASE_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Deserialize)]
struct RawConfig {
    leadloop_api_base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Scheme and host of the REST API, without the `/api` suffix.
    ///
    /// Empty means same origin, which is what the web build uses.
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    /// Loads the configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Loads the configuration from `vars`, falling back to defaults for unset values.
    pub fn from_vars<I, S>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(vars)?;

        match raw.leadloop_api_base_url {
            Some(url) => {
                info!("Using provided LEADLOOP_API_BASE_URL: {url}");
                Ok(Self::new(url))
            }
            None => {
                let config = Self::default();
                info!(
                    "LEADLOOP_API_BASE_URL not set, defaulting to {:?}",
                    config.api_base_url
                );
                Ok(config)
            }
        }
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else {
                DEFAULT_API_BASE_URL.to_owned()
            },
        }
    }
}
