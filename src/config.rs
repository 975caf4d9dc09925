use dioxus::prelude::*;
use serde::Deserialize;

#[cfg(target_arch = "wasm32")]
use crate::error::FetchError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub form_endpoint: String,
    pub form_subject: String,
    pub pages_path: String,
    pub home_page: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form_endpoint: "https://formspree.io/f/mojlkonl".to_string(),
            form_subject: "Website contact form".to_string(),
            pages_path: "pages".to_string(),
            home_page: "home".to_string(),
        }
    }
}

pub fn use_site_config() -> Resource<SiteConfig> {
    use_resource(|| async move { fetch_site_config().await })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_site_config() -> SiteConfig {
    let loaded = match fetch_config_from("/config.json").await {
        Ok(config) => Ok(config),
        Err(_) => fetch_config_from("/assets/config.json").await,
    };
    match loaded {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("config: using defaults ({err})");
            SiteConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<SiteConfig, FetchError> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| FetchError::Network(err.to_string()))?;
    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    response
        .json::<SiteConfig>()
        .await
        .map_err(|err| FetchError::Decode(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_site_config() -> SiteConfig {
    config_from_env(|key| std::env::var(key).ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn config_from_env(lookup: impl Fn(&str) -> Option<String>) -> SiteConfig {
    let defaults = SiteConfig::default();
    SiteConfig {
        form_endpoint: lookup("FORM_ENDPOINT").unwrap_or(defaults.form_endpoint),
        form_subject: lookup("FORM_SUBJECT").unwrap_or(defaults.form_subject),
        pages_path: lookup("PAGES_PATH").unwrap_or(defaults.pages_path),
        home_page: lookup("HOME_PAGE").unwrap_or(defaults.home_page),
    }
}
