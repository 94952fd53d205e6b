use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// Shape of `./config.json` served next to `index.html`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Trims whitespace and trailing slashes; blank values are treated as unset.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn cache_base_url(value: String) -> String {
    API_BASE_URL.get_or_init(|| value).clone()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    // window.__STAFFBOARD_ENV = { API_BASE_URL: "..." } written by env.js
    pub fn base_url_from_env_js() -> Option<String> {
        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &"__STAFFBOARD_ENV".into()).ok()?;
        if env.is_undefined() || env.is_null() {
            return None;
        }
        js_sys::Reflect::get(&env, &"API_BASE_URL".into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(&env, &"api_base_url".into()).ok())
            .and_then(|v| v.as_string())
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let response = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !response.status().is_success() {
            log::debug!("config.json not served ({})", response.status());
            return None;
        }
        response.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(url) = browser::base_url_from_env_js().and_then(|v| normalize_base_url(&v)) {
        return cache_base_url(url);
    }
    if let Some(url) = browser::fetch_runtime_config()
        .await
        .and_then(|cfg| cfg.api_base_url)
        .and_then(|v| normalize_base_url(&v))
    {
        return cache_base_url(url);
    }
    cache_base_url(DEFAULT_API_BASE_URL.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    match API_BASE_URL.get() {
        Some(cached) => cached.clone(),
        None => DEFAULT_API_BASE_URL.to_string(),
    }
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL: {}", base);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes_and_blanks() {
        assert_eq!(
            normalize_base_url(" https://staff.example.com/api// "),
            Some("https://staff.example.com/api".to_string())
        );
        assert_eq!(normalize_base_url("   "), None);
        assert_eq!(normalize_base_url("/"), None);
    }

    #[test]
    fn runtime_config_parses_optional_base_url() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{ "api_base_url": "http://api.local" }"#).expect("parse");
        assert_eq!(cfg.api_base_url.as_deref(), Some("http://api.local"));
        let empty: RuntimeConfig = serde_json::from_str("{}").expect("parse");
        assert!(empty.api_base_url.is_none());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn host_falls_back_to_default_base_url() {
        assert_eq!(await_api_base_url().await, DEFAULT_API_BASE_URL);
    }
}
