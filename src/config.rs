//! Runtime Configuration
//!
//! Read from `window.__TRIPPLE_HOST_CONFIG__` when the host page sets it.
//! Every field has a default so a missing or partial object still works.

use chrono::TimeDelta;
use serde::Deserialize;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__TRIPPLE_HOST_CONFIG__";
const DEFAULT_STALE_SECS: i64 = 30;

/// Which remote service implementation to talk to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// JS agent installed on the page
    #[default]
    Bridge,
    /// In-process store, for offline preview
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub backend: BackendKind,
    pub log_level: String,
    pub log_buffer_lines: usize,
    /// Freshness window for reads without a dedicated one
    pub default_stale_secs: i64,
    pub logo_max_bytes: usize,
    pub logo_fallback_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Bridge,
            log_level: "info".to_string(),
            log_buffer_lines: 500,
            default_stale_secs: DEFAULT_STALE_SECS,
            logo_max_bytes: crate::forms::MAX_LOGO_BYTES,
            logo_fallback_url: crate::content::DEFAULT_LOGO.to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the page global, falling back to defaults.
    ///
    /// Runs before the logger exists, so a malformed object is reported
    /// back to the caller instead of logged.
    pub fn load() -> (Self, Option<String>) {
        match read_global() {
            Ok(Some(config)) => config.checked(),
            Ok(None) => (Self::default(), None),
            Err(e) => (Self::default(), Some(format!("ignoring malformed {}: {}", CONFIG_GLOBAL, e))),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replace values that parse but cannot be used, describing what was replaced
    pub fn checked(mut self) -> (Self, Option<String>) {
        if stale_window(self.default_stale_secs).is_some() {
            return (self, None);
        }
        let problem = format!(
            "defaultStaleSecs {} out of range, using {}",
            self.default_stale_secs, DEFAULT_STALE_SECS
        );
        self.default_stale_secs = DEFAULT_STALE_SECS;
        (self, Some(problem))
    }

    /// Freshness window for the response cache
    pub fn stale_window(&self) -> TimeDelta {
        stale_window(self.default_stale_secs)
            .unwrap_or_else(|| TimeDelta::seconds(DEFAULT_STALE_SECS))
    }
}

fn stale_window(secs: i64) -> Option<TimeDelta> {
    if secs < 0 {
        return None;
    }
    TimeDelta::try_seconds(secs)
}

fn read_global() -> Result<Option<AppConfig>, String> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| format!("{:?}", e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"backend":"memory","logLevel":"debug"}"#).unwrap();
        assert_eq!(config.backend, BackendKind::Memory);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.default_stale_secs, 30);
        assert_eq!(config.logo_max_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_overflowing_stale_secs_falls_back() {
        let config = AppConfig::from_json(r#"{"defaultStaleSecs":100000000000000000}"#).unwrap();
        assert_eq!(config.stale_window(), TimeDelta::seconds(30));

        let (config, problem) = config.checked();
        assert_eq!(config.default_stale_secs, 30);
        assert!(problem.unwrap().contains("100000000000000000"));
    }

    #[test]
    fn test_negative_stale_secs_falls_back() {
        let (config, problem) = AppConfig::from_json(r#"{"defaultStaleSecs":-5}"#)
            .unwrap()
            .checked();
        assert_eq!(config.stale_window(), TimeDelta::seconds(30));
        assert!(problem.is_some());
    }

    #[test]
    fn test_valid_stale_secs_kept() {
        let (config, problem) = AppConfig::from_json(r#"{"defaultStaleSecs":0}"#).unwrap().checked();
        assert_eq!(config.stale_window(), TimeDelta::zero());
        assert_eq!(problem, None);
    }

    #[test]
    fn test_unknown_backend_rejected() {
        assert!(AppConfig::from_json(r#"{"backend":"grpc"}"#).is_err());
    }
}
