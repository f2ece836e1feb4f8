use std::any::Any;

use anyhow::Context as _;
use chrono::TimeDelta;
use griddle_states::State;
use log::info;
use serde::Deserialize;
use ustr::Ustr;

use crate::NotificationTiming;

const ENV_PREFIX: &str = "GRIDDLE_";

/// What happens to a commit that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectPolicy {
    /// Drop the candidate; the cell shows its previous value.
    #[default]
    Revert,
    /// Keep the editor open with the rejected text.
    Block,
}

/// Which commits are written back to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DispatchPolicy {
    #[default]
    AcceptedOnly,
    /// Also write rows whose edit was rejected by validation.
    EveryCommit,
}

/// Environment as read by `serde-env`, with the `GRIDDLE_` prefix stripped.
#[derive(Debug, Default, Deserialize)]
pub struct RawConfig {
    api_base_url: Option<String>,
    notification_ttl_ms: Option<i64>,
    notification_fade_ms: Option<i64>,
    reject_policy: Option<RejectPolicy>,
    dispatch_policy: Option<DispatchPolicy>,
    read_only: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    pub notification_ttl_ms: i64,
    pub notification_fade_ms: i64,
    pub reject_policy: RejectPolicy,
    pub dispatch_policy: DispatchPolicy,
    pub read_only: bool,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else {
                "http://localhost:3000".to_owned()
            },
            notification_ttl_ms: 10_000,
            notification_fade_ms: 250,
            reject_policy: RejectPolicy::default(),
            dispatch_policy: DispatchPolicy::default(),
            read_only: false,
        }
    }
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Read `GRIDDLE_*` variables from the process environment.
    pub fn init() -> anyhow::Result<Self> {
        let vars = std::env::vars()
            .filter_map(|(key, value)| Some((key.strip_prefix(ENV_PREFIX)?.to_owned(), value)));
        let raw: RawConfig =
            serde_env::from_iter(vars).context("Failed to read GRIDDLE_* environment")?;
        let config = Self::from_raw(raw)?;
        info!("Loaded config, api at {}", config.api_url());
        Ok(config)
    }

    pub fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let config = Self {
            api_base_url: raw
                .api_base_url
                .map(|url| url.trim_end_matches('/').to_owned())
                .unwrap_or(defaults.api_base_url),
            notification_ttl_ms: raw
                .notification_ttl_ms
                .unwrap_or(defaults.notification_ttl_ms),
            notification_fade_ms: raw
                .notification_fade_ms
                .unwrap_or(defaults.notification_fade_ms),
            reject_policy: raw.reject_policy.unwrap_or_default(),
            dispatch_policy: raw.dispatch_policy.unwrap_or_default(),
            read_only: raw.read_only.unwrap_or_default(),
        };

        anyhow::ensure!(
            config.notification_ttl_ms > 0,
            "NOTIFICATION_TTL_MS must be positive, got {}",
            config.notification_ttl_ms
        );
        anyhow::ensure!(
            config.notification_fade_ms >= 0,
            "NOTIFICATION_FADE_MS must not be negative, got {}",
            config.notification_fade_ms
        );

        Ok(config)
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }

    pub fn notification_timing(&self) -> NotificationTiming {
        NotificationTiming {
            ttl: TimeDelta::milliseconds(self.notification_ttl_ms),
            fade: TimeDelta::milliseconds(self.notification_fade_ms),
        }
    }
}

impl State for BusinessConfig {
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}
