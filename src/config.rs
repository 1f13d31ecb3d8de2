//! Server settings.
//!
//! Settings come from an optional JSON file and are then overridden by any
//! command line flags that were given explicitly.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TryOnError};
use crate::ui::messages::Route;
use crate::ui::ViewContext;

/// Sessions are kept at least this long, even if configured lower.
const MIN_SESSION_IDLE_MINUTES: u64 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Address to listen on
    pub bind: IpAddr,
    /// Port to listen on (0 = auto-assign)
    pub port: u16,
    /// How long the "processing" state lasts before the try-on screen opens
    pub processing_delay_ms: u64,
    /// Largest accepted image data URL, in KiB
    pub max_image_kb: usize,
    /// Sessions untouched for this long are dropped (at least one minute)
    pub session_idle_minutes: u64,
    /// Target of the "View Products" action
    pub recommendations_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 23380,
            processing_delay_ms: 2000,
            max_image_kb: 8192,
            session_idle_minutes: 30,
            recommendations_url: Route::Recommendations.path().to_string(),
        }
    }
}

/// Values given on the command line; `None` keeps the file/default value.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub bind: Option<IpAddr>,
    pub port: Option<u16>,
    pub processing_delay_ms: Option<u64>,
    pub max_image_kb: Option<usize>,
    pub session_idle_minutes: Option<u64>,
    pub recommendations_url: Option<String>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| TryOnError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| TryOnError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply(self, overrides: SettingsOverrides) -> Self {
        Self {
            bind: overrides.bind.unwrap_or(self.bind),
            port: overrides.port.unwrap_or(self.port),
            processing_delay_ms: overrides.processing_delay_ms.unwrap_or(self.processing_delay_ms),
            max_image_kb: overrides.max_image_kb.unwrap_or(self.max_image_kb),
            session_idle_minutes: overrides.session_idle_minutes.unwrap_or(self.session_idle_minutes),
            recommendations_url: overrides.recommendations_url.unwrap_or(self.recommendations_url),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub fn max_image_bytes(&self) -> usize {
        self.max_image_kb.saturating_mul(1024)
    }

    pub fn session_idle(&self) -> Duration {
        let minutes = self.session_idle_minutes.max(MIN_SESSION_IDLE_MINUTES);
        Duration::from_secs(minutes.saturating_mul(60))
    }

    pub fn view_context(&self) -> ViewContext {
        ViewContext {
            recommendations_url: self.recommendations_url.clone(),
        }
    }
}
