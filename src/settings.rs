use crate::host::TapTarget;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Seconds between widget refreshes. Defaults to one day.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
    /// Seconds until the first timer fire. If `None`, the refresh interval
    /// is used.
    #[serde(default)]
    pub first_fire_delay_secs: Option<u64>,
    /// Which widget element opens the application when tapped.
    #[serde(default)]
    pub tap_target: TapTarget,
    /// Path of the JSON key-value file the content job writes.
    #[serde(default = "default_store_path")]
    pub store_path: String,
    /// Command used to open the application's main screen on tap.
    #[serde(default)]
    pub app_command: String,
    /// When enabled the application initialises the logger at debug level
    /// and logs every per-instance render.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
}

fn default_refresh_interval() -> u64 {
    86_400
}

fn default_store_path() -> String {
    "widget_data.json".into()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval(),
            first_fire_delay_secs: None,
            tap_target: TapTarget::Word,
            store_path: default_store_path(),
            app_command: String::new(),
            debug_logging: false,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn first_fire_delay(&self) -> Duration {
        Duration::from_secs(
            self.first_fire_delay_secs
                .unwrap_or(self.refresh_interval_secs),
        )
    }
}
