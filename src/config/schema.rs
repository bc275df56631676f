use serde::Deserialize;

/// Top-level widget settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/cloudbar/config.toml` or `~/.config/cloudbar/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CLOUDBAR__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playback: PlaybackSettings,
    pub window: WindowSettings,
    pub ui: UiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playback: PlaybackSettings::default(),
            window: WindowSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Initial volume percentage. Out-of-range values are clamped into
    /// 0..=100 at startup rather than rejected.
    pub volume: i32,
    /// Simulated-playback tick cadence (milliseconds). Must be >= 1.
    pub tick_interval_ms: u64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            volume: 70,
            tick_interval_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Whether the widget asks the host shell to stay always-on-top at
    /// startup.
    pub pinned: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self { pinned: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Show a countdown (`-m:ss`) instead of the total duration in status
    /// lines.
    pub show_remaining: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_remaining: true,
        }
    }
}
