//! Application configuration
//!
//! Split into focused sub-modules:
//! - `calendar`: location of the ICS file
//! - `assets`: idle and busy animation files
//! - `timing`: poll and frame cadence
//! - `surface`: widget window title and size
//! - `logging`: log filter and output format
//!
//! Values come from built-in defaults, optionally overridden by a
//! `lifecube.toml` in the working directory. There is no environment
//! variable source.

mod assets;
mod calendar;
mod logging;
mod surface;
mod timing;

use application::ApplicationError;
use serde::{Deserialize, Serialize};

pub use assets::AssetsConfig;
pub use calendar::CalendarConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use surface::SurfaceConfig;
pub use timing::TimingConfig;

/// Base name of the optional configuration file (extension picked by `config`)
pub const CONFIG_FILE_NAME: &str = "lifecube";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Calendar file configuration
    #[serde(default)]
    pub calendar: CalendarConfig,

    /// Animation asset configuration
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Timer configuration
    #[serde(default)]
    pub timing: TimingConfig,

    /// Render surface configuration
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from defaults and `lifecube.*` if it exists
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(CONFIG_FILE_NAME)
    }

    /// Load configuration from defaults and the file `name` (without
    /// extension) if it exists
    pub fn load_from(name: &str) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("calendar.path", defaults.calendar.path_string())?
            .set_default("assets.idle", defaults.assets.idle_string())?
            .set_default("assets.busy", defaults.assets.busy_string())?
            .set_default("surface.title", defaults.surface.title.clone())?
            .set_default("logging.filter", defaults.logging.filter.clone())?
            // Load from file if exists
            .add_source(config::File::with_name(name).required(false));

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Check values the runtime cannot work with
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first offending field.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.timing.poll_interval_secs == 0 {
            return Err(ApplicationError::Configuration(
                "timing.poll_interval_secs must be greater than zero".to_string(),
            ));
        }
        if self.timing.frame_interval_ms == 0 {
            return Err(ApplicationError::Configuration(
                "timing.frame_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(ApplicationError::Configuration(format!(
                "surface size must be non-zero, got {}x{}",
                self.surface.width, self.surface.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path, time::Duration};

    use super::*;

    fn load_toml(dir: &Path, body: &str) -> AppConfig {
        fs::write(dir.join("lifecube.toml"), body).unwrap();
        let name = dir.join("lifecube");
        AppConfig::load_from(name.to_str().unwrap()).unwrap()
    }

    #[test]
    fn defaults_match_widget() {
        let config = AppConfig::default();
        assert_eq!(config.calendar.path, Path::new("my_schedule.ics"));
        assert_eq!(config.assets.idle, Path::new("assets/idle.gif"));
        assert_eq!(config.assets.busy, Path::new("assets/stressed.gif"));
        assert_eq!(config.timing.poll_interval(), Duration::from_secs(30));
        assert_eq!(config.timing.frame_interval(), Duration::from_millis(50));
        assert_eq!((config.surface.width, config.surface.height), (200, 200));
        assert_eq!(config.surface.title, "Academic Cube");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let name = dir.path().join("absent");
        let config = AppConfig::load_from(name.to_str().unwrap()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn file_overrides_selected_values() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_toml(
            dir.path(),
            r#"
[calendar]
path = "/home/me/work.ics"

[timing]
frame_interval_ms = 80

[logging]
format = "json"
"#,
        );
        assert_eq!(config.calendar.path, Path::new("/home/me/work.ics"));
        assert_eq!(config.timing.frame_interval(), Duration::from_millis(80));
        assert_eq!(config.timing.poll_interval(), Duration::from_secs(30));
        assert_eq!(config.assets, AssetsConfig::default());
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lifecube.toml"), "[timing\npoll = ").unwrap();
        let name = dir.path().join("lifecube");
        assert!(AppConfig::load_from(name.to_str().unwrap()).is_err());
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_intervals() {
        let mut config = AppConfig::default();
        config.timing.poll_interval_secs = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.timing.frame_interval_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("frame_interval_ms"));
    }

    #[test]
    fn validate_rejects_empty_surface() {
        let mut config = AppConfig::default();
        config.surface.height = 0;
        assert!(config.validate().is_err());
    }
}
