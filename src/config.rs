//! Configuration management for the nose keyboard

use crate::{
    constants::{
        DEFAULT_CALIBRATION_FILE, DEFAULT_COOLDOWN_SECS, DEFAULT_GRID_COLUMNS, DEFAULT_GRID_ROWS,
        DEFAULT_KEY_INSET, DEFAULT_KEY_ROWS, DEFAULT_MOUTH_OPEN_THRESHOLD, DEFAULT_SCREEN_HEIGHT,
        DEFAULT_SCREEN_WIDTH,
    },
    filters::{create_filter, PointerFilter},
    keyboard::KeyboardLayout,
    mapping::ScreenGeometry,
    selection::SelectionController,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Calibration record handling
    pub calibration: CalibrationConfig,

    /// Mouth-open selection
    pub selection: SelectionConfig,

    /// Keyboard layout and grid
    pub keyboard: KeyboardConfig,

    /// Target surface
    pub screen: ScreenConfig,

    /// Pointer smoothing
    pub smoothing: SmoothingConfig,
}

/// Calibration record configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Path of the JSON calibration record
    pub file: PathBuf,

    /// Run the wizard even if a record exists
    pub recalibrate: bool,
}

/// Selection trigger configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Inter-lip distance (frame pixels) a gesture must exceed
    pub mouth_open_threshold: f64,

    /// Seconds that must pass between two commits
    pub cooldown_secs: f64,
}

/// Keyboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Key rows; `<` is backspace, `⎚` is clear, ` ` is space
    pub rows: Vec<String>,

    /// Hit-test grid columns
    pub grid_columns: u32,

    /// Hit-test grid rows; 0 uses the number of layout rows
    pub grid_rows: u32,

    /// Visual margin inside each key
    pub key_inset: u32,
}

/// Screen configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,
}

/// Smoothing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Filter name with optional parameter, e.g. `none`, `exponential:0.5`, `moving_average:5`
    pub filter: String,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CALIBRATION_FILE),
            recalibrate: false,
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            mouth_open_threshold: DEFAULT_MOUTH_OPEN_THRESHOLD,
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
        }
    }
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_KEY_ROWS.iter().map(ToString::to_string).collect(),
            grid_columns: DEFAULT_GRID_COLUMNS,
            grid_rows: DEFAULT_GRID_ROWS,
            key_inset: DEFAULT_KEY_INSET,
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
        }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            filter: "none".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Screen geometry
    #[must_use]
    pub const fn geometry(&self) -> ScreenGeometry {
        ScreenGeometry::new(self.screen.width, self.screen.height)
    }

    /// Build the keyboard layout
    pub fn create_layout(&self) -> Result<KeyboardLayout> {
        let grid_rows = if self.keyboard.grid_rows == 0 {
            u32::try_from(self.keyboard.rows.len())
                .map_err(|_| Error::ConfigError(format!("Too many keyboard rows: {}", self.keyboard.rows.len())))?
                .max(1)
        } else {
            self.keyboard.grid_rows
        };
        let layout = KeyboardLayout::with_grid(&self.keyboard.rows, self.keyboard.grid_columns, grid_rows)?;
        Ok(layout.with_key_inset(self.keyboard.key_inset))
    }

    /// Selection cooldown as a duration
    pub fn cooldown(&self) -> Result<Duration> {
        Duration::try_from_secs_f64(self.selection.cooldown_secs).map_err(|e| {
            Error::ConfigError(format!(
                "Cooldown must be a non-negative number of seconds, got {}: {e}",
                self.selection.cooldown_secs
            ))
        })
    }

    /// Build the selection controller
    pub fn create_selection(&self) -> Result<SelectionController> {
        Ok(SelectionController::new(self.selection.mouth_open_threshold, self.cooldown()?))
    }

    /// Create the pointer filter from configuration
    pub fn create_filter(&self) -> Result<Box<dyn PointerFilter>> {
        create_filter(&self.smoothing.filter)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.selection.mouth_open_threshold.is_finite() || self.selection.mouth_open_threshold < 0.0 {
            return Err(Error::ConfigError(
                "Mouth open threshold must be a non-negative number".to_string(),
            ));
        }
        self.cooldown()?;

        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(Error::ConfigError("Screen size must be greater than 0".to_string()));
        }

        if self.keyboard.grid_columns == 0 {
            return Err(Error::ConfigError("Grid columns must be greater than 0".to_string()));
        }
        self.create_layout()
            .map_err(|e| Error::ConfigError(format!("Invalid keyboard: {e}")))?;

        self.create_filter()
            .map_err(|e| Error::ConfigError(format!("Invalid smoothing: {e}")))?;

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Nose Keyboard Configuration

# Calibration record
calibration:
  file: "nose_full_calibration.json"
  recalibrate: false

# Mouth-open click
selection:
  mouth_open_threshold: 20.0
  cooldown_secs: 1.0

# Keyboard layout ("<" backspace, "⎚" clear, " " space)
keyboard:
  rows:
    - "QWERTYUIOP"
    - "ASDFGHJKL"
    - "ZXCVBNM<⎚ "
  grid_columns: 10
  grid_rows: 5   # 0 = as many grid rows as layout rows
  key_inset: 10

# Target surface
screen:
  width: 1920
  height: 1080

# Pointer smoothing (none, exponential[:alpha], moving_average[:window])
smoothing:
  filter: "none"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_config_matches_defaults() {
        let parsed: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        let defaults = Config::default();
        assert_eq!(parsed.keyboard.rows, defaults.keyboard.rows);
        assert_eq!(parsed.selection.mouth_open_threshold, defaults.selection.mouth_open_threshold);
        assert_eq!(parsed.calibration.file, defaults.calibration.file);
        assert_eq!(parsed.geometry(), defaults.geometry());
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = serde_yaml::from_str("selection:\n  cooldown_secs: 0.5\n").unwrap();
        assert_eq!(parsed.selection.cooldown_secs, 0.5);
        assert_eq!(parsed.selection.mouth_open_threshold, DEFAULT_MOUTH_OPEN_THRESHOLD);
        assert_eq!(parsed.keyboard.grid_rows, DEFAULT_GRID_ROWS);
    }

    #[test]
    fn test_zero_grid_rows_fits_layout() {
        let mut config = Config::default();
        config.keyboard.grid_rows = 0;
        assert_eq!(config.create_layout().unwrap().grid(), (10, 3));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.selection.cooldown_secs = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.screen.width = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.smoothing.filter = "kalman".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.keyboard.rows = vec!["ABCDEFGHIJKL".to_string()];
        assert!(config.validate().is_err());
    }
}
