//! Constants used throughout the application

/// Mouth-open distance (frame pixels) above which a selection is attempted
pub const DEFAULT_MOUTH_OPEN_THRESHOLD: f64 = 20.0;

/// Minimum seconds between two accepted selections
pub const DEFAULT_COOLDOWN_SECS: f64 = 1.0;

/// Hit-test grid divisors. Only three rows carry keys; the lower two are dead space.
pub const DEFAULT_GRID_COLUMNS: u32 = 10;
pub const DEFAULT_GRID_ROWS: u32 = 5;

/// Visual margin around each key, in pixels
pub const DEFAULT_KEY_INSET: u32 = 10;

/// Default keyboard rows
pub const DEFAULT_KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM<⎚ "];

/// Layout symbols for the control keys
pub const BACKSPACE_SYMBOL: char = '<';
pub const CLEAR_SYMBOL: char = '⎚';
pub const SPACE_SYMBOL: char = ' ';

/// Face mesh landmark indices
pub const NOSE_TIP_LANDMARK: usize = 1;
pub const UPPER_LIP_LANDMARK: usize = 13;
pub const LOWER_LIP_LANDMARK: usize = 14;

/// Default calibration record location
pub const DEFAULT_CALIBRATION_FILE: &str = "nose_full_calibration.json";

/// Default screen size when the host does not report one
pub const DEFAULT_SCREEN_WIDTH: u32 = 1920;
pub const DEFAULT_SCREEN_HEIGHT: u32 = 1080;

/// Default smoothing parameters
pub const DEFAULT_EXPONENTIAL_ALPHA: f64 = 0.5;
pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 5;
