//! On-screen keyboard grid and pointer hit testing.
//!
//! Hit geometry divides the screen into a fixed grid (10 columns by 5 rows by
//! default) regardless of how many keys each row actually holds. The default
//! layout only fills three of the five grid rows, so the lower part of the
//! screen resolves to no key. [`KeyboardLayout::fit_grid_to_rows`] switches to
//! a grid with exactly as many rows as the layout.
//!
//! Cells are half-open so neighbours never overlap; the far right and bottom
//! screen edges belong to the last grid column and row.

use crate::{
    constants::{
        BACKSPACE_SYMBOL, CLEAR_SYMBOL, DEFAULT_GRID_COLUMNS, DEFAULT_GRID_ROWS, DEFAULT_KEY_INSET,
        DEFAULT_KEY_ROWS, SPACE_SYMBOL,
    },
    mapping::ScreenGeometry,
    Error, Result,
};
use std::fmt;

/// A key on the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable character, typed verbatim
    Char(char),
    /// Types a space
    Space,
    /// Removes the last character
    Backspace,
    /// Empties the buffer
    Clear,
}

impl Key {
    /// Key for a layout symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Self {
        match symbol {
            BACKSPACE_SYMBOL => Self::Backspace,
            CLEAR_SYMBOL => Self::Clear,
            SPACE_SYMBOL => Self::Space,
            c => Self::Char(c),
        }
    }

    /// Symbol drawn on the key
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Char(c) => c,
            Self::Space => SPACE_SYMBOL,
            Self::Backspace => BACKSPACE_SYMBOL,
            Self::Clear => CLEAR_SYMBOL,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Space => f.write_str("space"),
            Self::Backspace => f.write_str("backspace"),
            Self::Clear => f.write_str("clear"),
        }
    }
}

/// Key found under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHit {
    /// Layout row
    pub row: usize,
    /// Position within the row
    pub col: usize,
    /// Key at that cell
    pub key: Key,
}

/// Pixel rectangle, `x`/`y` being the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Static grid of keys
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardLayout {
    rows: Vec<Vec<Key>>,
    grid_columns: u32,
    grid_rows: u32,
    key_inset: u32,
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self {
            rows: DEFAULT_KEY_ROWS
                .iter()
                .map(|row| row.chars().map(Key::from_symbol).collect())
                .collect(),
            grid_columns: DEFAULT_GRID_COLUMNS,
            grid_rows: DEFAULT_GRID_ROWS,
            key_inset: DEFAULT_KEY_INSET,
        }
    }
}

impl KeyboardLayout {
    /// Parse a layout from symbol rows, using the default grid
    ///
    /// # Errors
    ///
    /// Returns an error if no row has keys or a row is wider than the grid
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        Self::with_grid(rows, DEFAULT_GRID_COLUMNS, DEFAULT_GRID_ROWS)
    }

    /// Parse a layout from symbol rows with explicit grid divisors
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty, no row has keys, or the
    /// layout does not fit in the grid
    pub fn with_grid<S: AsRef<str>>(rows: &[S], grid_columns: u32, grid_rows: u32) -> Result<Self> {
        if grid_columns == 0 || grid_rows == 0 {
            return Err(Error::InvalidInput(format!(
                "Keyboard grid must be non-empty, got {grid_columns}x{grid_rows}"
            )));
        }

        let rows: Vec<Vec<Key>> = rows
            .iter()
            .map(|row| row.as_ref().chars().map(Key::from_symbol).collect())
            .collect();

        if rows.iter().all(Vec::is_empty) {
            return Err(Error::InvalidInput("Keyboard layout has no keys".to_string()));
        }
        if rows.len() > grid_rows as usize {
            return Err(Error::InvalidInput(format!(
                "Keyboard layout has {} rows but the grid only {grid_rows}",
                rows.len()
            )));
        }
        if let Some(wide) = rows.iter().position(|row| row.len() > grid_columns as usize) {
            return Err(Error::InvalidInput(format!(
                "Keyboard row {wide} has {} keys but the grid only {grid_columns} columns",
                rows[wide].len()
            )));
        }

        Ok(Self {
            rows,
            grid_columns,
            grid_rows,
            key_inset: DEFAULT_KEY_INSET,
        })
    }

    /// Use a grid with exactly as many rows as the layout
    #[must_use]
    pub fn fit_grid_to_rows(mut self) -> Self {
        // from_rows guarantees at least one row
        self.grid_rows = u32::try_from(self.rows.len()).unwrap_or(u32::MAX).max(1);
        self
    }

    /// Set the visual margin drawn inside each cell
    #[must_use]
    pub const fn with_key_inset(mut self, key_inset: u32) -> Self {
        self.key_inset = key_inset;
        self
    }

    /// Layout rows
    #[must_use]
    pub fn rows(&self) -> &[Vec<Key>] {
        &self.rows
    }

    /// Grid divisors as (columns, rows)
    #[must_use]
    pub const fn grid(&self) -> (u32, u32) {
        (self.grid_columns, self.grid_rows)
    }

    /// Key at a layout cell
    #[must_use]
    pub fn key_at(&self, row: usize, col: usize) -> Option<Key> {
        self.rows.get(row)?.get(col).copied()
    }

    fn cell_size(&self, geometry: ScreenGeometry) -> (f64, f64) {
        (
            f64::from(geometry.width) / f64::from(self.grid_columns),
            f64::from(geometry.height) / f64::from(self.grid_rows),
        )
    }

    /// Grid cell containing a pixel, ignoring whether a key occupies it
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Bounds checked above the casts
    pub fn cell_at(&self, x: i32, y: i32, geometry: ScreenGeometry) -> Option<(usize, usize)> {
        let (x, y) = (f64::from(x), f64::from(y));
        let (width, height) = (f64::from(geometry.width), f64::from(geometry.height));
        if geometry.width == 0 || geometry.height == 0 || x < 0.0 || y < 0.0 || x > width || y > height {
            return None;
        }

        let (cell_width, cell_height) = self.cell_size(geometry);
        let col = ((x / cell_width) as usize).min(self.grid_columns as usize - 1);
        let row = ((y / cell_height) as usize).min(self.grid_rows as usize - 1);
        Some((row, col))
    }

    /// Key under a pixel, `None` over dead space or off screen
    #[must_use]
    pub fn hit_test(&self, x: i32, y: i32, geometry: ScreenGeometry) -> Option<KeyHit> {
        let (row, col) = self.cell_at(x, y, geometry)?;
        let key = self.key_at(row, col)?;
        Some(KeyHit { row, col, key })
    }

    /// Drawn rectangle of a key, inset from its hit cell
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Grid indices are tiny
    pub fn key_rect(&self, row: usize, col: usize, geometry: ScreenGeometry) -> Option<KeyRect> {
        self.key_at(row, col)?;
        let (cell_width, cell_height) = self.cell_size(geometry);
        let inset = f64::from(self.key_inset);
        Some(KeyRect {
            x: col as f64 * cell_width + inset,
            y: row as f64 * cell_height + inset,
            width: (cell_width - 2.0 * inset).max(0.0),
            height: (cell_height - 2.0 * inset).max(0.0),
        })
    }
}
