//! Hands-free text entry: a nose-driven pointer over an on-screen keyboard,
//! with an open mouth as the click.
//!
//! The library is the engine between a face tracker and a renderer:
//! - Calibration bounds captured by a four-step wizard and kept in a JSON record
//! - Linear mapping of the raw nose coordinate onto the screen
//! - Hit testing against a fixed keyboard grid
//! - A threshold-and-cooldown selection trigger
//! - A typed buffer with backspace, clear and space keys
//!
//! Landmark detection, drawing and speech live outside the crate behind the
//! [`perception::PerceptionSource`], [`app::FrameSink`] and
//! [`buffer::SpeechSink`] traits.
//!
//! # Examples
//!
//! ## Mapping and hit testing
//!
//! ```
//! use nose_keyboard::{
//!     calibration::CalibrationBounds,
//!     keyboard::{Key, KeyboardLayout},
//!     mapping::{CoordinateMapper, ScreenGeometry},
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let screen = ScreenGeometry::new(1920, 1080);
//! let mapper = CoordinateMapper::new(CalibrationBounds::new(0.3, 0.7, 0.3, 0.7), screen);
//!
//! let pointer = mapper.map(0.5, 0.5)?;
//! assert_eq!((pointer.x, pointer.y), (960, 540));
//!
//! let layout = KeyboardLayout::default();
//! let hit = layout.hit_test(10, 10, screen).expect("top-left key");
//! assert_eq!(hit.key, Key::Char('Q'));
//! # Ok(())
//! # }
//! ```
//!
//! ## Selecting and typing
//!
//! ```
//! use nose_keyboard::{
//!     buffer::TypedBuffer,
//!     keyboard::{Key, KeyHit},
//!     selection::SelectionController,
//! };
//! use std::time::Duration;
//!
//! let mut selection = SelectionController::default();
//! let mut buffer = TypedBuffer::new();
//! let hit = KeyHit { row: 0, col: 0, key: Key::Char('Q') };
//!
//! // Mouth opened wide enough over a key
//! if let Some(event) = selection.evaluate(Some(hit), 25.0, Duration::from_millis(100)) {
//!     let spoken = buffer.apply(&event);
//!     assert_eq!(spoken.text(), "Q");
//! }
//!
//! // Still open a moment later: suppressed by the cooldown
//! assert!(selection.evaluate(Some(hit), 25.0, Duration::from_millis(200)).is_none());
//! assert_eq!(buffer.text(), "Q");
//! ```
//!
//! ## Running a session
//!
//! ```no_run
//! use nose_keyboard::{
//!     app::{InputSession, LogFrameSink},
//!     buffer::LogSpeech,
//!     config::Config,
//!     replay::ReplayTrace,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (mut source, mut controls) = ReplayTrace::load("session.jsonl")?;
//! let mut session = InputSession::new(Config::default())?;
//! session.ensure_calibrated(&mut source, &mut controls, &mut LogFrameSink)?;
//! let text = session.run(&mut source, &mut controls, &mut LogFrameSink, &mut LogSpeech)?;
//! println!("Typed: {text}");
//! # Ok(())
//! # }
//! ```

/// Calibration bounds, persistence and the calibration wizard
pub mod calibration;

/// Raw coordinate to screen pixel mapping
pub mod mapping;

/// Keyboard layout and hit testing
pub mod keyboard;

/// Mouth-open selection trigger
pub mod selection;

/// Typed text buffer and speech boundary
pub mod buffer;

/// Perception input boundary and control signals
pub mod perception;

/// Pointer smoothing filters
pub mod filters;

/// Single-slot latest-frame handoff between threads
pub mod handoff;

/// Recorded perception traces
pub mod replay;

/// Geometry helpers
pub mod utils;

/// Error types and result handling
pub mod error;

/// Input session frame loop
pub mod app;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
