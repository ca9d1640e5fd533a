//! Fretwork core scale generation.
//!
//! This crate computes guitar scale note sequences from a tonic key and a
//! scale type. Generation is a walk around the 12-tone chromatic circle:
//! starting at the tonic's position, each step of a fixed interval pattern
//! emits the current pitch name and advances the position mod 12. The blues
//! scale is derived from the minor pentatonic by inserting the tritone as a
//! passing tone.
//!
//! # Example
//!
//! ```
//! use fretwork_scale::{Scale, ScaleType};
//!
//! let scale = Scale::generate("C", ScaleType::Major).unwrap();
//! assert_eq!(scale.scale_notes, ["C", "D", "E", "F", "G", "A", "B"]);
//!
//! let blues = Scale::generate("A", ScaleType::Blues).unwrap();
//! assert_eq!(blues.blue_note.as_deref(), Some("D#"));
//! ```
//!
//! Generation is pure and deterministic: no shared state, no I/O, and the
//! result is computed fresh per call. Only sharp spellings are recognized
//! (`C#`, never `Db`); flat-key input is rejected, not normalized.
//!
//! # Modules
//!
//! - [`chromatic`]: The fixed 12-entry pitch-class table and index lookups
//! - [`scale`]: Scale types, interval patterns, and the pattern walk
//! - [`error`]: Typed validation errors

pub mod chromatic;
pub mod error;
pub mod scale;

// Re-export commonly used types at the crate root
pub use chromatic::{note_at, note_index, NOTE_NAMES};
pub use error::ScaleError;
pub use scale::{Scale, ScaleType};
