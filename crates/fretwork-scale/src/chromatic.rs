//! The 12-tone chromatic pitch-class table.
//!
//! The table is the sole lookup domain for tonic validation and interval
//! stepping. It uses sharp spellings only; flat names (`Db`, `Eb`, ...) are
//! not members and are rejected at the validation boundary rather than
//! normalized to their enharmonic equivalents.

/// The chromatic circle: all 12 pitch classes in fixed order, indices 0-11.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Position of a pitch name in the chromatic table.
///
/// Matching is exact and case-sensitive: `"c"` and `"Db"` both return `None`.
pub fn note_index(name: &str) -> Option<usize> {
    NOTE_NAMES.iter().position(|n| *n == name)
}

/// Pitch name at a chromatic position, wrapping mod 12.
pub fn note_at(index: usize) -> &'static str {
    NOTE_NAMES[index % NOTE_NAMES.len()]
}
