//! Scale types, interval patterns, and the pattern walk.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chromatic::{note_at, note_index, NOTE_NAMES};
use crate::error::ScaleError;

/// Major scale step pattern (whole/half steps in semitones).
const MAJOR_PATTERN: [usize; 7] = [2, 2, 1, 2, 2, 2, 1];

/// Natural minor scale step pattern.
const MINOR_PATTERN: [usize; 7] = [2, 1, 2, 2, 1, 2, 2];

/// Major pentatonic step pattern.
const PENTATONIC_MAJOR_PATTERN: [usize; 5] = [2, 2, 3, 2, 3];

/// Minor pentatonic step pattern.
const PENTATONIC_MINOR_PATTERN: [usize; 5] = [3, 2, 2, 3, 2];

/// Semitones from the tonic to the blue note (the tritone).
const BLUE_NOTE_OFFSET: usize = 6;

/// Position where the blue note is inserted into the minor pentatonic.
const BLUE_NOTE_SLOT: usize = 3;

/// Scale types recognized by the generator.
///
/// A closed enumeration: string matching happens once, at the validation
/// boundary ([`FromStr`]); all dispatch past that point is on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    /// Major (ionian) scale.
    Major,
    /// Natural minor (aeolian) scale.
    Minor,
    /// Major pentatonic scale.
    PentatonicMajor,
    /// Minor pentatonic scale.
    PentatonicMinor,
    /// Minor pentatonic plus the tritone passing tone.
    Blues,
}

impl ScaleType {
    /// Returns the scale type as its wire/CLI identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::Minor => "minor",
            ScaleType::PentatonicMajor => "pentatonic_major",
            ScaleType::PentatonicMinor => "pentatonic_minor",
            ScaleType::Blues => "blues",
        }
    }

    /// Returns all scale types.
    pub fn all() -> &'static [ScaleType] {
        &[
            ScaleType::Major,
            ScaleType::Minor,
            ScaleType::PentatonicMajor,
            ScaleType::PentatonicMinor,
            ScaleType::Blues,
        ]
    }

    /// Comma-separated list of the recognized identifiers, for error messages.
    pub fn valid_names() -> String {
        ScaleType::all()
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleType {
    type Err = ScaleError;

    /// Parses a scale-type identifier. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(ScaleType::Major),
            "minor" => Ok(ScaleType::Minor),
            "pentatonic_major" => Ok(ScaleType::PentatonicMajor),
            "pentatonic_minor" => Ok(ScaleType::PentatonicMinor),
            "blues" => Ok(ScaleType::Blues),
            _ => Err(ScaleError::UnknownScaleType {
                name: s.to_string(),
            }),
        }
    }
}

/// A generated scale: the resolved tonic and its ordered note sequence.
///
/// Immutable once produced; computed fresh per request and never cached.
/// Serializes to the wire shape `{"tonic", "scaleNotes", "blueNote"?}` with
/// `blueNote` present only for the blues scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    /// The validated tonic the walk started from.
    pub tonic: String,
    /// Ordered pitch names, one per pattern step (six for blues).
    #[serde(rename = "scaleNotes")]
    pub scale_notes: Vec<String>,
    /// Tritone passing tone, present only for the blues scale.
    #[serde(rename = "blueNote", default, skip_serializing_if = "Option::is_none")]
    pub blue_note: Option<String>,
}

impl Scale {
    /// Generates a scale for a validated tonic name and scale type.
    ///
    /// The tonic must be an exact, case-sensitive member of the chromatic
    /// table; flat spellings are rejected with [`ScaleError::InvalidKey`],
    /// never normalized.
    pub fn generate(key: &str, scale_type: ScaleType) -> Result<Scale, ScaleError> {
        let tonic_index = note_index(key).ok_or_else(|| ScaleError::InvalidKey {
            key: key.to_string(),
        })?;

        let (scale_notes, blue_note) = match scale_type {
            ScaleType::Major => (pattern_walk(tonic_index, &MAJOR_PATTERN), None),
            ScaleType::Minor => (pattern_walk(tonic_index, &MINOR_PATTERN), None),
            ScaleType::PentatonicMajor => {
                (pattern_walk(tonic_index, &PENTATONIC_MAJOR_PATTERN), None)
            }
            ScaleType::PentatonicMinor => {
                (pattern_walk(tonic_index, &PENTATONIC_MINOR_PATTERN), None)
            }
            ScaleType::Blues => {
                let (notes, blue) = blues_walk(tonic_index);
                (notes, Some(blue))
            }
        };

        Ok(Scale {
            tonic: key.to_string(),
            scale_notes,
            blue_note,
        })
    }

    /// Generates a scale from raw request strings.
    ///
    /// Validates the tonic before the scale-type identifier, so a request
    /// that is wrong on both counts reports [`ScaleError::InvalidKey`].
    pub fn from_request(key: &str, scale_type: &str) -> Result<Scale, ScaleError> {
        if note_index(key).is_none() {
            return Err(ScaleError::InvalidKey {
                key: key.to_string(),
            });
        }
        Scale::generate(key, scale_type.parse()?)
    }
}

/// Walk a step pattern around the chromatic circle from a tonic position.
///
/// Emits one pitch per step: the pitch at the current position is appended
/// before the step is taken, so the terminal position (back at the tonic for
/// the 12-semitone patterns) is never emitted.
fn pattern_walk(tonic_index: usize, pattern: &[usize]) -> Vec<String> {
    let mut idx = tonic_index;
    let mut notes = Vec::with_capacity(pattern.len());
    for &step in pattern {
        notes.push(note_at(idx).to_string());
        idx = (idx + step) % NOTE_NAMES.len();
    }
    notes
}

/// Minor pentatonic with the tritone inserted as a passing tone.
///
/// Returns the 6-note sequence and the blue note itself, which the result
/// also carries as a separate field.
fn blues_walk(tonic_index: usize) -> (Vec<String>, String) {
    let mut notes = pattern_walk(tonic_index, &PENTATONIC_MINOR_PATTERN);
    let blue = note_at(tonic_index + BLUE_NOTE_OFFSET).to_string();
    notes.insert(BLUE_NOTE_SLOT, blue.clone());
    (notes, blue)
}
