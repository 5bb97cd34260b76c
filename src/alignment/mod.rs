use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod segment;
pub mod tracking;

/// Character-level timing payload from a speech-synthesis or forced-alignment
/// service.
///
/// The three arrays are parallel: `characters[i]` sounds from
/// `character_start_times_seconds[i]` to `character_end_times_seconds[i]`,
/// with times non-decreasing across the sequence. Field names match the
/// service's JSON wire format. Any array may be absent, in which case the
/// payload segments to an empty transcript.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterAlignment {
    pub characters: Option<Vec<char>>,
    pub character_start_times_seconds: Option<Vec<f64>>,
    pub character_end_times_seconds: Option<Vec<f64>>,
}

impl CharacterAlignment {
    pub fn new(characters: Vec<char>, start_times: Vec<f64>, end_times: Vec<f64>) -> Self {
        Self {
            characters: Some(characters),
            character_start_times_seconds: Some(start_times),
            character_end_times_seconds: Some(end_times),
        }
    }

    /// True if any of the parallel arrays is absent or there are no
    /// characters.
    pub fn is_empty(&self) -> bool {
        match (
            &self.characters,
            &self.character_start_times_seconds,
            &self.character_end_times_seconds,
        ) {
            (Some(chars), Some(_), Some(_)) => chars.is_empty(),
            _ => true,
        }
    }

    /// The raw character sequence as text, tags and all.
    pub fn text(&self) -> String {
        self.characters
            .as_ref()
            .map(|chars| chars.iter().collect())
            .unwrap_or_default()
    }

    /// End time of the last character, i.e. the audio length the alignment
    /// covers. Useful as a duration override for sources that don't carry
    /// one.
    pub fn duration_seconds(&self) -> f64 {
        self.character_end_times_seconds
            .as_ref()
            .and_then(|ends| ends.last().copied())
            .unwrap_or(0.0)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
