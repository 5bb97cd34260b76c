use crate::alignment::CharacterAlignment;
use serde::{Deserialize, Serialize};

/// A timed word of transcript text. The interval is half-open:
/// the word is sounding while `start_time <= t < end_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
    pub index: usize,
}

/// A single whitespace character between words. Carries no timing of its
/// own; classification borrows it from neighboring words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    pub text: String,
    pub index: usize,
}

/// The atomic unit of transcript text. `index` is a dense zero-based
/// ordinal shared across both variants in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    Word(Word),
    Gap(Gap),
}

impl Segment {
    pub fn index(&self) -> usize {
        match self {
            Segment::Word(word) => word.index,
            Segment::Gap(gap) => gap.index,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Segment::Word(word) => &word.text,
            Segment::Gap(gap) => &gap.text,
        }
    }

    pub fn as_word(&self) -> Option<&Word> {
        match self {
            Segment::Word(word) => Some(word),
            Segment::Gap(_) => None,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Segment::Word(_))
    }
}

/// Caller-supplied replacement for [`compose_segments`]. When set on the
/// viewer it alone determines the segment sequence.
pub type SegmentComposer = Box<dyn Fn(&CharacterAlignment) -> Vec<Segment>>;

fn flush_word(
    word: &mut String,
    start: &mut Option<f64>,
    end: &mut Option<f64>,
    index: &mut usize,
    out: &mut Vec<Segment>,
) {
    if word.is_empty() {
        return;
    }
    if let (Some(start_time), Some(end_time)) = (start.take(), end.take()) {
        out.push(Segment::Word(Word {
            text: std::mem::take(word),
            start_time,
            end_time,
            index: *index,
        }));
        *index += 1;
    }
}

/// Groups aligned characters into an ordered sequence of words and gaps.
///
/// Whitespace (space, newline, tab) closes the word being accumulated and is
/// emitted as its own `Gap` segment. A word's start time is its first
/// character's start; its end time is its last character's end.
///
/// With `hide_audio_tags` set, characters from a literal `<` up to and
/// including the next `>` are invisible markup: they contribute to no
/// segment and consume no index. The first `>` always closes the region, so
/// nested tags are not handled.
///
/// A payload with any of its three arrays absent produces an empty sequence.
/// Arrays of unequal length are truncated to the shortest.
pub fn compose_segments(alignment: &CharacterAlignment, hide_audio_tags: bool) -> Vec<Segment> {
    let mut segments = Vec::new();

    let (Some(characters), Some(start_times), Some(end_times)) = (
        alignment.characters.as_ref(),
        alignment.character_start_times_seconds.as_ref(),
        alignment.character_end_times_seconds.as_ref(),
    ) else {
        return segments;
    };

    if characters.len() != start_times.len() || characters.len() != end_times.len() {
        tracing::warn!(
            characters = characters.len(),
            start_times = start_times.len(),
            end_times = end_times.len(),
            "alignment arrays differ in length, truncating to shortest"
        );
    }

    let mut word = String::new();
    let mut word_start: Option<f64> = None;
    let mut word_end: Option<f64> = None;
    let mut index = 0;
    let mut in_tag = false;

    for ((&ch, &start_time), &end_time) in characters
        .iter()
        .zip(start_times.iter())
        .zip(end_times.iter())
    {
        if hide_audio_tags {
            if ch == '<' {
                in_tag = true;
                continue;
            }
            if in_tag {
                if ch == '>' {
                    in_tag = false;
                }
                continue;
            }
        }

        if ch == ' ' || ch == '\n' || ch == '\t' {
            flush_word(
                &mut word,
                &mut word_start,
                &mut word_end,
                &mut index,
                &mut segments,
            );
            segments.push(Segment::Gap(Gap {
                text: ch.to_string(),
                index,
            }));
            index += 1;
        } else {
            if word_start.is_none() {
                word_start = Some(start_time);
            }
            word_end = Some(end_time);
            word.push(ch);
        }
    }

    flush_word(
        &mut word,
        &mut word_start,
        &mut word_end,
        &mut index,
        &mut segments,
    );

    segments
}
