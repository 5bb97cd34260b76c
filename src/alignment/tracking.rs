use crate::alignment::segment::{Segment, Word};

/// Spoken/unspoken split of the transcript around the current word. The
/// current word itself belongs to neither list: it is in progress.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub spoken: Vec<&'a Segment>,
    pub unspoken: Vec<&'a Segment>,
}

/// The first word in index order whose half-open interval
/// `[start_time, end_time)` contains `time`, if any. Linear scan; transcript
/// sizes are hundreds to low thousands of words.
pub fn current_word_at(segments: &[Segment], time: f64) -> Option<&Word> {
    segments
        .iter()
        .filter_map(Segment::as_word)
        .find(|word| time >= word.start_time && time < word.end_time)
}

fn next_word_after(segments: &[Segment], index: usize) -> Option<&Word> {
    segments
        .iter()
        .filter_map(Segment::as_word)
        .find(|word| word.index > index)
}

fn prev_word_before(segments: &[Segment], index: usize) -> Option<&Word> {
    segments
        .iter()
        .rev()
        .filter_map(Segment::as_word)
        .find(|word| word.index < index)
}

/// Splits `segments` into spoken and unspoken lists relative to
/// `current_time` and the current word (as located by [`current_word_at`]).
///
/// Words are classified by their own interval. A gap borrows its state from
/// its neighbors: spoken once the next word has started, otherwise resolved
/// against the nearest preceding word. The branch order below is load-bearing
/// for transcripts whose word times are not strictly ordered around the
/// current word; do not reorder it.
pub fn partition_at<'a>(
    segments: &'a [Segment],
    current_time: f64,
    current: Option<&Word>,
) -> Partition<'a> {
    let mut partition = Partition::default();
    let mut found_current = false;

    for segment in segments {
        match segment {
            Segment::Word(word) => {
                if current.is_some_and(|c| c.index == word.index) {
                    found_current = true;
                    continue;
                }
                if !found_current && current_time >= word.end_time {
                    partition.spoken.push(segment);
                } else if found_current || current_time < word.start_time {
                    partition.unspoken.push(segment);
                }
            }
            Segment::Gap(gap) => {
                if found_current {
                    partition.unspoken.push(segment);
                    continue;
                }
                let next_word = next_word_after(segments, gap.index);
                if next_word.is_some_and(|word| current_time >= word.start_time) {
                    partition.spoken.push(segment);
                } else if let Some(current) = current {
                    match prev_word_before(segments, gap.index) {
                        Some(prev) if prev.index == current.index => {
                            partition.unspoken.push(segment);
                        }
                        Some(prev) if current_time >= prev.end_time => {
                            partition.spoken.push(segment);
                        }
                        _ => partition.unspoken.push(segment),
                    }
                } else {
                    match prev_word_before(segments, gap.index) {
                        Some(prev) if current_time >= prev.end_time => {
                            partition.spoken.push(segment);
                        }
                        _ => partition.unspoken.push(segment),
                    }
                }
            }
        }
    }

    partition
}
