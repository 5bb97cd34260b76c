//! Audio-synchronized transcript viewing: turns a character-level alignment
//! payload into word/gap segments and tracks which of them have been spoken
//! as playback advances.
//!
//! The host application owns the event loop; it drains playback
//! notifications each frame via [`TranscriptViewer::process_events`] and
//! reads the derived state (current word, spoken/unspoken partition) to
//! render highlighted text.

pub mod alignment;
pub mod error;
pub mod playback;
pub mod viewer;

pub use alignment::segment::{compose_segments, Gap, Segment, SegmentComposer, Word};
pub use alignment::tracking::{current_word_at, partition_at, Partition};
pub use alignment::CharacterAlignment;
pub use error::{ReadalongError, Result};
pub use playback::controller::{PlaybackController, PlaybackHooks};
pub use playback::player::RodioPlayer;
pub use playback::{PlaybackEvent, PlaybackResource, PlaybackState};
pub use viewer::{TranscriptViewer, ViewerOptions};
