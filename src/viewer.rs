use crate::alignment::segment::{compose_segments, Segment, SegmentComposer, Word};
use crate::alignment::tracking::{current_word_at, partition_at, Partition};
use crate::alignment::CharacterAlignment;
use crate::playback::controller::{PlaybackController, PlaybackHooks};
use crate::playback::{PlaybackResource, PlaybackState};

/// Segment-composition knobs.
pub struct ViewerOptions {
    /// Strip `<...>` audio tags from the transcript. On by default.
    pub hide_audio_tags: bool,
    /// Replaces the default composition algorithm entirely when set.
    pub composer: Option<SegmentComposer>,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            hide_audio_tags: true,
            composer: None,
        }
    }
}

/// Ties an alignment payload to a playback resource and derives the view
/// state: the segment sequence, the word currently sounding, and the
/// spoken/unspoken split around it.
///
/// Segments are recomposed only when the alignment, the tag flag, or the
/// composer changes. The current word and the partition are pure functions
/// of the latest segments and playback time and are recomputed per query —
/// nothing is cached between frames.
pub struct TranscriptViewer<R: PlaybackResource> {
    alignment: CharacterAlignment,
    options: ViewerOptions,
    segments: Vec<Segment>,
    controller: PlaybackController<R>,
}

impl<R: PlaybackResource> TranscriptViewer<R> {
    pub fn new(alignment: CharacterAlignment, resource: R) -> Self {
        Self::with_options(alignment, resource, ViewerOptions::default())
    }

    pub fn with_options(
        alignment: CharacterAlignment,
        resource: R,
        options: ViewerOptions,
    ) -> Self {
        let segments = compose(&alignment, &options);
        Self {
            alignment,
            options,
            segments,
            controller: PlaybackController::new(resource),
        }
    }

    pub fn set_alignment(&mut self, alignment: CharacterAlignment) {
        self.alignment = alignment;
        self.recompose();
    }

    pub fn set_hide_audio_tags(&mut self, hide_audio_tags: bool) {
        if self.options.hide_audio_tags != hide_audio_tags {
            self.options.hide_audio_tags = hide_audio_tags;
            self.recompose();
        }
    }

    pub fn set_composer(&mut self, composer: Option<SegmentComposer>) {
        self.options.composer = composer;
        self.recompose();
    }

    pub fn set_hooks(&mut self, hooks: PlaybackHooks) {
        self.controller.set_hooks(hooks);
    }

    fn recompose(&mut self) {
        self.segments = compose(&self.alignment, &self.options);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The word whose interval contains the current playback time, if any.
    pub fn current_word(&self) -> Option<&Word> {
        current_word_at(&self.segments, self.controller.current_time())
    }

    /// Spoken/unspoken split of the transcript at the current playback time.
    pub fn partition(&self) -> Partition<'_> {
        partition_at(
            &self.segments,
            self.controller.current_time(),
            self.current_word(),
        )
    }

    /// Drains pending playback notifications. Call once per host frame,
    /// before reading the derived state.
    pub fn process_events(&mut self) {
        self.controller.process_events();
    }

    pub fn play(&mut self) {
        self.controller.play();
    }

    pub fn pause(&mut self) {
        self.controller.pause();
    }

    pub fn seek_to_time(&mut self, seconds: f64) {
        self.controller.seek_to_time(seconds);
    }

    pub fn start_scrubbing(&mut self) {
        self.controller.start_scrubbing();
    }

    pub fn end_scrubbing(&mut self) {
        self.controller.end_scrubbing();
    }

    pub fn current_time(&self) -> f64 {
        self.controller.current_time()
    }

    pub fn duration(&self) -> f64 {
        self.controller.duration()
    }

    pub fn is_playing(&self) -> bool {
        self.controller.is_playing()
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.controller.state()
    }

    pub fn controller_mut(&mut self) -> &mut PlaybackController<R> {
        &mut self.controller
    }
}

fn compose(alignment: &CharacterAlignment, options: &ViewerOptions) -> Vec<Segment> {
    match &options.composer {
        Some(composer) => composer(alignment),
        None => compose_segments(alignment, options.hide_audio_tags),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::segment::Gap;
    use crate::playback::mock::MockResource;

    fn ab_cd() -> CharacterAlignment {
        CharacterAlignment::new(
            vec!['a', 'b', ' ', 'c', 'd'],
            vec![0.0, 0.1, 0.2, 0.3, 0.4],
            vec![0.1, 0.2, 0.3, 0.4, 0.5],
        )
    }

    #[test]
    fn test_view_state_mid_playback() {
        let mut viewer = TranscriptViewer::new(ab_cd(), MockResource::new(0.5));
        viewer.controller_mut().resource_mut().emit_time(0.35);
        viewer.process_events();

        assert_eq!(viewer.current_word().unwrap().text, "cd");
        let partition = viewer.partition();
        let spoken: Vec<&str> = partition.spoken.iter().map(|s| s.text()).collect();
        assert_eq!(spoken, vec!["ab", " "]);
        assert!(partition.unspoken.is_empty());
    }

    #[test]
    fn test_hide_audio_tags_recomposes() {
        let alignment = CharacterAlignment::new(
            "<sighs> no".chars().collect(),
            (0..10).map(|i| i as f64 * 0.1).collect(),
            (0..10).map(|i| (i + 1) as f64 * 0.1).collect(),
        );
        let mut viewer = TranscriptViewer::new(alignment, MockResource::new(1.0));
        // Tags hidden by default.
        let texts: Vec<&str> = viewer.segments().iter().map(|s| s.text()).collect();
        assert_eq!(texts, vec![" ", "no"]);

        viewer.set_hide_audio_tags(false);
        let texts: Vec<&str> = viewer.segments().iter().map(|s| s.text()).collect();
        assert_eq!(texts, vec!["<sighs>", " ", "no"]);
    }

    #[test]
    fn test_set_alignment_recomposes() {
        let mut viewer = TranscriptViewer::new(ab_cd(), MockResource::new(0.5));
        assert_eq!(viewer.segments().len(), 3);

        viewer.set_alignment(CharacterAlignment::default());
        assert!(viewer.segments().is_empty());
    }

    #[test]
    fn test_custom_composer_replaces_default() {
        let composer: SegmentComposer = Box::new(|alignment| {
            vec![Segment::Word(Word {
                text: alignment.text(),
                start_time: 0.0,
                end_time: alignment.duration_seconds(),
                index: 0,
            })]
        });
        let viewer = TranscriptViewer::with_options(
            ab_cd(),
            MockResource::new(0.5),
            ViewerOptions {
                hide_audio_tags: true,
                composer: Some(composer),
            },
        );

        assert_eq!(viewer.segments().len(), 1);
        assert_eq!(viewer.segments()[0].text(), "ab cd");
    }

    #[test]
    fn test_clearing_composer_restores_default() {
        let composer: SegmentComposer = Box::new(|_| {
            vec![Segment::Gap(Gap {
                text: " ".to_string(),
                index: 0,
            })]
        });
        let mut viewer = TranscriptViewer::with_options(
            ab_cd(),
            MockResource::new(0.5),
            ViewerOptions {
                hide_audio_tags: true,
                composer: Some(composer),
            },
        );
        assert_eq!(viewer.segments().len(), 1);

        viewer.set_composer(None);
        assert_eq!(viewer.segments().len(), 3);
    }

    #[test]
    fn test_scrub_gesture_through_viewer() {
        let mut viewer = TranscriptViewer::new(ab_cd(), MockResource::new(0.5));
        viewer.play();
        viewer.process_events();
        assert!(viewer.is_playing());

        viewer.start_scrubbing();
        viewer.seek_to_time(0.4);
        viewer.end_scrubbing();
        viewer.process_events();

        assert!(viewer.is_playing());
        assert_eq!(viewer.current_word().unwrap().text, "cd");
    }

    #[test]
    fn test_partition_tracks_playback_progress() {
        let mut viewer = TranscriptViewer::new(ab_cd(), MockResource::new(0.5));
        // At time zero the first word is already current.
        assert_eq!(viewer.current_word().unwrap().text, "ab");
        assert_eq!(viewer.partition().unspoken.len(), 2);

        for step in 0..12 {
            viewer
                .controller_mut()
                .resource_mut()
                .emit_time(step as f64 * 0.05);
            viewer.process_events();
            let partition = viewer.partition();
            let current = usize::from(viewer.current_word().is_some());
            assert_eq!(
                partition.spoken.len() + partition.unspoken.len() + current,
                viewer.segments().len()
            );
        }

        let partition = viewer.partition();
        assert_eq!(partition.spoken.len(), 3);
        assert!(partition.unspoken.is_empty());
    }
}
