use crate::playback::{PlaybackEvent, PlaybackResource, PlaybackState};
use std::sync::mpsc;

/// Optional callbacks fired as the matching notifications are applied.
#[derive(Default)]
pub struct PlaybackHooks {
    pub on_play: Option<Box<dyn FnMut()>>,
    pub on_pause: Option<Box<dyn FnMut()>>,
    pub on_time_update: Option<Box<dyn FnMut(f64)>>,
    pub on_duration_change: Option<Box<dyn FnMut(f64)>>,
    pub on_ended: Option<Box<dyn FnMut()>>,
}

/// Thin wrapper over a playback resource.
///
/// Commands delegate to the resource; tracked state changes only when the
/// resource's notifications are drained via [`process_events`], so the
/// controller never gets ahead of the resource. The one exception is
/// [`seek_to_time`], which records the target time optimistically.
///
/// [`process_events`]: PlaybackController::process_events
/// [`seek_to_time`]: PlaybackController::seek_to_time
pub struct PlaybackController<R: PlaybackResource> {
    resource: R,
    events: mpsc::Receiver<PlaybackEvent>,
    state: PlaybackState,
    scrubbing: bool,
    was_playing_before_scrub: bool,
    hooks: PlaybackHooks,
}

impl<R: PlaybackResource> PlaybackController<R> {
    pub fn new(resource: R) -> Self {
        Self::with_hooks(resource, PlaybackHooks::default())
    }

    pub fn with_hooks(mut resource: R, hooks: PlaybackHooks) -> Self {
        let events = resource.subscribe();
        Self {
            resource,
            events,
            state: PlaybackState::default(),
            scrubbing: false,
            was_playing_before_scrub: false,
            hooks,
        }
    }

    pub fn set_hooks(&mut self, hooks: PlaybackHooks) {
        self.hooks = hooks;
    }

    /// Drains pending notifications from the resource and applies them to
    /// the tracked state. Call once per host frame.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: PlaybackEvent) {
        tracing::debug!(?event, "playback event");
        match event {
            PlaybackEvent::Play => {
                self.state.is_playing = true;
                if let Some(hook) = self.hooks.on_play.as_mut() {
                    hook();
                }
            }
            PlaybackEvent::Pause => {
                self.state.is_playing = false;
                if let Some(hook) = self.hooks.on_pause.as_mut() {
                    hook();
                }
            }
            PlaybackEvent::TimeUpdate(time) => {
                self.state.current_time = time;
                if let Some(hook) = self.hooks.on_time_update.as_mut() {
                    hook(time);
                }
            }
            PlaybackEvent::DurationChange(duration) => {
                self.state.duration = duration;
                if let Some(hook) = self.hooks.on_duration_change.as_mut() {
                    hook(duration);
                }
            }
            PlaybackEvent::Ended => {
                self.state.is_playing = false;
                if let Some(hook) = self.hooks.on_ended.as_mut() {
                    hook();
                }
            }
        }
    }

    pub fn play(&mut self) {
        self.resource.play();
    }

    pub fn pause(&mut self) {
        self.resource.pause();
    }

    /// Seeks the resource and records the target time immediately, without
    /// waiting for the resource's own notification.
    pub fn seek_to_time(&mut self, seconds: f64) {
        self.resource.seek(seconds);
        self.state.current_time = seconds;
    }

    /// Marks the start of a user scrub gesture: remembers whether playback
    /// was active and pauses for the duration of the drag.
    pub fn start_scrubbing(&mut self) {
        self.scrubbing = true;
        self.was_playing_before_scrub = self.state.is_playing;
        if self.state.is_playing {
            self.resource.pause();
        }
    }

    /// Ends the scrub gesture, resuming playback only if it was active when
    /// the gesture began.
    pub fn end_scrubbing(&mut self) {
        self.scrubbing = false;
        if self.was_playing_before_scrub {
            self.resource.play();
        }
    }

    pub fn current_time(&self) -> f64 {
        self.state.current_time
    }

    pub fn duration(&self) -> f64 {
        self.state.duration
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn is_scrubbing(&self) -> bool {
        self.scrubbing
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn resource_mut(&mut self) -> &mut R {
        &mut self.resource
    }
}
