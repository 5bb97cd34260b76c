use serde::{Deserialize, Serialize};
use std::sync::mpsc;

pub mod controller;
pub mod player;

/// Notifications emitted by a playback resource: the media-element event set
/// a transcript view subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    Play,
    Pause,
    TimeUpdate(f64),
    DurationChange(f64),
    Ended,
}

/// Playback snapshot as last reported by the resource's event stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    pub current_time: f64,
    pub duration: f64,
    pub is_playing: bool,
}

/// A media playback resource: play/pause/seek commands in, notifications
/// out.
///
/// `subscribe` hands out one channel receiver per subscriber. Dropping the
/// receiver ends the subscription; the resource prunes disconnected senders
/// on its next emit, so teardown needs no explicit unsubscribe call. A
/// resource that already knows its duration replays `DurationChange` to each
/// new subscriber.
pub trait PlaybackResource {
    fn play(&mut self);
    fn pause(&mut self);
    /// Move the play position to `seconds`. Out-of-range values are the
    /// resource's to clamp.
    fn seek(&mut self, seconds: f64);
    fn subscribe(&mut self) -> mpsc::Receiver<PlaybackEvent>;
}

/// Sends `event` to every subscriber, dropping the ones that went away.
pub(crate) fn emit_to(subscribers: &mut Vec<mpsc::Sender<PlaybackEvent>>, event: PlaybackEvent) {
    subscribers.retain(|sender| sender.send(event).is_ok());
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    /// In-memory resource for tests: commands update local state and emit
    /// the matching notifications synchronously.
    pub struct MockResource {
        subscribers: Vec<mpsc::Sender<PlaybackEvent>>,
        pub position: f64,
        pub playing: bool,
        pub duration: f64,
    }

    impl MockResource {
        pub fn new(duration: f64) -> Self {
            Self {
                subscribers: Vec::new(),
                position: 0.0,
                playing: false,
                duration,
            }
        }

        pub fn emit(&mut self, event: PlaybackEvent) {
            emit_to(&mut self.subscribers, event);
        }

        /// Simulates the resource clock advancing to `seconds`.
        pub fn emit_time(&mut self, seconds: f64) {
            self.position = seconds;
            self.emit(PlaybackEvent::TimeUpdate(seconds));
        }
    }

    impl PlaybackResource for MockResource {
        fn play(&mut self) {
            self.playing = true;
            self.emit(PlaybackEvent::Play);
        }

        fn pause(&mut self) {
            self.playing = false;
            self.emit(PlaybackEvent::Pause);
        }

        fn seek(&mut self, seconds: f64) {
            self.position = seconds.clamp(0.0, self.duration);
            let position = self.position;
            self.emit(PlaybackEvent::TimeUpdate(position));
        }

        fn subscribe(&mut self) -> mpsc::Receiver<PlaybackEvent> {
            let (tx, rx) = mpsc::channel();
            if self.duration > 0.0 {
                let _ = tx.send(PlaybackEvent::DurationChange(self.duration));
            }
            self.subscribers.push(tx);
            rx
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization_round_trip() {
        let events = vec![
            PlaybackEvent::Play,
            PlaybackEvent::Pause,
            PlaybackEvent::TimeUpdate(1.25),
            PlaybackEvent::DurationChange(30.0),
            PlaybackEvent::Ended,
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let parsed: PlaybackEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, event);
        }
    }

    #[test]
    fn test_emit_prunes_dropped_subscribers() {
        let mut subscribers = Vec::new();
        let (tx_live, rx_live) = mpsc::channel();
        let (tx_dead, rx_dead) = mpsc::channel();
        subscribers.push(tx_live);
        subscribers.push(tx_dead);
        drop(rx_dead);

        emit_to(&mut subscribers, PlaybackEvent::Play);
        assert_eq!(subscribers.len(), 1);
        assert_eq!(rx_live.try_recv(), Ok(PlaybackEvent::Play));
    }

    #[test]
    fn test_default_state_is_stopped_at_zero() {
        let state = PlaybackState::default();
        assert_eq!(state.current_time, 0.0);
        assert_eq!(state.duration, 0.0);
        assert!(!state.is_playing);
    }
}
