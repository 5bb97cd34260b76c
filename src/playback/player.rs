use crate::error::{ReadalongError, Result};
use crate::playback::{emit_to, PlaybackEvent, PlaybackResource};
use rodio::{Decoder, OutputStream, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

/// Playback resource backed by a rodio output device.
///
/// The host loop calls [`tick`] once per frame; that converts the sink
/// position into `TimeUpdate` notifications, the way a media element fires
/// `timeupdate` while loaded. Decoding and device errors surface only from
/// the constructors; runtime problems are logged and playback degrades.
///
/// [`tick`]: RodioPlayer::tick
pub struct RodioPlayer {
    _stream: OutputStream,
    sink: Sink,
    duration: Option<f64>,
    subscribers: Vec<mpsc::Sender<PlaybackEvent>>,
    started: bool,
    ended: bool,
}

impl RodioPlayer {
    /// Opens the default output device and decodes `path`, paused at
    /// position zero.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ReadalongError::AudioFileNotFound(path.to_path_buf()));
        }

        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| ReadalongError::AudioOutput(e.to_string()))?;
        let sink =
            Sink::try_new(&stream_handle).map_err(|e| ReadalongError::AudioOutput(e.to_string()))?;

        let file = File::open(path)?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| ReadalongError::AudioDecode(e.to_string()))?;
        let duration = source.total_duration().map(|d| d.as_secs_f64());

        sink.pause();
        sink.append(source);

        Ok(Self {
            _stream: stream,
            sink,
            duration,
            subscribers: Vec::new(),
            started: false,
            ended: false,
        })
    }

    /// Like [`from_file`], for formats whose duration the decoder cannot
    /// report. The alignment payload's last end time is a natural source
    /// for `duration`.
    ///
    /// [`from_file`]: RodioPlayer::from_file
    pub fn with_duration(path: &Path, duration: f64) -> Result<Self> {
        let mut player = Self::from_file(path)?;
        player.duration = Some(duration);
        Ok(player)
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn emit(&mut self, event: PlaybackEvent) {
        emit_to(&mut self.subscribers, event);
    }

    /// Advances the notification stream: reports the sink position and fires
    /// `Ended` once when the sink drains. Call once per host frame.
    pub fn tick(&mut self) {
        let position = self.sink.get_pos().as_secs_f64();
        self.emit(PlaybackEvent::TimeUpdate(position));

        if self.started && !self.ended && self.sink.empty() {
            self.ended = true;
            self.emit(PlaybackEvent::Ended);
        }
    }
}

impl PlaybackResource for RodioPlayer {
    fn play(&mut self) {
        self.started = true;
        self.sink.play();
        self.emit(PlaybackEvent::Play);
    }

    fn pause(&mut self) {
        self.sink.pause();
        self.emit(PlaybackEvent::Pause);
    }

    fn seek(&mut self, seconds: f64) {
        let mut target = seconds.max(0.0);
        if let Some(duration) = self.duration {
            target = target.min(duration);
        }
        match self.sink.try_seek(Duration::from_secs_f64(target)) {
            Ok(()) => {
                self.ended = false;
                self.emit(PlaybackEvent::TimeUpdate(target));
            }
            Err(e) => tracing::warn!("Seek to {:.3}s failed: {}", target, e),
        }
    }

    fn subscribe(&mut self) -> mpsc::Receiver<PlaybackEvent> {
        let (tx, rx) = mpsc::channel();
        if let Some(duration) = self.duration {
            let _ = tx.send(PlaybackEvent::DurationChange(duration));
        }
        self.subscribers.push(tx);
        rx
    }
}
