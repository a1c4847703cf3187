use std::time::Duration;

use crate::media::player::{MediaElement, PlaybackError};

/// Events a video element reports to whoever is listening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Duration in seconds; `NaN` when unknown.
    LoadedMetadata { duration_secs: f64 },
    Play,
    Pause,
    Ended,
}

/// Stand-in for a native video element: a playhead over a known duration.
#[derive(Debug, Clone)]
pub struct SimulatedVideo {
    url: String,
    duration: Option<Duration>,
    position: Duration,
    playing: bool,
    looping: bool,
    autoplay_blocked: bool,
    metadata_sent: bool,
    events: Vec<MediaEvent>,
}

impl SimulatedVideo {
    pub fn new(url: impl Into<String>, duration: Option<Duration>) -> Self {
        Self {
            url: url.into(),
            duration,
            position: Duration::ZERO,
            playing: false,
            looping: false,
            autoplay_blocked: false,
            metadata_sent: false,
            events: Vec::new(),
        }
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Refuse every `play()` until [`unblock`](Self::unblock) is called.
    pub fn autoplay_blocked(mut self, blocked: bool) -> Self {
        self.autoplay_blocked = blocked;
        self
    }

    pub fn unblock(&mut self) {
        self.autoplay_blocked = false;
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    pub fn position(&self) -> Duration {
        self.position
    }

    /// Fraction of the video played, 0.0 when the duration is unknown.
    pub fn played_fraction(&self) -> f32 {
        match self.duration {
            Some(d) if !d.is_zero() => (self.position.as_secs_f32() / d.as_secs_f32()).min(1.0),
            _ => 0.0,
        }
    }

    /// Load from the start, as when an element is given a new source.
    pub fn reload(&mut self) {
        self.position = Duration::ZERO;
        self.metadata_sent = false;
    }

    /// Advance the playhead and drain the events raised since the last tick.
    pub fn tick(&mut self, dt: Duration) -> Vec<MediaEvent> {
        if !self.metadata_sent {
            self.metadata_sent = true;
            let duration_secs = self.duration.map_or(f64::NAN, |d| d.as_secs_f64());
            self.events.push(MediaEvent::LoadedMetadata { duration_secs });
        }
        if self.playing {
            self.position += dt;
            if let Some(duration) = self.duration {
                if self.position >= duration {
                    if self.looping {
                        self.position = Duration::from_nanos(
                            (self.position.as_nanos() % duration.as_nanos().max(1)) as u64,
                        );
                    } else {
                        self.position = duration;
                        self.playing = false;
                        self.events.push(MediaEvent::Pause);
                        self.events.push(MediaEvent::Ended);
                    }
                }
            }
        }
        std::mem::take(&mut self.events)
    }
}

impl MediaElement for SimulatedVideo {
    fn play(&mut self) -> Result<(), PlaybackError> {
        if self.autoplay_blocked {
            return Err(PlaybackError {
                reason: format!("autoplay blocked for {}", self.url),
            });
        }
        if self.playing {
            return Ok(());
        }
        if self.duration.is_some_and(|d| self.position >= d) {
            self.position = Duration::ZERO;
        }
        self.playing = true;
        self.events.push(MediaEvent::Play);
        Ok(())
    }

    fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            self.events.push(MediaEvent::Pause);
        }
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}
