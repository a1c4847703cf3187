use std::time::Duration;

use log::debug;

use crate::config::AdvancePolicy;
use crate::constants::MIN_ADVANCE_DELAY;
use crate::showcase::ShowcaseEvent;
use crate::slide::Slide;
use crate::timer::{release_if_fired, TimerHandle, Timers};

/// Decides when the active slide advances on its own.
///
/// Holds at most one pending `Advance` timer. Every (re)arm cancels the
/// previous one first, so a slide change can never leave a stale advance
/// behind.
#[derive(Debug)]
pub struct ProgressDriver {
    policy: AdvancePolicy,
    slot: Option<TimerHandle>,
    started_at: Duration,
    interval: Option<Duration>,
    media_duration: Option<f64>,
}

impl ProgressDriver {
    pub fn new(policy: AdvancePolicy) -> Self {
        Self {
            policy,
            slot: None,
            started_at: Duration::ZERO,
            interval: None,
            media_duration: None,
        }
    }

    pub fn policy(&self) -> AdvancePolicy {
        self.policy
    }

    pub fn is_armed(&self) -> bool {
        self.slot.is_some()
    }

    /// Delay currently counting down, if any.
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Start counting for `slide` from zero. A video under the media policy
    /// with no known duration waits for its metadata instead.
    pub fn arm(&mut self, timers: &mut Timers<ShowcaseEvent>, slide: &Slide) {
        self.disarm(timers);
        let delay = match self.policy {
            AdvancePolicy::FixedInterval { interval } => Some(interval),
            AdvancePolicy::MediaDuration {
                still_interval,
                fallback,
            } => {
                if slide.is_video() {
                    self.media_duration
                        .map(|secs| AdvancePolicy::media_delay(fallback, secs))
                } else {
                    Some(still_interval)
                }
            }
        };
        if let Some(delay) = delay {
            self.schedule(timers, delay);
        }
    }

    pub fn disarm(&mut self, timers: &mut Timers<ShowcaseEvent>) {
        timers.cancel_slot(&mut self.slot);
        self.interval = None;
    }

    /// Forget the previous slide's media duration.
    pub fn reset_media(&mut self) {
        self.media_duration = None;
    }

    pub fn media_duration(&self) -> Option<f64> {
        self.media_duration
    }

    /// Record the active video's reported duration. When `reschedule` is set
    /// the advance is re-planned to that duration, counted from now.
    pub fn on_loaded_metadata(
        &mut self,
        timers: &mut Timers<ShowcaseEvent>,
        duration_secs: f64,
        reschedule: bool,
    ) {
        let AdvancePolicy::MediaDuration { fallback, .. } = self.policy else {
            return;
        };
        self.media_duration = Some(duration_secs);
        if reschedule {
            timers.cancel_slot(&mut self.slot);
            self.schedule(timers, AdvancePolicy::media_delay(fallback, duration_secs));
        }
    }

    /// Returns `true` if `fired` was this driver's advance timer.
    pub fn fired(&mut self, fired: TimerHandle) -> bool {
        release_if_fired(&mut self.slot, fired)
    }

    /// Progress through the current interval, 0 to 100.
    pub fn progress_percent(&self, now: Duration) -> f32 {
        let Some(interval) = self.interval else {
            return 0.0;
        };
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f32() / interval.as_secs_f32() * 100.0).clamp(0.0, 100.0)
    }

    fn schedule(&mut self, timers: &mut Timers<ShowcaseEvent>, delay: Duration) {
        let delay = delay.max(MIN_ADVANCE_DELAY);
        debug!("advance scheduled in {} ms", delay.as_millis());
        self.started_at = timers.now();
        self.interval = Some(delay);
        timers.replace(&mut self.slot, delay, ShowcaseEvent::Advance);
    }
}
