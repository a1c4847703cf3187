//! Timing configuration for a showcase engine.
//!
//! The landing page shipped the same widget several times with different
//! literals. Each [`Preset`] reproduces one of those variants; a content
//! file may override individual values on top of a preset.

use std::time::Duration;

use clap::ValueEnum;
use serde::Deserialize;

use crate::constants::*;

/// When the active slide advances on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdvancePolicy {
    /// Advance every `interval`, whatever the slide holds.
    FixedInterval { interval: Duration },
    /// Video slides advance after the video's reported duration (or on its
    /// `ended` event). Other slides advance after `still_interval`.
    MediaDuration {
        still_interval: Duration,
        fallback: Duration,
    },
}

impl AdvancePolicy {
    /// Delay for a video reporting `duration_secs`. Missing, too-short or
    /// unrepresentable durations fall back.
    pub fn media_delay(fallback: Duration, duration_secs: f64) -> Duration {
        Duration::try_from_secs_f64(duration_secs)
            .ok()
            .filter(|_| duration_secs > MIN_MEDIA_DURATION_SECS)
            .unwrap_or(fallback)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTiming {
    pub fade_out: Duration,
    pub fade_in: Duration,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            fade_out: FADE_OUT,
            fade_in: FADE_IN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowcaseConfig {
    pub policy: AdvancePolicy,
    /// `None` swaps slides immediately.
    pub transition: Option<TransitionTiming>,
    /// `None` disables the pause gate; manual navigation only restarts the driver.
    pub pause_cooldown: Option<Duration>,
    pub progress_bar: bool,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Preset::Ancillary.config()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Fixed 10 s interval, instant swap, no pause gate.
    Business,
    /// Fixed 3 s interval, fade, 20 s cooldown after manual navigation.
    Ancillary,
    /// As `Ancillary` with a 3 s cooldown.
    AncillaryShort,
    /// Video-length driven, 5 s fallback, fade, no pause gate.
    Flipped,
}

impl Preset {
    pub fn config(self) -> ShowcaseConfig {
        match self {
            Preset::Business => ShowcaseConfig {
                policy: AdvancePolicy::FixedInterval {
                    interval: BUSINESS_INTERVAL,
                },
                transition: None,
                pause_cooldown: None,
                progress_bar: true,
            },
            Preset::Ancillary => ShowcaseConfig {
                policy: AdvancePolicy::FixedInterval {
                    interval: SERVICES_INTERVAL,
                },
                transition: Some(TransitionTiming::default()),
                pause_cooldown: Some(LONG_COOLDOWN),
                progress_bar: true,
            },
            Preset::AncillaryShort => ShowcaseConfig {
                pause_cooldown: Some(SHORT_COOLDOWN),
                ..Preset::Ancillary.config()
            },
            Preset::Flipped => ShowcaseConfig {
                policy: AdvancePolicy::MediaDuration {
                    still_interval: STILL_INTERVAL,
                    fallback: DEFAULT_MEDIA_DURATION,
                },
                transition: Some(TransitionTiming::default()),
                pause_cooldown: None,
                progress_bar: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_delay_uses_reported_duration() {
        let d = AdvancePolicy::media_delay(DEFAULT_MEDIA_DURATION, 4.0);
        assert_eq!(d, Duration::from_millis(4_000));
    }

    #[test]
    fn media_delay_falls_back_for_short_or_invalid() {
        for secs in [f64::NAN, 0.0, 0.5, 1.0, -3.0, f64::INFINITY, 1e30, f64::MAX] {
            assert_eq!(
                AdvancePolicy::media_delay(DEFAULT_MEDIA_DURATION, secs),
                DEFAULT_MEDIA_DURATION,
                "duration {secs}"
            );
        }
    }

    #[test]
    fn short_preset_only_changes_cooldown() {
        let long = Preset::Ancillary.config();
        let short = Preset::AncillaryShort.config();
        assert_eq!(short.pause_cooldown, Some(SHORT_COOLDOWN));
        assert_eq!(short.policy, long.policy);
        assert_eq!(short.transition, long.transition);
    }
}
