use std::time::Duration;

use log::debug;

use crate::config::TransitionTiming;
use crate::showcase::ShowcaseEvent;
use crate::state::TransitionPhase;
use crate::timer::{release_if_fired, TimerHandle, Timers};

/// Outcome of asking the controller to move to a new slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Begin {
    /// No fade configured; commit the index right away.
    Immediate(usize),
    /// Fade out started; the index is committed on `Swap`.
    Started,
}

/// Sequences `Idle -> FadingOut -> Swapped -> FadingIn -> Idle`.
#[derive(Debug)]
pub struct TransitionController {
    timing: Option<TransitionTiming>,
    phase: TransitionPhase,
    target: Option<usize>,
    slot: Option<TimerHandle>,
    fade_in_started: Duration,
}

impl TransitionController {
    pub fn new(timing: Option<TransitionTiming>) -> Self {
        Self {
            timing,
            phase: TransitionPhase::Idle,
            target: None,
            slot: None,
            fade_in_started: Duration::ZERO,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Index waiting to be committed while fading out.
    pub fn pending_target(&self) -> Option<usize> {
        self.target
    }

    /// Start (or restart) a fade toward `target`, cancelling whatever is in flight.
    pub fn begin(&mut self, timers: &mut Timers<ShowcaseEvent>, target: usize) -> Begin {
        let Some(timing) = self.timing else {
            return Begin::Immediate(target);
        };
        if self.phase.is_transitioning() {
            debug!("transition restarted toward slide {target}");
        }
        self.phase = TransitionPhase::FadingOut;
        self.target = Some(target);
        timers.replace(&mut self.slot, timing.fade_out, ShowcaseEvent::Swap);
        Begin::Started
    }

    /// The fade-out delay elapsed. Returns the index to commit.
    pub fn on_swap(&mut self, fired: TimerHandle) -> Option<usize> {
        if !release_if_fired(&mut self.slot, fired) || self.phase != TransitionPhase::FadingOut {
            return None;
        }
        self.phase = TransitionPhase::Swapped;
        self.target.take()
    }

    pub fn fade_in(&mut self, timers: &mut Timers<ShowcaseEvent>) {
        let Some(timing) = self.timing else {
            self.phase = TransitionPhase::Idle;
            return;
        };
        self.phase = TransitionPhase::FadingIn;
        self.fade_in_started = timers.now();
        timers.replace(&mut self.slot, timing.fade_in, ShowcaseEvent::FadeInDone);
    }

    pub fn on_fade_in_done(&mut self, fired: TimerHandle) {
        if release_if_fired(&mut self.slot, fired) && self.phase == TransitionPhase::FadingIn {
            self.phase = TransitionPhase::Idle;
        }
    }

    pub fn cancel(&mut self, timers: &mut Timers<ShowcaseEvent>) {
        timers.cancel_slot(&mut self.slot);
        self.phase = TransitionPhase::Idle;
        self.target = None;
    }

    /// Content opacity for rendering: hidden until the swap, then eased back in.
    pub fn opacity(&self, now: Duration) -> f32 {
        match self.phase {
            TransitionPhase::Idle => 1.0,
            TransitionPhase::FadingOut | TransitionPhase::Swapped => 0.0,
            TransitionPhase::FadingIn => match self.timing {
                Some(timing) if !timing.fade_in.is_zero() => {
                    let elapsed = now.saturating_sub(self.fade_in_started);
                    (elapsed.as_secs_f32() / timing.fade_in.as_secs_f32()).clamp(0.0, 1.0)
                }
                _ => 1.0,
            },
        }
    }
}
