use std::time::Duration;

use log::debug;

use crate::showcase::ShowcaseEvent;
use crate::timer::{release_if_fired, TimerHandle, Timers};

/// Suspends auto-advance for a cooldown after manual navigation.
#[derive(Debug)]
pub struct PauseGate {
    cooldown: Option<Duration>,
    paused: bool,
    slot: Option<TimerHandle>,
}

impl PauseGate {
    pub fn new(cooldown: Option<Duration>) -> Self {
        Self {
            cooldown,
            paused: false,
            slot: None,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause, or restart the cooldown if already paused. Returns `false`
    /// when no cooldown is configured.
    pub fn engage(&mut self, timers: &mut Timers<ShowcaseEvent>) -> bool {
        let Some(cooldown) = self.cooldown else {
            return false;
        };
        debug!("auto-advance paused for {} ms", cooldown.as_millis());
        self.paused = true;
        timers.replace(&mut self.slot, cooldown, ShowcaseEvent::Resume);
        true
    }

    /// Returns `true` if this was the live cooldown and the gate reopened.
    pub fn on_resume(&mut self, fired: TimerHandle) -> bool {
        if !release_if_fired(&mut self.slot, fired) {
            return false;
        }
        self.paused = false;
        true
    }

    pub fn cancel(&mut self, timers: &mut Timers<ShowcaseEvent>) {
        timers.cancel_slot(&mut self.slot);
        self.paused = false;
    }
}
