//! Headline text whose trailing phrase cycles through a list.
//!
//! The cycler sleeps until the headline has scrolled into view once and its
//! word-by-word intro has finished. From then on every `interval` it blurs
//! the suffix, and after `blur` swaps in the next one.

use std::time::Duration;

use log::debug;

use crate::constants::*;
use crate::engine::Engine;
use crate::timer::{release_if_fired, TimerHandle, Timers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CyclerEvent {
    IntroDone,
    Cycle,
    Swap,
}

pub struct TextCycler {
    prefix: String,
    suffixes: Vec<String>,
    index: usize,
    blurred: bool,
    in_view: bool,
    intro_complete: bool,
    interval: Duration,
    blur: Duration,
    timers: Timers<CyclerEvent>,
    intro_slot: Option<TimerHandle>,
    cycle_slot: Option<TimerHandle>,
    swap_slot: Option<TimerHandle>,
    mounted: bool,
}

impl TextCycler {
    pub fn new(prefix: impl Into<String>, suffixes: Vec<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffixes,
            index: 0,
            blurred: false,
            in_view: false,
            intro_complete: false,
            interval: CYCLE_INTERVAL,
            blur: CYCLE_BLUR,
            timers: Timers::new(),
            intro_slot: None,
            cycle_slot: None,
            swap_slot: None,
            mounted: true,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(MIN_ADVANCE_DELAY);
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        self.suffixes.get(self.index).map_or("", String::as_str)
    }

    pub fn suffix_index(&self) -> usize {
        self.index
    }

    pub fn is_blurred(&self) -> bool {
        self.blurred
    }

    pub fn is_in_view(&self) -> bool {
        self.in_view
    }

    pub fn is_intro_complete(&self) -> bool {
        self.intro_complete
    }

    /// Time the word-by-word intro takes for the prefix and first suffix.
    pub fn intro_duration(&self) -> Duration {
        let words = self.prefix.split_whitespace().count()
            + self.suffixes.first().map_or(0, |s| s.split_whitespace().count());
        WORD_STEP_DELAY * words as u32 + WORD_STEP_DURATION
    }

    /// Visibility callback. Only the first intersection matters.
    pub fn on_in_view(&mut self, intersecting: bool) {
        if !self.mounted || !intersecting || self.in_view {
            return;
        }
        self.in_view = true;
        let intro = self.intro_duration();
        self.timers
            .replace(&mut self.intro_slot, intro, CyclerEvent::IntroDone);
    }

    /// Mark the intro animation finished ahead of its computed duration.
    pub fn complete_intro(&mut self) {
        if !self.mounted || !self.in_view || self.intro_complete {
            return;
        }
        self.timers.cancel_slot(&mut self.intro_slot);
        self.start_cycling();
    }

    fn start_cycling(&mut self) {
        self.intro_complete = true;
        if self.suffixes.len() <= 1 {
            return;
        }
        debug!("text cycling every {} ms", self.interval.as_millis());
        self.timers
            .replace(&mut self.cycle_slot, self.interval, CyclerEvent::Cycle);
    }

    fn handle(&mut self, fired: TimerHandle, event: CyclerEvent) {
        match event {
            CyclerEvent::IntroDone => {
                if release_if_fired(&mut self.intro_slot, fired) {
                    self.start_cycling();
                }
            }
            CyclerEvent::Cycle => {
                if release_if_fired(&mut self.cycle_slot, fired) {
                    self.blurred = true;
                    self.timers.replace(&mut self.swap_slot, self.blur, CyclerEvent::Swap);
                    self.timers
                        .replace(&mut self.cycle_slot, self.interval, CyclerEvent::Cycle);
                }
            }
            CyclerEvent::Swap => {
                if release_if_fired(&mut self.swap_slot, fired) {
                    self.index = (self.index + 1) % self.suffixes.len();
                    self.blurred = false;
                }
            }
        }
    }
}

impl Engine for TextCycler {
    fn update(&mut self, dt: Duration) {
        if !self.mounted {
            return;
        }
        let until = self.timers.now() + dt;
        while let Some((handle, event)) = self.timers.pop_due(until) {
            self.handle(handle, event);
        }
        self.timers.advance_to(until);
    }

    fn teardown(&mut self) {
        self.timers.clear();
        self.intro_slot = None;
        self.cycle_slot = None;
        self.swap_slot = None;
        self.mounted = false;
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }
}
