use std::time::Duration;

use log::debug;

use crate::config::{AdvancePolicy, ShowcaseConfig};
use crate::engine::Engine;
use crate::error::ShowcaseError;
use crate::showcase::driver::ProgressDriver;
use crate::showcase::pause::PauseGate;
use crate::showcase::store::SlideStore;
use crate::showcase::transition::{Begin, TransitionController};
use crate::showcase::ShowcaseEvent;
use crate::slide::Slide;
use crate::state::{ShowcaseState, TransitionPhase};
use crate::timer::{TimerHandle, Timers};

/// One showcase widget instance: slide store, progress driver, transition
/// controller and pause gate sharing a private timer queue.
pub struct ShowcaseEngine {
    config: ShowcaseConfig,
    store: SlideStore,
    driver: ProgressDriver,
    transition: TransitionController,
    pause: PauseGate,
    timers: Timers<ShowcaseEvent>,
    mounted: bool,
}

impl ShowcaseEngine {
    pub fn new(slides: Vec<Slide>, config: ShowcaseConfig) -> Result<Self, ShowcaseError> {
        let store = SlideStore::new(slides)?;
        let mut engine = Self {
            config,
            store,
            driver: ProgressDriver::new(config.policy),
            transition: TransitionController::new(config.transition),
            pause: PauseGate::new(config.pause_cooldown),
            timers: Timers::new(),
            mounted: true,
        };
        engine.driver.arm(&mut engine.timers, engine.store.active_slide());
        Ok(engine)
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    pub fn slides(&self) -> &[Slide] {
        self.store.slides()
    }

    pub fn active_index(&self) -> usize {
        self.store.active_index()
    }

    pub fn active_slide(&self) -> &Slide {
        self.store.active_slide()
    }

    pub fn phase(&self) -> TransitionPhase {
        self.transition.phase()
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn progress_percent(&self) -> f32 {
        self.driver.progress_percent(self.timers.now())
    }

    /// Delay the driver is currently counting down, if armed.
    pub fn advance_interval(&self) -> Option<Duration> {
        self.driver.interval()
    }

    pub fn opacity(&self) -> f32 {
        self.transition.opacity(self.timers.now())
    }

    /// Number of timers this instance has outstanding.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn state(&self) -> ShowcaseState {
        ShowcaseState {
            active_index: self.store.active_index(),
            is_transitioning: self.transition.phase().is_transitioning(),
            is_paused: self.pause.is_paused(),
            progress_percent: self.progress_percent(),
        }
    }

    /// Activate `index` without engaging the pause gate.
    pub fn set_active(&mut self, index: usize) -> Result<bool, ShowcaseError> {
        self.store.check(index)?;
        Ok(self.activate(index, false))
    }

    /// User picked a slide (click on its entry).
    pub fn navigate_to(&mut self, index: usize) -> Result<bool, ShowcaseError> {
        self.store.check(index)?;
        Ok(self.activate(index, true))
    }

    pub fn next(&mut self) -> bool {
        let index = self.store.next_index();
        self.activate(index, true)
    }

    pub fn previous(&mut self) -> bool {
        let index = self.store.previous_index();
        self.activate(index, true)
    }

    /// The active video reported its duration.
    pub fn on_media_loaded_metadata(&mut self, duration_secs: f64) {
        if !self.accepts_media_events() {
            return;
        }
        let reschedule = !self.pause.is_paused();
        self.driver
            .on_loaded_metadata(&mut self.timers, duration_secs, reschedule);
    }

    /// The active video played to its end.
    pub fn on_media_ended(&mut self) {
        if !self.accepts_media_events() || self.pause.is_paused() {
            return;
        }
        debug!("video ended on slide {}", self.store.active_index());
        let next = self.store.next_index();
        self.activate(next, false);
    }

    fn accepts_media_events(&self) -> bool {
        self.mounted
            && matches!(self.config.policy, AdvancePolicy::MediaDuration { .. })
            && self.store.active_slide().is_video()
            && self.transition.phase() != TransitionPhase::FadingOut
    }

    fn activate(&mut self, index: usize, manual: bool) -> bool {
        if !self.mounted {
            return false;
        }
        let current = self
            .transition
            .pending_target()
            .unwrap_or(self.store.active_index());
        if index == current {
            return false;
        }

        self.driver.disarm(&mut self.timers);
        if manual {
            self.pause.engage(&mut self.timers);
        }
        match self.transition.begin(&mut self.timers, index) {
            Begin::Immediate(target) => self.commit(target),
            Begin::Started => {}
        }
        true
    }

    fn commit(&mut self, index: usize) {
        if self.store.commit(index) {
            debug!("slide {} active", index);
            self.driver.reset_media();
        }
        if self.pause.is_paused() {
            self.driver.disarm(&mut self.timers);
        } else {
            self.driver.arm(&mut self.timers, self.store.active_slide());
        }
    }

    fn handle(&mut self, fired: TimerHandle, event: ShowcaseEvent) {
        match event {
            ShowcaseEvent::Advance => {
                if self.driver.fired(fired) && !self.pause.is_paused() {
                    let next = self.store.next_index();
                    self.activate(next, false);
                }
            }
            ShowcaseEvent::Swap => {
                if let Some(target) = self.transition.on_swap(fired) {
                    self.commit(target);
                    self.transition.fade_in(&mut self.timers);
                }
            }
            ShowcaseEvent::FadeInDone => self.transition.on_fade_in_done(fired),
            ShowcaseEvent::Resume => {
                if self.pause.on_resume(fired) {
                    debug!("auto-advance resumed");
                    // A pending swap arms the driver itself.
                    if self.transition.phase() != TransitionPhase::FadingOut {
                        self.driver.arm(&mut self.timers, self.store.active_slide());
                    }
                }
            }
        }
    }
}

impl Engine for ShowcaseEngine {
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
        self.driver.disarm(&mut self.timers);
        self.transition.cancel(&mut self.timers);
        self.pause.cancel(&mut self.timers);
        self.timers.clear();
        self.mounted = false;
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }
}

impl Drop for ShowcaseEngine {
    fn drop(&mut self) {
        if self.mounted {
            self.teardown();
        }
    }
}
