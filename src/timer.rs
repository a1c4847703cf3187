//! Cancellable timers on a caller-driven clock.
//!
//! Every time-driven widget owns one [`Timers`] queue. Nothing fires on its
//! own: the owner advances the clock from its frame loop and drains due
//! events with [`Timers::pop_due`]. A handle that was cancelled (or replaced
//! through [`Timers::replace`]) is gone from the queue and can never fire.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle to one scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    deadline: Duration,
    seq: u64,
}

impl TimerHandle {
    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

#[derive(Debug)]
pub struct Timers<E> {
    now: Duration,
    next_seq: u64,
    // Ordered by deadline, then by scheduling order.
    pending: BTreeMap<(Duration, u64), E>,
}

impl<E> Default for Timers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Timers<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            pending: BTreeMap::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, event: E) -> TimerHandle {
        let handle = TimerHandle {
            deadline: self.now.saturating_add(delay),
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending.insert((handle.deadline, handle.seq), event);
        handle
    }

    /// Returns `false` if the handle already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.pending.remove(&(handle.deadline, handle.seq)).is_some()
    }

    /// Cancel whatever `slot` holds, then schedule `event` into it.
    pub fn replace(&mut self, slot: &mut Option<TimerHandle>, delay: Duration, event: E) {
        self.cancel_slot(slot);
        *slot = Some(self.schedule(delay, event));
    }

    pub fn cancel_slot(&mut self, slot: &mut Option<TimerHandle>) {
        if let Some(handle) = slot.take() {
            self.cancel(handle);
        }
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.contains_key(&(handle.deadline, handle.seq))
    }

    /// Remove and return the earliest timer due at or before `until`,
    /// moving the clock to its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, E)> {
        let (&(deadline, seq), _) = self.pending.first_key_value()?;
        if deadline > until {
            return None;
        }
        let event = self.pending.remove(&(deadline, seq))?;
        self.now = self.now.max(deadline);
        Some((TimerHandle { deadline, seq }, event))
    }

    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Drop `slot`'s handle if it is the one that just fired.
pub fn release_if_fired(slot: &mut Option<TimerHandle>, fired: TimerHandle) -> bool {
    if *slot == Some(fired) {
        *slot = None;
        true
    } else {
        false
    }
}
