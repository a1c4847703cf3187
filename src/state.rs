#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TransitionPhase {
    Idle,      // Full opacity, nothing in flight
    FadingOut, // Outgoing slide at zero opacity, swap pending
    Swapped,   // New index committed, fade in about to start
    FadingIn,  // Incoming slide fading back to full opacity
}

impl TransitionPhase {
    pub fn is_transitioning(self) -> bool {
        self != TransitionPhase::Idle
    }
}

/// Snapshot of one showcase widget.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ShowcaseState {
    pub active_index: usize,
    pub is_transitioning: bool,
    pub is_paused: bool,
    pub progress_percent: f32,
}
