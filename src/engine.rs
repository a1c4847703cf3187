use std::time::Duration;

/// A widget driven by the frame loop.
pub trait Engine {
    /// Advance the widget's clock by `dt` and fire whatever became due.
    fn update(&mut self, dt: Duration);

    /// Cancel every outstanding timer. Nothing mutates afterwards.
    fn teardown(&mut self);

    fn is_mounted(&self) -> bool;
}
