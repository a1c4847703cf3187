//! The auto-advancing showcase widget, collapsed into one parameterized engine.

pub mod driver;
pub mod engine;
pub mod pause;
pub mod store;
pub mod transition;

pub use engine::ShowcaseEngine;

/// Timer callbacks a showcase can have outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseEvent {
    Advance,
    Swap,
    FadeInDone,
    Resume,
}
