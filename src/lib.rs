//! Auto-advancing slide showcase: a single parameterized engine for the
//! carousel widgets of a hotel landing page, plus the viewport-gated video
//! player and cycling headline that sit next to it.

pub mod args;
pub mod config;
pub mod constants;
pub mod content;
pub mod cycler;
pub mod engine;
pub mod error;
pub mod media;
pub mod page;
pub mod render;
pub mod showcase;
pub mod slide;
pub mod state;
pub mod texture_loader;
pub mod timer;

pub use config::{AdvancePolicy, Preset, ShowcaseConfig, TransitionTiming};
pub use engine::Engine;
pub use error::ShowcaseError;
pub use showcase::ShowcaseEngine;
pub use slide::{MediaRef, Slide, SlideId};
pub use state::{ShowcaseState, TransitionPhase};
