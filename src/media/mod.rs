//! Media playback gated on element visibility.

pub mod player;
pub mod simulated;
pub mod visibility;

pub use player::{MediaElement, PlaybackError, ViewportGatedPlayer, Visibility};
pub use simulated::{MediaEvent, SimulatedVideo};
pub use visibility::{observe, Bands, Rect};
