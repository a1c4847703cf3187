use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1280;           // Default window width
pub const RENDER_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const FADE_OUT: Duration = Duration::from_millis(150);   // Fade out before the index swap
pub const FADE_IN: Duration = Duration::from_millis(300);    // Fade in after the index swap

pub const BUSINESS_INTERVAL: Duration = Duration::from_millis(10_000);
pub const SERVICES_INTERVAL: Duration = Duration::from_millis(3_000);
pub const STILL_INTERVAL: Duration = Duration::from_millis(5_000);   // Non-video slides under the media policy

pub const LONG_COOLDOWN: Duration = Duration::from_millis(20_000);
pub const SHORT_COOLDOWN: Duration = Duration::from_millis(3_000);

pub const DEFAULT_MEDIA_DURATION: Duration = Duration::from_millis(5_000);
pub const MIN_ADVANCE_DELAY: Duration = Duration::from_millis(100); // Floor for any configured advance delay
pub const MIN_MEDIA_DURATION_SECS: f64 = 1.0;     // Reported durations at or below this use the default

pub const PROXIMITY_MARGIN: f32 = 50.0;           // Expanded margin of the proximity band (pixels)

pub const CYCLE_INTERVAL: Duration = Duration::from_millis(3_000);
pub const CYCLE_BLUR: Duration = Duration::from_millis(300);
pub const WORD_STEP_DELAY: Duration = Duration::from_millis(50);
pub const WORD_STEP_DURATION: Duration = Duration::from_millis(350);
