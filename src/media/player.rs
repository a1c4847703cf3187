//! Plays and pauses a media element as it scrolls in and out of view.
//!
//! Two observation bands feed the player: the viewport itself, and the
//! viewport grown by a proximity margin. The element never plays before it
//! has intersected the viewport once. After that, leaving the proximity band
//! pauses it and coming back resumes it.
//!
//! ```text
//! Unseen --viewport--> Visible <--proximity--> OutOfProximity
//! ```

use log::debug;

use crate::media::visibility::Bands;

/// A play attempt was refused (for example by an autoplay policy).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("playback rejected: {reason}")]
pub struct PlaybackError {
    pub reason: String,
}

pub trait MediaElement {
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);
    fn is_playing(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Unseen,
    Visible,
    OutOfProximity,
}

pub struct ViewportGatedPlayer<M: MediaElement> {
    media: M,
    state: Visibility,
    entered: bool,
    held: bool,
    connected: bool,
}

impl<M: MediaElement> ViewportGatedPlayer<M> {
    pub fn new(media: M) -> Self {
        Self {
            media,
            state: Visibility::Unseen,
            entered: false,
            held: false,
            connected: true,
        }
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    /// Sticky: set the first time the element intersects the viewport.
    pub fn has_entered(&self) -> bool {
        self.entered
    }

    /// Paused by the user while visible. Cleared once the element leaves
    /// the proximity band.
    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn observe(&mut self, bands: Bands) {
        self.on_viewport(bands.in_viewport);
        self.on_proximity(bands.in_proximity);
    }

    pub fn on_viewport(&mut self, intersecting: bool) {
        if !self.connected || !intersecting {
            return;
        }
        self.entered = true;
        if self.state != Visibility::Visible {
            self.try_play();
            self.state = Visibility::Visible;
        }
    }

    pub fn on_proximity(&mut self, within: bool) {
        if !self.connected {
            return;
        }
        match (self.state, within) {
            (Visibility::Visible, false) => {
                self.media.pause();
                self.held = false;
                self.state = Visibility::OutOfProximity;
            }
            (Visibility::OutOfProximity, true) if self.entered => {
                self.try_play();
                self.state = Visibility::Visible;
            }
            _ => {}
        }
    }

    /// User play/pause. A refused play is returned to the caller.
    pub fn toggle(&mut self) -> Result<(), PlaybackError> {
        if self.media.is_playing() {
            self.media.pause();
            self.held = true;
            return Ok(());
        }
        self.held = false;
        self.media.play()
    }

    /// Stop observing. Later observations are ignored.
    pub fn disconnect(&mut self) {
        if self.connected {
            self.media.pause();
            self.connected = false;
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    fn try_play(&mut self) {
        if let Err(e) = self.media.play() {
            debug!("{e}; will retry on next visibility change");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeMedia {
        playing: bool,
        blocked: bool,
        play_calls: usize,
    }

    impl MediaElement for FakeMedia {
        fn play(&mut self) -> Result<(), PlaybackError> {
            self.play_calls += 1;
            if self.blocked {
                return Err(PlaybackError {
                    reason: "autoplay blocked".into(),
                });
            }
            self.playing = true;
            Ok(())
        }

        fn pause(&mut self) {
            self.playing = false;
        }

        fn is_playing(&self) -> bool {
            self.playing
        }
    }

    const NEAR: Bands = Bands {
        in_viewport: false,
        in_proximity: true,
    };
    const INSIDE: Bands = Bands {
        in_viewport: true,
        in_proximity: true,
    };
    const AWAY: Bands = Bands {
        in_viewport: false,
        in_proximity: false,
    };

    #[test]
    fn never_plays_before_first_intersection() {
        let mut player = ViewportGatedPlayer::new(FakeMedia::default());
        player.observe(NEAR);
        player.observe(AWAY);
        player.observe(NEAR);
        assert_eq!(player.state(), Visibility::Unseen);
        assert_eq!(player.media().play_calls, 0);
    }

    #[test]
    fn resumes_on_reentering_proximity() {
        let mut player = ViewportGatedPlayer::new(FakeMedia::default());
        player.observe(INSIDE);
        assert!(player.media().is_playing());

        player.observe(AWAY);
        assert_eq!(player.state(), Visibility::OutOfProximity);
        assert!(!player.media().is_playing());

        player.observe(NEAR);
        assert_eq!(player.state(), Visibility::Visible);
        assert!(player.media().is_playing());
    }

    #[test]
    fn rejected_play_is_swallowed_and_retried() {
        let mut player = ViewportGatedPlayer::new(FakeMedia {
            blocked: true,
            ..Default::default()
        });
        player.observe(INSIDE);
        assert_eq!(player.state(), Visibility::Visible);
        assert!(!player.media().is_playing());

        player.media_mut().blocked = false;
        player.observe(AWAY);
        player.observe(NEAR);
        assert!(player.media().is_playing());
        assert_eq!(player.media().play_calls, 2);
    }

    #[test]
    fn user_pause_is_held_until_out_of_proximity() {
        let mut player = ViewportGatedPlayer::new(FakeMedia::default());
        player.observe(INSIDE);
        player.toggle().unwrap();
        assert!(player.is_held());
        assert!(!player.media().is_playing());

        player.observe(INSIDE);
        assert!(!player.media().is_playing());

        player.observe(AWAY);
        assert!(!player.is_held());
        player.observe(NEAR);
        assert!(player.media().is_playing());
    }

    #[test]
    fn toggle_reports_a_refused_play() {
        let mut player = ViewportGatedPlayer::new(FakeMedia {
            blocked: true,
            ..Default::default()
        });
        player.observe(INSIDE);
        assert!(player.toggle().is_err());
        assert!(!player.is_held());
    }

    #[test]
    fn disconnect_ignores_later_observations() {
        let mut player = ViewportGatedPlayer::new(FakeMedia::default());
        player.observe(INSIDE);
        player.disconnect();
        assert!(!player.media().is_playing());
        player.observe(AWAY);
        player.observe(INSIDE);
        assert!(!player.media().is_playing());
        assert_eq!(player.media().play_calls, 1);
    }
}
