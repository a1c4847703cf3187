use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use showcase::{
    Engine, MediaRef, Preset, ShowcaseEngine, ShowcaseError, Slide, TransitionPhase,
};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn stills(n: u32) -> Vec<Slide> {
    (0..n)
        .map(|i| {
            Slide::new(
                i,
                format!("Room {i}"),
                "Sea view",
                MediaRef::Image {
                    url: format!("https://cdn.example.com/{i}.jpg"),
                },
            )
        })
        .collect()
}

fn videos(n: u32) -> Vec<Slide> {
    (0..n)
        .map(|i| {
            Slide::new(
                i,
                format!("Clip {i}"),
                "",
                MediaRef::Video {
                    url: format!("https://cdn.example.com/{i}.mp4"),
                },
            )
        })
        .collect()
}

/// Step the clock in small increments, like a frame loop would.
fn run(engine: &mut ShowcaseEngine, total: Duration, step: Duration) {
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        let dt = step.min(total - elapsed);
        engine.update(dt);
        elapsed += dt;
    }
}

// -----------------------------------------------------------------------
// slide store and auto-advance
// -----------------------------------------------------------------------

#[test]
fn auto_advance_wraps_from_last_to_first() {
    let mut engine = ShowcaseEngine::new(stills(3), Preset::Ancillary.config()).unwrap();
    // each step: 3000 ms interval + 150 ms fade out
    engine.update(ms(3_150));
    assert_eq!(engine.active_index(), 1);
    engine.update(ms(3_150));
    assert_eq!(engine.active_index(), 2);
    engine.update(ms(3_150));
    assert_eq!(engine.active_index(), 0);
}

#[test]
fn previous_from_first_wraps_to_last() {
    let mut engine = ShowcaseEngine::new(stills(4), Preset::Ancillary.config()).unwrap();
    assert!(engine.previous());
    engine.update(ms(150));
    assert_eq!(engine.active_index(), 3);
}

#[test]
fn progress_resets_when_index_changes() {
    let mut engine = ShowcaseEngine::new(stills(3), Preset::Ancillary.config()).unwrap();
    engine.update(ms(1_500));
    assert!((engine.progress_percent() - 50.0).abs() < 0.1);
    engine.update(ms(1_650));
    assert_eq!(engine.active_index(), 1);
    assert_eq!(engine.progress_percent(), 0.0);
}

#[test]
fn setting_the_current_index_is_a_no_op() {
    let mut engine = ShowcaseEngine::new(stills(3), Preset::Ancillary.config()).unwrap();
    engine.update(ms(1_000));
    let before = engine.state();
    let timers = engine.pending_timers();

    assert!(!engine.set_active(0).unwrap());
    assert!(!engine.navigate_to(0).unwrap());

    assert_eq!(engine.state(), before);
    assert_eq!(engine.pending_timers(), timers);
    assert_eq!(engine.phase(), TransitionPhase::Idle);
    assert!(!engine.is_paused());
}

#[test]
fn out_of_range_index_is_rejected() {
    let mut engine = ShowcaseEngine::new(stills(2), Preset::Ancillary.config()).unwrap();
    let err = engine.navigate_to(5).unwrap_err();
    assert!(matches!(err, ShowcaseError::IndexOutOfRange { index: 5, len: 2 }));
    assert_eq!(engine.active_index(), 0);
}

#[test]
fn empty_slide_list_is_rejected() {
    let res = ShowcaseEngine::new(Vec::new(), Preset::Business.config());
    assert!(matches!(res, Err(ShowcaseError::EmptySlideList)));
}

#[test]
fn single_slide_stays_put() {
    let mut engine = ShowcaseEngine::new(stills(1), Preset::Ancillary.config()).unwrap();
    run(&mut engine, ms(30_000), ms(16));
    assert_eq!(engine.active_index(), 0);
    assert_eq!(engine.phase(), TransitionPhase::Idle);
}

// -----------------------------------------------------------------------
// transition controller
// -----------------------------------------------------------------------

#[test]
fn transition_walks_fade_out_swap_fade_in() {
    let mut engine = ShowcaseEngine::new(stills(3), Preset::Ancillary.config()).unwrap();
    engine.set_active(2).unwrap();
    assert_eq!(engine.phase(), TransitionPhase::FadingOut);
    assert_eq!(engine.opacity(), 0.0);
    assert!(engine.state().is_transitioning);

    engine.update(ms(149));
    assert_eq!(engine.active_index(), 0);

    engine.update(ms(1));
    assert_eq!(engine.active_index(), 2);
    assert_eq!(engine.phase(), TransitionPhase::FadingIn);

    engine.update(ms(300));
    assert_eq!(engine.phase(), TransitionPhase::Idle);
    assert_eq!(engine.opacity(), 1.0);
}

#[test]
fn rapid_clicks_land_on_the_last_one() {
    let mut engine = ShowcaseEngine::new(stills(4), Preset::Ancillary.config()).unwrap();
    engine.navigate_to(1).unwrap();
    run(&mut engine, ms(50), ms(10));
    engine.navigate_to(2).unwrap();
    run(&mut engine, ms(50), ms(10));
    engine.navigate_to(3).unwrap();

    let mut seen = Vec::new();
    for _ in 0..100 {
        engine.update(ms(10));
        seen.push(engine.active_index());
    }
    assert!(seen.iter().all(|&i| i == 0 || i == 3), "intermediate index seen: {seen:?}");
    assert_eq!(engine.active_index(), 3);
}

#[test]
fn click_during_fade_in_restarts_the_sequence() {
    let mut engine = ShowcaseEngine::new(stills(4), Preset::Ancillary.config()).unwrap();
    engine.navigate_to(1).unwrap();
    engine.update(ms(200));
    assert_eq!(engine.phase(), TransitionPhase::FadingIn);

    engine.navigate_to(2).unwrap();
    assert_eq!(engine.phase(), TransitionPhase::FadingOut);
    engine.update(ms(150));
    assert_eq!(engine.active_index(), 2);
    assert!(engine.pending_timers() <= 2);
}

#[test]
fn business_preset_swaps_instantly_and_restarts_interval() {
    let mut engine = ShowcaseEngine::new(stills(3), Preset::Business.config()).unwrap();
    engine.update(ms(4_000));
    assert!(engine.navigate_to(2).unwrap());
    assert_eq!(engine.active_index(), 2);
    assert!(!engine.is_paused());
    assert_eq!(engine.progress_percent(), 0.0);

    engine.update(ms(9_999));
    assert_eq!(engine.active_index(), 2);
    engine.update(ms(1));
    assert_eq!(engine.active_index(), 0);
}

// -----------------------------------------------------------------------
// media-duration policy
// -----------------------------------------------------------------------

#[test]
fn reported_duration_drives_the_advance() {
    let mut engine = ShowcaseEngine::new(videos(3), Preset::Flipped.config()).unwrap();
    assert_eq!(engine.advance_interval(), None);

    engine.on_media_loaded_metadata(4.0);
    assert_eq!(engine.advance_interval(), Some(ms(4_000)));

    engine.update(ms(3_999));
    assert_eq!(engine.phase(), TransitionPhase::Idle);
    engine.update(ms(1));
    assert_eq!(engine.phase(), TransitionPhase::FadingOut);
    engine.update(ms(150));
    assert_eq!(engine.active_index(), 1);
}

#[test]
fn short_or_missing_duration_falls_back_to_default() {
    for secs in [f64::NAN, 1.0, 0.4, 1e30] {
        let mut engine = ShowcaseEngine::new(videos(2), Preset::Flipped.config()).unwrap();
        engine.on_media_loaded_metadata(secs);
        assert_eq!(engine.advance_interval(), Some(ms(5_000)), "duration {secs}");
    }
}

#[test]
fn ended_advances_before_the_timer() {
    let mut engine = ShowcaseEngine::new(videos(3), Preset::Flipped.config()).unwrap();
    engine.on_media_loaded_metadata(10.0);
    engine.update(ms(2_000));
    engine.on_media_ended();
    engine.update(ms(150));
    assert_eq!(engine.active_index(), 1);
    // the old 10 s timer must not fire on the new slide, which has not
    // reported its own duration yet
    engine.update(ms(10_000));
    assert_eq!(engine.active_index(), 1);
    assert_eq!(engine.phase(), TransitionPhase::Idle);
    assert_eq!(engine.advance_interval(), None);
}

#[test]
fn media_events_ignored_for_still_slides() {
    let mut slides = stills(2);
    slides.extend(videos(1).into_iter().map(|mut s| {
        s.id = showcase::SlideId(99);
        s
    }));
    let mut engine = ShowcaseEngine::new(slides, Preset::Flipped.config()).unwrap();
    assert_eq!(engine.advance_interval(), Some(ms(5_000)));
    engine.on_media_loaded_metadata(2.0);
    engine.on_media_ended();
    assert_eq!(engine.advance_interval(), Some(ms(5_000)));
    assert_eq!(engine.phase(), TransitionPhase::Idle);
}

#[test]
fn media_events_ignored_under_fixed_interval() {
    let mut engine = ShowcaseEngine::new(videos(2), Preset::Ancillary.config()).unwrap();
    engine.on_media_ended();
    assert_eq!(engine.phase(), TransitionPhase::Idle);
    assert_eq!(engine.advance_interval(), Some(ms(3_000)));
}

// -----------------------------------------------------------------------
// pause gate
// -----------------------------------------------------------------------

#[test]
fn manual_navigation_pauses_until_cooldown() {
    let mut engine = ShowcaseEngine::new(stills(4), Preset::Ancillary.config()).unwrap();
    engine.navigate_to(1).unwrap();
    assert!(engine.state().is_paused);

    run(&mut engine, ms(19_000), ms(16));
    assert_eq!(engine.active_index(), 1);
    assert_eq!(engine.progress_percent(), 0.0);

    run(&mut engine, ms(1_000), ms(16));
    assert!(!engine.is_paused());
    assert_eq!(engine.active_index(), 1);

    run(&mut engine, ms(3_150), ms(10));
    assert_eq!(engine.active_index(), 2);
}

#[test]
fn second_click_restarts_the_cooldown() {
    let mut engine = ShowcaseEngine::new(stills(4), Preset::Ancillary.config()).unwrap();
    engine.navigate_to(1).unwrap();
    engine.update(ms(19_000));
    engine.navigate_to(2).unwrap();

    // the first cooldown would have expired at 20 s
    engine.update(ms(6_000));
    assert!(engine.is_paused());
    assert_eq!(engine.active_index(), 2);

    engine.update(ms(14_000));
    assert!(!engine.is_paused());
    assert_eq!(engine.progress_percent(), 0.0);

    engine.update(ms(3_150));
    assert_eq!(engine.active_index(), 3);
}

#[test]
fn short_cooldown_variant_resumes_after_three_seconds() {
    let mut engine = ShowcaseEngine::new(stills(3), Preset::AncillaryShort.config()).unwrap();
    engine.next();
    engine.update(ms(3_000));
    assert!(!engine.is_paused());
    assert_eq!(engine.active_index(), 1);
}

#[test]
fn manual_navigation_while_paused_is_accepted() {
    let mut engine = ShowcaseEngine::new(stills(4), Preset::Ancillary.config()).unwrap();
    engine.next();
    engine.update(ms(500));
    engine.next();
    engine.update(ms(500));
    assert_eq!(engine.active_index(), 2);
    assert!(engine.is_paused());
}

// -----------------------------------------------------------------------
// teardown
// -----------------------------------------------------------------------

#[test]
fn nothing_mutates_after_teardown() {
    let mut engine = ShowcaseEngine::new(stills(3), Preset::Ancillary.config()).unwrap();
    engine.navigate_to(1).unwrap();
    engine.update(ms(100));
    let before = engine.active_index();

    engine.teardown();
    assert!(!engine.is_mounted());
    assert_eq!(engine.pending_timers(), 0);

    engine.update(ms(60_000));
    engine.on_media_ended();
    assert!(!engine.navigate_to(2).unwrap());
    assert_eq!(engine.active_index(), before);
    assert_eq!(engine.pending_timers(), 0);
}

// -----------------------------------------------------------------------
// randomized navigation
// -----------------------------------------------------------------------

#[test]
fn active_index_stays_in_range_under_random_input() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for preset in [
        Preset::Business,
        Preset::Ancillary,
        Preset::AncillaryShort,
        Preset::Flipped,
    ] {
        for n in 1..=5u32 {
            let slides = if rng.random_bool(0.5) { videos(n) } else { stills(n) };
            let mut engine = ShowcaseEngine::new(slides, preset.config()).unwrap();
            for _ in 0..500 {
                match rng.random_range(0..7) {
                    0 => engine.update(ms(rng.random_range(0..4_000))),
                    1 => {
                        let _ = engine.navigate_to(rng.random_range(0..n as usize + 1));
                    }
                    2 => {
                        engine.next();
                    }
                    3 => {
                        engine.previous();
                    }
                    4 => {
                        let _ = engine.set_active(rng.random_range(0..n as usize));
                    }
                    5 => engine.on_media_loaded_metadata(rng.random_range(0.0..12.0)),
                    _ => engine.on_media_ended(),
                }
                let state = engine.state();
                assert!(state.active_index < n as usize);
                assert!((0.0..=100.0).contains(&state.progress_percent));
                // advance + transition + cooldown at most
                assert!(engine.pending_timers() <= 3);
            }
        }
    }
}
