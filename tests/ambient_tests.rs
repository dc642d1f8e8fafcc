// Host-side tests for the ambient-sound fade stepper.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod ambient {
    include!("../src/core/ambient.rs");
}

use ambient::*;

#[test]
fn starts_off_and_silent() {
    let fade = AmbientFade::new();
    assert!(!fade.is_enabled());
    assert_eq!(fade.volume(), 0.0);
}

#[test]
fn fade_in_reaches_the_target_and_settles() {
    let mut fade = AmbientFade::new();
    fade.toggle();
    assert!(fade.is_enabled());

    let mut steps = 0;
    while fade.volume() < FADE_TARGET_VOLUME && steps < 100 {
        fade.step();
        steps += 1;
        assert!(fade.volume() <= FADE_TARGET_VOLUME);
    }
    assert_eq!(fade.volume(), FADE_TARGET_VOLUME);
    // roughly target / step ticks, i.e. under half a second of 50 ms ticks
    assert!(steps <= 10, "fade in took {steps} steps");

    // settled: further steps hold the level
    fade.step();
    assert_eq!(fade.volume(), FADE_TARGET_VOLUME);
}

#[test]
fn fade_out_reaches_silence_and_stops() {
    let mut fade = AmbientFade::new();
    fade.toggle();
    for _ in 0..20 {
        fade.step();
    }
    assert_eq!(fade.volume(), FADE_TARGET_VOLUME);

    fade.toggle();
    assert!(!fade.is_enabled());
    for _ in 0..20 {
        fade.step();
    }
    assert_eq!(fade.volume(), 0.0);
    assert!(!fade.is_enabled());
}

#[test]
fn toggle_mid_fade_reverses_from_the_current_volume() {
    let mut fade = AmbientFade::new();
    fade.toggle();
    fade.step();
    fade.step();
    let mid = fade.volume();
    assert!(mid > 0.0 && mid < FADE_TARGET_VOLUME);

    fade.toggle();
    fade.step();
    let lower = fade.volume();
    assert!(lower < mid, "fading back down");

    fade.toggle();
    fade.step();
    assert!(fade.volume() > lower, "fading back up");
    assert!(fade.is_enabled());
}

#[test]
fn steps_while_idle_change_nothing() {
    let mut fade = AmbientFade::new();
    fade.step();
    fade.step();
    assert_eq!(fade.volume(), 0.0);
    assert!(!fade.is_enabled());
}
