// Host-side tests for the synthetic console waveform.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod waveform {
    include!("../src/core/waveform.rs");
}

use rand::rngs::StdRng;
use rand::SeedableRng;
use waveform::*;

#[test]
fn model_has_sixty_four_bars() {
    let model = WaveformModel::new();
    assert_eq!(model.bar_count(), 64);
    assert_eq!(BAR_COUNT, 64);
}

#[test]
fn playing_bars_follow_the_travelling_sine() {
    let mut model = WaveformModel::new();
    let mut rng = StdRng::seed_from_u64(0);
    let t = 1.25_f64;
    let bars = model.update(t, true, &mut rng).to_vec();
    for (i, &amp) in bars.iter().enumerate() {
        let expected = ((t * 2.0 + i as f64 * 0.5).sin() * 0.5 + 0.5) as f32;
        assert!(
            (amp - expected).abs() < 1e-6,
            "bar {i}: {amp} vs {expected}"
        );
        assert!((0.0..=1.0).contains(&amp));
    }
}

#[test]
fn idle_bars_are_low_level_noise() {
    let mut model = WaveformModel::new();
    let mut rng = StdRng::seed_from_u64(5);
    let bars = model.update(100.0, false, &mut rng);
    for &amp in bars {
        assert!((0.0..=IDLE_AMP_MAX).contains(&amp), "idle amp {amp}");
    }
}

#[test]
fn progress_fraction_clamps_and_handles_unknown_duration() {
    assert_eq!(progress_fraction(10.0, 0.0), 0.0);
    assert_eq!(progress_fraction(10.0, f64::NAN), 0.0);
    assert_eq!(progress_fraction(10.0, f64::INFINITY), 0.0);
    assert_eq!(progress_fraction(-3.0, 60.0), 0.0);
    assert_eq!(progress_fraction(90.0, 60.0), 1.0);
    let half = progress_fraction(30.0, 60.0);
    assert!((half - 0.5).abs() < 1e-6);
}

#[test]
fn format_time_is_zero_padded_minutes_and_seconds() {
    assert_eq!(format_time(0.0), "00:00");
    assert_eq!(format_time(59.9), "00:59");
    assert_eq!(format_time(60.0), "01:00");
    assert_eq!(format_time(72.0 * 60.0 + 34.0), "72:34");
    assert_eq!(format_time(81.0 * 60.0 + 42.0), "81:42");
    assert_eq!(format_time(-5.0), "00:00");
    assert_eq!(format_time(f64::NAN), "00:00");
}
