// Host-side tests for the dust particle field.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod dust {
    include!("../src/core/dust.rs");
}

use dust::*;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Deterministic random source: replays a fixed sequence of unit-interval
/// samples, so tests can place particles exactly.
struct SequenceRng {
    vals: Vec<u32>,
    i: usize,
}

impl SequenceRng {
    /// `units` are the values `gen::<f32>()` should produce, in order,
    /// cycling when exhausted.
    fn from_units(units: &[f64]) -> Self {
        let vals = units
            .iter()
            .map(|&u| {
                let fraction = ((u * (1u64 << 24) as f64) as u64).min((1 << 24) - 1);
                (fraction as u32) << 8
            })
            .collect();
        Self { vals, i: 0 }
    }
}

impl RngCore for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        let v = self.vals[self.i % self.vals.len()];
        self.i += 1;
        v
    }
    fn next_u64(&mut self) -> u64 {
        u64::from(self.next_u32())
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for b in dest.iter_mut() {
            *b = 0;
        }
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[test]
fn snapshot_length_is_three_per_particle() {
    let mut rng = StdRng::seed_from_u64(7);
    for count in [1, 2, 3, 10, 257] {
        let field = DustField::new(count, &mut rng).expect("valid count");
        assert_eq!(field.count(), count);
        assert_eq!(field.positions().len(), count * 3);
        assert_eq!(field.speeds().len(), count);
        assert_eq!(field.scales().len(), count);
    }
}

#[test]
fn initial_samples_stay_in_bounds() {
    let mut rng = StdRng::seed_from_u64(42);
    let field = DustField::new(500, &mut rng).unwrap();
    for i in 0..field.count() {
        let x = field.positions()[i * 3];
        let y = field.positions()[i * 3 + 1];
        let z = field.positions()[i * 3 + 2];
        assert!((-5.0..=5.0).contains(&x), "x out of bounds: {x}");
        assert!((0.1..=2.9).contains(&y), "y out of bounds: {y}");
        assert!((-5.0..=5.0).contains(&z), "z out of bounds: {z}");
        let speed = field.speeds()[i];
        assert!((0.05..=0.2).contains(&speed), "speed out of bounds: {speed}");
        let scale = field.scales()[i];
        assert!((0.5..=2.0).contains(&scale), "scale out of bounds: {scale}");
    }
}

#[test]
fn crossing_the_far_boundary_resets_to_near_boundary_exactly() {
    // z ≈ 4.99, speed ≈ 0.2: one second of drift overshoots z = 5
    let mut rng = SequenceRng::from_units(&[0.5, 0.5, 0.999, 1.0, 0.5]);
    let mut field = DustField::new(1, &mut rng).unwrap();
    assert!(field.positions()[2] > 4.9);
    field.advance(1.0).unwrap();
    // hard reset, not modulo: overshoot distance is discarded
    assert_eq!(field.positions()[2], -5.0);
}

#[test]
fn no_wrap_below_the_threshold() {
    // z = 0 exactly (unit sample 0.5 maps to the room's center)
    let mut rng = SequenceRng::from_units(&[0.5, 0.5, 0.5, 0.333, 0.5]);
    let mut field = DustField::new(1, &mut rng).unwrap();
    assert_eq!(field.positions()[2], 0.0);
    let speed = field.speeds()[0];
    field.advance(1.0).unwrap();
    assert_eq!(field.positions()[2], speed);
}

#[test]
fn x_and_y_never_change() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut field = DustField::new(64, &mut rng).unwrap();
    let before: Vec<f32> = field.positions().to_vec();
    for dt in [0.016, 0.0, 2.5, 10.0, 0.25] {
        field.advance(dt).unwrap();
    }
    for i in 0..field.count() {
        assert_eq!(field.positions()[i * 3], before[i * 3]);
        assert_eq!(field.positions()[i * 3 + 1], before[i * 3 + 1]);
    }
}

#[test]
fn zero_dt_is_a_no_op() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut field = DustField::new(32, &mut rng).unwrap();
    let before: Vec<f32> = field.positions().to_vec();
    field.advance(0.0).unwrap();
    assert_eq!(field.positions(), &before[..]);
}

#[test]
fn zero_count_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        DustField::new(0, &mut rng).unwrap_err(),
        DustError::InvalidCount
    );
    let field = DustField::new(1, &mut rng).unwrap();
    assert_eq!(field.positions().len(), 3);
}

#[test]
fn negative_dt_is_rejected_without_touching_particles() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut field = DustField::new(16, &mut rng).unwrap();
    let before: Vec<f32> = field.positions().to_vec();
    assert_eq!(field.advance(-0.5).unwrap_err(), DustError::NegativeDt);
    assert_eq!(field.positions(), &before[..]);
}

#[test]
fn z_drifts_monotonically_until_the_wrap() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = DustField::new(100, &mut rng).unwrap();
    let mut prev: Vec<f32> = (0..field.count())
        .map(|i| field.positions()[i * 3 + 2])
        .collect();
    for _ in 0..200 {
        field.advance(0.25).unwrap();
        for i in 0..field.count() {
            let z = field.positions()[i * 3 + 2];
            if z < prev[i] {
                // the only way backwards is the wrap reset
                assert_eq!(z, -5.0);
            }
            assert!((-5.0..=5.0).contains(&z), "z escaped the room: {z}");
            prev[i] = z;
        }
    }
}
