// Dust particle field: a fixed population of independently drifting points
// the vault scene overlays as ambient atmosphere.
//
// The field is externally stepped: the frame loop calls `advance` once per
// rendered frame and hands the flat position buffer to the renderer as
// frame-scoped read-only data. Nothing in here touches the GPU or the DOM,
// so the module is testable on the host.

use rand::Rng;
use thiserror::Error;

// Particles are distributed in a shallow room and drift along +z.
pub const FIELD_SPREAD: f32 = 10.0; // x/z span, centered on the origin
pub const Z_FAR: f32 = 5.0; // crossing this wraps the particle back
pub const Z_NEAR: f32 = -5.0;
pub const Y_FLOOR: f32 = 0.1;
pub const Y_SPAN: f32 = 2.8;
pub const SPEED_MIN: f32 = 0.05; // world units per second
pub const SPEED_SPAN: f32 = 0.15;
pub const SCALE_MIN: f32 = 0.5; // per-particle sprite size multiplier
pub const SCALE_SPAN: f32 = 1.5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DustError {
    #[error("dust field needs at least one particle")]
    InvalidCount,
    #[error("advance called with negative dt")]
    NegativeDt,
}

#[derive(Debug)]
pub struct DustField {
    count: usize,
    positions: Vec<f32>, // (x, y, z) per particle, particle i at 3i..3i+3
    speeds: Vec<f32>,    // fixed at construction
    scales: Vec<f32>,    // fixed at construction
}

impl DustField {
    /// Sample `count` particles from the supplied random source. Each axis is
    /// sampled independently and uniformly: x and z across the room, y between
    /// floor haze and head height, speed and sprite scale per particle.
    pub fn new(count: usize, rng: &mut impl Rng) -> Result<Self, DustError> {
        if count == 0 {
            return Err(DustError::InvalidCount);
        }
        let mut positions = Vec::with_capacity(count * 3);
        let mut speeds = Vec::with_capacity(count);
        let mut scales = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push((rng.gen::<f32>() - 0.5) * FIELD_SPREAD);
            positions.push(rng.gen::<f32>() * Y_SPAN + Y_FLOOR);
            positions.push((rng.gen::<f32>() - 0.5) * FIELD_SPREAD);
            speeds.push(SPEED_MIN + rng.gen::<f32>() * SPEED_SPAN);
            scales.push(SCALE_MIN + rng.gen::<f32>() * SCALE_SPAN);
        }
        Ok(Self {
            count,
            positions,
            speeds,
            scales,
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Flat `(x0, y0, z0, x1, ...)` view of the current positions, in
    /// construction order. The renderer copies this into its instance buffer
    /// each frame rather than aliasing it.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn speeds(&self) -> &[f32] {
        &self.speeds
    }

    pub fn scales(&self) -> &[f32] {
        &self.scales
    }

    /// Drift every particle forward by `speed * dt` on z. A particle crossing
    /// [`Z_FAR`] restarts at [`Z_NEAR`]; the overshoot past the boundary is
    /// discarded, matching the original scene's motion. x and y never change
    /// after construction.
    ///
    /// `dt` is seconds since the previous frame; zero is a legal no-op.
    /// Validation happens before any particle is touched, so a rejected call
    /// leaves the field untouched.
    pub fn advance(&mut self, dt: f32) -> Result<(), DustError> {
        if dt < 0.0 {
            return Err(DustError::NegativeDt);
        }
        for (i, speed) in self.speeds.iter().enumerate() {
            let z = &mut self.positions[i * 3 + 2];
            *z += speed * dt;
            if *z > Z_FAR {
                *z = Z_NEAR;
            }
        }
        Ok(())
    }
}
