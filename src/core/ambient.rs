// Ambient-sound fade: a small stepper the frame loop ticks every 50 ms.
//
// Toggling on ramps the loop volume from silence to the target in fixed
// increments; toggling off ramps back down and stops at zero. Mid-fade
// toggles reverse direction from the current volume.

pub const FADE_TARGET_VOLUME: f32 = 0.4;
pub const FADE_STEP: f32 = 0.05;
pub const FADE_TICK_SECONDS: f32 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Off,
    FadingIn,
    On,
    FadingOut,
}

pub struct AmbientFade {
    phase: Phase,
    volume: f32,
}

impl AmbientFade {
    pub fn new() -> Self {
        Self {
            phase: Phase::Off,
            volume: 0.0,
        }
    }

    /// Whether the toggle reads as ON (fading in counts).
    pub fn is_enabled(&self) -> bool {
        matches!(self.phase, Phase::FadingIn | Phase::On)
    }

    /// Current loop volume in `[0, FADE_TARGET_VOLUME]`.
    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn toggle(&mut self) {
        self.phase = if self.is_enabled() {
            Phase::FadingOut
        } else {
            Phase::FadingIn
        };
    }

    /// One 50 ms fade tick.
    pub fn step(&mut self) {
        match self.phase {
            Phase::FadingIn => {
                self.volume = (self.volume + FADE_STEP).min(FADE_TARGET_VOLUME);
                if self.volume >= FADE_TARGET_VOLUME {
                    self.phase = Phase::On;
                }
            }
            Phase::FadingOut => {
                if self.volume > FADE_STEP {
                    self.volume -= FADE_STEP;
                } else {
                    self.volume = 0.0;
                    self.phase = Phase::Off;
                }
            }
            Phase::Off | Phase::On => {}
        }
    }
}

impl Default for AmbientFade {
    fn default() -> Self {
        Self::new()
    }
}
