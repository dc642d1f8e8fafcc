// Synthetic waveform for the playback console.
//
// The bars are procedural rather than analysed from audio: while a mix is
// transmitting they follow a travelling sine driven by wall-clock time, and
// while idle they sit at low-level noise. The console's 2D canvas draws
// whatever this model last produced.

use rand::Rng;

pub const BAR_COUNT: usize = 64;
pub const IDLE_AMP_MAX: f32 = 0.2;

pub struct WaveformModel {
    bars: Vec<f32>,
}

impl WaveformModel {
    pub fn new() -> Self {
        Self {
            bars: vec![0.0; BAR_COUNT],
        }
    }

    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    pub fn bars(&self) -> &[f32] {
        &self.bars
    }

    /// Recompute bar amplitudes for this frame. `time_sec` is wall-clock
    /// seconds. Amplitudes land in `[0, 1]` while playing and
    /// `[0, IDLE_AMP_MAX]` while idle.
    pub fn update(&mut self, time_sec: f64, playing: bool, rng: &mut impl Rng) -> &[f32] {
        for (i, bar) in self.bars.iter_mut().enumerate() {
            *bar = if playing {
                ((time_sec * 2.0 + i as f64 * 0.5).sin() * 0.5 + 0.5) as f32
            } else {
                rng.gen::<f32>() * IDLE_AMP_MAX
            };
        }
        &self.bars
    }
}

impl Default for WaveformModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Fraction of the mix already played, clamped to `[0, 1]`. An unknown or
/// zero duration pins the cursor to the start.
pub fn progress_fraction(current_sec: f64, duration_sec: f64) -> f32 {
    if !duration_sec.is_finite() || duration_sec <= 0.0 {
        return 0.0;
    }
    (current_sec / duration_sec).clamp(0.0, 1.0) as f32
}

/// `MM:SS` with zero padding, as the console's time readout shows it.
pub fn format_time(time_sec: f64) -> String {
    let t = if time_sec.is_finite() && time_sec > 0.0 {
        time_sec
    } else {
        0.0
    };
    let minutes = (t / 60.0).floor() as u64;
    let seconds = (t % 60.0).floor() as u64;
    format!("{minutes:02}:{seconds:02}")
}
