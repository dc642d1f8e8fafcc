// Shared visual tuning for the vault scene.

// Dust rendering. These are static draw parameters, not simulation state:
// the simulator only owns positions, speeds and per-particle scales.
pub const DUST_DEFAULT_COUNT: usize = 1000;
pub const DUST_POINT_SIZE: f32 = 0.03; // world units, before per-particle scale
pub const DUST_COLOR: [f32; 3] = [1.0, 0.811_764_7, 0.439_215_7]; // #ffcf70
pub const DUST_OPACITY: f32 = 0.25; // sprites never write depth

// Console waveform geometry
pub const WAVE_HEIGHT_FRACTION: f64 = 0.8; // tallest bar relative to canvas
pub const WAVE_BAR_GAP_PX: f64 = 2.0;
pub const WAVE_GLOW_THRESHOLD: f32 = 0.5; // bars above this get the glow pass
