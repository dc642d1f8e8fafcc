pub mod ambient;
pub mod constants;
pub mod dust;
pub mod playback;
pub mod waveform;

pub use ambient::*;
pub use constants::*;
pub use dust::*;
pub use playback::*;
pub use waveform::*;

// Shaders bundled as string constants
pub static DUST_WGSL: &str = include_str!("../../shaders/dust.wgsl");
