// Frame/render tuning for the vault scene.

// Camera: stands in the room at head height, looking down the drift axis.
pub const CAMERA_EYE: [f32; 3] = [0.0, 1.5, 7.5];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 1.5, 0.0];
pub const CAMERA_FOV_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Near-black warm background behind the dust
pub const CLEAR_COLOR: [f64; 4] = [0.014, 0.011, 0.008, 1.0];

// Ambient hum: deep drone under the scene, well below the mix level
pub const HUM_FREQUENCY_HZ: f32 = 60.0;
pub const HUM_LOWPASS_HZ: f32 = 220.0;
pub const HUM_LEVEL: f32 = 0.03; // gain at full fade volume
