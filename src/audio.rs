//! Ambient hum: a 60 Hz sine drone through a gentle lowpass, sitting under
//! the scene. It starts silent; the frame loop maps the fade stepper's
//! volume onto the output gain.

use crate::constants::{HUM_FREQUENCY_HZ, HUM_LEVEL, HUM_LOWPASS_HZ};
use crate::core::FADE_TARGET_VOLUME;
use web_sys as web;

pub struct AmbientHum {
    gain: web::GainNode,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

impl AmbientHum {
    pub fn build(audio_ctx: &web::AudioContext) -> Result<AmbientHum, ()> {
        let oscillator = web::OscillatorNode::new(audio_ctx).map_err(|e| {
            log::error!("OscillatorNode error: {:?}", e);
        })?;
        oscillator.set_type(web::OscillatorType::Sine);
        oscillator.frequency().set_value(HUM_FREQUENCY_HZ);

        let lowpass = web::BiquadFilterNode::new(audio_ctx).map_err(|e| {
            log::error!("BiquadFilterNode error: {:?}", e);
        })?;
        lowpass.set_type(web::BiquadFilterType::Lowpass);
        lowpass.frequency().set_value(HUM_LOWPASS_HZ);

        let gain = create_gain(audio_ctx, 0.0, "ambient")?;

        _ = oscillator.connect_with_audio_node(&lowpass);
        _ = lowpass.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&audio_ctx.destination());
        _ = oscillator.start();

        Ok(AmbientHum { gain })
    }

    /// Map the fade volume (`0..=FADE_TARGET_VOLUME`) onto the hum gain.
    pub fn set_volume(&self, fade_volume: f32) {
        let gain = (fade_volume / FADE_TARGET_VOLUME).clamp(0.0, 1.0) * HUM_LEVEL;
        self.gain.gain().set_value(gain);
    }
}
