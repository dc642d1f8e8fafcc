//! Draws the console's synthetic waveform into its 2D canvas: 64 amber bars
//! with a glow pass on the loud ones, plus the playback progress line.

use crate::core::{WAVE_BAR_GAP_PX, WAVE_GLOW_THRESHOLD, WAVE_HEIGHT_FRACTION};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

pub fn draw(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    bars: &[f32],
    progress: f32,
    playing: bool,
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    let bar_width = width / bars.len().max(1) as f64;
    for (i, &amp) in bars.iter().enumerate() {
        let a = amp as f64;
        let bar_height = a * height * WAVE_HEIGHT_FRACTION;
        let x = i as f64 * bar_width;
        let y = height / 2.0 - bar_height / 2.0;

        let gradient = ctx.create_linear_gradient(x, y, x, y + bar_height);
        _ = gradient.add_color_stop(0.0, &format!("rgba(232,184,109,{:.3})", a * 0.8));
        _ = gradient.add_color_stop(0.5, &format!("rgba(212,165,116,{:.3})", a));
        _ = gradient.add_color_stop(1.0, &format!("rgba(204,119,34,{:.3})", a * 0.6));
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(x, y, (bar_width - WAVE_BAR_GAP_PX).max(1.0), bar_height);

        if playing && amp > WAVE_GLOW_THRESHOLD {
            ctx.set_shadow_blur(15.0);
            ctx.set_shadow_color("#d4a574");
            ctx.fill_rect(x, y, (bar_width - WAVE_BAR_GAP_PX).max(1.0), bar_height);
            ctx.set_shadow_blur(0.0);
        }
    }

    let progress_x = progress as f64 * width;
    ctx.set_stroke_style_str("#e8b86d");
    ctx.set_line_width(2.0);
    ctx.set_shadow_blur(10.0);
    ctx.set_shadow_color("#e8b86d");
    ctx.begin_path();
    ctx.move_to(progress_x, 0.0);
    ctx.line_to(progress_x, height);
    ctx.stroke();
    ctx.set_shadow_blur(0.0);
}
