#![cfg(target_arch = "wasm32")]
//! Wencorp Archives vault front-end: a WebGPU dust field behind the page,
//! a playback console with a synthetic waveform, and an ambient hum toggle.

use crate::core::{AmbientFade, ConsoleState, DustField, WaveformModel, DUST_DEFAULT_COUNT};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod visualizer;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("vault-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("vault-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #vault-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // Particle density is the page's only knob
    let dust_count = dom::usize_attr(&canvas, "data-dust-count").unwrap_or(DUST_DEFAULT_COUNT);
    let mut rng = StdRng::from_entropy();
    let dust = DustField::new(dust_count, &mut rng)?;
    let (slowest, fastest) = dust
        .speeds()
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), &s| (lo.min(s), hi.max(s)));
    log::info!(
        "[dust] {} particles, drift {:.3}..{:.3} u/s",
        dust.count(),
        slowest,
        fastest
    );

    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let hum = audio::AmbientHum::build(&audio_ctx).ok();

    let ambient = Rc::new(RefCell::new(AmbientFade::new()));
    let console = Rc::new(RefCell::new(ConsoleState::new()));
    let selected_mix: Rc<RefCell<Option<usize>>> = Rc::new(RefCell::new(None));

    events::wire_ui(&events::UiWiring {
        document: document.clone(),
        audio_ctx,
        ambient: ambient.clone(),
        console: console.clone(),
        selected_mix: selected_mix.clone(),
    });

    let gpu = frame::init_gpu(&canvas, dust.count() as u32).await;
    let console_canvas = document
        .get_element_by_id("console-canvas")
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        dust,
        waveform: WaveformModel::new(),
        idle_rng: rng,
        ambient,
        console,
        selected_mix,
        canvas,
        console_canvas,
        hum,
        gpu,
        last_instant: Instant::now(),
        clock_sec: 0.0,
        ambient_accum: 0.0,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
