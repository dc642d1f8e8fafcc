//! Per-frame driver: advances the dust field, steps the ambient fade,
//! ticks the playback cursor and renders, all from one requestAnimationFrame
//! loop. The dust advance always completes before the renderer reads the
//! position snapshot for that frame.

use crate::audio;
use crate::core::{AmbientFade, ConsoleState, DustField, WaveformModel, FADE_TICK_SECONDS};
use crate::render;
use crate::visualizer;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub dust: DustField,
    pub waveform: WaveformModel,
    pub idle_rng: StdRng,

    pub ambient: Rc<RefCell<AmbientFade>>,
    pub console: Rc<RefCell<ConsoleState>>,
    pub selected_mix: Rc<RefCell<Option<usize>>>,

    pub canvas: web::HtmlCanvasElement,
    pub console_canvas: Option<web::HtmlCanvasElement>,
    pub hum: Option<audio::AmbientHum>,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
    pub clock_sec: f64,
    pub ambient_accum: f32,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();
        self.clock_sec += dt.as_secs_f64();

        // Simulation first; the render pass below reads the fresh snapshot
        if let Err(e) = self.dust.advance(dt_sec) {
            log::error!("dust advance error: {}", e);
        }

        // Ambient fade runs on its own 50 ms grid
        self.ambient_accum += dt_sec;
        while self.ambient_accum >= FADE_TICK_SECONDS {
            self.ambient_accum -= FADE_TICK_SECONDS;
            self.ambient.borrow_mut().step();
        }
        if let Some(hum) = &self.hum {
            hum.set_volume(self.ambient.borrow().volume());
        }

        self.console.borrow_mut().tick(dt.as_secs_f64());
        self.draw_console();

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            g.write_instances(self.dust.positions(), self.dust.scales());
            if let Err(e) = g.render() {
                log::error!("render error: {:?}", e);
            }
        }
    }

    fn draw_console(&mut self) {
        if self.selected_mix.borrow().is_none() {
            return;
        }
        let Some(canvas) = &self.console_canvas else {
            return;
        };
        let Some(ctx) = visualizer::context_2d(canvas) else {
            return;
        };
        let (playing, progress) = {
            let st = self.console.borrow();
            if let Some(doc) = crate::dom::window_document() {
                if let Some(el) = doc.get_element_by_id("console-status") {
                    el.set_text_content(Some(st.status().label()));
                }
                if let Some(el) = doc.get_element_by_id("console-time-current") {
                    el.set_text_content(Some(&crate::core::format_time(st.position_sec())));
                }
                if let Some(el) = doc.get_element_by_id("console-volume-value") {
                    el.set_text_content(Some(&format!("{}%", st.volume_percent())));
                }
            }
            (
                st.is_playing(),
                crate::core::progress_fraction(st.position_sec(), st.duration_sec()),
            )
        };
        self.waveform
            .update(self.clock_sec, playing, &mut self.idle_rng);
        visualizer::draw(canvas, &ctx, self.waveform.bars(), progress, playing);
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    max_instances: u32,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, max_instances).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
