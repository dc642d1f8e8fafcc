//! Click and keyboard wiring for the vault UI: the splash "enter" button,
//! per-mix vault buttons, the console controls and the ambient toggle.

use crate::core::{parse_runtime, AmbientFade, ConsoleState, ARCHIVE_MIXES};
use crate::dom;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct UiWiring {
    pub document: web::Document,
    pub audio_ctx: web::AudioContext,
    pub ambient: Rc<RefCell<AmbientFade>>,
    pub console: Rc<RefCell<ConsoleState>>,
    pub selected_mix: Rc<RefCell<Option<usize>>>,
}

pub fn wire_ui(w: &UiWiring) {
    wire_splash_enter(w);
    wire_mix_buttons(w);
    wire_console_controls(w);
    wire_volume_slider(w);
    wire_waveform_seek(w);
    wire_ambient_toggle(w);
    wire_escape_close(w);
}

fn wire_splash_enter(w: &UiWiring) {
    let audio_ctx = w.audio_ctx.clone();
    dom::add_click_listener(&w.document, "vault-enter", move || {
        // Audio may only start from a user gesture
        _ = audio_ctx.resume();
        if let Some(d) = dom::window_document() {
            overlay::hide(&d);
        }
    });
}

fn wire_mix_buttons(w: &UiWiring) {
    for (index, mix) in ARCHIVE_MIXES.iter().enumerate() {
        let console = w.console.clone();
        let selected = w.selected_mix.clone();
        let mix = *mix;
        dom::add_click_listener(&w.document, &format!("mix-{}", mix.id), move || {
            log::info!("[console] accessing {} / {}", mix.title, mix.artist);
            let mut st = ConsoleState::new();
            // No network fetch: the catalogue runtime is the duration
            if let Some(duration) = parse_runtime(mix.runtime) {
                st.loaded(duration);
            }
            *console.borrow_mut() = st;
            *selected.borrow_mut() = Some(index);
        });
    }
}

fn wire_console_controls(w: &UiWiring) {
    let selected = w.selected_mix.clone();
    dom::add_click_listener(&w.document, "console-close", move || {
        *selected.borrow_mut() = None;
    });

    let console = w.console.clone();
    dom::add_click_listener(&w.document, "console-play", move || {
        console.borrow_mut().toggle_play();
    });
}

fn wire_volume_slider(w: &UiWiring) {
    let Some(el) = w.document.get_element_by_id("console-volume") else {
        return;
    };
    let Ok(input) = el.dyn_into::<web::HtmlInputElement>() else {
        return;
    };
    let console = w.console.clone();
    let input_for_read = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if let Ok(v) = input_for_read.value().parse::<f32>() {
            console.borrow_mut().set_volume(v);
        }
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_waveform_seek(w: &UiWiring) {
    let Some(el) = w.document.get_element_by_id("console-canvas") else {
        return;
    };
    let console = w.console.clone();
    let el_for_rect = el.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let rect = el_for_rect.get_bounding_client_rect();
        if rect.width() <= 0.0 {
            return;
        }
        let fraction = ((ev.client_x() as f64 - rect.left()) / rect.width()).clamp(0.0, 1.0);
        let mut st = console.borrow_mut();
        let target = fraction * st.duration_sec();
        st.set_position(target);
    }) as Box<dyn FnMut(web::MouseEvent)>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_ambient_toggle(w: &UiWiring) {
    let ambient = w.ambient.clone();
    let audio_ctx = w.audio_ctx.clone();
    dom::add_click_listener(&w.document, "ambient-toggle", move || {
        _ = audio_ctx.resume();
        let mut fade = ambient.borrow_mut();
        fade.toggle();
        log::info!(
            "[ambient] {}",
            if fade.is_enabled() { "ON" } else { "OFF" }
        );
    });
}

fn wire_escape_close(w: &UiWiring) {
    let selected = w.selected_mix.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" {
            *selected.borrow_mut() = None;
        }
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    _ = w
        .document
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
