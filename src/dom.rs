// Small DOM helpers shared by the wiring and frame code.

use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window()?.document()
}

/// Attach a click handler to the element with `element_id`, leaking the
/// closure. Missing elements are ignored; the page decides which controls
/// exist.
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    let Some(el) = document.get_element_by_id(element_id) else {
        return;
    };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Read a data attribute (e.g. `data-dust-count`) as a positive integer.
/// Zero and unparsable values are treated as absent, so a bad override
/// falls back to the built-in default instead of an empty scene.
pub fn usize_attr(el: &web::Element, name: &str) -> Option<usize> {
    el.get_attribute(name)
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&n| n > 0)
}

/// Resize the canvas backing store to its CSS size times devicePixelRatio,
/// clamped to at least one pixel so the surface stays configurable.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let Some(window) = web::window() else {
        return;
    };
    let dpr = window.device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    canvas.set_width(((rect.width() * dpr) as u32).max(1));
    canvas.set_height(((rect.height() * dpr) as u32).max(1));
}
