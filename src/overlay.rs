//! Splash overlay: the "ACCESS VAULT" screen shown until the visitor enters.

use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("splash-overlay") {
        let _ = el.set_attribute("style", "display:none");
    }
}
