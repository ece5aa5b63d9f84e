use crate::dom;
use crate::{SharedEngine, SharedSurface};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Rebuilds canvas and grid synchronously, so the next frame already draws
/// the new layout.
pub fn wire_resize(window: &web::Window, engine: SharedEngine, surface: SharedSurface) {
    let wnd = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let Some(viewport) = dom::viewport(&wnd) else {
            log::warn!("[resize] window has no area, keeping previous grid");
            return;
        };
        surface
            .borrow_mut()
            .resize(viewport, dom::device_pixel_ratio(&wnd));
        engine.borrow_mut().on_resize(viewport);
    }) as Box<dyn FnMut()>);

    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
