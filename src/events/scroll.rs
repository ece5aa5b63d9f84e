use crate::dom;
use crate::SharedEngine;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feeds every window scroll into the engine and re-broadcasts artist
/// changes to the page.
pub fn wire_scroll(window: &web::Window, engine: SharedEngine) {
    let wnd = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let offset = dom::scroll_offset(&wnd);
        let (events, bucket) = {
            let mut eng = engine.borrow_mut();
            let events = eng.on_scroll(offset);
            (events, eng.bucket())
        };
        dom::broadcast_artist_changes(&wnd, &events, bucket);
    }) as Box<dyn FnMut()>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
