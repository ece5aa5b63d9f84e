use crate::constants::{ARTIST_CHANGE_EVENT, CANVAS_ID, SEED_QUERY_PARAM};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;
use wheel_core::{Artist, EngineEvent, Viewport};

/// Window inner size in CSS pixels, `None` while the window has no area
/// (e.g. a collapsed iframe).
pub fn viewport(window: &web::Window) -> Option<Viewport> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    (w >= 1.0 && h >= 1.0).then(|| Viewport::new(w as f32, h as f32))
}

#[inline]
pub fn scroll_offset(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0).max(0.0)
}

#[inline]
pub fn device_pixel_ratio(window: &web::Window) -> f64 {
    let dpr = window.device_pixel_ratio();
    if dpr.is_finite() && dpr > 0.0 {
        dpr
    } else {
        1.0
    }
}

/// Seed from `?seed=<u64>`, if present and numeric.
pub fn seed_from_query(window: &web::Window) -> Option<u64> {
    let search = window.location().search().ok()?;
    let params = web::UrlSearchParams::new_with_str(&search).ok()?;
    let raw = params.get(SEED_QUERY_PARAM)?;
    match raw.trim().parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(_) => {
            log::warn!("[dom] ignoring non-numeric seed {:?}", raw);
            None
        }
    }
}

/// Creates the background canvas inside `container`.
pub fn create_canvas(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(CANVAS_ID);
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Tells the rest of the page which artist the background now follows.
pub fn dispatch_artist_change(window: &web::Window, artist: Artist, bucket: usize) {
    let detail = js_sys::Object::new();
    _ = js_sys::Reflect::set(&detail, &"artist".into(), &artist.name().into());
    _ = js_sys::Reflect::set(&detail, &"bucket".into(), &JsValue::from_f64(bucket as f64));
    let init = web::CustomEventInit::new();
    init.set_detail(&detail);
    match web::CustomEvent::new_with_event_init_dict(ARTIST_CHANGE_EVENT, &init) {
        Ok(ev) => {
            _ = window.dispatch_event(&ev);
        }
        Err(e) => log::warn!("[dom] could not create {} event: {:?}", ARTIST_CHANGE_EVENT, e),
    }
}

/// Dispatches an artist-change event for each change in `events`.
pub fn broadcast_artist_changes(window: &web::Window, events: &[EngineEvent], bucket: usize) {
    for ev in events {
        if let EngineEvent::ArtistChanged { to, .. } = ev {
            dispatch_artist_change(window, *to, bucket);
        }
    }
}
