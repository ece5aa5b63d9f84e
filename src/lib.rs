#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;
use wheel_core::{BackgroundEngine, EngineConfig, InstantClock};

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod pacing;

use constants::{CONTAINER_ID, FRAME_SLACK, TARGET_FPS};

pub(crate) type SharedEngine = Rc<RefCell<BackgroundEngine<InstantClock>>>;
pub(crate) type SharedSurface = Rc<RefCell<canvas::CanvasSurface>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wheel-web starting");

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
    let container = document
        .get_element_by_id(CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CONTAINER_ID))?;
    let viewport =
        dom::viewport(&window).ok_or_else(|| anyhow::anyhow!("window has no drawable area"))?;

    let canvas = dom::create_canvas(&document, &container)?;
    let mut surface = canvas::CanvasSurface::new(canvas)?;
    surface.resize(viewport, dom::device_pixel_ratio(&window));

    let config = EngineConfig {
        seed: dom::seed_from_query(&window),
        ..EngineConfig::default()
    };
    if let Some(seed) = config.seed {
        log::info!("[init] pattern seed {}", seed);
    }
    let clock = InstantClock::new();
    let engine: SharedEngine = Rc::new(RefCell::new(BackgroundEngine::new(
        config,
        viewport,
        clock.clone(),
    )?));
    let surface: SharedSurface = Rc::new(RefCell::new(surface));

    // a restored scroll position should pick its artist before the first frame
    let offset = dom::scroll_offset(&window);
    if offset > 0.0 {
        let events = engine.borrow_mut().on_scroll(offset);
        dom::broadcast_artist_changes(&window, &events, engine.borrow().bucket());
    }

    events::wire_scroll(&window, engine.clone());
    events::wire_resize(&window, engine.clone(), surface.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        surface,
        pacer: pacing::FramePacer::new(TARGET_FPS, FRAME_SLACK),
        clock,
        frames: 0,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
