use crate::pacing::FramePacer;
use crate::{SharedEngine, SharedSurface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use wheel_core::{Clock, EngineEvent, InstantClock};

pub struct FrameContext {
    pub engine: SharedEngine,
    pub surface: SharedSurface,
    pub pacer: FramePacer,
    pub clock: InstantClock,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if !self.pacer.ready(self.clock.now()) {
            return;
        }
        let events = {
            let mut eng = self.engine.borrow_mut();
            let mut surface = self.surface.borrow_mut();
            eng.frame(&mut *surface)
        };
        self.frames += 1;
        for ev in &events {
            if let EngineEvent::PatternApplied { pattern, .. } = ev {
                log::debug!("[frame {}] grid now {}", self.frames, pattern.name());
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
