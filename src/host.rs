use crate::constants::*;
use crate::support;
use glam::Vec2;
use parallax_core::{
    Bounds, EventSource, FrameId, Host, InputStrategy, LayerPosition, Parallax, Timer, TimerId,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedEffect = Rc<RefCell<Parallax<DomHost>>>;
pub type WeakEffect = Weak<RefCell<Parallax<DomHost>>>;

/// Run `f` against the effect if it is still alive and not already borrowed.
fn with_effect(weak: &WeakEffect, f: impl FnOnce(&mut Parallax<DomHost>)) {
    let Some(effect) = weak.upgrade() else {
        return;
    };
    match effect.try_borrow_mut() {
        Ok(mut fx) => f(&mut fx),
        Err(_) => log::debug!("[host] effect busy; callback dropped"),
    };
}

/// JS callbacks created once per scene and reused for every add/remove, so
/// listener removal always sees the same function object.
struct Listeners {
    orientation: Closure<dyn FnMut(web::DeviceOrientationEvent)>,
    motion: Closure<dyn FnMut(web::DeviceMotionEvent)>,
    pointer: Closure<dyn FnMut(web::PointerEvent)>,
    resize: Closure<dyn FnMut()>,
    frame: Closure<dyn FnMut(f64)>,
    calibration: Closure<dyn FnMut()>,
    orientation_probe: Closure<dyn FnMut()>,
    motion_probe: Closure<dyn FnMut()>,
}

impl Listeners {
    fn new(weak: &WeakEffect) -> Self {
        let w = weak.clone();
        let orientation = Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
            with_effect(&w, |fx| fx.on_orientation(ev.beta(), ev.gamma()));
        }) as Box<dyn FnMut(_)>);

        let w = weak.clone();
        let motion = Closure::wrap(Box::new(move |ev: web::DeviceMotionEvent| {
            let (beta, gamma) = ev
                .rotation_rate()
                .map(|r| (r.beta(), r.gamma()))
                .unwrap_or((None, None));
            with_effect(&w, |fx| fx.on_motion(beta, gamma));
        }) as Box<dyn FnMut(_)>);

        let w = weak.clone();
        let pointer = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            with_effect(&w, |fx| fx.on_pointer_move(client));
        }) as Box<dyn FnMut(_)>);

        let w = weak.clone();
        let resize = Closure::wrap(Box::new(move || {
            with_effect(&w, |fx| fx.on_resize());
        }) as Box<dyn FnMut()>);

        let w = weak.clone();
        let frame = Closure::wrap(Box::new(move |_timestamp_ms: f64| {
            with_effect(&w, |fx| fx.on_frame());
        }) as Box<dyn FnMut(f64)>);

        Self {
            orientation,
            motion,
            pointer,
            resize,
            frame,
            calibration: timer_closure(weak, Timer::Calibration),
            orientation_probe: timer_closure(weak, Timer::SupportProbe(InputStrategy::Orientation)),
            motion_probe: timer_closure(weak, Timer::SupportProbe(InputStrategy::Motion)),
        }
    }

    fn event(&self, source: EventSource) -> (&'static str, &js_sys::Function) {
        match source {
            EventSource::DeviceOrientation => {
                (ORIENTATION_EVENT, self.orientation.as_ref().unchecked_ref())
            }
            EventSource::DeviceMotion => (MOTION_EVENT, self.motion.as_ref().unchecked_ref()),
            EventSource::PointerMove => (POINTER_EVENT, self.pointer.as_ref().unchecked_ref()),
            EventSource::Resize => (RESIZE_EVENT, self.resize.as_ref().unchecked_ref()),
        }
    }

    fn timer(&self, timer: Timer) -> Option<&js_sys::Function> {
        match timer {
            Timer::Calibration => Some(self.calibration.as_ref().unchecked_ref()),
            Timer::SupportProbe(InputStrategy::Orientation) => {
                Some(self.orientation_probe.as_ref().unchecked_ref())
            }
            Timer::SupportProbe(InputStrategy::Motion) => {
                Some(self.motion_probe.as_ref().unchecked_ref())
            }
            Timer::SupportProbe(InputStrategy::Pointer) => None,
        }
    }
}

fn timer_closure(weak: &WeakEffect, timer: Timer) -> Closure<dyn FnMut()> {
    let w = weak.clone();
    Closure::wrap(Box::new(move || {
        with_effect(&w, |fx| fx.on_timer(timer));
    }) as Box<dyn FnMut()>)
}

/// [`Host`] over the browser window and one scene root.
pub struct DomHost {
    window: web::Window,
    element: web::HtmlElement,
    layers: Vec<web::HtmlElement>,
    listeners: Option<Listeners>,
}

impl DomHost {
    pub fn new(
        window: web::Window,
        element: web::HtmlElement,
        layers: Vec<web::HtmlElement>,
        effect: &WeakEffect,
    ) -> Self {
        Self {
            window,
            element,
            layers,
            listeners: Some(Listeners::new(effect)),
        }
    }

    pub fn element(&self) -> &web::HtmlElement {
        &self.element
    }

    pub fn set_layer_nodes(&mut self, layers: Vec<web::HtmlElement>) {
        self.layers = layers;
    }

    /// Drop every JS callback. Call only after the effect is disabled.
    pub fn release(&mut self) {
        self.listeners = None;
        self.layers.clear();
    }
}

impl Host for DomHost {
    fn listen(&mut self, source: EventSource) {
        let Some(l) = &self.listeners else {
            return;
        };
        let (name, callback) = l.event(source);
        if let Err(e) = self.window.add_event_listener_with_callback(name, callback) {
            log::warn!("[host] failed to listen for {}: {:?}", name, e);
        }
    }

    fn unlisten(&mut self, source: EventSource) {
        let Some(l) = &self.listeners else {
            return;
        };
        let (name, callback) = l.event(source);
        if let Err(e) = self.window.remove_event_listener_with_callback(name, callback) {
            log::warn!("[host] failed to remove {} listener: {:?}", name, e);
        }
    }

    fn request_frame(&mut self) -> Option<FrameId> {
        let l = self.listeners.as_ref()?;
        match self
            .window
            .request_animation_frame(l.frame.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameId(id)),
            Err(e) => {
                log::warn!("[host] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, id: FrameId) {
        _ = self.window.cancel_animation_frame(id.0);
    }

    fn set_timer(&mut self, timer: Timer, delay_ms: u32) -> Option<TimerId> {
        let callback = self.listeners.as_ref()?.timer(timer)?;
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback, delay)
        {
            Ok(id) => Some(TimerId(id)),
            Err(e) => {
                log::warn!("[host] setTimeout failed for {:?}: {:?}", timer, e);
                None
            }
        }
    }

    fn clear_timer(&mut self, id: TimerId) {
        self.window.clear_timeout_with_handle(id.0);
    }

    fn viewport(&self) -> Vec2 {
        let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
        };
        Vec2::new(dim(self.window.inner_width()), dim(self.window.inner_height()))
    }

    fn element_bounds(&self) -> Bounds {
        let r = self.element.get_bounding_client_rect();
        Bounds::new(
            r.left() as f32,
            r.top() as f32,
            r.width() as f32,
            r.height() as f32,
        )
    }

    fn place_layer(&mut self, index: usize, position: &LayerPosition) {
        let Some(node) = self.layers.get(index) else {
            return;
        };
        match position {
            LayerPosition::Transform(value) => support::set_style(node, "transform", value),
            LayerPosition::Offset { left, top } => {
                let style = node.style();
                _ = style.set_property("left", left);
                _ = style.set_property("top", top);
            }
        }
    }
}
