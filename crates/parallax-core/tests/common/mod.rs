// Recording host used by the lifecycle tests.
// Frames and timers are queued until a test fires them explicitly.

#![allow(dead_code)]

use glam::Vec2;
use parallax_core::*;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct MockHost {
    pub listening: HashSet<EventSource>,
    pub viewport: Vec2,
    pub bounds: Bounds,
    pub frames: Vec<FrameId>,
    pub timers: Vec<(TimerId, Timer, u32)>,
    pub placed: BTreeMap<usize, LayerPosition>,
    pub frames_requested: usize,
    pub refuse_frames: bool,
    next_id: i32,
}

impl MockHost {
    pub fn new(viewport: Vec2, bounds: Bounds) -> Self {
        Self {
            viewport,
            bounds,
            ..Self::default()
        }
    }

    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    pub fn timer_delays(&self, timer: Timer) -> Vec<u32> {
        self.timers
            .iter()
            .filter(|(_, t, _)| *t == timer)
            .map(|(_, _, d)| *d)
            .collect()
    }
}

impl Host for MockHost {
    fn listen(&mut self, source: EventSource) {
        self.listening.insert(source);
    }

    fn unlisten(&mut self, source: EventSource) {
        self.listening.remove(&source);
    }

    fn request_frame(&mut self) -> Option<FrameId> {
        if self.refuse_frames {
            return None;
        }
        self.frames_requested += 1;
        let id = FrameId(self.next_id());
        self.frames.push(id);
        Some(id)
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.frames.retain(|f| *f != id);
    }

    fn set_timer(&mut self, timer: Timer, delay_ms: u32) -> Option<TimerId> {
        let id = TimerId(self.next_id());
        self.timers.push((id, timer, delay_ms));
        Some(id)
    }

    fn clear_timer(&mut self, id: TimerId) {
        self.timers.retain(|(t, _, _)| *t != id);
    }

    fn viewport(&self) -> Vec2 {
        self.viewport
    }

    fn element_bounds(&self) -> Bounds {
        self.bounds
    }

    fn place_layer(&mut self, index: usize, position: &LayerPosition) {
        self.placed.insert(index, position.clone());
    }
}

/// Host whose recordings outlive the effect that owns it.
#[derive(Clone, Debug, Default)]
pub struct SharedHost(pub Rc<RefCell<MockHost>>);

impl Host for SharedHost {
    fn listen(&mut self, source: EventSource) {
        self.0.borrow_mut().listen(source);
    }

    fn unlisten(&mut self, source: EventSource) {
        self.0.borrow_mut().unlisten(source);
    }

    fn request_frame(&mut self) -> Option<FrameId> {
        self.0.borrow_mut().request_frame()
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.0.borrow_mut().cancel_frame(id);
    }

    fn set_timer(&mut self, timer: Timer, delay_ms: u32) -> Option<TimerId> {
        self.0.borrow_mut().set_timer(timer, delay_ms)
    }

    fn clear_timer(&mut self, id: TimerId) {
        self.0.borrow_mut().clear_timer(id);
    }

    fn viewport(&self) -> Vec2 {
        self.0.borrow().viewport()
    }

    fn element_bounds(&self) -> Bounds {
        self.0.borrow().element_bounds()
    }

    fn place_layer(&mut self, index: usize, position: &LayerPosition) {
        self.0.borrow_mut().place_layer(index, position);
    }
}

pub fn mobile() -> Capabilities {
    Capabilities {
        desktop: false,
        orientation_events: true,
        motion_events: true,
        transform: TransformSupport::ThreeD,
    }
}

pub fn effect(config: Config, capabilities: Capabilities) -> Parallax<MockHost> {
    let host = MockHost::new(Vec2::new(800.0, 600.0), Bounds::new(0.0, 0.0, 200.0, 100.0));
    let mut fx = Parallax::new(config, capabilities, host);
    fx.set_layers([Layer::new(0.0, 0.0), Layer::new(1.0, 1.0), Layer::new(0.5, 2.0)]);
    fx.initialise();
    fx
}

/// Deliver the pending frame, if any.
pub fn run_frame(fx: &mut Parallax<MockHost>) -> bool {
    match fx.host_mut().frames.pop() {
        Some(_) => {
            fx.on_frame();
            true
        }
        None => false,
    }
}

/// Deliver the first queued timer of the given kind, if any.
pub fn fire_timer(fx: &mut Parallax<MockHost>, timer: Timer) -> bool {
    let pos = fx.host().timers.iter().position(|(_, t, _)| *t == timer);
    match pos {
        Some(i) => {
            fx.host_mut().timers.remove(i);
            fx.on_timer(timer);
            true
        }
        None => false,
    }
}
