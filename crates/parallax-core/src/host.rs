//! The seam between the motion pipeline and the environment that runs it.

use crate::geometry::Bounds;
use crate::input::InputStrategy;
use crate::layer::LayerPosition;
use glam::Vec2;

/// Event streams the effect subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventSource {
    DeviceOrientation,
    DeviceMotion,
    PointerMove,
    Resize,
}

impl EventSource {
    pub fn for_strategy(strategy: InputStrategy) -> Self {
        match strategy {
            InputStrategy::Orientation => Self::DeviceOrientation,
            InputStrategy::Motion => Self::DeviceMotion,
            InputStrategy::Pointer => Self::PointerMove,
        }
    }
}

/// Deferred callbacks the effect schedules on the host clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timer {
    Calibration,
    SupportProbe(InputStrategy),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(pub i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(pub i32);

/// Services the effect needs from its environment.
///
/// All calls happen on the host's UI thread. A host must deliver events,
/// frames and timers back through the matching `on_*` methods of
/// [`crate::Parallax`], and must never deliver a frame or timer whose id has
/// been cancelled.
pub trait Host {
    fn listen(&mut self, source: EventSource);
    fn unlisten(&mut self, source: EventSource);

    /// Schedule the next rendering-frame callback. `None` if the host refused.
    fn request_frame(&mut self) -> Option<FrameId>;
    fn cancel_frame(&mut self, id: FrameId);

    fn set_timer(&mut self, timer: Timer, delay_ms: u32) -> Option<TimerId>;
    fn clear_timer(&mut self, id: TimerId);

    /// Inner size of the window.
    fn viewport(&self) -> Vec2;
    /// Current client rectangle of the effect's root element.
    fn element_bounds(&self) -> Bounds;

    fn place_layer(&mut self, index: usize, position: &LayerPosition);
}
