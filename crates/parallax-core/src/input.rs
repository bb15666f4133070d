//! Input sources: sensor and pointer events mapped to a normalized 2D signal.

use crate::constants::{MOBILE_AGENT_MARKERS, ROTATION_DIVISOR};
use crate::geometry::Frame;
use glam::Vec2;

/// The three mutually exclusive ways the effect can be driven.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputStrategy {
    Orientation,
    Motion,
    Pointer,
}

/// Best transform mechanism available for positioning layers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransformSupport {
    ThreeD,
    TwoD,
    #[default]
    None,
}

/// Host capabilities, detected once per page and shared by every effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub desktop: bool,
    pub orientation_events: bool,
    pub motion_events: bool,
    pub transform: TransformSupport,
}

impl Capabilities {
    /// Pointer-only desktop environment with full transform support.
    pub fn desktop() -> Self {
        Self {
            desktop: true,
            orientation_events: false,
            motion_events: false,
            transform: TransformSupport::ThreeD,
        }
    }
}

/// True when the user agent does not look like a handheld device.
pub fn is_desktop_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    !MOBILE_AGENT_MARKERS.iter().any(|m| ua.contains(m))
}

/// Liveness of one sensor source.
///
/// A source starts out `available` when the host exposes its API and is
/// demoted when the support probe finds no valid event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SensorStatus {
    pub available: bool,
    pub seen: bool,
}

impl SensorStatus {
    pub fn new(available: bool) -> Self {
        Self {
            available,
            seen: false,
        }
    }
}

/// Pick the highest-priority strategy the environment supports.
pub fn select_strategy(
    desktop: bool,
    orientation: SensorStatus,
    motion: SensorStatus,
) -> InputStrategy {
    if !desktop && orientation.available {
        InputStrategy::Orientation
    } else if !desktop && motion.available {
        InputStrategy::Motion
    } else {
        InputStrategy::Pointer
    }
}

/// Convert a (beta, gamma) reading in degrees to raw input.
///
/// Returns `None` unless both angles are present.
#[inline]
pub fn rotation_input(beta: Option<f64>, gamma: Option<f64>) -> Option<Vec2> {
    let (beta, gamma) = (beta?, gamma?);
    let v = Vec2::new(beta as f32, gamma as f32) / ROTATION_DIVISOR;
    v.is_finite().then_some(v)
}

/// How pointer coordinates are normalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerMode {
    Window,
    Element { clip: bool },
}

impl PointerMode {
    pub fn new(relative: bool, clip: bool) -> Self {
        if relative {
            Self::Element { clip }
        } else {
            Self::Window
        }
    }
}

/// Map a client-space pointer position to raw input.
pub fn pointer_input(client: Vec2, mode: PointerMode, element: &Frame, window: &Frame) -> Vec2 {
    match mode {
        PointerMode::Window => window.normalize(client),
        PointerMode::Element { clip } => {
            let p = if clip {
                element.bounds.clip(client)
            } else {
                client
            };
            element.normalize(p)
        }
    }
}
