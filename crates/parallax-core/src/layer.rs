//! Per-layer offsets and the CSS values that position them.

use crate::config::AttrValue;
use crate::input::TransformSupport;
use glam::{BVec2, Vec2};

/// One visual depth plane. A depth of 0 on an axis keeps the layer static.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Layer {
    pub depth: Vec2,
}

impl Layer {
    pub fn new(depth_x: f32, depth_y: f32) -> Self {
        Self {
            depth: Vec2::new(depth_x, depth_y),
        }
    }

    /// Build from the `depth`, `depth-x` and `depth-y` attributes; an unset
    /// axis falls back to `depth`, then to 0.
    pub fn from_attributes(depth: &AttrValue, depth_x: &AttrValue, depth_y: &AttrValue) -> Self {
        let base = depth.as_number().unwrap_or(0.0);
        Self::new(
            depth_x.as_number().unwrap_or(base) as f32,
            depth_y.as_number().unwrap_or(base) as f32,
        )
    }

    #[inline]
    pub fn offset(&self, velocity: Vec2, invert: BVec2) -> Vec2 {
        let sign = Vec2::select(invert, Vec2::NEG_ONE, Vec2::ONE);
        velocity * self.depth * sign
    }
}

/// Style write for one layer, already formatted for CSS.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayerPosition {
    /// Value for the (possibly vendor-prefixed) `transform` property.
    Transform(String),
    /// Fallback absolute offsets for `left` and `top`.
    Offset { left: String, top: String },
}

impl LayerPosition {
    pub fn new(offset: Vec2, precision: usize, transform: TransformSupport) -> Self {
        let x = css_px(offset.x, precision);
        let y = css_px(offset.y, precision);
        match transform {
            TransformSupport::ThreeD => Self::Transform(format!("translate3d({x},{y},0)")),
            TransformSupport::TwoD => Self::Transform(format!("translate({x},{y})")),
            TransformSupport::None => Self::Offset { left: x, top: y },
        }
    }
}

/// Format a pixel length rounded to `precision` decimal places.
#[inline]
pub fn css_px(value: f32, precision: usize) -> String {
    let v = if value.is_finite() { value } else { 0.0 };
    let text = format!("{v:.precision$}");
    // Anything that rounds to zero is written unsigned, never "-0.0px".
    match text.strip_prefix('-') {
        Some(digits) if digits.bytes().all(|b| b == b'0' || b == b'.') => format!("{digits}px"),
        _ => format!("{text}px"),
    }
}
