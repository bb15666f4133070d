//! Element and window geometry used to normalize pointer input.

use glam::Vec2;

/// Axis-aligned rectangle in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub position: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Clamp a client point into the rectangle.
    #[inline]
    pub fn clip(&self, point: Vec2) -> Vec2 {
        let max = self.position + self.size.max(Vec2::ZERO);
        point.max(self.position).min(max)
    }
}

/// Origin-weighted center and radius of a rectangle.
///
/// The radius on each axis is the larger of the two distances from the center
/// to an edge, so a normalized point at either edge maps to at most 1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Frame {
    pub bounds: Bounds,
    pub center: Vec2,
    pub radius: Vec2,
}

impl Frame {
    pub fn new(bounds: Bounds, origin: Vec2) -> Self {
        let center = bounds.size * origin;
        let radius = center.max(bounds.size - center);
        Self {
            bounds,
            center,
            radius,
        }
    }

    /// Frame for a viewport of the given size anchored at (0, 0).
    pub fn viewport(size: Vec2, origin: Vec2) -> Self {
        Self::new(
            Bounds {
                position: Vec2::ZERO,
                size,
            },
            origin,
        )
    }

    /// Map a client point into the frame's normalized [-1, 1] space.
    ///
    /// An axis with a zero radius (an empty element) maps to 0 instead of
    /// producing NaN.
    #[inline]
    pub fn normalize(&self, client: Vec2) -> Vec2 {
        let offset = client - self.bounds.position - self.center;
        Vec2::new(
            safe_div(offset.x, self.radius.x),
            safe_div(offset.y, self.radius.y),
        )
    }

    #[inline]
    pub fn is_portrait(&self) -> bool {
        self.bounds.size.y > self.bounds.size.x
    }
}

#[inline]
fn safe_div(numerator: f32, denominator: f32) -> f32 {
    if denominator == 0.0 || !denominator.is_finite() {
        0.0
    } else {
        numerator / denominator
    }
}
