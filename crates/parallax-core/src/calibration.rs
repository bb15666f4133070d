use glam::Vec2;

/// Tracks the zero point subtracted from raw sensor input.
///
/// A pending request is satisfied by the next sample passed to
/// [`Calibrator::observe`], which becomes the new reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calibrator {
    reference: Vec2,
    pending: bool,
}

impl Default for Calibrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calibrator {
    /// The first sample after construction always calibrates.
    pub fn new() -> Self {
        Self {
            reference: Vec2::ZERO,
            pending: true,
        }
    }

    #[inline]
    pub fn reference(&self) -> Vec2 {
        self.reference
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[inline]
    pub fn request(&mut self) {
        self.pending = true;
    }

    /// Feed a sample; returns true when it became the new reference.
    pub fn observe(&mut self, sample: Vec2) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        self.reference = sample;
        log::debug!(
            "[calibrate] reference=({:.3},{:.3})",
            sample.x,
            sample.y
        );
        true
    }

    /// Zero the reference without touching a pending request.
    pub fn reset(&mut self) {
        self.reference = Vec2::ZERO;
    }

    #[inline]
    pub fn delta(&self, input: Vec2) -> Vec2 {
        input - self.reference
    }

    /// True when the drift from the reference exceeds `threshold` on either axis.
    #[inline]
    pub fn exceeds(&self, input: Vec2, threshold: f32) -> bool {
        let d = self.delta(input).abs();
        d.x > threshold || d.y > threshold
    }
}
