#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub horizontal: f32,
}

impl TickInput {
    pub fn new(horizontal: f32) -> Self {
        Self { horizontal }
    }

    pub fn idle() -> Self {
        Self::default()
    }

    /// Horizontal axis clamped to [-1, 1]; NaN reads as no input.
    pub fn horizontal_axis(&self) -> f32 {
        if self.horizontal.is_finite() {
            self.horizontal.clamp(-1.0, 1.0)
        } else if self.horizontal.is_nan() {
            0.0
        } else {
            self.horizontal.signum()
        }
    }
}
