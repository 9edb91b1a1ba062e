//! Unit types: Dp and conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    /// Converts to whole device pixels, truncating the fractional part.
    pub fn to_int_px(&self, density: f32) -> i32 {
        self.to_px(density) as i32
    }
}
