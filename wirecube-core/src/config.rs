/// Tunable constants for the cube rotator

/// Initial cube extent and the fixed per-key rotation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatorConfig {
    /// Lower corner coordinate on every axis
    pub min: f64,
    /// Upper corner coordinate on every axis
    pub max: f64,
    /// Rotation applied per key press, in radians
    pub step: f64,
    /// Uniform scale used by the orthographic projection
    pub scale: f64,
}

impl RotatorConfig {
    pub const DEFAULT_MIN: f64 = 100.0;
    pub const DEFAULT_MAX: f64 = 200.0;
    pub const DEFAULT_STEP: f64 = std::f64::consts::PI / 36.0; // 5 degrees
    pub const DEFAULT_SCALE: f64 = 0.8;
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
            step: Self::DEFAULT_STEP,
            scale: Self::DEFAULT_SCALE,
        }
    }
}
