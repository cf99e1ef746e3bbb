use bevy::prelude::*;

/// Extension trait for `Transform` to provide more concise construction methods
pub trait TransformExt {
    /// Creates a `Transform` from translation, rotation, and scale in one call
    fn from_trs(translation: Vec3, rotation: Quat, scale: Vec3) -> Self;
}

impl TransformExt for Transform {
    fn from_trs(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }
}

/// Extension trait for optional star fields that render as zero when absent
pub trait OptionF32Ext {
    /// Returns the value, or `0.0` when it is missing or not finite
    fn or_zero(self) -> f32;
}

impl OptionF32Ext for Option<f32> {
    #[inline]
    fn or_zero(self) -> f32 { self.filter(|value| value.is_finite()).unwrap_or(0.0) }
}
