use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;

use super::projector::Shell;
use crate::traits::OptionF32Ext;

/// Magnitude at which stars stop shrinking - roughly the naked-eye limit
const FAINTEST_MAGNITUDE: f32 = 7.0;

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct SceneConfig {
    #[inspector(min = 10.0, max = 1900.0, display = NumberDisplay::Slider)]
    pub base_radius:         f32,
    #[inspector(min = 0.0, max = 500.0, display = NumberDisplay::Slider)]
    pub radius_jitter:       f32,
    /// Seed for the radius jitter; `None` uses the thread rng
    pub seed:                Option<u64>,
    #[inspector(min = 0.1, max = 10.0, display = NumberDisplay::Slider)]
    pub star_size:           f32,
    #[inspector(min = 0.0, max = 0.5, display = NumberDisplay::Slider)]
    pub magnitude_size_gain: f32,
    #[inspector(min = 0.0, max = 20.0, display = NumberDisplay::Slider)]
    pub emissive_strength:   f32,
    /// Radians about +Y per rendered frame
    #[inspector(min = 0.0, max = 0.01, display = NumberDisplay::Slider)]
    pub rotation_per_frame:  f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            base_radius:         400.0,
            radius_jitter:       100.0,
            seed:                None,
            star_size:           1.5,
            magnitude_size_gain: 0.08,
            emissive_strength:   4.0,
            rotation_per_frame:  0.0007,
        }
    }
}

impl SceneConfig {
    pub const fn shell(&self) -> Shell {
        Shell {
            base_radius:   self.base_radius,
            radius_jitter: self.radius_jitter,
        }
    }

    /// Brighter (lower magnitude) stars are drawn larger
    pub fn point_size(&self, magnitude: Option<f32>) -> f32 {
        let brightness = (FAINTEST_MAGNITUDE - magnitude.or_zero()).max(0.0);
        self.star_size * brightness.mul_add(self.magnitude_size_gain, 1.0)
    }
}
