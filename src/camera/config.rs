use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;

use super::constants::*;

pub struct CameraConfigPlugin;

impl Plugin for CameraConfigPlugin {
    fn build(&self, app: &mut App) {
        let config = CameraConfig::default();
        app.insert_resource(ClearColor(config.clear_color))
            .insert_resource(config);
    }
}

/// Allowed camera distance from the origin. An inverted range is treated as if
/// its ends were swapped.
#[derive(Reflect, Debug, PartialEq, Clone, Copy)]
pub struct ZoomRange {
    pub min: f32,
    pub max: f32,
}

impl ZoomRange {
    pub const fn new(min: f32, max: f32) -> Self { Self { min, max } }

    pub fn clamp(self, zoom: f32) -> f32 { zoom.clamp(self.min.min(self.max), self.max.max(self.min)) }
}

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct CameraConfig {
    pub clear_color:               Color,
    #[inspector(min = 30.0, max = 120.0, display = NumberDisplay::Slider)]
    pub fov_degrees:               f32,
    pub near:                      f32,
    pub far:                       f32,
    pub initial_zoom:              f32,
    pub orbit_zoom:                ZoomRange,
    pub flight_zoom:               ZoomRange,
    /// Radians of rotation per pixel of drag
    #[inspector(min = 0.001, max = 0.05, display = NumberDisplay::Slider)]
    pub rotate_sensitivity:        f32,
    /// Fraction of the current zoom applied per wheel event
    #[inspector(min = 0.01, max = 0.5, display = NumberDisplay::Slider)]
    pub zoom_step:                 f32,
    /// Fraction of the remaining distance to target covered each frame
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub smoothing:                 f32,
    /// Free-flight speed in units per second
    #[inspector(min = 0.5, max = 50.0, display = NumberDisplay::Slider)]
    pub base_speed:                f32,
    #[inspector(min = 1.0, max = 20.0, display = NumberDisplay::Slider)]
    pub boost_multiplier:          f32,
    /// How quickly free-flight velocity catches up with the desired velocity, per second
    #[inspector(min = 0.5, max = 20.0, display = NumberDisplay::Slider)]
    pub flight_response:           f32,
    /// Minimum radius of the sphere a hover ray has to hit to pick a star
    #[inspector(min = 0.5, max = 20.0, display = NumberDisplay::Slider)]
    pub pick_radius:               f32,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub bloom_intensity:           f32,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub bloom_low_frequency_boost: f32,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub bloom_high_pass_frequency: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            clear_color:               Color::srgb_u8(0x00, 0x00, 0x11),
            fov_degrees:               CAMERA_FOV_DEGREES,
            near:                      CAMERA_NEAR,
            far:                       CAMERA_FAR,
            initial_zoom:              CAMERA_INITIAL_ZOOM,
            orbit_zoom:                ZoomRange::new(ORBIT_ZOOM_MIN, ZOOM_MAX),
            flight_zoom:               ZoomRange::new(FLIGHT_ZOOM_MIN, ZOOM_MAX),
            rotate_sensitivity:        0.01,
            zoom_step:                 0.1,
            smoothing:                 0.1,
            base_speed:                5.0,
            boost_multiplier:          10.0,
            flight_response:           4.0,
            pick_radius:               3.0,
            bloom_intensity:           0.3,
            bloom_low_frequency_boost: 0.5,
            bloom_high_pass_frequency: 0.5,
        }
    }
}

impl CameraConfig {
    pub const fn boosted_speed(&self) -> f32 { self.base_speed * self.boost_multiplier }
}
