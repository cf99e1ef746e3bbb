/// Vertical field of view
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 10_000.0;

/// Starting distance from the origin - just outside the star shell
pub const CAMERA_INITIAL_ZOOM: f32 = 500.0;

pub const ORBIT_ZOOM_MIN: f32 = 10.0;
/// Free flight keeps the camera further out so the shell doesn't collapse onto the screen
pub const FLIGHT_ZOOM_MIN: f32 = 100.0;
pub const ZOOM_MAX: f32 = 2000.0;
