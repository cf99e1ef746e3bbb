use std::collections::HashSet;
use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use super::config::CameraConfig;
use super::config::ZoomRange;

#[derive(Reflect, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CameraMode {
    #[default]
    Orbit,
    FreeFlight,
}

impl CameraMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Orbit => "ORBIT",
            Self::FreeFlight => "FLYING",
        }
    }

    pub const fn zoom_range(self, config: &CameraConfig) -> ZoomRange {
        match self {
            Self::Orbit => config.orbit_zoom,
            Self::FreeFlight => config.flight_zoom,
        }
    }
}

/// Free-flight movement, in camera-local directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
}

impl MoveKey {
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Back,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];

    pub const fn local_direction(self) -> Vec3 {
        match self {
            Self::Forward => Vec3::NEG_Z,
            Self::Back => Vec3::Z,
            Self::Left => Vec3::NEG_X,
            Self::Right => Vec3::X,
            Self::Up => Vec3::Y,
            Self::Down => Vec3::NEG_Y,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Flight {
    pub position:     Vec3,
    pub velocity:     Vec3,
    pub acceleration: Vec3,
    pub boosting:     bool,
    pressed:          HashSet<MoveKey>,
}

impl Flight {
    /// Unit vector (or zero) in camera space for the keys currently held
    pub fn thrust_direction(&self) -> Vec3 {
        self.pressed
            .iter()
            .map(|key| key.local_direction())
            .sum::<Vec3>()
            .normalize_or_zero()
    }
}

/// View state for the one camera: orbit angles and zoom, and the free-flight body.
/// Inputs only move the targets; `advance` moves the current values once per frame.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct CameraRig {
    pub mode:         CameraMode,
    pointer_down:     bool,
    last_pointer:     Vec2,
    pub target_pitch: f32,
    pub target_yaw:   f32,
    pub pitch:        f32,
    pub yaw:          f32,
    pub target_zoom:  f32,
    pub zoom:         f32,
    pub flight:       Flight,
}

impl CameraRig {
    pub fn new(config: &CameraConfig) -> Self {
        let zoom = config.orbit_zoom.clamp(config.initial_zoom);
        Self {
            mode: CameraMode::Orbit,
            pointer_down: false,
            last_pointer: Vec2::ZERO,
            target_pitch: 0.0,
            target_yaw: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            target_zoom: zoom,
            zoom,
            flight: Flight::default(),
        }
    }

    pub const fn is_dragging(&self) -> bool { self.pointer_down }

    pub const fn pointer_down(&mut self, position: Vec2) {
        self.pointer_down = true;
        self.last_pointer = position;
    }

    pub const fn pointer_up(&mut self) { self.pointer_down = false; }

    /// Dragging turns the view; plain pointer motion changes nothing here
    pub fn pointer_moved(&mut self, position: Vec2, config: &CameraConfig) {
        if !self.pointer_down {
            return;
        }

        let delta = position - self.last_pointer;
        self.target_yaw += delta.x * config.rotate_sensitivity;
        self.target_pitch =
            (self.target_pitch + delta.y * config.rotate_sensitivity).clamp(-FRAC_PI_2, FRAC_PI_2);
        self.last_pointer = position;
    }

    /// One wheel notch. Positive `delta_y` scrolls down and moves the camera out.
    pub fn wheel(&mut self, delta_y: f32, config: &CameraConfig) {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return;
        }

        let step = self.zoom * config.zoom_step;
        let zoom = if delta_y > 0.0 {
            self.target_zoom + step
        } else {
            self.target_zoom - step
        };
        self.target_zoom = self.mode.zoom_range(config).clamp(zoom);
    }

    pub fn toggle_mode(&mut self, config: &CameraConfig) {
        match self.mode {
            CameraMode::Orbit => {
                self.flight.position = self.orbit_translation();
                self.flight.velocity = Vec3::ZERO;
                self.flight.acceleration = Vec3::ZERO;
                self.mode = CameraMode::FreeFlight;
            },
            CameraMode::FreeFlight => {
                self.flight.velocity = Vec3::ZERO;
                self.flight.acceleration = Vec3::ZERO;
                self.mode = CameraMode::Orbit;
            },
        }

        let range = self.mode.zoom_range(config);
        self.target_zoom = range.clamp(self.target_zoom);
        self.zoom = range.clamp(self.zoom);
    }

    pub fn set_key(&mut self, key: MoveKey, pressed: bool) {
        if pressed {
            self.flight.pressed.insert(key);
        } else {
            self.flight.pressed.remove(&key);
        }
    }

    pub const fn set_boost(&mut self, boosting: bool) { self.flight.boosting = boosting; }

    pub const fn effective_speed(&self, config: &CameraConfig) -> f32 {
        if self.flight.boosting {
            config.boosted_speed()
        } else {
            config.base_speed
        }
    }

    pub fn speed(&self) -> f32 { self.flight.velocity.length() }

    /// Per-frame step: ease rotation and zoom toward their targets, then integrate
    /// free-flight motion when flying
    pub fn advance(&mut self, delta_secs: f32, config: &CameraConfig) {
        let smoothing = config.smoothing.clamp(0.0, 1.0);
        self.pitch += (self.target_pitch - self.pitch) * smoothing;
        self.yaw += (self.target_yaw - self.yaw) * smoothing;
        self.zoom += (self.target_zoom - self.zoom) * smoothing;

        if self.mode == CameraMode::FreeFlight {
            self.integrate_flight(delta_secs, config);
        }
    }

    fn integrate_flight(&mut self, delta_secs: f32, config: &CameraConfig) {
        let desired =
            self.rotation() * self.flight.thrust_direction() * self.effective_speed(config);
        let flight = &mut self.flight;

        flight.acceleration = (desired - flight.velocity) * config.flight_response;
        if config.flight_response * delta_secs >= 1.0 {
            // a long frame would overshoot - land on the desired velocity instead
            flight.velocity = desired;
        } else {
            flight.velocity += flight.acceleration * delta_secs;
        }
        flight.position += flight.velocity * delta_secs;
    }

    pub fn rotation(&self) -> Quat { Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(-self.pitch) }

    /// Orbit position: `zoom` away from the origin along the view's back vector
    pub fn orbit_translation(&self) -> Vec3 { self.rotation() * Vec3::new(0.0, 0.0, self.zoom) }

    pub fn transform(&self) -> Transform {
        let translation = match self.mode {
            CameraMode::Orbit => self.orbit_translation(),
            CameraMode::FreeFlight => self.flight.position,
        };
        Transform::from_translation(translation).with_rotation(self.rotation())
    }
}
