use bevy::prelude::*;

/// Keyboard actions that are not tied to camera movement
#[derive(Reflect, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlobalAction {
    CameraConfigInspector,
    SceneConfigInspector,
    CatalogConfigInspector,
    Regenerate,
    ToggleFlight,
}

impl GlobalAction {
    /// Pair with `input_just_pressed` / `input_toggle_active` for run conditions
    pub const fn key(self) -> KeyCode {
        match self {
            Self::CameraConfigInspector => KeyCode::F1,
            Self::SceneConfigInspector => KeyCode::F2,
            Self::CatalogConfigInspector => KeyCode::F3,
            Self::Regenerate => KeyCode::KeyR,
            Self::ToggleFlight => KeyCode::KeyF,
        }
    }
}
