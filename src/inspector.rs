use bevy::input::common_conditions::input_toggle_active;
use bevy::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use crate::camera::CameraConfig;
use crate::catalog::CatalogConfig;
use crate::global_input::GlobalAction;
use crate::scene::SceneConfig;

/// Live editors for each config resource, hidden until their function key is pressed
pub struct InspectorPlugin;

impl Plugin for InspectorPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            ResourceInspectorPlugin::<CameraConfig>::default()
                .run_if(input_toggle_active(false, GlobalAction::CameraConfigInspector.key())),
        )
        .add_plugins(
            ResourceInspectorPlugin::<SceneConfig>::default()
                .run_if(input_toggle_active(false, GlobalAction::SceneConfigInspector.key())),
        )
        .add_plugins(
            ResourceInspectorPlugin::<CatalogConfig>::default()
                .run_if(input_toggle_active(false, GlobalAction::CatalogConfigInspector.key())),
        );
    }
}
