//! Cosmos Starfield - an interactive 3D star field built with Bevy
//!
//! - Ten bright reference stars plus a randomly generated catalog
//! - RA/Dec projected onto a spherical shell, colored by spectral class
//! - Orbit and free-flight camera with hover picking
//! - Bevy Remote Protocol (BRP) support for debugging

mod camera;
mod catalog;
mod global_input;
mod hud;
mod inspector;
mod scene;
mod schedule;
mod state;
mod traits;

use bevy::prelude::*;
use bevy_brp_extras::BrpExtrasPlugin;
use bevy_inspector_egui::bevy_egui::EguiPlugin;

use crate::camera::CameraPlugin;
use crate::catalog::CatalogPlugin;
use crate::hud::HudPlugin;
use crate::inspector::InspectorPlugin;
use crate::scene::ScenePlugin;
use crate::schedule::SchedulePlugin;
use crate::state::StatePlugin;

/// Canvas the wasm build renders into
#[cfg(target_arch = "wasm32")]
const MOUNT_CANVAS: &str = "#cosmos-mount";

fn main() {
    let mut app = App::new();

    // Get effective port from BrpExtrasPlugin to include in window title if non-default
    let brp_plugin = BrpExtrasPlugin::default();
    let (effective_port, _) = brp_plugin.get_effective_port();
    let window_title = if effective_port == bevy_brp_extras::DEFAULT_REMOTE_PORT {
        "Cosmos Star Catalog".to_string()
    } else {
        format!("Cosmos Star Catalog - {effective_port}")
    };

    // closing is routed through `ViewState::Unmounted` so the star field is released first
    #[cfg(not(target_arch = "wasm32"))]
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: window_title,
            ..default()
        }),
        close_when_requested: false,
        ..default()
    }));

    #[cfg(target_arch = "wasm32")]
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: window_title,
            canvas: Some(MOUNT_CANVAS.to_string()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: true,
            ..default()
        }),
        close_when_requested: false,
        ..default()
    }));

    app.add_plugins((
        EguiPlugin::default(),
        brp_plugin,
        CameraPlugin,
        CatalogPlugin,
        HudPlugin,
        InspectorPlugin,
        ScenePlugin,
        SchedulePlugin,
        StatePlugin,
    ))
    .run();
}
