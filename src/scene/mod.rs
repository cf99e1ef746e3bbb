mod config;
mod projector;
mod star_field;
mod tint;

use bevy::prelude::*;

pub use config::SceneConfig;
pub use star_field::StarField;
pub use star_field::StarPoint;
pub use tint::StarTint;

use crate::schedule::FrameSet;
use crate::schedule::MountSet;
use crate::state::ViewState;
use star_field::StarSurface;
use star_field::project_catalog;
use star_field::release_star_field;
use star_field::rotate_star_field;
use star_field::spawn_star_field;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneConfig>()
            .init_resource::<StarSurface>()
            .add_systems(
                OnEnter(ViewState::Mounted),
                (
                    project_catalog.in_set(MountSet::Projection),
                    spawn_star_field.in_set(MountSet::Surface),
                ),
            )
            .add_systems(OnExit(ViewState::Mounted), release_star_field)
            .add_systems(Update, rotate_star_field.in_set(FrameSet::SceneUpdates));
    }
}
