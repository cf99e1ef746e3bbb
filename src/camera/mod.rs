mod cameras;
mod config;
mod constants;
mod picking;
mod rig;

use bevy::prelude::*;

use cameras::CamerasPlugin;
use config::CameraConfigPlugin;
pub use config::CameraConfig;
pub use picking::HoveredStar;
use picking::clear_hovered_star;
use picking::update_hovered_star;
pub use rig::CameraMode;
pub use rig::CameraRig;

use crate::schedule::FrameSet;
use crate::state::ViewState;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(CameraConfigPlugin)
            .add_plugins(CamerasPlugin)
            .init_resource::<HoveredStar>()
            .add_systems(
                Update,
                update_hovered_star.in_set(FrameSet::SceneUpdates),
            )
            .add_systems(OnExit(ViewState::Mounted), clear_hovered_star);
    }
}
