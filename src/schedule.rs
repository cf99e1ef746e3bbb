use bevy::prelude::*;

use crate::state::ViewState;

/// Per-frame work, in order. Only runs while the visualization is mounted.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FrameSet {
    Tick,
    UserInput,
    CameraUpdates,
    SceneUpdates,
}

/// One-shot work on `OnEnter(ViewState::Mounted)`, in order.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum MountSet {
    Catalog,
    Projection,
    Surface,
}

/// Number of frames rendered since the current star field was mounted
#[derive(Resource, Reflect, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[reflect(Resource)]
pub struct FrameClock {
    pub frames: u64,
}

pub struct SchedulePlugin;

impl Plugin for SchedulePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameClock>()
            .configure_sets(
                Update,
                (
                    FrameSet::Tick,
                    FrameSet::UserInput,
                    FrameSet::CameraUpdates,
                    FrameSet::SceneUpdates,
                )
                    .chain()
                    // this is the whole "should the loop continue" flag - once we leave
                    // `Mounted` nothing in these sets is scheduled again
                    .run_if(in_state(ViewState::Mounted)),
            )
            .configure_sets(
                OnEnter(ViewState::Mounted),
                (MountSet::Catalog, MountSet::Projection, MountSet::Surface).chain(),
            )
            .add_systems(
                OnEnter(ViewState::Mounted),
                reset_frame_clock.in_set(MountSet::Catalog),
            )
            .add_systems(Update, tick_frame_clock.in_set(FrameSet::Tick));
    }
}

fn reset_frame_clock(mut clock: ResMut<FrameClock>) { clock.frames = 0; }

fn tick_frame_clock(mut clock: ResMut<FrameClock>) { clock.frames += 1; }
