use bevy::app::AppExit;
use bevy::dev_tools::states::*;
use bevy::ecs::message::MessageReader;
use bevy::ecs::message::MessageWriter;
use bevy::input::common_conditions::input_just_pressed;
use bevy::prelude::*;
use bevy::window::WindowCloseRequested;

use crate::global_input::GlobalAction;

pub struct StatePlugin;

impl Plugin for StatePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ViewState>()
            .add_systems(PostStartup, mount_on_startup)
            .add_systems(
                Update,
                (
                    regenerate
                        .run_if(in_state(ViewState::Mounted))
                        .run_if(input_just_pressed(GlobalAction::Regenerate.key())),
                    remount.run_if(in_state(ViewState::Regenerating)),
                    // last, so a close request overrides a pending regenerate
                    unmount_on_close_request,
                )
                    .chain(),
            )
            .add_systems(OnEnter(ViewState::Unmounted), exit_after_unmount)
            .add_systems(Update, log_transitions::<ViewState>);
    }
}

/// Lifecycle of the visualization.
/// `PostStartup` transitions to `Mounted` _after_ the camera is spawned.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Reflect, States)]
pub enum ViewState {
    #[default]
    Launch,
    /// Catalog built, star field spawned, frame sets running
    Mounted,
    /// Passing through so that `OnExit(Mounted)` and `OnEnter(Mounted)` rebuild everything
    Regenerating,
    /// Torn down - nothing renders and the app is exiting
    Unmounted,
}

fn mount_on_startup(mut next_state: ResMut<NextState<ViewState>>) {
    debug!("mounting star field on startup");
    next_state.set(ViewState::Mounted);
}

fn regenerate(mut next_state: ResMut<NextState<ViewState>>) {
    // Regeneration flow (R):
    // 1. Mounted → Regenerating: star field released, catalog dropped
    // 2. Regenerating → Mounted: fresh catalog, fresh projection, fresh star field
    debug!("regenerating star catalog");
    next_state.set(ViewState::Regenerating);
}

fn remount(mut next_state: ResMut<NextState<ViewState>>) { next_state.set(ViewState::Mounted); }

fn unmount_on_close_request(
    mut close_requests: MessageReader<WindowCloseRequested>,
    state: Res<State<ViewState>>,
    mut next_state: ResMut<NextState<ViewState>>,
) {
    if close_requests.read().count() == 0 || *state.get() == ViewState::Unmounted {
        return;
    }
    debug!("close requested, unmounting");
    next_state.set(ViewState::Unmounted);
}

fn exit_after_unmount(mut exit: MessageWriter<AppExit>) {
    debug!("unmounted, exiting");
    exit.write(AppExit::Success);
}

#[cfg(test)]
mod tests {
    use bevy::state::app::StatesPlugin;

    use super::*;
    use crate::catalog::CatalogConfig;
    use crate::catalog::CatalogPlugin;
    use crate::catalog::StarCatalog;
    use crate::schedule::FrameClock;
    use crate::schedule::SchedulePlugin;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_resource::<ButtonInput<KeyCode>>()
            .add_message::<WindowCloseRequested>()
            .add_plugins((StatePlugin, SchedulePlugin, CatalogPlugin))
            .insert_resource(CatalogConfig {
                synthetic_count: 25,
                seed:            Some(7),
            });
        app
    }

    fn frames(app: &App) -> u64 { app.world().resource::<FrameClock>().frames }

    fn state(app: &App) -> ViewState { *app.world().resource::<State<ViewState>>().get() }

    #[test]
    fn first_update_mounts_and_runs_a_frame() {
        let mut app = test_app();
        app.update();

        assert_eq!(state(&app), ViewState::Mounted);
        assert_eq!(frames(&app), 1);
        assert_eq!(app.world().resource::<StarCatalog>().len(), 35);
    }

    #[test]
    fn no_frames_run_after_unmount() {
        let mut app = test_app();
        app.update();
        app.update();

        app.world_mut().write_message(WindowCloseRequested {
            window: Entity::PLACEHOLDER,
        });
        app.update();
        let frames_at_close = frames(&app);

        app.update();
        assert_eq!(state(&app), ViewState::Unmounted);
        assert!(app.world().get_resource::<StarCatalog>().is_none());

        app.update();
        app.update();
        assert_eq!(frames(&app), frames_at_close);
    }

    #[test]
    fn close_request_wins_over_regenerate_in_the_same_frame() {
        let mut app = test_app();
        app.update();

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyR);
        app.world_mut().write_message(WindowCloseRequested {
            window: Entity::PLACEHOLDER,
        });
        app.update();
        app.update();

        assert_eq!(state(&app), ViewState::Unmounted);
        assert!(app.world().get_resource::<StarCatalog>().is_none());
    }

    #[test]
    fn regenerate_rebuilds_catalog_and_resets_clock() {
        let mut app = test_app();
        app.update();
        let original = app.world().resource::<StarCatalog>().clone();

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyR);
        app.update();
        {
            let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keys.release(KeyCode::KeyR);
            keys.clear();
        }

        app.update();
        assert_eq!(state(&app), ViewState::Regenerating);

        app.update();
        assert_eq!(state(&app), ViewState::Mounted);
        assert_eq!(frames(&app), 1);
        // same seed, same catalog
        assert_eq!(*app.world().resource::<StarCatalog>(), original);
    }
}
