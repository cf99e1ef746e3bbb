use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::ecs::message::MessageReader;
use bevy::input::common_conditions::input_just_pressed;
use bevy::input::mouse::AccumulatedMouseScroll;
use bevy::post_process::bloom::Bloom;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy::window::WindowResized;

use super::config::CameraConfig;
use super::rig::CameraRig;
use super::rig::MoveKey;
use crate::global_input::GlobalAction;
use crate::schedule::FrameSet;

pub struct CamerasPlugin;

impl Plugin for CamerasPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(
                Update,
                (
                    pointer_input,
                    wheel_zoom,
                    flight_keys,
                    toggle_flight.run_if(input_just_pressed(GlobalAction::ToggleFlight.key())),
                )
                    .in_set(FrameSet::UserInput),
            )
            .add_systems(
                Update,
                (advance_rig, apply_rig)
                    .chain()
                    .in_set(FrameSet::CameraUpdates),
            )
            .add_systems(
                Update,
                (log_resize, update_bloom_settings, update_clear_color),
            );
    }
}

const BOOST_KEYS: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::ShiftRight];

const fn move_key_bindings(key: MoveKey) -> &'static [KeyCode] {
    match key {
        MoveKey::Forward => &[KeyCode::KeyW, KeyCode::ArrowUp],
        MoveKey::Back => &[KeyCode::KeyS, KeyCode::ArrowDown],
        MoveKey::Left => &[KeyCode::KeyA, KeyCode::ArrowLeft],
        MoveKey::Right => &[KeyCode::KeyD, KeyCode::ArrowRight],
        MoveKey::Up => &[KeyCode::KeyQ, KeyCode::Space],
        MoveKey::Down => &[KeyCode::KeyE, KeyCode::ControlLeft, KeyCode::ControlRight],
    }
}

fn spawn_camera(mut commands: Commands, camera_config: Res<CameraConfig>) {
    let rig = CameraRig::new(&camera_config);

    commands.spawn((
        Name::new("Starfield Camera"),
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Default,
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: camera_config.fov_degrees.to_radians(),
            near: camera_config.near,
            far: camera_config.far,
            ..default()
        }),
        Tonemapping::BlenderFilmic,
        get_bloom_settings(&camera_config),
        rig.transform(),
        rig,
    ));
}

fn pointer_input(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_config: Res<CameraConfig>,
    mut rigs: Query<&mut CameraRig>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok(mut rig) = rigs.single_mut() else {
        return;
    };

    let cursor = window.cursor_position();
    if mouse.just_pressed(MouseButton::Left)
        && let Some(position) = cursor
    {
        rig.pointer_down(position);
    }
    if mouse.just_released(MouseButton::Left) {
        rig.pointer_up();
    }
    if let Some(position) = cursor
        && rig.is_dragging()
    {
        rig.pointer_moved(position, &camera_config);
    }
}

fn wheel_zoom(
    scroll: Res<AccumulatedMouseScroll>,
    camera_config: Res<CameraConfig>,
    mut rigs: Query<&mut CameraRig>,
) {
    if scroll.delta.y == 0.0 {
        return;
    }
    let Ok(mut rig) = rigs.single_mut() else {
        return;
    };

    // bevy reports scrolling up as positive; the rig expects scroll-down positive
    rig.wheel(-scroll.delta.y, &camera_config);
}

fn flight_keys(keys: Res<ButtonInput<KeyCode>>, mut rigs: Query<&mut CameraRig>) {
    let Ok(mut rig) = rigs.single_mut() else {
        return;
    };

    for key in MoveKey::ALL {
        rig.set_key(key, keys.any_pressed(move_key_bindings(key).iter().copied()));
    }
    rig.set_boost(keys.any_pressed(BOOST_KEYS));
}

fn toggle_flight(camera_config: Res<CameraConfig>, mut rigs: Query<&mut CameraRig>) {
    if let Ok(mut rig) = rigs.single_mut() {
        rig.toggle_mode(&camera_config);
        debug!("camera mode: {}", rig.mode.label());
    }
}

fn advance_rig(time: Res<Time>, camera_config: Res<CameraConfig>, mut rigs: Query<&mut CameraRig>) {
    for mut rig in &mut rigs {
        rig.advance(time.delta_secs(), &camera_config);
    }
}

fn apply_rig(mut cameras: Query<(&CameraRig, &mut Transform)>) {
    for (rig, mut transform) in &mut cameras {
        *transform = rig.transform();
    }
}

// bevy's camera system owns the aspect ratio of the projection
fn log_resize(mut resized: MessageReader<WindowResized>) {
    if let Some(last) = resized.read().last() {
        debug!("viewport resized to {}x{}", last.width, last.height);
    }
}

// propagate bloom settings back to the camera
fn update_bloom_settings(
    camera_config: Res<CameraConfig>,
    mut q_current_settings: Query<&mut Bloom, With<CameraRig>>,
) {
    if camera_config.is_changed()
        && let Ok(mut old_bloom_settings) = q_current_settings.single_mut()
    {
        *old_bloom_settings = get_bloom_settings(&camera_config);
    }
}

fn get_bloom_settings(camera_config: &CameraConfig) -> Bloom {
    let mut bloom = Bloom::NATURAL;

    bloom.intensity = camera_config.bloom_intensity;
    bloom.low_frequency_boost = camera_config.bloom_low_frequency_boost;
    bloom.high_pass_frequency = camera_config.bloom_high_pass_frequency;
    bloom
}

// this allows us to use Inspector reflection to manually update ClearColor to
// different values while running from the ui_for_resources provided
// by bevy_inspector_egui
fn update_clear_color(camera_config: Res<CameraConfig>, mut clear_color: ResMut<ClearColor>) {
    if camera_config.is_changed() {
        clear_color.0 = camera_config.clear_color;
    }
}

#[cfg(test)]
mod tests {
    use bevy::state::app::StatesPlugin;

    use super::*;
    use crate::camera::CameraMode;
    use crate::camera::CameraPlugin;
    use crate::schedule::SchedulePlugin;
    use crate::state::StatePlugin;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<AccumulatedMouseScroll>()
            .add_message::<WindowResized>()
            .add_message::<bevy::window::WindowCloseRequested>()
            .add_plugins((StatePlugin, SchedulePlugin, CameraPlugin));
        app
    }

    fn rig(app: &mut App) -> CameraRig {
        app.world_mut()
            .query::<&CameraRig>()
            .single(app.world())
            .unwrap()
            .clone()
    }

    #[test]
    fn input_without_window_is_ignored() {
        let mut app = test_app();
        app.update();
        let before = rig(&mut app);

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();

        assert!(!rig(&mut app).is_dragging());
        assert_eq!(rig(&mut app).target_yaw, before.target_yaw);
    }

    #[test]
    fn f_key_toggles_flight_and_keys_drive_the_rig() {
        let mut app = test_app();
        app.update();

        {
            let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keys.press(KeyCode::KeyF);
            keys.press(KeyCode::KeyW);
            keys.press(KeyCode::ShiftLeft);
        }
        app.update();

        let flying = rig(&mut app);
        assert_eq!(flying.mode, CameraMode::FreeFlight);
        assert!(flying.flight.boosting);
        assert_eq!(flying.flight.thrust_direction(), Vec3::NEG_Z);
    }

    #[test]
    fn wheel_moves_target_zoom() {
        let mut app = test_app();
        app.update();

        app.world_mut().resource_mut::<AccumulatedMouseScroll>().delta = Vec2::new(0.0, 1.0);
        app.update();

        assert!((rig(&mut app).target_zoom - 450.0).abs() < 1e-3);
    }

    #[test]
    fn resize_leaves_the_projection_to_the_camera_system() {
        let mut app = test_app();
        app.update();
        let before = rig(&mut app);

        app.world_mut().write_message(WindowResized {
            window: Entity::PLACEHOLDER,
            width:  1600.0,
            height: 800.0,
        });
        app.update();

        let mut cameras = app
            .world_mut()
            .query_filtered::<&Projection, With<CameraRig>>();
        let aspect_ratio = match cameras.single(app.world()).unwrap() {
            Projection::Perspective(perspective) => perspective.aspect_ratio,
            _ => panic!("camera should use a perspective projection"),
        };
        assert!((aspect_ratio - PerspectiveProjection::default().aspect_ratio).abs() < f32::EPSILON);
        assert_eq!(rig(&mut app).target_zoom, before.target_zoom);
    }
}
