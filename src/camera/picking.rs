use bevy::math::bounding::BoundingSphere;
use bevy::math::bounding::RayCast3d;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::config::CameraConfig;
use super::rig::CameraRig;
use crate::scene::StarField;
use crate::scene::StarPoint;

/// Catalog index of the star under the cursor
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HoveredStar(pub Option<usize>);

/// The closest star sphere the ray enters, among `(index, center, radius)` candidates
pub fn nearest_hit(
    ray: Ray3d,
    max_distance: f32,
    candidates: impl IntoIterator<Item = (usize, Vec3, f32)>,
) -> Option<usize> {
    let cast = RayCast3d::from_ray(ray, max_distance);
    candidates
        .into_iter()
        .filter_map(|(index, center, radius)| {
            cast.sphere_intersection_at(&BoundingSphere::new(center, radius))
                .map(|distance| (index, distance))
        })
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(index, _)| index)
}

/// Star positions are composed from local transforms. Stars spawned on mount have not been
/// through transform propagation yet, so their `GlobalTransform` still reads as the origin.
pub fn update_hovered_star(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &Transform), With<CameraRig>>,
    fields: Query<&Transform, (With<StarField>, Without<CameraRig>)>,
    stars: Query<(&StarPoint, &Transform), Without<StarField>>,
    config: Res<CameraConfig>,
    mut hovered: ResMut<HoveredStar>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    // the camera is never parented, so its local transform is already in world space
    let camera_transform = GlobalTransform::from(*camera_transform);
    let field_transform = fields.single().copied().unwrap_or_default();

    let picked = window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world(&camera_transform, cursor).ok())
        .and_then(|ray| {
            nearest_hit(
                ray,
                config.far,
                stars.iter().map(|(star, transform)| {
                    let world = field_transform.mul_transform(*transform);
                    (
                        star.catalog_index,
                        world.translation,
                        world.scale.x.max(config.pick_radius),
                    )
                }),
            )
        });

    if hovered.set_if_neq(HoveredStar(picked)) {
        debug!("hovered star: {picked:?}");
    }
}

pub fn clear_hovered_star(mut hovered: ResMut<HoveredStar>) { hovered.0 = None; }
