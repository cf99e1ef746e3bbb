use std::collections::HashMap;
use std::f64::consts::TAU;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::config::SceneConfig;
use super::projector::ProjectedStar;
use super::projector::project;
use super::tint::StarTint;
use crate::catalog::StarCatalog;
use crate::schedule::FrameClock;
use crate::traits::TransformExt;

/// Output of the projector for the mounted catalog, index-aligned with `StarCatalog`
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct ProjectedStars(pub Vec<ProjectedStar>);

/// Parent of every rendered star; rotating it rotates the whole field
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct StarField;

#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub struct StarPoint {
    pub catalog_index: usize,
}

/// GPU-side resources owned by the mounted star field
#[derive(Debug)]
pub struct SurfaceHandles {
    pub mesh:      Handle<Mesh>,
    pub materials: HashMap<StarTint, Handle<StandardMaterial>>,
}

#[derive(Resource, Debug, Default)]
pub struct StarSurface {
    handles:  Option<SurfaceHandles>,
    releases: u32,
}

impl StarSurface {
    pub fn install(&mut self, handles: SurfaceHandles) { self.handles = Some(handles); }

    /// Hands the handles back for removal the first time; afterwards there is nothing to release
    pub fn release(&mut self) -> Option<SurfaceHandles> {
        let handles = self.handles.take();
        if handles.is_some() {
            self.releases += 1;
        }
        handles
    }

    pub const fn releases(&self) -> u32 { self.releases }
}

#[cfg(test)]
impl StarSurface {
    pub const fn is_installed(&self) -> bool { self.handles.is_some() }
}

pub fn project_catalog(
    mut commands: Commands,
    catalog: Res<StarCatalog>,
    config: Res<SceneConfig>,
) {
    let shell = config.shell();
    let projected = match config.seed {
        Some(seed) => project(&catalog, shell, &mut StdRng::seed_from_u64(seed)),
        None => project(&catalog, shell, &mut rand::rng()),
    };
    commands.insert_resource(ProjectedStars(projected));
}

/// Spawn the field with all components at once to avoid archetype changes after spawn
pub fn spawn_star_field(
    mut commands: Commands,
    windows: Query<(), With<PrimaryWindow>>,
    catalog: Res<StarCatalog>,
    projected: Res<ProjectedStars>,
    config: Res<SceneConfig>,
    mut surface: ResMut<StarSurface>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if windows.is_empty() {
        warn!("no primary window to render into, skipping star field");
        return;
    }

    let mesh = meshes.add(Sphere::new(1.));
    let tint_materials: HashMap<_, _> = StarTint::ALL
        .iter()
        .map(|&tint| (tint, materials.add(star_material(tint, config.emissive_strength))))
        .collect();

    commands
        .spawn((
            StarField,
            Name::new("Star Field"),
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|field| {
            for (catalog_index, (star, projected)) in catalog.iter().zip(&projected.0).enumerate() {
                let material = tint_materials
                    .get(&projected.tint)
                    .cloned()
                    .unwrap_or_default();
                let size = config.point_size(star.magnitude);

                field.spawn((
                    StarPoint { catalog_index },
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material),
                    Transform::from_trs(projected.position, Quat::IDENTITY, Vec3::splat(size)),
                ));
            }
        });

    debug!("spawned star field with {} stars", projected.0.len());
    surface.install(SurfaceHandles {
        mesh,
        materials: tint_materials,
    });
}

fn star_material(tint: StarTint, emissive_strength: f32) -> StandardMaterial {
    let linear = tint.color().to_linear();
    StandardMaterial {
        base_color: tint.color(),
        emissive: LinearRgba::rgb(
            linear.red * emissive_strength,
            linear.green * emissive_strength,
            linear.blue * emissive_strength,
        ),
        unlit: true,
        ..default()
    }
}

pub fn release_star_field(
    mut commands: Commands,
    fields: Query<Entity, With<StarField>>,
    mut surface: ResMut<StarSurface>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for entity in &fields {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<ProjectedStars>();

    if let Some(handles) = surface.release() {
        meshes.remove(&handles.mesh);
        for handle in handles.materials.values() {
            materials.remove(handle);
        }
        debug!("released star field surface (release #{})", surface.releases());
    }
}

pub fn rotate_star_field(
    clock: Res<FrameClock>,
    config: Res<SceneConfig>,
    mut fields: Query<&mut Transform, With<StarField>>,
) {
    let rotation = Quat::from_rotation_y(field_angle(clock.frames, config.rotation_per_frame));
    for mut transform in &mut fields {
        transform.rotation = rotation;
    }
}

/// Derived from the frame count rather than accumulated, so a freshly mounted field
/// always starts at angle zero
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    reason = "wrapped to a single turn before narrowing"
)]
pub fn field_angle(frames: u64, rotation_per_frame: f32) -> f32 {
    (frames as f64 * f64::from(rotation_per_frame)).rem_euclid(TAU) as f32
}
