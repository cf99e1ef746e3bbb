mod generator;
mod reference;
mod star;

use std::ops::Deref;

use bevy::prelude::*;
use bevy_inspector_egui::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub use generator::generate;
pub use star::Star;
pub use star::StarId;

use crate::schedule::MountSet;
use crate::state::ViewState;

pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CatalogConfig>()
            .add_systems(
                OnEnter(ViewState::Mounted),
                build_catalog.in_set(MountSet::Catalog),
            )
            .add_systems(OnExit(ViewState::Mounted), drop_catalog);
    }
}

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Eq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct CatalogConfig {
    #[inspector(min = 0, max = 5000)]
    pub synthetic_count: usize,
    /// `None` draws from the thread rng, so every regeneration differs
    pub seed:            Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            synthetic_count: 100,
            seed:            None,
        }
    }
}

/// The stars currently on screen. Built on mount and never mutated -
/// regenerating replaces the whole resource.
#[derive(Resource, Debug, Clone, PartialEq, Default)]
pub struct StarCatalog(Vec<Star>);

impl StarCatalog {
    pub fn from_config(config: &CatalogConfig) -> Self {
        let stars = match config.seed {
            Some(seed) => generate(config.synthetic_count, &mut StdRng::seed_from_u64(seed)),
            None => generate(config.synthetic_count, &mut rand::rng()),
        };
        Self(stars)
    }
}

impl Deref for StarCatalog {
    type Target = [Star];

    fn deref(&self) -> &Self::Target { &self.0 }
}

impl From<Vec<Star>> for StarCatalog {
    fn from(stars: Vec<Star>) -> Self { Self(stars) }
}

fn build_catalog(mut commands: Commands, config: Res<CatalogConfig>) {
    let catalog = StarCatalog::from_config(&config);
    debug!("built star catalog with {} stars", catalog.len());
    commands.insert_resource(catalog);
}

fn drop_catalog(mut commands: Commands) {
    debug!("dropping star catalog");
    commands.remove_resource::<StarCatalog>();
}
