use std::fmt;

use bevy::prelude::*;

/// Catalog identifier: the generator hands out numbers, hand-built catalogs may use labels
#[derive(Reflect, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StarId {
    Number(u32),
    Label(String),
}

impl fmt::Display for StarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

/// A single catalog entry. Every field is optional - the projector and the overlay
/// treat anything missing as zero or simply leave it out.
#[derive(Reflect, Clone, Debug, Default, PartialEq)]
pub struct Star {
    pub id:             Option<StarId>,
    pub name:           Option<String>,
    /// Right ascension in hours, [0, 24)
    pub ra:             Option<f32>,
    /// Declination in degrees, [-90, 90]
    pub dec:            Option<f32>,
    /// Apparent magnitude - lower is brighter
    pub magnitude:      Option<f32>,
    /// B-V color index
    pub color_index:    Option<f32>,
    /// Distance in parsecs
    pub distance:       Option<f32>,
    pub spectral_class: Option<String>,
    /// Direct position, bypassing the RA/Dec projection
    pub cartesian:      Option<Vec3>,
}

impl Star {
    /// Label for the overlay: the name if there is one, otherwise `Star {id}`
    pub fn display_name(&self) -> String {
        match (&self.name, &self.id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => format!("Star {id}"),
            (None, None) => "Star".to_string(),
        }
    }
}
