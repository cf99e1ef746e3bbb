use super::star::Star;
use super::star::StarId;

pub struct ReferenceStar {
    pub name:           &'static str,
    pub ra:             f32,
    pub dec:            f32,
    pub magnitude:      f32,
    pub color_index:    f32,
    pub spectral_class: &'static str,
}

impl ReferenceStar {
    pub fn to_star(&self, id: u32) -> Star {
        Star {
            id:             Some(StarId::Number(id)),
            name:           Some(self.name.to_string()),
            ra:             Some(self.ra),
            dec:            Some(self.dec),
            magnitude:      Some(self.magnitude),
            color_index:    Some(self.color_index),
            distance:       None,
            spectral_class: Some(self.spectral_class.to_string()),
            cartesian:      None,
        }
    }
}

/// Bright stars with real values, always at the head of every catalog in this order
pub const REFERENCE_STARS: [ReferenceStar; 10] = [
    ReferenceStar {
        name:           "Sirius",
        ra:             6.75,
        dec:            -16.72,
        magnitude:      -1.46,
        color_index:    0.00,
        spectral_class: "A1V",
    },
    ReferenceStar {
        name:           "Canopus",
        ra:             6.4,
        dec:            -52.7,
        magnitude:      -0.74,
        color_index:    0.15,
        spectral_class: "A9II",
    },
    ReferenceStar {
        name:           "Arcturus",
        ra:             14.26,
        dec:            19.18,
        magnitude:      -0.05,
        color_index:    1.23,
        spectral_class: "K1.5III",
    },
    ReferenceStar {
        name:           "Vega",
        ra:             18.62,
        dec:            38.78,
        magnitude:      0.03,
        color_index:    0.00,
        spectral_class: "A0V",
    },
    ReferenceStar {
        name:           "Capella",
        ra:             5.28,
        dec:            45.99,
        magnitude:      0.08,
        color_index:    0.80,
        spectral_class: "G5III",
    },
    ReferenceStar {
        name:           "Rigel",
        ra:             5.24,
        dec:            -8.20,
        magnitude:      0.13,
        color_index:    -0.03,
        spectral_class: "B8Iae",
    },
    ReferenceStar {
        name:           "Procyon",
        ra:             7.65,
        dec:            5.23,
        magnitude:      0.34,
        color_index:    0.42,
        spectral_class: "F5IV-V",
    },
    ReferenceStar {
        name:           "Betelgeuse",
        ra:             5.92,
        dec:            7.41,
        magnitude:      0.50,
        color_index:    1.85,
        spectral_class: "M1-2Ia-Iab",
    },
    ReferenceStar {
        name:           "Achernar",
        ra:             1.63,
        dec:            -57.24,
        magnitude:      0.46,
        color_index:    -0.19,
        spectral_class: "B6Vep",
    },
    ReferenceStar {
        name:           "Altair",
        ra:             19.85,
        dec:            8.87,
        magnitude:      0.77,
        color_index:    0.22,
        spectral_class: "A7V",
    },
];
