use rand::prelude::*;

use super::reference::REFERENCE_STARS;
use super::star::Star;
use super::star::StarId;

pub const SPECTRAL_CLASSES: [&str; 7] = ["O", "B", "A", "F", "G", "K", "M"];

pub const RA_RANGE_HOURS: std::ops::Range<f32> = 0.0..24.0;
pub const DEC_RANGE_DEGREES: std::ops::RangeInclusive<f32> = -90.0..=90.0;
pub const MAGNITUDE_RANGE: std::ops::Range<f32> = -1.0..7.0;
/// Skewed toward red the same way real B-V values are
pub const COLOR_INDEX_RANGE: std::ops::Range<f32> = -0.6..1.4;

/// Reference stars followed by `synthetic_count` random ones
pub fn generate<R: Rng + ?Sized>(synthetic_count: usize, rng: &mut R) -> Vec<Star> {
    let mut stars = Vec::with_capacity(REFERENCE_STARS.len() + synthetic_count);

    stars.extend(
        REFERENCE_STARS
            .iter()
            .zip(0_u32..)
            .map(|(reference, id)| reference.to_star(id)),
    );

    let first_synthetic_id = u32::try_from(REFERENCE_STARS.len()).unwrap_or(u32::MAX);
    stars.extend(
        (0..synthetic_count)
            .zip(first_synthetic_id..)
            .map(|(index, id)| synthetic_star(index, id, rng)),
    );

    stars
}

fn synthetic_star<R: Rng + ?Sized>(index: usize, id: u32, rng: &mut R) -> Star {
    Star {
        id:             Some(StarId::Number(id)),
        name:           Some(format!("Star-{index}")),
        ra:             Some(rng.random_range(RA_RANGE_HOURS)),
        dec:            Some(rng.random_range(DEC_RANGE_DEGREES)),
        magnitude:      Some(rng.random_range(MAGNITUDE_RANGE)),
        color_index:    Some(rng.random_range(COLOR_INDEX_RANGE)),
        distance:       None,
        spectral_class: Some(
            SPECTRAL_CLASSES[rng.random_range(0..SPECTRAL_CLASSES.len())].to_string(),
        ),
        cartesian:      None,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn zero_synthetic_is_exactly_the_reference_stars() {
        let stars = generate(0, &mut StdRng::seed_from_u64(1));

        assert_eq!(stars.len(), 10);
        let names: Vec<_> = stars.iter().filter_map(|s| s.name.as_deref()).collect();
        assert_eq!(
            names,
            [
                "Sirius",
                "Canopus",
                "Arcturus",
                "Vega",
                "Capella",
                "Rigel",
                "Procyon",
                "Betelgeuse",
                "Achernar",
                "Altair"
            ]
        );

        let sirius = &stars[0];
        assert_eq!(sirius.id, Some(StarId::Number(0)));
        assert_eq!(sirius.ra, Some(6.75));
        assert_eq!(sirius.dec, Some(-16.72));
        assert_eq!(sirius.magnitude, Some(-1.46));
        assert_eq!(sirius.color_index, Some(0.0));
        assert_eq!(sirius.spectral_class.as_deref(), Some("A1V"));
    }

    #[test]
    fn reference_stars_do_not_depend_on_the_rng() {
        let a = generate(5, &mut StdRng::seed_from_u64(1));
        let b = generate(5, &mut StdRng::seed_from_u64(2));

        assert_eq!(a[..10], b[..10]);
        assert_ne!(a[10..], b[10..]);
    }

    #[test]
    fn synthetic_stars_are_in_range() {
        let stars = generate(500, &mut StdRng::seed_from_u64(42));
        assert_eq!(stars.len(), 510);

        for (index, star) in stars[10..].iter().enumerate() {
            assert_eq!(star.id, Some(StarId::Number(u32::try_from(index + 10).unwrap())));
            assert_eq!(star.name, Some(format!("Star-{index}")));

            let ra = star.ra.unwrap();
            let dec = star.dec.unwrap();
            let magnitude = star.magnitude.unwrap();
            let color_index = star.color_index.unwrap();
            assert!((0.0..24.0).contains(&ra), "ra {ra}");
            assert!((-90.0..=90.0).contains(&dec), "dec {dec}");
            assert!((-1.0..7.0).contains(&magnitude), "magnitude {magnitude}");
            assert!((-0.6..1.4).contains(&color_index), "color index {color_index}");

            let class = star.spectral_class.as_deref().unwrap();
            assert!(SPECTRAL_CLASSES.contains(&class), "class {class}");
        }
    }

    #[test]
    fn same_seed_same_catalog() {
        assert_eq!(
            generate(20, &mut StdRng::seed_from_u64(9)),
            generate(20, &mut StdRng::seed_from_u64(9))
        );
    }
}
