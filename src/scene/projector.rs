use bevy::prelude::*;
use rand::prelude::*;

use super::tint::StarTint;
use crate::catalog::Star;
use crate::traits::OptionF32Ext;

/// Degrees of right ascension per hour
const DEGREES_PER_HOUR: f32 = 15.0;

/// Stars sit on a spherical shell around the origin. The jitter is only there
/// so the field doesn't read as a flat backdrop - it carries no distance information.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shell {
    pub base_radius:   f32,
    pub radius_jitter: f32,
}

impl Shell {
    fn sample_radius<R: Rng + ?Sized>(self, rng: &mut R) -> f32 {
        if self.radius_jitter > 0.0 {
            self.base_radius + rng.random_range(0.0..self.radius_jitter)
        } else {
            self.base_radius
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedStar {
    pub position: Vec3,
    pub tint:     StarTint,
}

/// One projected star per catalog entry, in catalog order
pub fn project<R: Rng + ?Sized>(stars: &[Star], shell: Shell, rng: &mut R) -> Vec<ProjectedStar> {
    stars
        .iter()
        .map(|star| ProjectedStar {
            position: star_position(star, shell, rng),
            tint:     StarTint::from_spectral_class(star.spectral_class.as_deref()),
        })
        .collect()
}

fn star_position<R: Rng + ?Sized>(star: &Star, shell: Shell, rng: &mut R) -> Vec3 {
    if let Some(position) = star.cartesian {
        // same rule as the spherical fields: non-finite components read as zero
        return Vec3::select(position.is_finite_mask(), position, Vec3::ZERO);
    }

    let ra = (star.ra.or_zero() * DEGREES_PER_HOUR).to_radians();
    let dec = star.dec.or_zero().to_radians();
    let radius = shell.sample_radius(rng);

    Vec3::new(
        radius * dec.cos() * ra.cos(),
        radius * dec.sin(),
        radius * dec.cos() * ra.sin(),
    )
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;

    use super::*;
    use crate::catalog::generate;

    const SHELL: Shell = Shell {
        base_radius:   400.0,
        radius_jitter: 100.0,
    };

    fn star_at(ra: f32, dec: f32) -> Star {
        Star {
            ra: Some(ra),
            dec: Some(dec),
            ..default()
        }
    }

    #[test]
    fn origin_star_lands_on_positive_x() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let projected = project(&[star_at(0.0, 0.0)], SHELL, &mut rng);
            assert_eq!(projected.len(), 1);
            let Vec3 { x, y, z } = projected[0].position;
            assert!((400.0..500.0).contains(&x), "radius {x}");
            assert!(y.abs() < 1e-4);
            assert!(z.abs() < 1e-4);
        }
    }

    #[test]
    fn missing_fields_behave_like_zero() {
        let mut rng = StdRng::seed_from_u64(5);
        let projected = project(&[Star::default()], SHELL, &mut rng);

        assert!(projected[0].position.y.abs() < 1e-4);
        assert!(projected[0].position.z.abs() < 1e-4);
        assert_eq!(projected[0].tint, StarTint::White);
    }

    #[test]
    fn poles_and_six_hours() {
        let shell = Shell {
            base_radius:   450.0,
            radius_jitter: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(5);
        let projected = project(
            &[star_at(0.0, 90.0), star_at(3.0, -90.0), star_at(6.0, 0.0)],
            shell,
            &mut rng,
        );

        assert!(projected[0].position.distance(Vec3::new(0.0, 450.0, 0.0)) < 1e-2);
        assert!(projected[1].position.distance(Vec3::new(0.0, -450.0, 0.0)) < 1e-2);
        assert!(projected[2].position.distance(Vec3::new(0.0, 0.0, 450.0)) < 1e-2);
    }

    #[test]
    fn cartesian_override_bypasses_projection() {
        let star = Star {
            ra: Some(12.0),
            dec: Some(45.0),
            cartesian: Some(Vec3::new(1.0, 2.0, 3.0)),
            ..default()
        };
        let projected = project(&[star], SHELL, &mut StdRng::seed_from_u64(5));

        assert_eq!(projected[0].position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn non_finite_cartesian_components_read_as_zero() {
        let star = Star {
            cartesian: Some(Vec3::new(f32::NAN, 1.0, f32::INFINITY)),
            ..default()
        };
        let projected = project(&[star], SHELL, &mut StdRng::seed_from_u64(5));

        assert_eq!(projected[0].position, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn preserves_catalog_order() {
        let mut rng = StdRng::seed_from_u64(11);
        let stars = generate(40, &mut rng);
        let projected = project(&stars, SHELL, &mut rng);

        assert_eq!(projected.len(), stars.len());
        for (star, projected) in stars.iter().zip(&projected) {
            assert_eq!(
                projected.tint,
                StarTint::from_spectral_class(star.spectral_class.as_deref())
            );

            // direction only depends on ra/dec, the radius is the jitter
            let ra = (star.ra.unwrap() * 15.0).to_radians();
            let dec = star.dec.unwrap().to_radians();
            let expected = Vec3::new(dec.cos() * ra.cos(), dec.sin(), dec.cos() * ra.sin());
            assert!(projected.position.normalize().distance(expected) < 1e-3);

            let radius = projected.position.length();
            assert!((399.9..500.1).contains(&radius), "radius {radius}");
        }
    }
}
