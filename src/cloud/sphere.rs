use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

pub const SPHERE_RADIUS: f32 = 8.0;

/// Maps two uniform variates in [0, 1) to a point on the sphere. Taking the
/// polar angle from `acos(2v - 1)` keeps the area density uniform.
pub fn sphere_point(u: f32, v: f32, radius: f32) -> Vec3 {
    let theta = TAU * u;
    let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

pub fn generate_sphere_positions<R: Rng + ?Sized>(
    count: usize,
    radius: f32,
    rng: &mut R,
) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let u: f32 = rng.random();
            let v: f32 = rng.random();
            sphere_point(u, v, radius)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;

    #[test]
    fn test_positions_lie_on_sphere() {
        let mut rng = StdRng::seed_from_u64(42);
        for count in [0, 1, 3, 250] {
            let positions = generate_sphere_positions(count, SPHERE_RADIUS, &mut rng);
            assert_eq!(positions.len(), count);
            for p in &positions {
                assert!((p.length() - SPHERE_RADIUS).abs() < 1e-4, "{p:?} off the sphere");
            }
        }
    }

    #[test]
    fn test_positions_are_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        let positions = generate_sphere_positions(100, SPHERE_RADIUS, &mut rng);
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_poles_and_equator() {
        let north = sphere_point(0.0, 1.0, 2.0);
        assert!((north - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-5);

        let south = sphere_point(0.3, 0.0, 2.0);
        assert!((south - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-5);

        let equator = sphere_point(0.25, 0.5, 2.0);
        assert!((equator - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_hemispheres_are_balanced() {
        // Uniform area density puts about half the points above the equator
        let mut rng = StdRng::seed_from_u64(1234);
        let positions = generate_sphere_positions(4000, 1.0, &mut rng);
        let upper = positions.iter().filter(|p| p.z > 0.0).count();
        assert!((1800..=2200).contains(&upper), "upper hemisphere held {upper}");

        // Within |z| < 0.5 is half the surface area of a unit sphere
        let band = positions.iter().filter(|p| p.z.abs() < 0.5).count();
        assert!((1800..=2200).contains(&band), "equatorial band held {band}");
    }
}
