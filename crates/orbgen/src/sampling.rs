//! Uniform sampling on and inside spheres.
//!
//! `theta` is the azimuth in `[0, 2π)`, `phi` the polar angle drawn as
//! `acos(2u - 1)` so that directions are uniform over the solid angle.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Unit direction from two uniforms in `[0, 1)`.
pub fn direction_from_uniforms(u_theta: f32, u_phi: f32) -> Vec3 {
    let theta = u_theta * TAU;
    let phi = (2.0 * u_phi - 1.0).clamp(-1.0, 1.0).acos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi)
}

/// Point inside a ball of `radius`, uniform by volume.
///
/// The cube root on the radial uniform compensates for shell volume growing with r².
pub fn point_in_ball_from_uniforms(radius: f32, u_r: f32, u_theta: f32, u_phi: f32) -> Vec3 {
    let r = radius * u_r.cbrt();
    direction_from_uniforms(u_theta, u_phi) * r
}

/// Draws r, then theta, then phi.
pub fn random_point_in_ball<R: Rng + ?Sized>(radius: f32, rng: &mut R) -> Vec3 {
    let u_r: f32 = rng.random();
    let u_theta: f32 = rng.random();
    let u_phi: f32 = rng.random();
    point_in_ball_from_uniforms(radius, u_r, u_theta, u_phi)
}

/// Point on the surface of a sphere of `radius`. Draws phi, then theta.
pub fn random_point_on_sphere<R: Rng + ?Sized>(radius: f32, rng: &mut R) -> Vec3 {
    let u_phi: f32 = rng.random();
    let u_theta: f32 = rng.random();
    direction_from_uniforms(u_theta, u_phi) * radius
}


#[cfg(test)]
mod tests {
    use super::test_rng::ReplayRng;
    use super::*;
    use crate::tools::rng_for;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0, Vec3::new(0.0, 0.0, -1.0))] // south pole
    #[case(0.0, 0.5, Vec3::new(1.0, 0.0, 0.0))] // equator, theta = 0
    #[case(0.25, 0.5, Vec3::new(0.0, 1.0, 0.0))] // equator, theta = π/2
    #[case(0.5, 0.5, Vec3::new(-1.0, 0.0, 0.0))]
    fn direction_matches_spherical_formula(
        #[case] u_theta: f32,
        #[case] u_phi: f32,
        #[case] expected: Vec3,
    ) {
        let dir = direction_from_uniforms(u_theta, u_phi);
        assert!(dir.distance(expected) < 1e-5, "{dir} vs {expected}");
    }

    #[test]
    fn directions_are_unit_length() {
        let mut rng = rng_for(Some(11));
        for _ in 0..1000 {
            let dir = random_point_on_sphere(1.0, &mut rng);
            assert!((dir.length() - 1.0).abs() < 1e-5);
        }
    }

    #[rstest]
    #[case(2.0)]
    #[case(25.0)]
    fn surface_points_sit_on_radius(#[case] radius: f32) {
        let mut rng = rng_for(Some(3));
        for _ in 0..500 {
            let p = random_point_on_sphere(radius, &mut rng);
            assert!((p.length() - radius).abs() < radius * 1e-5);
        }
    }

    #[test]
    fn ball_draws_radius_first() {
        // u_r = 1 would put the point on the surface; 0.125 gives r = radius / 2
        let mut rng = ReplayRng::from_uniforms(&[0.125, 0.0, 0.5]);
        let p = random_point_in_ball(4.0, &mut rng);
        assert!(p.distance(Vec3::new(2.0, 0.0, 0.0)) < 1e-5, "{p}");
    }

    #[test]
    fn surface_draws_phi_first() {
        // phi uniform 0 → south pole, theta irrelevant
        let mut rng = ReplayRng::from_uniforms(&[0.0, 0.25]);
        let p = random_point_on_sphere(3.0, &mut rng);
        assert!(p.distance(Vec3::new(0.0, 0.0, -3.0)) < 1e-5, "{p}");
    }
}
