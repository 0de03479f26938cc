use crate::motion::Oscillation;
use crate::sampling::random_point_in_ball;
use glam::Vec3;
use rand::Rng;

/// Point cloud inside a sphere, stored flattened as `x, y, z` triples.
///
/// `base` is written once at generation time; `current` is rewritten by
/// [`ParticleField::animate`] and always equals `base + displacement(t)` for
/// the last animated time.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    base: Vec<f32>,
    current: Vec<f32>,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(count: usize, radius: f32, rng: &mut R) -> Self {
        let mut base = Vec::with_capacity(count * 3);
        for _ in 0..count {
            let p = random_point_in_ball(radius, rng);
            base.extend_from_slice(&[p.x, p.y, p.z]);
        }
        let current = base.clone();
        Self { base, current }
    }

    pub fn len(&self) -> usize {
        self.base.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    pub fn base_positions(&self) -> &[f32] {
        &self.base
    }

    pub fn current_positions(&self) -> &[f32] {
        &self.current
    }

    pub fn base_point(&self, index: usize) -> Vec3 {
        Vec3::from_slice(&self.base[index * 3..index * 3 + 3])
    }

    pub fn current_point(&self, index: usize) -> Vec3 {
        Vec3::from_slice(&self.current[index * 3..index * 3 + 3])
    }

    pub fn current_points(&self) -> impl ExactSizeIterator<Item = Vec3> + '_ {
        self.current.chunks_exact(3).map(Vec3::from_slice)
    }

    /// Moves every current position to its displaced base for `elapsed` seconds.
    pub fn animate(&mut self, elapsed: f32, oscillation: &Oscillation) {
        for (base, current) in self
            .base
            .chunks_exact(3)
            .zip(self.current.chunks_exact_mut(3))
        {
            let p = oscillation.displaced(Vec3::from_slice(base), elapsed);
            current.copy_from_slice(&p.to_array());
        }
    }
}
