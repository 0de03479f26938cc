use crate::orb::material::OrbParticleMaterial;
use bevy::prelude::*;
use orbgen::config::CONFIG_FILE;
use orbgen::prelude::*;
use rand::rngs::StdRng;

/// The configuration the next (or current) orb is built from.
#[derive(Resource, Clone, Debug, PartialEq, Deref, DerefMut)]
pub struct OrbSettings(pub OrbConfig);

impl Default for OrbSettings {
    fn default() -> Self {
        Self(orbgen::load_or_default(CONFIG_FILE))
    }
}

/// One drawable object of the orb with the assets only it uses.
#[derive(Debug, Clone)]
pub struct OrbVisual {
    pub entity: Entity,
    pub mesh: Handle<Mesh>,
    pub material: Handle<OrbParticleMaterial>,
}

/// All state of one mounted orb.
///
/// Exists exactly while the orb is mounted; the animator, shooting star and
/// resize systems only run while it does, so removing it stops the loop.
#[derive(Resource)]
pub struct OrbRenderContext {
    /// The settings this context was built from
    pub config: OrbConfig,
    pub field: ParticleField,
    pub oscillation: Oscillation,
    pub spin: FieldSpin,
    pub stars: Option<ShootingStarState>,
    pub rng: StdRng,
    /// `Time::elapsed_secs` at mount; orb time starts at zero here
    pub clock_origin: f32,
    pub surface: ContainerRect,
    pub frames: u64,
    pub camera: Entity,
    pub particles: OrbVisual,
    pub star: Option<OrbVisual>,
}

impl OrbRenderContext {
    pub fn elapsed(&self, time: &Time) -> f32 {
        time.elapsed_secs() - self.clock_origin
    }

    pub fn visuals(&self) -> impl Iterator<Item = &OrbVisual> {
        std::iter::once(&self.particles).chain(self.star.as_ref())
    }
}
