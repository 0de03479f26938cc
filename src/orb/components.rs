use bevy::prelude::*;

/// Everything spawned for a mounted orb; despawned on teardown.
#[derive(Component)]
pub struct OrbEntity;

#[derive(Component)]
pub struct ParticleFieldMesh;

#[derive(Component)]
pub struct ShootingStarMesh;
