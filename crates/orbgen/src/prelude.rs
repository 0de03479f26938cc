pub use crate::config::{OrbConfig, ShootingStarConfig, SpinConfig, Variant};
pub use crate::error::ConfigError;
pub use crate::field::ParticleField;
pub use crate::motion::{DisplacementScale, FieldSpin, Oscillation};
pub use crate::shooting_star::{ShootingStar, ShootingStarState, StarParams, StarStep};
pub use crate::viewport::{ContainerRect, camera_distance, sprite_world_size};
