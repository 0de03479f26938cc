use crate::constants::*;
use crate::error::ConfigError;
use crate::motion::DisplacementScale;
use crate::shooting_star::StarParams;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "orb_config.toml";

/// Which of the two page visuals to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Spinning orb with the shooting star
    #[default]
    Orb,
    /// Static swarm, no spin and no shooting star
    Swarm,
}

impl Variant {
    pub fn displacement_scale(self) -> DisplacementScale {
        match self {
            Variant::Orb => DisplacementScale { y: 1.2, z: 0.8 },
            Variant::Swarm => DisplacementScale { y: 1.0, z: 0.6 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinConfig {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShootingStarConfig {
    pub enabled: bool,
    pub interval: f32,
    pub speed: f32,
    pub lifetime: f32,
    pub spawn_distance: f32,
    pub size: f32,
    pub color: u32,
    pub opacity: f32,
}

/// Construction-time parameters of the visual. Any change means a full rebuild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawOrbConfig")]
pub struct OrbConfig {
    pub variant: Variant,
    pub particle_color: u32,
    pub particle_size: f32,
    pub particle_opacity: f32,
    pub animation_speed: f32,
    pub animation_amplitude: f32,
    pub camera_distance_factor: f32,
    pub orb_radius: f32,
    pub particle_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub spin: SpinConfig,
    pub shooting_star: ShootingStarConfig,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self::for_variant(Variant::Orb)
    }
}

impl OrbConfig {
    pub fn for_variant(variant: Variant) -> Self {
        let (particle_size, particle_opacity, camera_distance_factor, orb_radius) = match variant {
            Variant::Orb => (0.02, 0.85, 1.8, 2.0),
            Variant::Swarm => (0.03, 0.7, 2.5, 1.8),
        };
        let spin = match variant {
            Variant::Orb => SpinConfig {
                x: ORB_SPIN_X,
                y: ORB_SPIN_Y,
            },
            Variant::Swarm => SpinConfig { x: 0.0, y: 0.0 },
        };
        Self {
            variant,
            particle_color: DEFAULT_PARTICLE_COLOR,
            particle_size,
            particle_opacity,
            animation_speed: DEFAULT_ANIMATION_SPEED,
            animation_amplitude: DEFAULT_ANIMATION_AMPLITUDE,
            camera_distance_factor,
            orb_radius,
            particle_count: DEFAULT_PARTICLE_COUNT,
            seed: None,
            spin,
            shooting_star: ShootingStarConfig {
                enabled: variant == Variant::Orb,
                interval: SHOT_INTERVAL,
                speed: STAR_SPEED,
                lifetime: STAR_LIFETIME,
                spawn_distance: FAR_DISTANCE_FOR_STAR_SPAWN,
                size: SHOOTING_STAR_SIZE,
                color: SHOOTING_STAR_COLOR,
                opacity: SHOOTING_STAR_OPACITY,
            },
        }
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: OrbConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Rejects values the renderer can't do anything sensible with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.orb_radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "orb_radius must be positive, got {}",
                self.orb_radius
            )));
        }
        if self.particle_count == 0 {
            return Err(ConfigError::Invalid("particle_count must be at least 1".into()));
        }
        if !(self.particle_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "particle_size must be positive, got {}",
                self.particle_size
            )));
        }
        if !(self.camera_distance_factor > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "camera_distance_factor must be positive, got {}",
                self.camera_distance_factor
            )));
        }
        if self.shooting_star.enabled && !(self.shooting_star.speed > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "shooting_star.speed must be positive, got {}",
                self.shooting_star.speed
            )));
        }
        Ok(())
    }

    pub fn shooting_stars_enabled(&self) -> bool {
        self.variant == Variant::Orb && self.shooting_star.enabled
    }

    pub fn star_params(&self) -> StarParams {
        StarParams {
            interval: self.shooting_star.interval,
            speed: self.shooting_star.speed,
            lifetime: self.shooting_star.lifetime,
            spawn_distance: self.shooting_star.spawn_distance,
            orb_radius: self.orb_radius,
        }
    }
}

/// Loads `path`, falling back to the defaults when the file is missing or broken.
pub fn load_or_default(path: impl AsRef<Path>) -> OrbConfig {
    let path = path.as_ref();
    if !path.exists() {
        log::info!("no config at {}, using defaults", path.display());
        return OrbConfig::default();
    }
    match OrbConfig::load_from_file(path) {
        Ok(config) => {
            log::info!("loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("{e}; falling back to default config");
            OrbConfig::default()
        }
    }
}

/// File representation: every key optional, holes filled from the variant defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawOrbConfig {
    variant: Option<Variant>,
    particle_color: Option<u32>,
    particle_size: Option<f32>,
    particle_opacity: Option<f32>,
    animation_speed: Option<f32>,
    animation_amplitude: Option<f32>,
    camera_distance_factor: Option<f32>,
    orb_radius: Option<f32>,
    particle_count: Option<usize>,
    seed: Option<u64>,
    spin: RawSpinConfig,
    shooting_star: RawShootingStarConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSpinConfig {
    x: Option<f32>,
    y: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawShootingStarConfig {
    enabled: Option<bool>,
    interval: Option<f32>,
    speed: Option<f32>,
    lifetime: Option<f32>,
    spawn_distance: Option<f32>,
    size: Option<f32>,
    color: Option<u32>,
    opacity: Option<f32>,
}

impl From<RawOrbConfig> for OrbConfig {
    fn from(raw: RawOrbConfig) -> Self {
        let base = OrbConfig::for_variant(raw.variant.unwrap_or_default());
        let star = base.shooting_star;
        Self {
            variant: base.variant,
            particle_color: raw.particle_color.unwrap_or(base.particle_color),
            particle_size: raw.particle_size.unwrap_or(base.particle_size),
            particle_opacity: raw.particle_opacity.unwrap_or(base.particle_opacity),
            animation_speed: raw.animation_speed.unwrap_or(base.animation_speed),
            animation_amplitude: raw.animation_amplitude.unwrap_or(base.animation_amplitude),
            camera_distance_factor: raw
                .camera_distance_factor
                .unwrap_or(base.camera_distance_factor),
            orb_radius: raw.orb_radius.unwrap_or(base.orb_radius),
            particle_count: raw.particle_count.unwrap_or(base.particle_count),
            seed: raw.seed,
            spin: SpinConfig {
                x: raw.spin.x.unwrap_or(base.spin.x),
                y: raw.spin.y.unwrap_or(base.spin.y),
            },
            shooting_star: ShootingStarConfig {
                enabled: raw.shooting_star.enabled.unwrap_or(star.enabled),
                interval: raw.shooting_star.interval.unwrap_or(star.interval),
                speed: raw.shooting_star.speed.unwrap_or(star.speed),
                lifetime: raw.shooting_star.lifetime.unwrap_or(star.lifetime),
                spawn_distance: raw.shooting_star.spawn_distance.unwrap_or(star.spawn_distance),
                size: raw.shooting_star.size.unwrap_or(star.size),
                color: raw.shooting_star.color.unwrap_or(star.color),
                opacity: raw.shooting_star.opacity.unwrap_or(star.opacity),
            },
        }
    }
}

/// Splits a `0xRRGGBB` integer into linear-agnostic `[r, g, b]` in 0..=1.
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
    let b = (hex & 0xFF) as f32 / 255.0;
    [r, g, b]
}
