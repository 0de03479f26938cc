use crate::config::{OrbConfig, SpinConfig};
use crate::constants::{PHASE_CROSS, PHASE_SELF, Z_SPEED_FACTOR};
use glam::{EulerRot, Quat, Vec3};

/// Per-axis multipliers applied to the amplitude on y and z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplacementScale {
    pub y: f32,
    pub z: f32,
}

/// Time-varying offset every particle follows around its base position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillation {
    pub speed: f32,
    pub amplitude: f32,
    pub scale: DisplacementScale,
}

impl Oscillation {
    pub fn from_config(config: &OrbConfig) -> Self {
        Self {
            speed: config.animation_speed,
            amplitude: config.animation_amplitude,
            scale: config.variant.displacement_scale(),
        }
    }

    pub fn displacement(&self, base: Vec3, elapsed: f32) -> Vec3 {
        let phase = elapsed * self.speed;
        Vec3::new(
            (phase + base.y * PHASE_CROSS + base.x * PHASE_SELF).sin() * self.amplitude,
            (phase + base.x * PHASE_CROSS + base.y * PHASE_SELF).cos()
                * self.amplitude
                * self.scale.y,
            (phase * Z_SPEED_FACTOR + base.z * PHASE_CROSS).sin() * self.amplitude * self.scale.z,
        )
    }

    pub fn displaced(&self, base: Vec3, elapsed: f32) -> Vec3 {
        base + self.displacement(base, elapsed)
    }
}

/// Constant-per-frame rotation of the whole field.
///
/// The increment is applied once per rendered frame, independent of frame time,
/// so the apparent speed follows the display refresh rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpin {
    pub per_frame: SpinConfig,
    pub x: f32,
    pub y: f32,
}

impl FieldSpin {
    pub fn new(per_frame: SpinConfig) -> Self {
        Self {
            per_frame,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn is_static(&self) -> bool {
        self.per_frame.x == 0.0 && self.per_frame.y == 0.0
    }

    /// Accumulates one frame and returns the resulting orientation.
    pub fn advance(&mut self) -> Quat {
        self.x += self.per_frame.x;
        self.y += self.per_frame.y;
        self.rotation()
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.x, self.y, 0.0)
    }
}
