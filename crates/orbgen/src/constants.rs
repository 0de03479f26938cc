pub const DEFAULT_PARTICLE_COLOR: u32 = 0xFF8C00;
pub const DEFAULT_PARTICLE_COUNT: usize = 15_000;
pub const DEFAULT_ANIMATION_SPEED: f32 = 0.2;
pub const DEFAULT_ANIMATION_AMPLITUDE: f32 = 0.08;

// Shooting star
pub const SHOT_INTERVAL: f32 = 30.0; // seconds
pub const STAR_SPEED: f32 = 7.0; // units per second
pub const STAR_LIFETIME: f32 = 15.0; // seconds
pub const FAR_DISTANCE_FOR_STAR_SPAWN: f32 = 25.0;
pub const SHOOTING_STAR_SIZE: f32 = 0.08;
pub const SHOOTING_STAR_COLOR: u32 = 0xFFFFAA;
pub const SHOOTING_STAR_OPACITY: f32 = 0.95;
/// A star counts as hitting the orb once |p|² drops to radius² times this
pub const COLLISION_RADIUS_SQ_FACTOR: f32 = 1.05;

// Per-frame spin of the orb variant, radians per rendered frame
pub const ORB_SPIN_X: f32 = 0.0002;
pub const ORB_SPIN_Y: f32 = 0.0005;

// Oscillation phase coefficients
pub const PHASE_CROSS: f32 = 0.5;
pub const PHASE_SELF: f32 = 0.2;
pub const Z_SPEED_FACTOR: f32 = 0.8;

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const MIN_CAMERA_DISTANCE_FACTOR: f32 = 1.5;

// Page container
pub const CONTAINER_MAX_HEIGHT: f32 = 500.0;
pub const SMALL_BREAKPOINT: f32 = 640.0;
pub const MEDIUM_BREAKPOINT: f32 = 768.0;
