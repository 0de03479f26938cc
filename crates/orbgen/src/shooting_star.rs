//! The occasional shooting star of the orb variant.
//!
//! Two states: idle, and in flight. A star spawns far from the orb once the
//! shot interval has elapsed, travels in a straight line toward a random
//! point on the orb surface and is deactivated when it reaches the orb or
//! outlives its lifetime.

use crate::constants::COLLISION_RADIUS_SQ_FACTOR;
use crate::sampling::random_point_on_sphere;
use glam::Vec3;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarParams {
    /// Seconds between shots, measured from the previous spawn
    pub interval: f32,
    /// Units per second
    pub speed: f32,
    /// Seconds a star may fly before it is dropped
    pub lifetime: f32,
    /// Radius of the sphere stars spawn on
    pub spawn_distance: f32,
    pub orb_radius: f32,
}

impl StarParams {
    pub fn collision_radius_sq(&self) -> f32 {
        self.orb_radius * self.orb_radius * COLLISION_RADIUS_SQ_FACTOR
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShootingStar {
    pub position: Vec3,
    pub velocity: Vec3,
    pub active: bool,
    pub start_time: f32,
}

/// What a single [`ShootingStarState::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarStep {
    /// Nothing in flight and not due yet
    Idle,
    /// A star was launched this frame
    Spawned,
    /// The star moved and is still flying
    InFlight,
    /// The star reached the orb and was deactivated
    Collided,
    /// The star outlived its lifetime and was deactivated
    Expired,
}

impl StarStep {
    pub fn is_visible(self) -> bool {
        matches!(self, StarStep::Spawned | StarStep::InFlight)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShootingStarState {
    params: StarParams,
    star: Option<ShootingStar>,
    last_shot_time: f32,
}

impl ShootingStarState {
    /// `now` is the elapsed time at mount; the first shot is due one interval later.
    pub fn new(params: StarParams, now: f32) -> Self {
        Self {
            params,
            star: None,
            last_shot_time: now,
        }
    }

    pub fn last_shot_time(&self) -> f32 {
        self.last_shot_time
    }

    /// The last star, active or not.
    pub fn star(&self) -> Option<&ShootingStar> {
        self.star.as_ref()
    }

    pub fn active_star(&self) -> Option<&ShootingStar> {
        self.star.as_ref().filter(|star| star.active)
    }

    pub fn is_idle(&self) -> bool {
        self.active_star().is_none()
    }

    /// Advances the state machine by one frame.
    ///
    /// Spawning, moving and the two deactivation checks all happen in this
    /// order within the same frame, so a freshly spawned star already moves by
    /// `delta`.
    pub fn step<R: Rng + ?Sized>(&mut self, elapsed: f32, delta: f32, rng: &mut R) -> StarStep {
        let mut spawned = false;
        if self.is_idle() && elapsed - self.last_shot_time > self.params.interval {
            self.launch(elapsed, rng);
            spawned = true;
        }

        let params = self.params;
        let Some(star) = self.star.as_mut().filter(|star| star.active) else {
            return StarStep::Idle;
        };

        star.position += star.velocity * delta;

        if star.position.length_squared() <= params.collision_radius_sq() {
            star.active = false;
            log::debug!("shooting star reached the orb at {}", star.position);
            return StarStep::Collided;
        }
        if elapsed - star.start_time > params.lifetime {
            star.active = false;
            log::debug!("shooting star expired after {}s", elapsed - star.start_time);
            return StarStep::Expired;
        }

        if spawned {
            StarStep::Spawned
        } else {
            StarStep::InFlight
        }
    }

    fn launch<R: Rng + ?Sized>(&mut self, elapsed: f32, rng: &mut R) {
        let start = random_point_on_sphere(self.params.spawn_distance, rng);
        let target = random_point_on_sphere(self.params.orb_radius, rng);
        let velocity = (target - start).normalize_or_zero() * self.params.speed;

        log::debug!("shooting star launched from {start} toward {target}");
        self.star = Some(ShootingStar {
            position: start,
            velocity,
            active: true,
            start_time: elapsed,
        });
        self.last_shot_time = elapsed;
    }
}
