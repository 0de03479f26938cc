use crate::constants::*;

/// Camera distance from the origin along +z.
pub fn camera_distance(orb_radius: f32, distance_factor: f32) -> f32 {
    (orb_radius * distance_factor).max(orb_radius * MIN_CAMERA_DISTANCE_FACTOR)
}

/// World-space edge of a sprite quad that covers as many pixels as a
/// distance-attenuated point of `size`, whose pixel size is `size * H / (2 d)`.
pub fn sprite_world_size(size: f32, fov_degrees: f32) -> f32 {
    size * (fov_degrees.to_radians() * 0.5).tan()
}

/// The area of the window the orb renders into, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContainerRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ContainerRect {
    /// Full window width, a breakpoint-dependent share of the height capped at
    /// 500 logical pixels, centred vertically.
    pub fn for_window(logical_width: f32, logical_height: f32, scale_factor: f32) -> Self {
        let share = if logical_width < SMALL_BREAKPOINT {
            0.60
        } else if logical_width < MEDIUM_BREAKPOINT {
            0.65
        } else {
            0.70
        };
        let height = (logical_height * share).min(CONTAINER_MAX_HEIGHT);
        let top = (logical_height - height) / 2.0;

        Self {
            x: 0,
            y: (top * scale_factor).round().max(0.0) as u32,
            width: (logical_width * scale_factor).round().max(0.0) as u32,
            height: (height * scale_factor).round().max(0.0) as u32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// `None` for a degenerate container.
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.is_empty() {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }
}
