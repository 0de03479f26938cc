use bevy::color::Color;
use bevy::prelude::{Component, Reflect};

/// Render order of the three cameras sharing the window.
pub const BACKGROUND_CAMERA_ORDER: isize = 0;
pub const ORB_CAMERA_ORDER: isize = 1;
pub const OVERLAY_CAMERA_ORDER: isize = 2;

pub const PAGE_BACKGROUND: Color = Color::srgb(0.035, 0.04, 0.07);

#[derive(Component, Reflect)]
pub struct PageBackgroundCamera;

#[derive(Component, Reflect)]
pub struct PageOverlayCamera;

/// The perspective camera owned by a mounted orb.
#[derive(Component, Reflect)]
pub struct OrbCamera;
