use bevy::prelude::*;

/// Re-read the config file; a changed config rebuilds the orb.
#[derive(Message)]
pub struct ReloadConfigEvent;

/// Flip between mounted and unmounted.
#[derive(Message)]
pub struct ToggleMountEvent;
