use bevy::prelude::States;

/// Whether the orb is currently mounted on the page.
///
/// Leaving `Mounted` tears the whole render context down; entering it builds a fresh one.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum VisualState {
    #[default]
    Mounted,
    Unmounted,
}
