use bevy::prelude::*;

pub const BRAND_NAME: &str = "Aouf\nMohammed";
pub const HEADING: &str = "Coming soon...";
pub const CONTACT_EMAIL: &str = "contact@aoufmohammed.com";
pub const SHORTCUT_HINT: &str = "M: mount/unmount   R: reload config";

// Button Components
#[derive(Component)]
pub struct UIButton;

#[derive(Component)]
pub struct ButtonConfig {
    pub normal_color: Color,
    pub hover_color: Color,
    pub pressed_color: Color,
}

impl ButtonConfig {
    pub fn color_for(&self, interaction: Interaction) -> Color {
        match interaction {
            Interaction::Pressed => self.pressed_color,
            Interaction::Hovered => self.hover_color,
            Interaction::None => self.normal_color,
        }
    }
}

/// Root node of the page overlay.
#[derive(Component)]
pub struct PageRoot;

#[derive(Component)]
pub struct ContactButton {
    pub email: &'static str,
}

impl ContactButton {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
