pub mod bundles;
pub mod components;
mod systems;

use bevy::prelude::*;
use systems::*;

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_landing_page).add_systems(
            Update,
            (handle_button_interactions, handle_contact_press),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::bundles::ButtonBundle;
    use super::components::*;
    use super::*;

    #[test]
    fn contact_button_links_to_mail() {
        let contact = ContactButton {
            email: CONTACT_EMAIL,
        };
        assert_eq!(contact.mailto(), "mailto:contact@aoufmohammed.com");
    }

    #[test]
    fn button_colour_follows_interaction() {
        let config = ButtonConfig {
            normal_color: Color::BLACK,
            hover_color: Color::WHITE,
            pressed_color: Color::srgb(1.0, 0.0, 0.0),
        };
        assert_eq!(config.color_for(Interaction::None), Color::BLACK);
        assert_eq!(config.color_for(Interaction::Hovered), Color::WHITE);
        assert_eq!(config.color_for(Interaction::Pressed), Color::srgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn hovered_button_takes_hover_colour() {
        let mut app = App::new();
        app.add_systems(Update, handle_button_interactions);
        let hover = Color::srgb(0.2, 0.4, 0.6);
        let button = app
            .world_mut()
            .spawn(ButtonBundle::new(Color::BLACK, hover, Color::WHITE))
            .id();
        app.update();
        assert_eq!(
            app.world().get::<BackgroundColor>(button),
            Some(&BackgroundColor(Color::BLACK))
        );

        *app.world_mut().get_mut::<Interaction>(button).unwrap() = Interaction::Hovered;
        app.update();
        assert_eq!(
            app.world().get::<BackgroundColor>(button),
            Some(&BackgroundColor(hover))
        );
    }

    #[test]
    fn landing_page_shows_heading_and_contact() {
        let mut app = App::new();
        app.add_systems(Startup, spawn_landing_page);
        app.update();

        let texts: Vec<String> = app
            .world_mut()
            .query::<&Text>()
            .iter(app.world())
            .map(|text| text.0.clone())
            .collect();
        assert!(texts.iter().any(|text| text == HEADING));
        assert!(texts.iter().any(|text| text == CONTACT_EMAIL));

        let buttons = app
            .world_mut()
            .query_filtered::<(), (With<ContactButton>, With<UIButton>)>()
            .iter(app.world())
            .count();
        assert_eq!(buttons, 1);
    }
}
