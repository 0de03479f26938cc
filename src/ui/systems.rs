use crate::ui::bundles::*;
use crate::ui::components::*;
use bevy::color::Color;
use bevy::prelude::*;

const TEXT_COLOR: Color = Color::srgb(0.93, 0.93, 0.95);
const MUTED_TEXT_COLOR: Color = Color::srgb(0.55, 0.57, 0.62);

/// Header, heading and contact button. The orb renders underneath, so the
/// root node stays transparent.
pub fn spawn_landing_page(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(24.0),
                ..default()
            },
            PageRoot,
        ))
        .with_children(|parent| {
            parent.spawn(LabelBundle::new(BRAND_NAME, 24.0, TEXT_COLOR).with_node(Node {
                position_type: PositionType::Absolute,
                top: Val::Px(20.0),
                left: Val::Px(32.0),
                ..default()
            }));

            parent.spawn(
                LabelBundle::new(HEADING, 56.0, TEXT_COLOR).with_margin(UiRect::bottom(Val::Px(8.0))),
            );

            parent
                .spawn((
                    ButtonBundle::new(
                        Color::srgba(1.0, 1.0, 1.0, 0.08),
                        Color::srgba(1.0, 1.0, 1.0, 0.16),
                        Color::srgba(1.0, 0.55, 0.0, 0.35),
                    ),
                    ContactButton {
                        email: CONTACT_EMAIL,
                    },
                ))
                .with_children(|parent| {
                    parent.spawn(LabelBundle::new(CONTACT_EMAIL, 18.0, TEXT_COLOR));
                });

            parent.spawn(LabelBundle::new(SHORTCUT_HINT, 14.0, MUTED_TEXT_COLOR).with_node(Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(16.0),
                ..default()
            }));
        });
}

pub fn handle_button_interactions(
    mut buttons: Query<
        (&Interaction, &ButtonConfig, &mut BackgroundColor),
        (Changed<Interaction>, With<UIButton>),
    >,
) {
    for (interaction, config, mut background) in &mut buttons {
        background.set_if_neq(BackgroundColor(config.color_for(*interaction)));
    }
}

pub fn handle_contact_press(
    contact_query: Query<(&Interaction, &ContactButton), Changed<Interaction>>,
) {
    for (interaction, contact) in &contact_query {
        if *interaction == Interaction::Pressed {
            info!("Contact: {}", contact.mailto());
        }
    }
}
