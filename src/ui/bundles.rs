use crate::ui::components::*;
use bevy::color::Color;
use bevy::prelude::*;

#[derive(Bundle)]
pub struct LabelBundle {
    pub text: Text,
    pub font: TextFont,
    pub color: TextColor,
    pub node: Node,
}

impl LabelBundle {
    pub fn new(text: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            text: Text::new(text),
            font: TextFont::from_font_size(font_size),
            color: TextColor(color),
            node: Node::default(),
        }
    }

    pub fn with_margin(mut self, margin: UiRect) -> Self {
        self.node.margin = margin;
        self
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.node = node;
        self
    }
}

#[derive(Bundle)]
pub struct ButtonBundle {
    pub button: Button,
    pub node: Node,
    pub background: BackgroundColor,
    pub interaction: Interaction,
    pub marker: UIButton,
    pub config: ButtonConfig,
}

impl ButtonBundle {
    pub fn new(normal_color: Color, hover_color: Color, pressed_color: Color) -> Self {
        Self {
            button: Button,
            node: Node {
                padding: UiRect::axes(Val::Px(24.0), Val::Px(12.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            background: BackgroundColor(normal_color),
            interaction: Interaction::None,
            marker: UIButton,
            config: ButtonConfig {
                normal_color,
                hover_color,
                pressed_color,
            },
        }
    }
}
