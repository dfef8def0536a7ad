// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Tooltips invert the theme (light on dark, dark on light) so they stand
//! out over both the image and the window background.

use crate::ui::design_tokens::{border, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

const LIGHT_SURFACE: Color = Color::from_rgba(0.95, 0.95, 0.95, 0.98);
const DARK_SURFACE: Color = Color::from_rgba(0.15, 0.15, 0.15, 0.98);

/// Style for the tooltip bubble.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let (bg_color, text_color) = if theme.extended_palette().is_dark {
        (LIGHT_SURFACE, Color::from_rgb(0.1, 0.1, 0.1))
    } else {
        (DARK_SURFACE, Color::from_rgb(0.95, 0.95, 0.95))
    };

    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color { a: 0.3, ..text_color },
        },
        shadow: iced::Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            ..shadow::MD
        },
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip` on hover.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}
