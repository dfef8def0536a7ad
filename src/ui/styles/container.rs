// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{BLACK, WHITE},
    radius, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface of dialogs and notices.
///
/// Derived from the active theme background so it stays readable in light
/// and dark modes.
pub fn dialog(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Dimmed layer behind a modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Full-window layer shown while files are dragged over the window.
pub fn drop_overlay(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..WHITE
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_follows_theme_background() {
        let light = dialog(&Theme::Light);
        let dark = dialog(&Theme::Dark);
        assert_ne!(light.background, dark.background);
        assert!(light.text_color.is_some());
    }

    #[test]
    fn overlays_are_translucent() {
        for style in [backdrop(&Theme::Dark), drop_overlay(&Theme::Dark)] {
            let Some(Background::Color(bg)) = style.background else {
                panic!("Expected color background")
            };
            assert!(bg.a > 0.0 && bg.a < 1.0);
        }
    }
}
