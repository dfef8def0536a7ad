// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Lightens (`amount > 0`) or darkens (`amount < 0`) a color.
fn shade(color: Color, amount: f32) -> Color {
    let mix = |c: f32| {
        if amount >= 0.0 {
            c + (1.0 - c) * amount
        } else {
            c * (1.0 + amount)
        }
    };
    Color::from_rgba(mix(color.r), mix(color.g), mix(color.b), color.a)
}

/// Style for the prominent "select image" action.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, shadow) = match status {
        button::Status::Hovered => (shade(palette::CYAN_300, 0.15), shadow::MD),
        button::Status::Pressed => (palette::CYAN_400, shadow::SM),
        button::Status::Disabled => (palette::GRAY_200, shadow::NONE),
        button::Status::Active => (palette::CYAN_300, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::CYAN_400,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Round floating action button filled with `accent`.
pub fn fab(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, shadow) = match status {
            button::Status::Hovered => (shade(accent, -0.12), shadow::LG),
            button::Status::Pressed => (shade(accent, -0.2), shadow::MD),
            button::Status::Disabled => (
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..accent
                },
                shadow::NONE,
            ),
            button::Status::Active => (accent, shadow::MD),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: iced::Shadow {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..BLACK
                },
                ..shadow
            },
            snap: true,
        }
    }
}

/// Picker option holding the current value: filled.
pub fn option_active(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => shade(palette::CYAN_400, -0.1),
        _ => palette::CYAN_400,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::CYAN_400,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Any other picker option: outlined.
pub fn option_outlined(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = if matches!(theme, Theme::Light) {
        BLACK
    } else {
        WHITE
    };
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_500
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_500
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            color: palette::GRAY_500,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
