// SPDX-License-Identifier: MPL-2.0
//! Generic preference picker.
//!
//! A floating button showing the current value opens a modal dialog listing
//! every allowed value of the domain. Choosing one closes the dialog; the
//! parent persists the value. Clicking outside the dialog closes it too.

use crate::i18n::fluent::I18n;
use crate::preferences::{Enumerated, MagnifierSize, ZoomFactor};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, text, tooltip::Position, Row};
use iced::{Alignment, Color, Element, Length, Theme};
use std::marker::PhantomData;

/// A preference domain that has a picker.
pub trait PickerDomain: Enumerated + Send + 'static {
    /// Dialog title.
    const TITLE_KEY: &'static str;
    /// Tooltip of the trigger button.
    const TOOLTIP_KEY: &'static str;
    /// Short label above the value on the trigger button.
    const CAPTION_KEY: &'static str;
    /// Fill of the trigger button.
    const ACCENT: Color;
}

impl PickerDomain for ZoomFactor {
    const TITLE_KEY: &'static str = "picker-zoom-title";
    const TOOLTIP_KEY: &'static str = "tooltip-change-zoom";
    const CAPTION_KEY: &'static str = "control-zoom-label";
    const ACCENT: Color = palette::CYAN_300;
}

impl PickerDomain for MagnifierSize {
    const TITLE_KEY: &'static str = "picker-magnifier-title";
    const TOOLTIP_KEY: &'static str = "tooltip-change-magnifier";
    const CAPTION_KEY: &'static str = "control-lens-label";
    const ACCENT: Color = palette::ORANGE_300;
}

#[derive(Debug, Clone)]
pub enum Message<T> {
    Open,
    Close,
    Choose(T),
}

/// Open/closed state of one picker dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Picker<T> {
    open: bool,
    domain: PhantomData<T>,
}

impl<T> Default for Picker<T> {
    fn default() -> Self {
        Self {
            open: false,
            domain: PhantomData,
        }
    }
}

impl<T: PickerDomain> Picker<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Accepts `value` if it belongs to the domain and closes the dialog.
    ///
    /// A value outside the domain is ignored and the dialog stays as it was.
    pub fn choose(&mut self, value: T) -> Option<T> {
        if !value.is_allowed() {
            tracing::debug!(%value, "ignoring value outside picker options");
            return None;
        }
        self.close();
        Some(value)
    }

    /// Handles a picker message; returns the chosen value, if any.
    pub fn update(&mut self, message: Message<T>) -> Option<T> {
        match message {
            Message::Open => {
                self.open();
                None
            }
            Message::Close => {
                self.close();
                None
            }
            Message::Choose(value) => self.choose(value),
        }
    }

    /// Whether `option` is shown as the current value.
    #[must_use]
    pub fn is_active(option: T, current: T) -> bool {
        option == current
    }

    /// Floating button showing the current value.
    pub fn view_trigger<'a>(&self, i18n: &I18n, current: T) -> Element<'a, Message<T>> {
        let label = column![
            text(i18n.tr(T::CAPTION_KEY)).size(typography::CAPTION),
            text(current.to_string()).size(typography::BODY),
        ]
        .align_x(Alignment::Center);

        let trigger = button(container(label).center(Length::Fill))
            .width(Length::Fixed(sizing::FAB))
            .height(Length::Fixed(sizing::FAB))
            .padding(0)
            .style(styles::button::fab(T::ACCENT))
            .on_press(Message::Open);

        styles::tooltip::styled(trigger, i18n.tr(T::TOOLTIP_KEY), Position::Left).into()
    }

    /// Dialog body listing every option.
    pub fn view_dialog<'a>(&self, i18n: &I18n, current: T) -> Element<'a, Message<T>> {
        let options = T::options().into_iter().map(|option| {
            let style: fn(&Theme, button::Status) -> button::Style =
                if Self::is_active(option, current) {
                    styles::button::option_active
                } else {
                    styles::button::option_outlined
                };
            button(text(option.to_string()).size(typography::BODY_LG).center())
                .width(Length::Fixed(sizing::PICKER_OPTION))
                .padding([spacing::XS, spacing::XXS])
                .style(style)
                .on_press(Message::Choose(option))
                .into()
        });

        let body = column![
            text(i18n.tr(T::TITLE_KEY)).size(typography::TITLE_MD),
            Row::with_children(options).spacing(spacing::XS).wrap(),
        ]
        .spacing(spacing::MD);

        container(body)
            .padding(spacing::LG)
            .max_width(sizing::DIALOG_MAX_WIDTH)
            .style(styles::container::dialog)
            .into()
    }
}
