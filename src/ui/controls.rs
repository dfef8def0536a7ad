// SPDX-License-Identifier: MPL-2.0
//! Floating control cluster in the bottom-right corner.
//!
//! From top to bottom: lens shape toggle, lens size picker, zoom picker,
//! and the remove action while an image is selected. Which optional
//! controls appear is decided by the `[controls]` capabilities.

use crate::config::Capabilities;
use crate::i18n::fluent::I18n;
use crate::preferences::{LensShape, MagnifierSize, Preferences, ZoomFactor};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::picker::{self, Picker};
use crate::ui::styles;
use crate::ui::widgets::ShapeGlyph;
use iced::widget::{button, container, text, tooltip::Position, Column};
use iced::{Alignment, Element, Length};

/// Contextual data needed to render the cluster.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub capabilities: Capabilities,
    pub preferences: &'a Preferences,
    pub has_image: bool,
}

/// Messages emitted by the cluster and its dialogs.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleShape,
    Zoom(picker::Message<ZoomFactor>),
    MagnifierSize(picker::Message<MagnifierSize>),
    RemoveImage,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    ToggleShape,
    ZoomChosen(ZoomFactor),
    MagnifierSizeChosen(MagnifierSize),
    RemoveImage,
}

/// A button of the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    ShapeToggle,
    MagnifierSizePicker,
    ZoomPicker,
    Remove,
}

/// Controls shown, top to bottom.
#[must_use]
pub fn visible_controls(capabilities: Capabilities, has_image: bool) -> Vec<Control> {
    let mut controls = Vec::with_capacity(4);
    if capabilities.shape_toggle {
        controls.push(Control::ShapeToggle);
    }
    if capabilities.magnifier_size_picker {
        controls.push(Control::MagnifierSizePicker);
    }
    controls.push(Control::ZoomPicker);
    if has_image {
        controls.push(Control::Remove);
    }
    controls
}

/// Dialog state of the two pickers.
#[derive(Debug, Default)]
pub struct State {
    zoom: Picker<ZoomFactor>,
    magnifier_size: Picker<MagnifierSize>,
}

impl State {
    /// Processes a cluster message.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ToggleShape => Event::ToggleShape,
            Message::RemoveImage => Event::RemoveImage,
            Message::Zoom(message) => self
                .zoom
                .update(message)
                .map_or(Event::None, Event::ZoomChosen),
            Message::MagnifierSize(message) => self
                .magnifier_size
                .update(message)
                .map_or(Event::None, Event::MagnifierSizeChosen),
        }
    }

    /// Whether a picker dialog is open.
    #[must_use]
    pub fn has_open_dialog(&self) -> bool {
        self.zoom.is_open() || self.magnifier_size.is_open()
    }

    /// Closes any open dialog.
    pub fn close_dialogs(&mut self) {
        self.zoom.close();
        self.magnifier_size.close();
    }

    /// The cluster itself.
    pub fn view<'a>(&self, ctx: &ViewContext<'_>) -> Element<'a, Message> {
        let buttons = visible_controls(ctx.capabilities, ctx.has_image)
            .into_iter()
            .map(|control| match control {
                Control::ShapeToggle => shape_toggle(ctx.i18n, ctx.preferences.shape()),
                Control::MagnifierSizePicker => self
                    .magnifier_size
                    .view_trigger(ctx.i18n, ctx.preferences.magnifier_size())
                    .map(Message::MagnifierSize),
                Control::ZoomPicker => self
                    .zoom
                    .view_trigger(ctx.i18n, ctx.preferences.zoom())
                    .map(Message::Zoom),
                Control::Remove => remove_button(ctx.i18n),
            });

        Column::with_children(buttons)
            .spacing(spacing::XS)
            .align_x(Alignment::Center)
            .into()
    }

    /// The open picker dialog, if any, with the message that closes it.
    pub fn dialog<'a>(&self, ctx: &ViewContext<'_>) -> Option<(Element<'a, Message>, Message)> {
        if self.zoom.is_open() {
            let dialog = self
                .zoom
                .view_dialog(ctx.i18n, ctx.preferences.zoom())
                .map(Message::Zoom);
            Some((dialog, Message::Zoom(picker::Message::Close)))
        } else if self.magnifier_size.is_open() {
            let dialog = self
                .magnifier_size
                .view_dialog(ctx.i18n, ctx.preferences.magnifier_size())
                .map(Message::MagnifierSize);
            Some((dialog, Message::MagnifierSize(picker::Message::Close)))
        } else {
            None
        }
    }
}

fn shape_toggle<'a>(i18n: &I18n, current: LensShape) -> Element<'a, Message> {
    let target = current.toggled();
    let target_name = match target {
        LensShape::Circle => i18n.tr("shape-circle"),
        LensShape::Square => i18n.tr("shape-square"),
    };

    let toggle = button(
        container(ShapeGlyph::new(target, palette::WHITE).into_element()).center(Length::Fill),
    )
    .width(Length::Fixed(sizing::FAB))
    .height(Length::Fixed(sizing::FAB))
    .padding(0)
    .style(styles::button::fab(palette::TEAL_300))
    .on_press(Message::ToggleShape);

    styles::tooltip::styled(
        toggle,
        i18n.tr_with_args("tooltip-change-shape", &[("shape", target_name.as_str())]),
        Position::Left,
    )
    .into()
}

fn remove_button<'a>(i18n: &I18n) -> Element<'a, Message> {
    let remove = button(
        container(text(i18n.tr("control-remove-label")).size(typography::CAPTION))
            .center(Length::Fill),
    )
    .width(Length::Fixed(sizing::FAB))
    .height(Length::Fixed(sizing::FAB))
    .padding(0)
    .style(styles::button::fab(palette::RED_300))
    .on_press(Message::RemoveImage);

    styles::tooltip::styled(remove, i18n.tr("tooltip-remove-image"), Position::Left).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_controls_shown_with_default_capabilities_and_image() {
        assert_eq!(
            visible_controls(Capabilities::default(), true),
            vec![
                Control::ShapeToggle,
                Control::MagnifierSizePicker,
                Control::ZoomPicker,
                Control::Remove,
            ]
        );
    }

    #[test]
    fn remove_hidden_without_image() {
        assert!(!visible_controls(Capabilities::default(), false).contains(&Control::Remove));
    }

    #[test]
    fn capabilities_hide_optional_controls() {
        let capabilities = Capabilities {
            shape_toggle: false,
            magnifier_size_picker: false,
        };
        assert_eq!(
            visible_controls(capabilities, false),
            vec![Control::ZoomPicker]
        );
    }

    #[test]
    fn choosing_zoom_emits_event_and_closes_dialog() {
        let mut state = State::default();
        state.update(Message::Zoom(picker::Message::Open));
        assert!(state.has_open_dialog());

        let event = state.update(Message::Zoom(picker::Message::Choose(ZoomFactor::new(2.5))));

        assert_eq!(event, Event::ZoomChosen(ZoomFactor::new(2.5)));
        assert!(!state.has_open_dialog());
    }

    #[test]
    fn invalid_choice_keeps_dialog_open() {
        let mut state = State::default();
        state.update(Message::MagnifierSize(picker::Message::Open));

        let event = state.update(Message::MagnifierSize(picker::Message::Choose(
            MagnifierSize::new(123),
        )));

        assert_eq!(event, Event::None);
        assert!(state.has_open_dialog());
    }

    #[test]
    fn close_dialogs_closes_everything() {
        let mut state = State::default();
        state.update(Message::Zoom(picker::Message::Open));
        state.update(Message::MagnifierSize(picker::Message::Open));

        state.close_dialogs();
        assert!(!state.has_open_dialog());
    }

    #[test]
    fn dialog_follows_the_open_picker() {
        let i18n = I18n::default();
        let preferences = Preferences::default();
        let ctx = ViewContext {
            i18n: &i18n,
            capabilities: Capabilities::default(),
            preferences: &preferences,
            has_image: false,
        };
        let mut state = State::default();
        assert!(state.dialog(&ctx).is_none());

        state.update(Message::MagnifierSize(picker::Message::Open));
        let (_, close) = state.dialog(&ctx).expect("magnifier dialog");

        assert!(matches!(
            close,
            Message::MagnifierSize(picker::Message::Close)
        ));
    }

    #[test]
    fn shape_and_remove_pass_through() {
        let mut state = State::default();
        assert_eq!(state.update(Message::ToggleShape), Event::ToggleShape);
        assert_eq!(state.update(Message::RemoveImage), Event::RemoveImage);
    }
}
