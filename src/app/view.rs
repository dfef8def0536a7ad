// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the empty state or the previews (with the spinner
//! while decoding), the control cluster, the drop hint, the open picker
//! dialog, and the notice.

use super::Message;
use crate::config::Capabilities;
use crate::i18n::fluent::I18n;
use crate::preferences::Preferences;
use crate::selection::{Phase, Selection};
use crate::ui::components::modal::modal;
use crate::ui::components::notice::Notice;
use crate::ui::controls::{self, ViewContext as ControlsViewContext};
use crate::ui::design_tokens::{palette, spacing};
use crate::ui::widgets::AnimatedSpinner;
use crate::ui::{empty_state, preview};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{center, container, stack, Space};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub capabilities: Capabilities,
    pub preferences: &'a Preferences,
    pub selection: &'a Selection,
    pub controls: &'a controls::State,
    pub notice: Option<&'a Notice>,
    pub is_dragging: bool,
    pub window_width: f32,
    pub spinner_rotation: f32,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let controls_ctx = ControlsViewContext {
        i18n: ctx.i18n,
        capabilities: ctx.capabilities,
        preferences: ctx.preferences,
        has_image: ctx.selection.path().is_some(),
    };

    let cluster = container(ctx.controls.view(&controls_ctx).map(Message::Controls))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(spacing::LG);

    let mut layers = stack![content(&ctx), cluster];
    if ctx.is_dragging {
        layers = layers.push(empty_state::drop_overlay(ctx.i18n));
    }

    let mut root: Element<'_, Message> = layers.width(Length::Fill).height(Length::Fill).into();

    if let Some((dialog, close)) = ctx.controls.dialog(&controls_ctx) {
        root = modal(
            root,
            dialog.map(Message::Controls),
            Some(Message::Controls(close)),
        );
    }

    if let Some(notice) = ctx.notice {
        root = modal(root, notice.view(ctx.i18n, Message::DismissNotice), None);
    }

    root
}

fn content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if ctx.selection.path().is_none() {
        return empty_state::view(ctx.i18n, Message::OpenFileDialog);
    }

    let previews: Element<'a, Message> = match ctx.selection.image() {
        Some(decoded) => preview::view(decoded, ctx.preferences, ctx.window_width, ctx.i18n),
        None => Space::new().width(Length::Fill).height(Length::Fill).into(),
    };

    if ctx.selection.phase() == Phase::Decoding {
        let spinner = AnimatedSpinner::new(palette::CYAN_400, ctx.spinner_rotation).into_element();
        stack![previews, center(spinner)].into()
    } else {
        previews
    }
}
