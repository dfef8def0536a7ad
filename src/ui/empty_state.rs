// SPDX-License-Identifier: MPL-2.0
//! What the window shows with no image selected, and while files are
//! dragged over it.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, container, text};
use iced::{Element, Length};

/// The "select image" action, at the top-left of the window.
pub fn view<'a, Message: Clone + 'a>(i18n: &I18n, on_select: Message) -> Element<'a, Message> {
    let select = button(text(i18n.tr("select-image-button")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(on_select);

    container(select)
        .padding([spacing::MD, spacing::XXL])
        .width(Length::Fill)
        .into()
}

/// Full-window hint shown while files hover over the window.
pub fn drop_overlay<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let hint = center(text(i18n.tr("drop-overlay")).size(typography::TITLE_LG))
        .style(styles::container::drop_overlay);

    container(hint).padding(spacing::MD).into()
}
