// SPDX-License-Identifier: MPL-2.0
//! Blocking notice.
//!
//! At most one notice is shown at a time. While it is up, the rest of the
//! window ignores input until the user presses OK.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Element, Length};

/// A message identified by its translation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    key: &'static str,
}

impl Notice {
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    /// Shown when more than one file is picked or dropped.
    #[must_use]
    pub const fn select_one_file() -> Self {
        Self::new("notice-select-one-file")
    }

    /// Shown at startup when `settings.toml` could not be read.
    #[must_use]
    pub const fn config_load_error() -> Self {
        Self::new("notice-config-load-error")
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Dialog body; `on_dismiss` is emitted by the OK button.
    pub fn view<'a, Message: Clone + 'a>(
        &self,
        i18n: &I18n,
        on_dismiss: Message,
    ) -> Element<'a, Message> {
        let ok = button(text(i18n.tr("notice-ok")).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary)
            .on_press(on_dismiss);

        container(
            column![
                text(i18n.tr(self.key)).size(typography::BODY_LG),
                row![Space::new().width(Length::Fill), ok],
            ]
            .spacing(spacing::MD),
        )
        .padding(spacing::LG)
        .max_width(sizing::NOTICE_MAX_WIDTH)
        .style(styles::container::dialog)
        .into()
    }
}
