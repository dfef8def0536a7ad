// SPDX-License-Identifier: MPL-2.0
//! Modal layering.

use crate::ui::styles;
use iced::widget::{center, mouse_area, opaque, stack};
use iced::Element;

/// Shows `content` centred over a dimmed `base`.
///
/// Nothing under the backdrop receives input. When `on_blur` is set, a
/// click on the backdrop emits it; otherwise the modal can only be closed
/// from its own content.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let backdrop = center(opaque(content)).style(styles::container::backdrop);

    let layer: Element<'a, Message> = match on_blur {
        Some(message) => mouse_area(backdrop).on_press(message).into(),
        None => backdrop.into(),
    };

    stack![base.into(), opaque(layer)].into()
}
