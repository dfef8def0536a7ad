// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::preferences::{PreferenceStore, Preferences};
use crate::selection::{
    decode_file, DropGesture, Phase, Selection, SelectionOutcome, IMAGE_EXTENSIONS,
};
use crate::ui::components::notice::Notice;
use crate::ui::controls::{self, Event as ControlsEvent};
use crate::ui::widgets::animated_spinner;
use iced::Task;
use std::path::PathBuf;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a mut dyn PreferenceStore,
    pub preferences: &'a mut Preferences,
    pub selection: &'a mut Selection,
    pub drop_gesture: &'a mut DropGesture,
    pub controls: &'a mut controls::State,
    pub notice: &'a mut Option<Notice>,
    pub window_width: &'a mut f32,
    pub spinner_rotation: &'a mut f32,
}

/// Routes a top-level message to its handler.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    // Messages that keep flowing while a notice blocks the window.
    match message {
        Message::DismissNotice => {
            *ctx.notice = None;
            return Task::none();
        }
        Message::ImageDecoded { generation, result } => {
            ctx.selection.apply_decoded(generation, result);
            return Task::none();
        }
        Message::WindowResized(size) => {
            *ctx.window_width = size.width;
            return Task::none();
        }
        Message::SpinnerTick => {
            if ctx.selection.phase() == Phase::Decoding {
                *ctx.spinner_rotation = animated_spinner::advance(*ctx.spinner_rotation);
            }
            return Task::none();
        }
        Message::FilesHoveredLeft => {
            ctx.drop_gesture.leave();
            return Task::none();
        }
        _ => {}
    }

    if ctx.notice.is_some() {
        tracing::debug!(?message, "ignoring input while a notice is shown");
        if matches!(message, Message::FileDropped(_)) {
            ctx.drop_gesture.leave();
        }
        return Task::none();
    }

    match message {
        Message::OpenFileDialog => handle_open_file_dialog(ctx.i18n),
        Message::FilesPicked(files) => handle_files(ctx, files),
        Message::FileHovered(path) => {
            ctx.drop_gesture.hover(path);
            Task::none()
        }
        Message::FileDropped(path) => match ctx.drop_gesture.dropped(path) {
            Some(files) => handle_files(ctx, files),
            None => Task::none(),
        },
        Message::Controls(message) => handle_controls_message(ctx, message),
        Message::DismissNotice
        | Message::ImageDecoded { .. }
        | Message::WindowResized(_)
        | Message::SpinnerTick
        | Message::FilesHoveredLeft => Task::none(),
    }
}

/// Opens the native multi-file dialog filtered to image files.
pub fn handle_open_file_dialog(i18n: &I18n) -> Task<Message> {
    let title = i18n.tr("select-image-dialog-title");
    let filter = i18n.tr("select-image-dialog-filter");

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter, IMAGE_EXTENSIONS)
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        },
        Message::FilesPicked,
    )
}

/// Selects `files` if there is exactly one, then starts decoding it.
pub fn handle_files(ctx: &mut UpdateContext<'_>, files: Vec<PathBuf>) -> Task<Message> {
    match ctx.selection.select_files(files) {
        SelectionOutcome::Ignored => Task::none(),
        SelectionOutcome::Rejected { .. } => {
            *ctx.notice = Some(Notice::select_one_file());
            Task::none()
        }
        SelectionOutcome::Accepted { path, generation } => {
            ctx.controls.close_dialogs();
            *ctx.spinner_rotation = 0.0;
            Task::perform(decode_file(path), move |result| Message::ImageDecoded {
                generation,
                result,
            })
        }
    }
}

/// Applies a control cluster event to the preferences or the selection.
pub fn handle_controls_message(
    ctx: &mut UpdateContext<'_>,
    message: controls::Message,
) -> Task<Message> {
    match ctx.controls.update(message) {
        ControlsEvent::None => {}
        ControlsEvent::ToggleShape => {
            let shape = ctx.preferences.toggle_shape(ctx.store);
            tracing::debug!(%shape, "lens shape changed");
        }
        ControlsEvent::ZoomChosen(zoom) => {
            ctx.preferences.set(ctx.store, zoom);
            tracing::debug!(%zoom, "zoom factor changed");
        }
        ControlsEvent::MagnifierSizeChosen(size) => {
            ctx.preferences.set(ctx.store, size);
            tracing::debug!(%size, "magnifier size changed");
        }
        ControlsEvent::RemoveImage => ctx.selection.clear(),
    }
    Task::none()
}

