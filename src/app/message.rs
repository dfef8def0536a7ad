// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::selection::{DecodedImage, Generation};
use crate::ui::controls;
use iced::Size;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the native file dialog.
    OpenFileDialog,
    /// Files chosen in the dialog; empty when cancelled.
    FilesPicked(Vec<PathBuf>),
    /// A file is dragged over the window.
    FileHovered(PathBuf),
    /// The drag left the window without dropping.
    FilesHoveredLeft,
    /// One file of a drop gesture.
    FileDropped(PathBuf),
    /// A decode started for `generation` finished.
    ImageDecoded {
        generation: Generation,
        result: Result<DecodedImage, Error>,
    },
    Controls(controls::Message),
    /// OK pressed on the notice.
    DismissNotice,
    WindowResized(Size),
    /// Spinner animation frame while decoding.
    SpinnerTick,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`).
    pub lang: Option<String>,
    /// Image to select at startup.
    pub file_path: Option<String>,
    /// Directory of extra `.ftl` files.
    pub i18n_dir: Option<String>,
    /// Overrides the data directory (`storage.cbor`).
    pub data_dir: Option<String>,
    /// Overrides the config directory (`settings.toml`).
    pub config_dir: Option<String>,
}
