// SPDX-License-Identifier: MPL-2.0
//! Image selection: which file is being previewed and its decoded form.
//!
//! Files arrive as a list (from the file dialog or a drop gesture). Exactly
//! one file is accepted; decoding then runs asynchronously and its result is
//! tagged with the [`Generation`] it was started for, so a result that lands
//! after a newer selection or a clear is discarded.

pub mod decode;
pub mod drop;

pub use decode::{decode_bytes, decode_file, DecodedImage};
pub use drop::DropGesture;

use crate::error::Error;
use std::path::{Path, PathBuf};

/// File extensions offered by the file dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "ico", "tif", "tiff",
];

/// Identifies one select/clear step; bumped on every change of selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// What happened to a list of files handed to [`Selection::select_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// No files: nothing changed.
    Ignored,
    /// More than one file: nothing changed, the user must be told.
    Rejected { count: usize },
    /// One file: it is now selected and should be decoded.
    Accepted { path: PathBuf, generation: Generation },
}

/// Coarse state of the selection, for the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Decoding,
    Ready,
    /// The current file could not be read; any previous image stays shown.
    Failed,
}

/// Current selection and its decoded image.
#[derive(Debug, Default)]
pub struct Selection {
    generation: Generation,
    path: Option<PathBuf>,
    decoded: Option<DecodedImage>,
    decoded_generation: Option<Generation>,
    finished_generation: Option<Generation>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the cardinality of `files` and selects the single file.
    pub fn select_files(&mut self, mut files: Vec<PathBuf>) -> SelectionOutcome {
        match files.len() {
            0 => SelectionOutcome::Ignored,
            1 => {
                let path = files.remove(0);
                self.generation = self.generation.next();
                self.path = Some(path.clone());
                tracing::debug!(path = %path.display(), generation = self.generation.0, "file selected");
                SelectionOutcome::Accepted {
                    path,
                    generation: self.generation,
                }
            }
            count => {
                tracing::debug!(count, "rejected multi-file selection");
                SelectionOutcome::Rejected { count }
            }
        }
    }

    /// Forgets the selected file and its decoded image.
    ///
    /// Any decode still in flight is discarded when it completes.
    pub fn clear(&mut self) {
        self.generation = self.generation.next();
        self.path = None;
        self.decoded = None;
        self.decoded_generation = None;
        self.finished_generation = None;
        tracing::debug!(generation = self.generation.0, "selection cleared");
    }

    /// Applies a finished decode. Returns whether the displayed image changed.
    ///
    /// Results for an older generation are dropped. A failed decode keeps
    /// whatever image was displayed before.
    pub fn apply_decoded(
        &mut self,
        generation: Generation,
        result: Result<DecodedImage, Error>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation.0,
                current = self.generation.0,
                "discarding stale decode"
            );
            return false;
        }

        self.finished_generation = Some(generation);
        match result {
            Ok(image) => {
                tracing::debug!(
                    width = image.width(),
                    height = image.height(),
                    mime = image.mime(),
                    "image decoded"
                );
                self.decoded = Some(image);
                self.decoded_generation = Some(generation);
                true
            }
            Err(error) => {
                tracing::warn!(%error, path = ?self.path, "failed to read selected file");
                false
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        let current = Some(self.generation);
        match &self.path {
            None => Phase::Idle,
            Some(_) if self.finished_generation != current => Phase::Decoding,
            Some(_) if self.decoded_generation == current => Phase::Ready,
            Some(_) => Phase::Failed,
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Image to display; while a new file decodes this is still the previous one.
    #[must_use]
    pub fn image(&self) -> Option<&DecodedImage> {
        self.path.as_ref().and(self.decoded.as_ref())
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn decoded(width: u32, height: u32) -> DecodedImage {
        let img = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).expect("encode png");
        decode_bytes(out.into_inner()).expect("decode png")
    }

    fn accept(selection: &mut Selection, name: &str) -> Generation {
        match selection.select_files(vec![PathBuf::from(name)]) {
            SelectionOutcome::Accepted { generation, .. } => generation,
            other => panic!("expected acceptance, got {other:?}"),
        }
    }

    #[test]
    fn starts_idle() {
        let selection = Selection::new();
        assert_eq!(selection.phase(), Phase::Idle);
        assert!(selection.path().is_none());
        assert!(selection.image().is_none());
    }

    #[test]
    fn empty_list_is_ignored() {
        let mut selection = Selection::new();
        let before = selection.generation();

        assert_eq!(selection.select_files(Vec::new()), SelectionOutcome::Ignored);
        assert_eq!(selection.phase(), Phase::Idle);
        assert_eq!(selection.generation(), before);
    }

    #[test]
    fn single_file_is_accepted_and_decoding() {
        let mut selection = Selection::new();
        let outcome = selection.select_files(vec![PathBuf::from("photo.png")]);

        assert!(matches!(
            outcome,
            SelectionOutcome::Accepted { ref path, .. } if path == Path::new("photo.png")
        ));
        assert_eq!(selection.phase(), Phase::Decoding);
        assert_eq!(selection.path(), Some(Path::new("photo.png")));
    }

    #[test]
    fn multiple_files_are_rejected_without_state_change() {
        let mut selection = Selection::new();
        let generation = accept(&mut selection, "first.png");
        assert!(selection.apply_decoded(generation, Ok(decoded(2, 2))));

        let outcome =
            selection.select_files(vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);

        assert_eq!(outcome, SelectionOutcome::Rejected { count: 2 });
        assert_eq!(selection.path(), Some(Path::new("first.png")));
        assert_eq!(selection.phase(), Phase::Ready);
        assert_eq!(selection.generation(), generation);
    }

    #[test]
    fn decode_for_current_generation_makes_ready() {
        let mut selection = Selection::new();
        let generation = accept(&mut selection, "photo.png");

        assert!(selection.apply_decoded(generation, Ok(decoded(4, 3))));
        assert_eq!(selection.phase(), Phase::Ready);
        assert_eq!(selection.image().map(DecodedImage::width), Some(4));
    }

    #[test]
    fn stale_decode_is_discarded() {
        let mut selection = Selection::new();
        let first = accept(&mut selection, "first.png");
        let second = accept(&mut selection, "second.png");

        assert!(!selection.apply_decoded(first, Ok(decoded(10, 10))));
        assert_eq!(selection.phase(), Phase::Decoding);
        assert!(selection.image().is_none());

        assert!(selection.apply_decoded(second, Ok(decoded(20, 20))));
        assert_eq!(selection.image().map(DecodedImage::width), Some(20));
    }

    #[test]
    fn decode_completing_after_clear_is_discarded() {
        let mut selection = Selection::new();
        let generation = accept(&mut selection, "photo.png");
        selection.clear();

        assert!(!selection.apply_decoded(generation, Ok(decoded(4, 4))));
        assert_eq!(selection.phase(), Phase::Idle);
        assert!(selection.image().is_none());
    }

    #[test]
    fn failed_decode_keeps_previous_image() {
        let mut selection = Selection::new();
        let first = accept(&mut selection, "first.png");
        selection.apply_decoded(first, Ok(decoded(5, 5)));

        let second = accept(&mut selection, "broken.png");
        let changed =
            selection.apply_decoded(second, Err(Error::Decode("bad header".to_string())));

        assert!(!changed);
        assert_eq!(selection.phase(), Phase::Failed);
        assert_eq!(selection.image().map(DecodedImage::width), Some(5));
    }

    #[test]
    fn failed_first_decode_leaves_decoding_phase() {
        let mut selection = Selection::new();
        let generation = accept(&mut selection, "broken.png");

        selection.apply_decoded(generation, Err(Error::Decode("truncated".to_string())));

        assert_eq!(selection.phase(), Phase::Failed);
        assert!(selection.image().is_none());
        assert_eq!(selection.path(), Some(Path::new("broken.png")));
    }

    #[test]
    fn new_selection_after_failure_is_decoding_again() {
        let mut selection = Selection::new();
        let broken = accept(&mut selection, "broken.png");
        selection.apply_decoded(broken, Err(Error::Decode("truncated".to_string())));

        let next = accept(&mut selection, "photo.png");
        assert_eq!(selection.phase(), Phase::Decoding);

        selection.apply_decoded(next, Ok(decoded(3, 3)));
        assert_eq!(selection.phase(), Phase::Ready);
    }

    #[test]
    fn clear_returns_to_idle_from_any_state() {
        let mut selection = Selection::new();
        selection.clear();
        assert_eq!(selection.phase(), Phase::Idle);

        accept(&mut selection, "decoding.png");
        selection.clear();
        assert_eq!(selection.phase(), Phase::Idle);

        let generation = accept(&mut selection, "ready.png");
        selection.apply_decoded(generation, Ok(decoded(1, 1)));
        selection.clear();
        assert_eq!(selection.phase(), Phase::Idle);
        assert!(selection.image().is_none());
    }

    #[test]
    fn reselecting_same_path_starts_new_generation() {
        let mut selection = Selection::new();
        let first = accept(&mut selection, "photo.png");
        selection.clear();
        let second = accept(&mut selection, "photo.png");

        assert_ne!(first, second);
        assert_eq!(selection.phase(), Phase::Decoding);
    }
}
