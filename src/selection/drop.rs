// SPDX-License-Identifier: MPL-2.0
//! Batching of per-file drag-and-drop window events.
//!
//! The windowing layer reports one hover event and one drop event per file.
//! [`DropGesture`] collects them back into the file list of a single
//! gesture so a multi-file drop can be rejected as a whole.

use std::path::PathBuf;

/// Transient state of one drag gesture over the window.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DropGesture {
    hovered: Vec<PathBuf>,
    dropped: Vec<PathBuf>,
}

impl DropGesture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A file is being dragged over the window.
    pub fn hover(&mut self, path: PathBuf) {
        if !self.hovered.contains(&path) {
            self.hovered.push(path);
        }
    }

    /// The drag left the window without dropping.
    pub fn leave(&mut self) {
        self.hovered.clear();
        self.dropped.clear();
    }

    /// A file was dropped.
    ///
    /// Returns the whole batch once every hovered file has dropped (a drop
    /// with no preceding hover is a batch of one), and resets the gesture.
    pub fn dropped(&mut self, path: PathBuf) -> Option<Vec<PathBuf>> {
        self.dropped.push(path);
        let expected = self.hovered.len().max(1);
        if self.dropped.len() < expected {
            return None;
        }
        self.hovered.clear();
        Some(std::mem::take(&mut self.dropped))
    }

    /// True while files hover over the window.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        !self.hovered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(name: &str) -> PathBuf {
        PathBuf::from(name)
    }

    #[test]
    fn hover_sets_drag_state_and_leave_clears_it() {
        let mut gesture = DropGesture::new();
        assert!(!gesture.is_dragging());

        gesture.hover(path("a.png"));
        assert!(gesture.is_dragging());

        gesture.leave();
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn single_file_drop_yields_batch_of_one() {
        let mut gesture = DropGesture::new();
        gesture.hover(path("a.png"));

        assert_eq!(gesture.dropped(path("a.png")), Some(vec![path("a.png")]));
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn multi_file_drop_waits_for_every_file() {
        let mut gesture = DropGesture::new();
        gesture.hover(path("a.png"));
        gesture.hover(path("b.png"));

        assert_eq!(gesture.dropped(path("a.png")), None);
        assert!(gesture.is_dragging());
        assert_eq!(
            gesture.dropped(path("b.png")),
            Some(vec![path("a.png"), path("b.png")])
        );
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn drop_without_hover_is_a_batch_of_one() {
        let mut gesture = DropGesture::new();
        assert_eq!(gesture.dropped(path("a.png")), Some(vec![path("a.png")]));
    }

    #[test]
    fn repeated_hover_events_count_once() {
        let mut gesture = DropGesture::new();
        gesture.hover(path("a.png"));
        gesture.hover(path("a.png"));

        assert_eq!(gesture.dropped(path("a.png")), Some(vec![path("a.png")]));
    }

    #[test]
    fn leave_discards_partial_drop() {
        let mut gesture = DropGesture::new();
        gesture.hover(path("a.png"));
        gesture.hover(path("b.png"));
        gesture.dropped(path("a.png"));

        gesture.leave();
        assert_eq!(gesture, DropGesture::default());
    }
}
