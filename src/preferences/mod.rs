// SPDX-License-Identifier: MPL-2.0
//! User preferences for the lens and display zoom.
//!
//! [`Preferences`] is built once at startup from a [`PreferenceStore`] and
//! owned by the application root; every change goes back through the same
//! store via [`Preferences::set`].

pub mod store;
pub mod values;

pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use values::{Enumerated, LensShape, MagnifierSize, Preference, ZoomFactor};

/// Loads a typed preference, falling back to its default.
pub fn load_preference<T: Preference>(store: &dyn PreferenceStore) -> T {
    store::load(store, T::KEY, T::try_parse, T::default_value())
}

/// The three persisted settings, as loaded.
///
/// Values are kept exactly as loaded (a legacy value outside the picker list
/// stays as-is); use the `effective_*` accessors for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Preferences {
    zoom: ZoomFactor,
    magnifier_size: MagnifierSize,
    shape: LensShape,
}

impl Preferences {
    /// Reads all preferences from `store`.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let prefs = Self {
            zoom: load_preference(store),
            magnifier_size: load_preference(store),
            shape: load_preference(store),
        };
        tracing::debug!(
            zoom = %prefs.zoom,
            magnifier_size = %prefs.magnifier_size,
            shape = %prefs.shape,
            "loaded preferences"
        );
        prefs
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomFactor {
        self.zoom
    }

    #[must_use]
    pub fn magnifier_size(&self) -> MagnifierSize {
        self.magnifier_size
    }

    #[must_use]
    pub fn shape(&self) -> LensShape {
        self.shape
    }

    #[must_use]
    pub fn effective_zoom(&self) -> ZoomFactor {
        self.zoom.effective()
    }

    #[must_use]
    pub fn effective_magnifier_size(&self) -> MagnifierSize {
        self.magnifier_size.effective()
    }

    /// Replaces one preference in memory and writes it through `store`.
    pub fn set<T: Slot>(&mut self, store: &mut dyn PreferenceStore, value: T) {
        value.assign(self);
        store::save(store, T::KEY, value);
    }

    /// Flips the lens shape and persists the new one.
    pub fn toggle_shape(&mut self, store: &mut dyn PreferenceStore) -> LensShape {
        let next = self.shape.toggled();
        self.set(store, next);
        next
    }
}

/// A preference type that has a field in [`Preferences`].
pub trait Slot: Preference {
    fn assign(self, prefs: &mut Preferences);
}

impl Slot for ZoomFactor {
    fn assign(self, prefs: &mut Preferences) {
        prefs.zoom = self;
    }
}

impl Slot for MagnifierSize {
    fn assign(self, prefs: &mut Preferences) {
        prefs.magnifier_size = self;
    }
}

impl Slot for LensShape {
    fn assign(self, prefs: &mut Preferences) {
        prefs.shape = self;
    }
}
