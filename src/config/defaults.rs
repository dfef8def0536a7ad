// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! and fixed option lists used across the application.
//!
//! # Categories
//!
//! - **Zoom**: Display zoom factor and the values offered by the zoom picker
//! - **Magnifier**: Lens size and shape defaults and the lens size options
//! - **Preview**: Fixed display widths rendered side by side

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor used when nothing (valid) has been stored yet.
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.8;

/// Zoom factors offered by the zoom picker, in ascending order.
pub const ZOOM_FACTOR_OPTIONS: &[f32] = &[
    0.1, 0.3, 0.5, 0.7, 0.8, 1.0, 1.1, 1.2, 1.3, 1.5, 1.8, 2.0, 2.3, 2.5, 2.8, 3.3, 3.5, 3.8, 4.0,
    4.5, 5.0, 5.5, 6.0, 6.5, 7.0,
];

// ==========================================================================
// Magnifier Defaults
// ==========================================================================

/// Lens edge length in logical pixels used when nothing has been stored.
pub const DEFAULT_MAGNIFIER_SIZE: u32 = 150;

/// Lens sizes offered by the magnifier picker, in ascending order.
pub const MAGNIFIER_SIZE_OPTIONS: &[u32] = &[50, 100, 150, 200, 250, 300, 350, 400, 450, 500];

/// Lens outline width in logical pixels.
pub const MAGNIFIER_BORDER_WIDTH: f32 = 2.0;

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Fixed pixel widths rendered between the percentage and natural previews.
pub const PREVIEW_PIXEL_WIDTHS: &[u32] = &[300, 800, 1200];

/// Percentages of the available column width rendered first.
pub const PREVIEW_PERCENT_WIDTHS: &[u16] = &[50, 100];

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!ZOOM_FACTOR_OPTIONS.is_empty());
    assert!(!MAGNIFIER_SIZE_OPTIONS.is_empty());
    assert!(DEFAULT_ZOOM_FACTOR > 0.0);
    assert!(DEFAULT_MAGNIFIER_SIZE > 0);

    // Pickers rely on ascending order: the first entry is the clamp floor.
    let mut i = 1;
    while i < ZOOM_FACTOR_OPTIONS.len() {
        assert!(ZOOM_FACTOR_OPTIONS[i] > ZOOM_FACTOR_OPTIONS[i - 1]);
        i += 1;
    }
    let mut j = 1;
    while j < MAGNIFIER_SIZE_OPTIONS.len() {
        assert!(MAGNIFIER_SIZE_OPTIONS[j] > MAGNIFIER_SIZE_OPTIONS[j - 1]);
        j += 1;
    }

    // Defaults must be selectable so a fresh install shows an active option.
    let mut found_zoom = false;
    let mut k = 0;
    while k < ZOOM_FACTOR_OPTIONS.len() {
        if (ZOOM_FACTOR_OPTIONS[k] * 10.0) as i32 == (DEFAULT_ZOOM_FACTOR * 10.0) as i32 {
            found_zoom = true;
        }
        k += 1;
    }
    assert!(found_zoom);

    let mut found_size = false;
    let mut m = 0;
    while m < MAGNIFIER_SIZE_OPTIONS.len() {
        if MAGNIFIER_SIZE_OPTIONS[m] == DEFAULT_MAGNIFIER_SIZE {
            found_size = true;
        }
        m += 1;
    }
    assert!(found_size);
};
