// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod magnifier;
pub mod shape_glyph;

pub use animated_spinner::AnimatedSpinner;
pub use magnifier::Magnifier;
pub use shape_glyph::ShapeGlyph;
