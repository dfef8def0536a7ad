// SPDX-License-Identifier: MPL-2.0
//! User interface: widgets, components, and the styles they share.

pub mod components;
pub mod controls;
pub mod design_tokens;
pub mod empty_state;
pub mod picker;
pub mod preview;
pub mod styles;
pub mod theming;
pub mod widgets;
