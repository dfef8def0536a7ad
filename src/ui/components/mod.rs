// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! # Components
//!
//! - [`modal`] - Layers a dialog over the rest of the window and blocks
//!   input to it
//! - [`notice`] - Blocking message the user must acknowledge

pub mod modal;
pub mod notice;
