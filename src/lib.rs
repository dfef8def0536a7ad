// SPDX-License-Identifier: MPL-2.0
//! `iced_loupe` previews one local image at several display widths at once,
//! each with a magnifying lens, built with the Iced GUI framework.
//!
//! Lens zoom, size and shape are remembered across sessions in a small
//! key-value store; the interface is localized with Fluent.

#![doc(html_root_url = "https://docs.rs/iced_loupe/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod preferences;
pub mod selection;
pub mod ui;
