// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use the Fluent localization system. The `.ftl` files under
//! `assets/i18n/` are embedded in the binary; a directory passed with
//! `--i18n-dir` can add locales or replace embedded ones.
//!
//! The UI language is resolved from the CLI, then `settings.toml`, then the
//! OS locale, and falls back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
