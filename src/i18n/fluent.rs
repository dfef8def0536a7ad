// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl I18n {
    /// Loads the embedded translations, then any `.ftl` files in `i18n_dir`
    /// (which replace embedded locales of the same name).
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<&Path>, config: &Config) -> Self {
        let mut sources: HashMap<LanguageIdentifier, String> = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_from_filename(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                sources.insert(locale, String::from_utf8_lossy(content.data.as_ref()).to_string());
            }
        }

        if let Some(dir) = i18n_dir {
            load_directory(dir, &mut sources);
        }

        let mut bundles = HashMap::new();
        for (locale, source) in sources {
            if let Some(bundle) = build_bundle(&locale, source) {
                bundles.insert(locale, bundle);
            }
        }

        let mut available_locales: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);
        tracing::debug!(locale = %current_locale, "resolved UI language");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key` with named placeables, e.g. `{ $shape }`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.to_string());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn locale_from_filename(filename: &str) -> Option<LanguageIdentifier> {
    filename.strip_suffix(".ftl")?.parse().ok()
}

fn load_directory(dir: &Path, sources: &mut HashMap<LanguageIdentifier, String>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::warn!(dir = %dir.display(), %error, "cannot read translation directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(locale) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(locale_from_filename)
        else {
            continue;
        };
        match fs::read_to_string(&path) {
            Ok(content) => {
                sources.insert(locale, content);
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "cannot read translation file");
            }
        }
    }
}

fn build_bundle(
    locale: &LanguageIdentifier,
    source: String,
) -> Option<FluentBundle<FluentResource>> {
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            tracing::warn!(%locale, errors = errors.len(), "translation file has syntax errors");
            resource
        }
    };
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Placeables render without Unicode isolation marks in plain iced text.
    bundle.set_use_isolating(false);
    if bundle.add_resource(resource).is_err() {
        tracing::warn!(%locale, "translation file has duplicate messages");
        return None;
    }
    Some(bundle)
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let pick = |raw: &str| {
        raw.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    cli_lang
        .as_deref()
        .and_then(pick)
        .or_else(|| config.general.language.as_deref().and_then(pick))
        .or_else(|| sys_locale::get_locale().as_deref().and_then(pick))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_ignores_unavailable_cli_language() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("de".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_default() {
        let config = Config::default();
        let lang = resolve_locale(None, &config, &available());
        // Depends on the OS locale; whatever comes back must be available.
        if let Some(l) = lang {
            assert!(available().contains(&l));
        }
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"fr".parse().unwrap()));
        assert_eq!(i18n.tr("notice-select-one-file"), "Select one file");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_are_substituted() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        assert_eq!(
            i18n.tr_with_args("tooltip-change-shape", &[("shape", "square")]),
            "Change shape to square"
        );
    }

    #[test]
    fn set_locale_ignores_unknown_locale() {
        let mut i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        i18n.set_locale("fr".parse().unwrap());
        assert_eq!(i18n.current_locale(), &"fr".parse::<LanguageIdentifier>().unwrap());

        i18n.set_locale("ja".parse().unwrap());
        assert_eq!(i18n.current_locale(), &"fr".parse::<LanguageIdentifier>().unwrap());
    }

    #[test]
    fn directory_files_override_embedded_locale() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(
            temp_dir.path().join("en-US.ftl"),
            "notice-select-one-file = Pick exactly one\n",
        )
        .expect("write ftl");
        fs::write(temp_dir.path().join("de.ftl"), "notice-ok = Gut\n").expect("write ftl");

        let mut i18n = I18n::new(Some("en-US".to_string()), Some(temp_dir.path()), &Config::default());
        assert_eq!(i18n.tr("notice-select-one-file"), "Pick exactly one");

        i18n.set_locale("de".parse().unwrap());
        assert_eq!(i18n.tr("notice-ok"), "Gut");
    }
}
