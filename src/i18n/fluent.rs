// SPDX-License-Identifier: MPL-2.0
use crate::config::{Config, DEFAULT_LOCALE};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
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
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                log::warn!("ignoring translation file with invalid locale: {filename}");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    log::warn!("{filename}: {} syntax error(s)", errors.len());
                    resource
                }
            };

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Unicode isolation marks would leak into labels and tooltips.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                log::warn!("{filename}: {} duplicate message(s)", errors.len());
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(|locale| locale.to_string());

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key` with string arguments.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.format(key, Some(&fluent_args))
    }

    /// Translates `key` with numeric arguments, so plural selectors apply
    /// the locale's plural rules to them.
    pub fn tr_with_numbers(&self, key: &str, args: &[(&str, u64)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.format(key, Some(&fluent_args))
    }

    /// Formats `value` with `fraction_digits` decimals and the locale's
    /// decimal separator (`number-decimal-separator`, `.` when undefined).
    pub fn format_decimal(&self, value: f64, fraction_digits: usize) -> String {
        let formatted = format!("{value:.fraction_digits$}");
        match self.try_tr("number-decimal-separator") {
            Some(separator) if separator != "." => formatted.replacen('.', &separator, 1),
            _ => formatted,
        }
    }

    /// Returns the `chrono` locale matching the current language.
    ///
    /// Tries `lang_REGION`, then `lang_LANG` (e.g. `fr_FR`), then falls back to POSIX.
    pub fn chrono_locale(&self) -> chrono::Locale {
        let language = self.current_locale.language.as_str();
        let mut candidates = Vec::new();
        if let Some(region) = self.current_locale.region {
            candidates.push(format!("{}_{}", language, region.as_str()));
        }
        candidates.push(format!("{}_{}", language, language.to_uppercase()));
        if language == "en" {
            candidates.push("en_US".to_string());
        }

        candidates
            .iter()
            .find_map(|name| chrono::Locale::try_from(name.as_str()).ok())
            .unwrap_or(chrono::Locale::POSIX)
    }

    /// Translates `key`, or `None` when no bundle defines it.
    pub fn try_tr(&self, key: &str) -> Option<String> {
        self.lookup(key, None)
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        self.lookup(key, args)
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    fn lookup(&self, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(&self.current_locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            log::debug!("formatting {key} reported {} error(s)", errors.len());
            return None;
        }
        Some(value.to_string())
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default())
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.general.language.clone(),
        sys_locale::get_locale(),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|lang_str| lang_str.parse::<LanguageIdentifier>().ok())
        .find_map(|lang| match_available(&lang, available))
}

/// Exact match first, then a bundle sharing the language subtag
/// (`fr-CA` → `fr`).
fn match_available(
    lang: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    if available.contains(lang) {
        return Some(lang.clone());
    }
    available
        .iter()
        .find(|candidate| candidate.language == lang.language)
        .cloned()
}
