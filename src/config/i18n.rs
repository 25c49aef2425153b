//! `[i18n]` section configuration.

use super::{ConfigDiagnostics, defaults};
use educe::Educe;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, sync::LazyLock};

/// BCP 47 tag: language, optional script, optional region, then variants.
///
/// Subtags are case-insensitive (`pt-br` and `pt-BR` name the same locale).
static LOCALE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i-u)^[a-z]{2,3}(-[a-z]{4})?(-([a-z]{2}|[0-9]{3}))?(-([a-z0-9]{5,8}|[0-9][a-z0-9]{3}))*$",
    )
    .unwrap()
});

/// `[i18n]` section - locale defaults.
///
/// # Example
/// ```toml
/// [i18n]
/// defaultLocale = "pt"
/// locales = ["pt", "en"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct I18nConfig {
    /// Locale used for `<html lang>` and unprefixed routes.
    #[serde(default = "defaults::i18n::default_locale")]
    #[educe(Default = defaults::i18n::default_locale())]
    pub default_locale: String,

    /// Every locale the site is generated for.
    #[serde(default = "defaults::i18n::locales")]
    #[educe(Default = defaults::i18n::locales())]
    pub locales: Vec<String>,
}

impl I18nConfig {
    /// Whether `locale` is one of the declared locales.
    pub fn supports(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.locales.is_empty() {
            diag.error("i18n.locales", "must declare at least one locale");
        }

        let mut seen = HashSet::new();
        for (i, locale) in self.locales.iter().enumerate() {
            if !is_locale_tag(locale) {
                diag.error_with_hint(
                    format!("i18n.locales[{i}]"),
                    format!("`{locale}` is not a valid locale tag"),
                    "use a BCP 47 tag such as `pt`, `en` or `pt-BR`",
                );
            }
            if !seen.insert(locale.as_str()) {
                diag.error(
                    format!("i18n.locales[{i}]"),
                    format!("`{locale}` is declared more than once"),
                );
            }
        }

        if !self.supports(&self.default_locale) {
            diag.error_with_hint(
                "i18n.defaultLocale",
                format!("`{}` is not in `i18n.locales`", self.default_locale),
                format!("add \"{}\" to `i18n.locales`", self.default_locale),
            );
        }
    }
}

fn is_locale_tag(tag: &str) -> bool {
    LOCALE_TAG.is_match(tag)
}
