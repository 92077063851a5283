//! Locale bundles: the localized text store behind every description
//!
//! A `LocaleBundle` maps template keys to locale text. Templates use
//! positional slots (`{0}`, `{1}`) filled by [`LocaleBundle::format`], plus
//! the unit placeholders [`UNIT_PLACEHOLDER`] and [`UNITS_PLACEHOLDER`] that
//! survive formatting and are resolved later with [`LocaleBundle::fill_unit`].
//!
//! Bundles are plain values. `BundleRegistry` resolves a locale tag to a
//! bundle once, and the result is injected into a `CronDescriptor`.

use crate::error::{DescribeError, Result};
use crate::locales;
use crate::types::Unit;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// Placeholder for the singular unit noun of a field group
pub const UNIT_PLACEHOLDER: &str = "{unit}";

/// Placeholder for the plural unit noun of a field group
pub const UNITS_PLACEHOLDER: &str = "{units}";

/// Key → template mapping for one locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleBundle {
    /// Locale tag (e.g., "en", "zh")
    locale: String,

    /// Template key → locale text
    entries: HashMap<String, String>,
}

impl LocaleBundle {
    /// Create a bundle from key/template pairs
    pub fn new<K, V>(locale: impl Into<String>, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            locale: locale.into(),
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a bundle from JSON: `{"locale": "en", "entries": {...}}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON bundle file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Built-in English bundle
    pub fn english() -> Self {
        static EN: OnceLock<LocaleBundle> = OnceLock::new();
        EN.get_or_init(|| LocaleBundle::new("en", locales::en::ENTRIES.iter().copied()))
            .clone()
    }

    /// Built-in Simplified Chinese bundle
    pub fn chinese() -> Self {
        static ZH: OnceLock<LocaleBundle> = OnceLock::new();
        ZH.get_or_init(|| LocaleBundle::new("zh", locales::zh::ENTRIES.iter().copied()))
            .clone()
    }

    /// Locale tag of this bundle
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Number of templates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a template, failing if the key is absent
    pub fn get(&self, key: &str) -> Result<&str> {
        self.lookup(key)
            .ok_or_else(|| DescribeError::MissingTemplateKey {
                locale: self.locale.clone(),
                key: key.to_string(),
            })
    }

    /// Look up an optional template
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Format a template, filling `{0}`, `{1}`, ... from `args`
    ///
    /// Braces that are not positional slots (such as the unit placeholders)
    /// are kept verbatim.
    pub fn format(&self, key: &str, args: &[&str]) -> Result<String> {
        Ok(fill_positional(self.get(key)?, args))
    }

    /// Join non-empty clauses with the locale's `clause_separator`
    pub fn join_clauses(&self, clauses: &[String]) -> Result<String> {
        let separator = self.get("clause_separator")?;
        Ok(clauses
            .iter()
            .map(|clause| clause.trim())
            .filter(|clause| !clause.is_empty())
            .collect::<Vec<_>>()
            .join(separator))
    }

    /// Replace unit placeholders in `phrase` with this bundle's nouns
    pub fn fill_unit(&self, phrase: &str, unit: Unit) -> Result<String> {
        let mut filled = phrase.to_string();
        if filled.contains(UNITS_PLACEHOLDER) {
            filled = filled.replace(UNITS_PLACEHOLDER, self.get(unit.plural_key())?);
        }
        if filled.contains(UNIT_PLACEHOLDER) {
            filled = filled.replace(UNIT_PLACEHOLDER, self.get(unit.key())?);
        }
        Ok(filled)
    }
}

/// Single-pass positional substitution so that argument text is never
/// rescanned for slots
fn fill_positional(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let slot = &after[..close];
        match slot.parse::<usize>().ok().and_then(|i| args.get(i)) {
            Some(arg) => out.push_str(arg),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Resolves locale tags to bundles
///
/// Tags are matched case-insensitively with `_` treated as `-`. An exact
/// match wins, then the primary language subtag (`en-GB` → `en`). There is
/// no fallback to a default locale.
#[derive(Debug, Clone, Default)]
pub struct BundleRegistry {
    /// normalized tag → bundle
    bundles: HashMap<String, LocaleBundle>,
}

impl BundleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in English and Chinese bundles
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(LocaleBundle::english());
        registry.register(LocaleBundle::chinese());
        registry
    }

    /// Add a bundle, replacing any bundle with the same tag
    pub fn register(&mut self, bundle: LocaleBundle) {
        let tag = normalize_tag(bundle.locale());
        if self.bundles.insert(tag.clone(), bundle).is_some() {
            tracing::debug!(locale = %tag, "Replaced locale bundle");
        }
    }

    /// Resolve a locale tag to a bundle
    pub fn resolve(&self, locale: &str) -> Result<LocaleBundle> {
        let tag = normalize_tag(locale);
        let language = tag.split('-').next().unwrap_or_default();

        self.bundles
            .get(&tag)
            .or_else(|| self.bundles.get(language))
            .cloned()
            .ok_or_else(|| DescribeError::UnsupportedLocale(locale.to_string()))
    }

    /// Registered tags, sorted
    pub fn locales(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.bundles.keys().cloned().collect();
        tags.sort();
        tags
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase().replace('_', "-")
}
