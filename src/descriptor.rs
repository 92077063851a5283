//! CronDescriptor: composes field-group phrases into one sentence
//!
//! Groups are rendered in a fixed order: time, day of month, month, day of
//! week, year. Unit placeholders in the last four are filled from the
//! descriptor's bundle. Non-empty phrases are joined with the locale's
//! clause separator, then whitespace is collapsed.

use crate::bundle::{BundleRegistry, LocaleBundle};
use crate::error::Result;
use crate::strategy::{self, DescriptionStrategy};
use crate::types::{FieldExpression, FieldKind, ParsedField, Unit};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Locale used by `CronDescriptor::default()`
pub const DEFAULT_LOCALE: &str = "en";

/// Describes parsed cron fields in one locale
///
/// Holds only immutable data, so a single instance can be shared across
/// threads and reused for any number of requests.
#[derive(Debug, Clone)]
pub struct CronDescriptor {
    bundle: LocaleBundle,
}

impl CronDescriptor {
    /// Create a descriptor over an already-resolved bundle
    pub fn new(bundle: LocaleBundle) -> Self {
        tracing::debug!(locale = bundle.locale(), "Created cron descriptor");
        Self { bundle }
    }

    /// Create a descriptor for a built-in locale
    ///
    /// Fails with `UnsupportedLocale` rather than falling back to English.
    pub fn for_locale(locale: &str) -> Result<Self> {
        let bundle = builtin_registry().resolve(locale)?;
        Ok(Self::new(bundle))
    }

    /// The bundle this descriptor renders with
    pub fn bundle(&self) -> &LocaleBundle {
        &self.bundle
    }

    /// Describe a parsed cron schedule
    ///
    /// Missing fields are allowed. If a field kind appears more than once,
    /// the last entry wins.
    pub fn describe(&self, fields: &[ParsedField]) -> Result<String> {
        let expressions = index_fields(fields);
        let get = |kind: FieldKind| expressions.get(&kind).copied();
        let bundle = &self.bundle;

        let groups: [(Box<dyn DescriptionStrategy + '_>, Option<Unit>); 5] = [
            (
                strategy::hh_mm_ss_instance(
                    bundle,
                    get(FieldKind::Hour),
                    get(FieldKind::Minute),
                    get(FieldKind::Second),
                ),
                None,
            ),
            (
                strategy::days_of_month_instance(bundle, get(FieldKind::DayOfMonth)),
                Some(Unit::Day),
            ),
            (
                strategy::months_instance(bundle, get(FieldKind::Month)),
                Some(Unit::Month),
            ),
            (
                strategy::days_of_week_instance(bundle, get(FieldKind::DayOfWeek)),
                Some(Unit::Day),
            ),
            (
                strategy::plain_instance(bundle, get(FieldKind::Year)),
                Some(Unit::Year),
            ),
        ];

        let mut phrases = Vec::with_capacity(groups.len());
        for (strategy, unit) in &groups {
            let phrase = strategy.describe()?;
            let phrase = match unit {
                Some(unit) => bundle.fill_unit(&phrase, *unit)?,
                None => phrase,
            };
            tracing::trace!(phrase = %phrase, "Rendered field group");
            phrases.push(phrase);
        }

        let description = normalize_whitespace(&bundle.join_clauses(&phrases)?);
        tracing::debug!(
            locale = bundle.locale(),
            fields = fields.len(),
            description = %description,
            "Described cron schedule"
        );
        Ok(description)
    }
}

impl Default for CronDescriptor {
    fn default() -> Self {
        Self::new(LocaleBundle::english())
    }
}

fn builtin_registry() -> &'static BundleRegistry {
    static REGISTRY: OnceLock<BundleRegistry> = OnceLock::new();
    REGISTRY.get_or_init(BundleRegistry::builtin)
}

/// Map fields by kind; later duplicates overwrite earlier ones
fn index_fields(fields: &[ParsedField]) -> HashMap<FieldKind, &FieldExpression> {
    let mut expressions = HashMap::with_capacity(fields.len());
    for parsed in fields {
        if expressions.insert(parsed.field, &parsed.expression).is_some() {
            tracing::warn!(field = %parsed.field, "Duplicate cron field, keeping the last one");
        }
    }
    expressions
}

/// Collapse whitespace runs to one space and trim
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
