//! Description strategies: one per cron field group
//!
//! Each strategy captures a bundle and the expressions of its field group
//! and renders a phrase. Day, month and year phrases leave the unit noun as a
//! placeholder; the descriptor fills it in. The time strategy resolves its
//! own nouns because it mixes three units in one clause.

use crate::bundle::LocaleBundle;
use crate::error::Result;
use crate::types::{FieldExpression, FieldKind};

pub mod nominal;
pub mod time;

pub use nominal::{AlwaysPhrase, NominalDescriptionStrategy};
pub use time::TimeDescriptionStrategy;

/// Renders one field group
pub trait DescriptionStrategy {
    /// Describe the captured expressions
    ///
    /// Pure: repeated calls return the same text.
    fn describe(&self) -> Result<String>;
}

/// Strategy for hours, minutes and seconds combined
pub fn hh_mm_ss_instance<'a>(
    bundle: &'a LocaleBundle,
    hours: Option<&'a FieldExpression>,
    minutes: Option<&'a FieldExpression>,
    seconds: Option<&'a FieldExpression>,
) -> Box<dyn DescriptionStrategy + 'a> {
    Box::new(TimeDescriptionStrategy::new(bundle, hours, minutes, seconds))
}

/// Strategy for day of month
pub fn days_of_month_instance<'a>(
    bundle: &'a LocaleBundle,
    expression: Option<&'a FieldExpression>,
) -> Box<dyn DescriptionStrategy + 'a> {
    Box::new(NominalDescriptionStrategy::new(
        bundle,
        FieldKind::DayOfMonth,
        expression,
        "on",
        AlwaysPhrase::Silent,
    ))
}

/// Strategy for month
pub fn months_instance<'a>(
    bundle: &'a LocaleBundle,
    expression: Option<&'a FieldExpression>,
) -> Box<dyn DescriptionStrategy + 'a> {
    Box::new(NominalDescriptionStrategy::new(
        bundle,
        FieldKind::Month,
        expression,
        "in",
        AlwaysPhrase::Silent,
    ))
}

/// Strategy for day of week
pub fn days_of_week_instance<'a>(
    bundle: &'a LocaleBundle,
    expression: Option<&'a FieldExpression>,
) -> Box<dyn DescriptionStrategy + 'a> {
    Box::new(NominalDescriptionStrategy::new(
        bundle,
        FieldKind::DayOfWeek,
        expression,
        "on",
        AlwaysPhrase::Silent,
    ))
}

/// Generic single-field strategy, used for year
pub fn plain_instance<'a>(
    bundle: &'a LocaleBundle,
    expression: Option<&'a FieldExpression>,
) -> Box<dyn DescriptionStrategy + 'a> {
    Box::new(NominalDescriptionStrategy::new(
        bundle,
        FieldKind::Year,
        expression,
        "in",
        AlwaysPhrase::EveryUnit,
    ))
}
