//! Nominal strategy: shared variant rendering for single cron fields
//!
//! Used directly for day of month, month, day of week and year, and by the
//! time strategy for hour, minute and second in the general case. Months
//! and weekdays render through their locale names; other fields render
//! numerically through the `unit_value` template.

use super::DescriptionStrategy;
use crate::bundle::{LocaleBundle, UNITS_PLACEHOLDER, UNIT_PLACEHOLDER};
use crate::error::{DescribeError, Result};
use crate::types::{FieldExpression, FieldKind};
use chrono::{Month, Weekday};

/// Cron month numbers 1-12
const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Cron weekday numbers 0-7, Sunday at both ends
const WEEKDAYS: [Weekday; 8] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// What a bare `*` renders to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlwaysPhrase {
    /// Nothing; the field does not narrow the schedule
    Silent,
    /// "every <unit>"
    EveryUnit,
}

/// Strategy for one field rendered through the shared variant rules
#[derive(Debug, Clone)]
pub struct NominalDescriptionStrategy<'a> {
    bundle: &'a LocaleBundle,
    field: FieldKind,
    expression: Option<&'a FieldExpression>,
    /// Bundle key of the preposition before single values and lists
    preposition: &'static str,
    always: AlwaysPhrase,
}

impl<'a> NominalDescriptionStrategy<'a> {
    pub fn new(
        bundle: &'a LocaleBundle,
        field: FieldKind,
        expression: Option<&'a FieldExpression>,
        preposition: &'static str,
        always: AlwaysPhrase,
    ) -> Self {
        Self {
            bundle,
            field,
            expression,
            preposition,
            always,
        }
    }

    fn render(&self, expression: &FieldExpression, in_list: bool) -> Result<String> {
        match expression {
            FieldExpression::Always => {
                if in_list {
                    return Err(self.unhandled(expression));
                }
                match self.always {
                    AlwaysPhrase::Silent => Ok(String::new()),
                    AlwaysPhrase::EveryUnit => self.bundle.format("every_x", &[UNIT_PLACEHOLDER]),
                }
            }
            FieldExpression::QuestionMark => {
                if in_list || !self.is_day_field() {
                    return Err(self.unhandled(expression));
                }
                Ok(String::new())
            }
            FieldExpression::Single(value) => {
                let label = self.label(*value)?;
                if in_list {
                    Ok(label)
                } else {
                    self.with_preposition(&label)
                }
            }
            FieldExpression::Range { start, end } => self.bundle.format(
                "from_x_to_y",
                &[&self.label(*start)?, &self.label(*end)?],
            ),
            FieldExpression::Between { start, end } => self.between(*start, *end),
            FieldExpression::List(members) => {
                if in_list {
                    return Err(self.unhandled(expression));
                }
                if members.is_empty() {
                    return Err(DescribeError::InvalidExpression {
                        field: self.field,
                        reason: "empty list".to_string(),
                    });
                }
                let rendered = members
                    .iter()
                    .map(|member| self.render(member, true))
                    .collect::<Result<Vec<_>>>()?;
                let joined = self.join_list(&rendered)?;
                self.with_preposition(&joined)
            }
            FieldExpression::Every { expression, step } => self.every(expression, *step),
            FieldExpression::On { expression: base, nth } => {
                let (FieldKind::DayOfWeek, FieldExpression::Single(day)) = (self.field, &**base)
                else {
                    return Err(self.unhandled(expression));
                };
                let ordinal = self.bundle.lookup(&format!("ordinal.{}", nth)).ok_or(
                    DescribeError::InvalidValue {
                        field: self.field,
                        value: *nth,
                    },
                )?;
                self.bundle
                    .format("nth_of_every_month", &[ordinal, &self.label(*day)?])
            }
            FieldExpression::Last(None) if self.field == FieldKind::DayOfMonth => {
                Ok(self.bundle.get("last_day_of_month")?.to_string())
            }
            FieldExpression::Last(Some(day)) if self.field == FieldKind::DayOfWeek => self
                .bundle
                .format("last_of_every_month", &[&self.label(*day)?]),
            FieldExpression::Last(_) => Err(self.unhandled(expression)),
            FieldExpression::LastWeekday => {
                if self.field != FieldKind::DayOfMonth {
                    return Err(self.unhandled(expression));
                }
                Ok(self.bundle.get("last_weekday_of_month")?.to_string())
            }
            FieldExpression::NearestWeekday(day) => {
                if self.field != FieldKind::DayOfMonth {
                    return Err(self.unhandled(expression));
                }
                self.bundle
                    .format("nearest_weekday_to", &[&self.label(*day)?])
            }
        }
    }

    /// `base/step`
    fn every(&self, base: &FieldExpression, step: u32) -> Result<String> {
        let cadence = self.cadence(step)?;
        match base {
            FieldExpression::Always => Ok(cadence),
            FieldExpression::Single(start) => {
                let starting = self
                    .bundle
                    .format("starting_with", &[&self.label(*start)?])?;
                Ok(format!("{} {}", cadence, starting))
            }
            FieldExpression::Range { start, end } | FieldExpression::Between { start, end } => {
                Ok(format!("{} {}", cadence, self.between(*start, *end)?))
            }
            other => Err(self.unhandled(other)),
        }
    }

    /// "every {unit}" or "every n {units}"
    fn cadence(&self, step: u32) -> Result<String> {
        match step {
            0 => Err(DescribeError::InvalidExpression {
                field: self.field,
                reason: "step must be positive".to_string(),
            }),
            1 => self.bundle.format("every_x", &[UNIT_PLACEHOLDER]),
            n => self
                .bundle
                .format("every_n_x", &[&n.to_string(), UNITS_PLACEHOLDER]),
        }
    }

    fn between(&self, start: u32, end: u32) -> Result<String> {
        self.bundle.format(
            "between_x_and_y",
            &[&self.label(start)?, &self.label(end)?],
        )
    }

    fn with_preposition(&self, phrase: &str) -> Result<String> {
        let preposition = self.bundle.get(self.preposition)?;
        self.bundle.format("with_preposition", &[preposition, phrase])
    }

    /// Members joined by the separator, with "and" before the last one
    fn join_list(&self, members: &[String]) -> Result<String> {
        match members.split_last() {
            None => Ok(String::new()),
            Some((last, [])) => Ok(last.clone()),
            Some((last, init)) => {
                let separator = self.bundle.get("list_separator")?;
                let and = self.bundle.get("and")?;
                self.bundle.format(
                    "list_last",
                    &[init.join(separator).as_str(), and, last.as_str()],
                )
            }
        }
    }

    /// Display form of a single value
    fn label(&self, value: u32) -> Result<String> {
        let invalid = || DescribeError::InvalidValue {
            field: self.field,
            value,
        };
        match self.field {
            FieldKind::Month => {
                let month = value
                    .checked_sub(1)
                    .and_then(|i| MONTHS.get(i as usize))
                    .ok_or_else(invalid)?;
                let key = format!("month.{}", month.name().to_lowercase());
                Ok(self.bundle.get(&key)?.to_string())
            }
            FieldKind::DayOfWeek => {
                let weekday = WEEKDAYS.get(value as usize).ok_or_else(invalid)?;
                let key = format!("day_of_week.{}", weekday.to_string().to_lowercase());
                Ok(self.bundle.get(&key)?.to_string())
            }
            _ => {
                let specific = format!("unit_value.{}", self.field.unit().key());
                let template = match self.bundle.lookup(&specific) {
                    Some(_) => specific.as_str(),
                    None => "unit_value",
                };
                self.bundle.format(template, &[&value.to_string()])
            }
        }
    }

    fn is_day_field(&self) -> bool {
        matches!(self.field, FieldKind::DayOfMonth | FieldKind::DayOfWeek)
    }

    fn unhandled(&self, expression: &FieldExpression) -> DescribeError {
        DescribeError::UnhandledVariant {
            field: self.field,
            variant: expression.variant_name(),
        }
    }
}

impl DescriptionStrategy for NominalDescriptionStrategy<'_> {
    fn describe(&self) -> Result<String> {
        match self.expression {
            None => Ok(String::new()),
            Some(expression) => self.render(expression, false),
        }
    }
}
