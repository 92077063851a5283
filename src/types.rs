//! Core types for describing parsed cron fields
//!
//! Expressions are produced by an upstream cron parser and arrive already
//! validated. All types serialize to JSON so a parser running elsewhere can
//! hand them over as-is.

use serde::{Deserialize, Serialize};

/// A cron field position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Second,
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
    Year,
}

impl FieldKind {
    /// The unit noun used when describing this field
    pub fn unit(&self) -> Unit {
        match self {
            FieldKind::Second => Unit::Second,
            FieldKind::Minute => Unit::Minute,
            FieldKind::Hour => Unit::Hour,
            FieldKind::DayOfMonth | FieldKind::DayOfWeek => Unit::Day,
            FieldKind::Month => Unit::Month,
            FieldKind::Year => Unit::Year,
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Second => write!(f, "second"),
            FieldKind::Minute => write!(f, "minute"),
            FieldKind::Hour => write!(f, "hour"),
            FieldKind::DayOfMonth => write!(f, "day of month"),
            FieldKind::Month => write!(f, "month"),
            FieldKind::DayOfWeek => write!(f, "day of week"),
            FieldKind::Year => write!(f, "year"),
        }
    }
}

/// Unit nouns a description can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl Unit {
    /// Bundle key of the singular noun
    pub fn key(&self) -> &'static str {
        match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }

    /// Bundle key of the plural noun
    pub fn plural_key(&self) -> &'static str {
        match self {
            Unit::Second => "seconds",
            Unit::Minute => "minutes",
            Unit::Hour => "hours",
            Unit::Day => "days",
            Unit::Month => "months",
            Unit::Year => "years",
        }
    }
}

/// One parsed cron field expression
///
/// Values are plain integers. Months run 1-12; days of week use cron
/// numbering where both 0 and 7 mean Sunday. Display names are resolved
/// through the locale bundle.
///
/// The parser guarantees validity. A `Range` whose start exceeds its end is
/// described exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldExpression {
    /// `*`
    Always,
    /// `?`, no specific value (day fields only)
    QuestionMark,
    /// A single value
    Single(u32),
    /// `a-b`
    Range { start: u32, end: u32 },
    /// A bounded window, usually the base of a step
    Between { start: u32, end: u32 },
    /// `a,b,c` in parse order
    List(Vec<FieldExpression>),
    /// `base/step`
    Every {
        expression: Box<FieldExpression>,
        step: u32,
    },
    /// `d#n`, the nth given weekday of the month
    On {
        expression: Box<FieldExpression>,
        nth: u32,
    },
    /// `L` (last day of month) or `dL` (last given weekday of month)
    Last(Option<u32>),
    /// `LW`
    LastWeekday,
    /// `dW`
    NearestWeekday(u32),
}

impl FieldExpression {
    pub fn range(start: u32, end: u32) -> Self {
        FieldExpression::Range { start, end }
    }

    pub fn between(start: u32, end: u32) -> Self {
        FieldExpression::Between { start, end }
    }

    pub fn list(members: impl IntoIterator<Item = FieldExpression>) -> Self {
        FieldExpression::List(members.into_iter().collect())
    }

    pub fn every(expression: FieldExpression, step: u32) -> Self {
        FieldExpression::Every {
            expression: Box::new(expression),
            step,
        }
    }

    pub fn on(expression: FieldExpression, nth: u32) -> Self {
        FieldExpression::On {
            expression: Box::new(expression),
            nth,
        }
    }

    /// Stable variant name used in error messages
    pub fn variant_name(&self) -> &'static str {
        match self {
            FieldExpression::Always => "always",
            FieldExpression::QuestionMark => "question_mark",
            FieldExpression::Single(_) => "single",
            FieldExpression::Range { .. } => "range",
            FieldExpression::Between { .. } => "between",
            FieldExpression::List(_) => "list",
            FieldExpression::Every { .. } => "every",
            FieldExpression::On { .. } => "on",
            FieldExpression::Last(_) => "last",
            FieldExpression::LastWeekday => "last_weekday",
            FieldExpression::NearestWeekday(_) => "nearest_weekday",
        }
    }
}

/// A field position paired with its parsed expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedField {
    pub field: FieldKind,
    pub expression: FieldExpression,
}

impl ParsedField {
    pub fn new(field: FieldKind, expression: FieldExpression) -> Self {
        Self { field, expression }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kind_units() {
        assert_eq!(FieldKind::DayOfMonth.unit(), Unit::Day);
        assert_eq!(FieldKind::DayOfWeek.unit(), Unit::Day);
        assert_eq!(FieldKind::Month.unit(), Unit::Month);
        assert_eq!(FieldKind::Year.unit().plural_key(), "years");
    }

    #[test]
    fn test_field_kind_display() {
        assert_eq!(FieldKind::DayOfMonth.to_string(), "day of month");
        assert_eq!(FieldKind::Second.to_string(), "second");
    }

    #[test]
    fn test_expression_json_shape() {
        let expr = FieldExpression::every(FieldExpression::range(0, 30), 5);
        let json = serde_json::to_value(&expr).unwrap();
        assert_eq!(json["type"], "every");
        assert_eq!(json["value"]["step"], 5);
        assert_eq!(json["value"]["expression"]["type"], "range");
        assert_eq!(json["value"]["expression"]["value"]["end"], 30);
    }

    #[test]
    fn test_parsed_field_from_json() {
        let field: ParsedField = serde_json::from_value(serde_json::json!({
            "field": "day_of_week",
            "expression": {"type": "on", "value": {"expression": {"type": "single", "value": 5}, "nth": 2}}
        }))
        .unwrap();
        assert_eq!(field.field, FieldKind::DayOfWeek);
        assert_eq!(
            field.expression,
            FieldExpression::on(FieldExpression::Single(5), 2)
        );

        let always: FieldExpression =
            serde_json::from_value(serde_json::json!({"type": "always"})).unwrap();
        assert_eq!(always, FieldExpression::Always);
    }

    #[test]
    fn test_variant_name() {
        assert_eq!(FieldExpression::LastWeekday.variant_name(), "last_weekday");
        assert_eq!(FieldExpression::List(vec![]).variant_name(), "list");
    }
}
