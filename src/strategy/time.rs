//! Time strategy: hours, minutes and seconds in one clause
//!
//! Common shapes collapse to short phrases ("every minute", "at 10:15").
//! Anything else falls back to describing each sub-field with the nominal
//! rules, reading hour, then minute, then second.

use super::nominal::{AlwaysPhrase, NominalDescriptionStrategy};
use super::DescriptionStrategy;
use crate::bundle::LocaleBundle;
use crate::error::{DescribeError, Result};
use crate::types::{FieldExpression, FieldKind, Unit};
use chrono::NaiveTime;

/// Strategy for the hour/minute/second group
#[derive(Debug, Clone)]
pub struct TimeDescriptionStrategy<'a> {
    bundle: &'a LocaleBundle,
    hours: Option<&'a FieldExpression>,
    minutes: Option<&'a FieldExpression>,
    seconds: Option<&'a FieldExpression>,
}

impl<'a> TimeDescriptionStrategy<'a> {
    pub fn new(
        bundle: &'a LocaleBundle,
        hours: Option<&'a FieldExpression>,
        minutes: Option<&'a FieldExpression>,
        seconds: Option<&'a FieldExpression>,
    ) -> Self {
        Self {
            bundle,
            hours,
            minutes,
            seconds,
        }
    }

    /// Short phrase for a common shape, if one applies
    fn shortcut(&self) -> Result<Option<String>> {
        let (h, m, s) = (self.hours, self.minutes, self.seconds);

        if h.is_none() && m.is_none() && s.is_none() {
            return self.every_unit(Unit::Second).map(Some);
        }
        if is_always(h) && is_always(m) && matches!(s, Some(FieldExpression::Always)) {
            return self.every_unit(Unit::Second).map(Some);
        }

        if is_always(h) && is_zero_or_absent(s) {
            match m {
                Some(FieldExpression::Always) => return self.every_unit(Unit::Minute).map(Some),
                None if s.is_some() => return self.every_unit(Unit::Minute).map(Some),
                Some(FieldExpression::Single(0)) => return self.every_unit(Unit::Hour).map(Some),
                Some(FieldExpression::Single(minute)) => {
                    return self
                        .bundle
                        .format("at_minute_of_every_hour", &[&minute.to_string()])
                        .map(Some);
                }
                _ => {}
            }
            if let Some(step) = step_of_always(m) {
                return self.cadence(FieldKind::Minute, step).map(Some);
            }
        }

        if is_always(h) && m.is_none() {
            if let Some(step) = step_of_always(s) {
                return self.cadence(FieldKind::Second, step).map(Some);
            }
        }

        if let (Some(step), Some(FieldExpression::Single(minute))) = (step_of_always(h), m) {
            if is_zero_or_absent(s) {
                return match step {
                    0 => Err(zero_step(FieldKind::Hour)),
                    1 => self
                        .bundle
                        .format("at_minute_of_every_hour", &[&minute.to_string()])
                        .map(Some),
                    n => self
                        .bundle
                        .format("every_n_hours_at_minute", &[&n.to_string(), &minute.to_string()])
                        .map(Some),
                };
            }
        }

        if let (Some(FieldExpression::Single(hour)), Some(FieldExpression::Single(minute))) = (h, m)
        {
            let clock = match s {
                None => clock_time(*hour, *minute, 0)?.format("%H:%M").to_string(),
                Some(FieldExpression::Single(second)) => clock_time(*hour, *minute, *second)?
                    .format("%H:%M:%S")
                    .to_string(),
                Some(_) => return Ok(None),
            };
            return self.bundle.format("at_time", &[&clock]).map(Some);
        }

        Ok(None)
    }

    /// Each restricted sub-field described on its own, hour first
    ///
    /// A `*` finer than the coarsest restricted field sets the cadence, so
    /// the finest such `*` leads as "every <unit>".
    /// A zero second is dropped once another phrase carries the clause.
    fn general(&self) -> Result<String> {
        let parts = [
            (FieldKind::Hour, self.hours),
            (FieldKind::Minute, self.minutes),
            (FieldKind::Second, self.seconds),
        ];

        let Some(coarsest) = parts.iter().position(|(_, e)| is_restricted(*e)) else {
            return self.every_unit(Unit::Second);
        };
        let finest_always = parts
            .iter()
            .rposition(|(_, e)| matches!(e, Some(FieldExpression::Always)))
            .filter(|&i| i > coarsest);

        let mut phrases = Vec::with_capacity(parts.len());
        if let Some(i) = finest_always {
            phrases.push(self.every_unit(parts[i].0.unit())?);
        }
        for (field, expression) in parts {
            let Some(expression) = expression.filter(|e| is_restricted(Some(*e))) else {
                continue;
            };
            if field == FieldKind::Second
                && *expression == FieldExpression::Single(0)
                && !phrases.is_empty()
            {
                continue;
            }
            let phrase = NominalDescriptionStrategy::new(
                self.bundle,
                field,
                Some(expression),
                "at",
                AlwaysPhrase::Silent,
            )
            .describe()?;
            phrases.push(self.bundle.fill_unit(&phrase, field.unit())?);
        }

        self.bundle.join_clauses(&phrases)
    }

    fn every_unit(&self, unit: Unit) -> Result<String> {
        self.bundle.format("every_x", &[self.bundle.get(unit.key())?])
    }

    /// "every minute" or "every n minutes"
    fn cadence(&self, field: FieldKind, step: u32) -> Result<String> {
        let unit = field.unit();
        match step {
            0 => Err(zero_step(field)),
            1 => self.every_unit(unit),
            n => self.bundle.format(
                "every_n_x",
                &[&n.to_string(), self.bundle.get(unit.plural_key())?],
            ),
        }
    }
}

impl DescriptionStrategy for TimeDescriptionStrategy<'_> {
    fn describe(&self) -> Result<String> {
        match self.shortcut()? {
            Some(phrase) => Ok(phrase),
            None => self.general(),
        }
    }
}

fn is_always(expression: Option<&FieldExpression>) -> bool {
    matches!(expression, None | Some(FieldExpression::Always))
}

/// Present and narrower than `*`
fn is_restricted(expression: Option<&FieldExpression>) -> bool {
    matches!(expression, Some(e) if *e != FieldExpression::Always)
}

fn is_zero_or_absent(expression: Option<&FieldExpression>) -> bool {
    matches!(expression, None | Some(FieldExpression::Single(0)))
}

/// Step of a `*/n` expression
fn step_of_always(expression: Option<&FieldExpression>) -> Option<u32> {
    match expression {
        Some(FieldExpression::Every { expression, step })
            if **expression == FieldExpression::Always =>
        {
            Some(*step)
        }
        _ => None,
    }
}

fn clock_time(hour: u32, minute: u32, second: u32) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
        let (field, value) = if hour > 23 {
            (FieldKind::Hour, hour)
        } else if minute > 59 {
            (FieldKind::Minute, minute)
        } else {
            (FieldKind::Second, second)
        };
        DescribeError::InvalidValue { field, value }
    })
}

fn zero_step(field: FieldKind) -> DescribeError {
    DescribeError::InvalidExpression {
        field,
        reason: "step must be positive".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldExpression::{Always, Single};

    fn describe(
        h: Option<FieldExpression>,
        m: Option<FieldExpression>,
        s: Option<FieldExpression>,
    ) -> Result<String> {
        let bundle = LocaleBundle::english();
        TimeDescriptionStrategy::new(&bundle, h.as_ref(), m.as_ref(), s.as_ref()).describe()
    }

    fn ok(
        h: Option<FieldExpression>,
        m: Option<FieldExpression>,
        s: Option<FieldExpression>,
    ) -> String {
        describe(h, m, s).unwrap()
    }

    #[test]
    fn test_every_second() {
        assert_eq!(ok(None, None, None), "every second");
        assert_eq!(ok(Some(Always), Some(Always), Some(Always)), "every second");
        assert_eq!(ok(None, None, Some(Always)), "every second");
    }

    #[test]
    fn test_every_minute() {
        assert_eq!(ok(None, Some(Always), None), "every minute");
        assert_eq!(ok(Some(Always), Some(Always), Some(Single(0))), "every minute");
    }

    #[test]
    fn test_every_hour() {
        assert_eq!(ok(Some(Always), Some(Single(0)), Some(Single(0))), "every hour");
        assert_eq!(ok(None, Some(Single(0)), None), "every hour");
    }

    #[test]
    fn test_every_n_minutes() {
        let every_five = FieldExpression::every(Always, 5);
        assert_eq!(ok(None, Some(every_five), Some(Single(0))), "every 5 minutes");
        let every_one = FieldExpression::every(Always, 1);
        assert_eq!(ok(Some(Always), Some(every_one), None), "every minute");
    }

    #[test]
    fn test_every_n_seconds() {
        let every_ten = FieldExpression::every(Always, 10);
        assert_eq!(ok(None, None, Some(every_ten)), "every 10 seconds");
    }

    #[test]
    fn test_every_n_hours_at_minute() {
        let every_two = FieldExpression::every(Always, 2);
        assert_eq!(
            ok(Some(every_two), Some(Single(30)), None),
            "every 2 hours at minute 30"
        );
        let every_one = FieldExpression::every(Always, 1);
        assert_eq!(
            ok(Some(every_one), Some(Single(30)), Some(Single(0))),
            "at minute 30 of every hour"
        );
    }

    #[test]
    fn test_clock_times() {
        assert_eq!(
            ok(Some(Single(10)), Some(Single(15)), Some(Single(0))),
            "at 10:15:00"
        );
        assert_eq!(ok(Some(Single(9)), Some(Single(5)), None), "at 09:05");
        assert_eq!(
            ok(Some(Single(23)), Some(Single(59)), Some(Single(59))),
            "at 23:59:59"
        );
    }

    #[test]
    fn test_minute_past_every_hour() {
        assert_eq!(ok(None, Some(Single(45)), None), "at minute 45 of every hour");
    }

    #[test]
    fn test_general_case() {
        let hours = FieldExpression::range(9, 17);
        let minutes = FieldExpression::every(FieldExpression::range(0, 30), 5);
        assert_eq!(
            ok(Some(hours), Some(minutes), Some(Single(0))),
            "from hour 9 to hour 17 every 5 minutes between minute 0 and minute 30"
        );
    }

    #[test]
    fn test_general_single_hour() {
        assert_eq!(ok(Some(Single(9)), None, None), "at hour 9");
        assert_eq!(
            ok(Some(Single(9)), None, Some(Single(30))),
            "at hour 9 at second 30"
        );
    }

    #[test]
    fn test_general_lists() {
        let minutes = FieldExpression::list([Single(0), Single(15), Single(30)]);
        assert_eq!(
            ok(Some(Single(8)), Some(minutes), None),
            "at hour 8 at minute 0, minute 15 and minute 30"
        );
    }

    #[test]
    fn test_restricted_hour_keeps_wildcard_cadence() {
        assert_eq!(
            ok(Some(Single(10)), Some(Always), Some(Single(0))),
            "every minute at hour 10"
        );
        assert_eq!(
            ok(Some(Single(10)), Some(Always), Some(Always)),
            "every second at hour 10"
        );
        assert_eq!(ok(Some(Single(10)), Some(Always), None), "every minute at hour 10");
        assert_eq!(ok(Some(Single(10)), None, Some(Always)), "every second at hour 10");
        assert_ne!(
            ok(Some(Single(10)), Some(Always), Some(Single(0))),
            ok(Some(Single(10)), Some(Always), Some(Always))
        );
    }

    #[test]
    fn test_wildcard_second_under_restricted_minute() {
        assert_eq!(
            ok(Some(Always), Some(Single(5)), Some(Always)),
            "every second at minute 5"
        );
        assert_eq!(
            ok(Some(Single(10)), Some(Single(5)), Some(Always)),
            "every second at hour 10 at minute 5"
        );
    }

    #[test]
    fn test_zero_second() {
        assert_eq!(ok(Some(Always), None, Some(Single(0))), "every minute");
        assert_eq!(ok(None, None, Some(Single(0))), "every minute");
        assert_eq!(
            ok(Some(Always), Some(FieldExpression::range(0, 30)), Some(Single(0))),
            "from minute 0 to minute 30"
        );
        assert_eq!(ok(Some(Single(10)), None, Some(Single(0))), "at hour 10");
    }

    #[test]
    fn test_wildcard_grid_renders() {
        let shapes = || [None, Some(Always), Some(Single(1))];
        for h in shapes() {
            for m in shapes() {
                for s in shapes() {
                    let label = format!("{h:?} {m:?} {s:?}");
                    let hour_pinned = matches!(h, Some(Single(_)));
                    let minute_wild = m == Some(Always);
                    let phrase = ok(h.clone(), m.clone(), s);
                    assert!(!phrase.is_empty(), "{label} rendered empty");
                    assert!(!phrase.contains('{'), "{label} left a placeholder: {phrase}");
                    if hour_pinned && minute_wild {
                        assert!(phrase.starts_with("every "), "{label} lost its cadence: {phrase}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_all_presence_combinations_render() {
        let present = || Some(Single(1));
        for mask in 0..8u8 {
            let h = if mask & 1 != 0 { present() } else { None };
            let m = if mask & 2 != 0 { present() } else { None };
            let s = if mask & 4 != 0 { present() } else { None };
            let phrase = ok(h, m, s);
            assert!(!phrase.is_empty(), "mask {mask} rendered empty");
            assert!(!phrase.contains('{'), "mask {mask} left a placeholder: {phrase}");
        }
    }

    #[test]
    fn test_invalid_clock_time() {
        let err = describe(Some(Single(24)), Some(Single(0)), None).unwrap_err();
        assert!(matches!(
            err,
            DescribeError::InvalidValue { field: FieldKind::Hour, value: 24 }
        ));
        let err = describe(Some(Single(1)), Some(Single(61)), Some(Single(0))).unwrap_err();
        assert!(matches!(
            err,
            DescribeError::InvalidValue { field: FieldKind::Minute, value: 61 }
        ));
    }

    #[test]
    fn test_zero_step() {
        let zero = FieldExpression::every(Always, 0);
        assert!(matches!(
            describe(None, Some(zero.clone()), None),
            Err(DescribeError::InvalidExpression { field: FieldKind::Minute, .. })
        ));
        assert!(matches!(
            describe(Some(zero), Some(Single(5)), None),
            Err(DescribeError::InvalidExpression { field: FieldKind::Hour, .. })
        ));
    }

    #[test]
    fn test_unhandled_variant_in_time_field() {
        assert!(matches!(
            describe(Some(FieldExpression::LastWeekday), None, None),
            Err(DescribeError::UnhandledVariant {
                field: FieldKind::Hour,
                variant: "last_weekday"
            })
        ));
    }

    #[test]
    fn test_chinese_shortcuts() {
        let bundle = LocaleBundle::chinese();
        let every_five = FieldExpression::every(Always, 5);
        let strategy = TimeDescriptionStrategy::new(&bundle, None, Some(&every_five), None);
        assert_eq!(strategy.describe().unwrap(), "每5分钟");
        let strategy = TimeDescriptionStrategy::new(&bundle, None, None, None);
        assert_eq!(strategy.describe().unwrap(), "每秒");
    }

    #[test]
    fn test_chinese_general_case() {
        let bundle = LocaleBundle::chinese();
        let (hour, always, zero) = (Single(10), Always, Single(0));
        let strategy =
            TimeDescriptionStrategy::new(&bundle, Some(&hour), Some(&always), Some(&zero));
        assert_eq!(strategy.describe().unwrap(), "每分钟，在10点");

        let hours = FieldExpression::range(9, 17);
        let strategy = TimeDescriptionStrategy::new(&bundle, Some(&hours), None, None);
        assert_eq!(strategy.describe().unwrap(), "从9点到17点");
    }
}
