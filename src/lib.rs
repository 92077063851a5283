//! # a3s-cron-descriptor
//!
//! Localized, human-readable descriptions of parsed cron schedules.
//!
//! ## Overview
//!
//! `a3s-cron-descriptor` turns already-parsed cron fields into one sentence
//! in a chosen locale. It never parses raw cron text and never computes fire
//! times; an upstream parser hands it `(FieldKind, FieldExpression)` pairs.
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_cron_descriptor::{CronDescriptor, FieldExpression, FieldKind, ParsedField};
//!
//! # fn example() -> a3s_cron_descriptor::Result<()> {
//! let descriptor = CronDescriptor::for_locale("en")?;
//!
//! let fields = vec![
//!     ParsedField::new(FieldKind::Second, FieldExpression::Single(0)),
//!     ParsedField::new(FieldKind::Minute, FieldExpression::Single(15)),
//!     ParsedField::new(FieldKind::Hour, FieldExpression::Single(10)),
//!     ParsedField::new(FieldKind::DayOfWeek, FieldExpression::range(1, 5)),
//! ];
//!
//! assert_eq!(
//!     descriptor.describe(&fields)?,
//!     "at 10:15:00 from Monday to Friday"
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Locales
//!
//! - **en**: English (default)
//! - **zh**: Simplified Chinese
//!
//! Custom bundles load from JSON with [`LocaleBundle::from_json`] or
//! [`LocaleBundle::from_path`] and can be registered in a [`BundleRegistry`].
//!
//! ## Architecture
//!
//! - **LocaleBundle**: key → template text for one locale
//! - **FieldExpression**: closed set of cron field shapes
//! - **DescriptionStrategy** trait: renders one field group
//! - **CronDescriptor**: orders the groups, fills unit nouns, normalizes

pub mod bundle;
pub mod descriptor;
pub mod error;
pub mod locales;
pub mod strategy;
pub mod types;

// Re-export core types
pub use bundle::{BundleRegistry, LocaleBundle, UNITS_PLACEHOLDER, UNIT_PLACEHOLDER};
pub use descriptor::{CronDescriptor, DEFAULT_LOCALE};
pub use error::{DescribeError, Result};
pub use strategy::{
    days_of_month_instance, days_of_week_instance, hh_mm_ss_instance, months_instance,
    plain_instance, DescriptionStrategy,
};
pub use types::{FieldExpression, FieldKind, ParsedField, Unit};
