//! Built-in locale catalogs
//!
//! Each catalog is a static key → template table loaded into a
//! `LocaleBundle` on first use. Month keys use the lowercase English month
//! name and weekday keys the lowercase three-letter English abbreviation.

pub mod en;
pub mod zh;
