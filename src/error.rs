//! Error types for a3s-cron-descriptor

use crate::types::FieldKind;
use thiserror::Error;

/// Errors that can occur while describing a cron schedule
#[derive(Debug, Error)]
pub enum DescribeError {
    /// No bundle is registered for the requested locale
    #[error("No locale bundle found for '{0}'")]
    UnsupportedLocale(String),

    /// A bundle lacks a key a strategy needs
    #[error("Locale bundle '{locale}' is missing template key '{key}'")]
    MissingTemplateKey { locale: String, key: String },

    /// An expression variant reached a field group that cannot render it
    #[error("Expression variant '{variant}' is not supported for {field}")]
    UnhandledVariant {
        field: FieldKind,
        variant: &'static str,
    },

    /// The expression breaks a precondition the parser should have enforced
    #[error("Invalid expression for {field}: {reason}")]
    InvalidExpression { field: FieldKind, reason: String },

    /// A value has no display form in its field's domain
    #[error("Value {value} is out of range for {field}")]
    InvalidValue { field: FieldKind, value: u32 },

    /// I/O error while reading a bundle file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed bundle JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for describe operations
pub type Result<T> = std::result::Result<T, DescribeError>;
