//! Common types and utilities for the dimr interface implementation resolver.
//!
//! This crate provides foundational types used across all dimr crates:
//! - Source spans (`SourceSpan`) passed through opaquely from declarations
//! - Language versions and the features they gate (`LanguageVersion`, `Feature`)
//! - Compiler limits and thresholds
//! - Diagnostic records, codes and message templates

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::SourceSpan;

// Language version gate
pub mod language_version;
pub use language_version::{Feature, LanguageVersion};

// Centralized limits and thresholds
pub mod limits;

// Diagnostics - codes, templates, pending and rendered records
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticArg, DiagnosticCategory, DiagnosticRelatedInformation,
    PendingDiagnostic, format_message,
};
