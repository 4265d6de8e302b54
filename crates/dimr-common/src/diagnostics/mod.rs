//! Diagnostic types and message lookup.
//!
//! Message data lives in `data.rs`.
//!
//! Producers build [`PendingDiagnostic`]s carrying structured arguments
//! (display names of the members and types involved). Rendering fills the
//! code's message template and yields a [`Diagnostic`].

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::span::SourceSpan;

mod data;
pub use data::{DIAGNOSTIC_MESSAGES, diagnostic_codes, diagnostic_messages};

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

/// Related information for a diagnostic (e.g., "see also" locations).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticRelatedInformation {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

/// A rendered diagnostic with optional related information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
    /// Display strings of the structured arguments, in template order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    /// Related information spans (e.g., where the interface member was declared)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_information: Vec<DiagnosticRelatedInformation>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub const fn error(file: String, start: u32, length: u32, message: String, code: u32) -> Self {
        Self {
            file,
            start,
            length,
            message_text: message,
            category: DiagnosticCategory::Error,
            code,
            args: Vec::new(),
            related_information: Vec::new(),
        }
    }

    /// Add related information to this diagnostic.
    #[must_use]
    pub fn with_related(mut self, file: String, start: u32, length: u32, message: String) -> Self {
        self.related_information.push(DiagnosticRelatedInformation {
            file,
            start,
            length,
            message_text: message,
            category: DiagnosticCategory::Message,
            code: 0,
        });
        self
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

// =============================================================================
// Pending Diagnostics
// =============================================================================

/// Argument for a diagnostic message template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticArg {
    /// Display name of a member (`I1.M1()`, `Test3.I1.M1()`)
    Member(Arc<str>),
    /// Display name of a type
    Type(Arc<str>),
    /// Free text (modifier keywords, feature names, versions)
    Text(Arc<str>),
    /// A number
    Number(usize),
}

impl fmt::Display for DiagnosticArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Member(s) | Self::Type(s) | Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for DiagnosticArg {
    fn from(s: &str) -> Self {
        Self::Text(s.into())
    }
}

impl From<String> for DiagnosticArg {
    fn from(s: String) -> Self {
        Self::Text(s.into())
    }
}

impl From<usize> for DiagnosticArg {
    fn from(n: usize) -> Self {
        Self::Number(n)
    }
}

/// A diagnostic that hasn't been rendered yet.
///
/// Stores the structured data needed to generate the message; formatting
/// happens in [`PendingDiagnostic::render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDiagnostic {
    pub code: u32,
    pub args: Vec<DiagnosticArg>,
    pub span: SourceSpan,
    pub category: DiagnosticCategory,
    /// Additional locations (e.g., the interface member that is unimplemented)
    pub related: Vec<(SourceSpan, Vec<DiagnosticArg>, u32)>,
}

impl PendingDiagnostic {
    /// Create a pending diagnostic whose category comes from the code's definition.
    pub fn new(code: u32, span: SourceSpan, args: Vec<DiagnosticArg>) -> Self {
        let category = get_diagnostic_category(code).unwrap_or(DiagnosticCategory::Error);
        Self {
            code,
            args,
            span,
            category,
            related: Vec::new(),
        }
    }

    /// Attach a related location rendered with another template.
    #[must_use]
    pub fn with_related(mut self, span: SourceSpan, code: u32, args: Vec<DiagnosticArg>) -> Self {
        self.related.push((span, args, code));
        self
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }

    /// Fill the message template and produce the final record.
    pub fn render(&self) -> Diagnostic {
        let args: Vec<String> = self.args.iter().map(ToString::to_string).collect();
        let message_text = render_template(self.code, &args);
        let related_information = self
            .related
            .iter()
            .map(|(span, args, code)| {
                let args: Vec<String> = args.iter().map(ToString::to_string).collect();
                DiagnosticRelatedInformation {
                    file: span.file.to_string(),
                    start: span.start,
                    length: span.length,
                    message_text: render_template(*code, &args),
                    category: DiagnosticCategory::Message,
                    code: *code,
                }
            })
            .collect();
        Diagnostic {
            file: self.span.file.to_string(),
            start: self.span.start,
            length: self.span.length,
            message_text,
            category: self.category,
            code: self.code,
            args,
            related_information,
        }
    }
}

fn render_template(code: u32, args: &[String]) -> String {
    let template = get_message_template(code).unwrap_or("Unexpected diagnostic code.");
    let refs: Vec<&str> = args.iter().map(String::as_str).collect();
    format_message(template, &refs)
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// Format a diagnostic code the way the reporter prints it (`CS0535`).
#[must_use]
pub fn format_code(code: u32) -> String {
    format!("CS{code:04}")
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

/// Get the message template for a diagnostic code.
///
/// Returns the template string with `{0}`, `{1}`, etc. placeholders.
#[must_use]
pub fn get_message_template(code: u32) -> Option<&'static str> {
    get_diagnostic_message(code).map(|m| m.message)
}

/// Get the category for a diagnostic code.
#[must_use]
pub fn get_diagnostic_category(code: u32) -> Option<DiagnosticCategory> {
    get_diagnostic_message(code).map(|m| m.category)
}
