//! Source location spans.
//!
//! The resolver never interprets locations; spans are copied from the
//! declaration that triggered a diagnostic and handed to the reporter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A byte range inside a named source file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSpan {
    /// File path or name
    #[serde(default)]
    pub file: Arc<str>,
    /// Start position (byte offset)
    #[serde(default)]
    pub start: u32,
    /// Length in bytes
    #[serde(default)]
    pub length: u32,
}

impl SourceSpan {
    pub fn new(file: impl Into<Arc<str>>, start: u32, length: u32) -> Self {
        SourceSpan {
            file: file.into(),
            start,
            length,
        }
    }

    /// Span with no location, used for symbols imported from metadata.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.file.is_empty() && self.start == 0 && self.length == 0
    }

    pub const fn end(&self) -> u32 {
        self.start.saturating_add(self.length)
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("<metadata>");
        }
        write!(f, "{}({}..{})", self.file, self.start, self.end())
    }
}
