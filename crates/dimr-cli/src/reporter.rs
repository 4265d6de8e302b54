use colored::Colorize;
use dimr_checker::ImplementationEntry;
use dimr_common::diagnostics::format_code;
use dimr_common::{Diagnostic, DiagnosticCategory, DiagnosticRelatedInformation};

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn render(&self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for diagnostic in diagnostics {
            out.push_str(&self.format_diagnostic(diagnostic));
            out.push('\n');
        }
        out
    }

    /// `app.cs(12,2) - error CS0535: 'Test' does not implement ...`
    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let mut output = format_location(&diagnostic.file, diagnostic.start, diagnostic.length);
        output.push_str(" - ");
        output.push_str(&self.format_category(diagnostic.category));
        output.push(' ');
        output.push_str(&self.format_code(diagnostic.code));
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);

        for related in &diagnostic.related_information {
            output.push('\n');
            output.push_str(&self.format_related(related));
        }
        output
    }

    fn format_related(&self, related: &DiagnosticRelatedInformation) -> String {
        let location = format_location(&related.file, related.start, related.length);
        let prefix = if self.color {
            "  Related".dimmed().to_string()
        } else {
            "  Related".to_string()
        };
        format!("{prefix}: {location} - {}", related.message_text)
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = match category {
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Suggestion => "suggestion",
            DiagnosticCategory::Message => "message",
        };

        if !self.color {
            return label.to_string();
        }

        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
            DiagnosticCategory::Suggestion => label.blue().bold().to_string(),
            DiagnosticCategory::Message => label.cyan().bold().to_string(),
        }
    }

    fn format_code(&self, code: u32) -> String {
        let label = format_code(code);
        if self.color {
            label.bright_blue().to_string()
        } else {
            label
        }
    }

    /// One line per interface member: `Test: I1.M1() -> Test.I1.M1() (explicit)`.
    pub fn render_implementations(&self, entries: &[ImplementationEntry]) -> String {
        let mut out = String::new();
        for entry in entries {
            let target = match (&entry.implementation, entry.source) {
                (Some(member), Some(source)) => format!("{member} ({source})"),
                (Some(member), None) => member.clone(),
                (None, _) if self.color => "<none>".red().to_string(),
                (None, _) => "<none>".to_string(),
            };
            out.push_str(&format!(
                "{}: {} -> {target}\n",
                entry.type_name, entry.interface_member
            ));
        }
        out
    }

    /// `Found 2 errors and 1 warning.`
    pub fn format_summary(&self, errors: usize, warnings: usize) -> String {
        let plural = |n: usize, word: &str| {
            if n == 1 {
                format!("{n} {word}")
            } else {
                format!("{n} {word}s")
            }
        };
        let summary = match (errors, warnings) {
            (0, 0) => return "No diagnostics.".to_string(),
            (e, 0) => format!("Found {}.", plural(e, "error")),
            (0, w) => format!("Found {}.", plural(w, "warning")),
            (e, w) => format!("Found {} and {}.", plural(e, "error"), plural(w, "warning")),
        };
        if self.color && errors > 0 {
            summary.red().to_string()
        } else {
            summary
        }
    }
}

/// `file(start,length)`, or `<unknown>` for declarations without a span.
fn format_location(file: &str, start: u32, length: u32) -> String {
    if file.is_empty() {
        "<unknown>".to_string()
    } else {
        format!("{file}({start},{length})")
    }
}
