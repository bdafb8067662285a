//! Lint checks for template strings.
//!
//! Templates are content data and substitution never fails, so mistakes in
//! them (a misspelled field, a brace that opens nothing) only show up as odd
//! output. These checks surface them ahead of time.

use std::fmt;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::address::Field;

use super::lexer::{lex, Span, Token};

/// A lint warning about a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
    pub span: Span,
}

/// Category of template defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    UnknownPlaceholder,
    StrayBrace,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::UnknownPlaceholder => write!(f, "unknown-placeholder"),
            LintCategory::StrayBrace => write!(f, "stray-brace"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {:?}: {}", self.category, self.span, self.message)
    }
}

impl LintWarning {
    /// Format the warning with template context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        let span = char_span(source, &self.span);
        let written = Report::build(ReportKind::Warning, filename, span.start)
            .with_message(&self.message)
            .with_label(
                Label::new((filename, span))
                    .with_message(self.category.to_string())
                    .with_color(Color::Yellow),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        if written.is_err() {
            return self.to_string();
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Convert a byte span from the lexer into the char span ariadne labels use
fn char_span(source: &str, span: &Span) -> Span {
    let count = |end: usize| {
        source
            .get(..end)
            .map(|s| s.chars().count())
            .unwrap_or_else(|| source.chars().count())
    };
    count(span.start)..count(span.end)
}

/// Run all lint checks on a template string
pub fn lint(source: &str) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    for (token, span) in lex(source) {
        match token {
            Token::Placeholder(name) if Field::from_placeholder(name).is_none() => {
                let known = Field::ALL.map(Field::placeholder).join(", ");
                warnings.push(LintWarning {
                    category: LintCategory::UnknownPlaceholder,
                    message: format!("'{{{}}}' is not an address field (known: {})", name, known),
                    span,
                });
            }
            Token::StrayBrace => warnings.push(LintWarning {
                category: LintCategory::StrayBrace,
                message: "'{' does not start a placeholder".to_string(),
                span,
            }),
            _ => {}
        }
    }
    warnings
}
