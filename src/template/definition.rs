//! Compiled address templates

use std::fmt;

use crate::address::{Address, Field};

use super::lexer::{lex, Token};

/// A piece of a template line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, copied verbatim
    Literal(String),
    /// A placeholder naming an address field
    Field(Field),
    /// A placeholder whose name is not an address field, kept as `{name}`
    Unknown(String),
}

/// A country layout: lines of literal text and placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    lines: Vec<Vec<Segment>>,
}

/// One template line after substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledLine {
    pub text: String,
    /// Number of field placeholders on the line
    pub placeholders: usize,
    /// Number of those placeholders that received a non-empty value
    pub filled: usize,
}

impl FilledLine {
    /// A line that references fields but received none of them
    pub fn is_vacant(&self) -> bool {
        self.placeholders > 0 && self.filled == 0
    }
}

impl Template {
    /// Compile a template string
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let mut lines = Vec::new();
        let mut line = Vec::new();
        for (token, _) in lex(&source) {
            match token {
                Token::Newline => lines.push(std::mem::take(&mut line)),
                Token::Placeholder(name) => match Field::from_placeholder(name) {
                    Some(field) => line.push(Segment::Field(field)),
                    None => line.push(Segment::Unknown(name.to_string())),
                },
                Token::StrayBrace => push_literal(&mut line, "{"),
                Token::Text(text) => push_literal(&mut line, text),
            }
        }
        lines.push(line);
        Self { source, lines }
    }

    /// The template string as authored
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Compiled lines
    pub fn lines(&self) -> &[Vec<Segment>] {
        &self.lines
    }

    /// Fields referenced anywhere in the template, in order of first use
    pub fn fields(&self) -> Vec<Field> {
        let mut fields = Vec::new();
        for segment in self.lines.iter().flatten() {
            if let Segment::Field(field) = segment {
                if !fields.contains(field) {
                    fields.push(*field);
                }
            }
        }
        fields
    }

    /// Replace every placeholder with its field value, line by line
    pub fn fill(&self, address: &Address) -> Vec<FilledLine> {
        self.lines
            .iter()
            .map(|segments| {
                let mut line = FilledLine {
                    text: String::new(),
                    placeholders: 0,
                    filled: 0,
                };
                for segment in segments {
                    match segment {
                        Segment::Literal(text) => line.text.push_str(text),
                        Segment::Field(field) => {
                            let value = address.get(*field);
                            line.placeholders += 1;
                            if !value.trim().is_empty() {
                                line.filled += 1;
                            }
                            line.text.push_str(value);
                        }
                        Segment::Unknown(name) => {
                            line.text.push('{');
                            line.text.push_str(name);
                            line.text.push('}');
                        }
                    }
                }
                line
            })
            .collect()
    }

    /// Plain substitution: the template with every placeholder replaced
    pub fn substitute(&self, address: &Address) -> String {
        self.fill(address)
            .into_iter()
            .map(|line| line.text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn push_literal(line: &mut Vec<Segment>, text: &str) {
    if let Some(Segment::Literal(last)) = line.last_mut() {
        last.push_str(text);
    } else {
        line.push(Segment::Literal(text.to_string()));
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Template::new(source)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
