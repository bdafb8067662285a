//! Address formatting: template lookup, substitution and output packaging

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::element::ElementDescriptor;
use crate::renderer::{FormatConfig, HtmlFragment};
use crate::template::{Template, TemplateRegistry};

/// Shape of the value returned by [`format`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Cleaned lines joined by newlines
    #[default]
    String,
    /// Cleaned lines in a container node with `<br>` separators
    Html,
    /// Descriptor of an `<intl-address>` element
    #[serde(alias = "webcomponent")]
    #[value(alias = "webcomponent")]
    Element,
}

/// Everything needed to format one address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatRequest {
    /// Country code, case-insensitive
    pub country_code: String,
    /// Reserved for localization; carried but not used for layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub output: OutputMode,
}

impl FormatRequest {
    /// Create a string-mode request
    pub fn new(country_code: impl Into<String>, address: Address) -> Self {
        Self {
            country_code: country_code.into(),
            locale: None,
            address,
            output: OutputMode::String,
        }
    }

    /// Set the locale
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Set the output mode
    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }
}

/// A formatted address in the requested output shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatted {
    Text(String),
    Html(HtmlFragment),
    Element(ElementDescriptor),
}

impl Formatted {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Formatted::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Formatted::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_html(&self) -> Option<&HtmlFragment> {
        match self {
            Formatted::Html(fragment) => Some(fragment),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&ElementDescriptor> {
        match self {
            Formatted::Element(descriptor) => Some(descriptor),
            _ => None,
        }
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formatted::Text(text) => f.write_str(text),
            Formatted::Html(fragment) => write!(f, "{}", fragment),
            Formatted::Element(descriptor) => {
                let markup = descriptor.to_markup().map_err(|_| fmt::Error)?;
                f.write_str(&markup)
            }
        }
    }
}

/// Formats addresses against a template registry
#[derive(Debug, Clone)]
pub struct AddressFormatter<'r> {
    registry: &'r TemplateRegistry,
    config: FormatConfig,
}

impl AddressFormatter<'static> {
    /// Formatter over the built-in template table
    pub fn builtin() -> Self {
        Self::new(TemplateRegistry::builtin())
    }
}

impl Default for AddressFormatter<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'r> AddressFormatter<'r> {
    /// Create a formatter with default configuration
    pub fn new(registry: &'r TemplateRegistry) -> Self {
        Self {
            registry,
            config: FormatConfig::default(),
        }
    }

    /// Set the output configuration
    pub fn with_config(mut self, config: FormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &'r TemplateRegistry {
        self.registry
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Format a request into its requested output shape
    pub fn format(&self, request: &FormatRequest) -> Formatted {
        match request.output {
            OutputMode::String => Formatted::Text(
                self.lines(&request.country_code, &request.address)
                    .join(&self.config.line_separator),
            ),
            OutputMode::Html => Formatted::Html(HtmlFragment::new(
                self.lines(&request.country_code, &request.address),
                &self.config,
            )),
            OutputMode::Element => Formatted::Element(ElementDescriptor::from_request(request)),
        }
    }

    /// Format as plain text regardless of the request's output mode
    pub fn format_text(&self, country_code: &str, address: &Address) -> String {
        self.lines(country_code, address)
            .join(&self.config.line_separator)
    }

    /// Cleaned output lines for an address
    pub fn lines(&self, country_code: &str, address: &Address) -> Vec<String> {
        render_lines(self.registry.lookup(country_code), address)
    }
}

/// Substitute an address into a template and clean the result into lines.
///
/// Template lines whose placeholders all came out empty are dropped before
/// cleanup, so label lines such as `Tax ID: {taxNumber}` disappear together
/// with their field.
pub fn render_lines(template: &Template, address: &Address) -> Vec<String> {
    let text = template
        .fill(address)
        .into_iter()
        .filter(|line| !line.is_vacant())
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n");
    clean_lines(&text)
}

/// Split on newlines, trim, and drop lines that are empty or hold only
/// punctuation and whitespace. Running it on its own output is a no-op.
pub fn clean_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.chars().all(is_filler))
        .map(str::to_string)
        .collect()
}

/// Characters left behind around empty fields: separators and whitespace
fn is_filler(c: char) -> bool {
    c.is_whitespace()
        || c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{2010}'..='\u{2015}' // hyphens and dashes
                | '\u{3001}' | '\u{3002}' // ideographic comma and full stop
                | '\u{30FB}' // katakana middle dot
                | '\u{FF0C}' | '\u{FF1A}' // fullwidth comma and colon
        )
}

/// Format a request against the built-in template table
pub fn format(request: &FormatRequest) -> Formatted {
    AddressFormatter::builtin().format(request)
}
