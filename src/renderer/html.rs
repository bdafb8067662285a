//! HTML fragments for formatted addresses

use std::fmt;

use super::FormatConfig;

/// A container node holding address lines separated by `<br>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlFragment {
    tag: String,
    class: Option<String>,
    lines: Vec<String>,
}

impl HtmlFragment {
    /// Build a fragment from cleaned lines
    pub fn new(lines: Vec<String>, config: &FormatConfig) -> Self {
        Self {
            tag: config.container_tag.clone(),
            class: config.container_class.clone(),
            lines,
        }
    }

    /// Build a fragment with an explicit class and the default `div` container
    pub fn with_class(lines: Vec<String>, class: &str) -> Self {
        Self::new(lines, &FormatConfig::default().with_container_class(class))
    }

    /// Lines of the fragment, unescaped
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Text content, with break markers rendered as newlines
    pub fn text_content(&self) -> String {
        self.lines.join("\n")
    }

    /// Markup inside the container
    pub fn inner_html(&self) -> String {
        self.lines
            .iter()
            .map(|line| escape_html(line))
            .collect::<Vec<_>>()
            .join("<br>")
    }

    /// Markup of the container and its content
    pub fn to_html(&self) -> String {
        let class_attr = self
            .class
            .as_ref()
            .map(|c| format!(r#" class="{}""#, escape_html(c)))
            .unwrap_or_default();
        format!(
            "<{tag}{class_attr}>{inner}</{tag}>",
            tag = self.tag,
            class_attr = class_attr,
            inner = self.inner_html()
        )
    }
}

impl fmt::Display for HtmlFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

/// Escape text for use in HTML content and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Reverse [`escape_html`]
pub fn unescape_html(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<tag>"), "&lt;tag&gt;");
        assert_eq!(unescape_html("&lt;a &amp;amp; b&gt;"), "<a &amp; b>");
    }

    #[test]
    fn test_fragment_markup() {
        let fragment = HtmlFragment::new(
            vec!["10 Downing Street".to_string(), "London".to_string()],
            &FormatConfig::default(),
        );
        assert_eq!(
            fragment.to_html(),
            r#"<div class="intl-address">10 Downing Street<br>London</div>"#
        );
        assert_eq!(fragment.text_content(), "10 Downing Street\nLondon");
    }

    #[test]
    fn test_fragment_escapes_lines() {
        let fragment = HtmlFragment::with_class(vec!["Smith & <Sons>".to_string()], "x");
        assert_eq!(fragment.inner_html(), "Smith &amp; &lt;Sons&gt;");
        assert_eq!(fragment.text_content(), "Smith & <Sons>");
    }

    #[test]
    fn test_fragment_without_class() {
        let config = FormatConfig::new()
            .with_container_tag("address")
            .without_container_class();
        let fragment = HtmlFragment::new(vec!["a".to_string()], &config);
        assert_eq!(fragment.to_html(), "<address>a</address>");
    }
}
