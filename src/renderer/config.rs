//! Configuration for formatted output

/// Configuration options for string and HTML output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Separator placed between lines in string output
    pub line_separator: String,

    /// Tag of the HTML container element
    pub container_tag: String,

    /// CSS class of the HTML container element
    pub container_class: Option<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            line_separator: "\n".to_string(),
            container_tag: "div".to_string(),
            container_class: Some("intl-address".to_string()),
        }
    }
}

impl FormatConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line separator for string output
    pub fn with_line_separator(mut self, separator: impl Into<String>) -> Self {
        self.line_separator = separator.into();
        self
    }

    /// Set the HTML container tag
    pub fn with_container_tag(mut self, tag: impl Into<String>) -> Self {
        self.container_tag = tag.into();
        self
    }

    /// Set the HTML container class
    pub fn with_container_class(mut self, class: impl Into<String>) -> Self {
        self.container_class = Some(class.into());
        self
    }

    /// Render the HTML container without a class attribute
    pub fn without_container_class(mut self) -> Self {
        self.container_class = None;
        self
    }
}
