//! In-memory host for realizing elements without a document

use std::collections::BTreeMap;

use crate::error::HostError;
use crate::renderer::unescape_html;

use super::Host;

/// A host that keeps attributes, content and installed styles in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    attributes: BTreeMap<String, String>,
    content: String,
    styles: Vec<(String, String)>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, builder style
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    /// Current content markup
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Installed stylesheets as `(id, css)` pairs
    pub fn styles(&self) -> &[(String, String)] {
        &self.styles
    }

    /// Text of the content, with `<br>` as newlines and tags removed
    pub fn text_content(&self) -> String {
        let markup = self.content.replace("<br>", "\n");
        let mut text = String::with_capacity(markup.len());
        let mut in_tag = false;
        for c in markup.chars() {
            match c {
                '<' => in_tag = true,
                '>' if in_tag => in_tag = false,
                _ if !in_tag => text.push(c),
                _ => {}
            }
        }
        unescape_html(&text)
    }
}

impl Host for MemoryHost {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn set_content(&mut self, markup: &str) -> Result<(), HostError> {
        self.content = markup.to_string();
        Ok(())
    }

    fn install_style(&mut self, id: &str, css: &str) -> Result<(), HostError> {
        self.styles.push((id.to_string(), css.to_string()));
        Ok(())
    }
}
