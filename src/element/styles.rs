//! Shared presentation rules for `<intl-address>` elements

use std::collections::HashSet;
use std::sync::{Arc, Mutex, OnceLock};

/// Identifier of the shared stylesheet
pub const STYLE_ID: &str = "intl-address-styles";

/// Stylesheet installed once per document
pub const STYLES: &str = r#"
intl-address {
  display: block;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  line-height: 1.4;
}

intl-address .intl-address {
  white-space: pre-line;
}

intl-address .intl-address-error {
  color: #d32f2f;
  font-style: italic;
  padding: 8px;
  background-color: #ffebee;
  border: 1px solid #ffcdd2;
  border-radius: 4px;
}
"#;

/// Identifiers of resources that have already been installed
#[derive(Debug, Default)]
pub struct StyleRegistry {
    installed: Mutex<HashSet<String>>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by every element in the process
    pub fn global() -> Arc<StyleRegistry> {
        static GLOBAL: OnceLock<Arc<StyleRegistry>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(StyleRegistry::new())).clone()
    }

    /// Claim an identifier. Returns true only for the first caller.
    pub fn claim(&self, id: &str) -> bool {
        self.lock().insert(id.to_string())
    }

    /// Give up a claim whose installation failed
    pub fn release(&self, id: &str) {
        self.lock().remove(id);
    }

    pub fn is_installed(&self, id: &str) -> bool {
        self.lock().contains(id)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<String>> {
        // The set stays consistent even if a holder panicked.
        self.installed.lock().unwrap_or_else(|e| e.into_inner())
    }
}
