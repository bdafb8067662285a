//! Serializable references to `<intl-address>` elements

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::ElementError;
use crate::formatter::FormatRequest;
use crate::renderer::escape_html;
use crate::template::TemplateRegistry;

use super::{IntlAddressElement, MemoryHost, MountedElement, StyleRegistry, DATA_ATTRIBUTE, TAG_NAME};

/// The inputs of an element, carried verbatim. Text is produced only when the
/// element is realized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDescriptor {
    pub country_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default)]
    pub address: Address,
}

impl ElementDescriptor {
    pub fn from_request(request: &FormatRequest) -> Self {
        Self {
            country_code: request.country_code.clone(),
            locale: request.locale.clone(),
            address: request.address.clone(),
        }
    }

    /// A string-mode request for the same inputs
    pub fn to_request(&self) -> FormatRequest {
        FormatRequest {
            country_code: self.country_code.clone(),
            locale: self.locale.clone(),
            address: self.address.clone(),
            output: Default::default(),
        }
    }

    /// Value of the `data` attribute
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Element markup with the descriptor in its `data` attribute
    pub fn to_markup(&self) -> Result<String, serde_json::Error> {
        Ok(format!(
            r#"<{tag} {attr}="{data}"></{tag}>"#,
            tag = TAG_NAME,
            attr = DATA_ATTRIBUTE,
            data = escape_html(&self.to_json()?)
        ))
    }

    /// Mount the element on a fresh in-memory host using the built-in templates
    pub fn realize(&self) -> Result<MemoryHost, ElementError> {
        self.realize_with(TemplateRegistry::builtin())
    }

    /// Mount the element on a fresh in-memory host. The host is a document of
    /// its own, so it gets its own style registry.
    pub fn realize_with(&self, registry: &TemplateRegistry) -> Result<MemoryHost, ElementError> {
        let host = MemoryHost::new().with_attribute(DATA_ATTRIBUTE, self.to_json()?);
        let element = IntlAddressElement::with_registry(registry)
            .with_style_registry(Arc::new(StyleRegistry::new()));
        Ok(MountedElement::mount(element, host).into_host())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Field;

    #[test]
    fn test_json_is_camel_case() {
        let descriptor = ElementDescriptor {
            country_code: "JP".to_string(),
            locale: Some("ja-JP".to_string()),
            address: Address::new().with(Field::PostalCode, "100-0001"),
        };
        assert_eq!(
            descriptor.to_json().unwrap(),
            r#"{"countryCode":"JP","locale":"ja-JP","address":{"postalCode":"100-0001"}}"#
        );
    }

    #[test]
    fn test_markup_escapes_json() {
        let descriptor = ElementDescriptor {
            country_code: "US".to_string(),
            locale: None,
            address: Address::new(),
        };
        assert_eq!(
            descriptor.to_markup().unwrap(),
            r#"<intl-address data="{&quot;countryCode&quot;:&quot;US&quot;,&quot;address&quot;:{}}"></intl-address>"#
        );
    }

    #[test]
    fn test_realize_with_custom_registry() {
        let registry = TemplateRegistry::new("{name}").with_template("US", "CUSTOM {name}");
        let descriptor = ElementDescriptor {
            country_code: "us".to_string(),
            locale: None,
            address: Address::new().with(Field::Name, "Ada"),
        };
        let host = descriptor.realize_with(&registry).unwrap();
        assert_eq!(host.text_content(), "CUSTOM Ada");
        assert_eq!(descriptor.realize().unwrap().text_content(), "Ada");
    }

    #[test]
    fn test_each_realized_host_gets_styles() {
        let descriptor = ElementDescriptor {
            country_code: "US".to_string(),
            locale: None,
            address: Address::new().with(Field::Name, "Ada"),
        };
        let first = descriptor.realize().unwrap();
        let second = descriptor.realize().unwrap();
        assert_eq!(first.styles().len(), 1);
        assert_eq!(second.styles().len(), 1);
    }
}
