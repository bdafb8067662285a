//! Integration tests for the `<intl-address>` element

use std::sync::Arc;

use intl_address::element::{StyleRegistry, STYLE_ID};
use intl_address::{
    Address, ElementDescriptor, Field, Host, HostError, IntlAddressElement, MemoryHost,
    MountedElement,
};
use pretty_assertions::assert_eq;

const NO_DATA: &str = r#"<div class="intl-address-error">No address data provided</div>"#;
const INVALID: &str = r#"<div class="intl-address-error">Invalid address data</div>"#;

fn element() -> IntlAddressElement<'static> {
    IntlAddressElement::new().with_style_registry(Arc::new(StyleRegistry::new()))
}

/// Host that can be told to reject content or styles
#[derive(Debug, Default)]
struct FlakyHost {
    inner: MemoryHost,
    reject_content: bool,
    reject_styles: bool,
    renders: usize,
}

impl Host for FlakyHost {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.inner.get_attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.inner.set_attribute(name, value);
    }

    fn set_content(&mut self, markup: &str) -> Result<(), HostError> {
        self.renders += 1;
        if self.reject_content && !markup.contains("intl-address-error") {
            return Err(HostError::content("read-only"));
        }
        self.inner.set_content(markup)
    }

    fn install_style(&mut self, id: &str, css: &str) -> Result<(), HostError> {
        if self.reject_styles {
            return Err(HostError::style(id, "no document head"));
        }
        self.inner.install_style(id, css)
    }
}

#[test]
fn test_mount_without_data_shows_placeholder() {
    let mounted = MountedElement::mount(element(), MemoryHost::new());
    assert_eq!(mounted.host().content(), NO_DATA);
    assert!(mounted.host().styles().is_empty());
}

#[test]
fn test_mount_with_flat_attributes() {
    let host = MemoryHost::new()
        .with_attribute("country-code", "us")
        .with_attribute("name", "John Doe")
        .with_attribute("house-number", "123")
        .with_attribute("street", "Main St")
        .with_attribute("city", "New York")
        .with_attribute("state", "NY")
        .with_attribute("postal-code", "10001");
    let mounted = MountedElement::mount(element(), host);

    assert_eq!(
        mounted.host().content(),
        r#"<div class="intl-address">John Doe<br>123 Main St<br>New York, NY 10001</div>"#
    );
    assert_eq!(mounted.host().styles().len(), 1);
    assert_eq!(mounted.host().styles()[0].0, STYLE_ID);
}

#[test]
fn test_mount_with_data_attribute() {
    let descriptor = ElementDescriptor {
        country_code: "DE".to_string(),
        locale: Some("de-DE".to_string()),
        address: Address::new()
            .with(Field::Street, "Hauptstraße")
            .with(Field::HouseNumber, "42")
            .with(Field::PostalCode, "10115")
            .with(Field::City, "Berlin"),
    };
    let host = MemoryHost::new().with_attribute("data", descriptor.to_json().unwrap());
    let mounted = MountedElement::mount(element(), host);
    assert_eq!(mounted.host().text_content(), "Hauptstraße 42\n10115 Berlin");
}

#[test]
fn test_malformed_data_falls_back_to_attributes() {
    let host = MemoryHost::new()
        .with_attribute("data", "{not json")
        .with_attribute("country-code", "GB")
        .with_attribute("city", "London");
    let mounted = MountedElement::mount(element(), host);
    assert_eq!(mounted.host().text_content(), "London");
}

#[test]
fn test_data_with_wrong_shape_falls_back_to_attributes() {
    let host = MemoryHost::new()
        .with_attribute("data", r#"{"address": {"city": "Paris"}}"#)
        .with_attribute("country-code", "FR")
        .with_attribute("city", "Lyon");
    let mounted = MountedElement::mount(element(), host);
    assert_eq!(mounted.host().text_content(), "Lyon");
}

#[test]
fn test_malformed_data_without_attributes_shows_placeholder() {
    let host = MemoryHost::new().with_attribute("data", "[1, 2, 3]");
    let mounted = MountedElement::mount(element(), host);
    assert_eq!(mounted.host().content(), NO_DATA);
}

#[test]
fn test_attribute_change_rerenders() {
    let host = MemoryHost::new().with_attribute("country-code", "US");
    let mut mounted = MountedElement::mount(element(), host);
    assert_eq!(mounted.host().text_content(), "");

    mounted.set_attribute("name", "Ada");
    assert_eq!(mounted.host().text_content(), "Ada");

    mounted.set_attribute("tax-number", "12-3");
    assert_eq!(mounted.host().text_content(), "Ada\nTax ID: 12-3");

    mounted.set_attribute("country-code", "DE");
    assert_eq!(mounted.host().text_content(), "Ada\nUSt-IdNr.: 12-3");
}

#[test]
fn test_unobserved_attribute_does_not_rerender() {
    let host = FlakyHost {
        inner: MemoryHost::new().with_attribute("country-code", "US"),
        ..Default::default()
    };
    let mut mounted = MountedElement::mount(element(), host);
    assert_eq!(mounted.host().renders, 1);

    mounted.set_attribute("class", "fancy");
    assert_eq!(mounted.host().renders, 1);

    mounted.set_attribute("city", "Boston");
    assert_eq!(mounted.host().renders, 2);
}

#[test]
fn test_host_failure_shows_invalid_placeholder() {
    let host = FlakyHost {
        inner: MemoryHost::new()
            .with_attribute("country-code", "US")
            .with_attribute("name", "Ada"),
        reject_content: true,
        ..Default::default()
    };
    let mounted = MountedElement::mount(element(), host);
    assert_eq!(mounted.host().inner.content(), INVALID);
}

#[test]
fn test_style_failure_shows_invalid_placeholder_and_releases_claim() {
    let styles = Arc::new(StyleRegistry::new());
    let host = FlakyHost {
        inner: MemoryHost::new().with_attribute("country-code", "US"),
        reject_styles: true,
        ..Default::default()
    };
    let element = IntlAddressElement::new().with_style_registry(styles.clone());
    let mounted = MountedElement::mount(element, host);

    assert_eq!(mounted.host().inner.content(), INVALID);
    assert!(!styles.is_installed(STYLE_ID));
}

#[test]
fn test_styles_installed_once_per_registry() {
    let styles = Arc::new(StyleRegistry::new());
    let first = MountedElement::mount(
        IntlAddressElement::new().with_style_registry(styles.clone()),
        MemoryHost::new().with_attribute("country-code", "US"),
    );
    let mut second = MountedElement::mount(
        IntlAddressElement::new().with_style_registry(styles.clone()),
        MemoryHost::new().with_attribute("country-code", "FR"),
    );
    second.set_attribute("city", "Paris");

    assert_eq!(first.host().styles().len(), 1);
    assert!(second.host().styles().is_empty());
    assert!(styles.is_installed(STYLE_ID));
}

#[test]
fn test_realize_descriptor() {
    let descriptor = ElementDescriptor {
        country_code: "gb".to_string(),
        locale: None,
        address: Address::new()
            .with(Field::Name, "William Johnson")
            .with(Field::PostalCode, "SW1A 2AA"),
    };
    let host = descriptor.realize().expect("realize");
    assert_eq!(
        host.content(),
        r#"<div class="intl-address">William Johnson<br>SW1A 2AA</div>"#
    );
    assert!(host.get_attribute("data").is_some());
}
