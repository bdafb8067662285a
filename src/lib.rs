//! Intl Address - locale-appropriate postal address formatting
//!
//! This library resolves a per-country layout template, fills it with the
//! fields of an [`Address`], and returns the result as plain text, an HTML
//! fragment, or a descriptor of an `<intl-address>` element.
//!
//! # Example
//!
//! ```rust
//! use intl_address::{format, Address, Field, FormatRequest};
//!
//! let address = Address::new()
//!     .with(Field::Name, "John Doe")
//!     .with(Field::HouseNumber, "123")
//!     .with(Field::Street, "Main St")
//!     .with(Field::City, "New York")
//!     .with(Field::State, "NY")
//!     .with(Field::PostalCode, "10001");
//!
//! let text = format(&FormatRequest::new("us", address)).to_string();
//! assert_eq!(text, "John Doe\n123 Main St\nNew York, NY 10001");
//! ```

pub mod address;
pub mod element;
pub mod error;
pub mod formatter;
pub mod renderer;
pub mod template;

pub use address::{Address, Field};
pub use element::{ElementDescriptor, Host, IntlAddressElement, MemoryHost, MountedElement};
pub use error::{ElementError, HostError};
pub use formatter::{
    clean_lines, format, render_lines, AddressFormatter, FormatRequest, Formatted, OutputMode,
};
pub use renderer::{FormatConfig, HtmlFragment};
pub use template::{Template, TemplateError, TemplateRegistry, TemplateTable};

/// Format an address as plain text with the built-in templates
///
/// # Example
///
/// ```rust
/// use intl_address::{format_text, Address, Field};
///
/// let address = Address::new()
///     .with(Field::Street, "Hauptstraße")
///     .with(Field::HouseNumber, "42")
///     .with(Field::PostalCode, "10115")
///     .with(Field::City, "Berlin");
///
/// assert_eq!(format_text("DE", &address), "Hauptstraße 42\n10115 Berlin");
/// ```
pub fn format_text(country_code: &str, address: &Address) -> String {
    AddressFormatter::builtin().format_text(country_code, address)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us_address() -> Address {
        Address::new()
            .with(Field::Company, "Tech Corp Inc.")
            .with(Field::Name, "John Doe")
            .with(Field::HouseNumber, "123")
            .with(Field::Street, "Main St")
            .with(Field::Street2, "Suite 456")
            .with(Field::City, "New York")
            .with(Field::State, "NY")
            .with(Field::PostalCode, "10001")
            .with(Field::Country, "USA")
            .with(Field::TaxNumber, "12-3456789")
    }

    #[test]
    fn test_format_text_us() {
        let text = format_text("US", &us_address());
        assert!(text.contains("New York, NY 10001"));
        assert!(text.contains("Tax ID: 12-3456789"));
    }

    #[test]
    fn test_format_text_matches_format() {
        let request = FormatRequest::new("us", us_address());
        assert_eq!(
            format(&request).into_text(),
            Some(format_text("US", &us_address()))
        );
    }

    #[test]
    fn test_format_empty_address() {
        assert_eq!(format_text("US", &Address::new()), "");
    }
}
