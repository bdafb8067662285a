//! The `<intl-address>` visual element
//!
//! The element reads address data from its host's attributes, formats it and
//! writes the result back as markup. The host is abstracted behind [`Host`]
//! so the element can be driven by a browser binding, a server-side renderer
//! or the in-memory [`MemoryHost`].
//!
//! Address data comes either from a JSON `data` attribute or from flat
//! attributes (`country-code`, `locale`, `name`, `house-number`, ...). A `data`
//! value that does not parse falls back to the flat attributes.

mod descriptor;
mod memory;
mod styles;

use std::sync::Arc;

pub use descriptor::ElementDescriptor;
pub use memory::MemoryHost;
pub use styles::{StyleRegistry, STYLES, STYLE_ID};

use crate::address::{Address, Field};
use crate::error::{ElementError, HostError};
use crate::formatter::{clean_lines, AddressFormatter, FormatRequest, OutputMode};
use crate::renderer::HtmlFragment;
use crate::template::TemplateRegistry;

/// Tag name of the element
pub const TAG_NAME: &str = "intl-address";

pub const DATA_ATTRIBUTE: &str = "data";
pub const COUNTRY_CODE_ATTRIBUTE: &str = "country-code";
pub const LOCALE_ATTRIBUTE: &str = "locale";

/// Attributes whose changes trigger a re-render
pub const OBSERVED_ATTRIBUTES: [&str; 13] = [
    DATA_ATTRIBUTE,
    COUNTRY_CODE_ATTRIBUTE,
    LOCALE_ATTRIBUTE,
    "name",
    "company",
    "house-number",
    "street",
    "street2",
    "city",
    "state",
    "postal-code",
    "country",
    "tax-number",
];

const CONTENT_CLASS: &str = "intl-address";
const ERROR_CLASS: &str = "intl-address-error";
const NO_DATA_MESSAGE: &str = "No address data provided";
const INVALID_DATA_MESSAGE: &str = "Invalid address data";

/// Capabilities an element needs from its host environment
pub trait Host {
    fn get_attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&mut self, name: &str, value: &str);
    /// Replace the element's content with markup
    fn set_content(&mut self, markup: &str) -> Result<(), HostError>;
    /// Add a stylesheet to the surrounding document
    fn install_style(&mut self, id: &str, css: &str) -> Result<(), HostError>;
}

/// Rendering logic of `<intl-address>`, independent of any host
#[derive(Debug, Clone)]
pub struct IntlAddressElement<'r> {
    formatter: AddressFormatter<'r>,
    styles: Arc<StyleRegistry>,
}

impl IntlAddressElement<'static> {
    /// Element over the built-in templates and the process-wide style registry
    pub fn new() -> Self {
        Self::with_registry(TemplateRegistry::builtin())
    }
}

impl Default for IntlAddressElement<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> IntlAddressElement<'r> {
    /// Element over a custom template registry
    pub fn with_registry(registry: &'r TemplateRegistry) -> Self {
        Self {
            formatter: AddressFormatter::new(registry),
            styles: StyleRegistry::global(),
        }
    }

    /// Use a different style registry, e.g. one per document
    pub fn with_style_registry(mut self, styles: Arc<StyleRegistry>) -> Self {
        self.styles = styles;
        self
    }

    /// Called when the element is attached to its host
    pub fn connected<H: Host>(&self, host: &mut H) {
        self.render(host);
    }

    /// Called after an attribute changed; re-renders for observed attributes
    pub fn attribute_changed<H: Host>(&self, host: &mut H, name: &str) {
        if OBSERVED_ATTRIBUTES.contains(&name) {
            self.render(host);
        }
    }

    /// Render into the host. Failures become an inline error placeholder.
    pub fn render<H: Host>(&self, host: &mut H) {
        if let Err(err) = self.try_render(host) {
            tracing::warn!(error = %err, "failed to render {}", TAG_NAME);
            if let Err(err) = host.set_content(&placeholder(INVALID_DATA_MESSAGE)) {
                tracing::error!(error = %err, "failed to render {} error placeholder", TAG_NAME);
            }
        }
    }

    fn try_render<H: Host>(&self, host: &mut H) -> Result<(), ElementError> {
        let Some(request) = request_from_attributes(host) else {
            host.set_content(&placeholder(NO_DATA_MESSAGE))?;
            return Ok(());
        };

        let text = self
            .formatter
            .format(&request.with_output(OutputMode::String))
            .into_text()
            .unwrap_or_default();
        let fragment = HtmlFragment::with_class(clean_lines(&text), CONTENT_CLASS);
        host.set_content(&fragment.to_html())?;

        self.install_styles(host)
    }

    fn install_styles<H: Host>(&self, host: &mut H) -> Result<(), ElementError> {
        if !self.styles.claim(STYLE_ID) {
            return Ok(());
        }
        if let Err(err) = host.install_style(STYLE_ID, STYLES) {
            self.styles.release(STYLE_ID);
            return Err(err.into());
        }
        Ok(())
    }
}

/// An element attached to a host, forwarding attribute changes
#[derive(Debug)]
pub struct MountedElement<'r, H: Host> {
    element: IntlAddressElement<'r>,
    host: H,
}

impl<'r, H: Host> MountedElement<'r, H> {
    /// Attach the element and render it for the first time
    pub fn mount(element: IntlAddressElement<'r>, mut host: H) -> Self {
        element.connected(&mut host);
        Self { element, host }
    }

    /// Change an attribute and re-render if it is observed
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.host.set_attribute(name, value);
        self.element.attribute_changed(&mut self.host, name);
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

/// Rebuild a request from the host's attributes
pub fn request_from_attributes<H: Host>(host: &H) -> Option<FormatRequest> {
    if let Some(data) = non_empty(host.get_attribute(DATA_ATTRIBUTE)) {
        match serde_json::from_str::<ElementDescriptor>(&data) {
            Ok(descriptor) => return Some(descriptor.to_request()),
            Err(err) => {
                tracing::debug!(error = %err, "unusable data attribute, falling back to attributes");
            }
        }
    }

    let country_code = non_empty(host.get_attribute(COUNTRY_CODE_ATTRIBUTE))?;
    let mut address = Address::new();
    for field in Field::ALL {
        if let Some(value) = non_empty(host.get_attribute(field.attribute())) {
            address.set(field, value);
        }
    }

    let mut request = FormatRequest::new(country_code, address);
    request.locale = non_empty(host.get_attribute(LOCALE_ATTRIBUTE));
    Some(request)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn placeholder(message: &str) -> String {
    HtmlFragment::with_class(vec![message.to_string()], ERROR_CLASS).to_html()
}
