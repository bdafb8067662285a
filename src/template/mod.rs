//! Address templates and the country registry
//!
//! A template is a layout string with `{fieldName}` placeholders, one per
//! country. The registry resolves a country code to its template and falls
//! back to the `default` entry for codes it does not know.
//!
//! # Example
//!
//! ```text
//! [templates]
//! default = "{name}\n{street}\n{postalCode} {city}"
//! US = "{name}\n{houseNumber} {street}\n{city}, {state} {postalCode}"
//! ```

mod definition;
pub mod lexer;
mod lint;
mod registry;

pub use definition::{FilledLine, Segment, Template};
pub use lint::{lint, LintCategory, LintWarning};
pub use registry::{TemplateError, TemplateRegistry, TemplateTable, DEFAULT_KEY};
