//! Address record and the fields a template can reference

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A postal address. Every field is optional; absent fields render as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
}

impl Address {
    /// Create an empty address
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, builder style
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Set a field in place
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Value of a field, or `""` when absent
    pub fn get(&self, field: Field) -> &str {
        self.slot(field).as_deref().unwrap_or("")
    }

    /// True when no field carries a non-empty value
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Name => &self.name,
            Field::Company => &self.company,
            Field::HouseNumber => &self.house_number,
            Field::Street => &self.street,
            Field::Street2 => &self.street2,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::PostalCode => &self.postal_code,
            Field::Country => &self.country,
            Field::TaxNumber => &self.tax_number,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Name => &mut self.name,
            Field::Company => &mut self.company,
            Field::HouseNumber => &mut self.house_number,
            Field::Street => &mut self.street,
            Field::Street2 => &mut self.street2,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::PostalCode => &mut self.postal_code,
            Field::Country => &mut self.country,
            Field::TaxNumber => &mut self.tax_number,
        }
    }
}

/// A field of [`Address`] that a template placeholder can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Company,
    HouseNumber,
    Street,
    Street2,
    City,
    State,
    PostalCode,
    Country,
    TaxNumber,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Name,
        Field::Company,
        Field::HouseNumber,
        Field::Street,
        Field::Street2,
        Field::City,
        Field::State,
        Field::PostalCode,
        Field::Country,
        Field::TaxNumber,
    ];

    /// Name used inside `{...}` placeholders
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Company => "company",
            Field::HouseNumber => "houseNumber",
            Field::Street => "street",
            Field::Street2 => "street2",
            Field::City => "city",
            Field::State => "state",
            Field::PostalCode => "postalCode",
            Field::Country => "country",
            Field::TaxNumber => "taxNumber",
        }
    }

    /// Name of the flat element attribute carrying this field
    pub fn attribute(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Company => "company",
            Field::HouseNumber => "house-number",
            Field::Street => "street",
            Field::Street2 => "street2",
            Field::City => "city",
            Field::State => "state",
            Field::PostalCode => "postal-code",
            Field::Country => "country",
            Field::TaxNumber => "tax-number",
        }
    }

    /// Look up a field by its placeholder name
    pub fn from_placeholder(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.placeholder() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.placeholder())
    }
}

/// Error returned when parsing an unknown field name
#[derive(Debug, thiserror::Error)]
#[error("unknown address field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::from_placeholder(s)
            .or_else(|| Field::ALL.into_iter().find(|f| f.attribute() == s))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
