//! Template registry mapping country codes to address layouts

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

use super::definition::Template;
use super::lint::{lint, LintWarning};

/// Key of the mandatory fallback template
pub const DEFAULT_KEY: &str = "default";

/// Errors that can occur when loading a template table
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Error reading a template file
    #[error("error reading template file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Table is not valid TOML or has the wrong shape
    #[error("failed to parse template table: {0}")]
    Parse(#[from] toml::de::Error),

    /// Table has no `default` entry
    #[error("template table has no `default` entry")]
    MissingDefault,

    /// Two keys of one table name the same country, ignoring case
    #[error("duplicate template key: {key}")]
    DuplicateKey { key: String },
}

/// TOML structure for deserializing template tables
#[derive(Deserialize)]
struct TomlTemplates {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    templates: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

const BUILTIN_TABLE: &str = include_str!("templates.toml");

/// A parsed template table. `default` is optional so a table can also serve
/// as a set of overrides.
#[derive(Debug, Clone, Default)]
pub struct TemplateTable {
    pub name: Option<String>,
    pub description: Option<String>,
    pub default: Option<Template>,
    /// Templates keyed by normalized country code
    pub templates: HashMap<String, Template>,
}

impl TemplateTable {
    /// Load a table from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        let content = std::fs::read_to_string(path).map_err(|source| TemplateError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load a table from a TOML string. Keys are case-insensitive; two keys
    /// naming the same country are rejected.
    pub fn from_toml_str(content: &str) -> Result<Self, TemplateError> {
        let parsed: TomlTemplates = toml::from_str(content)?;
        let mut table = TemplateTable {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            ..Default::default()
        };
        for (key, source) in parsed.templates {
            if is_default_key(&key) {
                if table.default.is_some() {
                    return Err(TemplateError::DuplicateKey {
                        key: DEFAULT_KEY.to_string(),
                    });
                }
                table.default = Some(Template::new(source));
            } else {
                let code = normalize(&key);
                if table.templates.contains_key(&code) {
                    return Err(TemplateError::DuplicateKey { key: code });
                }
                table.templates.insert(code, Template::new(source));
            }
        }
        Ok(table)
    }
}

/// Immutable mapping from country code to template, with a guaranteed default
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    /// Optional name of the table
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    templates: HashMap<String, Template>,
    default: Template,
}

impl TemplateRegistry {
    /// Create a registry holding only a default template
    pub fn new(default: impl Into<Template>) -> Self {
        Self {
            name: None,
            description: None,
            templates: HashMap::new(),
            default: default.into(),
        }
    }

    /// Add or replace the template for a country code, builder style
    pub fn with_template(mut self, country_code: &str, template: impl Into<Template>) -> Self {
        self.insert(country_code, template.into());
        self
    }

    /// The registry built from the embedded table, shared by the whole process
    pub fn builtin() -> &'static TemplateRegistry {
        static BUILTIN: OnceLock<TemplateRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::from_toml_str(BUILTIN_TABLE).expect("Builtin template table should be valid")
        })
    }

    /// Load a template table from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        Self::from_table(TemplateTable::from_file(path)?)
    }

    /// Load a template table from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, TemplateError> {
        Self::from_table(TemplateTable::from_toml_str(content)?)
    }

    /// Build a registry from a table, which must carry a default
    pub fn from_table(mut table: TemplateTable) -> Result<Self, TemplateError> {
        let default = table.default.take().ok_or(TemplateError::MissingDefault)?;
        Ok(Self::new(default).with_overrides(table))
    }

    /// Entries of `table` replace or extend the entries of `self`. The default
    /// and metadata are replaced only when the table carries them.
    pub fn with_overrides(mut self, table: TemplateTable) -> Self {
        if let Some(default) = table.default {
            self.default = default;
        }
        self.templates.extend(table.templates);
        if table.name.is_some() {
            self.name = table.name;
            self.description = table.description;
        }
        self
    }

    /// Apply an override table loaded from a TOML file
    pub fn with_override_file(self, path: &Path) -> Result<Self, TemplateError> {
        Ok(self.with_overrides(TemplateTable::from_file(path)?))
    }

    fn insert(&mut self, country_code: &str, template: Template) {
        if is_default_key(country_code) {
            self.default = template;
        } else {
            self.templates.insert(normalize(country_code), template);
        }
    }

    /// Resolve the template for a country code, falling back to the default
    pub fn lookup(&self, country_code: &str) -> &Template {
        let code = normalize(country_code);
        match self.templates.get(&code) {
            Some(template) => template,
            None => {
                tracing::debug!(country_code = %code, "no template for country, using default");
                &self.default
            }
        }
    }

    /// The fallback template
    pub fn default_template(&self) -> &Template {
        &self.default
    }

    /// Check if a country has its own template
    pub fn contains(&self, country_code: &str) -> bool {
        self.templates.contains_key(&normalize(country_code))
    }

    /// Country codes with an explicit entry, sorted
    pub fn country_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.templates.keys().map(|s| s.as_str()).collect();
        codes.sort_unstable();
        codes
    }

    /// Number of templates, default included
    pub fn len(&self) -> usize {
        self.templates.len() + 1
    }

    /// A registry always holds the default template
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Lint every template; warnings are keyed by country code or `default`
    pub fn lint(&self) -> Vec<(String, LintWarning)> {
        let mut warnings: Vec<(String, LintWarning)> = lint(self.default.source())
            .into_iter()
            .map(|w| (DEFAULT_KEY.to_string(), w))
            .collect();
        for code in self.country_codes() {
            if let Some(template) = self.templates.get(code) {
                warnings.extend(lint(template.source()).into_iter().map(|w| (code.to_string(), w)));
            }
        }
        warnings
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

fn normalize(country_code: &str) -> String {
    country_code.trim().to_uppercase()
}

fn is_default_key(key: &str) -> bool {
    key.trim().eq_ignore_ascii_case(DEFAULT_KEY)
}
