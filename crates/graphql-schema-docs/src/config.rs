use crate::ConfigError;
use std::{num::NonZeroUsize, str::FromStr};

const DEFAULT_DESCRIPTION_WIDTH: NonZeroUsize = NonZeroUsize::MIN.saturating_add(79);

/// Settings fixed for the lifetime of a [Renderer](crate::Renderer).
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererConfig {
    /// Title attached to every rendered section
    pub title: String,
    /// Maximum width of a description comment line, in characters, not
    /// counting the indentation and comment marker
    pub description_width: NonZeroUsize,
    /// Indentation of the members of a definition block
    pub indent: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            title: String::from("GraphQL Schema definition"),
            description_width: DEFAULT_DESCRIPTION_WIDTH,
            indent: String::from("  "),
        }
    }
}

impl RendererConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description_width(mut self, width: NonZeroUsize) -> Self {
        self.description_width = width;
        self
    }

    /// Parses a TOML document. Missing keys take their default value.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }
}

impl FromStr for RendererConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml(s)
    }
}
