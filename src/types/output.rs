//! Output mode and render results.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::StimulusError;

use super::directive_map::DirectiveMap;

/// How a render call hands back its result.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OutputMode {
    /// Return the raw [`DirectiveMap`].
    Hash,
    /// Return the map serialized as a single `key="value"` string.
    #[default]
    #[serde(alias = "html_string")]
    #[strum(to_string = "attribute_string", serialize = "html_string")]
    AttributeString,
}

impl OutputMode {
    /// Parse an output mode, mapping unknown names to [`StimulusError::InvalidFormat`].
    pub fn parse(s: &str) -> Result<Self, StimulusError> {
        OutputMode::from_str(s).map_err(|_| {
            StimulusError::InvalidFormat(format!(
                "unknown output mode '{s}' (expected 'hash' or 'attribute_string')"
            ))
        })
    }
}

/// The result of rendering a request, shaped by the configured [`OutputMode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Rendered {
    Hash(DirectiveMap),
    AttributeString(String),
}

impl Rendered {
    pub fn as_map(&self) -> Option<&DirectiveMap> {
        match self {
            Rendered::Hash(map) => Some(map),
            Rendered::AttributeString(_) => None,
        }
    }

    pub fn as_attribute_string(&self) -> Option<&str> {
        match self {
            Rendered::Hash(_) => None,
            Rendered::AttributeString(s) => Some(s),
        }
    }
}

impl Display for Rendered {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Rendered::Hash(map) => write!(f, "{map}"),
            Rendered::AttributeString(s) => write!(f, "{s}"),
        }
    }
}
