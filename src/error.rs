use std::sync::{PoisonError, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use thiserror::Error;

use crate::config::Config;

/// The request fields that may be rejected as present-but-blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    ControllerName,
    Controller,
    Target,
    Action,
    Params,
    Values,
    Classes,
}

#[derive(Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum StimulusError {
    #[error("configuration error: :{field} specified, but blank")]
    Configuration { field: Field },

    #[error("invalid ignore prefix pattern: {0}")]
    InvalidPattern(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Poisoned lock error: {0}")]
    PoisonedLock(String),
}

impl StimulusError {
    pub fn blank(field: Field) -> Self {
        StimulusError::Configuration { field }
    }

    /// The offending field, for configuration errors.
    pub fn field(&self) -> Option<Field> {
        match self {
            StimulusError::Configuration { field } => Some(*field),
            _ => None,
        }
    }
}

impl From<regex::Error> for StimulusError {
    fn from(err: regex::Error) -> Self {
        StimulusError::InvalidPattern(err.to_string())
    }
}

impl From<PoisonError<RwLockReadGuard<'_, Config>>> for StimulusError {
    fn from(err: PoisonError<RwLockReadGuard<'_, Config>>) -> Self {
        StimulusError::PoisonedLock(err.to_string())
    }
}

impl From<PoisonError<RwLockWriteGuard<'_, Config>>> for StimulusError {
    fn from(err: PoisonError<RwLockWriteGuard<'_, Config>>) -> Self {
        StimulusError::PoisonedLock(err.to_string())
    }
}
