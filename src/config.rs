//! Process-wide configuration.
//!
//! The global [`Config`] is read by [`StimulusEngine::from_global`](crate::StimulusEngine::from_global)
//! and amended with [`configure`]. Configure once during startup; reads take
//! a snapshot and never hold the lock while compiling.

use std::borrow::Cow;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::error::StimulusError;
use crate::types::{OutputMode, is_blank};

/// Text removed from a type identifier before the controller name is derived.
#[derive(Debug, Clone)]
pub enum IgnorePrefix {
    /// Plain substring; its first occurrence is removed.
    Literal(String),
    /// Regular expression; its first match is removed.
    Pattern(Regex),
}

impl IgnorePrefix {
    pub fn literal(prefix: impl Into<String>) -> Self {
        IgnorePrefix::Literal(prefix.into())
    }

    pub fn pattern(pattern: &str) -> Result<Self, StimulusError> {
        Ok(IgnorePrefix::Pattern(Regex::new(pattern)?))
    }

    pub fn as_str(&self) -> &str {
        match self {
            IgnorePrefix::Literal(s) => s,
            IgnorePrefix::Pattern(re) => re.as_str(),
        }
    }

    /// Remove the first occurrence from `input`. A blank prefix is a no-op.
    pub fn strip<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self {
            IgnorePrefix::Literal(prefix) if is_blank(prefix) => Cow::Borrowed(input),
            IgnorePrefix::Literal(prefix) => match input.find(prefix.as_str()) {
                Some(at) => Cow::Owned(format!("{}{}", &input[..at], &input[at + prefix.len()..])),
                None => Cow::Borrowed(input),
            },
            IgnorePrefix::Pattern(re) => re.replace(input, ""),
        }
    }
}

impl PartialEq for IgnorePrefix {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (IgnorePrefix::Literal(a), IgnorePrefix::Literal(b)) => a == b,
            (IgnorePrefix::Pattern(a), IgnorePrefix::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<&str> for IgnorePrefix {
    fn from(prefix: &str) -> Self {
        IgnorePrefix::literal(prefix)
    }
}

impl From<String> for IgnorePrefix {
    fn from(prefix: String) -> Self {
        IgnorePrefix::Literal(prefix)
    }
}

impl From<Regex> for IgnorePrefix {
    fn from(re: Regex) -> Self {
        IgnorePrefix::Pattern(re)
    }
}

/// Settings shared by every compile call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub output: OutputMode,
    pub ignore_prefix: Option<IgnorePrefix>,
}

impl Config {
    /// Layer the supplied options over this config; unset options are left untouched.
    pub fn merge(&mut self, options: ConfigOptions) {
        if let Some(output) = options.output {
            self.output = output;
        }
        if let Some(prefix) = options.ignore_prefix {
            self.ignore_prefix = Some(prefix);
        }
    }

    pub fn merged(mut self, options: ConfigOptions) -> Self {
        self.merge(options);
        self
    }
}

/// A partial [`Config`], applied with [`Config::merge`] or [`configure`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOptions {
    pub output: Option<OutputMode>,
    pub ignore_prefix: Option<IgnorePrefix>,
}

impl ConfigOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(mut self, output: OutputMode) -> Self {
        self.output = Some(output);
        self
    }

    pub fn ignore_prefix(mut self, prefix: impl Into<IgnorePrefix>) -> Self {
        self.ignore_prefix = Some(prefix.into());
        self
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Merge options into the process-wide configuration.
///
/// Writes are not coordinated beyond the lock itself; call this during
/// startup, before templates render.
pub fn configure(options: ConfigOptions) -> Result<(), StimulusError> {
    let mut config = CONFIG.write()?;
    config.merge(options);
    info!(
        event = "Configure",
        output = %config.output,
        ignore_prefix = config.ignore_prefix.as_ref().map(IgnorePrefix::as_str)
    );
    Ok(())
}

/// A snapshot of the process-wide configuration.
pub fn current_config() -> Result<Config, StimulusError> {
    Ok(CONFIG.read()?.clone())
}
