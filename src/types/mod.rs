//! Data model types for directive requests and their compiled output.
//!
//! Canonical forms:
//! - Type identifier: `My::Fancy::FooThing`, segments split on `::`
//! - Action token: `[event->]function` or `[event->]controller#function`
//! - Attribute keys: `data-controller`, `data-action`,
//!   `data-{controller}-{key}-{param|value|class}`, `data-{controller}-target`

mod directive_map;
mod output;
mod request;
mod type_name;

pub use directive_map::DirectiveMap;
pub use output::{OutputMode, Rendered};
pub use request::{Bundle, DEFAULT_CONTROLLER_FLAG, DefaultController, DirectiveRequest};
pub use type_name::{NAMESPACE_DELIMITER, TypeIdentifier};

pub(crate) use request::is_blank;
