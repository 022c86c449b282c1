pub use action::{ActionDescriptor, expand_actions};
pub use casing::dash_case;
pub use compiler::{ACTION_KEY, BundleKind, CONTROLLER_KEY, bundle_key, compile, target_key};
pub use config::{Config, ConfigOptions, IgnorePrefix, configure, current_config};
pub use derive::{SEGMENT_SEPARATOR, derive_local_name};
pub use engine::StimulusEngine;
pub use error::{Field, StimulusError};
pub use serializer::serialize;
pub use traits::Stimulize;
pub use types::{
    Bundle, DEFAULT_CONTROLLER_FLAG, DefaultController, DirectiveMap, DirectiveRequest,
    NAMESPACE_DELIMITER, OutputMode, Rendered, TypeIdentifier,
};

mod action;
mod casing;
mod compiler;
mod config;
mod derive;
mod engine;
mod error;
mod serializer;
mod traits;
mod types;
