use std::borrow::Cow;

use crate::engine::StimulusEngine;
use crate::error::StimulusError;
use crate::types::{DirectiveMap, DirectiveRequest, Rendered, TypeIdentifier};

/// Anything that can carry Stimulus directives, e.g. a view component.
///
/// The controller name is derived from the implementor's type name, so
/// `my_app::components::NavBar` attaches `my-app--components--nav-bar`
/// unless an ignore prefix strips part of it.
pub trait Stimulize {
    /// The fully-qualified type name the controller name is derived from.
    fn stimulus_type_name(&self) -> Cow<'static, str> {
        Cow::Owned(TypeIdentifier::of::<Self>().to_string())
    }

    /// The engine used for every call, by default over the global config.
    fn stimulus_engine(&self) -> Result<StimulusEngine, StimulusError> {
        StimulusEngine::from_global()
    }

    /// The local controller name for this type.
    fn stimulus_controller(&self) -> Result<String, StimulusError> {
        Ok(self
            .stimulus_engine()?
            .derive_local_name(&self.stimulus_type_name()))
    }

    /// The directive map, regardless of the configured output mode.
    fn stimulus_hash(&self, request: &DirectiveRequest) -> Result<DirectiveMap, StimulusError> {
        self.stimulus_engine()?
            .compile(&self.stimulus_type_name(), request)
    }

    /// The directives shaped by the configured output mode.
    fn stimulus(&self, request: &DirectiveRequest) -> Result<Rendered, StimulusError> {
        self.stimulus_engine()?
            .render(&self.stimulus_type_name(), request)
    }
}
