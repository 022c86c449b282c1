use tracing::debug;

use crate::compiler::compile;
use crate::config::{Config, current_config};
use crate::derive::derive_local_name;
use crate::error::StimulusError;
use crate::serializer::serialize;
use crate::types::{DirectiveMap, DirectiveRequest, OutputMode, Rendered};

/// Runs derive, compile and serialize against one configuration snapshot.
/// Cheap to clone; holds no lock.
#[derive(Debug, Clone, Default)]
pub struct StimulusEngine {
    config: Config,
}

impl StimulusEngine {
    pub fn new(config: Config) -> Self {
        StimulusEngine { config }
    }

    /// An engine over a snapshot of the process-wide configuration.
    pub fn from_global() -> Result<Self, StimulusError> {
        Ok(StimulusEngine::new(current_config()?))
    }

    /// The local controller name for a type identifier, honoring the ignore prefix.
    pub fn derive_local_name(&self, type_name: &str) -> String {
        derive_local_name(type_name, self.config.ignore_prefix.as_ref())
    }

    pub fn compile(
        &self,
        type_name: &str,
        request: &DirectiveRequest,
    ) -> Result<DirectiveMap, StimulusError> {
        let local_name = self.derive_local_name(type_name);
        compile(request, &local_name)
    }

    /// Compile, then shape the result according to the configured output mode.
    pub fn render(
        &self,
        type_name: &str,
        request: &DirectiveRequest,
    ) -> Result<Rendered, StimulusError> {
        let map = self.compile(type_name, request)?;
        debug!(event = "Render", output = %self.config.output, keys = map.len());
        Ok(match self.config.output {
            OutputMode::Hash => Rendered::Hash(map),
            OutputMode::AttributeString => Rendered::AttributeString(serialize(&map)),
        })
    }
}
