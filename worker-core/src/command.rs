use tracing::{debug, info, warn};

use crate::clone_invocation::CloneInvocation;
use crate::clone_kind::CloneKind;
use crate::config::clone_config::CloneConfig;
use crate::error::Error;

/// Entry point of the split clone command: picks the kind and builds the
/// invocation handed to the clone runner.
#[derive(Debug, Clone)]
pub struct CloneCommand {
    config: CloneConfig,
}

impl CloneCommand {
    pub fn new(config: CloneConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CloneConfig {
        &self.config
    }

    pub fn dispatch(&self, requested: Option<CloneKind>) -> anyhow::Result<CloneInvocation> {
        let kind = match requested {
            Some(kind) => kind,
            None => {
                debug!("no clone kind requested, fallback to default {}", self.config.default_kind);
                self.config.default_kind
            }
        };
        if !self.config.is_enabled(kind) {
            warn!("refuse to dispatch clone, kind {} is disabled", kind);
            return Err(Error::CloneKindDisabled(kind).into());
        }
        let invocation = CloneInvocation::dispatch(kind);
        info!("dispatch {}", invocation);
        Ok(invocation)
    }
}
