use std::collections::HashSet;
use std::path::Path;

use config::{File, FileFormat, Source};
use config::builder::DefaultState;
use serde::{Deserialize, Serialize};

use crate::clone_kind::CloneKind;
use crate::CLONE_WORKER_CONFIG;
use crate::config::{Config, ConfigBuilder};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloneConfig {
    #[serde(default = "default_kind")]
    pub default_kind: CloneKind,
    #[serde(default)]
    pub disabled_kinds: HashSet<CloneKind>,
}

impl Config for CloneConfig {}

impl CloneConfig {
    pub fn builder() -> CloneConfigBuilder {
        CloneConfigBuilder::default()
    }

    pub fn is_enabled(&self, kind: CloneKind) -> bool {
        !self.disabled_kinds.contains(&kind)
    }
}

fn default_kind() -> CloneKind {
    CloneKind::HorizontalResharding
}

impl Default for CloneConfig {
    fn default() -> Self {
        Self {
            default_kind: default_kind(),
            disabled_kinds: HashSet::new(),
        }
    }
}

/// Layers user sources over the embedded `clone-worker.toml`; later sources win.
#[derive(Debug)]
pub struct CloneConfigBuilder {
    builder: config::ConfigBuilder<DefaultState>,
}

impl Default for CloneConfigBuilder {
    fn default() -> Self {
        let builder = config::Config::builder()
            .add_source(File::from_str(CLONE_WORKER_CONFIG, FileFormat::Toml));
        Self { builder }
    }
}

impl CloneConfigBuilder {
    /// Reads `path` as TOML whatever its extension.
    pub fn add_toml_file(self, path: impl AsRef<Path>) -> anyhow::Result<Self> {
        self.add_source(File::from(path.as_ref()).format(FileFormat::Toml))
    }
}

impl ConfigBuilder for CloneConfigBuilder {
    type C = CloneConfig;

    fn add_source<T>(self, source: T) -> anyhow::Result<Self> where T: Source + Send + Sync + 'static {
        Ok(Self { builder: self.builder.add_source(source) })
    }

    fn build(self) -> anyhow::Result<Self::C> {
        let clone_config = self.builder.build()?.try_deserialize::<Self::C>()?;
        Ok(clone_config)
    }
}
