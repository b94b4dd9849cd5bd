use std::fmt::Debug;

use config::Source;

pub mod clone_config;

pub trait Config: Debug + Send + Sync {}

pub trait ConfigBuilder: Sized {
    type C: Config;

    fn add_source<T>(self, source: T) -> anyhow::Result<Self>
        where
            T: Source + Send + Sync + 'static;

    fn build(self) -> anyhow::Result<Self::C>;
}
