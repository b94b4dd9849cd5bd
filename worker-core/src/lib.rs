pub const CLONE_WORKER_CONFIG: &'static str = include_str!("../clone-worker.toml");

pub mod clone_kind;
pub mod clone_initializer;
pub mod clone_invocation;
pub mod command;
pub mod config;
pub mod error;
pub mod ext;

pub use clone_initializer::CloneInitializer;
pub use clone_kind::CloneKind;
