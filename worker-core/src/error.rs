use thiserror::Error;

use crate::clone_kind::CloneKind;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    #[error("unknown clone kind {0}, expected one of horizontal-resharding, vertical-split")]
    UnknownCloneKind(String),
    #[error("initializer {initializer} cannot serve clone kind {kind}")]
    InitializerKindMismatch {
        kind: CloneKind,
        initializer: String,
    },
    #[error("clone kind {0} is disabled by configuration")]
    CloneKindDisabled(CloneKind),
}
