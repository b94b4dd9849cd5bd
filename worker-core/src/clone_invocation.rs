use std::fmt::{Display, Formatter};

use crate::clone_initializer::{CloneInitializer, initializer_for, initializer_matches};
use crate::clone_kind::CloneKind;
use crate::error::{Error, Result};

/// A single clone run: one kind and the initializer built for it. The
/// initializer's concrete type always matches `kind`.
#[derive(Debug, Clone)]
pub struct CloneInvocation {
    kind: CloneKind,
    initializer: Box<dyn CloneInitializer>,
}

impl CloneInvocation {
    pub fn dispatch(kind: CloneKind) -> Self {
        Self {
            kind,
            initializer: initializer_for(kind),
        }
    }

    pub fn new(kind: CloneKind, initializer: Box<dyn CloneInitializer>) -> Result<Self> {
        if !initializer_matches(kind, initializer.as_ref()) {
            return Err(Error::InitializerKindMismatch {
                kind,
                initializer: format!("{:?}", initializer),
            });
        }
        Ok(Self { kind, initializer })
    }

    pub fn kind(&self) -> CloneKind {
        self.kind
    }

    pub fn initializer(&self) -> &dyn CloneInitializer {
        self.initializer.as_ref()
    }

    pub fn into_parts(self) -> (CloneKind, Box<dyn CloneInitializer>) {
        (self.kind, self.initializer)
    }
}

impl Display for CloneInvocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "CloneInvocation {{ kind: {}, initializer: {:?} }}", self.kind, self.initializer)
    }
}
