use std::fmt::Debug;

use dyn_clone::DynClone;

use crate::clone_initializer::horizontal_resharding_initializer::HorizontalReshardingInitializer;
use crate::clone_initializer::vertical_split_initializer::VerticalSplitInitializer;
use crate::clone_kind::CloneKind;
use crate::ext::as_any::AsAny;

pub mod horizontal_resharding_initializer;
pub mod vertical_split_initializer;

/// Implemented once per [`CloneKind`]. Carries no operations yet; the clone
/// runner widens it as it grows.
pub trait CloneInitializer: Send + Sync + Debug + DynClone + AsAny {}

dyn_clone::clone_trait_object!(CloneInitializer);

pub fn initializer_for(kind: CloneKind) -> Box<dyn CloneInitializer> {
    match kind {
        CloneKind::HorizontalResharding => Box::new(HorizontalReshardingInitializer),
        CloneKind::VerticalSplit => Box::new(VerticalSplitInitializer),
    }
}

pub fn initializer_matches(kind: CloneKind, initializer: &dyn CloneInitializer) -> bool {
    let initializer = initializer.as_any_ref();
    match kind {
        CloneKind::HorizontalResharding => initializer.is::<HorizontalReshardingInitializer>(),
        CloneKind::VerticalSplit => initializer.is::<VerticalSplitInitializer>(),
    }
}
