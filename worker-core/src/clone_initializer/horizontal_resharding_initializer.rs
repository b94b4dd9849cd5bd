use crate::clone_initializer::CloneInitializer;

#[derive(Debug, Copy, Clone, Default)]
pub struct HorizontalReshardingInitializer;

impl CloneInitializer for HorizontalReshardingInitializer {}
