use crate::clone_initializer::CloneInitializer;

#[derive(Debug, Copy, Clone, Default)]
pub struct VerticalSplitInitializer;

impl CloneInitializer for VerticalSplitInitializer {}
