use std::any::Any;

pub trait AsAny {
    fn as_any_ref(&self) -> &dyn Any;
}

impl<T> AsAny for T where T: Any {
    fn as_any_ref(&self) -> &dyn Any {
        self
    }
}
