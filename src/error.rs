use core::{any, fmt};

/// The error returned by [`Heap::pop`] and [`Heap::peek`] when the heap holds
/// no elements.
///
/// [`Heap::pop`]: crate::Heap::pop
/// [`Heap::peek`]: crate::Heap::peek
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyHeap {
    type_name: &'static str,
}

impl EmptyHeap {
    pub(crate) fn of<T>() -> Self {
        EmptyHeap { type_name: any::type_name::<T>() }
    }

    /// The name of the heap's element type, as given by [`core::any::type_name`].
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Display for EmptyHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no more entries of type {}", self.type_name)
    }
}

impl crate::polyfill::Error for EmptyHeap {}
