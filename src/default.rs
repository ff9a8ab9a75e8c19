//! Orderings that delegate to the [`Ord`] implementation of the element type.
//!
//! These are conveniences for the common min-heap and max-heap cases; a closure
//! such as `|a: &T, b: &T| a < b` behaves identically.

use crate::Before;
use core::{fmt, marker::PhantomData};

macro_rules! ord_orderings {
    ($($(#[$attrs:meta])* $name:ident => $op:tt;)+) => {$(
        $(#[$attrs])*
        pub struct $name<T: ?Sized + Ord>(PhantomData<fn(&T)>);

        impl<T: ?Sized + Ord> $name<T> {
            /// Creates the ordering.
            #[must_use]
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<T: ?Sized + Ord> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: ?Sized + Ord> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T: ?Sized + Ord> Copy for $name<T> {}

        impl<T: ?Sized + Ord> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl<T: ?Sized + Ord> Before<T> for $name<T> {
            #[inline]
            fn before(&self, this: &T, that: &T) -> bool {
                this $op that
            }
        }
    )+};
}

ord_orderings! {
    /// A zero-sized ordering that places smaller values first, making a
    /// [`Heap`](crate::Heap) a min-heap.
    ///
    /// ```
    /// use predicate_heap::{Heap, MinFirst};
    ///
    /// let heap: Heap<_, MinFirst<_>> = Heap::from(vec![4, 2, 6]);
    /// assert_eq!(heap.peek(), Ok(&2));
    /// ```
    MinFirst => <;

    /// A zero-sized ordering that places larger values first, making a
    /// [`Heap`](crate::Heap) a max-heap.
    ///
    /// ```
    /// use predicate_heap::{Heap, MaxFirst};
    ///
    /// let heap: Heap<_, MaxFirst<_>> = Heap::from(vec![4, 2, 6]);
    /// assert_eq!(heap.peek(), Ok(&6));
    /// ```
    MaxFirst => >;
}
