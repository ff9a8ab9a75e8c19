//! A priority queue implemented as an array-backed binary heap that orders its
//! elements according to a caller-supplied predicate rather than the [`Ord`] trait.
//!
//! The predicate answers a single question: should `this` come before `that`?
//! Whichever element it places before every other sits at the top of the heap.
//! A predicate of `|a, b| a < b` makes a min-heap, `|a, b| a > b` a max-heap,
//! and anything expressing a strict weak ordering over `T` is equally valid.
//!
//! ```
//! use predicate_heap::Heap;
//!
//! let mut heap = Heap::new(|a: &i32, b: &i32| a < b);
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//! heap.push(1);
//!
//! assert_eq!(heap.drain_sorted().collect::<Vec<_>>(), [1, 3, 5, 8]);
//! assert!(heap.is_empty());
//! ```
//!
//! Orderings that are plain types rather than closures implement [`Before`]
//! directly; [`MinFirst`] and [`MaxFirst`] delegate to `T`'s [`Ord`].

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(feature = "error_in_core", feature(error_in_core))]
#![cfg_attr(feature = "extend_one", feature(extend_one))]
#![cfg_attr(feature = "trusted_len", feature(trusted_len))]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

extern crate alloc;

mod polyfill;

mod default;
mod error;
pub mod heap;

pub use default::{MaxFirst, MinFirst};
pub use error::EmptyHeap;
pub use heap::Heap;

/// A "comes before" relation over values of type `T`.
///
/// `before(this, that)` returns `true` when `this` has strictly higher priority
/// than `that` and must therefore be nearer the top of a [`Heap`].
///
/// Implementations should express a strict weak ordering: irreflexive,
/// asymmetric and transitive, with incomparability also transitive. It is a
/// logic error for the result for any two values to change while they are held
/// in the same heap, for example through [`Cell`], [`RefCell`], global state or
/// I/O. The behavior resulting from such a logic error is not specified, but
/// will be encapsulated to the `Heap` that observed it and not result in
/// undefined behavior.
///
/// Every `Fn(&T, &T) -> bool` is a `Before<T>`, including references to such
/// closures, so one comparator may be shared between several heaps by passing
/// `&cmp` to each.
///
/// ```
/// use predicate_heap::{Before, Heap};
///
/// // Longest string first.
/// struct ByLength;
///
/// impl Before<String> for ByLength {
///     fn before(&self, this: &String, that: &String) -> bool {
///         this.len() > that.len()
///     }
/// }
///
/// let mut heap: Heap<String, _> = Heap::new(ByLength);
/// heap.extend(["fig", "banana", "kiwi"].map(String::from));
/// assert_eq!(heap.pop().unwrap(), "banana");
/// ```
///
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
pub trait Before<T: ?Sized> {
    /// Whether `this` comes strictly before `that`.
    fn before(&self, this: &T, that: &T) -> bool;
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Before<T> for F {
    #[inline]
    fn before(&self, this: &T, that: &T) -> bool {
        self(this, that)
    }
}
