#![allow(unused_imports)]

mod definitions {
    use cfg_if::cfg_if;

    cfg_if! {
        if #[cfg(feature = "std")] {
            pub use std::error::Error;
        } else if #[cfg(feature = "error_in_core")] {
            pub use core::error::Error;
        } else {
            // Without `std` or `error_in_core` there is no `Error` trait to
            // implement; error types fall back to `Debug + Display` alone.
            pub trait Error: core::fmt::Debug + core::fmt::Display {}
        }
    }

    cfg_if! {
        if #[cfg(feature = "trusted_len")] {
            pub use core::iter::TrustedLen;
        } else {
            /// Stand-in marker so that iterator definitions need not be
            /// duplicated per feature set.
            ///
            /// # Safety
            ///
            /// Implementors must report an exact `size_hint`.
            pub unsafe trait TrustedLen: Iterator {}
        }
    }
}

pub(crate) use definitions::{Error, TrustedLen};
