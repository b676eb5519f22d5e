//! Conversions between cons tuples and native Rust tuples.
//!
//! `From<(T0, ..., Tn)>` and [`IntoNative`] are generated for every arity
//! up to 12. The reverse of the `From` direction has to be a local trait:
//! implementing `From<ConsTuple<...>>` for a native tuple would fall foul
//! of the orphan rule.

use crate::tuple::{ConsTuple, EmptyTuple, Tuple};

/// Conversion from a cons tuple to the native Rust tuple of the same arity.
pub trait IntoNative: Tuple {
    /// The native tuple with the same element types in the same order.
    type Native;

    fn into_native(self) -> Self::Native;
}

contuple_macros::impl_native_conversions!(12);
