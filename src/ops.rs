//! Tuple combination (`+`), single-element append (`&`), and the argument
//! classification used by `tuple_concat!`.
//!
//! Both operators are only implemented with a tuple on the left, so a
//! non-tuple left operand fails to compile.

use core::ops::{Add, BitAnd};

use crate::tuple::{ConsTuple, EmptyTuple, Tuple};

impl<Rhs: Tuple> Add<Rhs> for EmptyTuple {
    type Output = Rhs;

    fn add(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<H, T, Rhs> Add<Rhs> for ConsTuple<H, T>
where
    Rhs: Tuple,
    T: Add<Rhs>,
{
    type Output = ConsTuple<H, <T as Add<Rhs>>::Output>;

    fn add(self, rhs: Rhs) -> Self::Output {
        ConsTuple {
            head: self.head,
            tail: self.tail + rhs,
        }
    }
}

impl<V> BitAnd<V> for EmptyTuple {
    type Output = ConsTuple<V, EmptyTuple>;

    fn bitand(self, value: V) -> Self::Output {
        ConsTuple::new(value, EmptyTuple)
    }
}

impl<H, T, V> BitAnd<V> for ConsTuple<H, T>
where
    T: BitAnd<V>,
{
    type Output = ConsTuple<H, <T as BitAnd<V>>::Output>;

    fn bitand(self, value: V) -> Self::Output {
        ConsTuple {
            head: self.head,
            tail: self.tail & value,
        }
    }
}

// Autoref tag dispatch for `tuple_concat!`: `(&arg).concat_kind()` resolves
// to `TupleArg` for tuple arguments and to `ValueArg` for everything else,
// without overlapping impls. Macro plumbing, not part of the public API.

#[doc(hidden)]
pub struct TupleArg;

#[doc(hidden)]
pub struct ValueArg;

#[doc(hidden)]
pub trait TupleArgKind: Sized {
    fn concat_kind(&self) -> TupleArg {
        TupleArg
    }
}

impl<T: Tuple> TupleArgKind for T {}

#[doc(hidden)]
pub trait ValueArgKind: Sized {
    fn concat_kind(&self) -> ValueArg {
        ValueArg
    }
}

impl<T: ?Sized> ValueArgKind for &T {}

impl TupleArg {
    #[doc(hidden)]
    pub fn lift<T: Tuple>(self, tuple: T) -> T {
        tuple
    }
}

impl ValueArg {
    #[doc(hidden)]
    pub fn lift<T>(self, value: T) -> ConsTuple<T, EmptyTuple> {
        ConsTuple::new(value, EmptyTuple)
    }
}
