//! Element-wise conversion between tuples of equal arity, and the declared
//! failure capability of element types.
//!
//! Arity agreement is structural: the conversion traits are only implemented
//! when source and destination chains have the same shape, so a mismatch is
//! a build error.

use crate::tuple::{ConsTuple, EmptyTuple};

/// Conversion construction: build `Self` from a tuple of the same arity,
/// converting each element with [`From`].
pub trait FromTuple<Src>: Sized {
    fn from_tuple(src: Src) -> Self;
}

impl FromTuple<EmptyTuple> for EmptyTuple {
    fn from_tuple(_: EmptyTuple) -> Self {
        EmptyTuple
    }
}

impl<SH, ST, DH, DT> FromTuple<ConsTuple<SH, ST>> for ConsTuple<DH, DT>
where
    DH: From<SH>,
    DT: FromTuple<ST>,
{
    fn from_tuple(src: ConsTuple<SH, ST>) -> Self {
        ConsTuple {
            head: DH::from(src.head),
            tail: DT::from_tuple(src.tail),
        }
    }
}

/// Conversion assignment: overwrite `self` in place from a tuple of the
/// same arity, converting each element with [`From`].
pub trait AssignFrom<Src> {
    fn assign_from(&mut self, src: Src);
}

impl AssignFrom<EmptyTuple> for EmptyTuple {
    fn assign_from(&mut self, _: EmptyTuple) {}
}

impl<SH, ST, DH, DT> AssignFrom<ConsTuple<SH, ST>> for ConsTuple<DH, DT>
where
    DH: From<SH>,
    DT: AssignFrom<ST>,
{
    fn assign_from(&mut self, src: ConsTuple<SH, ST>) {
        self.head = DH::from(src.head);
        self.tail.assign_from(src.tail);
    }
}

/// Fallible conversion construction via [`TryFrom`].
///
/// `E` is the caller-chosen error type; each element's conversion error is
/// funneled into it with [`Into`] and propagated unmodified.
pub trait TryFromTuple<Src, E>: Sized {
    fn try_from_tuple(src: Src) -> Result<Self, E>;
}

impl<E> TryFromTuple<EmptyTuple, E> for EmptyTuple {
    fn try_from_tuple(_: EmptyTuple) -> Result<Self, E> {
        Ok(EmptyTuple)
    }
}

impl<SH, ST, DH, DT, E> TryFromTuple<ConsTuple<SH, ST>, E> for ConsTuple<DH, DT>
where
    DH: TryFrom<SH>,
    <DH as TryFrom<SH>>::Error: Into<E>,
    DT: TryFromTuple<ST, E>,
{
    fn try_from_tuple(src: ConsTuple<SH, ST>) -> Result<Self, E> {
        Ok(ConsTuple {
            head: DH::try_from(src.head).map_err(Into::into)?,
            tail: DT::try_from_tuple(src.tail)?,
        })
    }
}

/// Fallible conversion assignment via [`TryFrom`].
///
/// Elements are assigned front to back; an error leaves the elements
/// before the failing one already overwritten.
pub trait TryAssignFrom<Src, E> {
    fn try_assign_from(&mut self, src: Src) -> Result<(), E>;
}

impl<E> TryAssignFrom<EmptyTuple, E> for EmptyTuple {
    fn try_assign_from(&mut self, _: EmptyTuple) -> Result<(), E> {
        Ok(())
    }
}

impl<SH, ST, DH, DT, E> TryAssignFrom<ConsTuple<SH, ST>, E> for ConsTuple<DH, DT>
where
    DH: TryFrom<SH>,
    <DH as TryFrom<SH>>::Error: Into<E>,
    DT: TryAssignFrom<ST, E>,
{
    fn try_assign_from(&mut self, src: ConsTuple<SH, ST>) -> Result<(), E> {
        self.head = DH::try_from(src.head).map_err(Into::into)?;
        self.tail.try_assign_from(src.tail)
    }
}

/// Declared failure capability of a value type.
///
/// `CAN_FAIL` states whether constructing, converting, or assigning a value
/// of the type can fail at run time. A tuple can fail iff any of its
/// elements can, so the constant propagates through the chain by logical
/// OR and composing code can query it on the whole shape.
pub trait Fallibility {
    const CAN_FAIL: bool;
}

impl Fallibility for EmptyTuple {
    const CAN_FAIL: bool = false;
}

impl<H, T> Fallibility for ConsTuple<H, T>
where
    H: Fallibility,
    T: Fallibility,
{
    const CAN_FAIL: bool = H::CAN_FAIL || T::CAN_FAIL;
}

macro_rules! infallible {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Fallibility for $ty {
                const CAN_FAIL: bool = false;
            }
        )*
    };
}

infallible!(
    bool, char, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, (),
    str, String,
);

impl<T: ?Sized> Fallibility for &T {
    const CAN_FAIL: bool = false;
}

impl<T: ?Sized> Fallibility for &mut T {
    const CAN_FAIL: bool = false;
}

impl<T: Fallibility> Fallibility for Option<T> {
    const CAN_FAIL: bool = T::CAN_FAIL;
}

impl<T: Fallibility + ?Sized> Fallibility for Box<T> {
    const CAN_FAIL: bool = T::CAN_FAIL;
}

impl<T: Fallibility> Fallibility for Vec<T> {
    const CAN_FAIL: bool = T::CAN_FAIL;
}
