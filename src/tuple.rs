use core::convert::Infallible;
use core::fmt;

/// Placeholder for [`Tuple::First`] and [`Tuple::Rest`] of the empty tuple.
///
/// Uninhabited, so the empty tuple's first element can never be produced.
pub type Nothing = Infallible;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::EmptyTuple {}
    impl<H, T> Sealed for super::ConsTuple<H, T> {}
}

/// Type-level facts about a tuple shape: its arity and, for non-empty
/// tuples, the first element type and the type of the remaining tail.
///
/// Implemented only by [`EmptyTuple`] and [`ConsTuple`]; a bound on this
/// trait is how operations restrict themselves to genuine tuples.
pub trait Tuple: sealed::Sealed {
    /// Number of elements, fixed by the type.
    const COUNT: usize;

    /// First element type, [`Nothing`] for the empty tuple.
    type First;

    /// Type of the tail tuple, [`Nothing`] for the empty tuple.
    type Rest;

    /// Arity as a value, always equal to `Self::COUNT`.
    fn count(&self) -> usize {
        Self::COUNT
    }
}

/// The zero-element tuple, terminating every cons chain.
#[derive(Clone, Copy, Default, Hash)]
pub struct EmptyTuple;

/// One element plus the tuple of the remaining elements.
///
/// A well-formed tuple nests these down to an [`EmptyTuple`]:
/// `ConsTuple<A, ConsTuple<B, EmptyTuple>>` is the two-element tuple
/// `(A, B)`. The fields are public so that macros and patterns can take
/// the chain apart.
#[derive(Clone, Copy, Default, Hash)]
pub struct ConsTuple<H, T> {
    /// The element stored in this cell.
    pub head: H,
    /// The remaining elements.
    pub tail: T,
}

impl<H, T> ConsTuple<H, T> {
    /// Builds one cell of the chain.
    pub const fn new(head: H, tail: T) -> Self {
        ConsTuple { head, tail }
    }
}

impl Tuple for EmptyTuple {
    const COUNT: usize = 0;
    type First = Nothing;
    type Rest = Nothing;
}

impl<H, T: Tuple> Tuple for ConsTuple<H, T> {
    const COUNT: usize = 1 + T::COUNT;
    type First = H;
    type Rest = T;
}

impl PartialEq for EmptyTuple {
    fn eq(&self, _: &EmptyTuple) -> bool {
        true
    }
}

impl Eq for EmptyTuple {}

impl<H1, T1, H2, T2> PartialEq<ConsTuple<H2, T2>> for ConsTuple<H1, T1>
where
    H1: PartialEq<H2>,
    T1: PartialEq<T2>,
{
    fn eq(&self, other: &ConsTuple<H2, T2>) -> bool {
        self.head == other.head && self.tail == other.tail
    }
}

impl<H: Eq, T: Eq> Eq for ConsTuple<H, T> {}

trait DebugElements {
    fn fmt_elements(&self, builder: &mut fmt::DebugTuple<'_, '_>);
}

impl DebugElements for EmptyTuple {
    fn fmt_elements(&self, _builder: &mut fmt::DebugTuple<'_, '_>) {}
}

impl<H: fmt::Debug, T: DebugElements> DebugElements for ConsTuple<H, T> {
    fn fmt_elements(&self, builder: &mut fmt::DebugTuple<'_, '_>) {
        builder.field(&self.head);
        self.tail.fmt_elements(builder);
    }
}

impl fmt::Debug for EmptyTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

impl<H: fmt::Debug, T: DebugElements> fmt::Debug for ConsTuple<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_tuple("");
        self.fmt_elements(&mut builder);
        builder.finish()
    }
}
