//! Compile-time and run-time indexed element access.
//!
//! Compile-time positions are the type-level numbers [`Here`] and
//! [`There`]; the aliases `I0`, `I1`, ... name one position each and are
//! generated, one item per valid index. An out-of-range position has no
//! [`At`] impl, so using it is a build error rather than a run-time fault.
//! Run-time selection goes through [`IndexBy`]/[`IndexByMut`], which check
//! the index before descending and report failures as [`IndexError`].

use core::fmt;
use core::marker::PhantomData;

use crate::tuple::{ConsTuple, EmptyTuple, Tuple};
use crate::visit::{Visit, VisitMut};

/// The first position of a tuple.
#[derive(Clone, Copy, Debug, Default)]
pub struct Here;

/// The position one step past `I`.
#[derive(Clone, Copy, Debug, Default)]
pub struct There<I>(PhantomData<I>);

/// Numeric value of a type-level position.
pub trait Nat {
    /// The position as a run-time index.
    const VALUE: usize;
}

impl Nat for Here {
    const VALUE: usize = 0;
}

impl<I: Nat> Nat for There<I> {
    const VALUE: usize = 1 + I::VALUE;
}

contuple_macros::index_types!(12);

/// Direct reference access to the element at type-level position `I`.
pub trait At<I>: Tuple {
    /// Type of the element at position `I`.
    type Element;

    fn element(&self) -> &Self::Element;

    fn element_mut(&mut self) -> &mut Self::Element;
}

impl<H, T: Tuple> At<Here> for ConsTuple<H, T> {
    type Element = H;

    fn element(&self) -> &H {
        &self.head
    }

    fn element_mut(&mut self) -> &mut H {
        &mut self.head
    }
}

impl<I, H, T: At<I>> At<There<I>> for ConsTuple<H, T> {
    type Element = <T as At<I>>::Element;

    fn element(&self) -> &Self::Element {
        self.tail.element()
    }

    fn element_mut(&mut self) -> &mut Self::Element {
        self.tail.element_mut()
    }
}

impl<H, T> ConsTuple<H, T> {
    /// Reference to the element at position `I`, e.g. `t.at::<I1>()`.
    pub fn at<I>(&self) -> &<Self as At<I>>::Element
    where
        Self: At<I>,
    {
        <Self as At<I>>::element(self)
    }

    /// Mutable reference to the element at position `I`.
    pub fn at_mut<I>(&mut self) -> &mut <Self as At<I>>::Element
    where
        Self: At<I>,
    {
        <Self as At<I>>::element_mut(self)
    }
}

/// A run-time index was not less than the tuple's arity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexError {
    index: usize,
    count: usize,
}

impl IndexError {
    fn new(index: usize, count: usize) -> Self {
        IndexError { index, count }
    }

    /// The rejected index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Arity of the tuple the index was applied to.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for tuple of {} elements",
            self.index, self.count
        )
    }
}

impl std::error::Error for IndexError {}

/// Run-time selected read access: visit the element at `index`.
///
/// The index is checked before any element is touched; on success the
/// visitor runs exactly once, on failure it does not run at all. The
/// visitor must implement [`Visit`] for every element type, since the
/// selected position is only known at run time.
pub trait IndexBy<V: ?Sized>: Tuple {
    #[doc(hidden)]
    fn descend(&self, index: usize, visitor: &mut V);

    fn index_by(&self, index: usize, visitor: &mut V) -> Result<(), IndexError> {
        if index < Self::COUNT {
            self.descend(index, visitor);
            Ok(())
        } else {
            Err(IndexError::new(index, Self::COUNT))
        }
    }
}

/// Run-time selected mutable access, the [`IndexBy`] counterpart of
/// [`VisitMut`].
pub trait IndexByMut<V: ?Sized>: Tuple {
    #[doc(hidden)]
    fn descend_mut(&mut self, index: usize, visitor: &mut V);

    fn index_by_mut(&mut self, index: usize, visitor: &mut V) -> Result<(), IndexError> {
        if index < Self::COUNT {
            self.descend_mut(index, visitor);
            Ok(())
        } else {
            Err(IndexError::new(index, Self::COUNT))
        }
    }
}

impl<V: ?Sized> IndexBy<V> for EmptyTuple {
    fn descend(&self, _index: usize, _visitor: &mut V) {
        unreachable!("descend is only called with a bounds-checked index")
    }
}

impl<V: ?Sized> IndexByMut<V> for EmptyTuple {
    fn descend_mut(&mut self, _index: usize, _visitor: &mut V) {
        unreachable!("descend_mut is only called with a bounds-checked index")
    }
}

impl<H, T, V> IndexBy<V> for ConsTuple<H, T>
where
    V: Visit<H> + ?Sized,
    T: IndexBy<V>,
{
    fn descend(&self, index: usize, visitor: &mut V) {
        if index == 0 {
            visitor.visit(&self.head);
        } else {
            self.tail.descend(index - 1, visitor);
        }
    }
}

impl<H, T, V> IndexByMut<V> for ConsTuple<H, T>
where
    V: VisitMut<H> + ?Sized,
    T: IndexByMut<V>,
{
    fn descend_mut(&mut self, index: usize, visitor: &mut V) {
        if index == 0 {
            visitor.visit_mut(&mut self.head);
        } else {
            self.tail.descend_mut(index - 1, visitor);
        }
    }
}
