//! Visitor traits for element iteration and run-time indexed access.
//!
//! A visitor implements [`Visit<T>`] (and/or [`VisitMut<T>`]) for every
//! element type it can be handed. Uniform tuples can use a plain closure
//! through [`FnVisitor`]; heterogeneous tuples need a visitor type with a
//! generic impl, for example over `T: Display`.

use crate::tuple::{ConsTuple, EmptyTuple, Tuple};

/// Read-only visitation of one element.
pub trait Visit<T: ?Sized> {
    fn visit(&mut self, value: &T);
}

/// Mutable visitation of one element.
pub trait VisitMut<T: ?Sized> {
    fn visit_mut(&mut self, value: &mut T);
}

/// Adapts a closure into a visitor.
///
/// A wrapper type rather than a blanket impl over `FnMut`, so that user
/// visitor types remain free to implement [`Visit`] themselves.
pub struct FnVisitor<F>(pub F);

impl<T: ?Sized, F: FnMut(&T)> Visit<T> for FnVisitor<F> {
    fn visit(&mut self, value: &T) {
        (self.0)(value)
    }
}

impl<T: ?Sized, F: FnMut(&mut T)> VisitMut<T> for FnVisitor<F> {
    fn visit_mut(&mut self, value: &mut T) {
        (self.0)(value)
    }
}

/// Visits every element in order, index 0 first.
pub trait ForEach<V: ?Sized>: Tuple {
    fn for_each(&self, visitor: &mut V);
}

/// Mutable counterpart of [`ForEach`], same traversal order.
pub trait ForEachMut<V: ?Sized>: Tuple {
    fn for_each_mut(&mut self, visitor: &mut V);
}

impl<V: ?Sized> ForEach<V> for EmptyTuple {
    fn for_each(&self, _visitor: &mut V) {}
}

impl<V: ?Sized> ForEachMut<V> for EmptyTuple {
    fn for_each_mut(&mut self, _visitor: &mut V) {}
}

impl<H, T, V> ForEach<V> for ConsTuple<H, T>
where
    V: Visit<H> + ?Sized,
    T: ForEach<V>,
{
    fn for_each(&self, visitor: &mut V) {
        visitor.visit(&self.head);
        self.tail.for_each(visitor);
    }
}

impl<H, T, V> ForEachMut<V> for ConsTuple<H, T>
where
    V: VisitMut<H> + ?Sized,
    T: ForEachMut<V>,
{
    fn for_each_mut(&mut self, visitor: &mut V) {
        visitor.visit_mut(&mut self.head);
        self.tail.for_each_mut(visitor);
    }
}
