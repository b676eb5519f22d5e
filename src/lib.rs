//! Fixed-arity heterogeneous tuples with compile-time and run-time indexed
//! access.
//!
//! A tuple is a chain of [`ConsTuple`] cells terminated by [`EmptyTuple`];
//! [`tuple!`] builds one from values and [`Tuple!`] names its type. Elements
//! are reached three ways: [`at`](ConsTuple::at) with a type-level index
//! (checked at build time), [`IndexBy`] with a run-time index (checked at
//! run time), and [`ForEach`] visiting all elements head to tail.
//!
//! ```
//! use contuple::index::{I0, I2};
//! use contuple::{tuple, Tuple};
//!
//! let mut t = tuple!(1i32, 'x', "hello");
//! assert_eq!(t.count(), 3);
//! assert_eq!(*t.at::<I2>(), "hello");
//! *t.at_mut::<I0>() += 1;
//! assert_eq!(*t.at::<I0>(), 2);
//!
//! let longer = t + tuple!(true); // combination
//! let longer = longer & 3.5f64; // append
//! assert_eq!(longer, tuple!(2, 'x', "hello", true, 3.5));
//! ```
//!
//! Iteration and run-time indexing are driven by visitors. A visitor
//! implements [`Visit`] for every element type it may be handed:
//!
//! ```
//! use contuple::{tuple, ForEach, IndexBy, Visit};
//!
//! struct Render(Vec<String>);
//!
//! impl<T: std::fmt::Display> Visit<T> for Render {
//!     fn visit(&mut self, value: &T) {
//!         self.0.push(value.to_string());
//!     }
//! }
//!
//! let t = tuple!(1, 'x', 2.5);
//! let mut render = Render(Vec::new());
//! t.for_each(&mut render);
//! assert_eq!(render.0, ["1", "x", "2.5"]);
//!
//! render.0.clear();
//! t.index_by(1, &mut render).unwrap();
//! assert_eq!(render.0, ["x"]);
//! assert!(t.index_by(3, &mut render).is_err());
//! ```
//!
//! # Shape errors are build errors
//!
//! Converting between tuples of different arity does not compile:
//!
//! ```compile_fail
//! use contuple::{tuple, FromTuple, Tuple};
//!
//! let _: Tuple![i64] = FromTuple::from_tuple(tuple!(1i32, 2i32));
//! ```
//!
//! Neither does a compile-time index past the end:
//!
//! ```compile_fail
//! use contuple::index::I2;
//! use contuple::tuple;
//!
//! let t = tuple!(1, 2);
//! t.at::<I2>();
//! ```
//!
//! Nor the combine and append operators with a non-tuple left operand:
//!
//! ```compile_fail
//! let _ = 1i32 + contuple::tuple!(2);
//! ```
//!
//! ```compile_fail
//! let _ = 1i32 & contuple::tuple!(2);
//! ```

pub mod convert;
pub mod index;
pub mod native;
#[doc(hidden)]
pub mod ops;
pub mod tuple;
pub mod visit;

pub use crate::convert::{AssignFrom, Fallibility, FromTuple, TryAssignFrom, TryFromTuple};
pub use crate::index::{At, Here, IndexBy, IndexByMut, IndexError, Nat, There};
pub use crate::native::IntoNative;
pub use crate::tuple::{ConsTuple, EmptyTuple, Nothing, Tuple};
pub use crate::visit::{FnVisitor, ForEach, ForEachMut, Visit, VisitMut};

/// Builds a tuple from a sequence of values, in order.
///
/// The element types are the value types of the arguments; each argument is
/// moved (or copied) into its slot. `tuple!()` is the empty tuple.
///
/// ```
/// use contuple::{tuple, Tuple};
///
/// let t = tuple!(true, 'A', 123);
/// assert_eq!(t.count(), 3);
/// assert_eq!(tuple!().count(), 0);
/// ```
#[macro_export]
macro_rules! tuple {
    () => { $crate::EmptyTuple };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::ConsTuple {
            head: $head,
            tail: $crate::tuple!($($tail),*),
        }
    };
}

/// Names the type of a tuple from its element types, in order.
///
/// ```
/// use contuple::{tuple, Tuple};
///
/// let t: Tuple![i32, char] = tuple!(5, 'x');
/// let _: Tuple![] = tuple!();
/// # let _ = t;
/// ```
#[macro_export]
macro_rules! Tuple {
    () => { $crate::EmptyTuple };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::ConsTuple<$head, $crate::Tuple!($($tail),*)>
    };
}

/// Concatenates tuples and plain values into one flat tuple.
///
/// Each argument that is a tuple is spliced in place; any other value is
/// wrapped as a single element. The results are folded left to right with
/// `+`. `tuple_concat!()` is the empty tuple.
///
/// ```
/// use contuple::{tuple, tuple_concat, EmptyTuple};
///
/// let t = tuple_concat!(EmptyTuple, tuple!(1), 'x', tuple!(2.5, "s"));
/// assert_eq!(t, tuple!(1, 'x', 2.5, "s"));
/// assert_eq!(tuple_concat!(), EmptyTuple);
/// ```
#[macro_export]
macro_rules! tuple_concat {
    () => { $crate::EmptyTuple };
    ($($arg:expr),+ $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::ops::{TupleArgKind as _, ValueArgKind as _};
        $crate::EmptyTuple
            $(+ {
                match $arg {
                    arg => (&arg).concat_kind().lift(arg),
                }
            })+
    }};
}
