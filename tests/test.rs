use std::fmt::{Debug, Display};

use contuple::index::{I0, I1, I2, I4, I5};
use contuple::{
    tuple, tuple_concat, AssignFrom, ConsTuple, EmptyTuple, Fallibility, FnVisitor, ForEach,
    ForEachMut, FromTuple, IndexBy, IndexByMut, IntoNative, Nat, TryAssignFrom, TryFromTuple,
    Tuple, Visit, VisitMut,
};

struct Render(Vec<String>);

impl<T: Display> Visit<T> for Render {
    fn visit(&mut self, value: &T) {
        self.0.push(value.to_string());
    }
}

struct Debugs(Vec<String>);

impl<T: Debug> Visit<T> for Debugs {
    fn visit(&mut self, value: &T) {
        self.0.push(format!("{value:?}"));
    }
}

struct Upper;

impl VisitMut<i32> for Upper {
    fn visit_mut(&mut self, value: &mut i32) {
        *value += 1;
    }
}

impl VisitMut<char> for Upper {
    fn visit_mut(&mut self, value: &mut char) {
        *value = value.to_ascii_uppercase();
    }
}

struct Flaky;

impl Fallibility for Flaky {
    const CAN_FAIL: bool = true;
}

const _: () = assert!(<Tuple![] as Tuple>::COUNT == 0);
const _: () = assert!(<Tuple![i32] as Tuple>::COUNT == 1);
const _: () = assert!(<Tuple![bool, char, i32, f64, &'static str, ()] as Tuple>::COUNT == 6);

const _: () = assert!(!<Tuple![] as Fallibility>::CAN_FAIL);
const _: () = assert!(!<Tuple![i32, bool, String] as Fallibility>::CAN_FAIL);
const _: () = assert!(<Tuple![i32, Flaky, bool] as Fallibility>::CAN_FAIL);
const _: () = assert!(<Tuple![Option<Flaky>] as Fallibility>::CAN_FAIL);

#[test]
fn arity_matches_value_count() {
    assert_eq!(tuple!().count(), 0);
    assert_eq!(tuple!(1).count(), 1);
    assert_eq!(tuple!(1, 'a').count(), 2);
    assert_eq!(tuple!(1, 'a', "s", 2.5).count(), 4);
}

#[test]
fn elements_come_back_unchanged() {
    let t = tuple!(7i32, 'q', "str");
    assert_eq!(*t.at::<I0>(), 7);
    assert_eq!(*t.at::<I1>(), 'q');
    assert_eq!(*t.at::<I2>(), "str");
}

#[test]
fn cons_cells_nest_explicitly() {
    let t = ConsTuple::new(1, ConsTuple::new('a', EmptyTuple));
    assert_eq!(t, tuple!(1, 'a'));
}

#[test]
fn default_fills_every_slot() {
    let t: Tuple![i32, bool, String] = Default::default();
    assert_eq!(t, tuple!(0, false, String::new()));
}

#[test]
fn debug_prints_flat() {
    assert_eq!(format!("{:?}", tuple!(1, 'a')), "(1, 'a')");
    assert_eq!(format!("{:?}", tuple!()), "()");
}

#[test]
fn index_aliases_carry_their_numeric_value() {
    assert_eq!(<I0 as Nat>::VALUE, 0);
    assert_eq!(<I5 as Nat>::VALUE, 5);
}

#[test]
fn at_and_at_mut_share_storage() {
    let mut t = tuple!(1i32, 2i64);
    *t.at_mut::<I0>() = -1;
    assert_eq!(*t.at::<I0>(), -1);
    assert!(std::ptr::eq(t.at::<I1>(), &t.tail.head));
}

#[test]
fn index_by_agrees_with_at() {
    let t = tuple!(true, 'A', 123i32);
    for index in 0..3 {
        let mut seen = Debugs(Vec::new());
        t.index_by(index, &mut seen).unwrap();
        let expected = match index {
            0 => format!("{:?}", t.at::<I0>()),
            1 => format!("{:?}", t.at::<I1>()),
            _ => format!("{:?}", t.at::<I2>()),
        };
        assert_eq!(seen.0, [expected]);
    }
}

#[test]
fn index_by_rejects_out_of_range() {
    let t = tuple!(1, 2, 3);
    let mut seen = Debugs(Vec::new());
    let err = t.index_by(3, &mut seen).unwrap_err();
    assert_eq!(err.index(), 3);
    assert_eq!(err.count(), 3);
    assert!(seen.0.is_empty());
    assert_eq!(
        err.to_string(),
        "index 3 out of range for tuple of 3 elements"
    );
}

#[test]
fn empty_tuple_has_no_valid_index() {
    let mut seen = Debugs(Vec::new());
    assert!(EmptyTuple.index_by(0, &mut seen).is_err());
    assert!(seen.0.is_empty());
}

#[test]
fn for_each_runs_head_to_tail() {
    let t = tuple!(1, 'x', 2.5);
    let mut render = Render(Vec::new());
    t.for_each(&mut render);
    assert_eq!(render.0, ["1", "x", "2.5"]);
}

#[test]
fn for_each_on_empty_is_a_no_op() {
    let mut render = Render(Vec::new());
    EmptyTuple.for_each(&mut render);
    EmptyTuple.for_each_mut(&mut FnVisitor(|_: &mut i32| unreachable!()));
    assert!(render.0.is_empty());
}

#[test]
fn for_each_mut_updates_in_place() {
    let mut t = tuple!(1i32, 2i32, 3i32);
    t.for_each_mut(&mut FnVisitor(|value: &mut i32| *value *= 10));
    assert_eq!(t, tuple!(10, 20, 30));

    let mut u = tuple!(1i32, 'a');
    u.for_each_mut(&mut Upper);
    assert_eq!(u, tuple!(2, 'A'));
}

#[test]
fn combination_preserves_order() {
    let t = tuple!(1, 'b', 2.5) + tuple!("d", false);
    assert_eq!(t.count(), 5);
    assert_eq!(t, tuple!(1, 'b', 2.5, "d", false));
    assert_eq!(EmptyTuple + tuple!(9), tuple!(9));
    assert_eq!(tuple!(9) + EmptyTuple, tuple!(9));
}

#[test]
fn append_adds_one_trailing_element() {
    assert_eq!(tuple!(1, 'a') & true, tuple!(1, 'a', true));
    assert_eq!(EmptyTuple & 5, tuple!(5));
}

#[test]
fn append_keeps_a_tuple_value_as_one_element() {
    let inner = tuple!(1, 2);
    let t = tuple!('a') & inner;
    assert_eq!(t.count(), 2);
    assert_eq!(*t.at::<I1>(), tuple!(1, 2));
}

#[test]
fn concat_splices_tuples_and_wraps_values() {
    let t = tuple_concat!(EmptyTuple, tuple!(1), tuple!('y', 2.5));
    assert_eq!(t, tuple!(1, 'y', 2.5));
    assert_eq!(tuple_concat!(1, tuple!(2), 3), tuple!(1, 2, 3));
    assert_eq!(tuple_concat!(), EmptyTuple);
    assert_eq!(tuple_concat!(tuple!()), EmptyTuple);
}

#[test]
fn conversion_construction_widens() {
    let narrow = tuple!(1i32, 2u8);
    let wide: Tuple![i64, u32] = FromTuple::from_tuple(narrow);
    assert_eq!(wide, tuple!(1i64, 2u32));
}

#[test]
fn conversion_assignment_overwrites_in_place() {
    let mut wide: Tuple![i64, f64] = tuple!(0i64, 0.0f64);
    wide.assign_from(tuple!(5i32, 1.5f32));
    assert_eq!(wide, tuple!(5i64, 1.5f64));
}

#[test]
fn fallible_conversion_propagates_element_errors() {
    use std::num::TryFromIntError;

    let ok: Result<Tuple![u8, u16], TryFromIntError> =
        TryFromTuple::try_from_tuple(tuple!(200i32, 7000i64));
    assert_eq!(ok.unwrap(), tuple!(200u8, 7000u16));

    let err: Result<Tuple![u8, u16], TryFromIntError> =
        TryFromTuple::try_from_tuple(tuple!(300i32, 7000i64));
    assert!(err.is_err());
}

#[test]
fn fallible_assignment_stops_at_the_failing_element() {
    let mut t: Tuple![u8, u8] = tuple!(0u8, 0u8);
    let result: Result<(), std::num::TryFromIntError> = t.try_assign_from(tuple!(7i32, 300i32));
    assert!(result.is_err());
    assert_eq!(*t.at::<I0>(), 7);
    assert_eq!(*t.at::<I1>(), 0);
}

#[test]
fn fallibility_is_an_or_over_elements() {
    assert!(!<Tuple![i32, f64] as Fallibility>::CAN_FAIL);
    assert!(<Tuple![Flaky] as Fallibility>::CAN_FAIL);
    assert!(<Tuple![i32, Flaky] as Fallibility>::CAN_FAIL);
}

#[test]
fn native_tuples_convert_both_ways() {
    let t: Tuple![i32, char, bool] = (5, 'x', true).into();
    assert_eq!(t, tuple!(5, 'x', true));
    assert_eq!(t.into_native(), (5, 'x', true));
    let e: Tuple![] = ().into();
    assert_eq!(e.into_native(), ());
}

#[test]
fn mutations_are_visible_through_every_access_path() {
    let mut t = tuple!(1i32, 'a');
    *t.at_mut::<I0>() = 5;
    let mut seen = Debugs(Vec::new());
    t.index_by(0, &mut seen).unwrap();
    assert_eq!(seen.0, ["5"]);

    t.index_by_mut(1, &mut Upper).unwrap();
    assert_eq!(*t.at::<I1>(), 'A');

    t.for_each_mut(&mut Upper);
    assert_eq!(t, tuple!(6, 'A'));
}

#[test]
fn the_kitchen_sink_tuple() {
    let t = tuple!(true, 'A', 123i32, 3.14f64, "ABC", ());
    assert_eq!(t.count(), 6);
    assert_eq!(*t.at::<I2>(), 123);
    assert_eq!(*t.at::<I4>(), "ABC");
    assert_eq!(*t.at::<I5>(), ());
    let mut seen = Debugs(Vec::new());
    let err = t.index_by(6, &mut seen).unwrap_err();
    assert_eq!(err.index(), 6);
    assert_eq!(err.count(), 6);
    assert!(seen.0.is_empty());
}

mod properties {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn runtime_index_agrees_with_const_index(
            a in any::<i32>(),
            b in any::<i64>(),
            c in any::<bool>(),
            index in 0usize..8,
        ) {
            let t = tuple!(a, b, c);
            let mut seen = Debugs(Vec::new());
            let result = t.index_by(index, &mut seen);
            if index < 3 {
                prop_assert!(result.is_ok());
                let expected = match index {
                    0 => format!("{:?}", t.at::<I0>()),
                    1 => format!("{:?}", t.at::<I1>()),
                    _ => format!("{:?}", t.at::<I2>()),
                };
                prop_assert_eq!(&seen.0, &[expected]);
            } else {
                prop_assert!(result.is_err());
                prop_assert!(seen.0.is_empty());
            }
        }

        #[test]
        fn combination_keeps_values_in_order(
            a in any::<i32>(), b in any::<i32>(), c in any::<i32>(),
            d in any::<i32>(), e in any::<i32>(),
        ) {
            let t = tuple!(a, b, c) + tuple!(d, e);
            prop_assert_eq!(t.into_native(), (a, b, c, d, e));
        }
    }
}
