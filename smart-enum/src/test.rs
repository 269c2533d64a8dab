//! `proptest` strategies for smart enums.
use ::proptest::prelude::*;

use crate::SmartEnum;

/// Declared instances of `E`, uniformly.
///
/// # Panics
///
/// Panics when `E` declares no elements.
pub fn arb_declared<E: SmartEnum>() -> impl Strategy<Value = E> {
    prop::sample::select(E::TABLE.rows()).prop_map(|row| E::from_repr(row.value))
}

/// Instances of `E` built from any underlying integer, valid or not.
///
/// Declared values are drawn as often as arbitrary ones so that both valid
/// and invalid instances show up in small runs.
pub fn arb_any<E>() -> impl Strategy<Value = E>
where
    E: SmartEnum,
    E::Repr: Arbitrary,
{
    prop_oneof![arb_declared::<E>(), any::<E::Repr>().prop_map(E::from_repr)]
}

/// Display names that no element of `E` uses.
pub fn arb_unknown_name<E: SmartEnum>() -> impl Strategy<Value = String> {
    "[a-zA-Z 0-9_]{0,16}".prop_filter("Declared name", |name| {
        E::TABLE.find_by_name(name).is_none()
    })
}
