//! Lookups and casts over a [`SmartEnum`]'s metadata.
//!
//! The semantic lookups come in three flavours. The plain function is strict
//! and returns an [`Error`] for invalid input, the `_lenient` function never
//! fails and returns a sentinel instead, and the `_with` function takes the
//! [`ConversionPolicy`] as an argument.
//!
//! [`check`], [`enum_to_int_cast`] and [`int_to_enum_cast`] never fail.
use tracing::debug;

use crate::error::{Error, Result};
use crate::policy::{ConversionPolicy, UNKNOWN_INDEX};
use crate::traits::SmartEnum;

fn invalid_value<E: SmartEnum>(value: E) -> Error {
    Error::invalid_value(E::NAME, value.to_repr())
}

/// Display name of `value`.
pub fn to_string<E: SmartEnum>(value: E) -> Result<&'static str> {
    to_string_with(value, ConversionPolicy::Strict)
}

/// Display name of `value`, or [`SmartEnum::UNKNOWN_NAME`] when it is invalid.
pub fn to_string_lenient<E: SmartEnum>(value: E) -> &'static str {
    to_string_with(value, ConversionPolicy::NonStrict).unwrap_or(E::UNKNOWN_NAME)
}

pub fn to_string_with<E: SmartEnum>(value: E, policy: ConversionPolicy) -> Result<&'static str> {
    policy.resolve(
        value.row().map(|row| row.name),
        || invalid_value(value),
        || {
            debug!(
                "{} value {} is not declared, using name '{}'",
                E::NAME,
                value.to_repr(),
                E::UNKNOWN_NAME
            );
            E::UNKNOWN_NAME
        },
    )
}

/// Instance whose display name is exactly `name`.
pub fn to_enum<E: SmartEnum>(name: &str) -> Result<E> {
    to_enum_with(name, ConversionPolicy::Strict)
}

/// Instance whose display name is exactly `name`, or [`SmartEnum::UNKNOWN`].
pub fn to_enum_lenient<E: SmartEnum>(name: &str) -> E {
    to_enum_with(name, ConversionPolicy::NonStrict).unwrap_or(E::UNKNOWN)
}

pub fn to_enum_with<E: SmartEnum>(name: &str, policy: ConversionPolicy) -> Result<E> {
    policy.resolve(
        E::TABLE.find_by_name(name).map(|row| E::from_repr(row.value)),
        || Error::unknown_name(E::NAME, name),
        || {
            debug!("{} has no element named '{}', using {:?}", E::NAME, name, E::UNKNOWN);
            E::UNKNOWN
        },
    )
}

/// Description of `value`.
pub fn get_description<E: SmartEnum>(value: E) -> Result<&'static str> {
    get_description_with(value, ConversionPolicy::Strict)
}

/// Description of `value`, or [`SmartEnum::UNKNOWN_NAME`] when it is invalid.
pub fn get_description_lenient<E: SmartEnum>(value: E) -> &'static str {
    get_description_with(value, ConversionPolicy::NonStrict).unwrap_or(E::UNKNOWN_NAME)
}

pub fn get_description_with<E: SmartEnum>(
    value: E,
    policy: ConversionPolicy,
) -> Result<&'static str> {
    policy.resolve(
        value.row().map(|row| row.description),
        || invalid_value(value),
        || {
            debug!(
                "{} value {} is not declared, using description '{}'",
                E::NAME,
                value.to_repr(),
                E::UNKNOWN_NAME
            );
            E::UNKNOWN_NAME
        },
    )
}

/// Description of the element declared at position `K`.
///
/// `K` past the last element is a build error:
///
/// ```compile_fail
/// use smart_enum::{get_enum_description, smart_enum};
///
/// #[smart_enum]
/// #[repr(u8)]
/// enum Pair {
///     Left = 1,
///     Right = 2,
/// }
///
/// fn main() {
///     let description = get_enum_description::<2, Pair>();
///     println!("{description}");
/// }
/// ```
pub const fn get_enum_description<const K: usize, E: SmartEnum>() -> &'static str {
    const {
        assert!(K < E::TABLE.size(), "ordinal out of range");
    }
    E::TABLE.row_at(K).description
}

/// Number of declared elements.
pub const fn enum_size<E: SmartEnum>() -> usize {
    E::TABLE.size()
}

/// Declaration-order index of `value`.
pub fn index_of<E: SmartEnum>(value: E) -> Result<usize> {
    index_of_with(value, ConversionPolicy::Strict)
}

/// Declaration-order index of `value`, or [`UNKNOWN_INDEX`] when it is invalid.
pub fn index_of_lenient<E: SmartEnum>(value: E) -> usize {
    index_of_with(value, ConversionPolicy::NonStrict).unwrap_or(UNKNOWN_INDEX)
}

pub fn index_of_with<E: SmartEnum>(value: E, policy: ConversionPolicy) -> Result<usize> {
    policy.resolve(
        value.ordinal(),
        || invalid_value(value),
        || {
            debug!("{} value {} is not declared", E::NAME, value.to_repr());
            UNKNOWN_INDEX
        },
    )
}

/// Whether `value` matches a declared element.
pub fn check<E: SmartEnum>(value: E) -> bool {
    value.is_valid()
}

/// The underlying integer of `value`. Invalid instances cast like valid ones.
pub fn enum_to_int_cast<E: SmartEnum>(value: E) -> E::Repr {
    value.to_repr()
}

/// Wraps `value` without checking it against the declared elements.
///
/// This is the only way to obtain an invalid instance. Use [`check`] before
/// handing the result to a strict lookup.
pub fn int_to_enum_cast<E: SmartEnum>(value: E::Repr) -> E {
    E::from_repr(value)
}

/// Every declared instance in declaration order.
pub fn values<E: SmartEnum>() -> impl ExactSizeIterator<Item = E> + Clone {
    E::TABLE.iter().map(|row| E::from_repr(row.value))
}

#[cfg(test)]
mod unittests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;
    use smart_enum_derive::smart_enum;

    use super::*;

    #[smart_enum]
    #[repr(i32)]
    enum Animal {
        #[smart_enum(name = "dog", description = "dog_description")]
        Dog = 1,
        #[smart_enum(name = "cat")]
        Cat = 2,
        Lion = 5,
        #[smart_enum(name = "hOrse")]
        Horse = 10,
    }

    #[smart_enum(unknown = 0, unknown_name = "???")]
    #[repr(u8)]
    enum Signal {
        Red = 1,
        Green,
    }

    #[rstest]
    #[case::dog(Animal::Dog, "dog", "dog_description", 0)]
    #[case::cat(Animal::Cat, "cat", "cat", 1)]
    #[case::lion(Animal::Lion, "Lion", "Lion", 2)]
    #[case::horse(Animal::Horse, "hOrse", "hOrse", 3)]
    fn declared(
        #[case] animal: Animal,
        #[case] name: &str,
        #[case] description: &str,
        #[case] ordinal: usize,
    ) {
        assert_eq!(to_string(animal), Ok(name));
        assert_eq!(to_string_lenient(animal), name);
        assert_eq!(get_description(animal), Ok(description));
        assert_eq!(get_description_lenient(animal), description);
        assert_eq!(index_of(animal), Ok(ordinal));
        assert_eq!(index_of_lenient(animal), ordinal);
        assert_eq!(to_enum::<Animal>(name), Ok(animal));
        assert!(check(animal));
    }

    #[test]
    fn invalid_strict() {
        let invalid = int_to_enum_cast::<Animal>(6666);
        let err = Error::invalid_value("Animal", 6666);
        assert!(!check(invalid));
        assert_eq!(to_string(invalid), Err(err.clone()));
        assert_eq!(get_description(invalid), Err(err.clone()));
        assert_eq!(index_of(invalid), Err(err));
    }

    #[test_log::test]
    fn invalid_lenient() {
        let invalid = int_to_enum_cast::<Animal>(6666);
        assert_eq!(to_string_lenient(invalid), "Unknown");
        assert_eq!(get_description_lenient(invalid), "Unknown");
        assert_eq!(index_of_lenient(invalid), UNKNOWN_INDEX);
    }

    #[test_log::test]
    fn unknown_name() {
        assert_eq!(
            to_enum::<Animal>("wolf"),
            Err(Error::unknown_name("Animal", "wolf"))
        );
        assert_eq!(to_enum_lenient::<Animal>("wolf"), Animal::UNKNOWN);
        assert_eq!(enum_to_int_cast(Animal::UNKNOWN), i32::MAX);
        assert!(!check(to_enum_lenient::<Animal>("wolf")));
    }

    #[test]
    fn configured_sentinels() {
        assert_eq!(to_string_lenient(int_to_enum_cast::<Signal>(9)), "???");
        assert_eq!(to_enum_lenient::<Signal>("Blue"), Signal::UNKNOWN);
        assert_eq!(enum_to_int_cast(to_enum_lenient::<Signal>("Blue")), 0);
        assert_eq!(enum_to_int_cast(Signal::Green), 2);
    }

    #[rstest]
    #[case::strict(ConversionPolicy::Strict, Err(Error::invalid_value("Animal", -4)))]
    #[case::non_strict(ConversionPolicy::NonStrict, Ok("Unknown"))]
    fn policy_selected_at_runtime(
        #[case] policy: ConversionPolicy,
        #[case] expected: Result<&'static str>,
    ) {
        let invalid = int_to_enum_cast::<Animal>(-4);
        assert_eq!(to_string_with(invalid, policy), expected);
        assert_eq!(get_description_with(invalid, policy), expected);
    }

    #[test]
    fn ordinal_descriptions() {
        assert_eq!(get_enum_description::<0, Animal>(), "dog_description");
        assert_eq!(get_enum_description::<1, Animal>(), "cat");
        assert_eq!(get_enum_description::<2, Animal>(), "Lion");
        assert_eq!(get_enum_description::<3, Animal>(), "hOrse");
        const FIRST: &str = get_enum_description::<0, Signal>();
        assert_eq!(FIRST, "Red");
    }

    #[test]
    fn size_counts_elements() {
        const SIZE: usize = enum_size::<Animal>();
        assert_eq!(SIZE, 4);
        assert_eq!(enum_size::<Signal>(), 2);
    }

    #[test]
    fn values_in_declaration_order() {
        let all: Vec<Animal> = values::<Animal>().collect();
        assert_eq!(all, [Animal::Dog, Animal::Cat, Animal::Lion, Animal::Horse]);
        assert_eq!(values::<Signal>().len(), 2);
    }

    proptest! {
        #[test]
        fn proptest_cast_round_trip(value in any::<i32>()) {
            prop_assert_eq!(enum_to_int_cast(int_to_enum_cast::<Animal>(value)), value);
        }
    }

    proptest! {
        #[test]
        fn proptest_check_matches_table(value in any::<i32>()) {
            let animal = int_to_enum_cast::<Animal>(value);
            prop_assert_eq!(check(animal), [1, 2, 5, 10].contains(&value));
            prop_assert_eq!(to_string(animal).is_ok(), check(animal));
        }
    }

    #[test_strategy::proptest]
    fn proptest_name_round_trip(#[strategy(0..4usize)] ordinal: usize) {
        let animal = int_to_enum_cast::<Animal>(Animal::TABLE.row_at(ordinal).value);
        let name = to_string(animal).unwrap();
        prop_assert_eq!(to_enum::<Animal>(name), Ok(animal));
        prop_assert_eq!(index_of(animal), Ok(ordinal));
    }
}
