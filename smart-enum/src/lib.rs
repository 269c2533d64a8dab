// SPDX-FileCopyrightText: 2024 griff
//
// SPDX-License-Identifier: EUPL-1.2 or MIT
//#![deny(unused_crate_dependencies)]

//! Integer-backed enumerations that know their own names.
//!
//! `#[smart_enum]` turns an ordinary C-like enum declaration into an open
//! enumeration type plus a constant [`MetadataTable`] of
//! `(ordinal, symbol, value, name, description)` rows. The free functions in
//! this crate then look things up in that table: display names in both
//! directions, descriptions, declaration-order indices and validity.
//!
//! ```rust
//! use smart_enum::{smart_enum, ConversionPolicy};
//!
//! #[smart_enum]
//! #[repr(i32)]
//! pub enum Animal {
//!     #[smart_enum(name = "dog", description = "dog_description")]
//!     Dog = 1,
//!     #[smart_enum(name = "cat")]
//!     Cat = 2,
//!     Lion = 5,
//!     #[smart_enum(name = "hOrse")]
//!     Horse = 10,
//! }
//!
//! assert_eq!(smart_enum::enum_size::<Animal>(), 4);
//! assert_eq!(smart_enum::to_string(Animal::Horse).unwrap(), "hOrse");
//! assert_eq!(smart_enum::to_enum::<Animal>("dog").unwrap(), Animal::Dog);
//! assert_eq!(smart_enum::get_description(Animal::Lion).unwrap(), "Lion");
//! assert_eq!(smart_enum::index_of(Animal::Lion).unwrap(), 2);
//!
//! let invalid = smart_enum::int_to_enum_cast::<Animal>(6666);
//! assert!(!smart_enum::check(invalid));
//! assert!(smart_enum::to_string(invalid).is_err());
//! assert_eq!(smart_enum::to_string_lenient(invalid), "Unknown");
//! assert_eq!(
//!     smart_enum::to_string_with(invalid, ConversionPolicy::NonStrict).unwrap(),
//!     "Unknown"
//! );
//! ```
//!
//! ## Open enumerations
//!
//! The generated type is a `#[repr(transparent)]` newtype over its integer
//! with one associated constant per element, so `Animal::Dog` reads like an
//! enum variant but `int_to_enum_cast::<Animal>(6666)` is a perfectly defined
//! value. The semantic lookups validate, the casts do not.
//!
//! ## Build-time checks
//!
//! Two elements sharing a value do not build:
//!
//! ```compile_fail
//! use smart_enum::smart_enum;
//!
//! #[smart_enum]
//! #[repr(u8)]
//! enum Twice {
//!     First = 1,
//!     Second = 1,
//! }
//! ```
//!
//! Neither does an unknown instance that is also a declared value:
//!
//! ```compile_fail
//! use smart_enum::smart_enum;
//!
//! #[smart_enum]
//! #[repr(u8)]
//! enum Full {
//!     Low = 0,
//!     High = 255,
//! }
//! ```
//!
//! Duplicate symbols and duplicate display names are rejected by the macro
//! itself. Asking [`get_enum_description`] for an ordinal past the last
//! element is a build error as well.
//!
//! ## Features
//!
//! - `derive` (default) re-exports the `#[smart_enum]` attribute macro.
//! - `test` adds `proptest` strategies in [`test`](crate::test).

extern crate self as smart_enum;

mod error;
pub mod lookup;
pub mod policy;
pub mod table;
#[cfg(any(test, feature = "test"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test")))]
pub mod test;
mod traits;

pub use error::{Error, Result};
pub use lookup::{
    check, enum_size, enum_to_int_cast, get_description, get_description_lenient,
    get_description_with, get_enum_description, index_of, index_of_lenient, index_of_with,
    int_to_enum_cast, to_enum, to_enum_lenient, to_enum_with, to_string, to_string_lenient,
    to_string_with, values,
};
pub use policy::{ConversionPolicy, UNKNOWN_INDEX};
pub use table::{MetadataRow, MetadataTable};
pub use traits::SmartEnum;

#[cfg(feature = "derive")]
#[cfg_attr(docsrs, doc(cfg(feature = "derive")))]
pub use smart_enum_derive::smart_enum;
