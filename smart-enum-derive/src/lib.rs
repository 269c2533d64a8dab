//! # Using `#[smart_enum]`
//!
//! 1. [Overview](#overview)
//! 2. [Generated items](#generated-items)
//! 3. [Attributes](#attributes)
//!     1. [Container attributes](#container-attributes)
//!         1. [`#[repr(..)]`](#repr)
//!         2. [`#[smart_enum(unknown = expr)]`](#smart_enumunknown--expr)
//!         3. [`#[smart_enum(unknown_name = "text")]`](#smart_enumunknown_name--text)
//!         4. [`#[smart_enum(crate = "...")]`](#smart_enumcrate--)
//!     2. [Variant attributes](#variant-attributes)
//!         1. [`#[smart_enum(name = "text")]`](#smart_enumname--text)
//!         2. [`#[smart_enum(description = "text")]`](#smart_enumdescription--text)
//!
//! ## Overview
//!
//! This crate contains the attribute macro that turns a C-like enum
//! declaration into a `smart_enum::SmartEnum`: an integer-backed open
//! enumeration plus a constant table with a display name and a description
//! for every element.
//!
//! ### Examples
//!
//! ```rust
//! # use smart_enum::smart_enum;
//! #
//! #[smart_enum]
//! enum Unit {
//!     Meter = 1,
//!     Second = 2,
//! }
//! ```
//!
//! ```rust
//! # use smart_enum::smart_enum;
//! #
//! #[smart_enum]
//! #[repr(u8)]
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
//! const CAT: Option<Animal> = Animal::from_name("cat");
//! assert_eq!(CAT, Some(Animal::Cat));
//! assert_eq!(Animal::Lion.description(), Some("Lion"));
//! ```
//!
//! Elements without a value take the previous element's value plus one, the
//! first one starts at 0:
//!
//! ```rust
//! # use smart_enum::smart_enum;
//! #
//! #[smart_enum]
//! enum Level {
//!     Low,
//!     Mid,
//!     High = 10,
//!     Max,
//! }
//! assert_eq!(Level::Mid.to_repr(), 1);
//! assert_eq!(Level::Max.to_repr(), 11);
//! ```
//!
//! ## Generated items
//!
//! For `enum Animal` with `#[repr(u8)]` the macro emits
//!
//! - `struct Animal(u8)`, `#[repr(transparent)]` and deriving `Clone`, `Copy`,
//!   `PartialEq`, `Eq`, `PartialOrd`, `Ord` and `Hash`. Other attributes on
//!   the enum are moved onto it, so do not derive those traits or `Debug`
//!   yourself.
//! - `pub const Dog: Animal` and friends, one per element, keeping the
//!   element's attributes.
//! - `Animal::TABLE`, `Animal::UNKNOWN` and the `const fn`s
//!   `from_repr_unchecked`, `to_repr`, `ordinal`, `is_valid`, `name`,
//!   `description` and `from_name`. These names are reserved and cannot be
//!   used for elements.
//! - implementations of `SmartEnum`, `Debug`, `Display`, `FromStr`,
//!   `TryFrom<u8>` and `From<Animal> for u8`.
//!
//! ## Attributes
//!
//! Arguments given to the macro itself and any further `#[smart_enum(...)]`
//! attributes on the enum are container attributes.
//!
//! ```rust
//! # use smart_enum::smart_enum;
//! #
//! #[smart_enum(unknown = 0)] // <-- This is a container attribute
//! #[smart_enum(unknown_name = "n/a")] // <-- This is also a container attribute
//! #[repr(u16)]
//! enum Port {
//!     #[smart_enum(name = "http")] // <-- This is a variant attribute
//!     Http = 80,
//! }
//! ```
//!
//! ### Container attributes
//!
//! ##### `#[repr(..)]`
//!
//! The underlying integer type. Any primitive integer type is accepted and
//! `i32` is used when there is no `repr`.
//!
//! ##### `#[smart_enum(unknown = expr)]`
//!
//! The value of `UNKNOWN`, which lenient `to_enum` returns when no element
//! matches. Defaults to the maximum of the underlying integer type. It must
//! not be a declared value, otherwise the build fails.
//!
//! ###### Example
//!
//! ```rust
//! # use smart_enum::smart_enum;
//! #
//! #[smart_enum(unknown = -1)]
//! #[repr(i8)]
//! enum Sign {
//!     Negative = 0,
//!     Positive = 1,
//! }
//! assert_eq!(smart_enum::to_enum_lenient::<Sign>("zero"), Sign::UNKNOWN);
//! assert_eq!(Sign::UNKNOWN.to_repr(), -1);
//! ```
//!
//! ##### `#[smart_enum(unknown_name = "text")]`
//!
//! The text the lenient string lookups return for undeclared values instead
//! of `"Unknown"`.
//!
//! ###### Example
//!
//! ```rust
//! # use smart_enum::smart_enum;
//! #
//! #[smart_enum(unknown_name = "?")]
//! enum Sign {
//!     Negative = 0,
//!     Positive = 1,
//! }
//! let invalid = smart_enum::int_to_enum_cast::<Sign>(7);
//! assert_eq!(smart_enum::to_string_lenient(invalid), "?");
//! assert_eq!(invalid.to_string(), "?");
//! ```
//!
//! ##### `#[smart_enum(crate = "...")]`
//!
//! Specify the path to the `smart_enum` crate instance to use when referring
//! to its API in the generated code. This is usually not needed.
//!
//! ### Variant attributes
//!
//! ##### `#[smart_enum(name = "text")]`
//!
//! The display name used by `to_string` and matched by `to_enum`. Defaults to
//! the element's symbol, without any `r#` prefix. Display names must be
//! unique within an enum.
//!
//! ##### `#[smart_enum(description = "text")]`
//!
//! Free text returned by `get_description`. Defaults to the display name.
//!
//! ###### Example
//!
//! ```rust
//! # use smart_enum::smart_enum;
//! #
//! #[smart_enum]
//! enum Color {
//!     #[smart_enum(name = "red", description = "The color of blood")]
//!     Red = 1,
//!     #[smart_enum(description = "The color of grass")]
//!     Green = 2,
//! }
//! assert_eq!(smart_enum::get_description(Color::Red).unwrap(), "The color of blood");
//! assert_eq!(smart_enum::to_string(Color::Green).unwrap(), "Green");
//! ```

use proc_macro::TokenStream;
use syn::{parse_quote, Attribute, DeriveInput};

mod expand;
mod internal;

#[proc_macro_attribute]
pub fn smart_enum(args: TokenStream, item: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(item as DeriveInput);
    let args = proc_macro2::TokenStream::from(args);
    if !args.is_empty() {
        let attr: Attribute = parse_quote!(#[smart_enum(#args)]);
        input.attrs.insert(0, attr);
    }
    let crate_path: syn::Path = parse_quote!(smart_enum);
    expand::expand_smart_enum(crate_path, &input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
