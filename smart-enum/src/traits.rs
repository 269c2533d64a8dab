use std::fmt;

use crate::table::{MetadataRow, MetadataTable};

/// An integer-backed enumeration carrying a [`MetadataTable`].
///
/// Implemented by `#[smart_enum]`. A value of the type is *valid* when its
/// underlying integer matches a declared element. Nothing in the type system
/// enforces that, since [`from_repr`](SmartEnum::from_repr) accepts any
/// integer, so validity is checked with [`is_valid`](SmartEnum::is_valid)
/// or [`check`](crate::check).
pub trait SmartEnum: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// The underlying integer type.
    type Repr: Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// The enumeration's type name.
    const NAME: &'static str;
    const TABLE: MetadataTable<Self::Repr>;
    /// Returned by the non-strict `to_enum` when no name matches. Never a
    /// declared value.
    const UNKNOWN: Self;
    /// Returned by the non-strict string lookups for invalid instances.
    const UNKNOWN_NAME: &'static str = "Unknown";

    /// Wraps `value` without checking that it is declared.
    fn from_repr(value: Self::Repr) -> Self;
    fn to_repr(self) -> Self::Repr;

    /// Declaration-order index of this value, `None` when it is invalid.
    fn ordinal(self) -> Option<usize> {
        Self::TABLE.ordinal_of(&self.to_repr())
    }

    fn row(self) -> Option<&'static MetadataRow<Self::Repr>> {
        self.ordinal().map(|ordinal| Self::TABLE.row_at(ordinal))
    }

    fn is_valid(self) -> bool {
        self.ordinal().is_some()
    }
}
