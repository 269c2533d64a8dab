/// Ordinal returned by the non-strict `index_of` for invalid instances.
pub const UNKNOWN_INDEX: usize = usize::MAX;

/// Selects what a semantic lookup does with an invalid instance or an
/// unmatched name.
///
/// [`Strict`](ConversionPolicy::Strict) is the default and makes the lookup
/// return an [`Error`](crate::Error).
/// [`NonStrict`](ConversionPolicy::NonStrict) substitutes a sentinel instead:
/// [`SmartEnum::UNKNOWN_NAME`](crate::SmartEnum::UNKNOWN_NAME) for strings,
/// [`SmartEnum::UNKNOWN`](crate::SmartEnum::UNKNOWN) for `to_enum` and
/// [`UNKNOWN_INDEX`] for `index_of`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConversionPolicy {
    #[default]
    Strict,
    NonStrict,
}

impl ConversionPolicy {
    #[inline]
    pub const fn is_strict(self) -> bool {
        matches!(self, ConversionPolicy::Strict)
    }

    /// Resolves the outcome of a lookup under this policy.
    ///
    /// A missing `found` becomes the error produced by `err` when strict and
    /// the value produced by `sentinel` otherwise.
    pub fn resolve<T, E, S>(self, found: Option<T>, err: E, sentinel: S) -> crate::Result<T>
    where
        E: FnOnce() -> crate::Error,
        S: FnOnce() -> T,
    {
        match (found, self) {
            (Some(value), _) => Ok(value),
            (None, ConversionPolicy::Strict) => Err(err()),
            (None, ConversionPolicy::NonStrict) => Ok(sentinel()),
        }
    }
}
