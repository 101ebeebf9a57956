use std::fmt;

/// A `Result` type alias for this crate's `Error` type.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that encapsulates all possible errors in this crate.
///
/// Given well formed inputs, joining never fails. Both variants describe a
/// caller mistake.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The number of extraction rules given does not match the number of
    /// sources given.
    ///
    /// This can only happen when rules are supplied separately from their
    /// sources, as with [`Join::from_parts`](crate::Join::from_parts).
    RuleCount {
        /// The number of sources given.
        sources: usize,
        /// The number of extraction rules given.
        rules: usize,
    },
    /// An attempt was made to read from a cursor positioned past the last
    /// lane.
    PastEnd,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::RuleCount { sources, rules } => write!(
                f,
                "expected one extraction rule per source, \
                 but got {} sources and {} rules",
                sources, rules,
            ),
            Error::PastEnd => write!(
                f,
                "attempted to read past the end of the joined sequence"
            ),
        }
    }
}

impl std::error::Error for Error {}
