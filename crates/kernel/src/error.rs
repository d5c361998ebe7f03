use crate::degradation::Column;

/// Represents all possible errors that can occur in this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A numeric input is malformed or out of its allowed range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The dataset has no rows to work on.
    #[error("Input contains no observations")]
    EmptyInput,

    /// A dataset column was requested but is absent.
    ///
    /// # See Also
    ///
    /// [`Dataset::resolve`](crate::degradation::Dataset::resolve) recovers
    /// from this by synthesising the column.
    #[error("Dataset has no `{0}` column")]
    MissingColumn(Column),
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}
