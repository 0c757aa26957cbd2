/// Outcome of a single field extractor over the normalized string.
///
/// `offset` is the byte offset of the match start; the title boundary
/// resolver consumes it for the year and season/episode fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extracted<T> {
    /// The field was found at `offset`.
    Found {
        /// Byte offset of the match start in the normalized string.
        offset: usize,
        /// The parsed value.
        value: T,
    },
    /// The field is absent.
    NotFound,
}

impl<T> Default for Extracted<T> {
    fn default() -> Self {
        Self::NotFound
    }
}

impl<T> Extracted<T> {
    /// Returns `true` for [`Extracted::Found`].
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Byte offset of the match start, if found.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Found { offset, .. } => Some(*offset),
            Self::NotFound => None,
        }
    }

    /// Discards the offset.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Found { value, .. } => Some(value),
            Self::NotFound => None,
        }
    }

    /// Transforms the value, keeping the offset.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Extracted<U> {
        match self {
            Self::Found { offset, value } => Extracted::Found {
                offset,
                value: f(value),
            },
            Self::NotFound => Extracted::NotFound,
        }
    }
}
