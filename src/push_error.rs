use std::error;
use std::fmt;

use crate::Error;

/// An error returned when a value could not be pushed onto a container.
///
/// The container is left exactly as it was before the push, and the rejected
/// value is handed back through [`PushError::into_value`].
pub struct PushError<T> {
    value: T,
    error: Error,
}

impl<T> PushError<T> {
    #[inline]
    pub(crate) fn new(value: T, error: Error) -> Self {
        Self { value, error }
    }

    /// The reason the push failed.
    #[inline]
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Recover the value which could not be pushed.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Split into the rejected value and the reason the push failed.
    #[inline]
    pub fn into_parts(self) -> (T, Error) {
        (self.value, self.error)
    }
}

impl<T> fmt::Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for PushError<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to push value")
    }
}

impl<T> error::Error for PushError<T> {
    #[inline]
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.error)
    }
}
