use std::error;
use std::fmt;

/// Result alias using an [`Error`] as the error type by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    #[inline]
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Self { kind }
    }

    /// Test if the error indicates that the allocator refused to provide
    /// memory.
    #[inline]
    pub fn is_alloc_failed(&self) -> bool {
        matches!(self.kind, ErrorKind::AllocFailed { .. })
    }

    /// Test if the error indicates that the requested capacity could not be
    /// represented.
    #[inline]
    pub fn is_capacity_overflow(&self) -> bool {
        matches!(self.kind, ErrorKind::CapacityOverflow)
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            ErrorKind::AllocFailed { size, align } => {
                write!(
                    f,
                    "Memory allocation of {size} bytes (align {align}) failed"
                )
            }
            ErrorKind::CapacityOverflow => write!(f, "Capacity overflow"),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ErrorKind {
    AllocFailed { size: usize, align: usize },
    CapacityOverflow,
}
