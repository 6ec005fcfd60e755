use self::Optional::{Absent, Present};

/// A tagged value which is either [`Present`] and carries a `T`, or
/// [`Absent`].
///
/// This is what every container in this crate hands back when an operation
/// may or may not yield a value, such as popping from an empty [`Stack`].
///
/// The payload can only be reached through the [`Present`] variant, so
/// pattern matching is the preferred way to inspect it:
///
/// ```
/// use tagged_containers::Optional;
///
/// let value = Optional::present(42);
///
/// match value {
///     Optional::Present(n) => assert_eq!(n, 42),
///     Optional::Absent => unreachable!(),
/// }
/// ```
///
/// [`Stack`]: crate::Stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "an `Optional` may be `Absent`, which should be handled"]
pub enum Optional<T> {
    /// No value.
    Absent,
    /// A value of type `T`.
    Present(T),
}

impl<T> Optional<T> {
    /// Construct an optional holding `value`.
    #[inline]
    pub const fn present(value: T) -> Self {
        Present(value)
    }

    /// Construct an optional holding nothing.
    #[inline]
    pub const fn absent() -> Self {
        Absent
    }

    /// Test if the optional holds a value.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Present(..))
    }

    /// Test if the optional holds nothing.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Absent)
    }

    /// Test if the optional holds a value which matches `predicate`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_containers::Optional;
    ///
    /// assert!(Optional::present(11).present_and(|n| *n > 10));
    /// assert!(!Optional::present(9).present_and(|n| *n > 10));
    /// assert!(!Optional::<u32>::absent().present_and(|n| *n > 10));
    /// ```
    #[inline]
    pub fn present_and(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Present(value) => predicate(value),
            Absent => false,
        }
    }

    /// Borrow the payload.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    /// Mutably borrow the payload.
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    /// Access the payload as a standard [`Option`].
    #[inline]
    pub const fn get(&self) -> Option<&T> {
        match self {
            Present(value) => Some(value),
            Absent => None,
        }
    }

    /// Take the payload out of the optional.
    ///
    /// # Panics
    ///
    /// Panics if the optional is [`Absent`]. Use pattern matching or one of
    /// the total accessors such as [`value_or`] when absence is expected.
    ///
    /// [`value_or`]: Self::value_or
    #[inline]
    #[track_caller]
    pub fn value(self) -> T {
        match self {
            Present(value) => value,
            Absent => panic!("called `Optional::value()` on an `Absent` value"),
        }
    }

    /// Take the payload out of the optional, or use `default` if it is
    /// absent.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Present(value) => value,
            Absent => default,
        }
    }

    /// Take the payload out of the optional, or compute one with `f` if it is
    /// absent.
    #[inline]
    pub fn value_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            Present(value) => value,
            Absent => f(),
        }
    }

    /// Map the payload, keeping absence as-is.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        match self {
            Present(value) => Present(f(value)),
            Absent => Absent,
        }
    }

    /// Chain another computation which may itself produce nothing.
    #[inline]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        match self {
            Present(value) => f(value),
            Absent => Absent,
        }
    }

    /// Run `f` with the payload if one is present.
    #[inline]
    pub fn if_present(self, f: impl FnOnce(T)) {
        if let Present(value) = self {
            f(value);
        }
    }

    /// Run `f` if the optional is absent.
    #[inline]
    pub fn if_absent(&self, f: impl FnOnce()) {
        if let Absent = self {
            f();
        }
    }

    /// Convert into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Present(value) => Some(value),
            Absent => None,
        }
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Present(value),
            None => Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}
