use crate::Optional;

/// Types which support addition that reports overflow as an absent value
/// instead of wrapping or panicking.
///
/// This is implemented for the signed primitive integers. Other numeric types
/// can opt in by implementing it, after which [`checked_add`] accepts them.
pub trait CheckedAdd: Sized {
    /// Add `rhs` to `self`, producing [`Optional::Absent`] if the result is
    /// not representable.
    fn add_checked(self, rhs: Self) -> Optional<Self>;
}

/// Add two values, producing [`Optional::Absent`] if the sum overflows or
/// underflows the type.
///
/// # Examples
///
/// ```
/// use tagged_containers::{checked_add, Optional};
///
/// assert_eq!(checked_add(20, 20), Optional::Present(40));
/// assert_eq!(checked_add(20, i32::MAX), Optional::Absent);
/// assert_eq!(checked_add(i32::MIN, -1), Optional::Absent);
/// ```
#[inline]
pub fn checked_add<T>(a: T, b: T) -> Optional<T>
where
    T: CheckedAdd,
{
    a.add_checked(b)
}

macro_rules! impl_signed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CheckedAdd for $ty {
                #[inline]
                fn add_checked(self, rhs: Self) -> Optional<Self> {
                    if rhs > 0 && self > <$ty>::MAX - rhs {
                        return Optional::Absent;
                    }

                    if rhs < 0 && self < <$ty>::MIN - rhs {
                        return Optional::Absent;
                    }

                    Optional::Present(self + rhs)
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, i128, isize);
