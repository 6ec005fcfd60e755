//! Overflow-checked arithmetic producing [`Optional`] results.
//!
//! [`Optional`]: crate::Optional

pub use self::checked_add::{checked_add, CheckedAdd};
mod checked_add;
