//! The allocator seam used by the containers in this crate.

pub use self::raw_alloc::RawAlloc;
mod raw_alloc;

pub use self::global::Global;
mod global;

#[cfg(test)]
pub(crate) use self::fail_after::FailAfter;
#[cfg(test)]
mod fail_after;
