//! Generic containers which report absence and allocation failure as values.
//!
//! * [`Optional`] is a tagged value which is either present or absent.
//! * [`checked_add`] adds signed integers, producing an absent value on
//!   overflow.
//! * [`Stack`] is a growable last-in first-out stack which grows by doubling
//!   and shrinks by halving.
//! * [`Queue`] is a first-in first-out queue over a singly linked list.
//!
//! Both containers allocate through [`RawAlloc`], so a refused allocation
//! comes back to the caller as a [`PushError`] holding the rejected value
//! instead of aborting or losing it.
//!
//! ```
//! use tagged_containers::{checked_add, Optional, Queue, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push(1)?;
//! stack.push(2)?;
//! assert_eq!(stack.pop(), Optional::Present(2));
//!
//! let mut queue = Queue::new();
//! queue.push(1)?;
//! queue.push(2)?;
//! assert_eq!(queue.pop(), Optional::Present(1));
//!
//! assert_eq!(checked_add(i32::MAX, 1), Optional::Absent);
//! # Ok::<_, tagged_containers::PushError<i32>>(())
//! ```
//!
//! # Features
//!
//! * `tracing` (default) - Emit [`tracing`] events when a container grows,
//!   shrinks or fails to allocate.
//!
//! [`tracing`]: https://docs.rs/tracing

#![allow(clippy::module_inception)]

#[macro_use]
mod macros;

#[doc(inline)]
pub use self::error::{Error, Result};
mod error;

#[doc(inline)]
pub use self::optional::Optional;
mod optional;

#[doc(inline)]
pub use self::checked::{checked_add, CheckedAdd};
pub mod checked;

#[doc(inline)]
pub use self::alloc::{Global, RawAlloc};
pub mod alloc;

#[doc(inline)]
pub use self::push_error::PushError;
mod push_error;

#[doc(inline)]
pub use self::stack::Stack;
mod stack;

#[doc(inline)]
pub use self::queue::Queue;
pub mod queue;
