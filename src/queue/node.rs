use std::ptr::NonNull;

/// A link in a [`Queue`].
///
/// Each node exclusively owns its successor, if any.
///
/// [`Queue`]: super::Queue
pub(super) struct Node<T> {
    pub(super) value: T,
    pub(super) next: Option<NonNull<Node<T>>>,
}
