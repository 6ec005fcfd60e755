use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::Node;

/// An iterator over the values in a [`Queue`], from front to back.
///
/// See [`Queue::iter`].
///
/// [`Queue`]: crate::Queue
/// [`Queue::iter`]: crate::Queue::iter
pub struct Iter<'a, T> {
    next: Option<NonNull<Node<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(head: Option<NonNull<Node<T>>>, len: usize) -> Self {
        Self {
            next: head,
            remaining: len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;

        // SAFETY: The iterator borrows the queue, so every node reachable from
        // it stays alive and unmodified for `'a`.
        let node = unsafe { &*node.as_ptr() };
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

// SAFETY: The iterator only hands out shared references to values.
unsafe impl<T> Send for Iter<'_, T> where T: Sync {}
// SAFETY: The iterator only hands out shared references to values.
unsafe impl<T> Sync for Iter<'_, T> where T: Sync {}
