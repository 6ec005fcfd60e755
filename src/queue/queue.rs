use std::alloc::Layout;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::ErrorKind;
use crate::{Error, Global, Optional, PushError, RawAlloc, Result};

use super::{Iter, Node};

/// A first-in first-out queue backed by a singly linked list.
///
/// Every push allocates one node and every pop releases one, so both are
/// O(1). An empty queue holds no allocation at all.
///
/// # Examples
///
/// ```
/// use tagged_containers::{Optional, Queue};
///
/// let mut queue = Queue::new();
/// queue.push(1)?;
/// queue.push(2)?;
/// queue.push(3)?;
///
/// assert_eq!(queue.pop(), Optional::Present(1));
/// assert_eq!(queue.pop(), Optional::Present(2));
/// assert_eq!(queue.len(), 1);
/// assert_eq!(queue.front(), Optional::Present(&3));
/// # Ok::<_, tagged_containers::PushError<i32>>(())
/// ```
pub struct Queue<T, A = Global>
where
    A: RawAlloc,
{
    head: Option<NonNull<Node<T>>>,
    /// Last node in the chain, `None` exactly when `head` is.
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    alloc: A,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> Queue<T> {
    /// Construct a new empty queue using the global allocator.
    #[inline]
    pub const fn new() -> Self {
        Self::new_in(Global)
    }
}

impl<T, A> Queue<T, A>
where
    A: RawAlloc,
{
    const NODE: Layout = Layout::new::<Node<T>>();

    /// Construct a new empty queue which allocates its nodes in `alloc`.
    #[inline]
    pub const fn new_in(alloc: A) -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Push a value onto the back of the queue.
    ///
    /// If no node could be allocated for it, the value is returned in the
    /// error and the queue is not modified.
    pub fn push(&mut self, value: T) -> Result<(), PushError<T>> {
        let Some(node) = self.alloc.alloc(Self::NODE) else {
            let error = Error::new(ErrorKind::AllocFailed {
                size: Self::NODE.size(),
                align: Self::NODE.align(),
            });

            log_warn!(len = self.len, %error, "Queue node allocation failed");
            return Err(PushError::new(value, error));
        };

        let node = node.cast::<Node<T>>();

        // SAFETY: The block was just allocated with the layout of a node.
        unsafe {
            node.as_ptr().write(Node { value, next: None });
        }

        match self.tail {
            // SAFETY: The tail is a live node owned by this queue.
            Some(tail) => unsafe {
                (*tail.as_ptr()).next = Some(node);
            },
            None => {
                self.head = Some(node);
            }
        }

        self.tail = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Pop the value at the front of the queue, or [`Optional::Absent`] if
    /// the queue is empty.
    pub fn pop(&mut self) -> Optional<T> {
        let Some(head) = self.head else {
            return Optional::Absent;
        };

        // SAFETY: The head is a live node owned by this queue. It is moved
        // out once here and its block released right after.
        let node = unsafe {
            let node = head.as_ptr().read();
            self.alloc.dealloc(head.cast(), Self::NODE);
            node
        };

        self.head = node.next;

        if self.head.is_none() {
            self.tail = None;
        }

        self.len -= 1;
        Optional::Present(node.value)
    }

    /// Borrow the value at the front of the queue.
    #[inline]
    pub fn front(&self) -> Optional<&T> {
        match self.head {
            // SAFETY: The head is a live node owned by this queue.
            Some(head) => Optional::Present(unsafe { &(*head.as_ptr()).value }),
            None => Optional::Absent,
        }
    }

    /// Borrow the value at the back of the queue.
    #[inline]
    pub fn back(&self) -> Optional<&T> {
        match self.tail {
            // SAFETY: The tail is a live node owned by this queue.
            Some(tail) => Optional::Present(unsafe { &(*tail.as_ptr()).value }),
            None => Optional::Absent,
        }
    }

    /// The number of values in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Test if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the values in the queue, from front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.len)
    }

    /// Drop every value in the queue and release its nodes.
    pub fn clear(&mut self) {
        while self.pop().is_present() {}
    }
}

impl<T, A> Drop for Queue<T, A>
where
    A: RawAlloc,
{
    #[inline]
    fn drop(&mut self) {
        self.clear();
    }
}

// SAFETY: The queue exclusively owns its nodes and the values in them.
unsafe impl<T, A> Send for Queue<T, A>
where
    T: Send,
    A: RawAlloc + Send,
{
}

// SAFETY: Shared access only ever hands out shared references to the values.
unsafe impl<T, A> Sync for Queue<T, A>
where
    T: Sync,
    A: RawAlloc + Sync,
{
}

impl<T> Default for Queue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, A> IntoIterator for &'a Queue<T, A>
where
    A: RawAlloc,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, A> fmt::Debug for Queue<T, A>
where
    T: fmt::Debug,
    A: RawAlloc,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
