use std::alloc::{handle_alloc_error, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem::size_of;
use std::ptr::{self, NonNull};
use std::slice::{from_raw_parts, from_raw_parts_mut};

use crate::error::ErrorKind;
use crate::{Error, Global, Optional, PushError, RawAlloc, Result};

/// A last-in first-out stack backed by a contiguous buffer.
///
/// The buffer starts out with room for one element. It doubles when a push
/// finds it full, and halves when a pop leaves it exactly half full. The
/// capacity therefore never drops below one.
///
/// Growing can fail, in which case [`push`] hands the value back through a
/// [`PushError`] and the stack is left untouched. Shrinking can fail too, but
/// since it only exists to release memory the popped value is returned
/// regardless and the capacity simply stays where it was.
///
/// # Examples
///
/// ```
/// use tagged_containers::{Optional, Stack};
///
/// let mut stack = Stack::new();
///
/// for n in 0..20u64 {
///     stack.push(n)?;
/// }
///
/// assert_eq!(stack.capacity(), 32);
///
/// for n in (0..20u64).rev() {
///     assert_eq!(stack.pop(), Optional::Present(n));
/// }
///
/// assert_eq!(stack.pop(), Optional::Absent);
/// assert_eq!(stack.capacity(), 1);
/// # Ok::<_, tagged_containers::PushError<u64>>(())
/// ```
///
/// [`push`]: Stack::push
pub struct Stack<T, A = Global>
where
    A: RawAlloc,
{
    /// Pointed to data of the buffer.
    data: NonNull<T>,
    /// Number of initialized elements at the start of the buffer.
    len: usize,
    /// Number of elements the buffer has room for, never zero.
    capacity: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

impl<T> Stack<T> {
    /// Construct a new empty stack with a capacity of one, using the global
    /// allocator.
    ///
    /// # Panics
    ///
    /// Aborts through [`handle_alloc_error`] if the initial buffer cannot be
    /// allocated. Use [`try_new`] to handle that case.
    ///
    /// [`try_new`]: Stack::try_new
    #[inline]
    pub fn new() -> Self {
        Self::new_in(Global)
    }

    /// Try to construct a new empty stack with a capacity of one, using the
    /// global allocator.
    #[inline]
    pub fn try_new() -> Result<Self> {
        Self::try_new_in(Global)
    }
}

impl<T, A> Stack<T, A>
where
    A: RawAlloc,
{
    const IS_ZST: bool = size_of::<T>() == 0;

    /// Construct a new empty stack with a capacity of one in the given
    /// allocator.
    ///
    /// # Panics
    ///
    /// Aborts through [`handle_alloc_error`] if the initial buffer cannot be
    /// allocated.
    pub fn new_in(alloc: A) -> Self {
        match Self::try_new_in(alloc) {
            Ok(stack) => stack,
            Err(..) => handle_alloc_error(Layout::new::<T>()),
        }
    }

    /// Try to construct a new empty stack with a capacity of one in the given
    /// allocator.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_containers::{Global, Stack};
    ///
    /// let stack = Stack::<u32>::try_new_in(Global)?;
    /// assert_eq!(stack.capacity(), 1);
    /// # Ok::<_, tagged_containers::Error>(())
    /// ```
    pub fn try_new_in(alloc: A) -> Result<Self> {
        let data = if Self::IS_ZST {
            NonNull::dangling()
        } else {
            let layout = Layout::new::<T>();

            match alloc.alloc(layout) {
                Some(data) => data.cast(),
                None => return Err(alloc_failed(layout)),
            }
        };

        Ok(Self {
            data,
            len: 0,
            capacity: 1,
            alloc,
            _marker: PhantomData,
        })
    }

    /// Push a value onto the top of the stack.
    ///
    /// If the stack is full its buffer is first grown to twice its capacity.
    /// Should that fail, the value is returned in the error and the stack is
    /// not modified.
    pub fn push(&mut self, value: T) -> Result<(), PushError<T>> {
        if self.len == self.capacity {
            if let Err(error) = self.grow() {
                log_warn!(
                    len = self.len,
                    capacity = self.capacity,
                    %error,
                    "Stack growth failed"
                );

                return Err(PushError::new(value, error));
            }
        }

        // SAFETY: We've ensured that there is room for at least one more
        // element just above.
        unsafe {
            self.data.as_ptr().add(self.len).write(value);
        }

        self.len += 1;
        Ok(())
    }

    /// Pop the value at the top of the stack, or [`Optional::Absent`] if the
    /// stack is empty.
    ///
    /// If the pop leaves the buffer exactly half full it is shrunk to half
    /// its capacity.
    pub fn pop(&mut self) -> Optional<T> {
        if self.len == 0 {
            return Optional::Absent;
        }

        self.len -= 1;

        // SAFETY: The element at the old top was initialized and is now
        // outside of the initialized range, so it's moved out exactly once.
        let value = unsafe { self.data.as_ptr().add(self.len).read() };

        if self.capacity > 1 && self.len == self.capacity / 2 {
            self.shrink();
        }

        Optional::Present(value)
    }

    /// Borrow the value at the top of the stack.
    #[inline]
    pub fn peek(&self) -> Optional<&T> {
        match self.as_slice() {
            [.., last] => Optional::Present(last),
            [] => Optional::Absent,
        }
    }

    /// Mutably borrow the value at the top of the stack.
    #[inline]
    pub fn peek_mut(&mut self) -> Optional<&mut T> {
        match self.as_mut_slice() {
            [.., last] => Optional::Present(last),
            [] => Optional::Absent,
        }
    }

    /// The number of values in the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Test if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of values the stack can hold before it has to grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The values in the stack, from the bottom to the top.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: The first `len` elements are initialized.
        unsafe { from_raw_parts(self.data.as_ptr(), self.len) }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: The first `len` elements are initialized.
        unsafe { from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    /// Drop every value in the stack.
    ///
    /// The capacity of the stack is left unchanged.
    pub fn clear(&mut self) {
        let len = self.len;
        // NB: Reset first so a panicking destructor can't cause a double drop.
        self.len = 0;

        // SAFETY: The first `len` elements were initialized and are no longer
        // reachable.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.data.as_ptr(), len));
        }
    }

    fn grow(&mut self) -> Result<()> {
        let capacity = doubled(self.capacity)?;
        self.resize(capacity)?;
        log_trace!(capacity, "Stack grew");
        Ok(())
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn shrink(&mut self) {
        let capacity = self.capacity / 2;

        match self.resize(capacity) {
            Ok(()) => {
                log_trace!(capacity, "Stack shrunk");
            }
            Err(error) => {
                log_warn!(
                    len = self.len,
                    capacity = self.capacity,
                    %error,
                    "Stack shrink failed, keeping capacity"
                );
            }
        }
    }

    /// Move the buffer to one with room for `capacity` elements.
    ///
    /// The caller must ensure that `capacity` is non-zero and no smaller than
    /// the current length. On error the buffer is left untouched.
    fn resize(&mut self, capacity: usize) -> Result<()> {
        debug_assert!(capacity > 0 && capacity >= self.len);

        if !Self::IS_ZST {
            let old = array_layout::<T>(self.capacity)?;
            let new = array_layout::<T>(capacity)?;

            // SAFETY: The buffer was allocated in this allocator with the old
            // layout, and the new size is non-zero since `T` is not zero-sized.
            let data = unsafe { self.alloc.realloc(self.data.cast(), old, new.size()) };

            let Some(data) = data else {
                return Err(alloc_failed(new));
            };

            self.data = data.cast();
        }

        self.capacity = capacity;
        Ok(())
    }
}

/// Compute the capacity a full buffer grows to.
pub(super) fn doubled(capacity: usize) -> Result<usize> {
    capacity
        .checked_mul(2)
        .ok_or_else(|| Error::new(ErrorKind::CapacityOverflow))
}

/// Compute the layout of a buffer holding `capacity` values of `T`.
pub(super) fn array_layout<T>(capacity: usize) -> Result<Layout> {
    Layout::array::<T>(capacity).map_err(|_| Error::new(ErrorKind::CapacityOverflow))
}

#[inline]
fn alloc_failed(layout: Layout) -> Error {
    Error::new(ErrorKind::AllocFailed {
        size: layout.size(),
        align: layout.align(),
    })
}

impl<T, A> Drop for Stack<T, A>
where
    A: RawAlloc,
{
    fn drop(&mut self) {
        self.clear();

        if Self::IS_ZST {
            return;
        }

        if let Ok(layout) = array_layout::<T>(self.capacity) {
            // SAFETY: The buffer was allocated in this allocator with this
            // layout, and every element in it has been dropped above.
            unsafe {
                self.alloc.dealloc(self.data.cast(), layout);
            }
        }
    }
}

// SAFETY: The stack exclusively owns its buffer and the values in it.
unsafe impl<T, A> Send for Stack<T, A>
where
    T: Send,
    A: RawAlloc + Send,
{
}

// SAFETY: Shared access only ever hands out shared references to the values.
unsafe impl<T, A> Sync for Stack<T, A>
where
    T: Sync,
    A: RawAlloc + Sync,
{
}

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A> fmt::Debug for Stack<T, A>
where
    T: fmt::Debug,
    A: RawAlloc,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("items", &self.as_slice())
            .field("capacity", &self.capacity)
            .finish()
    }
}
