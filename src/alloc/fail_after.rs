use std::alloc::Layout;
use std::cell::Cell;
use std::ptr::NonNull;

use super::{Global, RawAlloc};

/// Test allocator which grants a fixed number of allocations and
/// reallocations, then refuses every further request.
///
/// Tracks the number of live blocks so tests can assert nothing leaked.
#[derive(Debug)]
pub(crate) struct FailAfter {
    remaining: Cell<usize>,
    live: Cell<usize>,
}

impl FailAfter {
    pub(crate) fn new(remaining: usize) -> Self {
        Self {
            remaining: Cell::new(remaining),
            live: Cell::new(0),
        }
    }

    /// Grant `n` more requests.
    pub(crate) fn grant(&self, n: usize) {
        self.remaining.set(self.remaining.get() + n);
    }

    /// Number of blocks currently allocated.
    pub(crate) fn live(&self) -> usize {
        self.live.get()
    }

    fn take(&self) -> bool {
        match self.remaining.get().checked_sub(1) {
            Some(n) => {
                self.remaining.set(n);
                true
            }
            None => false,
        }
    }
}

// SAFETY: Forwards to `Global` for every granted request.
unsafe impl RawAlloc for FailAfter {
    fn alloc(&self, layout: Layout) -> Option<NonNull<u8>> {
        if !self.take() {
            return None;
        }

        let ptr = Global.alloc(layout)?;
        self.live.set(self.live.get() + 1);
        Some(ptr)
    }

    unsafe fn realloc(
        &self,
        ptr: NonNull<u8>,
        layout: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        if !self.take() {
            return None;
        }

        Global.realloc(ptr, layout, new_size)
    }

    unsafe fn dealloc(&self, ptr: NonNull<u8>, layout: Layout) {
        self.live.set(self.live.get() - 1);
        Global.dealloc(ptr, layout);
    }
}
