use std::alloc::{self, Layout};
use std::ptr::NonNull;

use super::RawAlloc;

/// The process-wide allocator registered through `#[global_allocator]`, or
/// the system allocator if none is.
///
/// Zero-sized layouts are refused with `None`, since the underlying allocator
/// must never see them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Global;

// SAFETY: Forwards to `std::alloc`, which upholds the same contract.
unsafe impl RawAlloc for Global {
    #[inline]
    fn alloc(&self, layout: Layout) -> Option<NonNull<u8>> {
        if layout.size() == 0 {
            return None;
        }

        // SAFETY: The layout has a non-zero size.
        NonNull::new(unsafe { alloc::alloc(layout) })
    }

    #[inline]
    unsafe fn realloc(
        &self,
        ptr: NonNull<u8>,
        layout: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        NonNull::new(alloc::realloc(ptr.as_ptr(), layout, new_size))
    }

    #[inline]
    unsafe fn dealloc(&self, ptr: NonNull<u8>, layout: Layout) {
        alloc::dealloc(ptr.as_ptr(), layout);
    }
}
