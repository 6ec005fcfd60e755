use std::alloc::Layout;
use std::ptr::NonNull;

/// An allocator which reports failure by returning `None` rather than
/// aborting the process.
///
/// Containers in this crate route every allocation, reallocation and
/// deallocation through this trait, so a refused allocation surfaces as an
/// ordinary error to the caller.
///
/// # Safety
///
/// Implementors must return pointers to blocks which are valid for reads and
/// writes of `layout.size()` bytes, aligned to `layout.align()`, and which
/// stay valid until passed to [`dealloc`] or [`realloc`] on the same
/// allocator.
///
/// [`dealloc`]: RawAlloc::dealloc
/// [`realloc`]: RawAlloc::realloc
pub unsafe trait RawAlloc {
    /// Allocate a block for `layout`.
    ///
    /// This is safe to call with any layout. Implementations which can't
    /// serve zero-sized layouts must return `None` for them rather than
    /// forwarding them to an allocator which forbids them.
    fn alloc(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Resize the block at `ptr` from `layout` to `new_size` bytes, keeping
    /// the alignment of `layout`.
    ///
    /// On success the first `min(layout.size(), new_size)` bytes are
    /// preserved and `ptr` must no longer be used. On failure `None` is
    /// returned and the block at `ptr` is left untouched.
    ///
    /// # Safety
    ///
    /// `ptr` must have been allocated by this allocator with `layout`, and
    /// `new_size` must be non-zero and not overflow `isize` when rounded up
    /// to the alignment of `layout`.
    unsafe fn realloc(
        &self,
        ptr: NonNull<u8>,
        layout: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>>;

    /// Release the block at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must have been allocated by this allocator with `layout`.
    unsafe fn dealloc(&self, ptr: NonNull<u8>, layout: Layout);
}

// SAFETY: Forwards to the referenced allocator.
unsafe impl<A> RawAlloc for &A
where
    A: ?Sized + RawAlloc,
{
    #[inline]
    fn alloc(&self, layout: Layout) -> Option<NonNull<u8>> {
        (**self).alloc(layout)
    }

    #[inline]
    unsafe fn realloc(
        &self,
        ptr: NonNull<u8>,
        layout: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        (**self).realloc(ptr, layout, new_size)
    }

    #[inline]
    unsafe fn dealloc(&self, ptr: NonNull<u8>, layout: Layout) {
        (**self).dealloc(ptr, layout)
    }
}
