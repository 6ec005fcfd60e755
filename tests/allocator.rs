use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use tagged_containers::{Global, Optional, Queue, RawAlloc, Stack};

/// Forwards to the system allocator, counting requests for zero bytes.
struct CountZeroSized;

static ZERO_SIZED: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for CountZeroSized {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if layout.size() == 0 {
            ZERO_SIZED.fetch_add(1, Ordering::SeqCst);
        }

        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static ALLOCATOR: CountZeroSized = CountZeroSized;

#[test]
fn zero_sized_layout_never_reaches_global_allocator() {
    assert!(Global.alloc(Layout::new::<()>()).is_none());
    assert!(Global::default().alloc(Layout::new::<[u32; 0]>()).is_none());
    assert_eq!(ZERO_SIZED.load(Ordering::SeqCst), 0);
}

#[test]
fn containers_in_global() -> Result<()> {
    let mut stack = Stack::<u32>::try_new_in(Global)?;
    stack.push(1)?;
    assert_eq!(stack.pop(), Optional::Present(1));

    let mut stack = Stack::new_in(Global);
    stack.push(())?;
    assert_eq!(stack.pop(), Optional::Present(()));

    let mut queue = Queue::new_in(Global);
    queue.push("a")?;
    assert_eq!(queue.pop(), Optional::Present("a"));

    assert_eq!(ZERO_SIZED.load(Ordering::SeqCst), 0);
    Ok(())
}
