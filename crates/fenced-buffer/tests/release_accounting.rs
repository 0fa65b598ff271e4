//! Backing-memory release observed at the allocator.
//!
//! A global allocator counts deallocations of one watched address. Kept to a
//! single test so no other test in this binary moves the watch.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use fenced_buffer::{BoundedBuffer, OwnedBuffer};

struct WatchingAlloc;

static WATCHED: AtomicUsize = AtomicUsize::new(0);
static RELEASES: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for WatchingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded to the system allocator with the caller's layout.
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        if ptr as usize == WATCHED.load(Ordering::SeqCst) {
            RELEASES.fetch_add(1, Ordering::SeqCst);
        }
        // SAFETY: `ptr` came from `alloc` above with this layout.
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: WatchingAlloc = WatchingAlloc;

fn watch<T>(ptr: *const T) {
    RELEASES.store(0, Ordering::SeqCst);
    WATCHED.store(ptr as usize, Ordering::SeqCst);
}

fn releases() -> usize {
    RELEASES.load(Ordering::SeqCst)
}

fn fill_and_return_early(fail: bool) -> Option<u64> {
    let mut buf: OwnedBuffer<u64> = BoundedBuffer::new(32);
    watch(buf.as_ptr());
    buf.set(31, 5);
    if fail {
        return None;
    }
    Some(buf.get(31))
}

#[test]
fn backing_memory_released_exactly_once() {
    // Owned, fall-through.
    {
        let mut buf: OwnedBuffer<u64> = BoundedBuffer::new(16);
        buf.set(3, 9);
        watch(buf.as_ptr());
        assert_eq!(releases(), 0);
    }
    assert_eq!(releases(), 1);

    // Owned, early return.
    assert_eq!(fill_and_return_early(true), None);
    assert_eq!(releases(), 1);

    // Wrapped: the wrapper's scope ends without a release; the owner's does.
    let mut region = vec![0u64; 16];
    watch(region.as_ptr());
    {
        let mut view = BoundedBuffer::wrap(&mut region);
        view.set(15, 1);
    }
    assert_eq!(releases(), 0);
    assert_eq!(region[15], 1);
    drop(region);
    assert_eq!(releases(), 1);

    // Leaked: never released.
    let leaked = {
        let buf: OwnedBuffer<u64> = BoundedBuffer::new(8);
        watch(buf.as_ptr());
        buf.leak()
    };
    assert_eq!(releases(), 0);
    assert_eq!(leaked.len(), 8);

    WATCHED.store(0, Ordering::SeqCst);
}
