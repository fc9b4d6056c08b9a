//! Allocation tracking for the motion-path queries.
//!
//! Register [`TrackingAllocator`] as the global allocator of a test binary,
//! then open a window with [`track`] around the code that must not allocate:
//!
//! ```rust,ignore
//! use bedcomp_test_helpers::tracking::TrackingAllocator;
//!
//! #[global_allocator]
//! static GLOBAL: TrackingAllocator = TrackingAllocator;
//!
//! let window = bedcomp_test_helpers::track();
//! let _ = registry.interpolated_height_error(10.0, 10.0);
//! bedcomp_test_helpers::assert_no_alloc!(window);
//! ```
//!
//! Counts are per thread, so parallel tests do not disturb each other.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
    static BYTES: Cell<usize> = const { Cell::new(0) };
    static ENABLED: Cell<bool> = const { Cell::new(false) };
}

fn record(bytes: usize) {
    if ENABLED.with(Cell::get) {
        ALLOCATIONS.with(|c| c.set(c.get().saturating_add(1)));
        BYTES.with(|b| b.set(b.get().saturating_add(bytes)));
    }
}

/// System allocator wrapper that counts allocations made inside a [`track`] window.
#[derive(Debug)]
pub struct TrackingAllocator;

// SAFETY: every call is forwarded unchanged to `System`; the wrapper only
// updates thread-local counters, which never allocate.
unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: same contract as the caller's.
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            record(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: `ptr` was returned by `System` through this allocator.
        unsafe { System.dealloc(ptr, layout) };
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // SAFETY: same contract as the caller's.
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            record(new_size.saturating_sub(layout.size()));
        }
        new_ptr
    }
}

/// Open tracking window; counting stops when it is dropped.
#[derive(Debug)]
pub struct AllocationWindow {
    start_allocations: usize,
    start_bytes: usize,
}

impl AllocationWindow {
    fn open() -> Self {
        ENABLED.with(|e| e.set(true));
        Self {
            start_allocations: ALLOCATIONS.with(Cell::get),
            start_bytes: BYTES.with(Cell::get),
        }
    }

    /// Allocations made on this thread since the window opened.
    pub fn allocations(&self) -> usize {
        ALLOCATIONS
            .with(Cell::get)
            .saturating_sub(self.start_allocations)
    }

    /// Bytes requested on this thread since the window opened.
    pub fn bytes(&self) -> usize {
        BYTES.with(Cell::get).saturating_sub(self.start_bytes)
    }
}

impl Drop for AllocationWindow {
    fn drop(&mut self) {
        ENABLED.with(|e| e.set(false));
    }
}

/// Starts counting allocations on the current thread.
pub fn track() -> AllocationWindow {
    AllocationWindow::open()
}

/// Fails the test if the window saw any allocation.
#[macro_export]
macro_rules! assert_no_alloc {
    ($window:expr $(,)?) => {
        let window = &$window;
        let allocations = window.allocations();
        if allocations > 0 {
            panic!(
                "unexpected heap allocation: {} allocations ({} bytes) at {}:{}",
                allocations,
                window.bytes(),
                file!(),
                line!()
            );
        }
    };
    ($window:expr, $context:expr $(,)?) => {
        let window = &$window;
        let allocations = window.allocations();
        if allocations > 0 {
            panic!(
                "unexpected heap allocation in '{}': {} allocations ({} bytes) at {}:{}",
                $context,
                allocations,
                window.bytes(),
                file!(),
                line!()
            );
        }
    };
}
