//! Per-element release hooks.
//!
//! A [`ReleaseHook`] is invoked with an element's bytes immediately before
//! that element's storage is logically destroyed: on remove, overwrite via
//! set, clear, pop, and container drop. It never fires for a freshly opened
//! insert gap, for extend destination slots, or during bytewise duplication
//! via `try_clone` — those slots hold no live value.

use std::fmt;
use std::rc::Rc;

/// Shared cleanup capability invoked on an element before destruction.
///
/// Hooks are reference-counted so a duplicated container
/// ([`StrideVec::try_clone`](crate::StrideVec::try_clone)) shares the same
/// hook as its source. The `Rc` keeps the container `!Send`, matching its
/// single-threaded ownership model.
#[derive(Clone)]
pub struct ReleaseHook {
    func: Rc<dyn Fn(&mut [u8])>,
}

impl ReleaseHook {
    /// Wrap a cleanup function.
    ///
    /// The function receives the exact byte range of the element being
    /// destroyed and may scrub or decode it freely; the storage is reused
    /// or freed as soon as the call returns.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&mut [u8]) + 'static,
    {
        Self {
            func: Rc::new(func),
        }
    }

    /// Invoke the hook on one element's bytes.
    pub(crate) fn invoke(&self, element: &mut [u8]) {
        (self.func)(element);
    }
}

impl fmt::Debug for ReleaseHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseHook").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn invoke_passes_element_bytes() {
        let seen = Rc::new(Cell::new(0u8));
        let seen_in_hook = Rc::clone(&seen);
        let hook = ReleaseHook::new(move |bytes: &mut [u8]| {
            seen_in_hook.set(bytes[0]);
            bytes[0] = 0;
        });

        let mut element = [42u8, 7];
        hook.invoke(&mut element);
        assert_eq!(seen.get(), 42);
        assert_eq!(element, [0, 7]);
    }

    #[test]
    fn clone_shares_the_function() {
        let count = Rc::new(Cell::new(0usize));
        let count_in_hook = Rc::clone(&count);
        let hook = ReleaseHook::new(move |_: &mut [u8]| {
            count_in_hook.set(count_in_hook.get() + 1);
        });

        let copy = hook.clone();
        hook.invoke(&mut [0u8]);
        copy.invoke(&mut [0u8]);
        assert_eq!(count.get(), 2);
    }
}
