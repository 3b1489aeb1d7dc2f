//! Owned byte storage and the capacity growth engine.
//!
//! A [`StrideBuffer`] is a `Vec<u8>` kept at its full reserved size, with
//! all index-to-byte arithmetic in one place. Live-length bookkeeping lives
//! in the layer above ([`StrideVec`](crate::StrideVec)); the buffer only
//! knows slots.

use crate::error::StrideError;

/// Contiguous byte storage divided into fixed-width element slots.
///
/// The backing `Vec<u8>` is resized to exactly the reserved capacity and
/// zero-initialised, so every reserved slot is addressable at all times.
/// Reallocation is fallible: a failed grow leaves the storage untouched.
pub(crate) struct StrideBuffer {
    /// Backing storage. `data.len()` is the reserved capacity in bytes.
    data: Vec<u8>,
    /// Byte width of a single element slot.
    element_size: usize,
}

impl StrideBuffer {
    /// Allocate a buffer with `capacity` slots of `element_size` bytes each.
    ///
    /// Callers guarantee `element_size >= 1` and `capacity >= 1`.
    pub(crate) fn new(element_size: usize, capacity: usize) -> Result<Self, StrideError> {
        let mut buf = Self {
            data: Vec::new(),
            element_size,
        };
        buf.realloc_exact(capacity)?;
        Ok(buf)
    }

    /// Byte width of one element slot.
    pub(crate) fn element_size(&self) -> usize {
        self.element_size
    }

    /// Reserved capacity in element slots.
    pub(crate) fn capacity(&self) -> usize {
        self.data.len() / self.element_size
    }

    /// Reserved capacity in bytes.
    pub(crate) fn capacity_bytes(&self) -> usize {
        self.data.len()
    }

    /// Byte offset of the slot at `index`.
    fn offset(&self, index: usize) -> usize {
        index * self.element_size
    }

    /// Reshape to exactly `capacity` element slots, preserving contents up
    /// to the new size.
    ///
    /// A request matching the current capacity is a no-op. On grow failure
    /// the storage is left in its last-known-good state and the caller's
    /// length bookkeeping must not change.
    pub(crate) fn realloc_exact(&mut self, capacity: usize) -> Result<(), StrideError> {
        let new_bytes =
            capacity
                .checked_mul(self.element_size)
                .ok_or(StrideError::CapacityOverflow {
                    elements: capacity,
                    element_size: self.element_size,
                })?;
        let old_bytes = self.data.len();
        if new_bytes > old_bytes {
            self.data
                .try_reserve_exact(new_bytes - old_bytes)
                .map_err(|_| StrideError::AllocationFailed {
                    requested_bytes: new_bytes,
                })?;
            // The reservation succeeded, so the zero-fill cannot allocate.
            self.data.resize(new_bytes, 0);
        } else if new_bytes < old_bytes {
            self.data.truncate(new_bytes);
            self.data.shrink_to(new_bytes);
        }
        Ok(())
    }

    /// Grow so that at least `required` slots are reserved, applying the
    /// 1.5× amortization factor.
    ///
    /// The target is `max(required, cap + cap / 2)`. The explicit floor is
    /// load-bearing: the bare factor truncates for small capacities
    /// (capacity 1 yields 1 again) and must never produce less than the
    /// triggering operation requires.
    pub(crate) fn grow_amortized(&mut self, required: usize) -> Result<(), StrideError> {
        let cap = self.capacity();
        if required <= cap {
            return Ok(());
        }
        let target = required.max(cap + cap / 2);
        self.realloc_exact(target)
    }

    /// Bytes of the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the slot lies outside the reserved capacity.
    pub(crate) fn slot(&self, index: usize) -> &[u8] {
        let start = self.offset(index);
        &self.data[start..start + self.element_size]
    }

    /// Mutable bytes of the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the slot lies outside the reserved capacity.
    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut [u8] {
        let start = self.offset(index);
        &mut self.data[start..start + self.element_size]
    }

    /// Bytes of the slot range `[first, last)`.
    pub(crate) fn slots(&self, first: usize, last: usize) -> &[u8] {
        &self.data[self.offset(first)..self.offset(last)]
    }

    /// Mutable bytes of the slot range `[first, last)`.
    pub(crate) fn slots_mut(&mut self, first: usize, last: usize) -> &mut [u8] {
        let start = self.offset(first);
        let end = self.offset(last);
        &mut self.data[start..end]
    }

    /// Copy the slot range `[first, last)` over the slots starting at
    /// `dest`. Source and destination may overlap.
    pub(crate) fn shift_slots(&mut self, first: usize, last: usize, dest: usize) {
        let start = self.offset(first);
        let end = self.offset(last);
        self.data.copy_within(start..end, self.offset(dest));
    }

    /// Overwrite the slots starting at `index` with raw bytes.
    ///
    /// `values` must span a whole number of slots within the reserved
    /// capacity; callers validate both.
    pub(crate) fn write_slots(&mut self, index: usize, values: &[u8]) {
        let start = self.offset(index);
        self.data[start..start + values.len()].copy_from_slice(values);
    }
}
