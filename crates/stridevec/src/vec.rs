//! The type-erased, fixed-stride growable container.

use std::fmt;
use std::ops::Range;
use std::slice::{ChunksExact, ChunksExactMut};

use crate::buffer::StrideBuffer;
use crate::config::StrideConfig;
use crate::error::StrideError;
use crate::hook::ReleaseHook;

/// A growable, contiguous buffer of fixed-stride elements with an optional
/// per-element release hook.
///
/// The element width is chosen at construction rather than compile time;
/// elements are read and written as `&[u8]` slices of exactly that width.
/// The first `len()` slots are *live*; the remaining reserved slots hold no
/// value. A registered [`ReleaseHook`] fires on an element's bytes
/// immediately before the element is destroyed or overwritten — on
/// [`remove`](Self::remove), [`set`](Self::set), [`clear`](Self::clear),
/// [`pop`](Self::pop), and drop — and never for slots that were not live
/// (insert gaps, extend destinations, bytewise duplication).
///
/// Capacity grows by 1.5× (floored at the required slot count) whenever an
/// insertion exceeds the reservation; it never shrinks automatically.
///
/// Every address handed out ([`at`](Self::at), [`front`](Self::front),
/// [`back`](Self::back), [`as_bytes`](Self::as_bytes), iterators) is a
/// borrow of the backing buffer, so holding one across a structural
/// mutation is a compile error rather than a dangling pointer.
///
/// ```rust
/// use stridevec::{StrideConfig, StrideVec};
///
/// let mut vec = StrideVec::new(StrideConfig::new(4)).unwrap();
/// vec.push(&1u32.to_ne_bytes()).unwrap();
/// vec.push(&2u32.to_ne_bytes()).unwrap();
/// assert_eq!(vec.len(), 2);
/// assert_eq!(vec.at(0), &1u32.to_ne_bytes());
/// ```
pub struct StrideVec {
    buf: StrideBuffer,
    /// Number of live elements.
    len: usize,
    hook: Option<ReleaseHook>,
}

impl StrideVec {
    /// Create an empty container from `config`, without a release hook.
    ///
    /// A zero `initial_capacity` is coerced to
    /// [`StrideConfig::DEFAULT_CAPACITY`]; the backing buffer is allocated
    /// here, so a successfully constructed container always owns storage.
    pub fn new(config: StrideConfig) -> Result<Self, StrideError> {
        Self::build(config, None)
    }

    /// Create an empty container from `config` with a release hook.
    pub fn with_hook(config: StrideConfig, hook: ReleaseHook) -> Result<Self, StrideError> {
        Self::build(config, Some(hook))
    }

    fn build(config: StrideConfig, hook: Option<ReleaseHook>) -> Result<Self, StrideError> {
        if config.element_size == 0 {
            return Err(StrideError::ZeroElementSize);
        }
        let buf = StrideBuffer::new(config.element_size, config.effective_capacity())?;
        Ok(Self { buf, len: 0, hook })
    }

    /// Duplicate the container.
    ///
    /// The copy holds a bytewise duplicate of the live elements, shares the
    /// release hook, and is sized to the source's live length (default
    /// capacity when the source is empty). Duplication is not destruction:
    /// the hook does not fire for copied elements.
    pub fn try_clone(&self) -> Result<Self, StrideError> {
        let config = StrideConfig {
            element_size: self.buf.element_size(),
            initial_capacity: self.len,
        };
        let mut copy = Self::build(config, self.hook.clone())?;
        copy.buf.write_slots(0, self.buf.slots(0, self.len));
        copy.len = self.len;
        Ok(copy)
    }

    // ── Introspection ──────────────────────────────────────────────────

    /// Byte width of a single element.
    pub fn element_size(&self) -> usize {
        self.buf.element_size()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the container holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total byte size of the live elements.
    pub fn size_bytes(&self) -> usize {
        self.len * self.buf.element_size()
    }

    /// Reserved capacity in element slots.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Reserved capacity in bytes.
    pub fn capacity_bytes(&self) -> usize {
        self.buf.capacity_bytes()
    }

    /// Whether a release hook is registered.
    pub fn has_hook(&self) -> bool {
        self.hook.is_some()
    }

    // ── Element access ─────────────────────────────────────────────────

    /// Bytes of the element at `index`.
    ///
    /// The unchecked-contract fast path: the index must be live. Use
    /// [`get`](Self::get) for the checked variant.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn at(&self, index: usize) -> &[u8] {
        assert!(
            index < self.len,
            "index {index} out of bounds: {} live elements",
            self.len
        );
        self.buf.slot(index)
    }

    /// Mutable bytes of the element at `index`.
    ///
    /// Writing through this reference does not count as an overwrite: the
    /// release hook is not involved. Use [`set`](Self::set) to replace an
    /// element with destruction semantics.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> &mut [u8] {
        assert!(
            index < self.len,
            "index {index} out of bounds: {} live elements",
            self.len
        );
        self.buf.slot_mut(index)
    }

    /// Bytes of the element at `index`, or `None` past the live range.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index < self.len {
            Some(self.buf.slot(index))
        } else {
            None
        }
    }

    /// Mutable bytes of the element at `index`, or `None` past the live
    /// range. The release hook is not involved.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        if index < self.len {
            Some(self.buf.slot_mut(index))
        } else {
            None
        }
    }

    /// Bytes of the first element.
    ///
    /// # Panics
    ///
    /// Panics on an empty container; check [`is_empty`](Self::is_empty)
    /// first or use [`get`](Self::get)`(0)`.
    pub fn front(&self) -> &[u8] {
        assert!(!self.is_empty(), "front() on an empty container");
        self.buf.slot(0)
    }

    /// Bytes of the last element.
    ///
    /// # Panics
    ///
    /// Panics on an empty container.
    pub fn back(&self) -> &[u8] {
        assert!(!self.is_empty(), "back() on an empty container");
        self.buf.slot(self.len - 1)
    }

    /// The whole live byte range.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.slots(0, self.len)
    }

    /// The whole live byte range, mutable. The release hook is not
    /// involved.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.buf.slots_mut(0, self.len)
    }

    /// Iterate over the live elements in index order, one
    /// `element_size()`-wide slice per element.
    ///
    /// The traversal is lazy, finite, and restartable: each call starts a
    /// fresh pass. Structural mutation during a pass is rejected by the
    /// borrow checker.
    pub fn iter(&self) -> Elements<'_> {
        Elements {
            inner: self.as_bytes().chunks_exact(self.buf.element_size()),
        }
    }

    /// Iterate over the live elements in index order, mutably. The release
    /// hook is not involved.
    pub fn iter_mut(&mut self) -> ElementsMut<'_> {
        let element_size = self.buf.element_size();
        let live = self.buf.slots_mut(0, self.len);
        ElementsMut {
            inner: live.chunks_exact_mut(element_size),
        }
    }

    // ── Validation helpers ─────────────────────────────────────────────

    fn check_index(&self, index: usize) -> Result<(), StrideError> {
        if index < self.len {
            Ok(())
        } else {
            Err(StrideError::OutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    fn check_value(&self, value: &[u8]) -> Result<(), StrideError> {
        if value.len() == self.buf.element_size() {
            Ok(())
        } else {
            Err(StrideError::StrideMismatch {
                provided: value.len(),
                element_size: self.buf.element_size(),
            })
        }
    }

    /// Count of whole elements in `values`.
    fn check_values(&self, values: &[u8]) -> Result<usize, StrideError> {
        let element_size = self.buf.element_size();
        if values.len() % element_size == 0 {
            Ok(values.len() / element_size)
        } else {
            Err(StrideError::StrideMismatch {
                provided: values.len(),
                element_size,
            })
        }
    }

    /// Invoke the hook on the live slots `[first, last)`, ascending.
    fn release_range(&mut self, first: usize, last: usize) {
        let Some(hook) = self.hook.clone() else {
            return;
        };
        for index in first..last {
            hook.invoke(self.buf.slot_mut(index));
        }
    }

    // ── Mutation ───────────────────────────────────────────────────────

    /// Remove every live element.
    ///
    /// The hook fires once per live element, index ascending, before the
    /// length resets. Capacity is retained. Clearing an empty container is
    /// a no-op, so repeated calls fire the hook only for elements live at
    /// the first.
    pub fn clear(&mut self) {
        self.release_range(0, self.len);
        self.len = 0;
    }

    /// Overwrite the live element at `index` with `value`.
    ///
    /// Overwrite is destruction of the old value: the hook fires on the
    /// existing bytes before the copy. Length is unchanged.
    pub fn set(&mut self, index: usize, value: &[u8]) -> Result<(), StrideError> {
        self.check_index(index)?;
        self.check_value(value)?;
        self.release_range(index, index + 1);
        self.buf.write_slots(index, value);
        Ok(())
    }

    /// Overwrite the live elements starting at `start` with the elements
    /// packed in `values`.
    ///
    /// `values` must span a whole number of elements, all of which must
    /// target live slots. The hook fires per pre-existing slot, ascending,
    /// before the bulk copy. Empty input is a no-op.
    pub fn set_range(&mut self, start: usize, values: &[u8]) -> Result<(), StrideError> {
        let count = self.check_values(values)?;
        if count == 0 {
            return Ok(());
        }
        let end = match start.checked_add(count) {
            Some(end) if end <= self.len => end,
            _ => {
                return Err(StrideError::RangeOutOfBounds {
                    start,
                    end: start.saturating_add(count),
                    len: self.len,
                });
            }
        };
        self.release_range(start, end);
        self.buf.write_slots(start, values);
        Ok(())
    }

    /// Insert one element at `index`, shifting later elements one slot
    /// toward the back.
    ///
    /// `index == len()` appends. Grows by the amortized policy when at
    /// capacity; on allocation failure nothing changes. The freshly opened
    /// gap holds no live value, so the hook does not fire for it.
    pub fn insert(&mut self, index: usize, value: &[u8]) -> Result<(), StrideError> {
        self.check_value(value)?;
        if index > self.len {
            return Err(StrideError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        self.buf.grow_amortized(self.len + 1)?;
        if index < self.len {
            self.buf.shift_slots(index, self.len, index + 1);
        }
        self.buf.write_slots(index, value);
        self.len += 1;
        Ok(())
    }

    /// Remove the element at `index`, shifting later elements one slot
    /// toward the front.
    ///
    /// The hook fires on the element before the shift. Exactly
    /// `len - index - 1` elements move, so removing the last index touches
    /// nothing past the live range.
    pub fn remove(&mut self, index: usize) -> Result<(), StrideError> {
        self.check_index(index)?;
        self.release_range(index, index + 1);
        if index + 1 < self.len {
            self.buf.shift_slots(index + 1, self.len, index);
        }
        self.len -= 1;
        Ok(())
    }

    /// Remove the half-open element range `range`, shifting the tail
    /// forward to close the gap.
    ///
    /// The hook fires per removed element, ascending. An empty range is a
    /// no-op.
    pub fn remove_range(&mut self, range: Range<usize>) -> Result<(), StrideError> {
        if range.start > range.end || range.end > self.len {
            return Err(StrideError::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                len: self.len,
            });
        }
        if range.is_empty() {
            return Ok(());
        }
        self.release_range(range.start, range.end);
        if range.end < self.len {
            self.buf.shift_slots(range.end, self.len, range.start);
        }
        self.len -= range.end - range.start;
        Ok(())
    }

    /// Append the whole elements packed in `values`.
    ///
    /// Capacity grows once by the amortized policy (the factor-with-floor
    /// rule reaches any required count in a single reallocation). The
    /// destination slots are past the live range and hold no value, so the
    /// hook does not fire for them. Empty input is a no-op.
    pub fn extend_from_bytes(&mut self, values: &[u8]) -> Result<(), StrideError> {
        let count = self.check_values(values)?;
        if count == 0 {
            return Ok(());
        }
        // Both slot ranges exist in memory, so the sum cannot overflow.
        self.buf.grow_amortized(self.len + count)?;
        self.buf.write_slots(self.len, values);
        self.len += count;
        Ok(())
    }

    /// Append a single element.
    pub fn push(&mut self, value: &[u8]) -> Result<(), StrideError> {
        self.check_value(value)?;
        self.extend_from_bytes(value)
    }

    /// Remove the last element.
    ///
    /// The hook fires on the element before the length drops. Returns
    /// `false` on an empty container.
    pub fn pop(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.release_range(self.len - 1, self.len);
        self.len -= 1;
        true
    }

    // ── Capacity ───────────────────────────────────────────────────────

    /// Reshape the reservation to exactly `capacity` element slots.
    ///
    /// A request matching the current capacity is a no-op. Requests below
    /// the live length, or below one slot, are floored: an explicit
    /// reserve never drops live elements and a live container never loses
    /// its buffer. Unlike automatic growth, the request is not
    /// factor-scaled.
    pub fn reserve_count(&mut self, capacity: usize) -> Result<(), StrideError> {
        let target = capacity.max(self.len).max(1);
        self.buf.realloc_exact(target)
    }

    /// Reshape the reservation to `bytes / element_size()` element slots
    /// (floor division), with the same flooring as
    /// [`reserve_count`](Self::reserve_count).
    pub fn reserve_bytes(&mut self, bytes: usize) -> Result<(), StrideError> {
        self.reserve_count(bytes / self.buf.element_size())
    }
}

impl Drop for StrideVec {
    fn drop(&mut self) {
        // Hook every remaining live element before the buffer goes.
        self.clear();
    }
}

impl PartialEq for StrideVec {
    /// Structural equality: equal element width and identical live bytes.
    ///
    /// Containers of different element widths never compare equal, even
    /// when their total live byte ranges coincide. The hook does not
    /// participate.
    fn eq(&self, other: &Self) -> bool {
        self.buf.element_size() == other.buf.element_size() && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for StrideVec {}

impl fmt::Debug for StrideVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrideVec")
            .field("len", &self.len)
            .field("element_size", &self.buf.element_size())
            .field("capacity", &self.buf.capacity())
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

/// Iterator over live element slices, in index order.
///
/// Created by [`StrideVec::iter`].
pub struct Elements<'a> {
    inner: ChunksExact<'a, u8>,
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Elements<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Elements<'_> {}

/// Mutable iterator over live element slices, in index order.
///
/// Created by [`StrideVec::iter_mut`]. Writing through the yielded slices
/// does not involve the release hook.
pub struct ElementsMut<'a> {
    inner: ChunksExactMut<'a, u8>,
}

impl<'a> Iterator for ElementsMut<'a> {
    type Item = &'a mut [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for ElementsMut<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for ElementsMut<'_> {}

impl<'a> IntoIterator for &'a StrideVec {
    type Item = &'a [u8];
    type IntoIter = Elements<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut StrideVec {
    type Item = &'a mut [u8];
    type IntoIter = ElementsMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
