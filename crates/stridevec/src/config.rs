//! Container configuration parameters.

/// Configuration for a [`StrideVec`](crate::StrideVec).
///
/// Holds the element stride and the initial slot reservation. Validated at
/// container construction; both values are immutable once the container
/// exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrideConfig {
    /// Byte width of a single element.
    ///
    /// Must be at least 1. Construction fails with
    /// [`StrideError::ZeroElementSize`](crate::StrideError::ZeroElementSize)
    /// otherwise.
    pub element_size: usize,

    /// Number of element slots reserved up front.
    ///
    /// A value of 0 is coerced to [`Self::DEFAULT_CAPACITY`] — a live
    /// container always owns an allocated buffer.
    pub initial_capacity: usize,
}

impl StrideConfig {
    /// Default slot reservation, applied when `initial_capacity` is 0.
    pub const DEFAULT_CAPACITY: usize = 8;

    /// Capacity multiplier applied on automatic growth.
    ///
    /// The growth engine evaluates this in integer arithmetic as
    /// `cap + cap / 2`, floored at the slot count the triggering operation
    /// actually requires.
    pub const GROWTH_FACTOR: f32 = 1.5;

    /// Create a config with the given element stride and the default
    /// initial capacity.
    ///
    /// Fields are public; callers override `initial_capacity` directly.
    pub fn new(element_size: usize) -> Self {
        Self {
            element_size,
            initial_capacity: Self::DEFAULT_CAPACITY,
        }
    }

    /// The slot reservation construction will actually perform.
    pub fn effective_capacity(&self) -> usize {
        if self.initial_capacity == 0 {
            Self::DEFAULT_CAPACITY
        } else {
            self.initial_capacity
        }
    }
}
