//! Container error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during container operations.
///
/// Every failure is reported synchronously to the caller; no operation
/// retries internally and no operation aborts the process. A failed
/// reallocation leaves the container in its last-known-good state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StrideError {
    /// Construction was given an element size of zero.
    ZeroElementSize,
    /// The allocator could not provide the requested backing storage.
    AllocationFailed {
        /// Total byte size the reallocation asked for.
        requested_bytes: usize,
    },
    /// A slot-count request whose byte size does not fit in `usize`.
    CapacityOverflow {
        /// Number of element slots requested.
        elements: usize,
        /// Byte width of a single element.
        element_size: usize,
    },
    /// An index outside the live range.
    ///
    /// Mutations accept indices in `[0, len)` (`[0, len]` for insert);
    /// this is the checked-path report for anything else.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// A half-open slot range extending outside the live range.
    RangeOutOfBounds {
        /// Start of the requested range (inclusive).
        start: usize,
        /// End of the requested range (exclusive).
        end: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// A value slice whose byte length is not the element stride, or not a
    /// whole multiple of it for bulk input.
    StrideMismatch {
        /// Byte length of the provided value slice.
        provided: usize,
        /// Byte width of a single element.
        element_size: usize,
    },
}

impl fmt::Display for StrideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroElementSize => {
                write!(f, "element size must be at least 1 byte")
            }
            Self::AllocationFailed { requested_bytes } => {
                write!(f, "allocation failed: requested {requested_bytes} bytes")
            }
            Self::CapacityOverflow {
                elements,
                element_size,
            } => {
                write!(
                    f,
                    "capacity overflow: {elements} slots of {element_size} bytes exceeds usize"
                )
            }
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds: {len} live elements")
            }
            Self::RangeOutOfBounds { start, end, len } => {
                write!(
                    f,
                    "range {start}..{end} out of bounds: {len} live elements"
                )
            }
            Self::StrideMismatch {
                provided,
                element_size,
            } => {
                write!(
                    f,
                    "value of {provided} bytes does not match element stride {element_size}"
                )
            }
        }
    }
}

impl Error for StrideError {}
