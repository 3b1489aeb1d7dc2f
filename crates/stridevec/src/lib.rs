//! Type-erased, fixed-stride growable containers.
//!
//! This crate provides [`StrideVec`], a contiguous buffer of fixed-width
//! elements whose byte stride is chosen at construction rather than at
//! compile time, with an optional per-element [`ReleaseHook`] that fires
//! immediately before an element is destroyed or overwritten.
//!
//! # Architecture
//!
//! ```text
//! StrideVec (live length, hook dispatch, mutation operations)
//! ├── StrideBuffer (owned byte storage, stride arithmetic, 1.5× growth)
//! ├── ReleaseHook (shared cleanup capability)
//! └── StrideConfig (stride + initial reservation, default 8 slots)
//! ```
//!
//! # Element lifetime
//!
//! The first `len()` slots of the reservation are *live*; the rest hold no
//! value. The release hook fires for live slots being destroyed (`remove`,
//! `remove_range`, `pop`, `clear`, drop) or overwritten (`set`,
//! `set_range`), and never for slots that were not live: a freshly opened
//! insert gap, the destination of an extend, or the bytewise duplication
//! performed by `try_clone`.
//!
//! # Address invalidation
//!
//! Accessors hand out borrows of the backing buffer and every structural
//! mutation takes `&mut self`, so holding an element address across an
//! insert, remove, extend, or reserve is a compile error — the
//! reallocation-invalidates-addresses rule is enforced by the borrow
//! checker instead of by contract.
//!
//! # Concurrency
//!
//! Single-threaded by construction: the shared release hook is an `Rc`, so
//! a container is `!Send`. Callers that need cross-thread access wrap the
//! container in their own synchronization.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod buffer;
pub mod config;
pub mod error;
pub mod hook;
pub mod vec;

// Public re-exports for the primary API surface.
pub use config::StrideConfig;
pub use error::StrideError;
pub use hook::ReleaseHook;
pub use vec::{Elements, ElementsMut, StrideVec};
