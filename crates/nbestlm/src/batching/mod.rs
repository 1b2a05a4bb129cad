//! # Sequential Batching
//!
//! Both batchers lay a flat token sequence out as a ``[batch_size, batch_len]``
//! grid of contiguous row segments (not round-robin), and then yield
//! `num_steps` wide windows left to right; each target window is its input
//! window shifted by one column.
//!
//! * [`PlainBatcher`] drops the tail that does not fill a row.
//! * [`NBestBatcher`] pads instead, adds a context column, and carries
//!   the provenance grid alongside.
//!
//! ```rust
//! use nbestlm::batching::{BatchOptions, PlainBatcher};
//!
//! let data: Vec<u32> = (0..8).collect();
//! let batcher = PlainBatcher::new(&data, &BatchOptions::new(2, 2)).unwrap();
//! for (x, y) in batcher {
//!     assert_eq!(x.dim(), (2, 2));
//!     assert_eq!(y[[0, 0]], x[[0, 1]]);
//! }
//! ```

mod batch_options;
mod nbest_batcher;
mod plain_batcher;

#[doc(inline)]
pub use batch_options::BatchOptions;
#[doc(inline)]
pub use nbest_batcher::NBestBatcher;
#[doc(inline)]
pub use plain_batcher::PlainBatcher;
