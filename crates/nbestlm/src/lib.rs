//! # `nbestlm` Language Model Data Preparation
//!
//! Builds word vocabularies, encodes whitespace tokenized corpora and n-best
//! rescoring lists into token ids, and slices them into fixed shape
//! mini-batches for sequential language model training and evaluation.
//!
//! See:
//! * [`vocab`] to build and persist a [`vocab::WordVocab`].
//! * [`corpus`] to read and encode gzip text corpora.
//! * [`nbest`] to parse n-best lists with per-token provenance.
//! * [`batching`] to produce ``(input, target)`` windows.
//! * [`dataset`] to load a whole ``train/dev/dev_nbest`` data directory.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Loading a Data Directory
//!
//! ```rust,no_run
//! use nbestlm::{
//!     batching::{BatchOptions, NBestBatcher, PlainBatcher},
//!     dataset::{CorpusData, CorpusDataOptions, load_corpus_data},
//! };
//!
//! type T = u32;
//!
//! let data: CorpusData<T> = load_corpus_data("data/", &CorpusDataOptions::default())?;
//! let options = BatchOptions::new(20, 35);
//!
//! for (x, y) in PlainBatcher::new(&data.train, &options)? {
//!     // feed the model.
//!     # let _ = (x, y);
//! }
//!
//! let eos = data.eos_id()?;
//! for (x, y, z) in NBestBatcher::from_nbest(&data.valid_nbest, eos, &options)? {
//!     // score hypotheses; `z` maps each target back to its (group, hypothesis).
//!     # let _ = (x, y, z);
//! }
//! # Ok::<(), nbestlm::errors::NBestLmError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod batching;
pub mod corpus;
pub mod dataset;
pub mod errors;
pub mod nbest;
pub mod types;
pub mod vocab;

#[doc(no_inline)]
pub use ndarray;

#[doc(inline)]
pub use errors::{NBestLmError, NLResult};
#[doc(inline)]
pub use types::TokenType;
