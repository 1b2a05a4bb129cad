//! # Word Vocabularies
//!
//! A [`WordVocab`] is built once from the training corpus,
//! by counting words with a [`WordCounter`], and is immutable afterward.
//!
//! ```rust,no_run
//! use nbestlm::{
//!     corpus::TokenizeOptions,
//!     vocab::{WordVocab, build_vocab_gz_path, io::save_vocab_path},
//! };
//!
//! let vocab: WordVocab<u32> =
//!     build_vocab_gz_path("data/train.gz", &TokenizeOptions::default()).unwrap();
//! save_vocab_path(&vocab, "vocab.txt").unwrap();
//! ```

pub mod io;

mod word_counter;
mod word_vocab;

#[doc(inline)]
pub use word_counter::{WordCounter, build_vocab_gz_path};
#[doc(inline)]
pub use word_vocab::WordVocab;
