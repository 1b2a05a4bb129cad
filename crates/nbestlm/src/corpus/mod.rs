//! # Corpus Input
//!
//! Gzip text input, whitespace tokenization, and id encoding
//! against a fixed [`crate::vocab::WordVocab`].

pub mod gz_io;

mod encoder;
mod tokenize;

#[doc(inline)]
pub use encoder::CorpusEncoder;
#[doc(inline)]
pub use gz_io::{open_gz_reader, read_gz_text, require_input};
#[doc(inline)]
pub use tokenize::{DEFAULT_EOS, TokenizeOptions, split_words};
