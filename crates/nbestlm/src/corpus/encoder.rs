//! # Corpus Encoder

use std::{io::Read, path::Path};

use crate::{
    corpus::{TokenizeOptions, read_gz_text},
    errors::NLResult,
    types::TokenType,
    vocab::WordVocab,
};

/// Encodes raw text into token ids with a fixed [`WordVocab`].
///
/// There is no fallback bucket: any word outside the vocabulary is an
/// [`crate::errors::NBestLmError::UnknownToken`] error.
#[derive(Debug, Clone)]
pub struct CorpusEncoder<'a, T: TokenType> {
    vocab: &'a WordVocab<T>,
    options: TokenizeOptions,
}

impl<'a, T: TokenType> CorpusEncoder<'a, T> {
    /// Create a new encoder.
    pub fn new(
        vocab: &'a WordVocab<T>,
        options: TokenizeOptions,
    ) -> Self {
        Self { vocab, options }
    }

    /// The vocabulary.
    pub fn vocab(&self) -> &WordVocab<T> {
        self.vocab
    }

    /// The tokenize options.
    pub fn options(&self) -> &TokenizeOptions {
        &self.options
    }

    /// Encode in-memory text.
    pub fn encode_text(
        &self,
        text: &str,
    ) -> NLResult<Vec<T>> {
        self.vocab.encode_words(self.options.split(text))
    }

    /// Encode everything from a reader.
    pub fn encode_reader<R: Read>(
        &self,
        mut reader: R,
    ) -> NLResult<Vec<T>> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.encode_text(&text)
    }

    /// Encode a gzip compressed corpus file.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn encode_gz_path<P>(
        &self,
        path: P,
    ) -> NLResult<Vec<T>>
    where
        P: AsRef<Path> + core::fmt::Debug,
    {
        let tokens = self.encode_text(&read_gz_text(path.as_ref())?)?;
        log::info!(
            "encoded {} tokens from {}",
            tokens.len(),
            path.as_ref().display()
        );
        Ok(tokens)
    }
}
