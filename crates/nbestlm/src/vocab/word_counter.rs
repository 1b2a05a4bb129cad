//! # Word Counter

use std::path::Path;

use compact_str::CompactString;

use crate::{
    corpus::{TokenizeOptions, read_gz_text},
    errors::NLResult,
    types::{CountType, NLHashMap, TokenType, hash_map_with_capacity},
    vocab::WordVocab,
};

/// Word counter structure.
///
/// Counts whitespace-delimited words (and end-of-sequence markers)
/// before they are frozen into a [`WordVocab`].
pub struct WordCounter<C: CountType> {
    /// The tokenize options.
    pub options: TokenizeOptions,

    /// The word counts.
    pub word_counts: NLHashMap<CompactString, C>,
}

impl<C: CountType> Default for WordCounter<C> {
    fn default() -> Self {
        Self::new(TokenizeOptions::default())
    }
}

impl<C: CountType> WordCounter<C> {
    /// Create a new word counter.
    pub fn new(options: TokenizeOptions) -> Self {
        Self {
            options,
            word_counts: hash_map_with_capacity(10_000),
        }
    }

    /// The number of distinct words seen.
    pub fn len(&self) -> usize {
        self.word_counts.len()
    }

    /// Have no words been counted?
    pub fn is_empty(&self) -> bool {
        self.word_counts.is_empty()
    }

    /// The count of a word.
    pub fn count(
        &self,
        word: &str,
    ) -> C {
        self.word_counts.get(word).copied().unwrap_or_default()
    }

    /// Release the word counts and return them.
    pub fn release(self) -> NLHashMap<CompactString, C> {
        self.word_counts
    }

    /// Update word counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        let word_counts = &mut self.word_counts;
        for word in self.options.split(text.as_ref()) {
            match word_counts.get_mut(word.as_ref()) {
                Some(count) => *count += C::one(),
                None => {
                    word_counts.insert(CompactString::from(word), C::one());
                }
            }
        }
    }

    /// Update word counts inplace from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Freeze the counts into a [`WordVocab`].
    ///
    /// See [`WordVocab::from_counts`] for the id order.
    pub fn into_vocab<T: TokenType>(self) -> NLResult<WordVocab<T>> {
        WordVocab::from_counts(self.word_counts)
    }
}

/// Build a [`WordVocab`] from a gzip compressed training corpus.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(options)))]
pub fn build_vocab_gz_path<T, P>(
    path: P,
    options: &TokenizeOptions,
) -> NLResult<WordVocab<T>>
where
    T: TokenType,
    P: AsRef<Path> + core::fmt::Debug,
{
    let text = read_gz_text(path.as_ref())?;

    let mut counter: WordCounter<u64> = WordCounter::new(options.clone());
    counter.update_from_text(&text);

    let vocab = counter.into_vocab()?;
    log::info!(
        "built vocabulary of {} words from {}",
        vocab.len(),
        path.as_ref().display()
    );
    Ok(vocab)
}
