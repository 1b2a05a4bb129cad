//! # Whitespace Tokenization
//!
//! Every newline is rewritten to the end-of-sequence marker, then the text
//! is split on the remaining whitespace. A newline directly after a word
//! is glued onto it (``"cat\n"`` becomes ``"cat<eos>"``); corpora are
//! expected to separate words from line ends with a space.

use std::borrow::Cow;

/// The default end-of-sequence marker.
pub const DEFAULT_EOS: &str = "<eos>";

/// Options for splitting text into words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeOptions {
    /// The token substituted for each newline.
    pub eos: String,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            eos: DEFAULT_EOS.to_string(),
        }
    }
}

impl TokenizeOptions {
    /// Set the end-of-sequence marker.
    pub fn with_eos<S: Into<String>>(
        self,
        eos: S,
    ) -> Self {
        Self { eos: eos.into() }
    }

    /// Split text into words.
    ///
    /// See [`split_words`].
    pub fn split<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = Cow<'a, str>> + 'a {
        split_words(text, &self.eos)
    }
}

/// Split text into whitespace-delimited words, with every `'\n'` rewritten
/// to `eos`.
///
/// Equivalent to replacing each newline with `eos` and then splitting on
/// whitespace; words without a newline are borrowed from `text`.
/// `eos` must not contain whitespace.
pub fn split_words<'a>(
    text: &'a str,
    eos: &'a str,
) -> impl Iterator<Item = Cow<'a, str>> + 'a {
    text.split(|c: char| c != '\n' && c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(move |word| {
            if word.contains('\n') {
                Cow::Owned(word.replace('\n', eos))
            } else {
                Cow::Borrowed(word)
            }
        })
}
