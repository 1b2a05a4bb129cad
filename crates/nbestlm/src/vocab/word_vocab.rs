//! # Word Vocabulary

use core::cmp::Reverse;

use compact_str::CompactString;

use crate::{
    corpus::TokenizeOptions,
    errors::{NBestLmError, NLResult},
    types::{CountType, NLHashMap, TokenType, hash_map_with_capacity},
};

/// An immutable ``{word <-> id}`` vocabulary with dense ids ``0..len``.
#[derive(Debug, Clone, PartialEq)]
pub struct WordVocab<T: TokenType> {
    words: Vec<CompactString>,
    index: NLHashMap<CompactString, T>,
}

impl<T: TokenType> Default for WordVocab<T> {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            index: hash_map_with_capacity(0),
        }
    }
}

impl<T: TokenType> WordVocab<T> {
    /// Build a vocabulary from word counts.
    ///
    /// Ids are assigned in order of descending count;
    /// ties are broken by ascending word order.
    pub fn from_counts<I, K, C>(counts: I) -> NLResult<Self>
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<CompactString>,
        C: CountType,
    {
        let mut pairs: Vec<(CompactString, C)> =
            counts.into_iter().map(|(k, c)| (k.into(), c)).collect();
        pairs.sort_by(|(a_word, a_count), (b_word, b_count)| {
            (Reverse(a_count), a_word).cmp(&(Reverse(b_count), b_word))
        });

        Self::from_words(pairs.into_iter().map(|(word, _)| word))
    }

    /// Build a vocabulary from words in id order.
    ///
    /// The ``i``-th word receives id ``i``; duplicate words are rejected.
    pub fn from_words<I, K>(words: I) -> NLResult<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<CompactString>,
    {
        let words: Vec<CompactString> = words.into_iter().map(Into::into).collect();

        let mut index = hash_map_with_capacity(words.len());
        for (id, word) in words.iter().enumerate() {
            let token = T::from_usize(id).ok_or(NBestLmError::TokenOutOfRange(id))?;
            if index.insert(word.clone(), token).is_some() {
                return Err(NBestLmError::Parse(format!("duplicate word {word:?}")));
            }
        }

        Ok(Self { words, index })
    }

    /// The number of words in the vocabulary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up the id of a word.
    pub fn token_id(
        &self,
        word: &str,
    ) -> Option<T> {
        self.index.get(word).copied()
    }

    /// Look up the id of the end-of-sequence marker of `options`.
    ///
    /// `None` when the corpus the vocabulary was built from had no
    /// standalone line ends.
    pub fn eos_token(
        &self,
        options: &TokenizeOptions,
    ) -> Option<T> {
        self.token_id(&options.eos)
    }

    /// Look up the word for an id.
    pub fn word(
        &self,
        token: T,
    ) -> Option<&str> {
        token
            .to_usize()
            .and_then(|idx| self.words.get(idx))
            .map(CompactString::as_str)
    }

    /// Iterate over ``(word, id)`` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> + '_ {
        self.words
            .iter()
            .map(|word| (word.as_str(), self.index[word.as_str()]))
    }

    /// Encode a word stream.
    ///
    /// ## Returns
    /// The ids; or [`NBestLmError::UnknownToken`] for the first word
    /// not in the vocabulary.
    pub fn encode_words<I>(
        &self,
        words: I,
    ) -> NLResult<Vec<T>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut tokens = Vec::new();
        self.extend_encoded(words, &mut tokens)?;
        Ok(tokens)
    }

    /// Encode a word stream, appending to `tokens`.
    ///
    /// Positions reported in errors are relative to the start of `words`.
    pub fn extend_encoded<I>(
        &self,
        words: I,
        tokens: &mut Vec<T>,
    ) -> NLResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for (position, word) in words.into_iter().enumerate() {
            let word = word.as_ref();
            match self.token_id(word) {
                Some(token) => tokens.push(token),
                None => {
                    return Err(NBestLmError::UnknownToken {
                        token: word.to_string(),
                        position,
                    });
                }
            }
        }
        Ok(())
    }

    /// Decode ids back into words.
    ///
    /// Returns `None` if any id is outside the vocabulary.
    pub fn decode_tokens(
        &self,
        tokens: &[T],
    ) -> Option<Vec<&str>> {
        tokens.iter().map(|&t| self.word(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_counts_order() {
        let vocab: WordVocab<u32> =
            WordVocab::from_counts(vec![("b", 1u64), ("a", 2), ("c", 2), ("d", 5)]).unwrap();

        let pairs: Vec<(&str, u32)> = vocab.iter().collect();
        assert_eq!(pairs, vec![("d", 0), ("a", 1), ("c", 2), ("b", 3)]);
    }

    #[test]
    fn test_simple_scenario() {
        let vocab: WordVocab<u32> = WordVocab::from_counts(vec![("a", 2u32), ("b", 1)]).unwrap();
        assert_eq!(vocab.token_id("a"), Some(0));
        assert_eq!(vocab.token_id("b"), Some(1));

        assert_eq!(vocab.encode_words(["a", "b", "a"]).unwrap(), vec![0, 1, 0]);
        assert_eq!(vocab.decode_tokens(&[1, 0]), Some(vec!["b", "a"]));
        assert_eq!(vocab.decode_tokens(&[7]), None);
    }

    #[test]
    fn test_eos_token() {
        let vocab: WordVocab<u32> = WordVocab::from_words(["a", "<eos>", "</s>"]).unwrap();

        assert_eq!(vocab.eos_token(&TokenizeOptions::default()), Some(1));
        assert_eq!(
            vocab.eos_token(&TokenizeOptions::default().with_eos("</s>")),
            Some(2)
        );
        assert_eq!(vocab.eos_token(&TokenizeOptions::default().with_eos("EOS")), None);
    }

    #[test]
    fn test_unknown_token() {
        let vocab: WordVocab<u16> = WordVocab::from_words(["a", "b"]).unwrap();

        match vocab.encode_words(["a", "b", "zebra", "a"]) {
            Err(NBestLmError::UnknownToken { token, position }) => {
                assert_eq!(token, "zebra");
                assert_eq!(position, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_words() {
        assert!(matches!(
            WordVocab::<u32>::from_words(["a", "b", "a"]),
            Err(NBestLmError::Parse(_))
        ));
    }

    #[test]
    fn test_token_overflow() {
        let words: Vec<String> = (0..300).map(|i| format!("w{i}")).collect();
        assert!(matches!(
            WordVocab::<u8>::from_words(words),
            Err(NBestLmError::TokenOutOfRange(256))
        ));
    }

    #[test]
    fn test_empty() {
        let vocab: WordVocab<u32> = WordVocab::from_counts(Vec::<(String, u32)>::new()).unwrap();
        assert!(vocab.is_empty());
        assert_eq!(vocab, WordVocab::default());
        assert_eq!(vocab.word(0), None);
    }

    proptest::proptest! {
        /// Ids are dense and id 0 holds a maximal count.
        #[test]
        fn dense_ids_and_most_frequent_first(
            words in proptest::collection::vec("[a-e]{1,3}", 1..60)
        ) {
            let mut counts: NLHashMap<String, u32> = hash_map_with_capacity(words.len());
            for w in &words {
                *counts.entry(w.clone()).or_default() += 1;
            }

            let vocab: WordVocab<u32> = WordVocab::from_counts(counts.clone()).unwrap();
            proptest::prop_assert_eq!(vocab.len(), counts.len());

            let mut ids: Vec<u32> = vocab.iter().map(|(_, id)| id).collect();
            ids.sort();
            let expected: Vec<u32> = (0..counts.len() as u32).collect();
            proptest::prop_assert_eq!(ids, expected);

            let first = vocab.word(0).unwrap();
            let max = counts.values().copied().max().unwrap();
            proptest::prop_assert_eq!(counts[first], max);

            let encoded = vocab.encode_words(words.iter().map(String::as_str)).unwrap();
            proptest::prop_assert_eq!(encoded.len(), words.len());
        }
    }
}
