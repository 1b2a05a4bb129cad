//! # Corpus Data Directory
//!
//! A data directory holds the gzip compressed training corpus,
//! validation corpus, and validation n-best list.

use std::path::{Path, PathBuf};

use crate::{
    corpus::{CorpusEncoder, TokenizeOptions, require_input},
    errors::{NBestLmError, NLResult},
    nbest::{NBestData, NBestParser},
    types::TokenType,
    vocab::{WordVocab, build_vocab_gz_path},
};

/// The default training corpus filename.
pub const TRAIN_FILE: &str = "train.gz";

/// The default validation corpus filename.
pub const VALID_FILE: &str = "dev.gz";

/// The default validation n-best filename.
pub const VALID_NBEST_FILE: &str = "dev_nbest.gz";

/// Filenames within a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    /// The training corpus; the vocabulary is built from this.
    pub train: String,

    /// The validation corpus.
    pub valid: String,

    /// The validation n-best list.
    pub valid_nbest: String,
}

impl Default for DataLayout {
    fn default() -> Self {
        Self {
            train: TRAIN_FILE.to_string(),
            valid: VALID_FILE.to_string(),
            valid_nbest: VALID_NBEST_FILE.to_string(),
        }
    }
}

impl DataLayout {
    /// Set the training corpus filename.
    pub fn with_train<S: Into<String>>(
        self,
        train: S,
    ) -> Self {
        Self {
            train: train.into(),
            ..self
        }
    }

    /// Set the validation corpus filename.
    pub fn with_valid<S: Into<String>>(
        self,
        valid: S,
    ) -> Self {
        Self {
            valid: valid.into(),
            ..self
        }
    }

    /// Set the validation n-best filename.
    pub fn with_valid_nbest<S: Into<String>>(
        self,
        valid_nbest: S,
    ) -> Self {
        Self {
            valid_nbest: valid_nbest.into(),
            ..self
        }
    }

    /// Resolved ``(train, valid, valid_nbest)`` paths under `data_path`.
    pub fn paths<P: AsRef<Path>>(
        &self,
        data_path: P,
    ) -> (PathBuf, PathBuf, PathBuf) {
        let dir = data_path.as_ref();
        (
            dir.join(&self.train),
            dir.join(&self.valid),
            dir.join(&self.valid_nbest),
        )
    }
}

/// Options for [`load_corpus_data`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusDataOptions {
    /// The data directory layout.
    pub layout: DataLayout,

    /// The tokenize options.
    pub tokenize: TokenizeOptions,
}

impl CorpusDataOptions {
    /// Set the data directory layout.
    pub fn with_layout(
        self,
        layout: DataLayout,
    ) -> Self {
        Self { layout, ..self }
    }

    /// Set the tokenize options.
    pub fn with_tokenize(
        self,
        tokenize: TokenizeOptions,
    ) -> Self {
        Self { tokenize, ..self }
    }
}

/// Everything loaded from a data directory.
#[derive(Debug, Clone)]
pub struct CorpusData<T: TokenType> {
    /// The vocabulary built from the training corpus.
    pub vocab: WordVocab<T>,

    /// The encoded training corpus.
    pub train: Vec<T>,

    /// The encoded validation corpus.
    pub valid: Vec<T>,

    /// The parsed validation n-best list.
    pub valid_nbest: NBestData<T>,

    /// The tokenize options used while reading.
    pub tokenize: TokenizeOptions,
}

impl<T: TokenType> CorpusData<T> {
    /// The id of the end-of-sequence marker.
    ///
    /// ## Returns
    /// The id; or [`NBestLmError::UnknownToken`] if the training corpus
    /// had no standalone line ends.
    ///
    /// See [`WordVocab::eos_token`].
    pub fn eos_id(&self) -> NLResult<T> {
        self.vocab
            .eos_token(&self.tokenize)
            .ok_or_else(|| NBestLmError::UnknownToken {
                token: self.tokenize.eos.clone(),
                position: 0,
            })
    }
}

/// Load a data directory.
///
/// Builds the vocabulary from the training corpus, encodes the training
/// and validation corpora, and parses the validation n-best list.
/// All three inputs are checked for existence before any is read.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(options)))]
pub fn load_corpus_data<T, P>(
    data_path: P,
    options: &CorpusDataOptions,
) -> NLResult<CorpusData<T>>
where
    T: TokenType,
    P: AsRef<Path> + core::fmt::Debug,
{
    let (train_path, valid_path, nbest_path) = options.layout.paths(&data_path);
    for path in [&train_path, &valid_path, &nbest_path] {
        require_input(path)?;
    }

    log::info!("loading corpus data from {}", data_path.as_ref().display());

    let vocab: WordVocab<T> = build_vocab_gz_path(&train_path, &options.tokenize)?;

    let encoder = CorpusEncoder::new(&vocab, options.tokenize.clone());
    let train = encoder.encode_gz_path(&train_path)?;
    let valid = encoder.encode_gz_path(&valid_path)?;

    let parser = NBestParser::new(&vocab, options.tokenize.clone());
    let valid_nbest = parser.parse_gz_path(&nbest_path)?;

    Ok(CorpusData {
        vocab,
        train,
        valid,
        valid_nbest,
        tokenize: options.tokenize.clone(),
    })
}
