use std::path::PathBuf;

use nbestlm::{
    batching::BatchOptions,
    corpus::{DEFAULT_EOS, TokenizeOptions},
    dataset::{
        CorpusData,
        CorpusDataOptions,
        DataLayout,
        TRAIN_FILE,
        VALID_FILE,
        VALID_NBEST_FILE,
        load_corpus_data,
    },
};

/// Data directory arg group.
#[derive(clap::Args, Debug)]
pub struct DataArgs {
    /// Directory holding the training, validation, and n-best files.
    pub data_path: PathBuf,

    /// Training corpus filename.
    #[arg(long, default_value = TRAIN_FILE)]
    pub train: String,

    /// Validation corpus filename.
    #[arg(long, default_value = VALID_FILE)]
    pub valid: String,

    /// Validation n-best filename.
    #[arg(long, default_value = VALID_NBEST_FILE)]
    pub nbest_file: String,

    /// End-of-sequence marker substituted for newlines.
    #[arg(long, default_value = DEFAULT_EOS)]
    pub eos: String,
}

impl DataArgs {
    /// The corpus loading options.
    pub fn options(&self) -> CorpusDataOptions {
        CorpusDataOptions::default()
            .with_layout(
                DataLayout::default()
                    .with_train(self.train.as_str())
                    .with_valid(self.valid.as_str())
                    .with_valid_nbest(self.nbest_file.as_str()),
            )
            .with_tokenize(TokenizeOptions::default().with_eos(self.eos.as_str()))
    }

    /// The training corpus path.
    pub fn train_path(&self) -> PathBuf {
        self.data_path.join(&self.train)
    }

    /// Load the data directory.
    pub fn load(&self) -> Result<CorpusData<u32>, Box<dyn std::error::Error>> {
        Ok(load_corpus_data(&self.data_path, &self.options())?)
    }
}

/// Batch shape arg group.
#[derive(clap::Args, Debug)]
pub struct ShapeArgs {
    /// Rows per batch.
    #[arg(long, default_value = "20")]
    batch_size: usize,

    /// Steps (columns) per window.
    #[arg(long, default_value = "20")]
    num_steps: usize,
}

impl ShapeArgs {
    /// The batch options.
    pub fn options(&self) -> BatchOptions {
        BatchOptions::new(self.batch_size, self.num_steps)
    }
}
