use crate::commands::{
    batches::BatchesArgs,
    encode::EncodeArgs,
    stats::StatsArgs,
    vocab::VocabArgs,
};

pub mod batches;
pub mod encode;
pub mod stats;
pub mod vocab;

/// Subcommands for nbestlm
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build the vocabulary from the training corpus.
    Vocab(VocabArgs),

    /// Encode a gzip corpus with a saved vocabulary.
    Encode(EncodeArgs),

    /// Report corpus sizes and epoch sizes.
    Stats(StatsArgs),

    /// Print batch windows.
    Batches(BatchesArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Stats(cmd) => cmd.run(),
            Commands::Batches(cmd) => cmd.run(),
        }
    }
}
