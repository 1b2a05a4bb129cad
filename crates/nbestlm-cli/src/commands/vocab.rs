use nbestlm::vocab::{WordVocab, build_vocab_gz_path, io::write_vocab};

use crate::{
    data_args::DataArgs,
    input_output::OutputArgs,
    logging::{self, LogArgs},
};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[command(flatten)]
    data: DataArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl VocabArgs {
    /// Run the vocab command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.init(logging::INFO)?;

        let path = self.data.train_path();
        let vocab: WordVocab<u32> = build_vocab_gz_path(&path, &self.data.options().tokenize)?;

        log::info!("Vocabulary Size: {}", vocab.len());

        let mut writer = self.output.open_writer()?;
        write_vocab(&vocab, &mut writer)?;

        Ok(())
    }
}
