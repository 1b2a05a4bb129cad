use std::{io::Write, path::PathBuf};

use nbestlm::{
    corpus::{CorpusEncoder, DEFAULT_EOS, TokenizeOptions},
    vocab::{WordVocab, io::load_vocab_path},
};

use crate::{
    input_output::OutputArgs,
    logging::{self, LogArgs},
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Gzip compressed corpus to encode.
    input: PathBuf,

    /// Vocabulary file, as written by the vocab command.
    #[arg(long)]
    vocab: PathBuf,

    /// End-of-sequence marker substituted for newlines.
    #[arg(long, default_value = DEFAULT_EOS)]
    eos: String,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    ///
    /// Writes space separated ids, breaking the output line after each
    /// end-of-sequence id.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.init(logging::WARN)?;

        let vocab: WordVocab<u32> = load_vocab_path(&self.vocab)?;
        let options = TokenizeOptions::default().with_eos(self.eos.as_str());
        let eos = vocab.eos_token(&options);

        let encoder = CorpusEncoder::new(&vocab, options);
        let tokens = encoder.encode_gz_path(&self.input)?;

        let mut writer = self.output.open_writer()?;
        let mut line_start = true;
        for token in tokens {
            write!(writer, "{}{}", if line_start { "" } else { " " }, token)?;
            line_start = Some(token) == eos;
            if line_start {
                writeln!(writer)?;
            }
        }
        if !line_start {
            writeln!(writer)?;
        }
        writer.flush()?;

        Ok(())
    }
}
