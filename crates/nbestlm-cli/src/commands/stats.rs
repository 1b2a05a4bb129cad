use nbestlm::batching::{NBestBatcher, PlainBatcher};

use crate::{
    data_args::{DataArgs, ShapeArgs},
    logging::{self, LogArgs},
};

/// Args for the stats command.
#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    data: DataArgs,

    #[command(flatten)]
    shape: ShapeArgs,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl StatsArgs {
    /// Run the stats command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.init(logging::INFO)?;

        let data = self.data.load()?;
        let options = self.shape.options();

        println!("vocab size:      {}", data.vocab.len());
        println!("train tokens:    {}", data.train.len());
        println!("valid tokens:    {}", data.valid.len());
        println!(
            "n-best:          {} groups, {} hypotheses, {} tokens",
            data.valid_nbest.num_groups(),
            data.valid_nbest.num_hypotheses(),
            data.valid_nbest.data.len()
        );

        println!(
            "batch shape:     batch_size={}, num_steps={}",
            options.batch_size, options.num_steps
        );

        for (name, tokens) in [("train", &data.train), ("valid", &data.valid)] {
            match PlainBatcher::new(tokens, &options) {
                Ok(batcher) => println!("{name} epoch size: {}", batcher.epoch_size()),
                Err(err) => log::warn!("{name}: {err}"),
            }
        }

        let eos = data.eos_id()?;
        match NBestBatcher::from_nbest(&data.valid_nbest, eos, &options) {
            Ok(batcher) => println!("n-best epoch size: {}", batcher.epoch_size()),
            Err(err) => log::warn!("n-best: {err}"),
        }

        Ok(())
    }
}
