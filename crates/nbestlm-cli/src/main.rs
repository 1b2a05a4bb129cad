mod commands;
mod data_args;
mod input_output;
mod logging;

use clap::Parser;
use commands::Commands;

/// nbestlm
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_batches() {
        let args = Args::try_parse_from([
            "nbestlm",
            "batches",
            "data/",
            "--batch-size",
            "4",
            "--num-steps",
            "3",
            "--nbest",
            "--limit",
            "2",
        ])
        .unwrap();

        match args.command {
            Commands::Batches(cmd) => {
                assert!(cmd.nbest);
                assert_eq!(cmd.limit, Some(2));
                assert_eq!(cmd.shape.options().batch_size, 4);
                assert_eq!(cmd.shape.options().num_steps, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
