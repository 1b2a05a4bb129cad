use std::{fmt::Display, io::Write};

use nbestlm::{
    batching::{NBestBatcher, PlainBatcher},
    ndarray::Array2,
};

use crate::{
    data_args::{DataArgs, ShapeArgs},
    input_output::OutputArgs,
    logging::{self, LogArgs},
};

/// Args for the batches command.
#[derive(clap::Args, Debug)]
pub struct BatchesArgs {
    #[command(flatten)]
    data: DataArgs,

    #[command(flatten)]
    pub shape: ShapeArgs,

    /// Batch the validation n-best list instead of the validation corpus.
    #[arg(long)]
    pub nbest: bool,

    /// Stop after this many windows.
    #[arg(long, default_value = None)]
    pub limit: Option<usize>,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl BatchesArgs {
    /// Run the batches command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.init(logging::WARN)?;

        let data = self.data.load()?;
        let options = self.shape.options();
        let limit = self.limit.unwrap_or(usize::MAX);

        let mut writer = self.output.open_writer()?;

        if self.nbest {
            let eos = data.eos_id()?;
            let batcher = NBestBatcher::from_nbest(&data.valid_nbest, eos, &options)?;
            log::info!("{} n-best windows", batcher.epoch_size());

            for (step, (x, y, z)) in batcher.take(limit).enumerate() {
                writeln!(writer, "# window {step}")?;
                write_grid(&mut writer, "x", &x)?;
                write_grid(&mut writer, "y", &y)?;
                write_grid(&mut writer, "z", &z)?;
            }
        } else {
            let batcher = PlainBatcher::new(&data.valid, &options)?;
            log::info!("{} windows", batcher.epoch_size());

            for (step, (x, y)) in batcher.take(limit).enumerate() {
                writeln!(writer, "# window {step}")?;
                write_grid(&mut writer, "x", &x)?;
                write_grid(&mut writer, "y", &y)?;
            }
        }
        writer.flush()?;

        Ok(())
    }
}

fn write_grid<W, T>(
    writer: &mut W,
    name: &str,
    grid: &Array2<T>,
) -> std::io::Result<()>
where
    W: Write + ?Sized,
    T: Display,
{
    writeln!(writer, "{name}:")?;
    for row in grid.rows() {
        for (idx, value) in row.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, value)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use nbestlm::{nbest::TreeIndex, ndarray::array};

    use super::*;

    #[test]
    fn test_write_grid() {
        let mut buf: Vec<u8> = Vec::new();
        write_grid(&mut buf, "x", &array![[1u32, 2], [3, 4]]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "x:\n1 2\n3 4\n");

        let mut buf: Vec<u8> = Vec::new();
        write_grid(
            &mut buf,
            "z",
            &array![[TreeIndex::new(0, 1), TreeIndex::FILLER]],
        )
        .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "z:\n(0, 1) (-1, -1)\n");
    }
}
