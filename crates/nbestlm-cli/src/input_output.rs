use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Output destination arg group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Write to this file instead of stdout; "-" also means stdout.
    #[arg(short, long, default_value = None)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// The output file, or `None` for stdout.
    pub fn target(&self) -> Option<&Path> {
        self.output.as_deref().filter(|p| *p != Path::new("-"))
    }

    /// Open a buffered writer for the output.
    pub fn open_writer(&self) -> std::io::Result<Box<dyn Write>> {
        Ok(match self.target() {
            Some(path) => {
                log::info!("writing to {}", path.display());
                Box::new(BufWriter::new(File::create(path)?))
            }
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}
