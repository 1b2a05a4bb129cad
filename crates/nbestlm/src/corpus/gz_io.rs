//! # Gzip Input

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use flate2::read::GzDecoder;

use crate::errors::{NBestLmError, NLResult};

/// Check that an input file exists.
pub fn require_input<P: AsRef<Path>>(path: P) -> NLResult<()> {
    let path = path.as_ref();
    if path.is_file() {
        Ok(())
    } else {
        Err(NBestLmError::MissingInput {
            path: path.to_path_buf(),
        })
    }
}

/// Open a buffered, decompressing reader over a gzip file.
pub fn open_gz_reader<P: AsRef<Path>>(path: P) -> NLResult<BufReader<GzDecoder<File>>> {
    let path = path.as_ref();
    require_input(path)?;
    Ok(BufReader::new(GzDecoder::new(File::open(path)?)))
}

/// Read a whole gzip file as UTF-8 text.
pub fn read_gz_text<P: AsRef<Path>>(path: P) -> NLResult<String> {
    let path = path.as_ref();
    let mut text = String::new();
    open_gz_reader(path)?.read_to_string(&mut text)?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
