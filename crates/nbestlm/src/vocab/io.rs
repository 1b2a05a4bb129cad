//! # Vocabulary IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{NBestLmError, NLResult},
    types::TokenType,
    vocab::WordVocab,
};

/// Load a [`WordVocab`] from a vocab file.
///
/// Lines are:
/// ```terminaloutput
/// {WORD} {TOKEN}
/// ```
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_vocab_path<T, P>(path: P) -> NLResult<WordVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_vocab(reader)
}

/// Read a [`WordVocab`] from a vocab line reader.
///
/// Tokens must form the dense range ``0..N``; lines may appear in any order.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_vocab<T, R>(reader: R) -> NLResult<WordVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut entries: Vec<(usize, String)> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let parts = line.split_whitespace().collect::<Vec<&str>>();
        if parts.len() != 2 {
            return Err(NBestLmError::Parse(format!(
                "line {}: expected `{{WORD}} {{TOKEN}}`, found {:?}",
                idx + 1,
                line
            )));
        }

        let id: usize = parts[1]
            .parse()
            .map_err(|e: core::num::ParseIntError| {
                NBestLmError::Parse(format!("line {}: {e}", idx + 1))
            })?;

        entries.push((id, parts[0].to_string()));
    }

    entries.sort();
    for (expected, (id, word)) in entries.iter().enumerate() {
        if *id != expected {
            return Err(NBestLmError::Parse(format!(
                "token ids are not dense: {word:?} has id {id}, expected {expected}"
            )));
        }
    }

    WordVocab::from_words(entries.into_iter().map(|(_, word)| word))
}

/// Save a [`WordVocab`] to a vocab file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_vocab_path<T: TokenType, P: AsRef<Path>>(
    vocab: &WordVocab<T>,
    path: P,
) -> NLResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocab(vocab, &mut writer)
}

/// Write a [`WordVocab`] to a [`Write`] writer, in id order.
pub fn write_vocab<T, W>(
    vocab: &WordVocab<T>,
    writer: &mut W,
) -> NLResult<()>
where
    T: TokenType,
    W: Write,
{
    for (word, token) in vocab.iter() {
        writeln!(writer, "{word} {token}")?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_vocab() {
        type T = u32;

        let vocab: WordVocab<T> = WordVocab::from_words(["<eos>", "the", "cat"]).unwrap();

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("vocab.txt");

                save_vocab_path(&vocab, &path).expect("Failed to save vocab");

                let loaded: WordVocab<T> = load_vocab_path(&path).expect("Failed to load vocab");

                assert_eq!(&loaded, &vocab);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_write_format() {
        let vocab: WordVocab<u16> = WordVocab::from_words(["a", "b"]).unwrap();

        let mut buf: Vec<u8> = Vec::new();
        write_vocab(&vocab, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a 0\nb 1\n");
    }

    #[test]
    fn test_read_out_of_order() {
        let vocab: WordVocab<u32> = read_vocab("b 1\na 0\n".as_bytes()).unwrap();
        assert_eq!(vocab.token_id("a"), Some(0));
        assert_eq!(vocab.token_id("b"), Some(1));
    }

    #[test]
    fn test_read_errors() {
        assert!(matches!(
            read_vocab::<u32, _>("a 0\nb 2\n".as_bytes()),
            Err(NBestLmError::Parse(_))
        ));
        assert!(matches!(
            read_vocab::<u32, _>("a 0 extra\n".as_bytes()),
            Err(NBestLmError::Parse(_))
        ));
        assert!(matches!(
            read_vocab::<u32, _>("a zero\n".as_bytes()),
            Err(NBestLmError::Parse(_))
        ));
        assert!(matches!(
            read_vocab::<u32, _>("a 0\na 1\n".as_bytes()),
            Err(NBestLmError::Parse(_))
        ));
    }
}
