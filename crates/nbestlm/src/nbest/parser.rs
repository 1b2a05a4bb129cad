//! # N-Best List Parser
//!
//! The n-best format is line oriented:
//! ```terminaloutput
//! {COUNT}
//! {GOLD} {TEST} {MATCHED}
//!  {SPACE-PREFIXED HYPOTHESIS}
//! ... ({COUNT} metadata/hypothesis pairs, then the next {COUNT})
//! ```

use std::{
    io::{BufRead, BufReader, Read},
    path::Path,
};

use crate::{
    corpus::{TokenizeOptions, open_gz_reader},
    errors::{NBestLmError, NLResult},
    nbest::{HypothesisScore, NBestData, TreeIndex},
    types::TokenType,
    vocab::WordVocab,
};

/// What the parser expects on the next line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// A hypothesis count opening a new group.
    Count,

    /// A ``gold test matched`` line.
    Metadata {
        remaining: usize,
    },

    /// A space-prefixed hypothesis line.
    Hypothesis {
        remaining: usize,
        score: HypothesisScore,
    },
}

/// Parses n-best lists into an [`NBestData`].
#[derive(Debug, Clone)]
pub struct NBestParser<'a, T: TokenType> {
    vocab: &'a WordVocab<T>,
    options: TokenizeOptions,
}

impl<'a, T: TokenType> NBestParser<'a, T> {
    /// Create a new parser.
    pub fn new(
        vocab: &'a WordVocab<T>,
        options: TokenizeOptions,
    ) -> Self {
        Self { vocab, options }
    }

    /// Parse a gzip compressed n-best file.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn parse_gz_path<P>(
        &self,
        path: P,
    ) -> NLResult<NBestData<T>>
    where
        P: AsRef<Path> + core::fmt::Debug,
    {
        let nbest = self.parse_lines(open_gz_reader(path.as_ref())?)?;
        log::info!(
            "parsed {} n-best groups ({} hypotheses, {} tokens) from {}",
            nbest.num_groups(),
            nbest.num_hypotheses(),
            nbest.data.len(),
            path.as_ref().display()
        );
        Ok(nbest)
    }

    /// Parse an n-best list from a reader.
    pub fn parse_reader<R: Read>(
        &self,
        reader: R,
    ) -> NLResult<NBestData<T>> {
        self.parse_lines(BufReader::new(reader))
    }

    /// Parse an in-memory n-best list.
    pub fn parse_str(
        &self,
        text: &str,
    ) -> NLResult<NBestData<T>> {
        self.parse_lines(text.as_bytes())
    }

    /// Parse an n-best list from a line reader.
    ///
    /// Any grammar violation aborts the parse with
    /// [`NBestLmError::MalformedRecord`]; there are no partial results.
    pub fn parse_lines<R: BufRead>(
        &self,
        mut reader: R,
    ) -> NLResult<NBestData<T>> {
        let mut nbest = NBestData::default();
        let mut group: Vec<HypothesisScore> = Vec::new();
        let mut state = ParseState::Count;

        // Blank lines are only tolerated at the end of the input.
        let mut blank_line: Option<usize> = None;
        let mut line_no = 0;

        // Lines keep their newline; it becomes part of the last hypothesis word.
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            line_no += 1;

            if line.trim().is_empty() && state == ParseState::Count {
                blank_line.get_or_insert(line_no);
                continue;
            }
            if let Some(blank) = blank_line {
                return Err(malformed(blank, "blank line between records"));
            }

            state = match state {
                ParseState::Count => {
                    let count = parse_count(&line).map_err(|reason| malformed(line_no, reason))?;
                    ParseState::Metadata { remaining: count }
                }
                ParseState::Metadata { remaining } => {
                    let score =
                        parse_metadata(&line).map_err(|reason| malformed(line_no, reason))?;
                    ParseState::Hypothesis { remaining, score }
                }
                ParseState::Hypothesis { remaining, score } => {
                    if !line.starts_with(' ') {
                        return Err(malformed(
                            line_no,
                            format!(
                                "expected a space-prefixed hypothesis, found {:?}",
                                line.trim_end()
                            ),
                        ));
                    }

                    self.push_hypothesis(&mut nbest, group.len(), &line)?;
                    group.push(score);

                    match remaining - 1 {
                        0 => {
                            nbest.scores.push(core::mem::take(&mut group));
                            ParseState::Count
                        }
                        remaining => ParseState::Metadata { remaining },
                    }
                }
            };
        }

        match state {
            ParseState::Count => Ok(nbest),
            ParseState::Metadata { remaining } | ParseState::Hypothesis { remaining, .. } => {
                Err(malformed(
                    line_no + 1,
                    format!("unexpected end of input; {remaining} hypotheses missing"),
                ))
            }
        }
    }

    /// Encode one hypothesis line onto `nbest`.
    ///
    /// The line's own newline, if any, is rewritten to the end-of-sequence
    /// marker exactly as in corpus text.
    fn push_hypothesis(
        &self,
        nbest: &mut NBestData<T>,
        hypothesis: usize,
        line: &str,
    ) -> NLResult<()> {
        let start = nbest.data.len();
        let words = self.options.split(line);

        self.vocab
            .extend_encoded(words, &mut nbest.data)
            .map_err(|err| match err {
                NBestLmError::UnknownToken { token, position } => NBestLmError::UnknownToken {
                    token,
                    position: start + position,
                },
                err => err,
            })?;

        let link = TreeIndex::new(nbest.scores.len(), hypothesis);
        nbest.idx2tree.resize(nbest.data.len(), link);
        Ok(())
    }
}

fn malformed<S: Into<String>>(
    line: usize,
    reason: S,
) -> NBestLmError {
    NBestLmError::MalformedRecord {
        line,
        reason: reason.into(),
    }
}

fn parse_count(line: &str) -> Result<usize, String> {
    let line = line.trim();
    match line.parse::<usize>() {
        Ok(0) => Err("hypothesis count must be positive".to_string()),
        Ok(count) => Ok(count),
        Err(e) => Err(format!("expected a hypothesis count, found {line:?}: {e}")),
    }
}

fn parse_metadata(line: &str) -> Result<HypothesisScore, String> {
    let line = line.trim_end();
    if line.starts_with(' ') {
        return Err(format!(
            "expected `gold test matched`, found hypothesis {line:?}"
        ));
    }

    let fields = line
        .split_whitespace()
        .map(str::parse::<u32>)
        .collect::<Result<Vec<u32>, _>>()
        .map_err(|e| format!("expected non-negative integer fields in {line:?}: {e}"))?;

    match fields.as_slice() {
        &[gold, test, matched] => Ok(HypothesisScore::new(gold, test, matched)),
        _ => Err(format!(
            "expected 3 fields `gold test matched`, found {} in {line:?}",
            fields.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::gz_io::testing::write_gz_text;

    const NBEST: &str = concat!(
        "2\n",
        "3 3 3\n",
        " the cat sat \n",
        "3 2 1\n",
        " the cat \n",
        "1\n",
        "2 2 2\n",
        " a dog \n",
    );

    fn vocab() -> WordVocab<u32> {
        WordVocab::from_words(["<eos>", "the", "cat", "sat", "a", "dog"]).unwrap()
    }

    fn expect_malformed(
        text: &str,
        expected_line: usize,
    ) {
        let vocab = vocab();
        let parser = NBestParser::new(&vocab, TokenizeOptions::default());
        match parser.parse_str(text) {
            Err(NBestLmError::MalformedRecord { line, .. }) => assert_eq!(line, expected_line),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse() {
        let vocab = vocab();
        let parser = NBestParser::new(&vocab, TokenizeOptions::default());

        let nbest = parser.parse_str(NBEST).unwrap();

        assert_eq!(nbest.data, vec![1, 2, 3, 0, 1, 2, 0, 4, 5, 0]);
        assert_eq!(
            nbest.scores,
            vec![
                vec![HypothesisScore::new(3, 3, 3), HypothesisScore::new(3, 2, 1)],
                vec![HypothesisScore::new(2, 2, 2)],
            ]
        );

        let links: Vec<(i64, i64)> = nbest
            .idx2tree
            .iter()
            .map(|t| (t.group, t.hypothesis))
            .collect();
        assert_eq!(
            links,
            vec![
                (0, 0),
                (0, 0),
                (0, 0),
                (0, 0),
                (0, 1),
                (0, 1),
                (0, 1),
                (1, 0),
                (1, 0),
                (1, 0),
            ]
        );
        assert_eq!(nbest.idx2tree.len(), nbest.data.len());
    }

    #[test]
    fn test_empty_input() {
        let vocab = vocab();
        let parser = NBestParser::new(&vocab, TokenizeOptions::default());

        let nbest = parser.parse_str("").unwrap();
        assert_eq!(nbest, NBestData::default());
    }

    #[test]
    fn test_trailing_blank_lines() {
        let vocab = vocab();
        let parser = NBestParser::new(&vocab, TokenizeOptions::default());

        let nbest = parser.parse_str(&format!("{NBEST}\n\n")).unwrap();
        assert_eq!(nbest.num_groups(), 2);
    }

    #[test]
    fn test_blank_line_between_records() {
        expect_malformed("1\n1 1 1\n a \n\n1\n1 1 1\n a \n", 4);
    }

    #[test]
    fn test_two_field_metadata() {
        expect_malformed("1\n3 3\n the cat \n", 2);
    }

    #[test]
    fn test_bad_metadata_fields() {
        expect_malformed("1\n3 x 3\n the cat \n", 2);
        expect_malformed("1\n3 3 3 3\n the cat \n", 2);
        expect_malformed("1\n the cat \n", 2);
    }

    #[test]
    fn test_bad_count() {
        expect_malformed("two\n", 1);
        expect_malformed("0\n", 1);
        expect_malformed("1\n1 1 1\n a \n1 1 1\n", 4);
    }

    #[test]
    fn test_negative_score() {
        let vocab = vocab();
        let parser = NBestParser::new(&vocab, TokenizeOptions::default());

        match parser.parse_str("1\n3 -1 3\n the cat \n") {
            Err(NBestLmError::MalformedRecord { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("non-negative integer"), "{reason}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_hypothesis_without_space() {
        expect_malformed("1\n1 1 1\na dog \n", 3);
    }

    #[test]
    fn test_truncated_group() {
        expect_malformed("2\n1 1 1\n a \n", 4);
        expect_malformed("1\n1 1 1\n", 3);
    }

    #[test]
    fn test_unknown_token() {
        let vocab = vocab();
        let parser = NBestParser::new(&vocab, TokenizeOptions::default());

        match parser.parse_str("2\n1 1 1\n a \n1 1 1\n a cow \n") {
            Err(NBestLmError::UnknownToken { token, position }) => {
                assert_eq!(token, "cow");
                assert_eq!(position, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_newline_glued_to_last_word() {
        let vocab = vocab();
        let parser = NBestParser::new(&vocab, TokenizeOptions::default());

        match parser.parse_str("1\n3 3 3\n the cat sat\n") {
            Err(NBestLmError::UnknownToken { token, position }) => {
                assert_eq!(token, "sat<eos>");
                assert_eq!(position, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let glued: WordVocab<u32> = WordVocab::from_words(["the", "cat", "sat<eos>"]).unwrap();
        let parser = NBestParser::new(&glued, TokenizeOptions::default());
        let nbest = parser.parse_str("1\n3 3 3\n the cat sat\n").unwrap();
        assert_eq!(nbest.data, vec![0, 1, 2]);
        assert_eq!(nbest.idx2tree.len(), 3);
    }

    #[test]
    fn test_unterminated_last_hypothesis() {
        let vocab = vocab();
        let parser = NBestParser::new(&vocab, TokenizeOptions::default());

        let nbest = parser.parse_str("1\n2 2 2\n a dog").unwrap();
        assert_eq!(nbest.data, vec![4, 5]);
        assert_eq!(nbest.idx2tree, vec![TreeIndex::new(0, 0); 2]);
    }

    #[test]
    fn test_parse_gz_path() {
        tempdir::TempDir::new("nbest_test")
            .and_then(|dir| {
                let path = dir.path().join("dev_nbest.gz");
                write_gz_text(&path, NBEST);

                let vocab = vocab();
                let parser = NBestParser::new(&vocab, TokenizeOptions::default());

                let from_file = parser.parse_gz_path(&path).unwrap();
                let from_reader = parser.parse_reader(NBEST.as_bytes()).unwrap();
                assert_eq!(from_file, from_reader);

                Ok(())
            })
            .unwrap();
    }
}
