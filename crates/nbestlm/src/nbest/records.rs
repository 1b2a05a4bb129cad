//! # N-Best Records

use core::fmt;

use crate::types::TokenType;

/// Word-level match statistics of one hypothesis against its reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HypothesisScore {
    /// Count on the gold (reference) side.
    pub gold: u32,

    /// Count on the test (hypothesis) side.
    pub test: u32,

    /// Count of matches between the two.
    pub matched: u32,
}

impl HypothesisScore {
    /// Create a new score.
    pub fn new(
        gold: u32,
        test: u32,
        matched: u32,
    ) -> Self {
        Self {
            gold,
            test,
            matched,
        }
    }
}

/// Provenance of one flattened n-best token:
/// the ``(group, hypothesis)`` it was read from.
///
/// Padding positions hold [`TreeIndex::FILLER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeIndex {
    /// Index of the n-best group (one per reference sentence).
    pub group: i64,

    /// Index of the hypothesis within its group.
    pub hypothesis: i64,
}

impl Default for TreeIndex {
    fn default() -> Self {
        Self::FILLER
    }
}

impl fmt::Display for TreeIndex {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "({}, {})", self.group, self.hypothesis)
    }
}

impl TreeIndex {
    /// The padding value, ``(-1, -1)``.
    pub const FILLER: TreeIndex = TreeIndex {
        group: -1,
        hypothesis: -1,
    };

    /// Create a link to ``(group, hypothesis)``.
    pub fn new(
        group: usize,
        hypothesis: usize,
    ) -> Self {
        Self {
            group: group as i64,
            hypothesis: hypothesis as i64,
        }
    }

    /// Is this a padding entry?
    pub fn is_filler(&self) -> bool {
        *self == Self::FILLER
    }

    /// The ``(group, hypothesis)`` position, or `None` for padding.
    pub fn position(&self) -> Option<(usize, usize)> {
        if self.is_filler() {
            return None;
        }
        Some((
            usize::try_from(self.group).ok()?,
            usize::try_from(self.hypothesis).ok()?,
        ))
    }
}

/// A parsed n-best list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NBestData<T: TokenType> {
    /// All hypothesis tokens, flattened in file order.
    pub data: Vec<T>,

    /// Per-group hypothesis scores, in file order.
    pub scores: Vec<Vec<HypothesisScore>>,

    /// One [`TreeIndex`] per token of [`Self::data`].
    pub idx2tree: Vec<TreeIndex>,
}

impl<T: TokenType> NBestData<T> {
    /// The number of groups.
    pub fn num_groups(&self) -> usize {
        self.scores.len()
    }

    /// The total number of hypotheses across all groups.
    pub fn num_hypotheses(&self) -> usize {
        self.scores.iter().map(Vec::len).sum()
    }

    /// The tokens of a single hypothesis.
    ///
    /// Hypotheses are contiguous in [`Self::data`].
    pub fn hypothesis_tokens(
        &self,
        group: usize,
        hypothesis: usize,
    ) -> &[T] {
        let target = TreeIndex::new(group, hypothesis);
        let start = self.idx2tree.iter().position(|t| *t == target);
        match start {
            None => &[],
            Some(start) => {
                let len = self.idx2tree[start..]
                    .iter()
                    .take_while(|t| **t == target)
                    .count();
                &self.data[start..start + len]
            }
        }
    }
}
