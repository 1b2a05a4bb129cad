//! # N-Best Batcher

use ndarray::{Array2, s};

use crate::{
    batching::BatchOptions,
    errors::{NBestLmError, NLResult},
    nbest::{NBestData, TreeIndex},
    types::TokenType,
};

/// Slices a flattened n-best list into ``(input, target, provenance)`` windows.
///
/// The tokens (and their [`TreeIndex`] links) are padded to a multiple of
/// `batch_size` and split into contiguous rows of `batch_len` tokens.
/// Each row is then right-padded up to the next multiple of `num_steps`
/// strictly above `batch_len`, so no token is dropped; a row that is already
/// aligned gets one whole trailing window of padding.
///
/// The token grid has one extra leading context column:
/// * row 0 starts with `eos`;
/// * row ``r > 0`` starts with the last token of row ``r - 1``.
///
/// Step `i` yields:
/// * ``x = data[:, i*num_steps .. (i+1)*num_steps]``
/// * ``y = data[:, i*num_steps+1 .. (i+1)*num_steps+1]``
/// * ``z = tree[:, i*num_steps .. (i+1)*num_steps]``, aligned with `y`.
///
/// All padding positions hold `eos` in the token grid,
/// and [`TreeIndex::FILLER`] in the provenance grid.
#[derive(Debug, Clone)]
pub struct NBestBatcher<T: TokenType> {
    data: Array2<T>,
    tree: Array2<TreeIndex>,
    num_steps: usize,
    epoch_size: usize,
    step: usize,
}

impl<T: TokenType> NBestBatcher<T> {
    /// Build the batch grids for a parsed [`NBestData`].
    pub fn from_nbest(
        nbest: &NBestData<T>,
        eos: T,
        options: &BatchOptions,
    ) -> NLResult<Self> {
        Self::new(&nbest.data, &nbest.idx2tree, eos, options)
    }

    /// Build the batch grids.
    ///
    /// ## Arguments
    /// * `data` - the flat token sequence.
    /// * `idx2tree` - one provenance link per token.
    /// * `eos` - the end-of-sequence id; used for context and padding.
    /// * `options` - the batch shape.
    pub fn new(
        data: &[T],
        idx2tree: &[TreeIndex],
        eos: T,
        options: &BatchOptions,
    ) -> NLResult<Self> {
        if data.len() != idx2tree.len() {
            return Err(NBestLmError::LengthMismatch {
                data_len: data.len(),
                links_len: idx2tree.len(),
            });
        }
        options.validate(data.len())?;

        let batch_size = options.batch_size;
        let num_steps = options.num_steps;

        let batch_len = data.len().div_ceil(batch_size);
        if batch_len == 0 {
            return Err(options.degenerate(data.len()));
        }
        let width = batch_len + num_steps - batch_len % num_steps;
        let epoch_size = width / num_steps;

        let token_at = |idx: usize| data.get(idx).copied().unwrap_or(eos);
        let link_at = |idx: usize| idx2tree.get(idx).copied().unwrap_or(TreeIndex::FILLER);

        let mut grid = Array2::from_elem((batch_size, width + 1), eos);
        let mut tree = Array2::from_elem((batch_size, width), TreeIndex::FILLER);
        for row in 0..batch_size {
            let offset = row * batch_len;
            if row > 0 {
                grid[[row, 0]] = token_at(offset - 1);
            }
            for col in 0..batch_len {
                grid[[row, col + 1]] = token_at(offset + col);
                tree[[row, col]] = link_at(offset + col);
            }
        }
        log::debug!(
            "n-best batch grid {:?}: {} windows of {} steps",
            grid.dim(),
            epoch_size,
            num_steps
        );

        Ok(Self {
            data: grid,
            tree,
            num_steps,
            epoch_size,
            step: 0,
        })
    }

    /// The full ``[batch_size, width + 1]`` token grid, context column first.
    pub fn grid(&self) -> &Array2<T> {
        &self.data
    }

    /// The full ``[batch_size, width]`` provenance grid.
    pub fn tree_grid(&self) -> &Array2<TreeIndex> {
        &self.tree
    }

    /// The total number of windows.
    pub fn epoch_size(&self) -> usize {
        self.epoch_size
    }
}

impl<T: TokenType> Iterator for NBestBatcher<T> {
    type Item = (Array2<T>, Array2<T>, Array2<TreeIndex>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.epoch_size {
            return None;
        }

        let start = self.step * self.num_steps;
        let end = start + self.num_steps;
        self.step += 1;

        let x = self.data.slice(s![.., start..end]).to_owned();
        let y = self.data.slice(s![.., start + 1..end + 1]).to_owned();
        let z = self.tree.slice(s![.., start..end]).to_owned();
        Some((x, y, z))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.epoch_size - self.step;
        (remaining, Some(remaining))
    }
}

impl<T: TokenType> ExactSizeIterator for NBestBatcher<T> {}
