//! # Plain Batcher

use ndarray::{Array2, s};

use crate::{
    batching::BatchOptions,
    errors::NLResult,
    types::TokenType,
};

/// Slices a flat token sequence into ``(input, target)`` windows.
///
/// The sequence is split into `batch_size` contiguous rows of
/// ``batch_len = len / batch_size`` tokens; the tail that does not divide
/// evenly is dropped. Step `i` yields:
/// * ``x = grid[:, i*num_steps .. (i+1)*num_steps]``
/// * ``y = grid[:, i*num_steps+1 .. (i+1)*num_steps+1]``
///
/// The batcher is its own iterator; it is consumed by iteration.
#[derive(Debug, Clone)]
pub struct PlainBatcher<T: TokenType> {
    grid: Array2<T>,
    num_steps: usize,
    epoch_size: usize,
    step: usize,
}

impl<T: TokenType> PlainBatcher<T> {
    /// Build the batch grid.
    ///
    /// ## Returns
    /// The batcher; or [`crate::errors::NBestLmError::DegenerateShape`]
    /// if the shape yields no windows.
    pub fn new(
        data: &[T],
        options: &BatchOptions,
    ) -> NLResult<Self> {
        options.validate(data.len())?;

        let batch_len = data.len() / options.batch_size;
        let epoch_size = batch_len.saturating_sub(1) / options.num_steps;
        if epoch_size == 0 {
            return Err(options.degenerate(data.len()));
        }

        let grid = Array2::from_shape_fn((options.batch_size, batch_len), |(row, col)| {
            data[row * batch_len + col]
        });
        log::debug!(
            "plain batch grid {:?}: {} windows of {} steps",
            grid.dim(),
            epoch_size,
            options.num_steps
        );

        Ok(Self {
            grid,
            num_steps: options.num_steps,
            epoch_size,
            step: 0,
        })
    }

    /// The full ``[batch_size, batch_len]`` grid.
    pub fn grid(&self) -> &Array2<T> {
        &self.grid
    }

    /// The total number of windows.
    pub fn epoch_size(&self) -> usize {
        self.epoch_size
    }
}

impl<T: TokenType> Iterator for PlainBatcher<T> {
    type Item = (Array2<T>, Array2<T>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.epoch_size {
            return None;
        }

        let start = self.step * self.num_steps;
        let end = start + self.num_steps;
        self.step += 1;

        let x = self.grid.slice(s![.., start..end]).to_owned();
        let y = self.grid.slice(s![.., start + 1..end + 1]).to_owned();
        Some((x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.epoch_size - self.step;
        (remaining, Some(remaining))
    }
}

impl<T: TokenType> ExactSizeIterator for PlainBatcher<T> {}
