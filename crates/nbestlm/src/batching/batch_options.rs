//! # Batch Options

use crate::errors::{NBestLmError, NLResult};

/// Options for [`crate::batching::PlainBatcher`] and [`crate::batching::NBestBatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// The number of rows in each batch grid.
    pub batch_size: usize,

    /// The width of each window.
    pub num_steps: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            batch_size: 20,
            num_steps: 20,
        }
    }
}

impl BatchOptions {
    /// Create new options.
    pub fn new(
        batch_size: usize,
        num_steps: usize,
    ) -> Self {
        Self {
            batch_size,
            num_steps,
        }
    }

    /// Set the batch size.
    pub fn with_batch_size(
        self,
        batch_size: usize,
    ) -> Self {
        Self { batch_size, ..self }
    }

    /// Set the window width.
    pub fn with_num_steps(
        self,
        num_steps: usize,
    ) -> Self {
        Self { num_steps, ..self }
    }

    /// The [`NBestLmError::DegenerateShape`] error for `data_len` tokens.
    pub(crate) fn degenerate(
        &self,
        data_len: usize,
    ) -> NBestLmError {
        NBestLmError::DegenerateShape {
            data_len,
            batch_size: self.batch_size,
            num_steps: self.num_steps,
        }
    }

    /// Reject zero-sized shapes.
    pub(crate) fn validate(
        &self,
        data_len: usize,
    ) -> NLResult<()> {
        if self.batch_size == 0 || self.num_steps == 0 {
            return Err(self.degenerate(data_len));
        }
        Ok(())
    }
}
