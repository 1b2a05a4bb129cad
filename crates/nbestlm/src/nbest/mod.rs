//! # N-Best Lists
//!
//! An n-best list holds, for each reference sentence, a group of scored
//! hypotheses. [`NBestParser`] flattens the hypothesis tokens into a single
//! id sequence and records, per token, the [`TreeIndex`] it came from.

mod parser;
mod records;

#[doc(inline)]
pub use parser::NBestParser;
#[doc(inline)]
pub use records::{HypothesisScore, NBestData, TreeIndex};
