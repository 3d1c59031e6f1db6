//! # Parallel Corpus
//!
//! Line-aligned source/target files are read in lockstep by
//! [`paired_lines::PairedLines`], filtered and indexed by [`CorpusAligner`],
//! and accumulated into a [`Dataset`].
pub mod aligner;
pub mod dataset;
pub mod paired_lines;
pub mod tokenize;

#[doc(inline)]
pub use aligner::{AlignStats, AlignerOptions, CorpusAligner};
#[doc(inline)]
pub use dataset::Dataset;
#[doc(inline)]
pub use tokenize::TokenizeMode;
