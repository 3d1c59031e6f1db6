//! # `wordprep` Parallel Corpus Preprocessing
//!
//! This crate builds word (or character) vocabularies from parallel text
//! corpora, and converts line-aligned sentence pairs into indexed sequences
//! for a downstream sequence model.
//!
//! See:
//! * [`vocab`] to build, prune, load and save a [`vocab::Vocabulary`].
//! * [`corpus`] to align, filter and index a pair of parallel files.
//! * [`pipeline`] to run the full train/valid/test preprocessing pass.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``foldhash``
//!
//! #### feature: ``foldhash``
//!
//! This swaps all ``HashMap``/``HashSet`` implementations for ``foldhash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::WPHash{*}`` type alias machinery.
//!
//! ## Preprocessing A Corpus
//!
//! ```rust,no_run
//! use wordprep::pipeline::{PreprocessConfig, preprocess};
//!
//! fn example() -> wordprep::errors::WPResult<()> {
//!     let config = PreprocessConfig::default()
//!         .with_save_data("data/demo")
//!         .with_share(false);
//!
//!     let bundle = preprocess(&config)?;
//!     log::info!("train pairs: {}", bundle.train.len());
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod corpus;
pub mod errors;
pub mod pipeline;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{WPResult, WordprepError};
#[doc(inline)]
pub use types::TokenId;
#[doc(inline)]
pub use vocab::Vocabulary;
