//! # Preprocessing Pipeline
//!
//! Orchestrates a full run over a [`PreprocessConfig`]:
//! vocabulary initialization (load or build, optionally shared),
//! alignment of the train / valid / test splits, and persistence of the
//! dictionaries and the [`DataBundle`].
pub mod bundle;
pub mod config;
pub mod dictionaries;
pub mod driver;
pub mod vocab_init;

#[doc(inline)]
pub use bundle::{BUNDLE_FORMAT_VERSION, DataBundle};
#[doc(inline)]
pub use config::{PreprocessConfig, SplitPaths};
#[doc(inline)]
pub use dictionaries::Dictionaries;
#[doc(inline)]
pub use driver::{build_dictionaries, make_split, preprocess};
#[doc(inline)]
pub use vocab_init::{init_vocabulary, make_vocabulary, save_vocabulary};
