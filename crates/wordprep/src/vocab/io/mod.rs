//! # Vocabulary IO
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use wordprep::vocab::io::{load_dict_path, save_dict_path};
//!
//! fn example() -> wordprep::WPResult<()> {
//!     let loaded = load_dict_path("data/demo.src.dict")?;
//!     if loaded.skipped > 0 {
//!         log::warn!("skipped {} malformed lines", loaded.skipped);
//!     }
//!     save_dict_path(&loaded.vocab, "data/copy.src.dict")
//! }
//! ```

mod dict_file;

#[doc(inline)]
pub use dict_file::*;
