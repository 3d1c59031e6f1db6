//! # Vocabulary
//!
//! This module provides the vocabulary, its builder, and related io mechanisms.
//!
//! ## Building A Vocabulary
//!
//! A [`VocabBuilder`] counts whitespace words (each carrying a trailing
//! boundary marker) or characters over a single pass of training text,
//! and [`VocabBuilder::build`] prunes the result to a size cap.
//!
//! ## Special Tokens
//!
//! Every vocabulary starts with the [`special_tokens::STANDARD_SPECIALS`]
//! at fixed low ids; these are never pruned.
pub mod builder;
pub mod io;
pub mod special_tokens;
pub mod vocabulary;

#[doc(inline)]
pub use builder::{VocabBuilder, VocabBuilderOptions, WordLengthStats};
#[doc(inline)]
pub use vocabulary::Vocabulary;
