//! # Vocabulary Initialization

use std::path::Path;

use crate::{
    errors::{WPResult, WordprepError},
    vocab::{
        VocabBuilderOptions,
        Vocabulary,
        io::{load_dict_path, save_dict_path},
        special_tokens::{BOS_WORD, EOS_WORD, UNK_WORD},
    },
};

/// Markers every indexing vocabulary must hold.
const REQUIRED_SPECIALS: [&str; 3] = [UNK_WORD, BOS_WORD, EOS_WORD];

/// Build a pruned vocabulary from one or more training files.
///
/// ## Arguments
/// * `files` - the training files to scan, in order.
/// * `size` - the max vocabulary size.
/// * `options` - word/char mode and lowercasing.
pub fn make_vocabulary<P: AsRef<Path>>(
    files: &[P],
    size: usize,
    options: VocabBuilderOptions,
) -> WPResult<Vocabulary> {
    let mut builder = options.init();
    for path in files {
        builder.update_from_path(path)?;
    }
    Ok(builder.build(size))
}

/// Load a vocabulary if `vocab_file` is given, otherwise build one.
///
/// A loaded vocabulary is used as-is, and `size` only applies when building;
/// but it must contain the UNK, BOS and EOS markers.
///
/// ## Arguments
/// * `name` - the vocabulary name, for logging.
/// * `files` - the training files to build from.
/// * `vocab_file` - an existing dictionary file.
/// * `size` - the max vocabulary size when building.
/// * `options` - word/char mode and lowercasing when building.
pub fn init_vocabulary<P: AsRef<Path>>(
    name: &str,
    files: &[P],
    vocab_file: Option<&Path>,
    size: usize,
    options: VocabBuilderOptions,
) -> WPResult<Vocabulary> {
    if let Some(vocab_file) = vocab_file {
        log::info!(
            "Reading {name} vocabulary from '{}'...",
            vocab_file.display()
        );
        let loaded = load_dict_path(vocab_file)?;
        if loaded.skipped > 0 {
            log::warn!(
                "skipped {} malformed lines in '{}'",
                loaded.skipped,
                vocab_file.display()
            );
        }
        if let Some(missing) = REQUIRED_SPECIALS
            .into_iter()
            .find(|&token| loaded.vocab.lookup(token).is_none())
        {
            return Err(WordprepError::MissingSpecialToken(missing.to_string()));
        }
        log::info!("Loaded {} {name} words", loaded.vocab.len());
        return Ok(loaded.vocab);
    }

    log::info!("Building {name} vocabulary...");
    make_vocabulary(files, size, options)
}

/// Save a vocabulary to a dictionary file.
pub fn save_vocabulary(
    name: &str,
    vocab: &Vocabulary,
    path: &Path,
) -> WPResult<()> {
    log::info!("Saving {name} vocabulary to '{}'...", path.display());
    save_dict_path(vocab, path)
}
