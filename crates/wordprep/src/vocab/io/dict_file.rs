//! # Dictionary File IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::WPResult,
    types::{TokenId, WPHashSet},
    vocab::{Vocabulary, special_tokens::is_known_special},
};

/// The result of reading a dictionary file.
#[derive(Debug, Clone, PartialEq)]
pub struct DictLoad {
    /// The loaded vocabulary.
    pub vocab: Vocabulary,

    /// The number of malformed lines which were skipped.
    pub skipped: usize,
}

/// Load a [`Vocabulary`] from a dictionary file.
///
/// Lines are:
/// ```terminaloutput
/// {TOKEN}\t{ID}
/// ```
///
/// See [`read_dict`] for the malformed line policy.
///
/// # Arguments
/// * `path` - the path to the dictionary file.
pub fn load_dict_path<P: AsRef<Path>>(path: P) -> WPResult<DictLoad> {
    let reader = BufReader::new(File::open(path)?);
    read_dict(reader)
}

/// Read a [`Vocabulary`] from a dictionary line reader.
///
/// Lines are:
/// ```terminaloutput
/// {TOKEN}\t{ID}
/// ```
///
/// The token is everything before the last tab, so tokens carrying the
/// trailing word-boundary space survive. Malformed lines (no tab, empty
/// token, non-integer id, duplicate token or id) are skipped with a warning
/// and counted; I/O errors are fatal.
///
/// Entries are inserted in ascending id order; ids with gaps are renumbered
/// contiguously. Known special tokens are registered as specials.
///
/// The file does not record case folding, so the loaded vocabulary always
/// has `lowercase` unset, even if it was written from a lowercased build;
/// lookups match the stored tokens exactly.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_dict<R: BufRead>(reader: R) -> WPResult<DictLoad> {
    let mut entries: Vec<(TokenId, String)> = Vec::new();
    let mut seen_tokens: WPHashSet<String> = Default::default();
    let mut seen_ids: WPHashSet<TokenId> = Default::default();
    let mut skipped = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = idx + 1;

        let Some((token, id)) = line.rsplit_once('\t') else {
            log::warn!("dictionary line {line_number}: missing tab separator; skipped");
            skipped += 1;
            continue;
        };
        if token.is_empty() {
            log::warn!("dictionary line {line_number}: empty token; skipped");
            skipped += 1;
            continue;
        }
        let id: TokenId = match id.trim().parse() {
            Ok(id) => id,
            Err(err) => {
                log::warn!("dictionary line {line_number}: bad id {id:?} ({err}); skipped");
                skipped += 1;
                continue;
            }
        };
        if seen_tokens.contains(token) || !seen_ids.insert(id) {
            log::warn!("dictionary line {line_number}: duplicate entry {token:?}; skipped");
            skipped += 1;
            continue;
        }

        seen_tokens.insert(token.to_string());
        entries.push((id, token.to_string()));
    }

    entries.sort_by_key(|(id, _)| *id);

    let mut vocab = Vocabulary::new();
    let mut renumbered = false;
    for (id, token) in &entries {
        let assigned = if is_known_special(token) {
            vocab.add_special(token)
        } else {
            vocab.add(token)
        };
        renumbered |= assigned != *id;
    }
    if renumbered {
        log::warn!("dictionary ids were not contiguous; renumbered in ascending order");
    }

    Ok(DictLoad { vocab, skipped })
}

/// Save a [`Vocabulary`] to a dictionary file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_dict_path<P: AsRef<Path>>(
    vocab: &Vocabulary,
    path: P,
) -> WPResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_dict(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`Vocabulary`] to a [`Write`] writer, one entry per line in id order.
///
/// Lines are:
/// ```terminaloutput
/// {TOKEN}\t{ID}
/// ```
pub fn write_dict<W: Write>(
    vocab: &Vocabulary,
    writer: &mut W,
) -> WPResult<()> {
    for (id, token) in vocab.iter() {
        writeln!(writer, "{token}\t{id}")?;
    }
    Ok(())
}
