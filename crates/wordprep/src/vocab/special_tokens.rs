//! # Special Tokens
//!
//! Structural markers which are registered ahead of any corpus token,
//! and which survive [`crate::vocab::Vocabulary::prune`].

use crate::types::TokenId;

/// Padding marker.
pub const PAD_WORD: &str = "<blank>";

/// Unknown-token marker; the substitution target for out-of-vocabulary tokens.
pub const UNK_WORD: &str = "<unk>";

/// Beginning-of-sentence marker; framed onto every target sequence.
pub const BOS_WORD: &str = "<s>";

/// End-of-sentence marker; framed onto every target sequence.
pub const EOS_WORD: &str = "</s>";

/// Explicit word-boundary token for character mode vocabularies.
pub const SPACE_WORD: &str = " ";

/// Fixed id of [`PAD_WORD`] in a standard vocabulary.
pub const PAD: TokenId = 0;

/// Fixed id of [`UNK_WORD`] in a standard vocabulary.
pub const UNK: TokenId = 1;

/// Fixed id of [`BOS_WORD`] in a standard vocabulary.
pub const BOS: TokenId = 2;

/// Fixed id of [`EOS_WORD`] in a standard vocabulary.
pub const EOS: TokenId = 3;

/// The special tokens every vocabulary starts with, in id order.
pub const STANDARD_SPECIALS: [&str; 4] = [PAD_WORD, UNK_WORD, BOS_WORD, EOS_WORD];

/// Is this one of the known special tokens (including [`SPACE_WORD`])?
pub fn is_known_special(token: &str) -> bool {
    token == SPACE_WORD || STANDARD_SPECIALS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_ids_match_order() {
        assert_eq!(STANDARD_SPECIALS[PAD as usize], PAD_WORD);
        assert_eq!(STANDARD_SPECIALS[UNK as usize], UNK_WORD);
        assert_eq!(STANDARD_SPECIALS[BOS as usize], BOS_WORD);
        assert_eq!(STANDARD_SPECIALS[EOS as usize], EOS_WORD);
    }

    #[test]
    fn test_is_known_special() {
        assert!(is_known_special("<unk>"));
        assert!(is_known_special(" "));
        assert!(!is_known_special("unk "));
        assert!(!is_known_special(""));
    }
}
