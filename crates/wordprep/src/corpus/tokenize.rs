//! # Sentence Tokenization

use serde::{Deserialize, Serialize};

/// Trailing marker appended to every word token.
pub const WORD_BOUNDARY: &str = " ";

/// How a sentence is split into tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizeMode {
    /// Whitespace words, each with a trailing [`WORD_BOUNDARY`].
    #[default]
    Word,

    /// Individual characters; word boundaries become explicit space tokens.
    Char,
}

impl TokenizeMode {
    /// Tokenize a sequence of whitespace-separated words.
    pub fn tokenize(
        &self,
        words: &[&str],
    ) -> Vec<String> {
        match self {
            Self::Word => word_tokens(words),
            Self::Char => char_tokens(words),
        }
    }
}

/// Each word with a trailing [`WORD_BOUNDARY`].
pub fn word_tokens(words: &[&str]) -> Vec<String> {
    words
        .iter()
        .map(|word| format!("{word}{WORD_BOUNDARY}"))
        .collect()
}

/// The characters of the words joined by single spaces.
pub fn char_tokens(words: &[&str]) -> Vec<String> {
    let mut tokens = Vec::new();
    for (idx, word) in words.iter().enumerate() {
        if idx > 0 {
            tokens.push(WORD_BOUNDARY.to_string());
        }
        tokens.extend(word.chars().map(String::from));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokens() {
        assert_eq!(word_tokens(&["a", "bc"]), vec!["a ", "bc "]);
        assert!(word_tokens(&[]).is_empty());
    }

    #[test]
    fn test_char_tokens() {
        assert_eq!(char_tokens(&["ab", "c"]), vec!["a", "b", " ", "c"]);
        assert_eq!(char_tokens(&["né"]), vec!["n", "é"]);
        assert!(char_tokens(&[]).is_empty());
    }

    #[test]
    fn test_mode_dispatch() {
        let words = ["q", "r"];
        assert_eq!(TokenizeMode::Word.tokenize(&words), vec!["q ", "r "]);
        assert_eq!(TokenizeMode::Char.tokenize(&words), vec!["q", " ", "r"]);
        assert_eq!(TokenizeMode::default(), TokenizeMode::Word);
    }
}
