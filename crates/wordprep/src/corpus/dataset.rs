//! # Indexed Dataset

use serde::{Deserialize, Serialize};

use crate::{
    errors::{WPResult, WordprepError},
    types::TokenId,
};

/// The retained sentence pairs of one split, raw and indexed.
///
/// All five columns have the same length, and the i-th entry of each
/// describes the same pair, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    src: Vec<Vec<TokenId>>,
    tgt: Vec<Vec<TokenId>>,
    raw_src: Vec<Vec<String>>,
    raw_tgt: Vec<Vec<String>>,
    sizes: Vec<usize>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one retained pair.
    ///
    /// ## Arguments
    /// * `src` - the indexed source sentence.
    /// * `tgt` - the indexed (and framed) target sentence.
    /// * `raw_src` - the source tokens.
    /// * `raw_tgt` - the target tokens.
    /// * `size` - the source length, in words.
    pub fn push(
        &mut self,
        src: Vec<TokenId>,
        tgt: Vec<TokenId>,
        raw_src: Vec<String>,
        raw_tgt: Vec<String>,
        size: usize,
    ) {
        self.src.push(src);
        self.tgt.push(tgt);
        self.raw_src.push(raw_src);
        self.raw_tgt.push(raw_tgt);
        self.sizes.push(size);
    }

    /// The number of retained pairs.
    pub fn len(&self) -> usize {
        self.src.len()
    }

    /// Is the dataset empty?
    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }

    /// Indexed source sentences.
    pub fn src(&self) -> &[Vec<TokenId>] {
        &self.src
    }

    /// Indexed target sentences, framed by BOS/EOS.
    pub fn tgt(&self) -> &[Vec<TokenId>] {
        &self.tgt
    }

    /// Source tokens.
    pub fn raw_src(&self) -> &[Vec<String>] {
        &self.raw_src
    }

    /// Target tokens.
    pub fn raw_tgt(&self) -> &[Vec<String>] {
        &self.raw_tgt
    }

    /// Source lengths, in words.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Check that all columns have the same length.
    ///
    /// Datasets built through [`Dataset::push`] always pass; this guards
    /// deserialized data.
    pub fn check_aligned(&self) -> WPResult<()> {
        let lens = [
            self.src.len(),
            self.tgt.len(),
            self.raw_src.len(),
            self.raw_tgt.len(),
            self.sizes.len(),
        ];
        if lens.iter().any(|&len| len != lens[0]) {
            return Err(WordprepError::Parse(format!(
                "dataset columns are misaligned: {lens:?}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_columns_aligned() {
        let mut data = Dataset::new();
        assert!(data.is_empty());

        data.push(
            vec![4, 5],
            vec![2, 6, 3],
            vec!["d ".into(), "e ".into()],
            vec!["q ".into()],
            2,
        );
        data.push(vec![7], vec![2, 3], vec!["f ".into()], vec![], 1);

        assert_eq!(data.len(), 2);
        assert_eq!(data.sizes(), &[2, 1]);
        assert_eq!(data.tgt()[0], vec![2, 6, 3]);
        assert_eq!(data.raw_src()[1], vec!["f ".to_string()]);
        assert!(data.raw_tgt()[1].is_empty());
        assert!(data.check_aligned().is_ok());
    }

    #[test]
    fn test_check_aligned_rejects_ragged_columns() {
        let json = r#"{"src":[[1]],"tgt":[[2,3]],"raw_src":[["a "]],"raw_tgt":[],"sizes":[1]}"#;
        let data: Dataset = serde_json::from_str(json).unwrap();
        assert!(data.check_aligned().is_err());
    }
}
