//! # Preprocessing Config

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    corpus::{AlignerOptions, TokenizeMode},
    errors::{WPResult, WordprepError},
};

/// A source/target file pair for one split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPaths {
    /// The source sentences.
    pub src: PathBuf,

    /// The target sentences.
    pub tgt: PathBuf,
}

impl SplitPaths {
    /// Create a split from its two file paths.
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(
        src: P,
        tgt: Q,
    ) -> Self {
        Self {
            src: src.into(),
            tgt: tgt.into(),
        }
    }
}

/// Full configuration for a [`crate::pipeline::preprocess`] run.
///
/// Missing fields take the defaults of [`PreprocessConfig::default`] when
/// loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Training split; also the vocabulary source.
    pub train: SplitPaths,

    /// Validation split.
    pub valid: SplitPaths,

    /// Test split.
    pub test: SplitPaths,

    /// Output path prefix for the bundle and the dictionaries.
    pub save_data: PathBuf,

    /// Max source vocabulary size.
    pub src_vocab_size: usize,

    /// Max target vocabulary size.
    pub tgt_vocab_size: usize,

    /// Existing source dictionary to load instead of building one.
    pub src_vocab: Option<PathBuf>,

    /// Existing target dictionary to load instead of building one.
    pub tgt_vocab: Option<PathBuf>,

    /// Max source sentence length in words; 0 is unlimited.
    pub src_length: usize,

    /// Max target sentence length in words; 0 is unlimited.
    pub tgt_length: usize,

    /// Random seed, recorded in the bundle.
    pub seed: u64,

    /// Lowercase the data.
    pub lower: bool,

    /// Character-level target vocabulary and tokenization.
    #[serde(rename = "char")]
    pub char_mode: bool,

    /// Share one vocabulary between source and target.
    pub share: bool,

    /// Log progress every this many sentences.
    pub report_every: usize,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            train: SplitPaths::new("./data/data/text_train", "./data/data/label_train"),
            valid: SplitPaths::new("./data/data/text_val", "./data/data/label_val"),
            test: SplitPaths::new("./data/data/text_test", "./data/data/label_test"),
            save_data: PathBuf::from("./data/data/save_data"),
            src_vocab_size: 50000,
            tgt_vocab_size: 150,
            src_vocab: None,
            tgt_vocab: None,
            src_length: 500,
            tgt_length: 25,
            seed: 10,
            lower: true,
            char_mode: false,
            share: false,
            report_every: 100000,
        }
    }
}

impl PreprocessConfig {
    /// Load a config from a JSON file.
    pub fn load_path<P: AsRef<Path>>(path: P) -> WPResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Set the output path prefix.
    pub fn with_save_data<P: Into<PathBuf>>(
        self,
        save_data: P,
    ) -> Self {
        Self {
            save_data: save_data.into(),
            ..self
        }
    }

    /// Set the three splits.
    pub fn with_splits(
        self,
        train: SplitPaths,
        valid: SplitPaths,
        test: SplitPaths,
    ) -> Self {
        Self {
            train,
            valid,
            test,
            ..self
        }
    }

    /// Set the source and target vocabulary sizes.
    pub fn with_vocab_sizes(
        self,
        src_vocab_size: usize,
        tgt_vocab_size: usize,
    ) -> Self {
        Self {
            src_vocab_size,
            tgt_vocab_size,
            ..self
        }
    }

    /// Set the max source and target lengths; 0 is unlimited.
    pub fn with_lengths(
        self,
        src_length: usize,
        tgt_length: usize,
    ) -> Self {
        Self {
            src_length,
            tgt_length,
            ..self
        }
    }

    /// Set vocabulary sharing.
    pub fn with_share(
        self,
        share: bool,
    ) -> Self {
        Self { share, ..self }
    }

    /// Set character mode.
    pub fn with_char_mode(
        self,
        char_mode: bool,
    ) -> Self {
        Self { char_mode, ..self }
    }

    /// Set lowercasing.
    pub fn with_lower(
        self,
        lower: bool,
    ) -> Self {
        Self { lower, ..self }
    }

    /// The target tokenization mode.
    pub fn target_mode(&self) -> TokenizeMode {
        if self.char_mode {
            TokenizeMode::Char
        } else {
            TokenizeMode::Word
        }
    }

    /// Options for the corpus aligner.
    pub fn aligner_options(&self) -> AlignerOptions {
        AlignerOptions::default()
            .with_lowercase(self.lower)
            .with_target_mode(self.target_mode())
            .with_max_lengths(self.src_length, self.tgt_length)
            .with_report_every(self.report_every)
    }

    /// Check the preconditions of a run.
    pub fn validate(&self) -> WPResult<()> {
        if self.share {
            if self.src_vocab_size != self.tgt_vocab_size {
                return Err(WordprepError::VocabSizeMismatch {
                    source_size: self.src_vocab_size,
                    target_size: self.tgt_vocab_size,
                });
            }
            if self.char_mode {
                return Err(WordprepError::InvalidConfig(
                    "character mode cannot be used with a shared vocabulary".to_string(),
                ));
            }
        }
        if self.save_data.as_os_str().is_empty() {
            return Err(WordprepError::InvalidConfig(
                "save_data must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The path of a dictionary file next to the bundle, e.g. ``{save_data}.src.dict``.
    pub fn dict_path(
        &self,
        side: &str,
    ) -> PathBuf {
        let mut path = self.save_data.clone().into_os_string();
        path.push(format!(".{side}.dict"));
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PreprocessConfig::default();
        assert_eq!(config.src_vocab_size, 50000);
        assert_eq!(config.tgt_vocab_size, 150);
        assert_eq!(config.src_length, 500);
        assert_eq!(config.tgt_length, 25);
        assert!(config.lower);
        assert!(!config.share);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"save_data": "out/demo", "char": true, "train": {"src": "s", "tgt": "t"}}"#;
        let config: PreprocessConfig = serde_json::from_str(json).unwrap();
        assert!(config.char_mode);
        assert_eq!(config.train, SplitPaths::new("s", "t"));
        assert_eq!(config.tgt_vocab_size, 150);
        assert_eq!(config.target_mode(), TokenizeMode::Char);
    }

    #[test]
    fn test_load_path() {
        tempdir::TempDir::new("config_test")
            .and_then(|dir| {
                let path = dir.path().join("config.json");
                std::fs::write(&path, r#"{"share": true, "src_vocab_size": 7, "tgt_vocab_size": 7}"#)?;

                let config = PreprocessConfig::load_path(&path).unwrap();
                assert!(config.share);
                assert!(config.validate().is_ok());
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_share_requires_equal_sizes() {
        let config = PreprocessConfig::default().with_share(true);
        assert!(matches!(
            config.validate(),
            Err(WordprepError::VocabSizeMismatch {
                source_size: 50000,
                target_size: 150
            })
        ));

        let config = config.with_vocab_sizes(100, 100).with_char_mode(true);
        assert!(matches!(
            config.validate(),
            Err(WordprepError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_dict_path() {
        let config = PreprocessConfig::default().with_save_data("out/demo");
        assert_eq!(config.dict_path("src"), PathBuf::from("out/demo.src.dict"));
        assert_eq!(config.dict_path("tgt"), PathBuf::from("out/demo.tgt.dict"));
    }

    #[test]
    fn test_aligner_options() {
        let options = PreprocessConfig::default()
            .with_lengths(3, 0)
            .with_lower(false)
            .aligner_options();
        assert_eq!(options.max_source_length, 3);
        assert_eq!(options.max_target_length, 0);
        assert!(!options.lowercase);
        assert_eq!(options.report_every, 100000);
    }
}
