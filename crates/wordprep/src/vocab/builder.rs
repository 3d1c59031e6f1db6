//! # Vocabulary Builder

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    corpus::tokenize::WORD_BOUNDARY,
    errors::WPResult,
    vocab::{Vocabulary, special_tokens::SPACE_WORD},
};

/// Options for [`VocabBuilder`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VocabBuilderOptions {
    /// Count individual characters rather than words.
    ///
    /// Character vocabularies also carry the [`SPACE_WORD`] special.
    pub char_mode: bool,

    /// Lowercase ordinary tokens.
    pub lowercase: bool,
}

impl VocabBuilderOptions {
    /// Set character mode.
    pub fn with_char_mode(
        self,
        char_mode: bool,
    ) -> Self {
        Self { char_mode, ..self }
    }

    /// Set lowercasing.
    pub fn with_lowercase(
        self,
        lowercase: bool,
    ) -> Self {
        Self { lowercase, ..self }
    }

    /// Initialize a [`VocabBuilder`] with these options.
    pub fn init(self) -> VocabBuilder {
        VocabBuilder::new(self)
    }
}

/// Word length summary over a corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WordLengthStats {
    /// Number of words observed.
    pub count: usize,

    /// Total characters over all words.
    pub total: usize,

    /// Shortest word, in characters.
    pub min: usize,

    /// Longest word, in characters.
    pub max: usize,
}

impl WordLengthStats {
    /// Record one word length.
    pub fn observe(
        &mut self,
        len: usize,
    ) {
        if self.count == 0 {
            self.min = len;
            self.max = len;
        } else {
            self.min = self.min.min(len);
            self.max = self.max.max(len);
        }
        self.count += 1;
        self.total += len;
    }

    /// Mean word length; `None` when no words have been observed.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.total as f64 / self.count as f64)
        }
    }
}

/// Single pass vocabulary builder over training text.
#[derive(Debug, Clone)]
pub struct VocabBuilder {
    /// The config options.
    pub options: VocabBuilderOptions,

    vocab: Vocabulary,
    stats: WordLengthStats,
}

impl VocabBuilder {
    /// Create a new builder seeded with the standard specials.
    pub fn new(options: VocabBuilderOptions) -> Self {
        let mut vocab = Vocabulary::standard().with_lowercase(options.lowercase);
        if options.char_mode {
            vocab.add_special(SPACE_WORD);
        }
        Self {
            options,
            vocab,
            stats: WordLengthStats::default(),
        }
    }

    /// The word length stats observed so far.
    pub fn stats(&self) -> &WordLengthStats {
        &self.stats
    }

    /// The unpruned vocabulary built so far.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Update counts from one line of text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        let mut buf = String::new();
        for word in text.as_ref().split_whitespace() {
            self.stats.observe(word.chars().count());
            if self.options.char_mode {
                for ch in word.chars() {
                    buf.clear();
                    buf.push(ch);
                    self.vocab.add(&buf);
                }
            } else {
                buf.clear();
                buf.push_str(word);
                buf.push_str(WORD_BOUNDARY);
                self.vocab.add(&buf);
            }
        }
    }

    /// Update counts from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Update counts from every line of a reader.
    pub fn update_from_reader<R: BufRead>(
        &mut self,
        reader: R,
    ) -> WPResult<()> {
        for line in reader.lines() {
            self.update_from_text(line?);
        }
        Ok(())
    }

    /// Update counts from every line of a file.
    pub fn update_from_path<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> WPResult<()> {
        log::debug!("counting tokens in {}", path.as_ref().display());
        let reader = BufReader::new(File::open(path)?);
        self.update_from_reader(reader)
    }

    /// Log the length summary, and prune the vocabulary to `max_size`.
    pub fn build(
        self,
        max_size: usize,
    ) -> Vocabulary {
        match self.stats.mean() {
            Some(mean) => log::info!(
                "word lengths: max: {}, min: {}, avg: {:.2}",
                self.stats.max,
                self.stats.min,
                mean
            ),
            None => log::warn!("no words found in the training corpus"),
        }

        let original_size = self.vocab.len();
        let vocab = self.vocab.prune(max_size);
        log::info!(
            "Created dictionary of size {} (pruned from {})",
            vocab.len(),
            original_size
        );
        vocab
    }
}
