//! # Corpus Aligner
//!
//! Reads a source and a target file in lockstep, filters and tokenizes
//! each sentence pair, and indexes the retained pairs against frozen
//! vocabularies.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    corpus::{
        Dataset,
        paired_lines::{PairState, PairedLines},
        tokenize::{TokenizeMode, word_tokens},
    },
    errors::WPResult,
    vocab::{
        Vocabulary,
        special_tokens::{BOS_WORD, EOS_WORD, UNK_WORD},
    },
};

/// Options for [`CorpusAligner`].
#[derive(Debug, Clone, PartialEq)]
pub struct AlignerOptions {
    /// Lowercase both lines before tokenizing.
    pub lowercase: bool,

    /// Target tokenization; the source is always word tokenized.
    pub target_mode: TokenizeMode,

    /// Max source length in words; 0 is unlimited.
    pub max_source_length: usize,

    /// Max target length in words; 0 is unlimited.
    ///
    /// Each limit is independent: a 0 here lifts only the target limit,
    /// and a 0 source limit leaves this one in force.
    pub max_target_length: usize,

    /// Log progress every this many pairs; 0 disables progress logging.
    pub report_every: usize,
}

impl Default for AlignerOptions {
    fn default() -> Self {
        Self {
            lowercase: false,
            target_mode: TokenizeMode::Word,
            max_source_length: 0,
            max_target_length: 0,
            report_every: 100_000,
        }
    }
}

impl AlignerOptions {
    /// Set lowercasing.
    pub fn with_lowercase(
        self,
        lowercase: bool,
    ) -> Self {
        Self { lowercase, ..self }
    }

    /// Set the target tokenization mode.
    pub fn with_target_mode(
        self,
        target_mode: TokenizeMode,
    ) -> Self {
        Self {
            target_mode,
            ..self
        }
    }

    /// Set the max source and target lengths; 0 is unlimited.
    pub fn with_max_lengths(
        self,
        max_source_length: usize,
        max_target_length: usize,
    ) -> Self {
        Self {
            max_source_length,
            max_target_length,
            ..self
        }
    }

    /// Set the progress interval.
    pub fn with_report_every(
        self,
        report_every: usize,
    ) -> Self {
        Self {
            report_every,
            ..self
        }
    }

    /// Does a pair with these word counts fit the length limits?
    pub fn accepts_lengths(
        &self,
        source_len: usize,
        target_len: usize,
    ) -> bool {
        let fits = |len: usize, max: usize| max == 0 || len <= max;
        fits(source_len, self.max_source_length) && fits(target_len, self.max_target_length)
    }
}

/// Counters for one aligner pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignStats {
    /// Non-empty pairs read (retained or length-filtered).
    pub processed: usize,

    /// Pairs skipped because a line was empty.
    pub empty_ignored: usize,

    /// Pairs skipped by the length limits.
    pub length_ignored: usize,

    /// The sources ran out at different lines.
    pub mismatched: bool,
}

impl AlignStats {
    /// Total ignored pairs.
    pub fn ignored(&self) -> usize {
        self.empty_ignored + self.length_ignored
    }
}

/// Aligns, filters, and indexes parallel sentence files.
pub struct CorpusAligner<'a> {
    src_vocab: &'a Vocabulary,
    tgt_vocab: &'a Vocabulary,
    options: AlignerOptions,
}

impl<'a> CorpusAligner<'a> {
    /// Create an aligner over frozen source and target vocabularies.
    pub fn new(
        src_vocab: &'a Vocabulary,
        tgt_vocab: &'a Vocabulary,
        options: AlignerOptions,
    ) -> Self {
        Self {
            src_vocab,
            tgt_vocab,
            options,
        }
    }

    /// Build a [`Dataset`] from a source and a target file.
    ///
    /// Both files are closed before this returns, on every path.
    pub fn make_data<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        src_path: P,
        tgt_path: Q,
    ) -> WPResult<(Dataset, AlignStats)> {
        let (src_path, tgt_path) = (src_path.as_ref(), tgt_path.as_ref());
        log::info!(
            "Processing {} & {} ...",
            src_path.display(),
            tgt_path.display()
        );

        let source = BufReader::new(File::open(src_path)?);
        let target = BufReader::new(File::open(tgt_path)?);
        self.make_data_from_readers(source, target)
    }

    /// Build a [`Dataset`] from two line-aligned readers.
    ///
    /// A single forward pass; stops when both readers end together, or
    /// (with a warning, but no error) as soon as only one of them ends.
    pub fn make_data_from_readers<S: BufRead, T: BufRead>(
        &self,
        source: S,
        target: T,
    ) -> WPResult<(Dataset, AlignStats)> {
        let mut data = Dataset::new();
        let mut stats = AlignStats::default();

        for step in PairedLines::new(source, target) {
            let pair = step?;
            let Some((sline, tline)) = pair.lines() else {
                let longer = match pair.state() {
                    PairState::SourceEnded => "target",
                    _ => "source",
                };
                log::warn!(
                    "source and target do not have the same number of sentences; \
                     discarding the rest of the {longer}"
                );
                stats.mismatched = true;
                break;
            };

            let (sline, tline) = (sline.trim(), tline.trim());
            if sline.is_empty() || tline.is_empty() {
                log::warn!("ignoring an empty line ({})", stats.processed + 1);
                stats.empty_ignored += 1;
                continue;
            }

            self.process_pair(sline, tline, &mut data, &mut stats);

            stats.processed += 1;
            if self.options.report_every > 0 && stats.processed % self.options.report_every == 0 {
                log::info!("... {} sentences prepared", stats.processed);
            }
        }

        log::info!(
            "Prepared {} sentences ({} ignored due to length == 0 or > {})",
            data.len(),
            stats.ignored(),
            self.options.max_source_length
        );
        Ok((data, stats))
    }

    fn process_pair(
        &self,
        sline: &str,
        tline: &str,
        data: &mut Dataset,
        stats: &mut AlignStats,
    ) {
        let (sline, tline) = if self.options.lowercase {
            (sline.to_lowercase(), tline.to_lowercase())
        } else {
            (sline.to_string(), tline.to_string())
        };

        let src_words: Vec<&str> = sline.split_whitespace().collect();
        let tgt_words: Vec<&str> = tline.split_whitespace().collect();

        if !self
            .options
            .accepts_lengths(src_words.len(), tgt_words.len())
        {
            stats.length_ignored += 1;
            return;
        }

        let src_tokens = word_tokens(&src_words);
        let tgt_tokens = self.options.target_mode.tokenize(&tgt_words);

        let src_ids = self.src_vocab.convert_to_idx(&src_tokens, UNK_WORD, None, None);
        let tgt_ids =
            self.tgt_vocab
                .convert_to_idx(&tgt_tokens, UNK_WORD, Some(BOS_WORD), Some(EOS_WORD));

        data.push(src_ids, tgt_ids, src_tokens, tgt_tokens, src_words.len());
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::vocab::{
        VocabBuilderOptions,
        special_tokens::{BOS, EOS, SPACE_WORD, UNK},
    };

    fn vocab_from(
        text: &str,
        options: VocabBuilderOptions,
    ) -> Vocabulary {
        let mut builder = options.init();
        builder.update_from_samples(text.lines());
        builder.build(1000)
    }

    fn align(
        src_vocab: &Vocabulary,
        tgt_vocab: &Vocabulary,
        options: AlignerOptions,
        source: &str,
        target: &str,
    ) -> (Dataset, AlignStats) {
        CorpusAligner::new(src_vocab, tgt_vocab, options)
            .make_data_from_readers(Cursor::new(source), Cursor::new(target))
            .unwrap()
    }

    #[test]
    fn test_end_to_end_example() {
        let src_vocab = vocab_from("a b c\nd e", VocabBuilderOptions::default());
        let tgt_vocab = vocab_from("x y\np\nq r", VocabBuilderOptions::default());

        let options = AlignerOptions::default().with_max_lengths(2, 0);
        let (data, stats) = align(
            &src_vocab,
            &tgt_vocab,
            options,
            "a b c\n\nd e\n",
            "x y\np\nq r\n",
        );

        assert_eq!(data.len(), 1);
        assert_eq!(stats.length_ignored, 1);
        assert_eq!(stats.empty_ignored, 1);
        assert_eq!(stats.ignored(), 2);
        assert_eq!(stats.processed, 2);
        assert!(!stats.mismatched);

        let q = tgt_vocab.lookup("q ").unwrap();
        let r = tgt_vocab.lookup("r ").unwrap();
        assert_eq!(data.tgt()[0], vec![BOS, q, r, EOS]);
        assert_eq!(
            data.src()[0],
            vec![src_vocab.lookup("d ").unwrap(), src_vocab.lookup("e ").unwrap()]
        );
        assert_eq!(data.raw_src()[0], vec!["d ", "e "]);
        assert_eq!(data.raw_tgt()[0], vec!["q ", "r "]);
        assert_eq!(data.sizes(), &[2]);
    }

    #[test]
    fn test_mismatched_lengths_stop_early() {
        let vocab = vocab_from("a b\nx y", VocabBuilderOptions::default());
        let (data, stats) = align(
            &vocab,
            &vocab,
            AlignerOptions::default(),
            "a\nb\na b\n",
            "x\ny\n",
        );

        assert_eq!(data.len(), 2);
        assert_eq!(stats.processed, 2);
        assert!(stats.mismatched);
        assert!(data.check_aligned().is_ok());
    }

    #[test]
    fn test_unknown_tokens_and_framing() {
        let src_vocab = vocab_from("a", VocabBuilderOptions::default());
        let tgt_vocab = vocab_from("x", VocabBuilderOptions::default());

        let (data, _) = align(
            &src_vocab,
            &tgt_vocab,
            AlignerOptions::default(),
            "a zz\nqq\n",
            "yy x\nx\n",
        );

        assert_eq!(data.len(), 2);
        let a = src_vocab.lookup("a ").unwrap();
        let x = tgt_vocab.lookup("x ").unwrap();
        assert_eq!(data.src()[0], vec![a, UNK]);
        assert_eq!(data.tgt()[0], vec![BOS, UNK, x, EOS]);

        for (src, tgt) in data.src().iter().zip(data.tgt()) {
            assert!(!src.contains(&BOS) && !src.contains(&EOS));
            assert_eq!(tgt.first(), Some(&BOS));
            assert_eq!(tgt.last(), Some(&EOS));
        }
    }

    #[test]
    fn test_lowercase() {
        let vocab = vocab_from("hello world", VocabBuilderOptions::default());
        let (data, _) = align(
            &vocab,
            &vocab,
            AlignerOptions::default().with_lowercase(true),
            "Hello WORLD\n",
            "HELLO\n",
        );
        assert_eq!(data.raw_src()[0], vec!["hello ", "world "]);
        assert!(!data.src()[0].contains(&UNK));
        assert!(!data.tgt()[0].contains(&UNK));
    }

    #[test]
    fn test_char_mode_target() {
        let src_vocab = vocab_from("a b", VocabBuilderOptions::default());
        let tgt_vocab = vocab_from("ab c", VocabBuilderOptions::default().with_char_mode(true));

        let (data, _) = align(
            &src_vocab,
            &tgt_vocab,
            AlignerOptions::default()
                .with_target_mode(TokenizeMode::Char)
                .with_max_lengths(0, 2),
            "a b\nb\n",
            "ab c\nab c d\n",
        );

        // The second pair has 3 target words.
        assert_eq!(data.len(), 1);
        assert_eq!(data.raw_tgt()[0], vec!["a", "b", " ", "c"]);

        let space = tgt_vocab.lookup(SPACE_WORD).unwrap();
        let ids = &data.tgt()[0];
        assert_eq!(ids.len(), 6);
        assert_eq!(ids[3], space);
        assert_eq!(data.sizes(), &[2]);
    }

    #[test]
    fn test_whitespace_only_lines_are_empty() {
        let vocab = vocab_from("a", VocabBuilderOptions::default());
        let (data, stats) = align(
            &vocab,
            &vocab,
            AlignerOptions::default(),
            "  \t \na\n",
            "a\n   \n",
        );
        assert!(data.is_empty());
        assert_eq!(stats.empty_ignored, 2);
        assert_eq!(stats.processed, 0);
    }

    #[test]
    fn test_length_limits() {
        let options = AlignerOptions::default().with_max_lengths(2, 1);
        assert!(options.accepts_lengths(2, 1));
        assert!(!options.accepts_lengths(3, 1));
        assert!(!options.accepts_lengths(1, 2));

        let unlimited = AlignerOptions::default();
        assert!(unlimited.accepts_lengths(10_000, 10_000));
    }

    #[test]
    fn test_zero_length_limits_are_per_side() {
        let target_only = AlignerOptions::default().with_max_lengths(0, 2);
        assert!(target_only.accepts_lengths(10_000, 2));
        assert!(!target_only.accepts_lengths(1, 3));

        let source_only = AlignerOptions::default().with_max_lengths(2, 0);
        assert!(source_only.accepts_lengths(2, 10_000));
        assert!(!source_only.accepts_lengths(3, 1));
    }

    #[test]
    fn test_missing_file() {
        let vocab = Vocabulary::standard();
        let aligner = CorpusAligner::new(&vocab, &vocab, AlignerOptions::default());
        assert!(aligner.make_data("/nonexistent/src", "/nonexistent/tgt").is_err());
    }
}
