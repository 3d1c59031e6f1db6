use std::path::PathBuf;

use wordprep::pipeline::{PreprocessConfig, preprocess};

use crate::logging::LogArgs;

/// Args for the preprocess command.
///
/// Each flag overrides the matching field of the `--config` file
/// (or of the built-in defaults).
#[derive(clap::Args, Debug)]
pub struct PreprocessArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    /// Read options from this JSON file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the training source data.
    #[arg(long)]
    train_src: Option<PathBuf>,

    /// Path to the training target data.
    #[arg(long)]
    train_tgt: Option<PathBuf>,

    /// Path to the validation source data.
    #[arg(long)]
    valid_src: Option<PathBuf>,

    /// Path to the validation target data.
    #[arg(long)]
    valid_tgt: Option<PathBuf>,

    /// Path to the test source data.
    #[arg(long)]
    test_src: Option<PathBuf>,

    /// Path to the test target data.
    #[arg(long)]
    test_tgt: Option<PathBuf>,

    /// Output file for the prepared data.
    #[arg(long)]
    save_data: Option<PathBuf>,

    /// Size of the source vocabulary.
    #[arg(long)]
    src_vocab_size: Option<usize>,

    /// Size of the target vocabulary.
    #[arg(long)]
    tgt_vocab_size: Option<usize>,

    /// Path to an existing source vocabulary.
    #[arg(long)]
    src_vocab: Option<PathBuf>,

    /// Path to an existing target vocabulary.
    #[arg(long)]
    tgt_vocab: Option<PathBuf>,

    /// Maximum source sequence length; 0 is unlimited.
    #[arg(long)]
    src_length: Option<usize>,

    /// Maximum target sequence length; 0 is unlimited.
    #[arg(long)]
    tgt_length: Option<usize>,

    /// Random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Lowercase the data.
    #[arg(long, overrides_with = "no_lower")]
    lower: bool,

    /// Keep the data's original case.
    #[arg(long)]
    no_lower: bool,

    /// Character-level target vocabulary.
    #[arg(long)]
    char: bool,

    /// Share the vocabulary between source and target.
    #[arg(long)]
    share: bool,

    /// Report status every this many sentences.
    #[arg(long)]
    report_every: Option<usize>,
}

impl PreprocessArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let config = self.load_config()?;
        log::debug!("config: {config:?}");

        let bundle = preprocess(&config)?;
        for (name, data) in bundle.splits() {
            log::info!("{name}: {} sentence pairs", data.len());
        }

        Ok(())
    }

    /// The `--config` file (or defaults), with flag overrides applied.
    fn load_config(&self) -> Result<PreprocessConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => {
                log::info!("Reading options from '{}'", path.display());
                PreprocessConfig::load_path(path)?
            }
            None => PreprocessConfig::default(),
        };

        fn set<T: Clone>(
            field: &mut T,
            value: &Option<T>,
        ) {
            if let Some(value) = value {
                *field = value.clone();
            }
        }

        set(&mut config.train.src, &self.train_src);
        set(&mut config.train.tgt, &self.train_tgt);
        set(&mut config.valid.src, &self.valid_src);
        set(&mut config.valid.tgt, &self.valid_tgt);
        set(&mut config.test.src, &self.test_src);
        set(&mut config.test.tgt, &self.test_tgt);
        set(&mut config.save_data, &self.save_data);
        set(&mut config.src_vocab_size, &self.src_vocab_size);
        set(&mut config.tgt_vocab_size, &self.tgt_vocab_size);
        set(&mut config.src_length, &self.src_length);
        set(&mut config.tgt_length, &self.tgt_length);
        set(&mut config.seed, &self.seed);
        set(&mut config.report_every, &self.report_every);

        if self.src_vocab.is_some() {
            config.src_vocab = self.src_vocab.clone();
        }
        if self.tgt_vocab.is_some() {
            config.tgt_vocab = self.tgt_vocab.clone();
        }
        if self.lower {
            config.lower = true;
        }
        if self.no_lower {
            config.lower = false;
        }
        config.char_mode |= self.char;
        config.share |= self.share;

        Ok(config)
    }
}
