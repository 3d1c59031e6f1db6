//! # Preprocessing Driver

use std::sync::Arc;

use crate::{
    corpus::{AlignStats, CorpusAligner, Dataset},
    errors::WPResult,
    pipeline::{
        DataBundle,
        Dictionaries,
        PreprocessConfig,
        SplitPaths,
        vocab_init::{init_vocabulary, save_vocabulary},
    },
    vocab::VocabBuilderOptions,
};

/// Load or build the source and target vocabularies.
///
/// With `share`, one word vocabulary is built over both training files and
/// used for both sides.
pub fn build_dictionaries(config: &PreprocessConfig) -> WPResult<Dictionaries> {
    config.validate()?;

    let word_options = VocabBuilderOptions::default().with_lowercase(config.lower);

    if config.share {
        log::info!("share the vocabulary between source and target");
        let vocab = init_vocabulary(
            "source and target",
            &[&config.train.src, &config.train.tgt],
            config.src_vocab.as_deref(),
            config.src_vocab_size,
            word_options,
        )?;
        return Ok(Dictionaries::shared(Arc::new(vocab)));
    }

    let src = init_vocabulary(
        "source",
        &[&config.train.src],
        config.src_vocab.as_deref(),
        config.src_vocab_size,
        word_options.clone(),
    )?;
    let tgt = init_vocabulary(
        "target",
        &[&config.train.tgt],
        config.tgt_vocab.as_deref(),
        config.tgt_vocab_size,
        word_options.with_char_mode(config.char_mode),
    )?;
    Ok(Dictionaries::separate(Arc::new(src), Arc::new(tgt)))
}

/// Run the aligner over one split.
pub fn make_split(
    name: &str,
    split: &SplitPaths,
    dicts: &Dictionaries,
    config: &PreprocessConfig,
) -> WPResult<(Dataset, AlignStats)> {
    log::info!("Preparing {name} ...");
    CorpusAligner::new(&dicts.src, &dicts.tgt, config.aligner_options())
        .make_data(&split.src, &split.tgt)
}

/// Run the full preprocessing pass, and save its outputs.
///
/// * builds (or loads) the dictionaries,
/// * aligns and indexes the train, valid and test splits,
/// * saves newly built dictionaries to ``{save_data}.{src,tgt}.dict``,
/// * saves the [`DataBundle`] to ``{save_data}``.
///
/// ## Returns
/// The saved bundle.
pub fn preprocess(config: &PreprocessConfig) -> WPResult<DataBundle> {
    let dicts = build_dictionaries(config)?;

    let (train, _) = make_split("training", &config.train, &dicts, config)?;
    let (valid, _) = make_split("validation", &config.valid, &dicts, config)?;
    let (test, _) = make_split("test", &config.test, &dicts, config)?;

    // A shared vocabulary is built iff the source one was not given.
    let src_built = config.src_vocab.is_none();
    let tgt_built = if config.share {
        src_built
    } else {
        config.tgt_vocab.is_none()
    };
    if src_built {
        save_vocabulary("source", &dicts.src, &config.dict_path("src"))?;
    }
    if tgt_built {
        save_vocabulary("target", &dicts.tgt, &config.dict_path("tgt"))?;
    }

    let bundle = DataBundle::new(config.seed, dicts, train, valid, test);
    log::info!("Saving data to '{}'...", config.save_data.display());
    bundle.save(&config.save_data)?;

    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::errors::WordprepError;

    #[test]
    fn test_share_size_mismatch_is_fatal() {
        let config = PreprocessConfig::default()
            .with_share(true)
            .with_vocab_sizes(10, 20);
        assert!(matches!(
            build_dictionaries(&config),
            Err(WordprepError::VocabSizeMismatch { .. })
        ));
    }

    #[test]
    fn test_shared_dictionaries_are_one_instance() {
        tempdir::TempDir::new("driver_test")
            .and_then(|dir| {
                let src = dir.path().join("src.txt");
                let tgt = dir.path().join("tgt.txt");
                fs::write(&src, "a b\n")?;
                fs::write(&tgt, "x y\n")?;

                let config = PreprocessConfig::default()
                    .with_splits(
                        SplitPaths::new(&src, &tgt),
                        SplitPaths::new(&src, &tgt),
                        SplitPaths::new(&src, &tgt),
                    )
                    .with_share(true)
                    .with_vocab_sizes(100, 100);

                let dicts = build_dictionaries(&config).unwrap();
                assert!(dicts.is_shared());
                assert!(dicts.src.lookup("a ").is_some());
                assert!(dicts.tgt.lookup("y ").is_some());
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_char_mode_target_dictionary() {
        tempdir::TempDir::new("driver_test")
            .and_then(|dir| {
                let src = dir.path().join("src.txt");
                let tgt = dir.path().join("tgt.txt");
                fs::write(&src, "Hello world\n")?;
                fs::write(&tgt, "Ab c\n")?;

                let config = PreprocessConfig::default()
                    .with_splits(
                        SplitPaths::new(&src, &tgt),
                        SplitPaths::new(&src, &tgt),
                        SplitPaths::new(&src, &tgt),
                    )
                    .with_char_mode(true);

                let dicts = build_dictionaries(&config).unwrap();
                assert!(!dicts.is_shared());
                assert!(dicts.src.lookup("hello ").is_some());
                assert!(dicts.tgt.lookup("a").is_some());
                assert!(dicts.tgt.lookup(" ").is_some());
                assert_eq!(dicts.tgt.lookup("ab "), None);
                Ok(())
            })
            .unwrap();
    }
}
