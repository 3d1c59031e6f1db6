use std::path::PathBuf;

use wordprep::pipeline::DataBundle;

use crate::logging::LogArgs;

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// The saved data bundle.
    bundle: PathBuf,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Also print the first N pairs of the training split.
    #[arg(long, default_value = "0")]
    head: usize,
}

impl InspectArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let bundle = DataBundle::load(&self.bundle)?;
        let dicts = &bundle.dicts;

        log::info!("bundle version: {}, seed: {}", bundle.version, bundle.seed);
        if dicts.is_shared() {
            log::info!("shared vocabulary: {} tokens", dicts.src.len());
        } else {
            log::info!("source vocabulary: {} tokens", dicts.src.len());
            log::info!("target vocabulary: {} tokens", dicts.tgt.len());
        }
        for (name, data) in bundle.splits() {
            log::info!("{name}: {} sentence pairs", data.len());
        }

        let train = &bundle.train;
        for (src, tgt) in train.src().iter().zip(train.tgt()).take(self.head) {
            println!(
                "{}\t{}",
                dicts.src.convert_to_labels(src, None).concat().trim_end(),
                dicts.tgt.convert_to_labels(tgt, None).join("|")
            );
        }

        Ok(())
    }
}
