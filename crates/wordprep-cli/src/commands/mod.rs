use crate::commands::{inspect::InspectArgs, preprocess::PreprocessArgs};

pub mod inspect;
pub mod preprocess;

/// Subcommands for wordprep.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build vocabularies and index the train / valid / test splits.
    Preprocess(PreprocessArgs),

    /// Summarize a saved data bundle.
    Inspect(InspectArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Preprocess(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
        }
    }
}
