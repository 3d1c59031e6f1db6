//! # Preprocessed Data Bundle

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    corpus::Dataset,
    errors::{WPResult, WordprepError},
    pipeline::Dictionaries,
};

/// The current on-disk bundle format version.
pub const BUNDLE_FORMAT_VERSION: u32 = 1;

/// Everything a preprocessing run produces: the dictionaries, and the
/// train / valid / test datasets.
///
/// Persisted as a single JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataBundle {
    /// Format version; see [`BUNDLE_FORMAT_VERSION`].
    pub version: u32,

    /// The seed of the run that produced the bundle.
    pub seed: u64,

    /// Source and target vocabularies.
    pub dicts: Dictionaries,

    /// Training split.
    pub train: Dataset,

    /// Validation split.
    pub valid: Dataset,

    /// Test split.
    pub test: Dataset,
}

impl DataBundle {
    /// Assemble a bundle at the current format version.
    pub fn new(
        seed: u64,
        dicts: Dictionaries,
        train: Dataset,
        valid: Dataset,
        test: Dataset,
    ) -> Self {
        Self {
            version: BUNDLE_FORMAT_VERSION,
            seed,
            dicts,
            train,
            valid,
            test,
        }
    }

    /// The splits, by name.
    pub fn splits(&self) -> [(&'static str, &Dataset); 3] {
        [
            ("train", &self.train),
            ("valid", &self.valid),
            ("test", &self.test),
        ]
    }

    /// Save the bundle to a file.
    pub fn save<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> WPResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Load a bundle from a file, checking the format version and that
    /// every split is aligned.
    pub fn load<P: AsRef<Path>>(path: P) -> WPResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        let bundle: Self = serde_json::from_reader(reader)?;

        if bundle.version != BUNDLE_FORMAT_VERSION {
            return Err(WordprepError::Parse(format!(
                "unsupported bundle version {} (expected {BUNDLE_FORMAT_VERSION})",
                bundle.version
            )));
        }
        for (_, data) in bundle.splits() {
            data.check_aligned()?;
        }
        Ok(bundle)
    }
}
