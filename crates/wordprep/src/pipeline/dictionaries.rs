//! # Source / Target Dictionaries

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::vocab::Vocabulary;

/// The source and target vocabularies of a run.
///
/// When shared, `src` and `tgt` are the same [`Arc`]; sharing survives
/// serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "DictionariesRecord", into = "DictionariesRecord")]
pub struct Dictionaries {
    /// The source vocabulary.
    pub src: Arc<Vocabulary>,

    /// The target vocabulary.
    pub tgt: Arc<Vocabulary>,
}

impl Dictionaries {
    /// One vocabulary for both sides.
    pub fn shared(vocab: Arc<Vocabulary>) -> Self {
        Self {
            src: vocab.clone(),
            tgt: vocab,
        }
    }

    /// Distinct source and target vocabularies.
    pub fn separate(
        src: Arc<Vocabulary>,
        tgt: Arc<Vocabulary>,
    ) -> Self {
        Self { src, tgt }
    }

    /// Do both sides refer to the same vocabulary instance?
    pub fn is_shared(&self) -> bool {
        Arc::ptr_eq(&self.src, &self.tgt)
    }
}

impl PartialEq for Dictionaries {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.is_shared() == other.is_shared() && self.src == other.src && self.tgt == other.tgt
    }
}

/// Serialized form of [`Dictionaries`]; `tgt` is omitted when shared.
#[derive(Serialize, Deserialize)]
struct DictionariesRecord {
    src: Arc<Vocabulary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tgt: Option<Arc<Vocabulary>>,
}

impl From<Dictionaries> for DictionariesRecord {
    fn from(dicts: Dictionaries) -> Self {
        let tgt = if dicts.is_shared() {
            None
        } else {
            Some(dicts.tgt)
        };
        Self {
            src: dicts.src,
            tgt,
        }
    }
}

impl From<DictionariesRecord> for Dictionaries {
    fn from(record: DictionariesRecord) -> Self {
        match record.tgt {
            Some(tgt) => Self::separate(record.src, tgt),
            None => Self::shared(record.src),
        }
    }
}
