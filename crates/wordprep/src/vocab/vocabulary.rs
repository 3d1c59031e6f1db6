//! # Token Vocabulary

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{
    errors::WordprepError,
    types::{CountType, TokenId, WPHashMap, hash_map_with_capacity},
    vocab::special_tokens::STANDARD_SPECIALS,
};

/// A bidirectional ``{ token <-> id }`` vocabulary with occurrence counts.
///
/// Ids are assigned contiguously from 0 in first-seen order.
/// Tokens registered through [`Vocabulary::add_special`] are structural
/// markers: they are never case-folded and never removed by [`Vocabulary::prune`].
///
/// The vocabulary is populated by [`Vocabulary::add`] during a single pass
/// over training text, frozen by [`Vocabulary::prune`], and read-only
/// while encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VocabularyRecord", into = "VocabularyRecord")]
pub struct Vocabulary {
    /// Lowercase ordinary tokens on `add` / `lookup`.
    lowercase: bool,

    /// ``{ id -> token }``, indexed by id.
    labels: Vec<String>,

    /// ``{ token -> id }``.
    token_map: WPHashMap<String, TokenId>,

    /// Occurrence counts, indexed by id.
    frequencies: Vec<CountType>,

    /// Special token ids, in registration order.
    specials: Vec<TokenId>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl Vocabulary {
    /// Create a new, empty vocabulary.
    pub fn new() -> Self {
        Self {
            lowercase: false,
            labels: Vec::new(),
            token_map: hash_map_with_capacity(1024),
            frequencies: Vec::new(),
            specials: Vec::new(),
        }
    }

    /// Create a vocabulary pre-seeded with the given special tokens, in order.
    pub fn with_specials<I, S>(specials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::new();
        vocab.add_specials(specials);
        vocab
    }

    /// Create a vocabulary seeded with the standard ``PAD, UNK, BOS, EOS`` specials.
    pub fn standard() -> Self {
        Self::with_specials(STANDARD_SPECIALS)
    }

    /// Set the lowercase flag.
    pub fn with_lowercase(
        mut self,
        lowercase: bool,
    ) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Are ordinary tokens lowercased on `add` / `lookup`?
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    /// The number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The special token ids, in registration order.
    pub fn specials(&self) -> &[TokenId] {
        &self.specials
    }

    /// Is this id a special token?
    pub fn is_special(
        &self,
        id: TokenId,
    ) -> bool {
        self.specials.contains(&id)
    }

    fn normalize<'a>(
        &self,
        token: &'a str,
    ) -> Cow<'a, str> {
        if self.lowercase {
            Cow::Owned(token.to_lowercase())
        } else {
            Cow::Borrowed(token)
        }
    }

    /// Insert or count `key`, adding `count` to its frequency.
    fn insert_counted(
        &mut self,
        key: Cow<'_, str>,
        count: CountType,
    ) -> TokenId {
        if let Some(&id) = self.token_map.get(&*key) {
            self.frequencies[id as usize] += count;
            return id;
        }

        let id = self.labels.len() as TokenId;
        let key = key.into_owned();
        self.token_map.insert(key.clone(), id);
        self.labels.push(key);
        self.frequencies.push(count);
        id
    }

    /// Add one occurrence of a token.
    ///
    /// Unseen tokens are assigned the next sequential id.
    ///
    /// ## Returns
    /// The (possibly new) id of the token.
    pub fn add(
        &mut self,
        token: &str,
    ) -> TokenId {
        let key = self.normalize(token);
        self.insert_counted(key, 1)
    }

    /// Add one occurrence of a special token.
    ///
    /// Special tokens are stored verbatim, and are immune to pruning.
    pub fn add_special(
        &mut self,
        token: &str,
    ) -> TokenId {
        let id = self.insert_counted(Cow::Borrowed(token), 1);
        if !self.specials.contains(&id) {
            self.specials.push(id);
        }
        id
    }

    /// Add a sequence of special tokens, in order.
    pub fn add_specials<I, S>(
        &mut self,
        tokens: I,
    ) where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.add_special(token.as_ref());
        }
    }

    /// Look up the id of a token.
    ///
    /// The verbatim token is tried first, so specials stored with their
    /// original case win over a case-folded ordinary token.
    pub fn lookup(
        &self,
        token: &str,
    ) -> Option<TokenId> {
        if let Some(&id) = self.token_map.get(token) {
            return Some(id);
        }
        if !self.lowercase {
            return None;
        }
        self.token_map.get(&*self.normalize(token)).copied()
    }

    /// Look up the token for an id.
    pub fn label(
        &self,
        id: TokenId,
    ) -> Option<&str> {
        self.labels.get(id as usize).map(String::as_str)
    }

    /// The occurrence count of an id; 0 for unknown ids.
    pub fn frequency(
        &self,
        id: TokenId,
    ) -> CountType {
        self.frequencies.get(id as usize).copied().unwrap_or(0)
    }

    /// The occurrence count of a token; 0 for unknown tokens.
    pub fn token_frequency(
        &self,
        token: &str,
    ) -> CountType {
        self.lookup(token).map_or(0, |id| self.frequency(id))
    }

    /// Iterate over ``(id, token)`` in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &str)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(id, label)| (id as TokenId, label.as_str()))
    }

    /// Reduce the vocabulary to at most `max_size` tokens.
    ///
    /// If the vocabulary already fits, it is returned unchanged.
    ///
    /// Otherwise the special tokens are kept, in registration order; and the
    /// ordinary tokens are ranked by descending frequency, ties broken by
    /// insertion order, and the top ``max_size - specials`` are kept.
    /// The survivors are renumbered contiguously, specials first.
    pub fn prune(
        self,
        max_size: usize,
    ) -> Self {
        if self.len() <= max_size {
            return self;
        }

        let mut ordinary: Vec<TokenId> = (0..self.len() as TokenId)
            .filter(|&id| !self.is_special(id))
            .collect();
        // Stable; equal counts keep insertion order.
        ordinary.sort_by(|&a, &b| self.frequency(b).cmp(&self.frequency(a)));
        ordinary.truncate(max_size.saturating_sub(self.specials.len()));

        let mut pruned = Self::new().with_lowercase(self.lowercase);
        for &id in &self.specials {
            let new_id = pruned.insert_counted(
                Cow::Borrowed(self.labels[id as usize].as_str()),
                self.frequency(id),
            );
            pruned.specials.push(new_id);
        }
        for &id in &ordinary {
            pruned.insert_counted(
                Cow::Borrowed(self.labels[id as usize].as_str()),
                self.frequency(id),
            );
        }

        log::debug!(
            "pruned vocabulary from {} to {} tokens",
            self.len(),
            pruned.len()
        );
        pruned
    }

    /// Convert tokens to ids.
    ///
    /// Tokens not in the vocabulary are replaced by the id of `unk_token`.
    ///
    /// ## Arguments
    /// * `tokens` - the tokens to convert.
    /// * `unk_token` - the substitute for unknown tokens.
    /// * `bos_token` - optional marker prepended to the sequence.
    /// * `eos_token` - optional marker appended to the sequence.
    ///
    /// ## Returns
    /// The id sequence; unknown tokens never raise an error. If `unk_token`
    /// itself is missing, unknown tokens are dropped.
    pub fn convert_to_idx<I, S>(
        &self,
        tokens: I,
        unk_token: &str,
        bos_token: Option<&str>,
        eos_token: Option<&str>,
    ) -> Vec<TokenId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let marker = |token: Option<&str>| -> Option<TokenId> {
            let token = token?;
            let id = self.lookup(token);
            if id.is_none() {
                log::warn!("framing token {token:?} is not in the vocabulary");
            }
            id
        };

        let unk = self.lookup(unk_token);
        let mut dropped = 0;

        let tokens = tokens.into_iter();
        let mut ids = Vec::with_capacity(tokens.size_hint().0 + 2);
        ids.extend(marker(bos_token));
        for token in tokens {
            match self.lookup(token.as_ref()).or(unk) {
                Some(id) => ids.push(id),
                None => dropped += 1,
            }
        }
        ids.extend(marker(eos_token));

        if dropped > 0 {
            log::warn!(
                "unknown token {unk_token:?} is not in the vocabulary; dropped {dropped} tokens"
            );
        }
        ids
    }

    /// Convert ids back to tokens.
    ///
    /// ## Arguments
    /// * `ids` - the ids to convert; ids outside the vocabulary are skipped.
    /// * `stop` - if present, conversion ends after the first occurrence of this id.
    pub fn convert_to_labels(
        &self,
        ids: &[TokenId],
        stop: Option<TokenId>,
    ) -> Vec<&str> {
        let mut labels = Vec::with_capacity(ids.len());
        for &id in ids {
            labels.extend(self.label(id));
            if Some(id) == stop {
                break;
            }
        }
        labels
    }
}

/// Serialized form of a [`Vocabulary`]; the token map is rebuilt on load.
#[derive(Serialize, Deserialize)]
struct VocabularyRecord {
    lowercase: bool,
    labels: Vec<String>,
    frequencies: Vec<CountType>,
    specials: Vec<TokenId>,
}

impl From<Vocabulary> for VocabularyRecord {
    fn from(vocab: Vocabulary) -> Self {
        Self {
            lowercase: vocab.lowercase,
            labels: vocab.labels,
            frequencies: vocab.frequencies,
            specials: vocab.specials,
        }
    }
}

impl TryFrom<VocabularyRecord> for Vocabulary {
    type Error = WordprepError;

    fn try_from(record: VocabularyRecord) -> Result<Self, Self::Error> {
        if record.labels.len() != record.frequencies.len() {
            return Err(WordprepError::Parse(format!(
                "vocabulary has {} tokens but {} frequencies",
                record.labels.len(),
                record.frequencies.len()
            )));
        }

        let mut token_map = hash_map_with_capacity(record.labels.len());
        for (id, label) in record.labels.iter().enumerate() {
            if token_map.insert(label.clone(), id as TokenId).is_some() {
                return Err(WordprepError::Parse(format!(
                    "duplicate vocabulary token {label:?}"
                )));
            }
        }

        if let Some(&id) = record
            .specials
            .iter()
            .find(|&&id| id as usize >= record.labels.len())
        {
            return Err(WordprepError::Parse(format!(
                "special token id {id} is out of range"
            )));
        }

        Ok(Self {
            lowercase: record.lowercase,
            labels: record.labels,
            token_map,
            frequencies: record.frequencies,
            specials: record.specials,
        })
    }
}
