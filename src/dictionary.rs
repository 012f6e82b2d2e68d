//! Animal dictionary: the ordered word list whose ranks drive the heat metric.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::GameError;

/// Bundled default word list. Ranks follow a rough taxonomic ordering so that
/// related animals sit close together.
pub const ANIMALS_JSON: &str = include_str!("../data/animals.json");

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AnimalEntry {
    pub word: String,
    pub rank: u32,
}

/// Immutable, validated list of entries. Order is preserved because the daily
/// seed indexes into it.
#[derive(Clone, Debug)]
pub struct Dictionary {
    entries: Vec<AnimalEntry>,
    by_word: HashMap<String, usize>,
}

impl Dictionary {
    /// Validate and index a list of entries. Words are lowercased with inner
    /// whitespace collapsed to single spaces, and must be typable on the
    /// on-screen keyboard (ASCII letters and spaces).
    pub fn new(raw: Vec<AnimalEntry>) -> Result<Self, GameError> {
        if raw.is_empty() {
            return Err(GameError::EmptyDictionary);
        }
        let mut entries = Vec::with_capacity(raw.len());
        let mut by_word = HashMap::with_capacity(raw.len());
        let mut by_rank: HashMap<u32, usize> = HashMap::with_capacity(raw.len());
        for (index, entry) in raw.into_iter().enumerate() {
            let word = entry
                .word
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase();
            if word.is_empty() {
                return Err(GameError::BlankWord { index });
            }
            if !word.chars().all(|c| c.is_ascii_lowercase() || c == ' ') {
                return Err(GameError::UntypableWord(word));
            }
            if entry.rank == 0 {
                return Err(GameError::ZeroRank { word });
            }
            if let Some(&prev) = by_rank.get(&entry.rank) {
                let first: &AnimalEntry = &entries[prev];
                return Err(GameError::DuplicateRank {
                    rank: entry.rank,
                    first: first.word.clone(),
                    second: word,
                });
            }
            if by_word.contains_key(&word) {
                return Err(GameError::DuplicateWord(word));
            }
            by_rank.insert(entry.rank, index);
            by_word.insert(word.clone(), index);
            entries.push(AnimalEntry {
                word,
                rank: entry.rank,
            });
        }
        Ok(Self { entries, by_word })
    }

    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let raw: Vec<AnimalEntry> = serde_json::from_str(json)?;
        Self::new(raw)
    }

    /// The compiled-in animal list.
    pub fn bundled() -> Result<Self, GameError> {
        Self::from_json(ANIMALS_JSON)
    }

    /// Exact lookup; `word` must already be lowercase.
    pub fn find(&self, word: &str) -> Option<&AnimalEntry> {
        self.by_word.get(word).map(|&i| &self.entries[i])
    }

    pub fn get(&self, index: usize) -> Option<&AnimalEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Denominator for heat ratios.
    pub fn max_rank(&self) -> u32 {
        self.entries.len() as u32
    }

    pub fn entries(&self) -> &[AnimalEntry] {
        &self.entries
    }
}
