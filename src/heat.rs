//! Heat classification: how close a guess's rank is to the secret's.

use std::fmt;

use crate::config::DEFAULT_THRESHOLDS;

/// Discrete proximity label. The CSS class of a scored cell is `as_class()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heat {
    Found,
    Burn,
    Hot,
    Warm,
    Normal,
    Windy,
    Cold,
    Freezing,
}

/// Buckets checked in order against the configured thresholds.
const BUCKETS: [Heat; 6] = [
    Heat::Burn,
    Heat::Hot,
    Heat::Warm,
    Heat::Normal,
    Heat::Windy,
    Heat::Cold,
];

impl Heat {
    pub fn as_class(self) -> &'static str {
        match self {
            Heat::Found => "found",
            Heat::Burn => "burn",
            Heat::Hot => "hot",
            Heat::Warm => "warm",
            Heat::Normal => "normal",
            Heat::Windy => "windy",
            Heat::Cold => "cold",
            Heat::Freezing => "freezing",
        }
    }

    /// Decorative particles spawned on a freshly scored cell.
    pub fn particle_count(self) -> u8 {
        match self {
            Heat::Warm => 2,
            Heat::Hot => 4,
            Heat::Burn => 6,
            _ => 0,
        }
    }

    pub fn particle_kind(self) -> ParticleKind {
        match self {
            Heat::Warm | Heat::Hot | Heat::Burn => ParticleKind::Fire,
            Heat::Windy | Heat::Cold | Heat::Freezing => ParticleKind::Snow,
            Heat::Found | Heat::Normal => ParticleKind::Leaf,
        }
    }
}

impl fmt::Display for Heat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_class())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Fire,
    Snow,
    Leaf,
}

impl ParticleKind {
    pub fn as_class(self) -> &'static str {
        match self {
            ParticleKind::Fire => "fire",
            ParticleKind::Snow => "snow",
            ParticleKind::Leaf => "leaf",
        }
    }
}

/// Map a rank distance to a heat label. `thresholds` are inclusive upper
/// bounds of `distance / max_rank`, ascending; first match wins.
pub fn classify(distance: u32, max_rank: u32, thresholds: &[f64; 6]) -> Heat {
    if distance == 0 {
        return Heat::Found;
    }
    let ratio = distance as f64 / max_rank.max(1) as f64;
    BUCKETS
        .iter()
        .zip(thresholds.iter())
        .find(|(_, limit)| ratio <= **limit)
        .map(|(heat, _)| *heat)
        .unwrap_or(Heat::Freezing)
}

/// `classify` with the stock thresholds.
pub fn classify_default(distance: u32, max_rank: u32) -> Heat {
    classify(distance, max_rank, &DEFAULT_THRESHOLDS)
}
