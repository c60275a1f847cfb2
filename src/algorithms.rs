//! The five selectable sorting variants and their descriptive catalog.
//!
//! Descriptions live in `algorithms.json`, embedded at compile time and parsed
//! on first access.

use crate::VisualizerError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const CATALOG_JSON: &str = include_str!("algorithms.json");

static CATALOG: Lazy<Catalog> =
    Lazy::new(|| serde_json::from_str(CATALOG_JSON).expect("embedded algorithm catalog is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

/// Text shown in the info card for a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmInfo {
    pub name: String,
    pub description: String,
    pub time_complexity: String,
    pub space_complexity: String,
}

#[derive(Deserialize)]
struct Catalog {
    bubble: AlgorithmInfo,
    selection: AlgorithmInfo,
    insertion: AlgorithmInfo,
    merge: AlgorithmInfo,
    quick: AlgorithmInfo,
}

impl Algorithm {
    /// Selector order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Stable key used as the `<option>` value and by the JS export.
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    pub fn info(self) -> &'static AlgorithmInfo {
        let catalog = &*CATALOG;
        match self {
            Algorithm::Bubble => &catalog.bubble,
            Algorithm::Selection => &catalog.selection,
            Algorithm::Insertion => &catalog.insertion,
            Algorithm::Merge => &catalog.merge,
            Algorithm::Quick => &catalog.quick,
        }
    }

    /// Only merge sort keeps equal elements in their original order.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Merge)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info().name)
    }
}

impl FromStr for Algorithm {
    type Err = VisualizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.key() == key)
            .ok_or_else(|| VisualizerError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_catalog_entry() {
        for alg in Algorithm::ALL {
            let info = alg.info();
            assert!(info.name.ends_with("Sort"), "{:?}", info.name);
            assert!(!info.description.is_empty());
            assert!(info.time_complexity.starts_with("O("));
        }
        assert_eq!(Algorithm::Quick.info().space_complexity, "O(log n)");
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.key().parse::<Algorithm>(), Ok(alg));
        }
        assert_eq!(" Merge ".parse::<Algorithm>(), Ok(Algorithm::Merge));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(
            "heap".parse::<Algorithm>(),
            Err(VisualizerError::UnknownAlgorithm("heap".to_string()))
        );
    }

    #[test]
    fn serde_uses_lowercase_keys() {
        assert_eq!(serde_json::to_string(&Algorithm::Insertion).unwrap(), "\"insertion\"");
        let alg: Algorithm = serde_json::from_str("\"selection\"").unwrap();
        assert_eq!(alg, Algorithm::Selection);
    }

    #[test]
    fn display_uses_catalog_name() {
        assert_eq!(Algorithm::Bubble.to_string(), "Bubble Sort");
        assert_eq!(Algorithm::default(), Algorithm::Bubble);
    }
}
