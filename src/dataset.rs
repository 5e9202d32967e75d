//! Built-in dataset descriptors
//!
//! Three hierarchical sales datasets, keyed by the `data` request parameter
//! (or the CLI `--data` flag). Selection never fails: a missing or unknown
//! key falls back to the default dataset, with a warning on the diagnostic
//! log so the fallback is visible to operators.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

pub const DATASETS: [Dataset; 3] = [
    Dataset {
        key: "videogame",
        title: "Video Game Sales",
        description: "Top 100 Most Sold Video Games Grouped by Platform",
        url: "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/video-game-sales-data.json",
    },
    Dataset {
        key: "movie",
        title: "Movie Sales",
        description: "Top 100 Highest Grossing Movies Grouped By Genre",
        url: "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/movie-data.json",
    },
    Dataset {
        key: "kickstarter",
        title: "Kickstarter Pledges",
        description: "Top 100 Most Pledged Kickstarter Campaigns Grouped By Category",
        url: "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/kickstarter-funding-data.json",
    },
];

pub const DEFAULT_KEY: &str = "videogame";

/// Look up a dataset by key. `None` or an unrecognized key selects the
/// default; the unrecognized case logs a warning rather than erroring.
pub fn select(key: Option<&str>) -> &'static Dataset {
    match key {
        None => default(),
        Some(k) => match DATASETS.iter().find(|d| d.key == k) {
            Some(d) => d,
            None => {
                log::warn!("unknown dataset key '{}', falling back to '{}'", k, DEFAULT_KEY);
                default()
            }
        },
    }
}

fn default() -> &'static Dataset {
    DATASETS
        .iter()
        .find(|d| d.key == DEFAULT_KEY)
        .unwrap_or(&DATASETS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // DATASET SELECTION TESTS
    // ==========================================================================
    //
    // Every supported key maps to its fixed descriptor; anything else maps
    // to the default. Selection never panics and never errors.
    // ==========================================================================

    #[test]
    fn test_known_keys() {
        assert_eq!(select(Some("videogame")).title, "Video Game Sales");
        assert_eq!(select(Some("movie")).title, "Movie Sales");
        assert_eq!(select(Some("kickstarter")).title, "Kickstarter Pledges");
    }

    #[test]
    fn test_missing_key_selects_default() {
        assert_eq!(select(None).key, DEFAULT_KEY);
    }

    #[test]
    fn test_unknown_key_selects_default() {
        assert_eq!(select(Some("bogus")).key, DEFAULT_KEY);
        assert_eq!(select(Some("")).key, DEFAULT_KEY);
    }

    #[test]
    fn test_descriptions_match_table() {
        let movie = select(Some("movie"));
        assert_eq!(
            movie.description,
            "Top 100 Highest Grossing Movies Grouped By Genre"
        );
    }

    #[test]
    fn test_keys_are_unique() {
        for (i, a) in DATASETS.iter().enumerate() {
            for b in &DATASETS[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }
}
