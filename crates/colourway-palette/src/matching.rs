//! Nearest-colour matching against a palette.

use colourway_space::Colour;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::palette::Palette;

/// A palette entry close to a query colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Position in the palette.
    pub index: usize,
    pub colour: Colour,
    /// CIEDE2000 distance from the query.
    pub delta_e: f64,
    pub definition: String,
    pub name: Option<String>,
}

/// Limits applied by [`Palette::match_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Maximum number of matches returned.
    pub count: usize,
    /// Entries must be strictly closer than this.
    pub delta_e: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            count: 1,
            delta_e: f64::INFINITY,
        }
    }
}

impl Palette {
    /// The `count` entries nearest to `colour` with ΔE*₀₀ below `delta_e`,
    /// nearest first. Equal distances keep palette order.
    pub fn match_colour(&self, colour: &Colour, count: usize, delta_e: f64) -> Result<Vec<Match>> {
        let mut matches = Vec::new();
        for (index, entry) in self.raw_entries().iter().enumerate() {
            let candidate = self.entry_colour(index, entry)?;
            let d = colour.delta_e(candidate);
            if d < delta_e {
                matches.push(Match {
                    index,
                    colour: candidate.clone(),
                    delta_e: d,
                    definition: entry.definition().to_string(),
                    name: entry.name().map(str::to_string),
                });
            }
        }

        matches.sort_by(|a, b| a.delta_e.total_cmp(&b.delta_e));
        matches.truncate(count);

        debug!(
            palette = %self.name(),
            query = %colour,
            found = matches.len(),
            "Matched colour against palette"
        );
        Ok(matches)
    }

    pub fn match_with(&self, colour: &Colour, options: MatchOptions) -> Result<Vec<Match>> {
        self.match_colour(colour, options.count, options.delta_e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::tests::basic;
    use crate::palette::Entry;

    #[test]
    fn test_tomato_top_three() {
        let tomato = Colour::parse("#ff6347").unwrap();
        let matches = basic().match_colour(&tomato, 3, f64::INFINITY).unwrap();
        let names: Vec<_> = matches.iter().map(|m| m.name.as_deref().unwrap()).collect();
        assert_eq!(names, ["red", "orange", "pink"]);
        assert!((matches[0].delta_e - 12.990465).abs() < 1e-3);
        assert!((matches[1].delta_e - 14.968275).abs() < 1e-3);
        assert!((matches[2].delta_e - 24.168024).abs() < 1e-3);
        assert_eq!(matches[0].index, 2);
        assert_eq!(matches[0].definition, "lab(50 75 65)");
    }

    #[test]
    fn test_threshold_excludes_everything() {
        let tomato = Colour::parse("#ff6347").unwrap();
        let matches = basic()
            .match_with(&tomato, MatchOptions { count: 5, delta_e: 10.0 })
            .unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_default_options_return_nearest() {
        let query = Colour::parse("#8A371B").unwrap();
        let matches = basic().match_with(&query, MatchOptions::default()).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].index, 6);
        assert!(matches[0].delta_e < 0.1);
    }

    #[test]
    fn test_ties_keep_palette_order() {
        let p = Palette::new(
            "ties",
            "ties",
            [
                Entry::named("#808080", "first"),
                Entry::named("#000", "black"),
                Entry::named("rgb(128,128,128)", "second"),
            ],
        );
        let grey = Colour::parse("#808080").unwrap();
        let matches = p.match_colour(&grey, 3, f64::INFINITY).unwrap();
        assert_eq!(matches[0].index, 0);
        assert_eq!(matches[1].index, 2);
        assert_eq!(matches[2].index, 1);
    }
}
