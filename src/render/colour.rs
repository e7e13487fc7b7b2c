//! Colour schemes
//!
//! Word clouds are coloured either by a named matplotlib colourmap or by
//! sampling the mask image itself.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{WcgError, WcgResult};

/// Colourmap used when none is configured
pub const DEFAULT_COLOURMAP: &str = "GnBu";

/// Keyword selecting colours inferred from the mask
pub const INFER: &str = "infer";

/// Base colourmap names; every name also has a reversed `_r` variant
const COLOURMAPS: &[&str] = &[
    // Perceptually uniform
    "viridis", "plasma", "inferno", "magma", "cividis",
    // Sequential
    "Greys", "Purples", "Blues", "Greens", "Oranges", "Reds", "YlOrBr", "YlOrRd", "OrRd",
    "PuRd", "RdPu", "BuPu", "GnBu", "PuBu", "YlGnBu", "PuBuGn", "BuGn", "YlGn",
    "binary", "gist_yarg", "gist_gray", "gray", "bone", "pink", "spring", "summer", "autumn",
    "winter", "cool", "Wistia", "hot", "afmhot", "gist_heat", "copper",
    // Diverging
    "PiYG", "PRGn", "BrBG", "PuOr", "RdGy", "RdBu", "RdYlBu", "RdYlGn", "Spectral",
    "coolwarm", "bwr", "seismic",
    // Cyclic
    "twilight", "twilight_shifted", "hsv",
    // Qualitative
    "Pastel1", "Pastel2", "Paired", "Accent", "Dark2", "Set1", "Set2", "Set3", "tab10",
    "tab20", "tab20b", "tab20c",
    // Miscellaneous
    "flag", "prism", "ocean", "gist_earth", "terrain", "gist_stern", "gnuplot", "gnuplot2",
    "CMRmap", "cubehelix", "brg", "gist_rainbow", "rainbow", "jet", "turbo",
    "nipy_spectral", "gist_ncar",
];

/// All known colourmap names, reversed variants included
pub fn colourmaps() -> Vec<String> {
    COLOURMAPS
        .iter()
        .flat_map(|name| [name.to_string(), format!("{}_r", name)])
        .collect()
}

/// Whether `name` is a known colourmap
pub fn is_colourmap(name: &str) -> bool {
    let base = name.strip_suffix("_r").unwrap_or(name);
    COLOURMAPS.contains(&base)
}

/// How a word cloud is coloured
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Colour {
    Colourmap(String),
    /// Take colours from the mask image
    Infer,
}

impl Colour {
    pub fn parse(name: &str) -> WcgResult<Self> {
        if name == INFER {
            Ok(Colour::Infer)
        } else if is_colourmap(name) {
            Ok(Colour::Colourmap(name.to_string()))
        } else {
            Err(WcgError::Config(format!(
                "The colourmap provided ({}) does not exist",
                name
            )))
        }
    }

    /// Name used in output file names
    pub fn file_label(&self) -> &str {
        match self {
            Colour::Colourmap(name) => name,
            Colour::Infer => "custom_colour",
        }
    }
}

impl Default for Colour {
    fn default() -> Self {
        Colour::Colourmap(DEFAULT_COLOURMAP.to_string())
    }
}

impl TryFrom<String> for Colour {
    type Error = WcgError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Colour::parse(&name)
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Colour::Colourmap(name) => write!(f, "{}", name),
            Colour::Infer => write!(f, "{}", INFER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_colours() {
        assert_eq!(Colour::parse("magma").expect("magma"), Colour::Colourmap("magma".into()));
        assert_eq!(Colour::parse("PuRd_r").expect("reversed"), Colour::Colourmap("PuRd_r".into()));
        assert_eq!(Colour::parse("infer").expect("infer"), Colour::Infer);
        assert!(Colour::parse("gnbu").is_err());
        assert!(Colour::parse("not_a_map").is_err());
    }

    #[test]
    fn test_file_label() {
        assert_eq!(Colour::default().file_label(), "GnBu");
        assert_eq!(Colour::Infer.file_label(), "custom_colour");
    }

    #[test]
    fn test_colourmaps_include_reversed() {
        let maps = colourmaps();
        assert!(maps.contains(&"hsv".to_string()));
        assert!(maps.contains(&"hsv_r".to_string()));
        assert_eq!(maps.len(), COLOURMAPS.len() * 2);
    }

    #[test]
    fn test_colour_serde_validates() {
        let colour: Colour = serde_json::from_str("\"YlOrBr\"").expect("valid");
        assert_eq!(colour, Colour::Colourmap("YlOrBr".into()));
        assert!(serde_json::from_str::<Colour>("\"nope\"").is_err());
    }
}
