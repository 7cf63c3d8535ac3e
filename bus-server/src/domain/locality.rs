//! Fare-zone localities along the line.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown locality key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locality: {input}")]
pub struct UnknownLocality {
    input: String,
}

/// A locality (fare zone) served by the line.
///
/// Every stop belongs to exactly one locality, and the fare matrix is keyed
/// by locality pairs. The set is closed: the line serves these six zones and
/// nothing else, so lookups can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locality {
    SantaFe,
    Espora,
    Parada10,
    AngelGallardo,
    AltosDeMirta,
    MonteVera,
}

impl Locality {
    /// All localities, in travel order from Santa Fe.
    pub const ALL: [Locality; 6] = [
        Locality::SantaFe,
        Locality::Espora,
        Locality::Parada10,
        Locality::AngelGallardo,
        Locality::AltosDeMirta,
        Locality::MonteVera,
    ];

    /// Stable key used in URLs and serialized data.
    pub fn key(&self) -> &'static str {
        match self {
            Locality::SantaFe => "santa_fe",
            Locality::Espora => "espora",
            Locality::Parada10 => "parada10",
            Locality::AngelGallardo => "angel_gallardo",
            Locality::AltosDeMirta => "altos_de_mirta",
            Locality::MonteVera => "monte_vera",
        }
    }

    /// Parse a locality key as used in URLs.
    pub fn parse(s: &str) -> Result<Self, UnknownLocality> {
        Locality::ALL
            .into_iter()
            .find(|l| l.key() == s)
            .ok_or_else(|| UnknownLocality {
                input: s.to_string(),
            })
    }

    /// Display name, as printed on the fare table.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locality::SantaFe => "Santa Fe",
            Locality::Espora => "Espora",
            Locality::Parada10 => "Parada 10",
            Locality::AngelGallardo => "A. Gallardo",
            Locality::AltosDeMirta => "A. Mirta",
            Locality::MonteVera => "Monte Vera",
        }
    }
}

impl fmt::Display for Locality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_are_unique() {
        use std::collections::HashSet;
        let names: HashSet<&str> = Locality::ALL.iter().map(|l| l.display_name()).collect();
        assert_eq!(names.len(), Locality::ALL.len());
    }

    #[test]
    fn travel_order_starts_and_ends_at_terminals() {
        assert_eq!(Locality::ALL[0], Locality::SantaFe);
        assert_eq!(Locality::ALL[5], Locality::MonteVera);
    }

    #[test]
    fn key_roundtrip() {
        for locality in Locality::ALL {
            assert_eq!(Locality::parse(locality.key()).unwrap(), locality);
        }
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        let err = Locality::parse("recreo").unwrap_err();
        assert!(err.to_string().contains("recreo"));
        assert!(Locality::parse("Santa Fe").is_err());
        assert!(Locality::parse("").is_err());
    }

    #[test]
    fn serde_matches_keys() {
        for locality in Locality::ALL {
            let json = serde_json::to_string(&locality).unwrap();
            assert_eq!(json, format!("\"{}\"", locality.key()));
        }
    }
}
