//! Lookup result schema / Skema hasil pencarian

use serde::{Deserialize, Serialize};

/// Search direction: which side of an entry is the search key / Arah pencarian
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Bugis word in, Indonesian gloss out / Bugis → Indonesia
    BugisToIndonesian,
    /// Indonesian word in, Bugis word out / Indonesia → Bugis
    IndonesianToBugis,
}

impl Direction {
    /// Parse the wire form used in query strings / Baca parameter arah
    ///
    /// Any value other than `"bugis->id"` (an empty value included) maps to
    /// Indonesian→Bugis; malformed parameters degrade instead of failing.
    pub fn from_param(value: &str) -> Self {
        match value {
            "bugis->id" => Direction::BugisToIndonesian,
            _ => Direction::IndonesianToBugis,
        }
    }

    /// Canonical wire string / Bentuk parameter kanonis
    pub fn as_param(&self) -> &'static str {
        match self {
            Direction::BugisToIndonesian => "bugis->id",
            Direction::IndonesianToBugis => "id->bugis",
        }
    }
}

/// Match quality tier, best first / Tingkat kecocokan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchKind {
    Exact,
    Contains,
    Fuzzy,
}

impl MatchKind {
    /// Label shown on rendered pages / Label pada halaman
    pub fn label(&self) -> &'static str {
        match self {
            MatchKind::Exact => "EXACT",
            MatchKind::Contains => "CONTAINS",
            MatchKind::Fuzzy => "FUZZY",
        }
    }
}

/// One ranked lookup result / Satu hasil pencarian
///
/// Borrows both words from the static dictionary table; results are built
/// per request and dropped with the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub kind: MatchKind,
    pub bugis: &'static str,
    pub indonesian: &'static str,
}
