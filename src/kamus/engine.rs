//! Lookup engine - three-pass dictionary matching / Mesin pencarian kamus
//!
//! Every query runs the same three passes over the dictionary, in order:
//! - exact: normalized source word equals the normalized query
//! - contains: source word has the query as a substring (equality excluded)
//! - fuzzy: similarity ratio over the whole source column, cutoff 0.6,
//!   at most 10 candidates, best first
//!
//! Results keep that pass order, are deduplicated on the original
//! (bugis, indonesian) pair across all passes, and are capped at
//! `max_results`. A lookup never fails; an empty or unmatched query
//! yields an empty list / Pencarian tidak pernah gagal.

use std::collections::HashSet;

use super::dictionary::{DictionaryEntry, KAMUS};
use super::normalizer::normalize;
use super::schema::{Direction, MatchKind, MatchResult};

/// Result cap applied when the caller does not pick one / Batas jumlah hasil
pub const DEFAULT_MAX_RESULTS: usize = 25;

/// Minimum similarity ratio for the fuzzy pass / Ambang kemiripan fuzzy
pub const FUZZY_CUTOFF: f64 = 0.6;

/// Fuzzy candidates kept before deduplication / Jumlah kandidat fuzzy
pub const FUZZY_CANDIDATES: usize = 10;

/// Dictionary lookup engine / Mesin pencarian kamus
///
/// Holds the entry table plus both normalized source columns, prepared once
/// at startup. The engine never changes after construction, so concurrent
/// requests share it without locking.
pub struct KamusEngine {
    entries: &'static [DictionaryEntry],
    bugis_sources: Vec<String>,
    indonesian_sources: Vec<String>,
}

impl KamusEngine {
    /// Engine over the built-in dictionary / Mesin dengan kamus bawaan
    pub fn new() -> Self {
        Self::with_entries(KAMUS)
    }

    /// Engine over a caller-supplied entry table / Mesin dengan tabel entri sendiri
    pub fn with_entries(entries: &'static [DictionaryEntry]) -> Self {
        Self {
            entries,
            bugis_sources: entries.iter().map(|e| normalize(e.bugis)).collect(),
            indonesian_sources: entries.iter().map(|e| normalize(e.indonesian)).collect(),
        }
    }

    /// The fixed entry table, in table order / Tabel entri kamus
    pub fn entries(&self) -> &'static [DictionaryEntry] {
        self.entries
    }

    /// Ranked dictionary lookup / Pencarian kamus berperingkat
    ///
    /// `direction` picks which side of each entry is matched against the
    /// query; the other side is the translation. All exact results come
    /// first, then contains, then fuzzy, each group in table order (fuzzy:
    /// best ratio first). No (bugis, indonesian) pair appears twice.
    pub fn search(
        &self,
        query: &str,
        direction: Direction,
        max_results: usize,
    ) -> Vec<MatchResult> {
        let q = normalize(query);
        if q.is_empty() {
            return Vec::new();
        }

        let sources = match direction {
            Direction::BugisToIndonesian => &self.bugis_sources,
            Direction::IndonesianToBugis => &self.indonesian_sources,
        };

        let mut results: Vec<MatchResult> = Vec::new();
        let mut seen: HashSet<(&str, &str)> = HashSet::new();

        // 1) exact
        for (i, src) in sources.iter().enumerate() {
            if *src == q {
                let entry = &self.entries[i];
                if seen.insert((entry.bugis, entry.indonesian)) {
                    results.push(MatchResult {
                        kind: MatchKind::Exact,
                        bugis: entry.bugis,
                        indonesian: entry.indonesian,
                    });
                }
            }
        }

        // 2) contains (substring; equality belongs to the exact pass)
        for (i, src) in sources.iter().enumerate() {
            if src.contains(q.as_str()) && *src != q {
                let entry = &self.entries[i];
                if seen.insert((entry.bugis, entry.indonesian)) {
                    results.push(MatchResult {
                        kind: MatchKind::Contains,
                        bugis: entry.bugis,
                        indonesian: entry.indonesian,
                    });
                }
            }
        }

        // 3) fuzzy - runs over the full source column, entries already
        //    matched above included; the seen set drops them at emission
        for candidate in close_matches(&q, sources, FUZZY_CANDIDATES, FUZZY_CUTOFF) {
            // resolve to the first entry with this normalized source word
            if let Some(i) = sources.iter().position(|s| s.as_str() == candidate) {
                let entry = &self.entries[i];
                if seen.insert((entry.bugis, entry.indonesian)) {
                    results.push(MatchResult {
                        kind: MatchKind::Fuzzy,
                        bugis: entry.bugis,
                        indonesian: entry.indonesian,
                    });
                }
            }
        }

        results.truncate(max_results);
        results
    }
}

impl Default for KamusEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Near-match candidates for `query` among `sources`, best first /
/// Kandidat kata yang mendekati kueri
///
/// Keeps the sources whose similarity ratio reaches `cutoff`, sorted by
/// descending ratio; the stable sort keeps table order between equal
/// ratios. At most `limit` candidates are returned.
fn close_matches<'a>(query: &str, sources: &'a [String], limit: usize, cutoff: f64) -> Vec<&'a str> {
    let mut scored: Vec<(f64, &'a str)> = sources
        .iter()
        .map(|src| (similarity_ratio(query, src), src.as_str()))
        .filter(|(ratio, _)| *ratio >= cutoff)
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(limit);
    scored.into_iter().map(|(_, src)| src).collect()
}

/// Similarity ratio in [0, 1] over character sequences / Rasio kemiripan
///
/// `2 * LCS / (len_a + len_b)`: 1.0 for identical strings, 0.0 when no
/// character is shared. Two empty strings count as identical.
fn similarity_ratio(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();

    if len_a + len_b == 0 {
        return 1.0;
    }

    2.0 * lcs_length(a, b) as f64 / (len_a + len_b) as f64
}

/// Longest common subsequence length / Panjang subsekuens bersama terpanjang
fn lcs_length(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let len_a = a_chars.len();
    let len_b = b_chars.len();

    if len_a == 0 || len_b == 0 {
        return 0;
    }

    let mut matrix = vec![vec![0usize; len_b + 1]; len_a + 1];

    for i in 1..=len_a {
        for j in 1..=len_b {
            matrix[i][j] = if a_chars[i - 1] == b_chars[j - 1] {
                matrix[i - 1][j - 1] + 1
            } else {
                matrix[i - 1][j].max(matrix[i][j - 1])
            };
        }
    }

    matrix[len_a][len_b]
}
