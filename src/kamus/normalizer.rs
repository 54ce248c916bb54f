//! Query and entry normalization / Normalisasi kueri dan entri
//!
//! Matching never compares raw strings: both the query and the dictionary
//! source words go through [`normalize`] first, so case and stray whitespace
//! cannot affect results.

/// Canonicalize text for comparison / Standarkan teks untuk perbandingan
///
/// - Strip leading and trailing whitespace / Buang spasi di awal dan akhir
/// - Lowercase / Ubah ke huruf kecil
/// - Collapse internal whitespace runs to a single space / Rapatkan spasi berurutan
///
/// Always returns a string, possibly empty. A missing HTTP parameter
/// reaches this function as an empty string.
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  IYE  "), "iye");
        assert_eq!(normalize("Tania"), "tania");
        assert_eq!(normalize("iye"), "iye");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("assalamu   alaikum"), "assalamu alaikum");
        assert_eq!(normalize("a\t b\n\nc"), "a b c");
        assert_eq!(normalize(" terima \t kasih "), "terima kasih");
    }

    #[test]
    fn test_normalize_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("\t\n"), "");
    }
}
