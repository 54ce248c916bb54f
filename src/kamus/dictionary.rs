//! Embedded dictionary dataset / Dataset kamus tertanam
//!
//! The dataset is a fixed table baked into the binary; extending the
//! dictionary means adding rows here and recompiling. Entry order is
//! load-bearing: when several entries share a normalized source word,
//! the fuzzy pass resolves to the first one in table order.

/// A single dictionary pair / Satu pasangan kata kamus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Bugis word / Kata Bugis
    pub bugis: &'static str,
    /// Indonesian gloss / Arti dalam bahasa Indonesia
    pub indonesian: &'static str,
}

impl DictionaryEntry {
    pub const fn new(bugis: &'static str, indonesian: &'static str) -> Self {
        Self { bugis, indonesian }
    }
}

/// The built-in dictionary / Kamus bawaan
pub const KAMUS: &[DictionaryEntry] = &[
    DictionaryEntry::new("iye", "ya"),
    DictionaryEntry::new("tania", "tidak"),
    DictionaryEntry::new("makanja", "enak/baik"),
    DictionaryEntry::new("sipakatau", "saling memanusiakan"),
    DictionaryEntry::new("mappasitinaja", "mengucapkan terima kasih"),
    DictionaryEntry::new("sitinaja", "terima kasih"),
    DictionaryEntry::new("assalamu alaikum", "salam"),
    DictionaryEntry::new("waalaikumsalam", "balasan salam"),
    DictionaryEntry::new("bajik", "baik"),
    DictionaryEntry::new("malebbi", "sopan/beradab"),
    DictionaryEntry::new("pake", "pakai"),
    DictionaryEntry::new("riolo", "dulu"),
    DictionaryEntry::new("rioloe", "yang dahulu"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kamus_is_not_empty() {
        assert!(!KAMUS.is_empty());
    }

    #[test]
    fn test_kamus_entries_are_populated() {
        for entry in KAMUS {
            assert!(!entry.bugis.trim().is_empty());
            assert!(!entry.indonesian.trim().is_empty());
        }
    }
}
