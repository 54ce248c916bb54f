//! Dictionary lookup module / Modul pencarian kamus
//!
//! The lookup core is a three-tier matcher over a fixed in-memory
//! dictionary of (Bugis, Indonesian) word pairs:
//! - exact: the normalized source word equals the normalized query
//! - contains: the source word has the query as a substring
//! - fuzzy: similarity ratio against every source word
//!
//! The module only exposes primitives (normalize, search, the entry
//! table); how results are presented is up to the HTTP handlers.
//! The dictionary is embedded at compile time and never mutated, so
//! lookups need no locking / Kamus tertanam saat kompilasi dan tidak
//! pernah berubah, pencarian tidak memerlukan kunci.

pub mod dictionary;
pub mod engine;
pub mod normalizer;
pub mod schema;

pub use dictionary::{DictionaryEntry, KAMUS};
pub use engine::{KamusEngine, DEFAULT_MAX_RESULTS};
pub use normalizer::normalize;
pub use schema::{Direction, MatchKind, MatchResult};
