pub mod config;
pub mod kamus;
