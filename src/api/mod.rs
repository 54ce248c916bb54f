pub mod pages;
pub mod search;
pub mod server;
