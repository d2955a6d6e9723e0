pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod gauge;
pub mod parse;
pub mod report;
pub mod scheme;
pub mod scorer;
pub mod session;
// cmd is a binary module (main.rs); everything it drives lives here so the
// integration tests can reach it.
