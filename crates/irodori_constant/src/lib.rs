//! Shared constants for irodori.

pub mod app;
pub mod theme;
pub mod upstream;
