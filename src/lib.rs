//! Rcharts - Turn a weekly Billboard Hot 100 chart into a Spotify playlist
//!
//! This library fetches the chart for a given week, resolves every entry
//! against a track catalog and collects the hits into a private playlist.

/// Chart fetch and playlist build orchestration
pub mod app;
/// Playlist assembly on top of a track catalog
pub mod builder;
/// Client modules for interacting with external services
pub mod clients;
mod macros;
/// Chart page parsing
pub mod parser;
/// Interactive date entry
pub mod prompt;
