//! Domain types: geometry, sprite state and game configuration.

pub mod config;
pub mod geometry;
pub mod sprite;
