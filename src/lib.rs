//! vidshelf - stream a directory of videos to the browser
//!
//! This library crate exposes the server pieces for integration testing.

pub mod config;
pub mod server;
pub mod streaming;
