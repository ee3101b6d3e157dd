//! basicpage - single-page demo site.
//!
//! Loads a local stylesheet and a remote Lottie animation at startup and
//! serves a static two-column page around them.

pub mod assets;
pub mod cli;
pub mod config;
pub mod http_client;
pub mod notice;
pub mod page;
pub mod server;
