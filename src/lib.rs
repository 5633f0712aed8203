//! gh-activity library
//!
//! Loads a GitHub user's recent public events and presents them as a
//! paginated timeline. The binary wires these modules into a terminal UI.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod report;
pub mod services;
pub mod tui;
