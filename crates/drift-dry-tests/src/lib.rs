// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles for Drift crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory `ConfigStore` fake with call counters and failure injection
//! - [`port`] - Recording `ConfigPort` fake for asserting save calls

pub mod config;
pub mod port;

pub use config::InMemoryConfigStore;
pub use port::{RecordingConfigPort, SaveCall};
