//! USC Bulk XML Fetcher Library
//!
//! This library provides the core functionality for the `uscget` CLI:
//! locating the current bulk XML ZIP link on uscode.house.gov, streaming
//! the archive to disk, and unpacking it into a local XML directory.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;
