//! Library half of the `enumfix` binary: config discovery and merging.

pub mod config;
