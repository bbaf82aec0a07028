//! # Printer Module
//!
//! This module provides printer channel configurations.
//!
//! ## Modules
//!
//! - [`config`]: Line geometry (columns, tab stops, overflow policy)

pub mod config;

pub use config::{ChannelConfig, MAX_LINE_LEN, Overflow};
