//! # Printer Channel Protocol
//!
//! Byte-level vocabulary of a spooled line-printer channel.
//!
//! ## Module Structure
//!
//! - [`control`]: Carriage-control byte constants and classification

pub mod control;

pub use control::ChannelByte;
