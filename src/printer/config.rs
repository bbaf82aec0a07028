//! # Channel Configuration
//!
//! This module defines the line geometry of a printer channel.
//!
//! ## Supported Printers
//!
//! | Model | Columns | Tab stops | Overflow |
//! |-------|---------|-----------|----------|
//! | IBM 1403 | 132 | every 8 | truncate |
//!
//! ## Usage
//!
//! ```
//! use printstream::printer::{ChannelConfig, Overflow};
//!
//! let config = ChannelConfig::IBM_1403.with_overflow(Overflow::Wrap);
//! assert_eq!(config.max_line_len, 132);
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PrintStreamError;

/// Widest line any channel may be configured for, in print positions
pub const MAX_LINE_LEN: usize = 255;

/// What happens to printable bytes past the last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Drop the byte. The print chain has no column to strike it on.
    #[default]
    Truncate,
    /// Close the full line with a paper advance and continue on the next.
    Wrap,
}

impl FromStr for Overflow {
    type Err = PrintStreamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "truncate" => Ok(Overflow::Truncate),
            "wrap" => Ok(Overflow::Wrap),
            other => Err(PrintStreamError::InvalidConfig(format!(
                "unknown overflow policy '{}' (expected 'truncate' or 'wrap')",
                other
            ))),
        }
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Overflow::Truncate => f.write_str("truncate"),
            Overflow::Wrap => f.write_str("wrap"),
        }
    }
}

/// # Channel Configuration
///
/// Defines the line geometry the scanner enforces.
///
/// - **max_line_len**: Printable columns per line
/// - **tab_width**: Distance between tab stops
/// - **overflow**: Policy for bytes past `max_line_len`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChannelConfig {
    /// Printer model name
    pub name: &'static str,

    /// Maximum printable columns per line
    pub max_line_len: usize,

    /// Tab stops fall on multiples of this width
    pub tab_width: usize,

    /// Policy for printable bytes past the last column
    pub overflow: Overflow,
}

impl ChannelConfig {
    /// # IBM 1403 Configuration
    ///
    /// The classic chain printer: 132 print positions per line.
    ///
    /// ```text
    /// │◄──────────── 132 print positions ────────────►│
    /// │T       T       T       T   ...   T       T    │
    /// ```
    pub const IBM_1403: Self = Self {
        name: "IBM 1403",
        max_line_len: 132,
        tab_width: 8,
        overflow: Overflow::Truncate,
    };

    /// IBM 1403 geometry that wraps long lines instead of dropping bytes.
    pub const IBM_1403_WRAP: Self = Self {
        name: "IBM 1403 (wrap)",
        overflow: Overflow::Wrap,
        ..Self::IBM_1403
    };

    /// Same config with a different line length
    pub const fn with_max_line_len(self, max_line_len: usize) -> Self {
        Self {
            max_line_len,
            ..self
        }
    }

    /// Same config with a different tab width
    pub const fn with_tab_width(self, tab_width: usize) -> Self {
        Self { tab_width, ..self }
    }

    /// Same config with a different overflow policy
    pub const fn with_overflow(self, overflow: Overflow) -> Self {
        Self { overflow, ..self }
    }

    /// Check the geometry is usable.
    pub fn validate(&self) -> Result<(), PrintStreamError> {
        if self.max_line_len == 0 {
            return Err(PrintStreamError::InvalidConfig(
                "line length must be at least 1 column".to_string(),
            ));
        }
        if self.max_line_len > MAX_LINE_LEN {
            return Err(PrintStreamError::InvalidConfig(format!(
                "line length {} exceeds the {} column limit",
                self.max_line_len, MAX_LINE_LEN
            )));
        }
        if self.tab_width == 0 {
            return Err(PrintStreamError::InvalidConfig(
                "tab width must be at least 1 column".to_string(),
            ));
        }
        if self.tab_width > self.max_line_len {
            return Err(PrintStreamError::InvalidConfig(format!(
                "tab width {} exceeds line length {}",
                self.tab_width, self.max_line_len
            )));
        }
        Ok(())
    }

    /// Column a tab at `column` moves to, capped at the line end.
    ///
    /// ```
    /// use printstream::printer::ChannelConfig;
    ///
    /// let config = ChannelConfig::IBM_1403;
    /// assert_eq!(config.next_tab_stop(0), 8);
    /// assert_eq!(config.next_tab_stop(8), 16);
    /// assert_eq!(config.next_tab_stop(130), 132);
    /// ```
    #[inline]
    pub fn next_tab_stop(&self, column: usize) -> usize {
        (column / self.tab_width + 1)
            .saturating_mul(self.tab_width)
            .min(self.max_line_len)
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self::IBM_1403
    }
}
