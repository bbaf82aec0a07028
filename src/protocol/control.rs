//! # Carriage Control Bytes
//!
//! A spooled line-printer channel carries text plus four carriage-control
//! bytes. Character-set translation has already happened upstream, so these
//! four values never appear as printable data.
//!
//! | Byte | Hex | Effect |
//! |------|-----|--------|
//! | HT | 0x09 | Advance to the next tab stop |
//! | LF | 0x0A | Print line, advance paper one line |
//! | FF | 0x0C | Print line, throw to top of next page |
//! | CR | 0x0D | Print line, no paper advance (overstrike) |
//!
//! Every other byte value is printable.

/// HT (Horizontal Tab) - Advance to next tab position
///
/// Pads the line with spaces up to the next tab stop.
pub const HT: u8 = 0x09;

/// LF (Line Feed) - Print and advance one line
pub const LF: u8 = 0x0A;

/// FF (Form Feed) - Print and throw to the next page
pub const FF: u8 = 0x0C;

/// CR (Carriage Return) - Print without advancing paper
///
/// Whatever follows is struck over the same physical line.
pub const CR: u8 = 0x0D;

/// Meaning of a single channel byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelByte {
    /// Ordinary character, carried as its byte value.
    Printable(u8),
    Tab,
    LineFeed,
    FormFeed,
    CarriageReturn,
}

impl ChannelByte {
    /// Classify a byte. The alphabet is total, so this never fails.
    ///
    /// ```
    /// use printstream::protocol::control::{ChannelByte, FF};
    ///
    /// assert_eq!(ChannelByte::classify(FF), ChannelByte::FormFeed);
    /// assert_eq!(ChannelByte::classify(b'A'), ChannelByte::Printable(b'A'));
    /// ```
    #[inline]
    pub const fn classify(byte: u8) -> Self {
        match byte {
            HT => ChannelByte::Tab,
            LF => ChannelByte::LineFeed,
            FF => ChannelByte::FormFeed,
            CR => ChannelByte::CarriageReturn,
            other => ChannelByte::Printable(other),
        }
    }
}
