//! # Printer Stream Scanner
//!
//! Turns a raw printer channel byte stream into print events, one byte at a
//! time, with no lookahead and no buffering past the current line.
//!
//! ## Byte Dispatch
//!
//! | Input | Effect |
//! |-------|--------|
//! | printable | Append at the cursor; dropped (or wrapped) once the line is full |
//! | HT | Pad with spaces to the next tab stop, capped at the line end |
//! | LF | Close the line with paper advance |
//! | CR | Close the line without paper advance (next line overstrikes it) |
//! | FF | Close any line in progress, then page break |
//! | end of job | Close any line in progress, then job completion |
//!
//! An LF directly after a CR belongs to the CR: the pair produces a single
//! overstrike line event, even when the two bytes arrive in separate chunks.
//!
//! ## Example
//!
//! ```
//! use printstream::{Event, EventLog, Scanner};
//!
//! let mut scanner = Scanner::new(EventLog::default());
//! scanner.feed(b"BOLD\rBOLD\n");
//! scanner.feed(b"plain");
//! let log = scanner.finish("JOB00042");
//!
//! assert_eq!(
//!     log.events(),
//!     &[
//!         Event::line("BOLD", false),
//!         Event::line("BOLD", true),
//!         Event::line("plain", true),
//!         Event::end_of_job("JOB00042"),
//!     ]
//! );
//! ```
//!
//! ## Ownership
//!
//! [`Scanner::finish`] consumes the scanner, so nothing can be fed after the
//! job is closed, and [`Scanner::feed`] takes `&mut self`, so one instance is
//! never driven by two callers at once. Use one scanner per job.

use tracing::{debug, trace};

use crate::error::PrintStreamError;
use crate::handler::PrinterHandler;
use crate::printer::{ChannelConfig, Overflow};
use crate::protocol::ChannelByte;

/// Streaming carriage-control state machine for a single job.
#[derive(Debug)]
pub struct Scanner<H: PrinterHandler> {
    config: ChannelConfig,
    handler: H,

    /// Characters of the line being assembled
    line: String,
    /// Print position of the next character, `0..=max_line_len`
    column: usize,
    /// The previous byte was a CR, so an LF now is part of it
    after_cr: bool,
}

impl<H: PrinterHandler> Scanner<H> {
    /// Create a scanner for an IBM 1403 channel (132 columns, truncating).
    pub fn new(handler: H) -> Self {
        Self::from_valid_config(ChannelConfig::IBM_1403, handler)
    }

    /// Create a scanner with a custom channel geometry.
    pub fn with_config(config: ChannelConfig, handler: H) -> Result<Self, PrintStreamError> {
        config.validate()?;
        Ok(Self::from_valid_config(config, handler))
    }

    fn from_valid_config(config: ChannelConfig, handler: H) -> Self {
        Self {
            line: String::new(),
            column: 0,
            after_cr: false,
            config,
            handler,
        }
    }

    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    /// The handler receiving events.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Current print position on the line being assembled.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Whether anything has been typed since the last line closed.
    pub fn line_in_progress(&self) -> bool {
        !self.line.is_empty() || self.column > 0
    }

    /// Process the next chunk of the stream.
    pub fn feed(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.push_byte(byte);
        }
    }

    /// Process a single byte.
    pub fn push_byte(&mut self, byte: u8) {
        let class = ChannelByte::classify(byte);
        let after_cr = std::mem::replace(&mut self.after_cr, false);

        match class {
            ChannelByte::Printable(b) => self.put_char(char::from(b)),
            ChannelByte::Tab => self.tab(),
            // The CR already closed this line
            ChannelByte::LineFeed if after_cr => {}
            ChannelByte::LineFeed => self.close_line(true),
            ChannelByte::CarriageReturn => {
                self.close_line(false);
                self.after_cr = true;
            }
            ChannelByte::FormFeed => {
                if self.line_in_progress() {
                    self.close_line(true);
                }
                trace!("page break");
                self.handler.page_break();
            }
        }
    }

    /// End of stream: flush any partial line, signal job completion, and hand
    /// the handler back.
    pub fn finish(mut self, jobinfo: &str) -> H {
        if self.line_in_progress() {
            self.close_line(true);
        }
        debug!(jobinfo, "end of job");
        self.handler.end_of_job(jobinfo);
        self.handler
    }

    fn put_char(&mut self, ch: char) {
        if self.column >= self.config.max_line_len {
            match self.config.overflow {
                Overflow::Truncate => return,
                Overflow::Wrap => self.close_line(true),
            }
        }
        self.line.push(ch);
        self.column += 1;
    }

    fn tab(&mut self) {
        let stop = self.config.next_tab_stop(self.column);
        while self.column < stop {
            self.line.push(' ');
            self.column += 1;
        }
    }

    fn close_line(&mut self, linefeed: bool) {
        debug_assert!(self.column <= self.config.max_line_len);
        trace!(columns = self.column, linefeed, "line complete");
        self.handler.add_line(&self.line, linefeed);
        self.line.clear();
        self.column = 0;
    }
}

/// Scan a complete in-memory job with the default channel configuration.
pub fn scan<H: PrinterHandler>(bytes: &[u8], handler: H, jobinfo: &str) -> H {
    let mut scanner = Scanner::new(handler);
    scanner.feed(bytes);
    scanner.finish(jobinfo)
}
