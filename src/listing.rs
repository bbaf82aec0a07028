//! # Output Handlers
//!
//! Handlers that write a scanned job somewhere as it is scanned.
//!
//! - [`Listing`]: plain-text listing, one text line per physical print line
//! - [`JsonLines`]: one JSON object per event
//!
//! Both write straight through from the handler callbacks, so a slow writer
//! slows the scanner down rather than queuing events. The handler interface
//! has no error channel; the first I/O error is latched, later output is
//! skipped, and the error is returned from `into_inner`.

use std::io::{self, Write};

use crate::error::PrintStreamError;
use crate::handler::{Event, PrinterHandler};

/// Form feed written between pages of a listing
const PAGE_SEPARATOR: &[u8] = b"\x0c";

/// # Plain Text Listing
///
/// Composes overstruck lines into the physical line they print on: each
/// overlay's non-space characters replace what is underneath, the way a
/// second strike of the print chain covers the first. Underlining
/// (`TOTAL\r_____\n`) therefore lists as the underscores, and bolding
/// (`TOTAL\rTOTAL\n`) as the text.
///
/// Trailing spaces are trimmed. Page breaks are written as form feeds.
///
/// ```
/// use printstream::{Listing, scan};
///
/// let listing = scan(b"PAGE 1\rPAGE 1\n\x0cPAGE 2\n", Listing::new(Vec::new()), "job");
/// let out = listing.into_inner().unwrap();
/// assert_eq!(out, b"PAGE 1\n\x0cPAGE 2\n");
/// ```
#[derive(Debug)]
pub struct Listing<W: Write> {
    writer: W,
    /// Physical line under construction while overlays arrive
    physical: Vec<char>,
    /// An overlay is waiting for its paper advance
    pending: bool,
    error: Option<io::Error>,
}

impl<W: Write> Listing<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            physical: Vec::new(),
            pending: false,
            error: None,
        }
    }

    /// Return the writer, or the first error hit while writing to it.
    pub fn into_inner(self) -> Result<W, PrintStreamError> {
        match self.error {
            Some(err) => Err(err.into()),
            None => Ok(self.writer),
        }
    }

    fn overlay(&mut self, line: &str) {
        for (col, ch) in line.chars().enumerate() {
            if col >= self.physical.len() {
                self.physical.push(ch);
            } else if ch != ' ' {
                self.physical[col] = ch;
            }
        }
    }

    fn emit_physical(&mut self) {
        let text: String = self.physical.iter().collect();
        let text = text.trim_end_matches(' ');
        self.write(|w| writeln!(w, "{}", text));
        self.physical.clear();
        self.pending = false;
    }

    fn write(&mut self, op: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = op(&mut self.writer) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> PrinterHandler for Listing<W> {
    fn add_line(&mut self, line: &str, linefeed: bool) {
        self.overlay(line);
        if linefeed {
            self.emit_physical();
        } else {
            self.pending = true;
        }
    }

    fn page_break(&mut self) {
        // An overlay never followed by an advance still printed
        if self.pending {
            self.emit_physical();
        }
        self.write(|w| w.write_all(PAGE_SEPARATOR));
    }

    fn end_of_job(&mut self, _jobinfo: &str) {
        if self.pending {
            self.emit_physical();
        }
        self.write(|w| w.flush());
    }
}

/// # JSON Lines Event Stream
///
/// Writes each [`Event`] as a single-line JSON object:
///
/// ```text
/// {"event":"line","text":"HELLO","linefeed":true}
/// {"event":"page_break"}
/// {"event":"end_of_job","jobinfo":"JOB00042"}
/// ```
#[derive(Debug)]
pub struct JsonLines<W: Write> {
    writer: W,
    error: Option<PrintStreamError>,
}

impl<W: Write> JsonLines<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Return the writer, or the first error hit while writing to it.
    pub fn into_inner(self) -> Result<W, PrintStreamError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.writer),
        }
    }

    fn emit(&mut self, event: &Event) {
        self.write(|w| {
            serde_json::to_writer(&mut *w, event)?;
            w.write_all(b"\n")?;
            Ok(())
        });
    }

    fn write(&mut self, op: impl FnOnce(&mut W) -> Result<(), PrintStreamError>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = op(&mut self.writer) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> PrinterHandler for JsonLines<W> {
    fn add_line(&mut self, line: &str, linefeed: bool) {
        self.emit(&Event::line(line, linefeed));
    }

    fn page_break(&mut self) {
        self.emit(&Event::PageBreak);
    }

    fn end_of_job(&mut self, jobinfo: &str) {
        self.emit(&Event::end_of_job(jobinfo));
        self.write(|w| Ok(w.flush()?));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;

    fn listing(input: &[u8]) -> String {
        let listing = scan(input, Listing::new(Vec::new()), "job");
        String::from_utf8(listing.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_plain_lines() {
        assert_eq!(listing(b"ONE\nTWO\n\nFOUR"), "ONE\nTWO\n\nFOUR\n");
    }

    #[test]
    fn test_underline_overstrike() {
        assert_eq!(listing(b"TOTAL  42\r_____\n"), "_____  42\n");
    }

    #[test]
    fn test_longer_overlay_extends_line() {
        assert_eq!(listing(b"AB\r    CD\n"), "AB  CD\n");
    }

    #[test]
    fn test_trailing_spaces_trimmed() {
        assert_eq!(listing(b"A\t\n"), "A\n");
    }

    #[test]
    fn test_pending_overlay_flushed_at_page_break() {
        assert_eq!(listing(b"AB\r\x0cCD\n"), "AB\n\x0cCD\n");
    }

    #[test]
    fn test_pending_overlay_flushed_at_end() {
        assert_eq!(listing(b"AB\r"), "AB\n");
    }

    #[test]
    fn test_json_lines() {
        let out = scan(b"AB\r\x0c", JsonLines::new(Vec::new()), "JOB1");
        let out = String::from_utf8(out.into_inner().unwrap()).unwrap();
        assert_eq!(
            out,
            concat!(
                "{\"event\":\"line\",\"text\":\"AB\",\"linefeed\":false}\n",
                "{\"event\":\"page_break\"}\n",
                "{\"event\":\"end_of_job\",\"jobinfo\":\"JOB1\"}\n",
            )
        );
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_errors_latched() {
        let listing = scan(b"A\nB\n", Listing::new(FailingWriter), "job");
        assert!(matches!(listing.into_inner(), Err(PrintStreamError::Io(_))));

        let json = scan(b"A\n", JsonLines::new(FailingWriter), "job");
        assert!(matches!(json.into_inner(), Err(PrintStreamError::Io(_))));
    }

    struct FailingFlush(Vec<u8>);

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_flush_error_at_end_of_job_latched() {
        let json = scan(b"A\n", JsonLines::new(FailingFlush(Vec::new())), "job");
        assert!(matches!(json.into_inner(), Err(PrintStreamError::Io(_))));

        let listing = scan(b"A\n", Listing::new(FailingFlush(Vec::new())), "job");
        assert!(matches!(listing.into_inner(), Err(PrintStreamError::Io(_))));
    }
}
