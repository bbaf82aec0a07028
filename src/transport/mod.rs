//! # Reader Transport
//!
//! Drives a [`Scanner`] from anything implementing [`std::io::Read`]: a
//! spool file, stdin, or a socket carrying a single job.
//!
//! Input is pulled in fixed-size chunks and fed in arrival order. The scanner
//! never looks ahead, so chunk boundaries do not affect the events produced.
//!
//! ```
//! use printstream::{EventLog, printer::ChannelConfig, transport::scan_reader};
//!
//! let input: &[u8] = b"HELLO\n";
//! let log = scan_reader(input, ChannelConfig::IBM_1403, EventLog::default(), "job")?;
//! assert!(log.is_complete());
//! # Ok::<(), printstream::PrintStreamError>(())
//! ```

use std::io::{ErrorKind, Read};

use tracing::debug;

use crate::error::PrintStreamError;
use crate::handler::PrinterHandler;
use crate::printer::ChannelConfig;
use crate::scanner::Scanner;

/// Read size per chunk (bytes)
pub const CHUNK_SIZE: usize = 4096;

/// Scan one job from `reader` until EOF and return the handler.
///
/// A read error abandons the job: the handler has seen the events for the
/// bytes read so far, but no job completion.
pub fn scan_reader<R: Read, H: PrinterHandler>(
    mut reader: R,
    config: ChannelConfig,
    handler: H,
    jobinfo: &str,
) -> Result<H, PrintStreamError> {
    let mut scanner = Scanner::with_config(config, handler)?;
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total = 0usize;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        scanner.feed(&buf[..n]);
        total += n;
    }

    debug!(bytes = total, jobinfo, "input exhausted");
    Ok(scanner.finish(jobinfo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::{Event, EventLog};
    use std::io;

    /// Hands out one byte per read, interrupting every other call.
    struct Trickle<'a> {
        data: &'a [u8],
        interrupt: bool,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::new(ErrorKind::Interrupted, "signal"));
            }
            match self.data.split_first() {
                Some((&b, rest)) if !buf.is_empty() => {
                    buf[0] = b;
                    self.data = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    #[test]
    fn test_byte_at_a_time_with_interrupts() {
        let reader = Trickle {
            data: b"AB\r\nXY\x0c",
            interrupt: false,
        };
        let log = scan_reader(reader, ChannelConfig::IBM_1403, EventLog::default(), "j").unwrap();
        assert_eq!(
            log.into_events(),
            vec![
                Event::line("AB", false),
                Event::line("XY", true),
                Event::PageBreak,
                Event::end_of_job("j"),
            ]
        );
    }

    #[test]
    fn test_large_input_spans_chunks() {
        let mut data = Vec::new();
        for _ in 0..1000 {
            data.extend_from_slice(b"0123456789\n");
        }
        let log = scan_reader(&data[..], ChannelConfig::IBM_1403, EventLog::default(), "j").unwrap();
        let events = log.into_events();
        assert_eq!(events.len(), 1001);
        assert!(events[..1000].iter().all(|e| *e == Event::line("0123456789", true)));
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::ConnectionReset, "reset"))
        }
    }

    #[test]
    fn test_read_error_propagates() {
        let result = scan_reader(Broken, ChannelConfig::IBM_1403, EventLog::default(), "j");
        assert!(matches!(result, Err(PrintStreamError::Io(_))));
    }

    #[test]
    fn test_invalid_config() {
        let config = ChannelConfig::IBM_1403.with_max_line_len(0);
        let result = scan_reader(&b""[..], config, EventLog::default(), "j");
        assert!(matches!(result, Err(PrintStreamError::InvalidConfig(_))));

        let config = ChannelConfig::IBM_1403
            .with_max_line_len(usize::MAX)
            .with_tab_width(usize::MAX);
        let result = scan_reader(&b"\t"[..], config, EventLog::default(), "j");
        assert!(matches!(result, Err(PrintStreamError::InvalidConfig(_))));
    }
}
