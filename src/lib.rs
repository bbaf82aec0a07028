//! # Printstream - Line Printer Channel Scanner
//!
//! Printstream turns the raw output a mainframe-style system sends to a
//! spooled high-speed line printer into print events:
//!
//! - **Lines**: completed text lines, tagged with whether the paper advanced
//!   (overstrike lines do not)
//! - **Page breaks**: one per form feed
//! - **Job completion**: exactly one, always last
//!
//! Carriage control is reproduced the way an IBM 1403 channel behaves: tab
//! expansion, a hard 132-column limit, CR overstrike, and form-feed page
//! throws, all incrementally with no lookahead.
//!
//! ## Quick Start
//!
//! ```
//! use printstream::{Event, EventLog, Scanner};
//!
//! let mut scanner = Scanner::new(EventLog::default());
//! scanner.feed(b"REPORT\t1\n");
//! scanner.feed(b"\x0cPAGE 2");
//! let log = scanner.finish("JOB00042 PAYROLL");
//!
//! assert_eq!(
//!     log.events(),
//!     &[
//!         Event::line("REPORT  1", true),
//!         Event::PageBreak,
//!         Event::line("PAGE 2", true),
//!         Event::end_of_job("JOB00042 PAYROLL"),
//!     ]
//! );
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | Carriage-control bytes |
//! | [`printer`] | Channel geometry |
//! | [`scanner`] | The streaming state machine |
//! | [`handler`] | Event handler trait and in-memory handlers |
//! | [`listing`] | Handlers that write text or JSON output |
//! | [`transport`] | Driving a scanner from a reader |
//! | [`error`] | Error types |

pub mod error;
pub mod handler;
pub mod listing;
pub mod printer;
pub mod protocol;
pub mod scanner;
pub mod transport;

// Re-exports for convenience
pub use error::PrintStreamError;
pub use handler::{Event, EventLog, JobStats, PrinterHandler};
pub use listing::{JsonLines, Listing};
pub use printer::{ChannelConfig, Overflow};
pub use scanner::{Scanner, scan};
