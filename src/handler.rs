//! # Print Event Handlers
//!
//! The scanner reports what it finds through [`PrinterHandler`], a three
//! operation interface invoked synchronously and in stream order:
//!
//! 1. [`add_line`](PrinterHandler::add_line) once per completed line
//! 2. [`page_break`](PrinterHandler::page_break) once per form feed
//! 3. [`end_of_job`](PrinterHandler::end_of_job) exactly once, always last
//!
//! Two in-memory handlers live here: [`EventLog`] records the tagged event
//! sequence and [`JobStats`] keeps a running summary. Handlers that write
//! output are in [`crate::listing`].

use serde::Serialize;

/// Receives the output of printer stream scanning.
pub trait PrinterHandler {
    /// A line is complete.
    ///
    /// `linefeed` is `true` when the paper advanced after the line, `false`
    /// when the next line overstrikes this one.
    fn add_line(&mut self, line: &str, linefeed: bool);

    /// Throw to the top of the next page.
    fn page_break(&mut self);

    /// The job is over. `jobinfo` is the caller's descriptor.
    fn end_of_job(&mut self, jobinfo: &str);
}

impl<H: PrinterHandler + ?Sized> PrinterHandler for &mut H {
    fn add_line(&mut self, line: &str, linefeed: bool) {
        (**self).add_line(line, linefeed);
    }

    fn page_break(&mut self) {
        (**self).page_break();
    }

    fn end_of_job(&mut self, jobinfo: &str) {
        (**self).end_of_job(jobinfo);
    }
}

impl<H: PrinterHandler + ?Sized> PrinterHandler for Box<H> {
    fn add_line(&mut self, line: &str, linefeed: bool) {
        (**self).add_line(line, linefeed);
    }

    fn page_break(&mut self) {
        (**self).page_break();
    }

    fn end_of_job(&mut self, jobinfo: &str) {
        (**self).end_of_job(jobinfo);
    }
}

/// One scanner output, as a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// A completed line and whether the paper advanced after it
    Line { text: String, linefeed: bool },
    /// Page throw
    PageBreak,
    /// Job completion with the caller's descriptor
    EndOfJob { jobinfo: String },
}

impl Event {
    /// Shorthand for a line event.
    pub fn line(text: impl Into<String>, linefeed: bool) -> Self {
        Event::Line {
            text: text.into(),
            linefeed,
        }
    }

    /// Shorthand for a job completion event.
    pub fn end_of_job(jobinfo: impl Into<String>) -> Self {
        Event::EndOfJob {
            jobinfo: jobinfo.into(),
        }
    }
}

/// Records every event in order.
///
/// ```
/// use printstream::{Event, EventLog, scan};
///
/// let log = scan(b"AB\x0c", EventLog::default(), "job 1");
/// assert_eq!(
///     log.events(),
///     &[Event::line("AB", true), Event::PageBreak, Event::end_of_job("job 1")]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// Whether the job completion event has been recorded.
    pub fn is_complete(&self) -> bool {
        matches!(self.events.last(), Some(Event::EndOfJob { .. }))
    }
}

impl PrinterHandler for EventLog {
    fn add_line(&mut self, line: &str, linefeed: bool) {
        self.events.push(Event::line(line, linefeed));
    }

    fn page_break(&mut self) {
        self.events.push(Event::PageBreak);
    }

    fn end_of_job(&mut self, jobinfo: &str) {
        self.events.push(Event::end_of_job(jobinfo));
    }
}

/// Running summary of a job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobStats {
    /// Line events, overstrikes included
    pub lines: usize,
    /// Lines with no content
    pub blank_lines: usize,
    /// Lines closed without paper advance
    pub overstrikes: usize,
    pub page_breaks: usize,
    /// Longest line seen, in columns
    pub longest_line: usize,
    /// Set once the job completes
    pub jobinfo: Option<String>,
}

impl JobStats {
    /// Physical pages touched by the job: one plus every page throw, or zero
    /// for a job that printed nothing at all.
    ///
    /// A throw always leaves the page it starts on, even a blank one, so a
    /// job that is a single form feed spans two pages.
    pub fn pages(&self) -> usize {
        if self.lines == 0 && self.page_breaks == 0 {
            0
        } else {
            self.page_breaks + 1
        }
    }
}

impl PrinterHandler for JobStats {
    fn add_line(&mut self, line: &str, linefeed: bool) {
        self.lines += 1;
        if line.is_empty() {
            self.blank_lines += 1;
        }
        if !linefeed {
            self.overstrikes += 1;
        }
        self.longest_line = self.longest_line.max(line.chars().count());
    }

    fn page_break(&mut self) {
        self.page_breaks += 1;
    }

    fn end_of_job(&mut self, jobinfo: &str) {
        self.jobinfo = Some(jobinfo.to_string());
    }
}
