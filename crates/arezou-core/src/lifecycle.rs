//! Request lifecycle tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Lifecycle phases for a page response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Request received, nothing written yet.
    Start,
    /// Shell HTML has been written.
    ShellSent,
    /// A named section has been written.
    SectionSent(String),
    /// Closing markup written, response finished.
    Completion,
}

/// Timing marks for a single request.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: HashMap<String, Instant>,
}

impl TimingContext {
    /// Create a new timing context.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: HashMap::new(),
        }
    }

    /// Record a timing mark.
    pub fn mark(&mut self, name: &str) {
        self.marks.insert(name.to_string(), Instant::now());
    }

    /// Mark section start.
    pub fn mark_section_start(&mut self, section: &str) {
        self.mark(&format!("section_{}_start", section));
    }

    /// Mark section sent.
    pub fn mark_section_sent(&mut self, section: &str) {
        self.mark(&format!("section_{}_sent", section));
    }

    /// Whether a mark has been recorded.
    pub fn has_mark(&self, name: &str) -> bool {
        self.marks.contains_key(name)
    }

    /// Get elapsed time since start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Get time to shell flush.
    pub fn time_to_shell(&self) -> Option<Duration> {
        self.marks
            .get("shell_sent")
            .map(|t| t.duration_since(self.start))
    }

    /// Get time to first section.
    pub fn time_to_first_section(&self) -> Option<Duration> {
        self.marks
            .iter()
            .filter(|(k, _)| k.ends_with("_sent") && k.starts_with("section_"))
            .map(|(_, t)| t.duration_since(self.start))
            .min()
    }

    /// Get timing for a specific section.
    pub fn section_timing(&self, section: &str) -> Option<SectionTiming> {
        let start = self.marks.get(&format!("section_{}_start", section))?;
        let sent = self.marks.get(&format!("section_{}_sent", section))?;

        Some(SectionTiming {
            name: section.to_string(),
            start: start.duration_since(self.start),
            sent: sent.duration_since(self.start),
            duration: sent.duration_since(*start),
        })
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Timing information for a section.
#[derive(Debug, Clone)]
pub struct SectionTiming {
    /// Section name.
    pub name: String,
    /// Time from request start to section start.
    pub start: Duration,
    /// Time from request start to section sent.
    pub sent: Duration,
    /// Duration of section rendering.
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_timing_requires_both_marks() {
        let mut timing = TimingContext::new();
        timing.mark_section_start("gallery");
        assert!(timing.section_timing("gallery").is_none());

        timing.mark_section_sent("gallery");
        let section = timing.section_timing("gallery").unwrap();
        assert_eq!(section.name, "gallery");
        assert!(section.sent >= section.start);
    }

    #[test]
    fn test_time_to_first_section() {
        let mut timing = TimingContext::new();
        assert!(timing.time_to_first_section().is_none());
        timing.mark("shell_sent");
        timing.mark_section_sent("details");
        assert!(timing.time_to_shell().is_some());
        assert!(timing.time_to_first_section().is_some());
    }
}
