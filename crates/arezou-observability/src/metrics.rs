//! Render timing metrics.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use arezou_core::RequestId;
use serde::{Deserialize, Serialize};

/// Metrics for a single page response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestMetrics {
    /// Request ID for correlation.
    pub request_id: String,
    /// Page name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// Route path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Time to shell flush (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_shell_us: Option<u64>,
    /// Time to first section (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_first_section_us: Option<u64>,
    /// Section timings, keyed by section name.
    pub sections: BTreeMap<String, SectionMetrics>,
    /// Total response duration (microseconds).
    pub total_duration_us: u64,
    /// Total bytes written.
    pub total_bytes: usize,
    /// HTTP status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// Metrics for a single section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionMetrics {
    /// Section name.
    pub name: String,
    /// Order in which the section was sent (0-based).
    pub order: usize,
    /// Time from request start to section start (microseconds).
    pub start_us: u64,
    /// Section render and write duration (microseconds).
    pub duration_us: u64,
    /// Bytes sent for this section.
    pub bytes: usize,
}

/// Collector for render metrics.
#[derive(Debug)]
pub struct MetricsCollector {
    request_id: RequestId,
    page: Option<String>,
    route: Option<String>,
    start: Instant,
    shell_sent: Option<Instant>,
    shell_bytes: usize,
    first_section_sent: Option<Instant>,
    sections: BTreeMap<String, SectionMetricsBuilder>,
}

#[derive(Debug)]
struct SectionMetricsBuilder {
    order: usize,
    start: Instant,
    sent: Option<Instant>,
    bytes: usize,
}

impl MetricsCollector {
    /// Create a new metrics collector.
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            page: None,
            route: None,
            start: Instant::now(),
            shell_sent: None,
            shell_bytes: 0,
            first_section_sent: None,
            sections: BTreeMap::new(),
        }
    }

    /// Set page name.
    pub fn set_page(&mut self, page: impl Into<String>) {
        self.page = Some(page.into());
    }

    /// Set route path.
    pub fn set_route(&mut self, route: impl Into<String>) {
        self.route = Some(route.into());
    }

    /// Record shell sent.
    pub fn record_shell_sent(&mut self, bytes: usize) {
        self.shell_sent = Some(Instant::now());
        self.shell_bytes = bytes;
    }

    /// Record section start.
    pub fn record_section_start(&mut self, name: &str) {
        let order = self.sections.len();
        self.sections.insert(
            name.to_string(),
            SectionMetricsBuilder {
                order,
                start: Instant::now(),
                sent: None,
                bytes: 0,
            },
        );
    }

    /// Record section sent.
    pub fn record_section_sent(&mut self, name: &str, bytes: usize) {
        let now = Instant::now();

        if self.first_section_sent.is_none() {
            self.first_section_sent = Some(now);
        }

        let order = self.sections.len();
        let section = self
            .sections
            .entry(name.to_string())
            .or_insert(SectionMetricsBuilder {
                order,
                start: now,
                sent: None,
                bytes: 0,
            });
        section.sent = Some(now);
        section.bytes = bytes;
    }

    /// Finalize and return the metrics.
    pub fn finalize(self, status_code: Option<u16>) -> RequestMetrics {
        let now = Instant::now();
        let start = self.start;
        let micros = |d: Duration| d.as_micros() as u64;

        let sections: BTreeMap<String, SectionMetrics> = self
            .sections
            .into_iter()
            .map(|(name, builder)| {
                let sent = builder.sent.unwrap_or(now);
                (
                    name.clone(),
                    SectionMetrics {
                        name,
                        order: builder.order,
                        start_us: micros(builder.start.duration_since(start)),
                        duration_us: micros(sent.duration_since(builder.start)),
                        bytes: builder.bytes,
                    },
                )
            })
            .collect();

        let total_bytes = self.shell_bytes + sections.values().map(|s| s.bytes).sum::<usize>();

        RequestMetrics {
            request_id: self.request_id.to_string(),
            page: self.page,
            route: self.route,
            time_to_shell_us: self.shell_sent.map(|t| micros(t.duration_since(start))),
            time_to_first_section_us: self
                .first_section_sent
                .map(|t| micros(t.duration_since(start))),
            sections,
            total_duration_us: micros(now.duration_since(start)),
            total_bytes,
            status_code,
        }
    }

    /// Get total elapsed time.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl RequestMetrics {
    /// Format as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Format as JSON (pretty printed).
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Section names in the order they were sent.
    pub fn section_order(&self) -> Vec<&str> {
        let mut sections: Vec<&SectionMetrics> = self.sections.values().collect();
        sections.sort_by_key(|s| s.order);
        sections.into_iter().map(|s| s.name.as_str()).collect()
    }

    /// Format as human-readable summary.
    pub fn to_summary(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Request: {}", self.request_id));

        if let Some(tts) = self.time_to_shell_us {
            lines.push(format!("  Time to shell: {}us ({:.2}ms)", tts, tts as f64 / 1000.0));
        }

        if let Some(ttfs) = self.time_to_first_section_us {
            lines.push(format!(
                "  Time to first section: {}us ({:.2}ms)",
                ttfs,
                ttfs as f64 / 1000.0
            ));
        }

        lines.push(format!(
            "  Total: {}us ({:.2}ms), {} bytes",
            self.total_duration_us,
            self.total_duration_us as f64 / 1000.0,
            self.total_bytes
        ));

        if !self.sections.is_empty() {
            lines.push("  Sections:".to_string());
            for name in self.section_order() {
                if let Some(section) = self.sections.get(name) {
                    lines.push(format!(
                        "    {}: {}us, {} bytes",
                        name, section.duration_us, section.bytes
                    ));
                }
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_records_sections_in_order() {
        let mut metrics = MetricsCollector::new(RequestId::from_string("req-1"));
        metrics.set_page("arezou-pdp");
        metrics.record_shell_sent(100);
        metrics.record_section_start("gallery");
        metrics.record_section_sent("gallery", 40);
        metrics.record_section_start("details");
        metrics.record_section_sent("details", 60);

        let result = metrics.finalize(Some(200));
        assert_eq!(result.section_order(), vec!["gallery", "details"]);
        assert_eq!(result.total_bytes, 200);
        assert_eq!(result.status_code, Some(200));
        assert!(result.time_to_shell_us.is_some());
        assert!(result.time_to_first_section_us.is_some());
    }

    #[test]
    fn test_section_sent_without_start() {
        let mut metrics = MetricsCollector::new(RequestId::from_string("req-2"));
        metrics.record_section_sent("insights", 10);
        let result = metrics.finalize(None);
        assert_eq!(result.sections["insights"].bytes, 10);
    }

    #[test]
    fn test_summary_and_json() {
        let mut metrics = MetricsCollector::new(RequestId::from_string("req-3"));
        metrics.record_shell_sent(5);
        metrics.record_section_sent("reviews", 7);
        let result = metrics.finalize(Some(200));

        let summary = result.to_summary();
        assert!(summary.starts_with("Request: req-3"));
        assert!(summary.contains("reviews:"));

        let parsed: RequestMetrics = serde_json::from_str(&result.to_json()).unwrap();
        assert_eq!(parsed.total_bytes, 12);
    }
}
