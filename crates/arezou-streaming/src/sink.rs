//! Shell-first streaming sink.

use std::fmt::Display;

use arezou_core::{LifecyclePhase, PageError, TimingContext};
use futures::{Sink, SinkExt};

/// State of the streaming sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Initial state, shell not yet sent.
    Initial,
    /// Shell has been sent, sections can be streamed.
    ShellSent,
    /// Response has been completed.
    Completed,
}

/// Streaming sink that enforces the shell-first pattern.
///
/// Generic over any `Sink<Vec<u8>>`: Spin's `OutgoingBody` in the HTTP
/// component, a plain `Vec<Vec<u8>>` in the CLI and in tests.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
    bytes_sent: usize,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
            bytes_sent: 0,
        }
    }

    /// Send the shell HTML. Must be called before any sections.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), PageError> {
        if self.state != SinkState::Initial {
            return Err(PageError::StreamError(
                "Shell already sent or sink completed".to_string(),
            ));
        }

        self.timing.mark("shell_start");
        self.write(html.as_bytes().to_vec()).await?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), PageError> {
        self.ensure_open()?;

        self.timing.mark_section_start(name);
        self.write(html.as_bytes().to_vec())
            .await
            .map_err(|e| PageError::SectionFailed(name.to_string(), e.to_string()))?;
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_string());

        Ok(())
    }

    /// Send the closing HTML and complete the response.
    pub async fn finish(&mut self, closing_html: &str) -> Result<(), PageError> {
        self.ensure_open()?;

        self.write(closing_html.as_bytes().to_vec()).await?;
        self.inner
            .flush()
            .await
            .map_err(|e| PageError::StreamError(e.to_string()))?;
        self.state = SinkState::Completed;
        self.timing.mark("complete");

        Ok(())
    }

    fn ensure_open(&self) -> Result<(), PageError> {
        match self.state {
            SinkState::Initial => Err(PageError::ShellNotSent),
            SinkState::Completed => Err(PageError::StreamError(
                "Sink already completed".to_string(),
            )),
            SinkState::ShellSent => Ok(()),
        }
    }

    async fn write(&mut self, bytes: Vec<u8>) -> Result<(), PageError> {
        let len = bytes.len();
        self.inner
            .send(bytes)
            .await
            .map_err(|e| PageError::StreamError(e.to_string()))?;
        self.bytes_sent += len;
        Ok(())
    }

    /// Get the list of sections sent.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Total bytes written so far.
    pub fn bytes_sent(&self) -> usize {
        self.bytes_sent
    }

    /// Get the current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match (self.state, self.sections_sent.last()) {
            (SinkState::Initial, _) => LifecyclePhase::Start,
            (SinkState::ShellSent, None) => LifecyclePhase::ShellSent,
            (SinkState::ShellSent, Some(last)) => LifecyclePhase::SectionSent(last.clone()),
            (SinkState::Completed, _) => LifecyclePhase::Completion,
        }
    }

    /// Get timing context reference.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn new_sink() -> StreamingSink<Vec<Vec<u8>>, std::convert::Infallible> {
        StreamingSink::new(Vec::new(), TimingContext::new())
    }

    #[test]
    fn test_section_before_shell_is_rejected() {
        let mut sink = new_sink();
        let result = block_on(sink.send_section("gallery", "<section></section>"));
        assert!(matches!(result, Err(PageError::ShellNotSent)));
        assert_eq!(sink.phase(), LifecyclePhase::Start);
    }

    #[test]
    fn test_shell_then_sections_in_order() {
        let mut sink = new_sink();
        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            sink.send_section("gallery", "<g>").await.unwrap();
            sink.send_section("details", "<d>").await.unwrap();
        });

        assert_eq!(sink.sections_sent(), ["gallery", "details"]);
        assert_eq!(
            sink.phase(),
            LifecyclePhase::SectionSent("details".to_string())
        );
        assert!(sink.timing().section_timing("gallery").is_some());
        assert_eq!(sink.bytes_sent(), "<html><g><d>".len());
    }

    #[test]
    fn test_shell_twice_is_rejected() {
        let mut sink = new_sink();
        block_on(sink.send_shell("<html>")).unwrap();
        assert!(block_on(sink.send_shell("<html>")).is_err());
    }

    #[test]
    fn test_finish_closes_the_sink() {
        let mut sink = new_sink();
        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            sink.finish("</html>").await.unwrap();
        });

        assert_eq!(sink.phase(), LifecyclePhase::Completion);
        assert!(block_on(sink.send_section("late", "<x>")).is_err());

        let chunks = sink.into_inner();
        assert_eq!(chunks, vec![b"<html>".to_vec(), b"</html>".to_vec()]);
    }
}
