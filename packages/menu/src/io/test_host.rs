//! Test host implementation for in-memory I/O testing.
//!
//! This provides an implementation of the [`IoHost`] trait backed by
//! in-memory buffers instead of a real terminal, so whole menu sessions can
//! run inside unit tests. Input lines and signals are queued and consumed in
//! order; outputs and prompts are buffered for later inspection.

use std::collections::VecDeque;

use super::{InputLine, IoError, IoHost, Output, OutputStyle, PromptConfig, Signal};

/// Which kind of event sits at a given position in the insertion-order log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventKind {
    Input,
    Signal,
}

/// Test host with in-memory I/O buffers.
#[derive(Debug, Default)]
pub struct TestHost {
    /// Queue of input lines to be returned by `read_input()`.
    input_queue: VecDeque<String>,
    /// Queue of signals to be returned by `read_signal()`.
    signal_queue: VecDeque<Signal>,
    /// Insertion order across inputs and signals, so the two queues are
    /// consumed in the order items were enqueued (the documented contract).
    event_order: VecDeque<EventKind>,
    /// Buffer of all output written via `write_output()`.
    output_buffer: Vec<Output>,
    /// Every prompt configuration written, in order.
    prompts: Vec<PromptConfig>,
    /// Number of times `clear_screen()` was called.
    clear_count: usize,
    /// Number of times `flush()` was called.
    flush_count: usize,
}

impl TestHost {
    /// Create a new empty test host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an input line to be returned by `read_input()`.
    pub fn queue_input(&mut self, line: impl Into<String>) {
        self.input_queue.push_back(line.into());
        self.event_order.push_back(EventKind::Input);
    }

    /// Queue multiple input lines.
    pub fn queue_inputs(&mut self, lines: impl IntoIterator<Item = impl Into<String>>) {
        for line in lines {
            self.queue_input(line);
        }
    }

    /// Queue a signal to be returned by `read_signal()`.
    pub fn queue_signal(&mut self, signal: Signal) {
        self.signal_queue.push_back(signal);
        self.event_order.push_back(EventKind::Signal);
    }

    /// Get all output that was written.
    pub fn output(&self) -> &[Output] {
        &self.output_buffer
    }

    /// Get output text only, joined with newlines.
    pub fn output_text(&self) -> String {
        self.output_buffer
            .iter()
            .map(|o| o.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Get output of a specific style.
    pub fn output_with_style(&self, style: OutputStyle) -> Vec<&str> {
        self.output_buffer
            .iter()
            .filter(|o| o.style == style)
            .map(|o| o.text.as_str())
            .collect()
    }

    /// Get all error output.
    pub fn errors(&self) -> Vec<&str> {
        self.output_with_style(OutputStyle::Error)
    }

    /// Get all success output.
    pub fn successes(&self) -> Vec<&str> {
        self.output_with_style(OutputStyle::Success)
    }

    /// Every prompt written so far, in order.
    pub fn prompts(&self) -> &[PromptConfig] {
        &self.prompts
    }

    /// The prompt texts only, in order.
    pub fn prompt_texts(&self) -> Vec<&str> {
        self.prompts.iter().map(|p| p.text.as_str()).collect()
    }

    /// Get the number of times `clear_screen()` was called.
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    /// Get the number of times `flush()` was called.
    pub fn flush_count(&self) -> usize {
        self.flush_count
    }

    /// Clear the output buffer.
    pub fn clear_output(&mut self) {
        self.output_buffer.clear();
    }

    /// Check if there are pending inputs.
    pub fn has_pending_input(&self) -> bool {
        !self.input_queue.is_empty()
    }

    /// Check if there are pending signals.
    pub fn has_pending_signal(&self) -> bool {
        !self.signal_queue.is_empty()
    }
}

impl IoHost for TestHost {
    fn wait_for_input(&mut self) -> Result<(), IoError> {
        // The caller should have queued inputs before running.
        Ok(())
    }

    fn read_input(&mut self) -> Result<Option<InputLine>, IoError> {
        // Only yield an input when it is the next enqueued event, so inputs
        // and signals are consumed in their original insertion order.
        if self.event_order.front() != Some(&EventKind::Input) {
            return Ok(None);
        }
        self.event_order.pop_front();
        Ok(self.input_queue.pop_front().map(|line| InputLine { line }))
    }

    fn read_signal(&mut self) -> Result<Option<Signal>, IoError> {
        // Only yield a signal when it is the next enqueued event.
        if self.event_order.front() != Some(&EventKind::Signal) {
            return Ok(None);
        }
        self.event_order.pop_front();
        Ok(self.signal_queue.pop_front())
    }

    fn write_output(&mut self, output: Output) -> Result<(), IoError> {
        self.output_buffer.push(output);
        Ok(())
    }

    fn write_prompt(&mut self, config: PromptConfig) -> Result<(), IoError> {
        self.prompts.push(config);
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), IoError> {
        self.clear_count += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), IoError> {
        self.flush_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_empty_host() {
        let host = TestHost::new();
        assert!(!host.has_pending_input());
        assert!(!host.has_pending_signal());
        assert!(host.output().is_empty());
        assert!(host.prompts().is_empty());
        assert_eq!(host.clear_count(), 0);
        assert_eq!(host.flush_count(), 0);
    }

    #[test]
    fn queue_inputs_adds_multiple() {
        let mut host = TestHost::new();
        host.queue_inputs(["1", "2", "3"]);
        assert_eq!(host.input_queue.len(), 3);
    }

    #[test]
    fn read_input_returns_queued_in_order() {
        let mut host = TestHost::new();
        host.queue_input("first");
        host.queue_input("second");

        assert_eq!(host.read_input().unwrap().unwrap().line, "first");
        assert_eq!(host.read_input().unwrap().unwrap().line, "second");
        assert!(host.read_input().unwrap().is_none());
    }

    #[test]
    fn read_signal_returns_queued_in_order() {
        let mut host = TestHost::new();
        host.queue_signal(Signal::Interrupt);
        host.queue_signal(Signal::Eof);

        assert!(matches!(host.read_signal().unwrap(), Some(Signal::Interrupt)));
        assert!(matches!(host.read_signal().unwrap(), Some(Signal::Eof)));
        assert!(host.read_signal().unwrap().is_none());
    }

    #[test]
    fn write_output_buffers() {
        let mut host = TestHost::new();
        host.write_output(Output::normal("hello")).unwrap();
        host.write_output(Output::error("oops")).unwrap();

        assert_eq!(host.output().len(), 2);
        assert_eq!(host.output()[0].text, "hello");
        assert_eq!(host.output()[1].text, "oops");
    }

    #[test]
    fn output_text_joins_lines() {
        let mut host = TestHost::new();
        host.write_output(Output::normal("line1")).unwrap();
        host.write_output(Output::normal("line2")).unwrap();

        assert_eq!(host.output_text(), "line1\nline2");
    }

    #[test]
    fn output_with_style_filters() {
        let mut host = TestHost::new();
        host.write_output(Output::normal("normal")).unwrap();
        host.write_output(Output::error("error")).unwrap();
        host.write_output(Output::success("success")).unwrap();

        assert_eq!(host.errors(), vec!["error"]);
        assert_eq!(host.successes(), vec!["success"]);
    }

    #[test]
    fn write_prompt_records_all_prompts() {
        let mut host = TestHost::new();
        host.write_prompt(PromptConfig::ask("first? ")).unwrap();
        host.write_prompt(PromptConfig::muted("second...")).unwrap();

        assert_eq!(host.prompt_texts(), vec!["first? ", "second..."]);
        assert_eq!(host.prompts()[1].style, super::super::PromptStyle::Muted);
    }

    #[test]
    fn clear_screen_increments_counter() {
        let mut host = TestHost::new();
        host.clear_screen().unwrap();
        host.clear_screen().unwrap();
        assert_eq!(host.clear_count(), 2);
    }

    #[test]
    fn flush_increments_counter() {
        let mut host = TestHost::new();
        host.flush().unwrap();
        assert_eq!(host.flush_count(), 1);
    }

    #[test]
    fn clear_output_empties_buffer() {
        let mut host = TestHost::new();
        host.write_output(Output::normal("text")).unwrap();
        host.clear_output();
        assert!(host.output().is_empty());
    }

    #[test]
    fn pending_flags_track_consumption() {
        let mut host = TestHost::new();
        host.queue_input("x");
        host.queue_signal(Signal::Eof);
        assert!(host.has_pending_input());
        assert!(host.has_pending_signal());

        host.read_input().unwrap();
        host.read_signal().unwrap();
        assert!(!host.has_pending_input());
        assert!(!host.has_pending_signal());
    }
}
