//! Progress sink that writes to a terminal stream.

use std::io::Write;

use bizlens_pipeline::ProgressSink;
use serde_json::Value;

pub(crate) struct TerminalSink<W: Write> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out }
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            tracing::debug!(error = %e, "progress output dropped");
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressSink for TerminalSink<W> {
    fn markdown(&mut self, text: &str) {
        self.emit("");
        self.emit(text);
    }

    fn text(&mut self, line: &str) {
        self.emit(line);
    }

    fn json(&mut self, value: &Value) {
        let rendered = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        self.emit(&rendered);
    }
}
