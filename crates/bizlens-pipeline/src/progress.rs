//! Live progress reporting for a batch run.

use serde_json::Value;

/// Receives human-facing progress while a batch runs. Nothing sent here is
/// persisted.
pub trait ProgressSink {
    /// Status heading, markdown-flavoured.
    fn markdown(&mut self, text: &str);
    fn text(&mut self, line: &str);
    fn json(&mut self, value: &Value);
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    Markdown(String),
    Text(String),
    Json(Value),
}

/// Sink that keeps every event in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<ProgressEvent>,
}

impl ProgressSink for RecordingSink {
    fn markdown(&mut self, text: &str) {
        self.events.push(ProgressEvent::Markdown(text.to_string()));
    }

    fn text(&mut self, line: &str) {
        self.events.push(ProgressEvent::Text(line.to_string()));
    }

    fn json(&mut self, value: &Value) {
        self.events.push(ProgressEvent::Json(value.clone()));
    }
}
