//! # Recording Reporter Module / 记录报告器模块
//!
//! Keeps every host channel call in order. Used for `--format json` and as
//! the test double of the pipeline.
//!
//! 按顺序保存每次宿主通道调用。用于 `--format json`，也作为管道的测试替身。

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::reporting::Reporter;

/// Identifies a host channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Info,
    Warn,
    Fail,
    Markdown,
}

/// One recorded channel call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostMessage {
    pub channel: Channel,
    pub text: String,
}

/// Reporter that records calls instead of emitting them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingReporter {
    messages: Vec<HostMessage>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls, in the order they were made.
    pub fn messages(&self) -> &[HostMessage] {
        &self.messages
    }

    /// Texts posted to one channel, in order.
    pub fn texts(&self, channel: Channel) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|m| m.channel == channel)
            .map(|m| m.text.as_str())
            .collect()
    }

    pub fn count(&self, channel: Channel) -> usize {
        self.messages.iter().filter(|m| m.channel == channel).count()
    }

    pub fn has_failed(&self) -> bool {
        self.count(Channel::Fail) > 0
    }

    /// Writes the recorded calls as a pretty-printed JSON array.
    pub fn write_json<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, &self.messages)
    }

    fn record(&mut self, channel: Channel, text: &str) {
        self.messages.push(HostMessage {
            channel,
            text: text.to_string(),
        });
    }
}

impl Reporter for RecordingReporter {
    fn info(&mut self, text: &str) {
        self.record(Channel::Info, text);
    }

    fn warn(&mut self, text: &str) {
        self.record(Channel::Warn, text);
    }

    fn fail(&mut self, text: &str) {
        self.record(Channel::Fail, text);
    }

    fn markdown(&mut self, text: &str) {
        self.record(Channel::Markdown, text);
    }
}
