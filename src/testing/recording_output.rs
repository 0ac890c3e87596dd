use std::sync::Mutex;

use crate::ports::{OutputSink, Tone};

/// Output sink that keeps every message for inspection.
#[derive(Default)]
pub struct RecordingOutput {
    messages: Mutex<Vec<(Tone, String)>>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Tone, String)> {
        self.messages.lock().unwrap().clone()
    }
}

impl OutputSink for RecordingOutput {
    fn emit(&self, tone: Tone, message: &str) {
        self.messages.lock().unwrap().push((tone, message.to_string()));
    }
}
