use colored::Colorize;

use crate::ports::{OutputSink, Tone};

/// Colored stdout output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for ConsoleOutput {
    fn emit(&self, tone: Tone, message: &str) {
        let styled = match tone {
            Tone::Info => message.green(),
            Tone::Raw => message.yellow(),
            Tone::Failure => message.red(),
        };
        println!("{}", styled);
    }
}
