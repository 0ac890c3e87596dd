/// Styling applied to a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Progress and success notices.
    Info,
    /// Raw subprocess output.
    Raw,
    /// Failure notices.
    Failure,
}

/// Port for user-visible console output.
pub trait OutputSink {
    fn emit(&self, tone: Tone, message: &str);

    fn info(&self, message: &str) {
        self.emit(Tone::Info, message);
    }

    fn failure(&self, message: &str) {
        self.emit(Tone::Failure, message);
    }
}
