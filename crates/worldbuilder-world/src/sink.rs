/// Destination for user-facing messages.
pub trait MessageSink {
    fn report(&mut self, text: &str);
    fn report_error(&mut self, text: &str);
}

/// Routes messages to the `log` facade.
#[derive(Debug, Default)]
pub struct LogSink;

impl MessageSink for LogSink {
    fn report(&mut self, text: &str) {
        log::info!("{text}");
    }

    fn report_error(&mut self, text: &str) {
        log::error!("{text}");
    }
}

/// Keeps every message, for tests and scripted runs.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub messages: Vec<String>,
    pub errors: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.errors.last().map(String::as_str)
    }
}

impl MessageSink for RecordingSink {
    fn report(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn report_error(&mut self, text: &str) {
        self.errors.push(text.to_string());
    }
}
