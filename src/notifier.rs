use crate::domain::Notifier;

#[derive(Default, Debug)]
pub struct StdOutNotifier {}

impl Notifier for StdOutNotifier {
    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Keeps every message in order instead of printing it.
#[derive(Default, Debug, Clone)]
pub struct MemoryNotifier {
    messages: Vec<String>,
}

impl MemoryNotifier {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}
