use futures::Stream;

use crate::domain::{Error, Operation};

pub trait OperationStream {
    type OpStream: Stream<Item = Result<Operation, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::OpStream;
}

/// Sink for the human-readable status lines.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}
