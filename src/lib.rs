pub mod dlq;
pub mod domain;
pub mod greeting;
pub mod ingestion;
pub mod notifier;
pub mod teller;
pub mod telemetry;

pub use domain::{Account, Error, Money, Operation, Receipt, Rejection, TransactionKind};
pub use greeting::{WELCOME_MESSAGE, print_welcome_message};
