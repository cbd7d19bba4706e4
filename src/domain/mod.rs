pub mod account;
pub mod error;
pub mod money;
pub mod traits;
pub mod transaction;

pub use account::Account;
pub use error::{Error, Rejection};
pub use money::Money;
pub use traits::{DeadLetterQueue, Notifier, OperationStream};
pub use transaction::{Operation, Receipt, TransactionKind};
