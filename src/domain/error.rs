use crate::domain::{Money, TransactionKind};

/// Why an account refused to move money. The balance is untouched in every
/// case.
///
/// Both withdrawal causes render the same message; match on the variant to
/// tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Deposit amount must be positive.")]
    NonPositiveDeposit { amount: Money },

    #[error("Invalid withdrawal amount or insufficient funds.")]
    NonPositiveWithdrawal { amount: Money },

    #[error("Invalid withdrawal amount or insufficient funds.")]
    InsufficientFunds { requested: Money, available: Money },

    /// The exact result does not fit in the balance.
    #[error("{kind} of ${amount} cannot be represented in the balance.")]
    Overflow { kind: TransactionKind, amount: Money },
}

impl Rejection {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Rejection::NonPositiveDeposit { .. } => TransactionKind::Deposit,
            Rejection::NonPositiveWithdrawal { .. } | Rejection::InsufficientFunds { .. } => {
                TransactionKind::Withdrawal
            }
            Rejection::Overflow { kind, .. } => *kind,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
