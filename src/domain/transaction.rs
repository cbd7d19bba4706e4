use crate::domain::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// Proof that an operation moved money.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub kind: TransactionKind,
    pub amount: Money,
    /// Balance right after the operation.
    pub balance: Money,
}

impl core::fmt::Display for Receipt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            TransactionKind::Deposit => write!(f, "Deposited: ${}", self.amount),
            TransactionKind::Withdrawal => write!(f, "Withdrew: ${}", self.amount),
        }
    }
}

/// One step of a scripted session against an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit { amount: Money },
    Withdrawal { amount: Money },
    Balance,
    Welcome,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Deposit { amount } => write!(f, "deposit,amount={}", amount),
            Operation::Withdrawal { amount } => write!(f, "withdrawal,amount={}", amount),
            Operation::Balance => write!(f, "balance"),
            Operation::Welcome => write!(f, "welcome"),
        }
    }
}
