use crate::domain::{Money, Receipt, Rejection, TransactionKind};

/// A single bank account: a holder name and a balance.
///
/// The balance only changes through [`Account::deposit`] and
/// [`Account::withdraw`]; a withdrawal never takes it below zero. The opening
/// balance is stored as given, negative included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    holder: String,
    balance: Money,
}

impl Account {
    pub fn new(holder: impl Into<String>, initial_balance: Money) -> Self {
        let holder = holder.into();
        if initial_balance.is_negative() {
            tracing::warn!(%holder, balance = %initial_balance, "account opened with a negative balance");
        }

        Self {
            holder,
            balance: initial_balance,
        }
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn deposit(&mut self, amount: Money) -> Result<Receipt, Rejection> {
        if !amount.is_positive() {
            return Err(Rejection::NonPositiveDeposit { amount });
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(Rejection::Overflow {
                kind: TransactionKind::Deposit,
                amount,
            })?;

        Ok(self.receipt(TransactionKind::Deposit, amount))
    }

    pub fn withdraw(&mut self, amount: Money) -> Result<Receipt, Rejection> {
        if !amount.is_positive() {
            return Err(Rejection::NonPositiveWithdrawal { amount });
        }

        if amount > self.balance {
            return Err(Rejection::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(Rejection::Overflow {
                kind: TransactionKind::Withdrawal,
                amount,
            })?;

        Ok(self.receipt(TransactionKind::Withdrawal, amount))
    }

    fn receipt(&self, kind: TransactionKind, amount: Money) -> Receipt {
        Receipt {
            kind,
            amount,
            balance: self.balance,
        }
    }
}
