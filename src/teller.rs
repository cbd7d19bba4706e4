use futures::StreamExt;

use crate::domain::{
    Account, Error, Operation, Receipt, Rejection,
    traits::{DeadLetterQueue, Notifier, OperationStream},
};
use crate::greeting;

/// Replays a stream of operations against one account and announces every
/// outcome through a [`Notifier`].
#[derive(Debug)]
pub struct Teller<I, N, D>
where
    I: OperationStream,
    N: Notifier,
    D: DeadLetterQueue,
{
    account: Account,
    ingestion: I,
    notifier: N,
    dlq: D,
}

impl<I, N, D> Teller<I, N, D>
where
    I: OperationStream,
    N: Notifier,
    D: DeadLetterQueue,
{
    pub fn new(account: Account, ingestion: I, notifier: N, dlq: D) -> Self {
        Self {
            account,
            ingestion,
            notifier,
            dlq,
        }
    }

    pub async fn process(&mut self) -> Result<(), Error> {
        let mut res = self.ingestion.stream();

        while let Some(op) = res.next().await {
            match op {
                Ok(op) => self.apply_operation(op),
                Err(e) => self.dlq.report(&e),
            }
        }

        Ok(())
    }

    fn apply_operation(&mut self, op: Operation) {
        tracing::debug!(holder = self.account.holder(), %op, "applying operation");

        match op {
            Operation::Deposit { amount } => {
                let outcome = self.account.deposit(amount);
                self.announce(outcome);
            }
            Operation::Withdrawal { amount } => {
                let outcome = self.account.withdraw(amount);
                self.announce(outcome);
            }
            Operation::Balance => {
                let message = format!("Balance: ${}", self.account.balance());
                self.notifier.notify(&message);
            }
            Operation::Welcome => greeting::welcome(&mut self.notifier),
        }
    }

    fn announce(&mut self, outcome: Result<Receipt, Rejection>) {
        match outcome {
            Ok(receipt) => {
                tracing::debug!(
                    holder = self.account.holder(),
                    kind = %receipt.kind,
                    amount = %receipt.amount,
                    balance = %receipt.balance,
                    "operation accepted"
                );
                self.notifier.notify(&receipt.to_string());
            }
            Err(rejection) => {
                tracing::info!(
                    holder = self.account.holder(),
                    ?rejection,
                    "operation rejected"
                );
                self.notifier.notify(&rejection.to_string());
            }
        }
    }

    pub fn flush(&mut self) {
        let statement = format!(
            "{} balance: ${}",
            self.account.holder(),
            self.account.balance()
        );
        self.notifier.notify(&statement);
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_parts(self) -> (Account, N) {
        (self.account, self.notifier)
    }
}
