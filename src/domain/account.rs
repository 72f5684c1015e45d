use thiserror::Error;

use crate::domain::types::{Amount, Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransactionError {
    #[error("Insufficient funds.")]
    InsufficientFunds,
    #[error("Amount must be positive.")]
    NonPositiveAmount,
}

/// A single user's identity, credential, balance, and transaction log.
///
/// The log is append-only and only ever exposed as a shared slice, so the
/// balance can only drift from it through `perform_transaction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    username: String,
    password: String,
    balance: Amount,
    transactions: Vec<Transaction>,
}

impl Account {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        balance: Amount,
    ) -> Self {
        Account {
            username: username.into(),
            password: password.into(),
            balance,
            transactions: Vec::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Exact string comparison, no hashing
    pub fn check_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Full history in chronological order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Applies a deposit or withdrawal. A withdrawal larger than the current
    /// balance is rejected before any state changes; rejected operations are
    /// not recorded.
    pub fn perform_transaction(
        &mut self,
        kind: TransactionKind,
        amount: Amount,
    ) -> Result<Transaction, TransactionError> {
        if !amount.is_positive() {
            tracing::debug!("rejected non-positive {} of {}", kind.label(), amount);
            return Err(TransactionError::NonPositiveAmount);
        }
        if kind == TransactionKind::Withdrawal && amount > self.balance {
            tracing::debug!("rejected withdrawal of {} against balance {}", amount, self.balance);
            return Err(TransactionError::InsufficientFunds);
        }

        match kind {
            TransactionKind::Deposit => self.balance += amount,
            TransactionKind::Withdrawal => self.balance -= amount,
        }

        let transaction = Transaction { kind, amount };
        self.transactions.push(transaction);
        Ok(transaction)
    }
}
