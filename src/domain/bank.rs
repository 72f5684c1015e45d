use thiserror::Error;

use crate::domain::account::Account;
use crate::domain::types::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CreateAccountError {
    #[error("Username already taken.")]
    UsernameTaken,
    #[error("Initial balance cannot be negative.")]
    NegativeInitialBalance,
}

/// In-memory registry of all accounts for the process lifetime.
///
/// Accounts are stored in creation order and never removed, so an index
/// handed out by `login` stays valid for the rest of the run.
#[derive(Debug, Default)]
pub struct Bank {
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new() -> Self {
        Bank {
            accounts: Vec::new(),
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, index: usize) -> Option<&Account> {
        self.accounts.get(index)
    }

    pub fn account_mut(&mut self, index: usize) -> Option<&mut Account> {
        self.accounts.get_mut(index)
    }

    /// Usernames are unique: a second account under an existing name is
    /// rejected rather than shadowed behind first-match login.
    pub fn create_account(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        initial_balance: Amount,
    ) -> Result<(), CreateAccountError> {
        let username = username.into();
        if self.accounts.iter().any(|a| a.username() == username) {
            tracing::debug!("rejected duplicate username {:?}", username);
            return Err(CreateAccountError::UsernameTaken);
        }
        if initial_balance.is_negative() {
            return Err(CreateAccountError::NegativeInitialBalance);
        }

        tracing::debug!("created account {:?}", username);
        self.accounts
            .push(Account::new(username, password, initial_balance));
        Ok(())
    }

    /// Forward scan in creation order; first account matching both username
    /// and password. Unknown username and wrong password are deliberately
    /// indistinguishable.
    pub fn login(&self, username: &str, password: &str) -> Option<usize> {
        let found = self
            .accounts
            .iter()
            .position(|a| a.username() == username && a.check_password(password));
        match found {
            Some(index) => tracing::debug!("login for {:?} -> account {}", username, index),
            None => tracing::debug!("login rejected for {:?}", username),
        }
        found
    }
}
