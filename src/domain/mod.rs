pub mod account;
pub mod bank;
pub mod types;

pub use account::Account;
pub use bank::Bank;
pub use types::{Amount, Transaction, TransactionKind};
