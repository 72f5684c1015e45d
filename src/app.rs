use std::io::Write;

use thiserror::Error;

use crate::domain::bank::Bank;
use crate::domain::types::{Amount, TransactionKind};
use crate::prompt::{Prompt, PromptError};
use crate::statement;

pub const MAIN_MENU: [&str; 3] = ["Create Account", "Log In", "Exit"];
pub const SESSION_MENU: [&str; 5] = [
    "Deposit",
    "Withdraw",
    "Check Balance",
    "Transaction History",
    "Logout",
];

/// Process-level menu state. `Session` carries the index of the logged-in
/// account; accounts are never removed, so the index stays valid until
/// logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    MainMenu,
    Session(usize),
    ShutDown,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Statement(#[from] csv::Error),
}

/// Drives the prompt/response cycle over a `Bank`.
///
/// Each `step` presents one menu, collects one answer, applies it, and
/// returns the next state; `run` loops until shutdown. Result lines go to
/// the injected writer, questions go through the injected prompt.
pub struct App<P, W> {
    bank: Bank,
    prompt: P,
    out: W,
}

impl<P: Prompt, W: Write> App<P, W> {
    pub fn new(bank: Bank, prompt: P, out: W) -> Self {
        App { bank, prompt, out }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    pub fn into_parts(self) -> (Bank, P, W) {
        (self.bank, self.prompt, self.out)
    }

    /// Runs from the main menu until Exit. An exhausted answer source ends
    /// the run as if Exit had been chosen.
    pub fn run(&mut self) -> Result<(), AppError> {
        writeln!(self.out, "Welcome to MyBank Console App!")?;

        let mut state = State::MainMenu;
        loop {
            state = match self.step(state) {
                Ok(State::ShutDown) => return Ok(()),
                Ok(next) => next,
                Err(AppError::Prompt(PromptError::Closed)) => return Ok(()),
                Err(err) => return Err(err),
            };
        }
    }

    pub fn step(&mut self, state: State) -> Result<State, AppError> {
        match state {
            State::MainMenu => self.main_menu(),
            State::Session(index) => self.session_menu(index),
            State::ShutDown => Ok(State::ShutDown),
        }
    }

    fn main_menu(&mut self) -> Result<State, AppError> {
        match self.prompt.select("Please select an option:", &MAIN_MENU)? {
            0 => {
                self.create_account()?;
                Ok(State::MainMenu)
            }
            1 => Ok(match self.login()? {
                Some(index) => State::Session(index),
                None => State::MainMenu,
            }),
            2 => {
                writeln!(self.out, "Thank you for using MyBank Console App!")?;
                Ok(State::ShutDown)
            }
            _ => {
                writeln!(self.out, "Invalid choice. Please try again.")?;
                Ok(State::MainMenu)
            }
        }
    }

    fn create_account(&mut self) -> Result<(), AppError> {
        writeln!(self.out, "\n=== Create a New Account ===")?;
        let username = self.prompt.text("Enter username:")?;
        let password = self.prompt.password("Enter password:")?;
        let initial_balance = self
            .prompt
            .amount("Enter initial balance:", Some(Amount::ZERO))?;

        match self.bank.create_account(username, password, initial_balance) {
            Ok(()) => writeln!(self.out, "Account created successfully!")?,
            Err(err) => writeln!(self.out, "{}", err)?,
        }
        Ok(())
    }

    fn login(&mut self) -> Result<Option<usize>, AppError> {
        writeln!(self.out, "\n=== Log In ===")?;
        let username = self.prompt.text("Enter username:")?;
        let password = self.prompt.password("Enter password:")?;

        let found = self.bank.login(&username, &password);
        if found.is_none() {
            writeln!(self.out, "Invalid username or password. Please try again.")?;
        }
        Ok(found)
    }

    fn session_menu(&mut self, index: usize) -> Result<State, AppError> {
        match self.prompt.select("Please select an option:", &SESSION_MENU)? {
            0 => self.transact(index, TransactionKind::Deposit, "Enter deposit amount:"),
            1 => self.transact(index, TransactionKind::Withdrawal, "Enter withdrawal amount:"),
            2 => {
                let account = match self.bank.account(index) {
                    Some(account) => account,
                    None => return Ok(State::MainMenu),
                };
                writeln!(self.out, "Current balance: ${}", account.balance())?;
                Ok(State::Session(index))
            }
            3 => {
                let account = match self.bank.account(index) {
                    Some(account) => account,
                    None => return Ok(State::MainMenu),
                };
                if account.transactions().is_empty() {
                    writeln!(self.out, "No transactions yet.")?;
                } else {
                    statement::write_statement(&mut self.out, account.transactions())?;
                }
                Ok(State::Session(index))
            }
            4 => {
                writeln!(self.out, "Logged out.")?;
                Ok(State::MainMenu)
            }
            _ => {
                writeln!(self.out, "Invalid choice. Please try again.")?;
                Ok(State::Session(index))
            }
        }
    }

    fn transact(
        &mut self,
        index: usize,
        kind: TransactionKind,
        message: &str,
    ) -> Result<State, AppError> {
        let amount = self.prompt.amount(message, None)?;
        let account = match self.bank.account_mut(index) {
            Some(account) => account,
            None => return Ok(State::MainMenu),
        };

        match account.perform_transaction(kind, amount) {
            Ok(transaction) => writeln!(
                self.out,
                "{} of ${} successful.",
                transaction.kind.label(),
                transaction.amount
            )?,
            Err(err) => writeln!(self.out, "{}", err)?,
        }
        Ok(State::Session(index))
    }
}
