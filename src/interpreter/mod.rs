//! Line-oriented command interpreter.
//!
//! Each input line holds one command. The first word selects the handler,
//! the handler validates its operands in order and drives the
//! [`AccountStore`]. Every command answers with one reply (a report counts
//! as one reply); blank lines answer nothing.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::account::Account;
use crate::consts::{COLLEGE_MAX_AGE, MONEY_MARKET_MIN_AGE, MONEY_MARKET_MIN_BALANCE};
use crate::date::Date;
use crate::model::{AccountType, Campus, Profile};
use crate::store::{AccountStore, Report};

mod error;
pub use error::{AccountLabel, Action, CommandError};

mod tokens;
use tokens::Tokens;

/// Printed when the interpreter starts.
pub const RUNNING_MESSAGE: &str = "Transaction Manager is running.";
/// Printed once when the interpreter stops.
pub const TERMINATED_MESSAGE: &str = "Transaction Manager is terminated.";

/// Savings option code of a loyal customer.
const LOYAL_CODE: i32 = 1;

/// Result of executing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print, one or more lines.
    Reply(String),
    /// Nothing to print.
    Silent,
    /// Stop reading commands.
    Quit,
}

/// Owns the account store and applies commands to it.
pub struct CommandInterpreter {
    store: AccountStore,
    /// Reference date for birth-date and age checks.
    today: Date,
}

/// Public API
impl CommandInterpreter {
    pub fn new(today: Date) -> Self {
        Self {
            store: AccountStore::new(),
            today,
        }
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    /// Run the interpreter until `Q` or end of input.
    pub fn run(&mut self, input: impl BufRead, output: &mut impl Write) -> io::Result<()> {
        writeln!(output, "{RUNNING_MESSAGE}")?;
        for line in input.lines() {
            match self.execute(&line?) {
                Outcome::Reply(text) => {
                    writeln!(output, "{text}")?;
                    output.flush()?;
                }
                Outcome::Silent => {}
                Outcome::Quit => break,
            }
        }
        writeln!(output, "{TERMINATED_MESSAGE}")?;
        output.flush()
    }

    /// Execute a single command line.
    pub fn execute(&mut self, line: &str) -> Outcome {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Outcome::Silent;
        };
        debug!(command, line, "processing command");

        let result = match command {
            "Q" => return Outcome::Quit,
            "O" => self.open(Tokens::new(words, Action::Open)),
            "C" => self.close(Tokens::new(words, Action::Close)),
            "D" => self.deposit(Tokens::new(words, Action::Deposit)),
            "W" => self.withdraw(Tokens::new(words, Action::Withdraw)),
            "P" => Ok(self.store.report(Report::Sorted)),
            "PI" => Ok(self.store.report(Report::FeesAndInterests)),
            "UB" => Ok(self.store.report(Report::UpdatedBalances)),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        };

        match result {
            Ok(reply) => Outcome::Reply(reply),
            Err(e) => {
                info!(command, reason = ?e, "command rejected");
                Outcome::Reply(e.to_string())
            }
        }
    }
}

/// Command handlers
impl CommandInterpreter {
    /// Read `fname lname dob` and check the birth date against today.
    fn holder(&self, tokens: &mut Tokens<'_>) -> Result<Profile, CommandError> {
        let fname = tokens.next()?;
        let lname = tokens.next()?;

        let dob = Date::parse(tokens.next()?);
        if !dob.is_valid() {
            return Err(CommandError::InvalidDob(dob));
        }
        if dob >= self.today {
            return Err(CommandError::FutureDob(dob));
        }
        Ok(Profile::new(fname, lname, dob))
    }

    /// `O type fname lname dob balance [code]`
    fn open(&mut self, mut tokens: Tokens<'_>) -> Result<String, CommandError> {
        let code = tokens.next()?;
        let holder = self.holder(&mut tokens)?;
        let balance = tokens.amount()?;
        if !balance.is_positive() {
            return Err(CommandError::NonPositiveInitialDeposit(balance));
        }

        let label = AccountLabel::new(holder.clone(), code);
        let age = holder.dob().age_on(&self.today);
        let account = match AccountType::from_code(code) {
            AccountType::Checking => Account::checking(holder, balance),
            AccountType::CollegeChecking => {
                let campus_code = tokens.code()?;
                if age >= COLLEGE_MAX_AGE {
                    return Err(CommandError::TooOldForCollege(*holder.dob()));
                }
                let campus = Campus::from_code(campus_code)
                    .ok_or(CommandError::InvalidCampus(campus_code))?;
                Account::college_checking(holder, balance, campus)
            }
            AccountType::Savings => {
                let loyal = tokens.code()? == LOYAL_CODE;
                Account::savings(holder, balance, loyal)
            }
            AccountType::MoneyMarket => {
                if age < MONEY_MARKET_MIN_AGE {
                    return Err(CommandError::TooYoungForMoneyMarket(*holder.dob()));
                }
                if balance.value() < MONEY_MARKET_MIN_BALANCE {
                    return Err(CommandError::BelowMoneyMarketMinimum(balance));
                }
                Account::money_market(holder, balance)
            }
        };

        match self.store.open(account) {
            Ok(()) => Ok(format!("{label} opened.")),
            Err(e) => Err(label.reject(e)),
        }
    }

    /// `C type fname lname dob`
    fn close(&mut self, mut tokens: Tokens<'_>) -> Result<String, CommandError> {
        let code = tokens.next()?;
        let holder = self.holder(&mut tokens)?;

        let result = self.store.close(&holder, AccountType::from_code(code));
        let label = AccountLabel::new(holder, code);
        match result {
            Ok(_) => Ok(format!("{label} has been closed.")),
            Err(e) => Err(label.reject(e)),
        }
    }

    /// `D type fname lname dob amount`
    fn deposit(&mut self, mut tokens: Tokens<'_>) -> Result<String, CommandError> {
        let code = tokens.next()?;
        let holder = self.holder(&mut tokens)?;
        let amount = tokens.amount()?;
        if !amount.is_positive() {
            return Err(CommandError::NonPositiveDeposit(amount));
        }

        let result = self.store.deposit(&holder, AccountType::from_code(code), amount);
        let label = AccountLabel::new(holder, code);
        match result {
            Ok(_) => Ok(format!("{label} Deposit - balance updated.")),
            Err(e) => Err(label.reject(e)),
        }
    }

    /// `W type fname lname dob amount`
    fn withdraw(&mut self, mut tokens: Tokens<'_>) -> Result<String, CommandError> {
        let code = tokens.next()?;
        let holder = self.holder(&mut tokens)?;
        let amount = tokens.amount()?;
        if !amount.is_positive() {
            return Err(CommandError::NonPositiveWithdrawal(amount));
        }

        let result = self.store.withdraw(&holder, AccountType::from_code(code), amount);
        let label = AccountLabel::new(holder, code);
        match result {
            Ok(_) => Ok(format!("{label} Withdraw - balance updated.")),
            Err(e) => Err(label.reject(e)),
        }
    }
}
