//! User-facing command errors.
//!
//! The `Display` of every variant is the exact line printed for it.

use std::fmt;

use thiserror::Error;

use crate::Amount;
use crate::date::Date;
use crate::model::Profile;
use crate::store::StoreError;

/// The account command being validated, named the way missing-data lines read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open,
    Close,
    Deposit,
    Withdraw,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Open => "opening an account",
            Action::Close => "closing an account",
            Action::Deposit => "deposit",
            Action::Withdraw => "withdrawal",
        })
    }
}

/// An account as the user named it: holder plus the raw type token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountLabel {
    pub holder: Profile,
    pub code: String,
}

impl AccountLabel {
    pub fn new(holder: Profile, code: &str) -> Self {
        Self {
            holder,
            code: code.to_string(),
        }
    }

    /// Translate a store failure on this account into its user-facing error.
    pub fn reject(self, err: StoreError) -> CommandError {
        match err {
            StoreError::Duplicate(..) => CommandError::Duplicate(self),
            StoreError::NotFound(..) => CommandError::NotInDatabase(self),
            StoreError::InsufficientFunds { .. } => CommandError::InsufficientFund(self),
        }
    }
}

impl fmt::Display for AccountLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.holder, self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("Invalid command!")]
    UnknownCommand(String),

    #[error("Missing data for {0}.")]
    MissingData(Action),

    #[error("DOB invalid: {0} not a valid calendar date!")]
    InvalidDob(Date),

    #[error("DOB invalid: {0} cannot be today or a future day.")]
    FutureDob(Date),

    #[error("Initial deposit cannot be 0 or negative.")]
    NonPositiveInitialDeposit(Amount),

    #[error("Deposit - amount cannot be 0 or negative.")]
    NonPositiveDeposit(Amount),

    #[error("Withdraw - amount cannot be 0 or negative.")]
    NonPositiveWithdrawal(Amount),

    #[error("Not a valid amount.")]
    InvalidAmount(String),

    #[error("DOB invalid: {0} over 24.")]
    TooOldForCollege(Date),

    #[error("Invalid campus code.")]
    InvalidCampus(i32),

    #[error("DOB invalid: {0} under 16.")]
    TooYoungForMoneyMarket(Date),

    #[error("Minimum of $2000 to open a Money Market account.")]
    BelowMoneyMarketMinimum(Amount),

    #[error("{0} is already in the database.")]
    Duplicate(AccountLabel),

    #[error("{0} is not in the database.")]
    NotInDatabase(AccountLabel),

    #[error("{0} Withdraw - insufficient fund.")]
    InsufficientFund(AccountLabel),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AccountType;

    fn label(code: &str) -> AccountLabel {
        AccountLabel::new(Profile::new("John", "Doe", Date::new(2000, 1, 1)), code)
    }

    #[test]
    fn missing_data_wording() {
        assert_eq!(
            CommandError::MissingData(Action::Open).to_string(),
            "Missing data for opening an account."
        );
        assert_eq!(
            CommandError::MissingData(Action::Close).to_string(),
            "Missing data for closing an account."
        );
        assert_eq!(
            CommandError::MissingData(Action::Deposit).to_string(),
            "Missing data for deposit."
        );
        assert_eq!(
            CommandError::MissingData(Action::Withdraw).to_string(),
            "Missing data for withdrawal."
        );
    }

    #[test]
    fn label_echoes_raw_type_token() {
        assert_eq!(label("X").to_string(), "John Doe 1/1/2000(X)");
    }

    #[test]
    fn store_errors_map_to_account_lines() {
        let holder = label("C").holder;
        let not_found =
            label("C").reject(StoreError::NotFound(holder.clone(), AccountType::Checking));
        assert_eq!(not_found.to_string(), "John Doe 1/1/2000(C) is not in the database.");

        let duplicate =
            label("CC").reject(StoreError::Duplicate(holder, AccountType::CollegeChecking));
        assert_eq!(
            duplicate.to_string(),
            "John Doe 1/1/2000(CC) is already in the database."
        );

        let insufficient = label("C").reject(StoreError::InsufficientFunds {
            available: Amount::new(1.0),
            requested: Amount::new(2.0),
        });
        assert_eq!(
            insufficient.to_string(),
            "John Doe 1/1/2000(C) Withdraw - insufficient fund."
        );
    }
}
