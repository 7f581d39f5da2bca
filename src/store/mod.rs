//! In-memory account store.
//!
//! The store owns every open account and enforces the duplicate rules:
//! at most one account per holder and account type, and at most one
//! checking-family account (Checking or College Checking) per holder.
//! Mutations report failures through [`StoreError`] and are logged the
//! same way whether they are applied or skipped.

use tracing::info;

use crate::Amount;
use crate::account::Account;
use crate::consts::{GROWTH_INCREMENT, INITIAL_CAPACITY};
use crate::model::{AccountType, Profile};

mod error;
pub use error::StoreError;

mod report;
pub use report::{EMPTY_MESSAGE, Report};

/// Ordered collection of accounts.
///
/// No order is kept between operations; reports sort the accounts by
/// account type name, then by holder.
#[derive(Debug)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

/// Public API
impl AccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Return the open accounts in their current order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> + '_ {
        self.accounts.iter()
    }

    /// Return the account of `holder` with the given type, if open.
    pub fn get(&self, holder: &Profile, account_type: AccountType) -> Option<&Account> {
        self.find_exact(holder, account_type)
            .map(|idx| &self.accounts[idx])
    }

    /// Index of the first account owned by `holder`, whatever its type.
    pub fn find(&self, holder: &Profile) -> Option<usize> {
        self.accounts
            .iter()
            .position(|account| account.holder().is_same_holder(holder))
    }

    /// Index of the account owned by `holder` with exactly this type.
    pub fn find_exact(&self, holder: &Profile, account_type: AccountType) -> Option<usize> {
        self.accounts.iter().position(|account| {
            account.account_type() == account_type && account.holder().is_same_holder(holder)
        })
    }

    /// Whether opening an `account_type` account for `holder` would be a duplicate:
    /// the holder already has one of this type, or already has a checking-family
    /// account and asks for another.
    pub fn contains(&self, holder: &Profile, account_type: AccountType) -> bool {
        self.accounts
            .iter()
            .filter(|account| account.holder().is_same_holder(holder))
            .any(|account| {
                let existing = account.account_type();
                existing == account_type
                    || (existing.is_checking_family() && account_type.is_checking_family())
            })
    }

    /// Add a new account.
    pub fn open(&mut self, account: Account) -> Result<(), StoreError> {
        let result = self.apply_open(account.holder(), account.account_type());
        Self::log_result(
            "open",
            account.holder(),
            account.account_type(),
            Some(account.balance()),
            &result,
        );
        result?;

        if self.accounts.len() == self.accounts.capacity() {
            self.accounts.reserve_exact(GROWTH_INCREMENT);
        }
        self.accounts.push(account);
        Ok(())
    }

    /// Remove and return the account of `holder` with the given type.
    ///
    /// The holder's first account is the one considered: when its type is
    /// not `account_type`, nothing is closed.
    pub fn close(
        &mut self,
        holder: &Profile,
        account_type: AccountType,
    ) -> Result<Account, StoreError> {
        let result = self
            .find(holder)
            .filter(|&index| self.accounts[index].account_type() == account_type)
            .ok_or_else(|| StoreError::NotFound(holder.clone(), account_type));
        Self::log_result("close", holder, account_type, None, &result);

        // `Vec::remove` shifts the tail left, keeping the other accounts in place
        Ok(self.accounts.remove(result?))
    }

    /// Credit `amount` to an account. Returns the new balance.
    pub fn deposit(
        &mut self,
        holder: &Profile,
        account_type: AccountType,
        amount: Amount,
    ) -> Result<Amount, StoreError> {
        let result = self.apply_deposit(holder, account_type, amount);
        Self::log_result("deposit", holder, account_type, Some(amount), &result);
        result
    }

    /// Debit `amount` from an account. Returns the new balance.
    ///
    /// The balance never goes negative: a withdrawal larger than the balance
    /// is refused. Money Market accounts count every successful withdrawal.
    pub fn withdraw(
        &mut self,
        holder: &Profile,
        account_type: AccountType,
        amount: Amount,
    ) -> Result<Amount, StoreError> {
        let result = self.apply_withdrawal(holder, account_type, amount);
        Self::log_result("withdrawal", holder, account_type, Some(amount), &result);
        result
    }

    /// Sort the accounts by account type name, then by holder.
    pub fn sort(&mut self) {
        self.accounts.sort_by(|a, b| {
            a.account_type()
                .name()
                .cmp(b.account_type().name())
                .then_with(|| a.holder().cmp(b.holder()))
        });
    }

    /// Render a report over every account, sorted first.
    pub fn report(&mut self, report: Report) -> String {
        if self.accounts.is_empty() {
            info!(?report, "report skipped: store is empty");
            return EMPTY_MESSAGE.to_string();
        }

        self.sort();
        let entries = self
            .accounts
            .iter_mut()
            .map(|account| report.entry(account))
            .collect();
        info!(?report, accounts = self.accounts.len(), "report rendered");
        report.frame(entries)
    }
}

/// Private API
impl AccountStore {
    /// Small helper to log mutation results
    fn log_result<T, E: std::fmt::Display>(
        operation: &str,
        holder: &Profile,
        account_type: AccountType,
        amount: Option<Amount>,
        result: &Result<T, E>,
    ) {
        match (result, amount) {
            (Ok(_), Some(amt)) => {
                info!(
                    holder = %holder,
                    account = %account_type,
                    amount = %amt,
                    "{operation} applied"
                );
            }
            (Ok(_), None) => {
                info!(holder = %holder, account = %account_type, "{operation} applied");
            }
            (Err(e), Some(amt)) => {
                info!(
                    holder = %holder,
                    account = %account_type,
                    amount = %amt,
                    reason = %e,
                    "{operation} skipped"
                );
            }
            (Err(e), None) => {
                info!(
                    holder = %holder,
                    account = %account_type,
                    reason = %e,
                    "{operation} skipped"
                );
            }
        }
    }

    fn apply_open(&self, holder: &Profile, account_type: AccountType) -> Result<(), StoreError> {
        if self.contains(holder, account_type) {
            return Err(StoreError::Duplicate(holder.clone(), account_type));
        }
        Ok(())
    }

    fn apply_deposit(
        &mut self,
        holder: &Profile,
        account_type: AccountType,
        amount: Amount,
    ) -> Result<Amount, StoreError> {
        let idx = self
            .find_exact(holder, account_type)
            .ok_or_else(|| StoreError::NotFound(holder.clone(), account_type))?;

        let account = &mut self.accounts[idx];
        account.credit(amount);
        Ok(account.balance())
    }

    fn apply_withdrawal(
        &mut self,
        holder: &Profile,
        account_type: AccountType,
        amount: Amount,
    ) -> Result<Amount, StoreError> {
        let idx = self
            .find_exact(holder, account_type)
            .ok_or_else(|| StoreError::NotFound(holder.clone(), account_type))?;

        let account = &mut self.accounts[idx];
        if account.balance() < amount {
            return Err(StoreError::InsufficientFunds {
                available: account.balance(),
                requested: amount,
            });
        }

        account.debit(amount);
        Ok(account.balance())
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}
