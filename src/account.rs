//! Accounts and the per-variant fee and interest rules.

use crate::Amount;
use crate::consts::{
    CHECKING_ANNUAL_RATE, CHECKING_FEE_WAIVER, CHECKING_MONTHLY_FEE, LOYAL_BONUS_RATE,
    MONEY_MARKET_ANNUAL_RATE, MONEY_MARKET_EXCESS_WITHDRAWAL_FEE, MONEY_MARKET_MIN_BALANCE,
    MONEY_MARKET_PENALTY_FEE, MONEY_MARKET_WITHDRAWAL_LIMIT, MONTHS_PER_YEAR, SAVINGS_ANNUAL_RATE,
    SAVINGS_FEE_WAIVER, SAVINGS_MONTHLY_FEE,
};
use crate::model::{AccountType, Campus, Profile};

/// Variant-specific state of an account.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountKind {
    Checking,
    CollegeChecking { campus: Campus },
    Savings { loyal: bool },
    /// Loyalty is derived from the balance, so only the withdrawal counter is stored.
    MoneyMarket { withdrawals: u32 },
}

/// A bank account held by one [`Profile`].
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    holder: Profile,
    balance: Amount,
    kind: AccountKind,
}

impl Account {
    pub fn new(holder: Profile, balance: Amount, kind: AccountKind) -> Self {
        Self {
            holder,
            balance,
            kind,
        }
    }

    pub fn checking(holder: Profile, balance: Amount) -> Self {
        Self::new(holder, balance, AccountKind::Checking)
    }

    pub fn college_checking(holder: Profile, balance: Amount, campus: Campus) -> Self {
        Self::new(holder, balance, AccountKind::CollegeChecking { campus })
    }

    pub fn savings(holder: Profile, balance: Amount, loyal: bool) -> Self {
        Self::new(holder, balance, AccountKind::Savings { loyal })
    }

    pub fn money_market(holder: Profile, balance: Amount) -> Self {
        Self::new(holder, balance, AccountKind::MoneyMarket { withdrawals: 0 })
    }

    pub fn holder(&self) -> &Profile {
        &self.holder
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn set_balance(&mut self, balance: Amount) {
        self.balance = balance;
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn account_type(&self) -> AccountType {
        match self.kind {
            AccountKind::Checking => AccountType::Checking,
            AccountKind::CollegeChecking { .. } => AccountType::CollegeChecking,
            AccountKind::Savings { .. } => AccountType::Savings,
            AccountKind::MoneyMarket { .. } => AccountType::MoneyMarket,
        }
    }

    pub fn campus(&self) -> Option<Campus> {
        match self.kind {
            AccountKind::CollegeChecking { campus } => Some(campus),
            _ => None,
        }
    }

    /// Loyalty of a savings-family account. A Money Market account is loyal
    /// exactly while its balance is at least the Money Market minimum.
    pub fn is_loyal(&self) -> bool {
        match self.kind {
            AccountKind::Savings { loyal } => loyal,
            AccountKind::MoneyMarket { .. } => self.balance.value() >= MONEY_MARKET_MIN_BALANCE,
            AccountKind::Checking | AccountKind::CollegeChecking { .. } => false,
        }
    }

    /// Withdrawals since the last statement; `None` unless Money Market.
    pub fn withdrawals(&self) -> Option<u32> {
        match self.kind {
            AccountKind::MoneyMarket { withdrawals } => Some(withdrawals),
            _ => None,
        }
    }

    /// Effective annual rate, loyalty bonus included.
    pub fn annual_rate(&self) -> f64 {
        let bonus = if self.is_loyal() { LOYAL_BONUS_RATE } else { 0.0 };
        match self.kind {
            AccountKind::Checking | AccountKind::CollegeChecking { .. } => CHECKING_ANNUAL_RATE,
            AccountKind::Savings { .. } => SAVINGS_ANNUAL_RATE + bonus,
            AccountKind::MoneyMarket { .. } => MONEY_MARKET_ANNUAL_RATE + bonus,
        }
    }

    pub fn monthly_interest(&self) -> Amount {
        self.balance.scale(self.annual_rate() / MONTHS_PER_YEAR)
    }

    pub fn monthly_fee(&self) -> Amount {
        let balance = self.balance.value();
        let fee = match self.kind {
            AccountKind::Checking if balance >= CHECKING_FEE_WAIVER => 0.0,
            AccountKind::Checking => CHECKING_MONTHLY_FEE,
            AccountKind::CollegeChecking { .. } => 0.0,
            AccountKind::Savings { .. } if balance >= SAVINGS_FEE_WAIVER => 0.0,
            AccountKind::Savings { .. } => SAVINGS_MONTHLY_FEE,
            AccountKind::MoneyMarket { withdrawals } => {
                let funded = balance >= MONEY_MARKET_MIN_BALANCE;
                let over_limit = withdrawals > MONEY_MARKET_WITHDRAWAL_LIMIT;
                match (funded, over_limit) {
                    (true, false) => 0.0,
                    (true, true) => MONEY_MARKET_EXCESS_WITHDRAWAL_FEE,
                    (false, true) => MONEY_MARKET_PENALTY_FEE,
                    (false, false) => SAVINGS_MONTHLY_FEE,
                }
            }
        };
        Amount::new(fee)
    }

    /// Balance after one month of interest and fees. The account is not changed.
    pub fn projected_balance(&self) -> Amount {
        self.balance + self.monthly_interest() - self.monthly_fee()
    }

    pub fn credit(&mut self, amount: Amount) {
        self.balance += amount;
    }

    /// Debit funds. Money Market accounts also count the withdrawal.
    pub fn debit(&mut self, amount: Amount) {
        self.balance -= amount;
        if let AccountKind::MoneyMarket { withdrawals } = &mut self.kind {
            *withdrawals += 1;
        }
    }

    pub fn reset_withdrawals(&mut self) {
        if let AccountKind::MoneyMarket { withdrawals } = &mut self.kind {
            *withdrawals = 0;
        }
    }
}
