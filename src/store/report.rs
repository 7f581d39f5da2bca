//! Text rendering of the three account reports.

use crate::Amount;
use crate::account::{Account, AccountKind};

/// Printed instead of a report when the store holds no account.
pub const EMPTY_MESSAGE: &str = "Account Database is empty!";

const FOOTER: &str = "*end of list.";

/// The reports the store can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// Accounts with their balances.
    Sorted,
    /// Accounts with their monthly fee and interest.
    FeesAndInterests,
    /// Accounts with one month of interest and fees applied.
    UpdatedBalances,
}

impl Report {
    pub fn header(self) -> &'static str {
        match self {
            Report::Sorted => "*Accounts sorted by account type and profile.",
            Report::FeesAndInterests => "*list of accounts with fee and monthly interest",
            Report::UpdatedBalances => "*list of accounts with fees and interests applied.",
        }
    }

    /// Render one account line.
    ///
    /// `UpdatedBalances` closes the Money Market statement period: the
    /// withdrawal counter is reset once the projected balance is computed.
    pub(super) fn entry(self, account: &mut Account) -> String {
        match self {
            // the sorted listing never shows the live withdrawal counter
            Report::Sorted => {
                let withdrawals = account.withdrawals().map(|_| 0);
                describe(account, account.balance(), withdrawals, None)
            }
            Report::FeesAndInterests => describe(
                account,
                account.balance(),
                account.withdrawals(),
                Some((account.monthly_fee(), account.monthly_interest())),
            ),
            Report::UpdatedBalances => {
                let updated = account.projected_balance();
                account.reset_withdrawals();
                describe(account, updated, account.withdrawals(), None)
            }
        }
    }

    /// Wrap rendered entries with the header and footer.
    pub(super) fn frame(self, entries: Vec<String>) -> String {
        let mut lines = Vec::with_capacity(entries.len() + 4);
        lines.push(String::new());
        lines.push(self.header().to_string());
        lines.extend(entries);
        lines.push(FOOTER.to_string());
        lines.push(String::new());
        lines.join("\n")
    }
}

fn describe(
    account: &Account,
    balance: Amount,
    withdrawals: Option<u32>,
    charges: Option<(Amount, Amount)>,
) -> String {
    let holder = account.holder();
    let mut line = match account.kind() {
        AccountKind::Checking => format!("Checking::{holder}::Balance ${balance}"),
        AccountKind::CollegeChecking { campus } => {
            format!("College Checking::{holder}::Balance ${balance}::{campus}")
        }
        AccountKind::Savings { .. } => format!("Savings::{holder}::Balance ${balance}"),
        AccountKind::MoneyMarket { .. } => {
            format!("Money Market::Savings::{holder}::Balance ${balance}")
        }
    };
    if account.is_loyal() {
        line.push_str("::is loyal");
    }
    if let Some(count) = withdrawals {
        line.push_str(&format!("::withdrawal: {count}"));
    }
    if let Some((fee, interest)) = charges {
        line.push_str(&format!("::fee ${fee}::monthly interest ${interest}"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Campus, Profile};

    fn holder(fname: &str) -> Profile {
        Profile::new(fname, "Doe", "1/1/2000".parse().unwrap())
    }

    #[test]
    fn checking_lines() {
        let mut account = Account::checking(holder("John"), Amount::new(1200.0));
        assert_eq!(
            Report::Sorted.entry(&mut account),
            "Checking::John Doe 1/1/2000::Balance $1,200.00"
        );
        assert_eq!(
            Report::FeesAndInterests.entry(&mut account),
            "Checking::John Doe 1/1/2000::Balance $1,200.00::fee $0.00::monthly interest $1.00"
        );
        assert_eq!(
            Report::UpdatedBalances.entry(&mut account),
            "Checking::John Doe 1/1/2000::Balance $1,201.00"
        );
    }

    #[test]
    fn college_checking_line_carries_campus() {
        let mut account =
            Account::college_checking(holder("Kid"), Amount::new(100.0), Campus::Camden);
        assert_eq!(
            Report::FeesAndInterests.entry(&mut account),
            "College Checking::Kid Doe 1/1/2000::Balance $100.00::CAMDEN::fee $0.00::monthly interest $0.08"
        );
    }

    #[test]
    fn savings_line_shows_loyalty() {
        let mut loyal = Account::savings(holder("Ann"), Amount::new(400.0), true);
        let mut plain = Account::savings(holder("Bob"), Amount::new(400.0), false);
        assert_eq!(
            Report::Sorted.entry(&mut loyal),
            "Savings::Ann Doe 1/1/2000::Balance $400.00::is loyal"
        );
        assert_eq!(
            Report::FeesAndInterests.entry(&mut plain),
            "Savings::Bob Doe 1/1/2000::Balance $400.00::fee $25.00::monthly interest $1.33"
        );
    }

    #[test]
    fn money_market_sorted_line_hides_withdrawals() {
        let mut account = Account::money_market(holder("Mia"), Amount::new(2500.0));
        account.debit(Amount::new(100.0));
        assert_eq!(
            Report::Sorted.entry(&mut account),
            "Money Market::Savings::Mia Doe 1/1/2000::Balance $2,400.00::is loyal::withdrawal: 0"
        );
        assert_eq!(account.withdrawals(), Some(1));
    }

    #[test]
    fn money_market_updated_balance_resets_counter() {
        let mut account = Account::money_market(holder("Mia"), Amount::new(2500.0));
        for _ in 0..4 {
            account.debit(Amount::new(100.0));
        }
        let line = Report::FeesAndInterests.entry(&mut account);
        assert!(line.ends_with("::withdrawal: 4::fee $10.00::monthly interest $8.31"), "{line}");

        let line = Report::UpdatedBalances.entry(&mut account);
        // 2100 + 8.3125 - 10
        assert_eq!(
            line,
            "Money Market::Savings::Mia Doe 1/1/2000::Balance $2,098.31::is loyal::withdrawal: 0"
        );
        assert_eq!(account.withdrawals(), Some(0));
        assert_eq!(account.balance(), Amount::new(2100.0));
    }

    #[test]
    fn frame_wraps_entries() {
        let framed = Report::Sorted.frame(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(
            framed,
            "\n*Accounts sorted by account type and profile.\na\nb\n*end of list.\n"
        );
    }
}
