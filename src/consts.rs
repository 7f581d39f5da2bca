//! Business constants shared by the account model and the store.

/// Number of months used to derive a monthly rate from an annual one.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Annual interest rate of Checking and College Checking accounts.
pub const CHECKING_ANNUAL_RATE: f64 = 0.01;
/// Monthly fee of a Checking account below the waiver balance.
pub const CHECKING_MONTHLY_FEE: f64 = 12.0;
/// Checking balance at which the monthly fee is waived.
pub const CHECKING_FEE_WAIVER: f64 = 1000.0;

/// Annual interest rate of a Savings account.
pub const SAVINGS_ANNUAL_RATE: f64 = 0.04;
/// Monthly fee of a Savings account below the waiver balance.
/// Also the base fee of a Money Market account.
pub const SAVINGS_MONTHLY_FEE: f64 = 25.0;
/// Savings balance at which the monthly fee is waived.
pub const SAVINGS_FEE_WAIVER: f64 = 500.0;
/// Extra annual rate granted to loyal savers.
pub const LOYAL_BONUS_RATE: f64 = 0.0025;

/// Annual interest rate of a Money Market account.
pub const MONEY_MARKET_ANNUAL_RATE: f64 = 0.045;
/// Minimum Money Market balance, both to open and to stay loyal.
pub const MONEY_MARKET_MIN_BALANCE: f64 = 2000.0;
/// Withdrawals per statement period before the Money Market fee applies.
pub const MONEY_MARKET_WITHDRAWAL_LIMIT: u32 = 3;
/// Fee for exceeding the withdrawal limit while above the minimum balance.
pub const MONEY_MARKET_EXCESS_WITHDRAWAL_FEE: f64 = 10.0;
/// Fee for exceeding the withdrawal limit while below the minimum balance.
pub const MONEY_MARKET_PENALTY_FEE: f64 = 35.0;

/// College Checking is reserved for holders younger than this.
pub const COLLEGE_MAX_AGE: i32 = 24;
/// Money Market requires holders at least this old.
pub const MONEY_MARKET_MIN_AGE: i32 = 16;

/// Initial number of account slots reserved by the store.
pub const INITIAL_CAPACITY: usize = 4;
/// Number of slots added each time the store is full.
pub const GROWTH_INCREMENT: usize = 4;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in each month of a common year (index 0 unused).
pub(crate) const DAYS_IN_MONTH: [i32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
/// Days in February of a leap year.
pub(crate) const FEBRUARY_DAYS_LEAP: i32 = 29;
