//! Core domain types: account holders, campuses and account types.

use std::cmp::Ordering;
use std::fmt;

use crate::date::Date;

/// An account holder: first name, last name and date of birth.
///
/// `Ord` sorts by last name, then first name (case-sensitive), then date of
/// birth. Account lookups do not use `Eq`; they go through
/// [`Profile::is_same_holder`], which ignores ASCII case in names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Profile {
    fname: String,
    lname: String,
    dob: Date,
}

impl Profile {
    pub fn new(fname: impl Into<String>, lname: impl Into<String>, dob: Date) -> Self {
        Self {
            fname: fname.into(),
            lname: lname.into(),
            dob,
        }
    }

    pub fn fname(&self) -> &str {
        &self.fname
    }

    pub fn lname(&self) -> &str {
        &self.lname
    }

    pub fn dob(&self) -> &Date {
        &self.dob
    }

    /// Holder identity: names match ignoring ASCII case, birth dates match exactly.
    pub fn is_same_holder(&self, other: &Profile) -> bool {
        self.fname.eq_ignore_ascii_case(&other.fname)
            && self.lname.eq_ignore_ascii_case(&other.lname)
            && self.dob == other.dob
    }
}

impl Ord for Profile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lname
            .cmp(&other.lname)
            .then_with(|| self.fname.cmp(&other.fname))
            .then_with(|| self.dob.cmp(&other.dob))
    }
}

impl PartialOrd for Profile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.fname, self.lname, self.dob)
    }
}

/// Campus of a College Checking account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Campus {
    NewBrunswick,
    Newark,
    Camden,
}

impl Campus {
    /// Map a campus code (0, 1 or 2) to its campus.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Campus::NewBrunswick),
            1 => Some(Campus::Newark),
            2 => Some(Campus::Camden),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Campus::NewBrunswick => "NEW_BRUNSWICK",
            Campus::Newark => "NEWARK",
            Campus::Camden => "CAMDEN",
        }
    }
}

impl fmt::Display for Campus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The closed set of account variants, without their per-variant state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    Checking,
    CollegeChecking,
    Savings,
    MoneyMarket,
}

impl AccountType {
    /// Resolve a command type token. Unknown tokens fall back to Checking.
    pub fn from_code(code: &str) -> Self {
        match code {
            "CC" => AccountType::CollegeChecking,
            "S" => AccountType::Savings,
            "MM" => AccountType::MoneyMarket,
            _ => AccountType::Checking,
        }
    }

    /// Canonical name; reports sort account types by it.
    pub fn name(self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::CollegeChecking => "CollegeChecking",
            AccountType::Savings => "Savings",
            AccountType::MoneyMarket => "MoneyMarket",
        }
    }

    /// Checking and College Checking share the one-per-holder rule.
    pub fn is_checking_family(self) -> bool {
        matches!(self, AccountType::Checking | AccountType::CollegeChecking)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
