//! Error types for account store operations.

use thiserror::Error;

use crate::Amount;
use crate::model::{AccountType, Profile};

/// Error returned by [`AccountStore`](super::AccountStore) mutations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("{1} account for {0} already exists")]
    Duplicate(Profile, AccountType),

    #[error("no {1} account for {0}")]
    NotFound(Profile, AccountType),

    #[error("insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds { available: Amount, requested: Amount },
}
