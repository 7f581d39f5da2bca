use std::str::SplitWhitespace;

use super::error::{Action, CommandError};
use crate::Amount;

/// Operand cursor for one account command.
///
/// Operands are consumed one at a time so that a bad operand is reported
/// before a later operand is found missing.
pub(super) struct Tokens<'a> {
    words: SplitWhitespace<'a>,
    action: Action,
}

impl<'a> Tokens<'a> {
    pub(super) fn new(words: SplitWhitespace<'a>, action: Action) -> Self {
        Self { words, action }
    }

    pub(super) fn next(&mut self) -> Result<&'a str, CommandError> {
        self.words
            .next()
            .ok_or(CommandError::MissingData(self.action))
    }

    pub(super) fn amount(&mut self) -> Result<Amount, CommandError> {
        let word = self.next()?;
        word.parse()
            .map_err(|_| CommandError::InvalidAmount(word.to_string()))
    }

    /// Integer option code (campus or loyalty).
    pub(super) fn code(&mut self) -> Result<i32, CommandError> {
        let word = self.next()?;
        word.parse()
            .map_err(|_| CommandError::InvalidAmount(word.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_reports_missing_data_for_action() {
        let mut tokens = Tokens::new("A".split_whitespace(), Action::Deposit);
        assert_eq!(tokens.next().unwrap(), "A");
        assert_eq!(tokens.next(), Err(CommandError::MissingData(Action::Deposit)));
    }

    #[test]
    fn amount_and_code_parse_or_reject() {
        let mut tokens = Tokens::new("12.5 x 2 1.0".split_whitespace(), Action::Open);
        assert_eq!(tokens.amount().unwrap(), Amount::new(12.5));
        assert!(matches!(tokens.amount(), Err(CommandError::InvalidAmount(w)) if w == "x"));
        assert_eq!(tokens.code().unwrap(), 2);
        assert!(matches!(tokens.code(), Err(CommandError::InvalidAmount(_))));
        assert_eq!(tokens.code(), Err(CommandError::MissingData(Action::Open)));
    }
}
