use std::path::PathBuf;

use clap::Parser;

use crate::Date;

/// Interactive bank account manager reading one command per line.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Read commands from FILE instead of standard input
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Reference date for birth-date and age checks (e.g. 10/19/2026), defaults to the local date
    #[arg(long, value_name = "MM/DD/YYYY", value_parser = parse_today)]
    pub today: Option<Date>,
}

fn parse_today(s: &str) -> Result<Date, String> {
    let date: Date = s.parse().map_err(|e| format!("{e}"))?;
    if date.is_valid() {
        Ok(date)
    } else {
        Err(format!("{date} is not a valid calendar date"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let cli = Cli::try_parse_from(["txn-manager"]).unwrap();
        assert!(cli.input.is_none());
        assert!(cli.today.is_none());
    }

    #[test]
    fn input_file_and_today() {
        let args = ["txn-manager", "--today", "01/15/2025", "commands.txt"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("commands.txt")));
        assert_eq!(cli.today, Some(Date::new(2025, 1, 15)));
    }

    #[test]
    fn today_must_be_a_calendar_date() {
        assert!(Cli::try_parse_from(["txn-manager", "--today", "02/30/2025"]).is_err());
        assert!(Cli::try_parse_from(["txn-manager", "--today", "tomorrow"]).is_err());
    }
}
