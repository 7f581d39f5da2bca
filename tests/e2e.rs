use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

const TODAY: &str = "01/15/2025";

fn run_file(path: &str) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_txn-manager"))
        .args(["--today", TODAY, path])
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run binary");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn run_fixture(fixture: &str) -> (String, String, bool) {
    run_file(&format!("tests/fixtures/{fixture}"))
}

fn script(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn session_transcript() {
    let (stdout, stderr, success) = run_fixture("session.txt");

    assert!(success);
    assert!(stderr.is_empty(), "{stderr}");

    let expected = "\
Transaction Manager is running.
John Doe 1/1/2000(C) opened.
John Doe 1/1/2000(C) Deposit - balance updated.
John Doe 1/1/2000(C) Withdraw - insufficient fund.
Minimum of $2000 to open a Money Market account.
Jane Roe 6/15/1990(MM) opened.
Kid Young 1/1/2015(CC) opened.
Kid Young 1/1/2015(CC) is already in the database.
Ann Lee 3/3/1985(S) opened.
Invalid command!

*Accounts sorted by account type and profile.
Checking::John Doe 1/1/2000::Balance $750.00
College Checking::Kid Young 1/1/2015::Balance $100.00::NEW_BRUNSWICK
Money Market::Savings::Jane Roe 6/15/1990::Balance $2,500.00::is loyal::withdrawal: 0
Savings::Ann Lee 3/3/1985::Balance $400.00::is loyal
*end of list.

Transaction Manager is terminated.
";
    assert_eq!(stdout, expected);
}

#[test]
fn money_market_statement_cycle() {
    let (stdout, _, success) = run_fixture("money_market.txt");

    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    let mm_lines: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|l| l.starts_with("Money Market::"))
        .collect();
    assert_eq!(
        mm_lines,
        [
            "Money Market::Savings::A B 1/1/1980::Balance $2,100.00::is loyal::withdrawal: 4::fee $10.00::monthly interest $8.31",
            "Money Market::Savings::A B 1/1/1980::Balance $2,098.31::is loyal::withdrawal: 0",
            "Money Market::Savings::A B 1/1/1980::Balance $2,100.00::is loyal::withdrawal: 0::fee $0.00::monthly interest $8.31",
        ]
    );
    // end of input acts as Q
    assert_eq!(lines.last(), Some(&"Transaction Manager is terminated."));
}

#[test]
fn empty_input_starts_and_terminates() {
    let file = script("");
    let (stdout, _, success) = run_file(file.path().to_str().unwrap());

    assert!(success);
    assert_eq!(stdout, "Transaction Manager is running.\nTransaction Manager is terminated.\n");
}

#[test]
fn reports_on_empty_store() {
    let file = script("P\nPI\nUB\nQ\n");
    let (stdout, _, success) = run_file(file.path().to_str().unwrap());

    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[1..4], ["Account Database is empty!"; 3]);
}

#[test]
fn reads_commands_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_txn-manager"))
        .args(["--today", TODAY])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"C C John Doe 1/1/2000\nQ\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Transaction Manager is running.\n\
         John Doe 1/1/2000(C) is not in the database.\n\
         Transaction Manager is terminated.\n"
    );
}

#[test]
fn missing_command_file_fails() {
    let (_, stderr, success) = run_file("tests/fixtures/does-not-exist.txt");

    assert!(!success);
    assert!(stderr.contains("failed to open command file"));
}
