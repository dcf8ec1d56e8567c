//! End-to-End Session Tests
//!
//! Runs whole counter sessions against real files in a temporary directory,
//! with scripted operator input.

use std::fs;

use interface_cli::{run_session, CliConfig, CliError};
use tempfile::TempDir;

const DEFAULTS_LINE: &str = "1944,100.00,0.10,20.00,15.00,10.00,13.00,5.00";

const FIRST_POLICY: &str =
    "janet\npike\n12 Water Street\nst. john's\nNL\na1c1a1\n7095551234\n2\nY\nY\nY\nMonthly\n";
const SECOND_POLICY: &str =
    "omar\nhaddad\n400 King Street West\ntoronto\non\nm5v1k4\n4165550199\n1\nN\nN\nN\nfull\n";

struct Session {
    dir: TempDir,
    config: CliConfig,
}

impl Session {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("OSICDef.dat"), format!("{DEFAULTS_LINE}\n")).unwrap();
        let config = CliConfig {
            data_dir: dir.path().to_path_buf(),
            progress_steps: 0,
            ..CliConfig::default()
        };
        Self { dir, config }
    }

    /// Runs with `script` as input and returns the receipt output
    fn run(&self, script: &str) -> Result<String, CliError> {
        let mut prompts = Vec::new();
        let mut receipts = Vec::new();
        let mut progress = Vec::new();
        run_session(
            &self.config,
            script.as_bytes(),
            &mut prompts,
            &mut receipts,
            &mut progress,
        )?;
        Ok(String::from_utf8(receipts).unwrap())
    }

    fn defaults(&self) -> String {
        fs::read_to_string(self.dir.path().join("OSICDef.dat")).unwrap()
    }

    fn ledger(&self) -> String {
        fs::read_to_string(self.dir.path().join("Policies.dat")).unwrap()
    }
}

/// Two policies in one session, then the batch reprint
#[test]
fn test_two_policy_session() {
    let session = Session::new();
    let script = format!("{FIRST_POLICY}y\n{SECOND_POLICY}n\n");

    let output = session.run(&script).unwrap();

    assert_eq!(
        session.defaults(),
        "1946,100.00,0.10,20.00,15.00,10.00,13.00,5.00\n"
    );
    let ledger = session.ledger();
    let lines: Vec<&str> = ledger.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("1944, "));
    assert!(lines[0].contains(", NL, A1C1A1, 7095551234, 2, Y, Y, Y, MONTHLY, 316.40, 190.00, 90.00, 280.00, 36.40"));
    assert!(lines[1].starts_with("1945, "));
    assert!(lines[1].contains(", ON, M5V1K4, 4165550199, 1, N, N, N, FULL, 113.00, "));

    let (issued, reprinted) = output
        .split_once("===== RECEIPTS FOR ALL CUSTOMERS =====")
        .expect("reprint banner");
    assert_eq!(issued.matches("POLICY NUMBER:").count(), 2);
    assert_eq!(reprinted.matches("POLICY NUMBER:").count(), 2);
    assert!(reprinted.find("POLICY NUMBER: 1944") < reprinted.find("POLICY NUMBER: 1945"));
    assert!(output.contains("Name: Janet Pike"));
    assert!(output.contains("$316.40"));
}

/// A second session continues numbering and reprints both sessions' policies
#[test]
fn test_numbering_continues_across_sessions() {
    let session = Session::new();
    session.run(&format!("{FIRST_POLICY}n\n")).unwrap();

    let output = session.run(&format!("{SECOND_POLICY}n\n")).unwrap();

    assert!(session.defaults().starts_with("1946,"));
    let reprinted = output.split_once("RECEIPTS FOR ALL CUSTOMERS").unwrap().1;
    assert_eq!(reprinted.matches("POLICY NUMBER:").count(), 2);
}

/// A counter left behind by an interrupted run is moved past the ledger
#[test]
fn test_recovers_from_stale_counter() {
    let session = Session::new();
    session.run(&format!("{FIRST_POLICY}n\n")).unwrap();
    fs::write(
        session.dir.path().join("OSICDef.dat"),
        format!("{DEFAULTS_LINE}\n"),
    )
    .unwrap();

    session.run(&format!("{SECOND_POLICY}n\n")).unwrap();

    let ledger = session.ledger();
    let numbers: Vec<&str> = ledger
        .lines()
        .filter_map(|l| l.split(", ").next())
        .collect();
    assert_eq!(numbers, vec!["1944", "1945"]);
    assert!(session.defaults().starts_with("1946,"));
}

#[test]
fn test_reprint_disabled() {
    let mut session = Session::new();
    session.config.reprint_on_exit = false;

    let output = session.run(&format!("{FIRST_POLICY}n\n")).unwrap();

    assert!(!output.contains("RECEIPTS FOR ALL CUSTOMERS"));
    assert_eq!(output.matches("POLICY NUMBER:").count(), 1);
}

#[test]
fn test_corrupt_ledger_stops_before_input() {
    let session = Session::new();
    fs::write(session.dir.path().join("Policies.dat"), "1944, 2023-07-26, short line\n").unwrap();

    let err = session.run(&format!("{FIRST_POLICY}n\n")).unwrap_err();

    assert!(err.is_data_corruption());
    assert!(err.to_string().contains("line 1"), "{err}");
    assert_eq!(session.defaults(), format!("{DEFAULTS_LINE}\n"));
}

#[test]
fn test_missing_defaults_file() {
    let session = Session::new();
    fs::remove_file(session.dir.path().join("OSICDef.dat")).unwrap();

    let err = session.run(&format!("{FIRST_POLICY}n\n")).unwrap_err();

    assert!(matches!(err, CliError::Policy(_)));
}
