// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use staffbook::{AddressBook, CommandResult};
use staffbook_domain::{Attendance, Person};
use staffbook_parser::run_command;
use staffbook_persistence::{JsonStorage, PersistenceError, sample_address_book};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info};

/// Staffbook - keeps employee records, leave and attendance
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON data file
    #[arg(short, long, default_value = "data/staffbook.json")]
    data_file: PathBuf,

    /// Start with an empty address book instead of sample data when the data file does not exist
    #[arg(long)]
    no_sample: bool,
}

const PROMPT: &str = "> ";

/// Loads the address book, seeding it when no data file exists yet.
fn load_address_book(
    storage: &JsonStorage,
    use_sample: bool,
) -> Result<AddressBook, PersistenceError> {
    match storage.read_address_book()? {
        Some(book) => Ok(book),
        None if use_sample => {
            info!("Starting with sample data");
            sample_address_book()
        }
        None => {
            info!("Starting with an empty address book");
            Ok(AddressBook::new())
        }
    }
}

/// Formats the detail view of a person.
fn render_person(person: &Person) -> String {
    let attendance: &Attendance = person.attendance();
    let mut lines: Vec<String> = vec![
        person.to_string(),
        format!(
            "Attendance: {} work day(s), {} absent day(s), {:.1}% attendance",
            attendance.work_day_count(),
            attendance.absent_day_count(),
            attendance.attendance_rate()
        ),
    ];

    if person.leaves().is_empty() {
        lines.push(String::from("Leaves: none"));
    } else {
        lines.push(String::from("Leaves:"));
        lines.extend(person.leaves().iter().map(|leave| {
            format!(
                "  {} to {} ({})",
                leave.formatted_start_date(),
                leave.formatted_end_date(),
                leave.reason()
            )
        }));
    }

    lines.join("\n")
}

/// Reads commands from `input` until `exit` or end of input.
///
/// Every successful command is followed by a save. Failed commands and
/// failed saves are reported and the session carries on.
fn run_session<R: BufRead, W: Write>(
    book: &mut AddressBook,
    storage: &JsonStorage,
    mut input: R,
    output: &mut W,
) -> io::Result<()> {
    let mut line: String = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match run_command(book, &line) {
            Ok(result) => {
                write_result(output, &result)?;
                if let Err(err) = storage.save_address_book(book) {
                    error!(error = %err, "Failed to save address book");
                    writeln!(output, "Could not save data file: {err}")?;
                }
                if result.exit {
                    break;
                }
            }
            Err(err) => writeln!(output, "{err}")?,
        }
    }

    Ok(())
}

fn write_result<W: Write>(output: &mut W, result: &CommandResult) -> io::Result<()> {
    writeln!(output, "{}", result.feedback_to_user)?;
    if let Some(person) = &result.person_to_view {
        writeln!(output, "{}", render_person(person))?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    info!(data_file = %args.data_file.display(), "Starting Staffbook");

    let storage: JsonStorage = JsonStorage::new(args.data_file.clone());
    let mut book: AddressBook = load_address_book(&storage, !args.no_sample).inspect_err(|err| {
        error!(error = %err, "Failed to load address book");
    })?;

    let stdin: io::Stdin = io::stdin();
    let mut stdout: io::Stdout = io::stdout();
    run_session(&mut book, &storage, stdin.lock(), &mut stdout)?;

    info!("Exiting Staffbook");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn create_test_storage(name: &str) -> (PathBuf, JsonStorage) {
        let dir: PathBuf =
            std::env::temp_dir().join(format!("staffbook-cli-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let storage: JsonStorage = JsonStorage::new(dir.join("staffbook.json"));
        (dir, storage)
    }

    fn run_lines(book: &mut AddressBook, storage: &JsonStorage, lines: &str) -> String {
        let mut output: Vec<u8> = Vec::new();
        run_session(book, storage, lines.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_load_seeds_sample_data_when_file_missing() {
        let (dir, storage) = create_test_storage("seed");

        let book: AddressBook = load_address_book(&storage, true).unwrap();
        let empty: AddressBook = load_address_book(&storage, false).unwrap();

        assert_eq!(book.persons().len(), 6);
        assert!(empty.persons().is_empty());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_session_saves_after_successful_command() {
        let (dir, storage) = create_test_storage("save");
        let mut book: AddressBook = sample_address_book().unwrap();

        let output: String = run_lines(&mut book, &storage, "addtag 1 Mentor\nexit\n");

        assert!(output.contains("Tag \"Mentor\" added successfully to Alex Yeoh."));
        let saved: AddressBook = storage.read_address_book().unwrap().unwrap();
        assert!(saved.persons()[0].tags().iter().any(|t| t.name() == "mentor"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_session_continues_after_errors() {
        let (dir, storage) = create_test_storage("errors");
        let mut book: AddressBook = sample_address_book().unwrap();

        let output: String = run_lines(&mut book, &storage, "bogus\nview 0\nview 2\n");

        assert!(output.contains("Unknown command: 'bogus'"));
        assert!(output.contains("Index cannot be zero"));
        assert!(output.contains("Viewing details of: Bernice Yu"));
        assert!(output.contains("Leaves: none"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_session_stops_at_exit() {
        let (dir, storage) = create_test_storage("exit");
        let mut book: AddressBook = sample_address_book().unwrap();

        let output: String = run_lines(&mut book, &storage, "exit\nview 1\n");

        assert!(!output.contains("Viewing details of"));
        assert!(storage.path().exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_render_person_lists_leaves() {
        let mut book: AddressBook = sample_address_book().unwrap();
        run_command(
            &mut book,
            "leave add 1 /start 2025-03-10 /end 2025-03-12 /reason Medical",
        )
        .unwrap();

        let rendered: String = render_person(&book.persons()[0]);

        assert!(rendered.contains("10 Mar 2025 to 12 Mar 2025 (Medical)"));
        assert!(rendered.contains("100.0% attendance"));
    }
}
