//! Integration tests for the interactive session loop.
//!
//! These tests drive `Session::run` with scripted input and an in-memory
//! repository, checking the printed conversation and what gets persisted.

mod mocks;

use chrono::NaiveDate;
use contact_assistant::error::SessionError;
use contact_assistant::models::{AddressBook, Record};
use contact_assistant::{Config, Session};
use mocks::MockBookRepository;
use std::io::Cursor;

fn new_year_2024() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Run a session over `script` and return everything it printed.
fn run_script(
    repo: &MockBookRepository,
    script: impl AsRef<[u8]>,
) -> Result<String, SessionError> {
    let session = Session::new(repo.clone(), Config::default()).with_today(new_year_2024);
    let mut output = Vec::new();
    session.run(Cursor::new(script.as_ref().to_vec()), &mut output)?;
    Ok(String::from_utf8(output).unwrap())
}

fn replies(output: &str) -> Vec<&str> {
    output
        .split("Enter a command: ")
        .skip(1)
        .map(str::trim_end)
        .collect()
}

#[test]
fn test_full_conversation() {
    let repo = MockBookRepository::new();
    let script = "\
hello
add John 1234567890
add John 5555555555
change John 1234567890 0987654321
phone John
add-birthday John 03.01.1990
show-birthday John
birthdays
all
exit
";

    let output = run_script(&repo, script).unwrap();

    assert!(output.starts_with("Welcome to the assistant bot!\n"));
    assert_eq!(
        replies(&output),
        vec![
            "How can I help you?",
            "Contact added.",
            "Contact updated.",
            "Contact updated.",
            "Contact John: 5555555555; 0987654321",
            "Birthday added.",
            "Contact John: Birthday is 03.01.1990",
            "John: 03.01.2024",
            "Contact name: John, phones: 5555555555; 0987654321, birthday: 03.01.1990",
            "Good bye!",
        ]
    );
}

#[test]
fn test_errors_do_not_end_session() {
    let repo = MockBookRepository::new();
    let script = "\
add John
add John 12
phone Ghost
add-birthday Ghost 01.01.2000
fly
close
";

    let output = run_script(&repo, script).unwrap();

    assert_eq!(
        replies(&output),
        vec![
            "Enter user name and phone/birthday",
            "Phone number must contain 10 digits",
            "Contact is not found",
            "Contact is not found",
            "Invalid command",
            "Good bye!",
        ]
    );
}

#[test]
fn test_exit_saves_book() {
    let repo = MockBookRepository::new();
    run_script(&repo, "add John 1234567890\nclose\nadd Jane 0987654321\n").unwrap();

    assert_eq!(repo.get_call_count("load"), 1);
    assert_eq!(repo.get_call_count("save"), 1);

    let saved = repo.stored().unwrap();
    assert!(saved.find_record("John").is_some());
    // Input after `close` is never read
    assert!(saved.find_record("Jane").is_none());
}

#[test]
fn test_end_of_input_saves_book() {
    let repo = MockBookRepository::new();
    let output = run_script(&repo, "add John 1234567890\n").unwrap();

    assert!(output.trim_end().ends_with("Good bye!"));
    assert_eq!(repo.get_call_count("save"), 1);
    assert!(repo.stored().unwrap().find_record("John").is_some());
}

#[test]
fn test_invalid_utf8_line_keeps_session_going() {
    let repo = MockBookRepository::new();
    let script: &[u8] = b"add John 1234567890\nadd \xff\xfe 1234567890\nadd Jane 0987654321\nexit\n";
    let output = run_script(&repo, script).unwrap();

    let replies = replies(&output);
    assert_eq!(replies[1], "Name must contain only letters");
    assert_eq!(replies.last(), Some(&"Good bye!"));

    assert_eq!(repo.get_call_count("save"), 1);
    let saved = repo.stored().unwrap();
    assert_eq!(saved.len(), 2);
    assert!(saved.find_record("John").is_some());
    assert!(saved.find_record("Jane").is_some());
}

#[test]
fn test_blank_lines_are_skipped() {
    let repo = MockBookRepository::new();
    let output = run_script(&repo, "\n   \nhello\nexit\n").unwrap();

    assert_eq!(
        replies(&output),
        vec!["", "", "How can I help you?", "Good bye!"]
    );
}

#[test]
fn test_session_starts_from_stored_book() {
    let mut record = Record::new("Jane").unwrap();
    record.add_phone("0987654321").unwrap();
    let mut book = AddressBook::new();
    book.add_record(record);

    let repo = MockBookRepository::with_book(book);
    let output = run_script(&repo, "phone Jane\nexit\n").unwrap();

    assert_eq!(
        replies(&output),
        vec!["Contact Jane: 0987654321", "Good bye!"]
    );
}

#[test]
fn test_unreadable_book_starts_empty() {
    let repo = MockBookRepository::new();
    repo.fail_loads();

    let output = run_script(&repo, "all\nexit\n").unwrap();
    assert_eq!(replies(&output), vec!["Phonebook is empty", "Good bye!"]);
}

#[test]
fn test_save_failure_is_fatal() {
    let repo = MockBookRepository::new();
    repo.fail_saves();

    let result = run_script(&repo, "add John 1234567890\nexit\n");
    match result {
        Err(SessionError::Save(_)) => {}
        other => panic!("Expected save error, got: {:?}", other),
    }
}
