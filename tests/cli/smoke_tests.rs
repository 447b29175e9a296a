use assert_cmd::Command;
use predicates::prelude::*;

fn count_chars() -> Command {
    Command::new(env!("CARGO_BIN_EXE_count_chars"))
}

#[test]
fn classifies_a_mixed_line() {
    count_chars()
        .write_stdin("Hello World 123\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vowels: 3"))
        .stdout(predicate::str::contains("Consonants: 7"))
        .stdout(predicate::str::contains("Digits: 3"))
        .stdout(predicate::str::contains("White spaces: 2"));
}

#[test]
fn prompts_before_the_report() {
    count_chars()
        .write_stdin("abc\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Enter a line of string: "));
}

#[test]
fn empty_input_reports_all_zero() {
    count_chars()
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vowels: 0"))
        .stdout(predicate::str::contains("Consonants: 0"))
        .stdout(predicate::str::contains("Digits: 0"))
        .stdout(predicate::str::contains("White spaces: 0"));
}

#[test]
fn closed_stdin_behaves_like_an_empty_line() {
    count_chars()
        .assert()
        .success()
        .stdout(predicate::str::contains("Vowels: 0"))
        .stdout(predicate::str::contains("White spaces: 0"));
}

#[test]
fn symbols_report_all_zero() {
    count_chars()
        .write_stdin("!!!@@@\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vowels: 0"))
        .stdout(predicate::str::contains("Consonants: 0"))
        .stdout(predicate::str::contains("Digits: 0"))
        .stdout(predicate::str::contains("White spaces: 0"));
}

#[test]
fn over_length_input_is_truncated_to_149_characters() {
    count_chars()
        .write_stdin(format!("{}\n", "a".repeat(150)))
        .assert()
        .success()
        .stdout(predicate::str::contains("Vowels: 149"));
}
