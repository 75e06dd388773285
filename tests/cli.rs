use assert_cmd::Command;
use predicates::prelude::*;

fn recase() -> Command {
    Command::cargo_bin("recase").unwrap()
}

#[test]
fn converts_positional_inputs() {
    recase()
        .args(["--no-color", "-s", "kebab", "  HelloWorld_foo bar-baz  "])
        .assert()
        .success()
        .stdout("hello-world-foo-bar-baz\n");
}

#[test]
fn converts_to_snake() {
    recase()
        .args(["--no-color", "-s", "snake", "userID"])
        .assert()
        .success()
        .stdout("user_id\n");
}

#[test]
fn converts_to_camel() {
    recase()
        .args(["--no-color", "-s", "camel", "XMLHttpRequest"])
        .assert()
        .success()
        .stdout("xmlHttpRequest\n");
}

#[test]
fn reads_stdin_when_no_inputs() {
    recase()
        .args(["--no-color", "-s", "dot"])
        .write_stdin("Hello World\nfooBar\n")
        .assert()
        .success()
        .stdout("hello.world\nfoo.bar\n");
}

#[test]
fn multiple_inputs_one_line_each() {
    recase()
        .args(["--no-color", "-s", "snake", "fooBar", "baz-qux"])
        .assert()
        .success()
        .stdout("foo_bar\nbaz_qux\n");
}

#[test]
fn strict_camel_fails_on_punctuation_only() {
    recase()
        .args(["--no-color", "-s", "camel", "@@@---"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("alphanumeric"));
}

#[test]
fn no_fail_suppresses_exit_code() {
    recase()
        .args(["--no-color", "--no-fail", "-s", "camel", "@@@---"])
        .assert()
        .success();
}

#[test]
fn lenient_camel_emits_sentinel() {
    recase()
        .args(["--no-color", "--lenient", "-s", "camel", "@@@---"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn lenient_is_default_for_separator_styles() {
    recase()
        .args(["--no-color", "-s", "dot", "@@@---"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn strict_flag_applies_to_separator_styles() {
    recase()
        .args(["--no-color", "--strict", "-s", "kebab", "!!!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("alphanumeric"));
}

#[test]
fn json_output_carries_conversions_and_counts() {
    recase()
        .args(["--no-color", "-o", "json", "-s", "dot", "Hello World"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hello.world\""))
        .stdout(predicate::str::contains("\"converted\": 1"))
        .stdout(predicate::str::contains("\"style\": \"dot\""));
}

#[test]
fn json_output_reports_failures() {
    recase()
        .args(["--no-color", "--no-fail", "-o", "json", "-s", "camel", "@@@"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"failed\": 1"))
        .stdout(predicate::str::contains("alphanumeric"));
}

#[test]
fn rejects_unknown_style() {
    recase()
        .args(["-s", "pascal", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pascal"));
}

#[test]
fn generates_completions() {
    recase()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recase"));
}
