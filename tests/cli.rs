use assert_cmd::Command;
use predicates::prelude::*;

fn tcg_points() -> Command {
    Command::cargo_bin("tcg-points").unwrap()
}

fn stdout_of(args: &[&str]) -> String {
    let output = tcg_points().args(args).output().unwrap();
    assert!(output.status.success(), "{:?} failed", args);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_default_flags_example() {
    tcg_points()
        .args(["2", "5", "1"])
        .assert()
        .success()
        .stdout("Calculated Pokemon TCG Battle Points: 2\n")
        .stderr("");
}

#[test]
fn test_custom_flags_example() {
    tcg_points()
        .args(["2", "5", "1", "--multi", "4", "--divi", "2"])
        .assert()
        .success()
        .stdout("Calculated Pokemon TCG Battle Points: 5\n");
}

#[test]
fn test_explicit_defaults_match_implicit() {
    assert_eq!(
        stdout_of(&["7", "22", "13"]),
        stdout_of(&["7", "22", "13", "--multi", "3", "--divi", "3"])
    );
}

#[test]
fn test_malformed_flag_value_ignored() {
    tcg_points()
        .args(["1", "2", "3", "--multi", "abc"])
        .assert()
        .code(0)
        .stdout(stdout_of(&["1", "2", "3"]));
}

#[test]
fn test_trailing_flag_and_unknown_tokens_ignored() {
    assert_eq!(
        stdout_of(&["1", "2", "3", "bogus", "--divi"]),
        stdout_of(&["1", "2", "3"])
    );
}

#[test]
fn test_negative_positionals() {
    // first = -12 + 7 = -5, second = ceil(-7/3) + 4 = 2, total = -5 + 2 - 10
    tcg_points()
        .args(["-4", "-7", "-10"])
        .assert()
        .success()
        .stdout("Calculated Pokemon TCG Battle Points: -13\n");
}

#[test]
fn test_missing_arguments_is_usage_error() {
    tcg_points()
        .args(["1", "2"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("<twins> <tpoints> <mdamage>"));
}

#[test]
fn test_no_arguments_is_usage_error() {
    tcg_points()
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_integer_argument() {
    tcg_points()
        .args(["a", "2", "3"])
        .assert()
        .code(1)
        .stdout("")
        .stderr("Invalid integer arguments.\n");
}

#[test]
fn test_zero_divisor_is_error() {
    tcg_points()
        .args(["2", "5", "1", "--divi", "0"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Divisor must be non-zero."));
}

#[test]
fn test_overflow_is_error() {
    tcg_points()
        .args(["9223372036854775807", "0", "0"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("overflowed"));
}

#[test]
fn test_player_level_bonus() {
    tcg_points()
        .args(["2", "5", "1", "--plevel", "3"])
        .assert()
        .success()
        .stdout("Calculated Pokemon TCG Battle Points: 3.5\n");
}

#[test]
fn test_player_level_capped() {
    tcg_points()
        .args(["2", "5", "1", "--plevel", "80"])
        .assert()
        .success()
        .stdout("Calculated Pokemon TCG Battle Points: 27.0\n");
}

#[test]
fn test_verbose_goes_to_stderr() {
    tcg_points()
        .args(["-v", "2", "5", "1", "--multi", "x"])
        .assert()
        .success()
        .stdout("Calculated Pokemon TCG Battle Points: 2\n")
        .stderr(predicate::str::contains("multi=3 (default)"))
        .stderr(predicate::str::contains("Ignored: --multi value 'x' is not an integer"))
        .stderr(predicate::str::contains("Breakdown:"));
}

#[test]
fn test_help() {
    tcg_points()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--multi X"))
        .stdout(predicate::str::contains("--divi Y"));
}

#[test]
fn test_leading_double_dash_is_invalid_integer() {
    tcg_points()
        .args(["--", "1", "2", "3"])
        .assert()
        .code(1)
        .stdout("")
        .stderr("Invalid integer arguments.\n");
}

#[cfg(unix)]
#[test]
fn test_non_utf8_trailing_token_ignored() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    tcg_points()
        .args(["2", "5", "1"])
        .arg(OsString::from_vec(vec![0xff, 0xfe]))
        .assert()
        .success()
        .stdout("Calculated Pokemon TCG Battle Points: 2\n")
        .stderr("");
}

#[cfg(unix)]
#[test]
fn test_non_utf8_positional_is_invalid_integer() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    tcg_points()
        .arg(OsString::from_vec(vec![0xff]))
        .args(["1", "2"])
        .assert()
        .code(1)
        .stdout("")
        .stderr("Invalid integer arguments.\n");
}
