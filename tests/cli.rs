use std::{fs, process::Output, str};

#[test]
fn prints_the_first_ten_values_by_default() -> anyhow::Result<()> {
    assert_cmd::Command::cargo_bin("fibgen")?
        .assert()
        .success()
        .stdout("0 1 1 2 3 5 8 13 21 34 \n")
        .stderr("");
    Ok(())
}

#[test]
fn count_of_one_prints_just_zero() -> anyhow::Result<()> {
    assert_cmd::Command::cargo_bin("fibgen")?
        .args(["--count", "1"])
        .assert()
        .success()
        .stdout("0 \n");
    Ok(())
}

#[test]
fn count_of_zero_prints_an_empty_line() -> anyhow::Result<()> {
    assert_cmd::Command::cargo_bin("fibgen")?
        .args(["--count", "0"])
        .assert()
        .success()
        .stdout("\n");
    Ok(())
}

#[test]
fn rejects_a_negative_count() -> anyhow::Result<()> {
    assert_cmd::Command::cargo_bin("fibgen")?
        .args(["--count", "-1"])
        .assert()
        .failure()
        .stdout("");
    Ok(())
}

#[test]
fn reports_overflow_for_a_large_count() -> anyhow::Result<()> {
    let assert = assert_cmd::Command::cargo_bin("fibgen")?
        .args(["--count", "95"])
        .assert()
        .failure()
        .stdout("");
    let Output { stderr, .. } = assert.get_output();
    assert!(str::from_utf8(stderr)?.contains("fibonacci(94) does not fit in a 64-bit integer"));
    Ok(())
}

#[test]
fn writes_to_the_file_given_by_output() -> anyhow::Result<()> {
    let tempdir = tempfile::tempdir()?;
    let output = tempdir.path().join("fib.txt");

    assert_cmd::Command::cargo_bin("fibgen")?
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    assert_eq!("0 1 1 2 3 5 8 13 21 34 \n", fs::read_to_string(&output)?);
    Ok(())
}
