use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE: &str = "data/obfuscated_sample.inf";

fn deobfuscate_cmd() -> Command {
    Command::cargo_bin("deobfuscate-autorun-inf").unwrap()
}

#[test]
fn test_default_pipeline_output() {
    deobfuscate_cmd()
        .args(["--input", SAMPLE])
        .assert()
        .success()
        .stdout("[Autorun]\nopen = launch.exe\nicon = setup.ico , 5\n");
}

#[test]
fn test_default_mode_equals_all_four_flags() {
    let default_run = deobfuscate_cmd().args(["--input", SAMPLE]).assert().success();

    let explicit_run = deobfuscate_cmd()
        .args([
            "--input",
            SAMPLE,
            "--remove-empty-lines",
            "--remove-comments",
            "--fix-missing-brackets",
            "--remove-junk-sections",
        ])
        .assert()
        .success();

    assert_eq!(
        default_run.get_output().stdout,
        explicit_run.get_output().stdout
    );
}

#[test]
fn test_no_deobfuscation_emits_filtered_content_verbatim() {
    deobfuscate_cmd()
        .args(["--input", SAMPLE, "--no-deobfuscation"])
        .assert()
        .success()
        .stdout(predicate::str::contains(";  junk comment"))
        .stdout(predicate::str::contains("[AUTORUN\n"))
        .stdout(predicate::str::contains("[DecoySection]"));
}

#[test]
fn test_single_pass_selection() {
    // Only bracket repair requested: comments and the decoy section survive.
    deobfuscate_cmd()
        .args(["--input", SAMPLE, "--fix-missing-brackets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[AUTORUN]"))
        .stdout(predicate::str::contains(";  junk comment"))
        .stdout(predicate::str::contains("[DecoySection]"));
}

#[test]
fn test_show_sections_listing() {
    deobfuscate_cmd()
        .args(["--input", SAMPLE, "--show-sections"])
        .assert()
        .success()
        .stdout("inf-file contains 1 sections\n- Autorun\n");
}

#[test]
fn test_output_file_receives_exact_content() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("cleaned.inf");

    deobfuscate_cmd()
        .args(["--input", SAMPLE, "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote 3 lines to"));

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, "[Autorun]\nopen = launch.exe\nicon = setup.ico , 5");
}

#[test]
fn test_missing_input_prints_help() {
    deobfuscate_cmd()
        .assert()
        .success()
        .stderr(predicate::str::contains("no input file specified"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_unreadable_input_reports_load_error() {
    deobfuscate_cmd()
        .args(["--input", "does/not/exist.inf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}
