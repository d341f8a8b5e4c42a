use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{TestEnv, full_form_json, pdf_files};

#[test]
fn init_creates_schema() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));
    assert!(std::path::Path::new(&env.db).exists());
}

#[test]
fn period_prints_window_around_date() {
    let env = TestEnv::new();
    env.cmd()
        .args(["period", "--date", "2025-01-20"])
        .assert()
        .success()
        .stdout(contains("2025-01-14").and(contains("2025-01-27")))
        .stdout(contains("Tuesday"));
}

#[test]
fn period_rejects_bad_date() {
    let env = TestEnv::new();
    env.cmd()
        .args(["period", "--date", "20-01-2025"])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

#[test]
fn submit_list_and_render() {
    let env = TestEnv::new();
    env.init();
    env.submit(&full_form_json("E1", "ops"), "2025-01-20");
    env.submit(&full_form_json("E2", "finance"), "2025-01-21");

    env.cmd()
        .args(["list", "--role", "admin", "--as", "root"])
        .assert()
        .success()
        .stdout(contains("E1").and(contains("E2")))
        .stdout(contains("80"));

    env.cmd()
        .args(["list", "--role", "supervisor", "--group", "ops", "--as", "S1"])
        .assert()
        .success()
        .stdout(contains("E1").and(contains("E2").not()));

    let out = env.reports_dir();
    let out_str = out.to_string_lossy().to_string();
    for employee in ["E1", "E2"] {
        env.cmd()
            .args([
                "render",
                "--employee",
                employee,
                "--period-start",
                "2025-01-14",
                "--out-dir",
                &out_str,
                "--role",
                "admin",
                "--as",
                "root",
            ])
            .assert()
            .success()
            .stdout(contains("Report written"));
    }

    assert_eq!(
        pdf_files(&out),
        vec![
            "timesheet_E1_2025-01-14.pdf".to_string(),
            "timesheet_E2_2025-01-14.pdf".to_string()
        ]
    );
}

#[test]
fn resubmission_is_an_amendment() {
    let env = TestEnv::new();
    env.init();
    env.submit(&full_form_json("E1", "ops"), "2025-01-20");

    let file = env.write_form("again", &full_form_json("E1", "ops"));
    env.cmd()
        .args(["submit", "--file", &file, "--date", "2025-01-25"])
        .assert()
        .success()
        .stdout(contains("amended"));

    env.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("submit").and(contains("amend")));
}

#[test]
fn invalid_form_lists_every_problem() {
    let env = TestEnv::new();
    env.init();
    let file = env.write_form("bad", &serde_json::json!({ "week1": {} }));
    env.cmd()
        .args(["submit", "--file", &file, "--date", "2025-01-20"])
        .assert()
        .failure()
        .stderr(contains("first name is required").and(contains("hourly rate is required")));
}

#[test]
fn supervisor_without_group_fails() {
    let env = TestEnv::new();
    env.init();
    env.cmd()
        .args(["list", "--role", "supervisor", "--as", "S1"])
        .assert()
        .failure()
        .stderr(contains("group"));
}

#[test]
fn employee_cannot_render_someone_else() {
    let env = TestEnv::new();
    env.init();
    env.submit(&full_form_json("E1", "ops"), "2025-01-20");

    let out = env.reports_dir();
    let out_str = out.to_string_lossy().to_string();
    env.cmd()
        .args([
            "render",
            "--employee",
            "E1",
            "--period-start",
            "2025-01-20",
            "--out-dir",
            &out_str,
            "--as",
            "E2",
        ])
        .assert()
        .failure()
        .stderr(contains("Access denied").or(contains("cannot read")));
    assert!(pdf_files(&out).is_empty());
}

#[test]
fn db_check_passes_on_fresh_database() {
    let env = TestEnv::new();
    env.init();
    env.cmd()
        .args(["db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn reinit_keeps_migrated_anchor() {
    let env = TestEnv::new();
    env.cmd().arg("init").assert().success();

    env.cmd()
        .args(["config", "--set-anchor", "2025-01-19"])
        .assert()
        .success();

    env.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(contains("kept anchor 2025-01-19 v2"));

    env.cmd()
        .args(["period", "--date", "2025-01-20"])
        .assert()
        .success()
        .stdout(contains("2025-01-19").and(contains("(v2)")))
        .stdout(contains("2025-02-01"));
}

#[test]
fn delete_is_scoped_confirmed_and_audited() {
    let env = TestEnv::new();
    env.init();
    env.submit(&full_form_json("E1", "ops"), "2025-01-20");

    env.cmd()
        .args(["delete", "--employee", "E1", "--period-start", "2025-01-20", "--yes", "--as", "E2"])
        .assert()
        .failure()
        .stderr(contains("Access denied"));

    env.cmd()
        .args(["delete", "--employee", "E1", "--period-start", "2025-01-20", "--role", "admin", "--as", "root"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));

    env.cmd()
        .args(["list", "--role", "admin", "--as", "root"])
        .assert()
        .success()
        .stdout(contains("E1"));

    env.cmd()
        .args(["delete", "--employee", "E1", "--period-start", "2025-01-20", "--role", "admin", "--as", "root"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    env.cmd()
        .args(["list", "--role", "admin", "--as", "root"])
        .assert()
        .success()
        .stdout(contains("E1").not());

    env.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("delete").and(contains("E1@2025-01-14")));
}
