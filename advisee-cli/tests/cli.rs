mod common;

use common::TestEnv;
use predicates::str::contains;

#[test]
fn version() {
    TestEnv::new()
        .cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(contains("advisee "));
}

#[test]
fn majors_lists_reference_plans() {
    TestEnv::new()
        .cmd()
        .arg("majors")
        .assert()
        .success()
        .stdout(contains("BIOL - BSc Biology Major"))
        .stdout(contains("BIOC - BSc Biochemistry Major"));
}

#[test]
fn select_unknown_major_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["select", "CHEM"])
        .assert()
        .failure()
        .stderr(contains("Major not found: CHEM"));
    assert!(!env.session.exists());
}

#[test]
fn summary_requires_selected_major() {
    TestEnv::new()
        .cmd()
        .arg("summary")
        .assert()
        .failure()
        .stderr(contains("No major selected"));
}

#[test]
fn select_persists_to_session_file() {
    let env = TestEnv::new();
    env.run(&["select", "biol"]);
    assert!(env.session.exists());

    let majors = env.run_json(&["majors"]);
    assert_eq!(majors["ok"], true);
    assert_eq!(majors["data"][0]["key"], "BIOL");
    assert_eq!(majors["data"][0]["selected"], true);
    assert_eq!(majors["data"][1]["selected"], false);
}

#[test]
fn plan_shows_checklist() {
    let env = TestEnv::new();
    env.cmd()
        .args(["plan", "BIOC"])
        .assert()
        .success()
        .stdout(contains("BSc Biochemistry Major Requirements"))
        .stdout(contains("Level 1 Courses (Required: 24 credits)"))
        .stdout(contains("Diversity of Life I"))
        .stdout(contains("ELEC1XXX"));

    let rows = env.run_json(&["plan", "BIOL"]);
    assert_eq!(rows["data"].as_array().unwrap().len(), 30);
}

#[test]
fn level_one_half_complete() {
    let env = TestEnv::new();
    env.run(&["select", "BIOL"]);
    for (slot, grade) in [("1", "A"), ("2", "B+"), ("3", "B"), ("4", "A-")] {
        env.run(&["set", "Level 1 Courses", slot, "--grade", grade, "--status", "completed"]);
    }

    let summary = env.run_json(&["summary"]);
    let section = &summary["data"]["sections"][0];
    assert_eq!(section["name"], "Level 1 Courses");
    assert_eq!(section["earned_credits"], 12);
    assert!((section["quality_points"].as_f64().unwrap() - 42.0).abs() < 1e-9);
    assert!((section["gpa"].as_f64().unwrap() - 3.5).abs() < 1e-9);
    assert!((section["percent_complete"].as_f64().unwrap() - 50.0).abs() < 1e-9);
    assert_eq!(summary["data"]["overall"]["remaining_credits"], 78);
    assert_eq!(summary["data"]["overall"]["band"], "in-progress");
    assert_eq!(
        summary["data"]["overall"]["advisory_message"],
        "Keep going! 78 credits remaining."
    );

    env.cmd()
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Credits:     12/24 (50.0% complete)"))
        .stdout(contains("Section GPA: 3.50"))
        .stdout(contains("Keep going! 78 credits remaining."));
}

#[test]
fn in_progress_and_ungraded_do_not_count() {
    let env = TestEnv::new();
    env.run(&["select", "BIOL"]);
    env.run(&["set", "1", "1", "--grade", "A", "--status", "completed"]);
    env.run(&["set", "1", "2", "--grade", "B", "--status", "in-progress"]);
    env.run(&["set", "1", "3", "--status", "completed"]);

    let summary = env.run_json(&["summary"]);
    let section = &summary["data"]["sections"][0];
    assert_eq!(section["earned_credits"], 3);
    assert!((section["gpa"].as_f64().unwrap() - 4.0).abs() < 1e-9);
}

#[test]
fn set_open_slot_code() {
    let env = TestEnv::new();
    env.run(&["select", "BIOL"]);
    env.cmd()
        .args(["set", "Level 1 Courses", "5", "--code", "chem1010", "--credits", "4"])
        .assert()
        .success()
        .stdout(contains("CHEM1010 (4 credits"));

    env.cmd()
        .args(["plan"])
        .assert()
        .success()
        .stdout(contains("CHEM1010"))
        .stdout(contains("Custom Course"));
}

#[test]
fn set_rejects_code_on_fixed_slot() {
    let env = TestEnv::new();
    env.run(&["select", "BIOL"]);
    env.cmd()
        .args(["set", "1", "1", "--code", "CHEM1010"])
        .assert()
        .failure()
        .stderr(contains("can't be changed"));
}

#[test]
fn set_rejects_too_many_credits() {
    let env = TestEnv::new();
    env.run(&["select", "BIOL"]);
    env.cmd()
        .args(["set", "1", "1", "--credits", "7"])
        .assert()
        .failure()
        .stderr(contains("Invalid credits: 7"));

    env.cmd()
        .env("ADVISEE_MAX_CREDITS", "4")
        .args(["set", "1", "1", "--credits", "5"])
        .assert()
        .failure()
        .stderr(contains("Invalid credits: 5"));
    env.cmd()
        .env("ADVISEE_MAX_CREDITS", "4")
        .args(["set", "1", "1", "--credits", "4"])
        .assert()
        .success();
}

#[test]
fn credit_limit_above_ceiling_is_rejected() {
    let env = TestEnv::new();
    env.cmd()
        .env("ADVISEE_MAX_CREDITS", "4294967295")
        .arg("majors")
        .assert()
        .failure()
        .stderr(contains("max_credits 4294967295 is above the limit of 6"));
}

#[test]
fn version_ignores_bad_config() {
    TestEnv::new()
        .cmd()
        .env("ADVISEE_ENTRY_SCOPE", "global")
        .arg("version")
        .assert()
        .success()
        .stdout(contains("advisee "));
}

#[test]
fn set_rejects_unknown_grade_and_slot() {
    let env = TestEnv::new();
    env.run(&["select", "BIOL"]);
    env.cmd()
        .args(["set", "1", "1", "--grade", "E"])
        .assert()
        .failure()
        .stderr(contains("Unknown grade"));
    env.cmd()
        .args(["set", "1", "9", "--status", "completed"])
        .assert()
        .failure()
        .stderr(contains("out of range"));
    env.cmd()
        .args(["set", "1", "0", "--status", "completed"])
        .assert()
        .failure();
}

#[test]
fn shared_scope_carries_entries_between_majors() {
    let env = TestEnv::new();
    env.run(&["select", "BIOL"]);
    env.run(&["set", "1", "1", "--grade", "A", "--status", "completed"]);
    env.run(&["select", "BIOC"]);

    let summary = env.run_json(&["summary"]);
    assert_eq!(summary["data"]["sections"][0]["earned_credits"], 3);

    let isolated = env.run_json(&["--entry-scope", "per-major", "summary"]);
    assert_eq!(isolated["data"]["sections"][0]["earned_credits"], 0);
}

#[test]
fn student_details_and_declaration() {
    let env = TestEnv::new();
    env.run(&["select", "BIOC"]);
    env.run(&[
        "student",
        "--first-name",
        "Ada",
        "--surname",
        "Lovelace",
        "--student-id",
        "816000001",
        "--email",
        "ada@example.edu",
        "--semester",
        "winter",
        "--graduation-term",
        "Spring 2027",
    ]);

    let info = env.run_json(&["student"]);
    assert_eq!(info["data"]["first_name"], "Ada");
    assert_eq!(info["data"]["semester"], "Winter");

    env.cmd()
        .arg("declare")
        .assert()
        .success()
        .stdout(contains("DECLARATION OF MAJOR FORM"))
        .stdout(contains("Name: Ada Lovelace"))
        .stdout(contains("Semester: Winter"))
        .stdout(contains("Declaring Major in: BSc Biochemistry Major"))
        .stdout(contains("Generated by AdviseeMatrix on"));

    env.cmd()
        .args(["declare", "--html"])
        .assert()
        .success()
        .stdout(contains("<strong>Student ID:</strong> 816000001"));
}

#[test]
fn declare_to_file() {
    let env = TestEnv::new();
    env.run(&["select", "BIOL"]);
    let out = env.home.join("declaration.html");
    env.cmd()
        .args(["declare", "--format", "html", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stderr(contains("Warning: student details missing"));

    let doc = std::fs::read_to_string(&out).unwrap();
    assert!(doc.contains("BSc Biology Major"));
}

#[test]
fn declare_requires_major() {
    TestEnv::new()
        .cmd()
        .arg("declare")
        .assert()
        .failure()
        .stderr(contains("No major selected"));
}

#[test]
fn reset_clears_entries_then_selection() {
    let env = TestEnv::new();
    env.run(&["select", "BIOL"]);
    env.run(&["set", "1", "1", "--grade", "A", "--status", "completed"]);

    env.cmd()
        .arg("reset")
        .assert()
        .success()
        .stdout(contains("Cleared 1 course entry."));

    let summary = env.run_json(&["summary"]);
    assert_eq!(summary["data"]["overall"]["earned_credits"], 0);

    env.run(&["student", "--first-name", "Ada"]);
    env.cmd()
        .args(["reset", "--all"])
        .assert()
        .success()
        .stdout(contains("Major selection and student details cleared."));
    assert!(env.session.exists());

    env.cmd()
        .arg("summary")
        .assert()
        .failure()
        .stderr(contains("No major selected"));
    let info = env.run_json(&["student"]);
    assert_eq!(info["data"]["first_name"], "");

    env.cmd()
        .args(["reset", "--purge"])
        .assert()
        .success()
        .stdout(contains("Session file removed"));
    assert!(!env.session.exists());
}

#[test]
fn config_shows_session_path() {
    let env = TestEnv::new();
    env.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(contains("max_credits: 6"))
        .stdout(contains("entry_scope: shared"))
        .stdout(contains(env.session.display().to_string()));
}
