use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, ltc, setup_test_db};

#[test]
fn test_init_creates_state_db() {
    let db_path = setup_test_db("init");

    ltc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_start_records_and_prints_leave_time() {
    let db_path = setup_test_db("start_explicit");
    init_db(&db_path);

    // 09:00 + 8h work + 60m break → 18:00, three hours ahead of 15:00.
    ltc()
        .args([
            "--db", &db_path, "--test", "--now", "15:00", "--lang", "en", "start", "09:00",
        ])
        .assert()
        .success()
        .stdout(contains("18:00"))
        .stdout(contains("3h 0m left"));
}

#[test]
fn test_start_rejects_malformed_time() {
    let db_path = setup_test_db("start_bad_time");
    init_db(&db_path);

    for bad in ["25:00", "9:5", "nonsense"] {
        ltc()
            .args(["--db", &db_path, "--test", "start", bad])
            .assert()
            .failure()
            .stderr(contains("Invalid time format"));
    }
}

#[test]
fn test_status_without_start_prints_hint() {
    let db_path = setup_test_db("status_no_start");
    init_db(&db_path);

    ltc()
        .args(["--db", &db_path, "--test", "--lang", "en", "status"])
        .assert()
        .success()
        .stdout(contains("Set your start time"));
}

#[test]
fn test_status_short_is_one_line_summary() {
    let db_path = setup_test_db("status_short");
    init_db(&db_path);

    ltc()
        .args([
            "--db", &db_path, "--test", "--now", "15:00", "start", "09:00",
        ])
        .assert()
        .success();

    ltc()
        .args([
            "--db", &db_path, "--test", "--now", "15:00", "--lang", "en", "status", "--short",
        ])
        .assert()
        .success()
        .stdout(contains("18:00 leave - 3h 0m left"));
}

#[test]
fn test_status_reports_overtime_after_leave() {
    let db_path = setup_test_db("status_overtime");
    init_db(&db_path);

    ltc()
        .args([
            "--db", &db_path, "--test", "--now", "15:00", "start", "09:00",
        ])
        .assert()
        .success();

    ltc()
        .args([
            "--db", &db_path, "--test", "--now", "19:00", "--lang", "en", "status", "--short",
        ])
        .assert()
        .success()
        .stdout(contains("1h 0m overtime"));
}

#[test]
fn test_status_overnight_shift_counts_to_tomorrow() {
    let db_path = setup_test_db("status_overnight");
    init_db(&db_path);

    // 19:00 + 8h + 60m wraps to 04:00; at 20:00 there are 8h left, not -16h.
    ltc()
        .args([
            "--db", &db_path, "--test", "--now", "20:00", "start", "19:00",
        ])
        .assert()
        .success();

    ltc()
        .args([
            "--db", &db_path, "--test", "--now", "20:00", "--lang", "en", "status", "--short",
        ])
        .assert()
        .success()
        .stdout(contains("04:00 leave - 8h 0m left"));
}

#[test]
fn test_status_json_shape() {
    let db_path = setup_test_db("status_json");
    init_db(&db_path);

    ltc()
        .args([
            "--db", &db_path, "--test", "--now", "15:00", "start", "09:00",
        ])
        .assert()
        .success();

    let output = ltc()
        .args([
            "--db", &db_path, "--test", "--now", "15:00", "status", "--json",
        ])
        .output()
        .expect("run status --json");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json_start = stdout.find('{').expect("json object in output");
    let v: serde_json::Value = serde_json::from_str(stdout[json_start..].trim()).expect("valid json");

    assert_eq!(v["leave_time"], "18:00");
    assert_eq!(v["remaining"]["hours"], 3);
    assert_eq!(v["remaining"]["minutes"], 0);
    assert_eq!(v["remaining"]["is_past"], false);
}

#[test]
fn test_status_japanese_output() {
    let db_path = setup_test_db("status_ja");
    init_db(&db_path);

    ltc()
        .args([
            "--db", &db_path, "--test", "--now", "15:00", "start", "09:00",
        ])
        .assert()
        .success();

    ltc()
        .args([
            "--db", &db_path, "--test", "--now", "15:00", "--lang", "ja", "status",
        ])
        .assert()
        .success()
        .stdout(contains("退勤").and(contains("あと 3時間0分")));
}

#[test]
fn test_unknown_language_tag_is_rejected() {
    let db_path = setup_test_db("bad_lang");
    init_db(&db_path);

    ltc()
        .args(["--db", &db_path, "--test", "--lang", "klingon", "status"])
        .assert()
        .failure()
        .stderr(contains("Invalid language code"));
}

#[test]
fn test_list_shows_all_candidates() {
    let db_path = setup_test_db("list");
    init_db(&db_path);

    ltc()
        .args(["--db", &db_path, "--test", "--lang", "en", "list"])
        .assert()
        .success()
        .stdout(contains("07:00"))
        .stdout(contains("13:45"))
        .stdout(contains("16:00"))
        .stdout(contains("22:45"));
}

#[test]
fn test_list_marks_recorded_start() {
    let db_path = setup_test_db("list_marked");
    init_db(&db_path);

    ltc()
        .args([
            "--db", &db_path, "--test", "--now", "09:35", "start", "09:30",
        ])
        .assert()
        .success();

    let output = ltc()
        .args(["--db", &db_path, "--test", "--now", "09:35", "--lang", "en", "list"])
        .output()
        .expect("run list");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let marked: Vec<&str> = stdout.lines().filter(|l| l.contains('▶')).collect();
    assert_eq!(marked.len(), 1);
    assert!(marked[0].contains("09:30"));
}

#[test]
fn test_list_json_has_28_rows() {
    let db_path = setup_test_db("list_json");
    init_db(&db_path);

    let output = ltc()
        .args(["--db", &db_path, "--test", "list", "--json"])
        .output()
        .expect("run list --json");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json_start = stdout.find('[').expect("json array in output");
    let v: serde_json::Value = serde_json::from_str(stdout[json_start..].trim()).expect("valid json");

    let rows = v.as_array().expect("array");
    assert_eq!(rows.len(), 28);
    assert_eq!(rows[0]["start_time"], "07:00");
    assert_eq!(rows[0]["leave_time"], "16:00");
    assert_eq!(rows[27]["start_time"], "13:45");
}

#[test]
fn test_reset_clears_todays_start() {
    let db_path = setup_test_db("reset");
    init_db(&db_path);

    ltc()
        .args([
            "--db", &db_path, "--test", "--now", "10:00", "start", "09:00",
        ])
        .assert()
        .success();

    ltc()
        .args(["--db", &db_path, "--test", "--lang", "en", "reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("Start time cleared"));

    ltc()
        .args(["--db", &db_path, "--test", "--lang", "en", "status"])
        .assert()
        .success()
        .stdout(contains("Set your start time"));
}

#[test]
fn test_reset_asks_for_confirmation() {
    let db_path = setup_test_db("reset_confirm");
    init_db(&db_path);

    ltc()
        .args([
            "--db", &db_path, "--test", "--now", "10:00", "start", "09:00",
        ])
        .assert()
        .success();

    // Answering "n" leaves the recorded start in place.
    ltc()
        .args(["--db", &db_path, "--test", "--lang", "en", "reset"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Aborted"));

    ltc()
        .args([
            "--db", &db_path, "--test", "--now", "10:00", "--lang", "en", "status", "--short",
        ])
        .assert()
        .success()
        .stdout(contains("18:00 leave"));

    // Answering "y" goes through.
    ltc()
        .args(["--db", &db_path, "--test", "--lang", "en", "reset"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Start time cleared"));
}

#[test]
fn test_watch_single_tick() {
    let db_path = setup_test_db("watch");
    init_db(&db_path);

    ltc()
        .args([
            "--db", &db_path, "--test", "--now", "15:00", "start", "09:00",
        ])
        .assert()
        .success();

    ltc()
        .args([
            "--db", &db_path, "--test", "--now", "15:00", "--lang", "en", "watch",
            "--interval", "1", "--ticks", "1",
        ])
        .assert()
        .success()
        .stdout(contains("18:00 leave - 3h 0m left"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("oplog");
    init_db(&db_path);

    ltc()
        .args([
            "--db", &db_path, "--test", "--now", "10:00", "start", "09:00",
        ])
        .assert()
        .success();

    ltc()
        .args(["--db", &db_path, "--test", "reset", "--yes"])
        .assert()
        .success();

    ltc()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("start"))
        .stdout(contains("reset"));
}

#[test]
fn test_config_print_shows_defaults() {
    let db_path = setup_test_db("config_print");

    ltc()
        .args(["--db", &db_path, "--test", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_work_hours"))
        .stdout(contains("default_break_minutes"));
}
