use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn lattice_check(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lattice-check"))
        .args(args)
        .output()
        .expect("failed to execute lattice-check")
}

fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn generate_writes_one_file_per_process() {
    let dir = tempfile::tempdir().unwrap();
    let files: Vec<PathBuf> = (1..=3).map(|i| dir.path().join(format!("{i}.config"))).collect();

    let mut args = vec!["generate", "--p", "3", "--vs", "2", "--ds", "4", "--seed", "11"];
    args.push("--config-files");
    args.extend(files.iter().map(|f| path_str(f)));
    let output = lattice_check(&args);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    for file in &files {
        let text = std::fs::read_to_string(file).unwrap();
        assert!(text.starts_with("3 2 4\n"), "{text}");
        assert_eq!(text.lines().count(), 4);
    }
}

#[test]
fn generate_rejects_zero_parameters() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("1.config");
    let output = lattice_check(&[
        "generate",
        "--p",
        "0",
        "--vs",
        "2",
        "--ds",
        "4",
        "--config-files",
        path_str(&file),
    ]);
    assert!(!output.status.success());
    assert!(!file.exists());
}

#[test]
fn validate_passing_run_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let c1 = write(dir.path(), "c1", "1 1 2\n1\n");
    let c2 = write(dir.path(), "c2", "1 1 2\n2\n");
    let o1 = write(dir.path(), "o1", "1 2\n");
    let o2 = write(dir.path(), "o2", "2 1\n");

    let output = lattice_check(&[
        "validate",
        "--configs",
        path_str(&c1),
        path_str(&c2),
        "--outputs",
        path_str(&o1),
        path_str(&o2),
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn validate_violation_exits_one_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let c1 = write(dir.path(), "c1", "1 2 2\n1 2\n");
    let o1 = write(dir.path(), "o1", "1\n");

    let output = lattice_check(&[
        "validate",
        "--configs",
        path_str(&c1),
        "--outputs",
        path_str(&o1),
    ]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a superset"), "stderr: {stderr}");
}

#[test]
fn validate_mismatched_counts_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let c1 = write(dir.path(), "c1", "1 1 1\n1\n");
    let c2 = write(dir.path(), "c2", "1 1 1\n1\n");
    let o1 = write(dir.path(), "o1", "1\n");

    let output = lattice_check(&[
        "validate",
        "--configs",
        path_str(&c1),
        path_str(&c2),
        "--outputs",
        path_str(&o1),
    ]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn validate_writes_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let c1 = write(dir.path(), "c1", "1 2 4\n1 2\n");
    let c2 = write(dir.path(), "c2", "1 2 4\n3 4\n");
    let o1 = write(dir.path(), "o1", "1 2\n");
    let o2 = write(dir.path(), "o2", "3 4\n");
    let report = dir.path().join("report.json");

    let output = lattice_check(&[
        "validate",
        "--exhaustive",
        "--configs",
        path_str(&c1),
        path_str(&c2),
        "--outputs",
        path_str(&o1),
        path_str(&o2),
        "--json-report",
        path_str(&report),
    ]);
    assert_eq!(output.status.code(), Some(1));
    let json = std::fs::read_to_string(&report).unwrap();
    assert!(json.contains("\"ConsistencyViolated\""), "{json}");
    assert!(json.contains("\"exhaustive\""), "{json}");
}
