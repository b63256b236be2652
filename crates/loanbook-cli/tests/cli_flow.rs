use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use loanbook_core::storage::decode_workbook;
use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_loanbook"))
}

/// A scratch directory holding the ledger and an isolated config home.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(dir.path().join("config")).expect("create config dir");
        Self { dir }
    }

    fn ledger(&self) -> PathBuf {
        self.dir.path().join("library_usage.xlsx")
    }

    fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.current_dir(self.dir.path())
            .env("LOANBOOK_PATH", self.ledger())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("HOME", self.dir.path())
            .env_remove("LOANBOOK_CONFIG")
            .env_remove("LOANBOOK_LOG")
            .env("NO_COLOR", "1")
            .stdin(Stdio::null());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().expect("run loanbook")
    }

    fn add(&self, student: &str, book: &str, borrowed: &str, returned: &str) -> Output {
        self.run(&[
            "add",
            "--student",
            student,
            "--book",
            book,
            "--borrowed",
            borrowed,
            "--returned",
            returned,
            "--no-input",
        ])
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed: stdout={} stderr={}",
        stdout(output),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn read_ledger(path: &Path) -> loanbook_core::Ledger {
    let bytes = std::fs::read(path).expect("read ledger");
    decode_workbook(&bytes).expect("decode ledger")
}

#[test]
fn test_add_then_list_plain() {
    let sandbox = Sandbox::new();
    assert_success(&sandbox.add("Alice", "Moby Dick", "2024-01-01", "2024-01-10"));
    assert_success(&sandbox.add("Bob", "Dune", "2024-01-02", "2024-01-05"));

    let output = sandbox.run(&["list", "--format", "plain"]);
    assert_success(&output);
    let text = stdout(&output);
    assert!(text.contains("Alice\tMoby Dick\t2024-01-01\t2024-01-10"));
    assert!(text.contains("Bob\tDune\t2024-01-02\t2024-01-05"));

    let ledger = read_ledger(&sandbox.ledger());
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.records()[0].student_name, "Alice");
}

#[test]
fn test_list_json_limit_keeps_latest_rows() {
    let sandbox = Sandbox::new();
    assert_success(&sandbox.add("Alice", "Moby Dick", "2024-01-01", "2024-01-10"));
    assert_success(&sandbox.add("Bob", "Dune", "2024-01-02", "2024-01-05"));

    let output = sandbox.run(&["list", "--json", "--limit", "1"]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    let rows = value.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["row"], 2);
    assert_eq!(rows[0]["student_name"], "Bob");
    assert_eq!(rows[0]["date_borrowed"], "2024-01-02");
}

#[test]
fn test_add_missing_book_is_rejected() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["add", "--student", "Alice", "--no-input"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Please enter all fields!"));
    assert!(!sandbox.ledger().exists());
}

#[test]
fn test_add_bad_date_is_rejected() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&[
        "add",
        "--student",
        "Alice",
        "--book",
        "Dune",
        "--borrowed",
        "yesterday-ish",
        "--no-input",
    ]);
    assert_eq!(output.status.code(), Some(4));
    assert!(!sandbox.ledger().exists());
}

#[test]
fn test_stats_json_shape() {
    let sandbox = Sandbox::new();
    assert_success(&sandbox.add("Alice", "Moby Dick", "2024-01-01", "2024-01-10"));
    assert_success(&sandbox.add("Bob", "Moby Dick", "2024-01-02", "2024-01-05"));
    assert_success(&sandbox.add("Alice", "Dune", "2024-01-02", "2024-01-04"));

    let output = sandbox.run(&["stats", "--json"]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");

    assert_eq!(value["most_borrowed"]["title"], "Most Borrowed Books");
    assert_eq!(value["most_borrowed"]["data"][0]["name"], "Moby Dick");
    assert_eq!(value["most_borrowed"]["data"][0]["count"], 2);

    assert_eq!(value["borrow_trend"]["title"], "Borrowing Trend Over Time");
    assert_eq!(value["borrow_trend"]["data"][0]["date"], "2024-01-01");
    assert_eq!(value["borrow_trend"]["data"][1]["count"], 2);

    assert_eq!(value["top_students"]["title"], "Top Library Users");
    assert_eq!(value["top_students"]["data"][0]["name"], "Alice");
}

#[test]
fn test_stats_on_missing_ledger() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["stats", "--format", "plain"]);
    assert_success(&output);
    let text = stdout(&output);
    assert!(text.contains("# Most Borrowed Books"));
    assert!(text.contains("# Top Library Users"));
    assert!(!sandbox.ledger().exists());
}

#[test]
fn test_export_writes_readable_workbook() {
    let sandbox = Sandbox::new();
    assert_success(&sandbox.add("Alice", "Moby Dick", "2024-01-01", "2024-01-10"));

    let output = sandbox.run(&["export"]);
    assert_success(&output);

    let exported = read_ledger(&sandbox.path("updated_library_usage.xlsx"));
    assert_eq!(exported, read_ledger(&sandbox.ledger()));

    let again = sandbox.run(&["export"]);
    assert_eq!(again.status.code(), Some(1));

    assert_success(&sandbox.run(&["export", "--force"]));
}

#[test]
fn test_export_over_the_ledger_is_refused() {
    let sandbox = Sandbox::new();
    assert_success(&sandbox.add("Alice", "Moby Dick", "2024-01-01", "2024-01-10"));
    let before = std::fs::read(sandbox.ledger()).expect("read ledger bytes");

    let output = sandbox.run(&["export", "--output", "library_usage.xlsx", "--force"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ledger file itself"));
    assert_eq!(std::fs::read(sandbox.ledger()).expect("read ledger bytes"), before);
}

#[test]
fn test_export_json_describes_file() {
    let sandbox = Sandbox::new();
    assert_success(&sandbox.add("Alice", "Moby Dick", "2024-01-01", "2024-01-10"));

    let output = sandbox.run(&["export", "--output", "copy.xlsx", "--json"]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(value["path"], "copy.xlsx");
    assert_eq!(value["file_name"], "updated_library_usage.xlsx");
    assert_eq!(
        value["mime_type"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(sandbox.path("copy.xlsx").exists());
}

#[test]
fn test_export_to_stdout_streams_bytes() {
    let sandbox = Sandbox::new();
    assert_success(&sandbox.add("Alice", "Moby Dick", "2024-01-01", "2024-01-10"));

    let output = sandbox.run(&["export", "--output", "-"]);
    assert_success(&output);
    assert!(output.stdout.starts_with(b"PK"));
    assert_eq!(decode_workbook(&output.stdout).expect("decode").len(), 1);
}

#[test]
fn test_corrupt_ledger_is_a_storage_error() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.ledger(), b"not a spreadsheet").expect("write garbage");

    let output = sandbox.run(&["list"]);
    assert_eq!(output.status.code(), Some(5));

    let add = sandbox.add("Alice", "Dune", "2024-01-01", "2024-01-01");
    assert_eq!(add.status.code(), Some(5));
    assert_eq!(
        std::fs::read(sandbox.ledger()).expect("read"),
        b"not a spreadsheet"
    );
}

#[test]
fn test_init_writes_config_and_empty_ledger() {
    let sandbox = Sandbox::new();
    let target = sandbox.path("books.xlsx");
    let output = sandbox
        .command()
        .env_remove("LOANBOOK_PATH")
        .args(["init", target.to_str().expect("utf8 path")])
        .output()
        .expect("run init");
    assert_success(&output);

    let config_path = sandbox.config_home().join("loanbook").join("config.toml");
    let config = std::fs::read_to_string(&config_path).expect("read config");
    assert!(config.contains("books.xlsx"));
    assert!(read_ledger(&target).is_empty());

    // The config now points every command at the new ledger.
    let add = sandbox
        .command()
        .env_remove("LOANBOOK_PATH")
        .args(["add", "-s", "Alice", "-b", "Dune", "--no-input"])
        .output()
        .expect("run add");
    assert_success(&add);
    assert_eq!(read_ledger(&target).len(), 1);

    let again = sandbox
        .command()
        .env_remove("LOANBOOK_PATH")
        .args(["init", target.to_str().expect("utf8 path")])
        .output()
        .expect("run init again");
    assert_eq!(again.status.code(), Some(1));
}
