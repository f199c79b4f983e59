use assert_cmd::Command;
use assert_cmd::assert::Assert;
use assert_fs::TempDir;
use assert_fs::prelude::PathCopy;
use std::path::PathBuf;

fn setup_working_dir() -> TempDir {
    let file_path = PathBuf::from(format!("{}/tests/test-cases", env!("CARGO_MANIFEST_DIR")));

    let temp = TempDir::new().unwrap();
    temp.copy_from(file_path, &["*.json"]).unwrap();

    temp
}

pub struct DotReporterTestHelper {
    pub work_dir: TempDir,
    width: usize,
}

impl DotReporterTestHelper {
    pub fn new(width: usize) -> Self {
        Self {
            work_dir: setup_working_dir(),
            width,
        }
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("dot-reporter").unwrap();
        cmd.current_dir(self.work_dir.path())
            .env("DOT_REPORTER_WIDTH", self.width.to_string())
            .env_remove("DOT_REPORTER_COLUMNS")
            .env_remove("DOT_REPORTER_SILENT")
            .env("NO_COLOR", "1");
        cmd
    }

    pub fn run_command(&self, args: &[&str]) -> Assert {
        self.command().args(args).assert()
    }

    /// Feed the named test case through stdin instead of as a path.
    pub fn run_stdin(&self, test_case: &str, args: &[&str]) -> Assert {
        let input = std::fs::read_to_string(self.work_dir.path().join(test_case)).unwrap();
        self.command().args(args).write_stdin(input).assert()
    }

    pub fn clean_work_dir(self) {
        self.work_dir.close().unwrap();
    }
}
