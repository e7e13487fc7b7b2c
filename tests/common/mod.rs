use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const WHATSAPP_EXPORT: &str = "\
17/01/2018, 19:15 - Firstname 1: This is my first message to person Two
17/01/2018, 19:16 - Firstname 1: This is another message, in a different minute!
17/01/2018, 19:21 - Firstname Surname 2: This is the second person's reply...
This is the second person's second reply
17/01/2018, 19:22 - Firstname 1: Reply? Reply!
";

pub const CSV_EXPORT: &str = "\
message,time,author
\"Are we still on for lunch?\",2021-03-04 12:00:01,Alice
\"Yes, lunch at noon!\",2021-03-04 12:00:30,Bob
\"Great. See you at lunch.\",2021-03-04 12:01:10,Alice
";

pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("config")).expect("Failed to create config dir");
        fs::write(temp_dir.path().join("heart.png"), b"not really a png")
            .expect("Failed to write mask");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write input");
        path
    }

    pub fn output_dir(&self) -> PathBuf {
        self.path().join("out")
    }

    /// Read a rendered JSON document from the output directory
    pub fn read_output(&self, file_name: &str) -> serde_json::Value {
        let content = fs::read_to_string(self.output_dir().join(file_name))
            .unwrap_or_else(|e| panic!("Missing output {}: {}", file_name, e));
        serde_json::from_str(&content).expect("Output is not JSON")
    }

    /// Run the wcg binary with an isolated config directory
    pub fn run_wcg(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_wcg"))
            .args(args)
            .current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.path().join("config"))
            .env("HOME", self.path())
            .output()
            .expect("Failed to run wcg")
    }
}
