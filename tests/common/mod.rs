//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Package version for testing --version flag
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable the fake tools append their invocations to
pub const FAKE_LOG_ENV: &str = "FAKE_TOOL_LOG";

/// Environment variable naming a fake tool that should exit 1
pub const FAKE_FAIL_ENV: &str = "FAKE_TOOL_FAIL";

/// Helper to get the compiled binary path
pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_react-setup"))
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Helper to create a Command isolated from the caller's settings
pub fn test_command(binary: &PathBuf) -> Command {
    let mut cmd = Command::new(binary);
    cmd.env_remove("REACT_SETUP_VARIANT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Stand-ins for npx, npm and git. Each logs `<tool> <args>` to
/// `$FAKE_TOOL_LOG` and exits 1 when `$FAKE_TOOL_FAIL` names it (optionally
/// as `tool:subcommand`). The fake generator refuses a non-empty target like
/// create-react-app does.
const FAKE_NPX: &str = r#"#!/bin/sh
echo "npx $*" >> "$FAKE_TOOL_LOG"
if [ "$FAKE_TOOL_FAIL" = "npx" ] || [ "$FAKE_TOOL_FAIL" = "npx:$1" ]; then exit 1; fi
case "$1" in
  create-react-app)
    if [ -d "$2" ] && [ -n "$(ls -A "$2")" ]; then
      echo "The directory $2 contains files that could conflict" >&2
      exit 1
    fi
    mkdir -p "$2/src" && echo '{}' > "$2/package.json"
    ;;
  tailwindcss)
    echo 'module.exports = {}' > tailwind.config.js
    ;;
esac
"#;

const FAKE_NPM: &str = r#"#!/bin/sh
echo "npm $*" >> "$FAKE_TOOL_LOG"
if [ "$FAKE_TOOL_FAIL" = "npm" ]; then exit 1; fi
"#;

const FAKE_GIT: &str = r#"#!/bin/sh
echo "git $*" >> "$FAKE_TOOL_LOG"
if [ "$FAKE_TOOL_FAIL" = "git" ] || [ "$FAKE_TOOL_FAIL" = "git:$1" ]; then exit 1; fi
if [ "$1" = "init" ]; then mkdir -p .git; fi
"#;

/// A sandbox with a working directory and a `bin/` of fake tools.
pub struct Sandbox {
    pub temp: tempfile::TempDir,
}

impl Sandbox {
    #[cfg(unix)]
    pub fn new() -> Self {
        use std::os::unix::fs::PermissionsExt;

        let temp = create_temp_dir();
        let bin = temp.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::create_dir_all(temp.path().join("work")).unwrap();

        for (name, script) in [("npx", FAKE_NPX), ("npm", FAKE_NPM), ("git", FAKE_GIT)] {
            let path = bin.join(name);
            fs::write(&path, script).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }

        Self { temp }
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.temp.path().join("bin")
    }

    pub fn work_dir(&self) -> PathBuf {
        self.temp.path().join("work")
    }

    pub fn log_path(&self) -> PathBuf {
        self.temp.path().join("tools.log")
    }

    /// Lines logged by the fake tools, empty if none ran.
    pub fn log(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// A command running the binary in `work/` with the fake tools first on PATH.
    pub fn command(&self) -> Command {
        let mut cmd = test_command(&get_binary_path());
        cmd.current_dir(self.work_dir())
            .env("PATH", prepend_path(&self.bin_dir()))
            .env(FAKE_LOG_ENV, self.log_path())
            .env_remove(FAKE_FAIL_ENV);
        cmd
    }
}

fn prepend_path(dir: &Path) -> std::ffi::OsString {
    let mut paths = vec![dir.to_path_buf()];
    if let Some(existing) = std::env::var_os("PATH") {
        paths.extend(std::env::split_paths(&existing));
    }
    std::env::join_paths(paths).unwrap()
}

/// Directory names under `src/` every scaffolded project gets.
pub const SRC_FOLDERS: &[&str] = &[
    "assets",
    "components",
    "context",
    "data",
    "hooks",
    "pages",
    "services",
    "store",
    "styles",
    "utils",
];
