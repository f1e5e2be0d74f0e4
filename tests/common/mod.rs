//! Common test utilities for doxy CLI tests.
//!
//! `TestEnv` owns a temp root directory of services, an isolated HOME, and
//! a fake compose executable that appends its argv to a log file instead of
//! talking to docker.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running a doxy CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

pub struct TestEnv {
    /// Root directory holding the services
    pub root: TempDir,
    /// Isolated HOME / XDG_CONFIG_HOME
    pub home: TempDir,
    /// Holds the fake compose script and its log
    tools: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self {
            root: TempDir::new().unwrap(),
            home: TempDir::new().unwrap(),
            tools: TempDir::new().unwrap(),
        };
        env.write_fake_compose();
        env
    }

    /// Create `<root>/<name>/<descriptor>` with a two-service compose file.
    pub fn service(&self, name: &str, descriptor: &str) -> PathBuf {
        self.service_with(name, descriptor, "services:\n  app:\n    image: nginx\n  db:\n    image: postgres\n")
    }

    pub fn service_with(&self, name: &str, descriptor: &str, content: &str) -> PathBuf {
        let dir = self.root.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(descriptor);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn root_path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Value for `compose_executable`: `sh <script> compose`.
    ///
    /// Running through `sh` avoids exec'ing a file that was just written,
    /// which can fail with ETXTBSY while other tests fork.
    pub fn compose_executable(&self) -> String {
        format!("sh {} compose", self.script_path().display())
    }

    /// Every invocation of the fake compose, one argv per line.
    pub fn compose_calls(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Expected log line for `<name>/<descriptor>` and `args`.
    pub fn call(&self, name: &str, descriptor: &str, args: &str) -> String {
        format!(
            "compose -f {} {}",
            self.root.path().join(name).join(descriptor).display(),
            args
        )
    }

    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.home.path().join(".config/doxy/config.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_doxy"));
        cmd.current_dir(self.root.path())
            .args(args)
            .stdin(Stdio::null())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("DOXY_ROOT_DIRECTORY", self.root.path())
            .env("DOXY_COMPOSE_EXECUTABLE", self.compose_executable())
            .env("NO_COLOR", "1")
            .env("LC_ALL", "C")
            .env_remove("DOXY_CONFIG")
            .env_remove("DOXY_FORMAT")
            .env_remove("DOXY_LOG")
            .env_remove("FAKE_COMPOSE_FAIL");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        TestResult::from_output(cmd.output().unwrap())
    }

    fn script_path(&self) -> PathBuf {
        self.tools.path().join("fake-compose")
    }

    fn log_path(&self) -> PathBuf {
        self.tools.path().join("calls.log")
    }

    /// Exits 3 when its argv contains `$FAKE_COMPOSE_FAIL`.
    fn write_fake_compose(&self) {
        let script = format!(
            "#!/bin/sh\n\
             echo \"$*\" >> '{log}'\n\
             if [ -n \"$FAKE_COMPOSE_FAIL\" ]; then\n\
             \x20 case \"$*\" in\n\
             \x20   *\"$FAKE_COMPOSE_FAIL\"*) exit 3 ;;\n\
             \x20 esac\n\
             fi\n\
             exit 0\n",
            log = self.log_path().display()
        );
        fs::write(self.script_path(), script).unwrap();
    }
}
