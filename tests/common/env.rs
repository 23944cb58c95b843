//! Test environment builder for isolated scengen testing.
//!
//! Provides `TestEnv` - a temp project laid out like a real site:
//!
//! ```text
//! <project>/scripts/          templates (and the working directory)
//! <project>/public/scenarios  default output (../public/scenarios)
//! ```
//!
//! plus an isolated HOME so no user config leaks into a run.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a scengen CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parsed NDJSON lines from stdout
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON {l:?}: {e}")))
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// The templates directory (`<project>/scripts`)
    pub fn scripts_dir(&self) -> PathBuf {
        self.project_path("scripts")
    }

    /// The default output directory (`<project>/public/scenarios`)
    pub fn output_dir(&self) -> PathBuf {
        self.project_path("public/scenarios")
    }

    /// Run scengen from the scripts directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(&self.scripts_dir(), args)
    }

    /// Run scengen from the scripts directory with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(&self.scripts_dir(), args, env_vars)
    }

    /// Run scengen from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_from_with_env(cwd, args, &[])
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("SCENGEN_NO_COLOR", "1")
            .env_remove("SCENGEN_TEMPLATES_DIR")
            .env_remove("SCENGEN_OUTPUT_DIR")
            .env_remove("SCENGEN_SCENARIO_COUNT");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute scengen");
        output_to_result(output)
    }

    /// Read a generated page relative to the default output directory
    pub fn read_output(&self, file_name: &str) -> String {
        let path = self.output_dir().join(file_name);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read generated file {}: {}", path.display(), e))
    }

    /// Number of files in the default output directory
    pub fn output_count(&self) -> usize {
        std::fs::read_dir(self.output_dir())
            .map(|entries| entries.flatten().count())
            .unwrap_or(0)
    }

    /// Write a file relative to the project root
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Remove a template from the scripts directory
    pub fn remove_template(&self, file_name: &str) {
        let path = self.scripts_dir().join(file_name);
        if path.exists() {
            std::fs::remove_file(&path).expect("Failed to remove template");
        }
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    templates: Vec<(String, String)>,
    project_config: Option<String>,
    home_config: Option<String>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            templates: Vec::new(),
            project_config: None,
            home_config: None,
        }
    }

    /// Add a template file to `scripts/`
    pub fn with_template(mut self, file_name: &str, content: &str) -> Self {
        self.templates
            .push((file_name.to_string(), content.to_string()));
        self
    }

    /// Add the three stock templates (dirty file names, mixed placeholders)
    pub fn with_default_templates(mut self) -> Self {
        for suffix in ["H", "R", "S"] {
            self.templates.push((
                super::fixtures::default_template_name(suffix),
                super::fixtures::mixed_template(suffix),
            ));
        }
        self
    }

    /// Write `scripts/scengen.toml`
    pub fn with_project_config(mut self, toml: &str) -> Self {
        self.project_config = Some(toml.to_string());
        self
    }

    /// Write `~/.config/scengen/config.toml`
    pub fn with_home_config(mut self, toml: &str) -> Self {
        self.home_config = Some(toml.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = tempfile::tempdir().expect("Failed to create project dir");
        let home_dir = tempfile::tempdir().expect("Failed to create home dir");

        let scripts = project_root.path().join("scripts");
        std::fs::create_dir_all(&scripts).expect("Failed to create scripts dir");

        for (name, content) in &self.templates {
            std::fs::write(scripts.join(name), content).expect("Failed to write template");
        }

        if let Some(toml) = &self.project_config {
            std::fs::write(scripts.join("scengen.toml"), toml).expect("Failed to write config");
        }

        if let Some(toml) = &self.home_config {
            let dir = home_dir.path().join(".config").join("scengen");
            std::fs::create_dir_all(&dir).expect("Failed to create home config dir");
            std::fs::write(dir.join("config.toml"), toml).expect("Failed to write home config");
        }

        TestEnv {
            project_root,
            home_dir,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_scengen")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
