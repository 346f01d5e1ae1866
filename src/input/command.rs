use super::{Generation, Generator, GeneratorError};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{info, warn};

/// Environment variable carrying the requested output length to the child.
pub const TARGET_CHARS_ENV: &str = "TARGET_CHARS";

/// Text and timing scraped from a generator's stdout.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedOutput {
    pub text: String,
    pub elapsed: Option<f64>,
    pub diagnostics: Vec<String>,
}

/// Split generator stdout into generated text and trailing diagnostics.
///
/// The text ends at the first line starting with `Generated` (which also
/// carries the timing, e.g. `Generated 1000 chars in 0.0123s`) or with
/// `"  Level"` (per-level statistics). That line and everything after it are
/// diagnostics. The text is trimmed at both ends.
pub fn parse_generation_output(stdout: &str) -> ParsedOutput {
    let mut text_lines = Vec::new();
    let mut diagnostics = Vec::new();
    let mut elapsed = None;
    let mut in_text = true;

    for line in stdout.split('\n') {
        if in_text {
            if line.starts_with("Generated") {
                elapsed = parse_elapsed(line);
                in_text = false;
            } else if line.starts_with("  Level") {
                in_text = false;
            } else {
                text_lines.push(line);
                continue;
            }
        }
        if !line.trim().is_empty() {
            diagnostics.push(line.to_string());
        }
    }

    ParsedOutput {
        text: text_lines.join("\n").trim().to_string(),
        elapsed,
        diagnostics,
    }
}

/// First `in <number>s` on the line, as seconds.
fn parse_elapsed(line: &str) -> Option<f64> {
    for (start, matched) in line.match_indices("in ") {
        let rest = &line[start + matched.len()..];
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if number_len > 0 && rest[number_len..].starts_with('s') {
            return rest[..number_len].parse().ok();
        }
    }
    None
}

/// Runs an external generator and scrapes its output.
///
/// Purpose: collaborator that produces text out of process (e.g. `go run infini-gram.go`).
/// Connections: output goes through `parse_generation_output()`; a missing
/// timing line degrades to `elapsed = 0.0` so the pane reveals on the first tick.
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl CommandGenerator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: None,
        }
    }

    /// Splits a command line on whitespace. No shell quoting is applied.
    pub fn from_command_line(line: &str) -> Result<Self, GeneratorError> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(GeneratorError::EmptyCommand)?;
        Ok(Self::new(program, parts.collect()))
    }

    pub fn current_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Generator for CommandGenerator {
    fn generate(&mut self, target_chars: usize) -> Result<Generation, GeneratorError> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .env(TARGET_CHARS_ENV, target_chars.to_string())
            .stdin(Stdio::null());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        info!(program = %self.program, args = ?self.args, "running generator");
        let output = command.output().map_err(|source| GeneratorError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(GeneratorError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let parsed = parse_generation_output(&stdout);
        let elapsed = parsed.elapsed.unwrap_or_else(|| {
            warn!(program = %self.program, "no timing line in generator output, using 0s");
            0.0
        });

        Ok(Generation {
            text: parsed.text,
            elapsed,
            diagnostics: parsed.diagnostics,
        })
    }
}
