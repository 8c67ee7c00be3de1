//! Executor for the per-directory cleanup command.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, ExitStatus};

/// An action run once for every directory handed to the dispatcher.
///
/// Implementations must absorb their own failures: the dispatcher neither
/// inspects nor reports what happened in a directory.
pub trait Cleanup: Send + Sync {
    /// Clean a single directory.
    fn clean(&self, dir: &Path);
}

/// External program plus arguments run inside each directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl CleanupCommand {
    /// Build a command from a program name and its arguments.
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `cargo clean`
    pub fn cargo_clean() -> Self {
        Self::new("cargo", ["clean"])
    }
}

impl fmt::Display for CleanupCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs a [`CleanupCommand`] with each directory as the child's working
/// directory. The parent process never changes its own working directory.
pub struct CleanExecutor {
    command: CleanupCommand,
}

impl CleanExecutor {
    /// Create a new executor for the given command.
    pub fn new(command: CleanupCommand) -> Self {
        Self { command }
    }

    /// The command this executor runs.
    pub fn command(&self) -> &CleanupCommand {
        &self.command
    }

    /// Spawn the command in `dir` and wait for it. Output is inherited.
    pub fn run_command(&self, dir: &Path) -> io::Result<ExitStatus> {
        Command::new(&self.command.program)
            .args(&self.command.args)
            .current_dir(dir)
            .status()
    }
}

impl Cleanup for CleanExecutor {
    fn clean(&self, dir: &Path) {
        // A closed stdout must not take the worker down
        let _ = writeln!(io::stdout().lock(), "{}", dir.display());

        match self.run_command(dir) {
            Ok(status) if status.success() => {
                tracing::debug!(dir = %dir.display(), "Cleanup command finished");
            }
            Ok(status) => {
                tracing::debug!(dir = %dir.display(), %status, "Cleanup command failed");
            }
            Err(e) => {
                tracing::debug!(
                    dir = %dir.display(),
                    error = %e,
                    "Cleanup command could not be started"
                );
            }
        }
    }
}
