//! Clean command implementation.

use crate::cleaner::{self, CleanExecutor, CleanupCommand, Dispatcher};
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Run the clean command against the process's stdin and stdout.
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    let jobs = config.effective_jobs(cli.jobs)?;
    let executor = CleanExecutor::new(CleanupCommand::cargo_clean());

    // Stdout is unlocked again before workers start printing
    let dirs = {
        let mut input = io::stdin().lock();
        let mut output = io::stdout().lock();
        prepare(&cli.path, executor.command(), &mut input, &mut output)?
    };

    Dispatcher::new(jobs).run_all(dirs, &executor)
}

/// List the children of `root`, then ask for confirmation.
///
/// The root is listed before the prompt so a bad root fails without asking.
pub fn prepare<R, W>(
    root: &Path,
    command: &CleanupCommand,
    input: &mut R,
    output: &mut W,
) -> Result<Vec<PathBuf>>
where
    R: BufRead,
    W: Write,
{
    let dirs = cleaner::list_children(root)?;
    cleaner::confirm(root, command, input, output)?;
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::Cleanup;
    use crate::error::SweepError;
    use std::fs;
    use std::io::Cursor;
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<PathBuf>>,
    }

    impl Cleanup for Recorder {
        fn clean(&self, dir: &Path) {
            self.seen.lock().unwrap().push(dir.to_path_buf());
        }
    }

    fn workspace(children: &[&str]) -> TempDir {
        let tmp = TempDir::new().unwrap();
        for child in children {
            fs::create_dir(tmp.path().join(child)).unwrap();
        }
        tmp
    }

    fn run_recorded(root: &Path, input: &str) -> (Result<()>, Vec<PathBuf>, String) {
        let recorder = Recorder::default();
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = prepare(
            root,
            &CleanupCommand::cargo_clean(),
            &mut input,
            &mut output,
        )
        .and_then(|dirs| Dispatcher::new(2).run_all(dirs, &recorder));
        let mut seen = recorder.seen.into_inner().unwrap();
        seen.sort();
        (result, seen, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_confirmed_run_cleans_every_child() {
        let tmp = workspace(&["a", "b", "c"]);
        let root = tmp.path().canonicalize().unwrap();

        let (result, seen, output) = run_recorded(tmp.path(), "\n");

        assert!(result.is_ok());
        assert_eq!(seen, vec![root.join("a"), root.join("b"), root.join("c")]);
        assert!(output.contains("will run `cargo clean`"));
    }

    #[test]
    fn test_abort_cleans_nothing() {
        let tmp = workspace(&["a", "b"]);

        let (result, seen, _) = run_recorded(tmp.path(), "");

        assert!(matches!(result, Err(SweepError::Aborted)));
        assert!(seen.is_empty());
    }

    #[test]
    fn test_empty_root() {
        let tmp = workspace(&[]);

        let (result, seen, output) = run_recorded(tmp.path(), "\n");

        assert!(result.is_ok());
        assert!(seen.is_empty());
        assert!(output.contains(cleaner::confirm::PROMPT));
    }

    #[test]
    fn test_missing_root_fails_before_prompt() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing");

        let (result, seen, output) = run_recorded(&missing, "\n");

        assert!(matches!(result, Err(SweepError::PathNotFound(_))));
        assert!(seen.is_empty());
        assert!(output.is_empty());
    }
}
