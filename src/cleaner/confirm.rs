//! Interactive confirmation before anything is cleaned.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::cleaner::CleanupCommand;
use crate::error::{Result, SweepError};

/// Prompt shown after the announcement line.
pub const PROMPT: &str = "Press Enter to continue (or interrupt to abort) ";

/// Announce the run on `output` and block until a line arrives on `input`.
///
/// Any line, empty included, confirms. End of input aborts with
/// [`SweepError::Aborted`]. Ctrl-C while blocked terminates the process through
/// the default SIGINT disposition, so nothing has been dispatched either way.
pub fn confirm<R, W>(
    root: &Path,
    command: &CleanupCommand,
    input: &mut R,
    output: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "will run `{}` in all dirs in `{}`",
        command,
        root.display()
    )
    .map_err(SweepError::Prompt)?;
    write!(output, "{}", PROMPT).map_err(SweepError::Prompt)?;
    output.flush().map_err(SweepError::Prompt)?;

    // Raw bytes: any line confirms, whatever its encoding
    let mut line = Vec::new();
    let read = input
        .read_until(b'\n', &mut line)
        .map_err(SweepError::Prompt)?;

    if read == 0 {
        // Keep the shell prompt off our line
        let _ = writeln!(output);
        return Err(SweepError::Aborted);
    }

    tracing::debug!("Confirmed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Result<()>, String) {
        run_bytes(input.as_bytes())
    }

    fn run_bytes(input: &[u8]) -> (Result<()>, String) {
        let mut input = Cursor::new(input.to_vec());
        let mut output = Vec::new();
        let result = confirm(
            Path::new("/tmp/projects"),
            &CleanupCommand::cargo_clean(),
            &mut input,
            &mut output,
        );
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_enter_confirms() {
        let (result, output) = run("\n");
        assert!(result.is_ok());
        assert!(output.starts_with("will run `cargo clean` in all dirs in `/tmp/projects`"));
        assert!(output.ends_with(PROMPT));
    }

    #[test]
    fn test_any_text_confirms() {
        let (result, _) = run("no\n");
        assert!(result.is_ok());
    }

    #[test]
    fn test_unterminated_line_confirms() {
        let (result, _) = run("y");
        assert!(result.is_ok());
    }

    #[test]
    fn test_non_utf8_line_confirms() {
        let (result, _) = run_bytes(&[0xff, 0xfe, b'\n']);
        assert!(result.is_ok());
    }

    #[test]
    fn test_read_failure_is_a_prompt_error() {
        struct Broken;

        impl std::io::Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
            }
        }

        let mut input = std::io::BufReader::new(Broken);
        let mut output = Vec::new();
        let result = confirm(
            Path::new("/tmp/projects"),
            &CleanupCommand::cargo_clean(),
            &mut input,
            &mut output,
        );

        let err = result.unwrap_err();
        assert!(matches!(err, SweepError::Prompt(_)));
        assert!(!err.to_string().contains("/tmp/projects"));
    }

    #[test]
    fn test_eof_aborts() {
        let (result, output) = run("");
        assert!(matches!(result, Err(SweepError::Aborted)));
        assert!(output.contains(PROMPT));
    }
}
