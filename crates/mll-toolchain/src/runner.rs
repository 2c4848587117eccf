//! Process execution with live output forwarding.

use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use std::process::Stdio;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::command::ToolCommand;
use crate::error::{Result, ToolchainError};

/// What a finished toolchain command left behind.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Exit code; `-1` when the process was terminated by a signal.
    pub code: i32,
    /// Captured standard output, echoed live while the child ran.
    pub stdout: String,
    /// Captured standard error, echoed live while the child ran.
    pub stderr: String,
}

impl RunOutcome {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Runs a toolchain command to completion inside `work_dir`.
///
/// Both output streams are drained on their own threads while the child
/// runs, so a command that floods one pipe cannot deadlock against a
/// reader blocked on the other. Lines are echoed to the matching parent
/// stream as they arrive and captured for the caller.
///
/// A non-zero exit is logged and reported in the outcome, never raised.
/// Failing to launch the child, wait on it, or read its output is an
/// error.
pub fn run(command: &ToolCommand, work_dir: &Path) -> Result<RunOutcome> {
    debug!(%command, work_dir = %work_dir.display(), "spawning toolchain command");
    let mut child = command
        .to_std()
        .current_dir(work_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ToolchainError::Launch {
            program: command.program().to_string(),
            source,
        })?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| capture_error(command, "stdout pipe missing"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| capture_error(command, "stderr pipe missing"))?;
    let stdout_drain = thread::spawn(move || drain_lines(stdout, EchoTo::Stdout));
    let stderr_drain = thread::spawn(move || drain_lines(stderr, EchoTo::Stderr));

    let status = child.wait().map_err(|source| ToolchainError::Wait {
        program: command.program().to_string(),
        source,
    })?;

    let stdout_text = join_drain(stdout_drain, command)?;
    let stderr_text = join_drain(stderr_drain, command)?;

    let code = status.code().unwrap_or(-1);
    if !status.success() {
        warn!(code, %command, "toolchain command exited with non-zero status");
    }

    Ok(RunOutcome {
        code,
        stdout: stdout_text,
        stderr: stderr_text,
    })
}

enum EchoTo {
    Stdout,
    Stderr,
}

fn drain_lines<R: Read>(stream: R, echo: EchoTo) -> io::Result<String> {
    let mut captured = String::new();
    for line in BufReader::new(stream).lines() {
        let line = line?;
        match echo {
            EchoTo::Stdout => println!("{line}"),
            EchoTo::Stderr => eprintln!("{line}"),
        }
        captured.push_str(&line);
        captured.push('\n');
    }
    Ok(captured)
}

fn join_drain(handle: JoinHandle<io::Result<String>>, command: &ToolCommand) -> Result<String> {
    match handle.join() {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(source)) => Err(ToolchainError::Capture {
            program: command.program().to_string(),
            source,
        }),
        Err(_) => Err(capture_error(command, "output drain thread panicked")),
    }
}

fn capture_error(command: &ToolCommand, message: &str) -> ToolchainError {
    ToolchainError::Capture {
        program: command.program().to_string(),
        source: io::Error::other(message),
    }
}
