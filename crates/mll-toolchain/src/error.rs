use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ToolchainError>;

/// Errors raised while staging artifacts or driving toolchain processes.
///
/// A toolchain command that runs to completion with a non-zero status is
/// not an error by itself; stages only produce [`ToolchainError::ExitStatus`]
/// under the strict exit policy.
#[derive(Debug, thiserror::Error)]
pub enum ToolchainError {
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed while waiting for `{program}`: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to capture output of `{program}`: {source}")]
    Capture {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with status {code}")]
    ExitStatus { command: String, code: i32 },

    #[error("failed to write artifact {}: {source}", .path.display())]
    Artifact {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
