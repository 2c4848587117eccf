//! Command-line front end for the mll toolchain pipeline.

pub mod cli;
pub mod commands;

pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum CliError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Configuration error: {0}")]
        Config(String),

        #[error("Invalid input: {0}")]
        InvalidInput(String),

        #[error(transparent)]
        Toolchain(#[from] mll_toolchain::ToolchainError),
    }

    pub type Result<T> = std::result::Result<T, CliError>;
}

pub use error::{CliError, Result};
