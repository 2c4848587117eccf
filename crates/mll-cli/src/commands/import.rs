//! Stage an existing IR file into the pipeline layout.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Args;
use console::style;

use mll_toolchain::{ExecutionMode, Toolchain};

use crate::cli::CliConfig;
use crate::error::{CliError, Result};

/// Arguments for the import command
#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// IR file to stage, or `-` to read standard input
    pub input: PathBuf,

    /// Logical program name; defaults to the input file stem
    #[arg(long)]
    pub name: Option<String>,
}

pub fn import_command(args: ImportArgs, config: &CliConfig) -> Result<()> {
    let from_stdin = args.input.as_os_str() == "-";
    let text = if from_stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(&args.input).map_err(|err| {
            CliError::InvalidInput(format!("cannot read {}: {err}", args.input.display()))
        })?
    };

    let name = match args.name {
        Some(name) => name,
        None if from_stdin => {
            return Err(CliError::InvalidInput(
                "pass --name when importing from standard input".to_string(),
            ))
        }
        None => args
            .input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "cannot derive a name from {}; pass --name",
                    args.input.display()
                ))
            })?,
    };

    // Staging is a host-side write; no backend probe required.
    let toolchain = Toolchain::with_mode(config.toolchain.clone(), ExecutionMode::Native);
    let relative = toolchain.write_ir(&text, &name)?;
    println!(
        "{} staged {} as {}",
        style("✓").green(),
        name,
        relative.display()
    );
    Ok(())
}
