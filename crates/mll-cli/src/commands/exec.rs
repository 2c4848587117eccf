//! Run a compiled program.

use clap::Args;

use crate::cli::CliConfig;
use crate::commands;
use crate::Result;

/// Arguments for the exec command
#[derive(Debug, Clone, Args)]
pub struct ExecArgs {
    /// Logical program name; expects out/bin/<name> to exist
    pub name: String,

    /// Arguments passed through to the program; use `--` before any
    /// that start with a hyphen
    #[arg(trailing_var_arg = true)]
    pub args: Vec<String>,
}

pub fn exec_command(args: ExecArgs, config: &CliConfig) -> Result<()> {
    let toolchain = commands::toolchain(config);
    let outcome = toolchain.run_binary(&args.name, &args.args)?;
    commands::propagate_exit(&outcome);
    Ok(())
}
