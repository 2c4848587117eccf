//! Interpret staged IR without compiling.

use clap::Args;

use crate::cli::CliConfig;
use crate::commands;
use crate::Result;

/// Arguments for the run-ir command
#[derive(Debug, Clone, Args)]
pub struct RunIrArgs {
    /// Logical program name; expects out/llvm/<name>.ll to exist
    pub name: String,
}

pub fn run_ir_command(args: RunIrArgs, config: &CliConfig) -> Result<()> {
    let toolchain = commands::toolchain(config);
    let outcome = toolchain.run_ir(&args.name)?;
    commands::propagate_exit(&outcome);
    Ok(())
}
