//! Optimize, build, and execute in one go.

use clap::Args;
use tracing::debug;

use mll_toolchain::OptLevel;

use crate::cli::CliConfig;
use crate::commands;
use crate::Result;

/// Arguments for the run command
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Logical program name; expects out/llvm/<name>.ll to exist
    pub name: String,

    /// Optimize at this level first and run the optimized artifact
    #[arg(short = 'O', long = "level")]
    pub level: Option<i32>,

    /// Arguments passed through to the program; use `--` before any
    /// that start with a hyphen
    #[arg(trailing_var_arg = true)]
    pub args: Vec<String>,
}

/// Chains optimize, compile, and execute over one probed backend.
pub fn run_command(args: RunArgs, config: &CliConfig) -> Result<()> {
    let toolchain = commands::toolchain(config);
    let name = match args.level {
        Some(level) => {
            let level = OptLevel::from(level);
            toolchain.optimize(&args.name, level)?;
            format!("{}{}", args.name, level.flag())
        }
        None => args.name.clone(),
    };
    toolchain.compile(&name)?;
    debug!(%name, "artifacts ready, executing");
    let outcome = toolchain.run_binary(&name, &args.args)?;
    commands::propagate_exit(&outcome);
    Ok(())
}
