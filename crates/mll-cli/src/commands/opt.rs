//! IR optimization command.

use clap::Args;
use console::style;

use mll_toolchain::OptLevel;

use crate::cli::CliConfig;
use crate::commands;
use crate::Result;

/// Arguments for the opt command
#[derive(Debug, Clone, Args)]
pub struct OptArgs {
    /// Logical program name; expects out/llvm/<name>.ll to exist
    pub name: String,

    /// Optimization level 0-3; anything else collapses to 3
    #[arg(short = 'O', long = "level", default_value_t = 3)]
    pub level: i32,
}

pub fn opt_command(args: OptArgs, config: &CliConfig) -> Result<()> {
    let toolchain = commands::toolchain(config);
    let level = OptLevel::from(args.level);
    let relative = toolchain.optimize(&args.name, level)?;
    println!(
        "{} optimized {} at {level}: {}",
        style("✓").green(),
        args.name,
        relative.display()
    );
    Ok(())
}
