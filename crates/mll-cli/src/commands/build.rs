//! Compile and link command.

use clap::Args;
use console::style;

use crate::cli::CliConfig;
use crate::commands;
use crate::Result;

/// Arguments for the build command
#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Logical program name; links out/llvm/<name>.ll against the C driver
    pub name: String,
}

pub fn build_command(args: BuildArgs, config: &CliConfig) -> Result<()> {
    let toolchain = commands::toolchain(config);
    let relative = toolchain.compile(&args.name)?;
    println!("{} built {}", style("✓").green(), relative.display());
    Ok(())
}
