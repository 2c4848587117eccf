//! Print the effective configuration.

use console::style;

use crate::cli::CliConfig;
use crate::commands;
use crate::Result;

/// Shows the selected backend and the layout a run would use.
pub fn info_command(config: &CliConfig) -> Result<()> {
    let toolchain = commands::toolchain(config);
    let effective = toolchain.config();
    println!("{}", style("mll toolchain").bold());
    println!("  mode:          {}", toolchain.mode());
    println!("  work dir:      {}", effective.work_dir.display());
    println!(
        "  container:     {} (root {})",
        effective.container_name,
        effective.container_root.display()
    );
    println!(
        "  tools:         {} / {} / {}",
        effective.clang, effective.opt, effective.lli
    );
    println!("  driver:        {}", effective.driver_source.display());
    println!("  ir artifacts:  {}", effective.layout.llvm_dir.display());
    println!("  binaries:      {}", effective.layout.bin_dir.display());
    println!("  plots:         {}", effective.layout.plots_dir.display());
    println!("  dot graphs:    {}", effective.layout.dot_dir.display());
    println!("  exit policy:   {:?}", effective.exit_policy);
    Ok(())
}
