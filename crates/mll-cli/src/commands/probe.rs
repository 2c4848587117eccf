//! Toolchain availability probe.

use console::style;

use crate::cli::CliConfig;
use crate::Result;

/// Reports whether the host toolchain answers and where commands would
/// run as a result.
pub fn probe_command(config: &CliConfig) -> Result<()> {
    let clang = &config.toolchain.clang;
    if mll_toolchain::probe::toolchain_available(clang) {
        println!(
            "{} host toolchain available via `{clang}`; commands run natively",
            style("✓").green()
        );
    } else {
        println!(
            "{} host toolchain not answering; commands run in container `{}`",
            style("!").yellow(),
            config.toolchain.container_name
        );
    }
    Ok(())
}
