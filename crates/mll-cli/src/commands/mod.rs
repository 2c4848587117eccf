//! Command implementations.

pub mod build;
pub mod exec;
pub mod import;
pub mod info;
pub mod opt;
pub mod probe;
pub mod run;
pub mod run_ir;

pub use build::{build_command, BuildArgs};
pub use exec::{exec_command, ExecArgs};
pub use import::{import_command, ImportArgs};
pub use info::info_command;
pub use opt::{opt_command, OptArgs};
pub use probe::probe_command;
pub use run::{run_command, RunArgs};
pub use run_ir::{run_ir_command, RunIrArgs};

use mll_toolchain::{ExecutionMode, RunOutcome, Toolchain};

use crate::cli::{CliConfig, ModeSelection};

/// Builds the toolchain for one command, honoring the configured mode.
pub(crate) fn toolchain(config: &CliConfig) -> Toolchain {
    let toolchain_config = config.toolchain.clone();
    match config.run.mode {
        ModeSelection::Auto => Toolchain::detect(toolchain_config),
        ModeSelection::Native => Toolchain::with_mode(toolchain_config, ExecutionMode::Native),
        ModeSelection::Container => {
            Toolchain::with_mode(toolchain_config, ExecutionMode::Containerized)
        }
    }
}

/// Ends the process with the child's own exit code when it failed.
///
/// Under the lenient policy a failing program is not an error, but the
/// shell still deserves the real status for scripting.
pub(crate) fn propagate_exit(outcome: &RunOutcome) {
    if !outcome.success() {
        std::process::exit(outcome.code);
    }
}
