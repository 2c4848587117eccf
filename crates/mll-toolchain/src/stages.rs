//! Pipeline stages over a probed backend.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::backend::{
    Backend, CommandBuilder, ContainerBackend, ExecutionMode, NativeBackend, OptLevel,
};
use crate::command::ToolCommand;
use crate::config::{ExitPolicy, ToolchainConfig};
use crate::error::{Result, ToolchainError};
use crate::probe;
use crate::runner::{self, RunOutcome};

/// Source of generated IR text.
///
/// The expression layer implements this for its compiled functions; plain
/// strings and closures work too, which keeps staging testable without a
/// code generator in the loop.
pub trait IrEmitter {
    fn emit_ir(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl<F> IrEmitter for F
where
    F: Fn(&mut dyn Write) -> io::Result<()>,
{
    fn emit_ir(&self, out: &mut dyn Write) -> io::Result<()> {
        self(out)
    }
}

impl IrEmitter for str {
    fn emit_ir(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.as_bytes())
    }
}

impl IrEmitter for String {
    fn emit_ir(&self, out: &mut dyn Write) -> io::Result<()> {
        self.as_str().emit_ir(out)
    }
}

/// One pipeline run against a fixed backend.
///
/// The environment is probed once, when the value is built; every stage
/// of the run then agrees on the same mode even if the host toolchain
/// appears or disappears mid-run. Paths returned by stages are relative
/// to the working root regardless of where the tools actually ran.
pub struct Toolchain {
    config: ToolchainConfig,
    backend: Box<dyn Backend>,
}

impl Toolchain {
    /// Probes the host toolchain and picks the backend for this run.
    pub fn detect(config: ToolchainConfig) -> Self {
        let mode = if probe::toolchain_available(&config.clang) {
            ExecutionMode::Native
        } else {
            ExecutionMode::Containerized
        };
        info!(%mode, "selected toolchain backend");
        Self::with_mode(config, mode)
    }

    /// Skips the probe and forces a backend.
    pub fn with_mode(config: ToolchainConfig, mode: ExecutionMode) -> Self {
        let backend: Box<dyn Backend> = match mode {
            ExecutionMode::Native => Box::new(NativeBackend),
            ExecutionMode::Containerized => Box::new(ContainerBackend::new(
                config.docker.clone(),
                config.container_name.clone(),
                config.container_root.clone(),
            )),
        };
        Self { config, backend }
    }

    pub fn mode(&self) -> ExecutionMode {
        self.backend.mode()
    }

    pub fn config(&self) -> &ToolchainConfig {
        &self.config
    }

    fn commands(&self) -> CommandBuilder<'_> {
        CommandBuilder::new(self.backend.as_ref(), &self.config)
    }

    /// Stages generated IR as `out/llvm/<name>.ll`.
    ///
    /// Purely a host-side write; no toolchain process is involved. If the
    /// emitter fails midway the partial file is left behind and the error
    /// is returned.
    pub fn write_ir<S>(&self, source: &S, name: &str) -> Result<PathBuf>
    where
        S: IrEmitter + ?Sized,
    {
        self.ensure_dir(&self.config.layout.llvm_dir)?;
        let relative = self.config.layout.ir_file(name);
        write_artifact(&self.config.host_path(&relative), source)?;
        info!("Saved LLVM file: {}", relative.display());
        Ok(relative)
    }

    /// Rewrites `out/llvm/<name>.ll` through `opt` at the given level.
    ///
    /// Produces `out/llvm/<name>-O<level>.ll`. Under the lenient policy
    /// the path is returned even when `opt` reports failure; the follow-up
    /// stage surfaces the missing artifact soon enough.
    pub fn optimize(&self, name: &str, level: OptLevel) -> Result<PathBuf> {
        self.ensure_dir(&self.config.layout.llvm_dir)?;
        let command = self.commands().optimize(name, level);
        self.run_checked(&command)?;
        let relative = self.config.layout.optimized_ir_file(name, level);
        info!("Optimized LLVM code: {}", relative.display());
        Ok(relative)
    }

    /// Links `out/llvm/<name>.ll` against the C driver into `out/bin/<name>`.
    pub fn compile(&self, name: &str) -> Result<PathBuf> {
        info!("Generating binary: {name}");
        match self.mode() {
            ExecutionMode::Native => {
                self.ensure_dir(&self.config.layout.bin_dir)?;
            }
            ExecutionMode::Containerized => {
                // The binary lands inside the container, yet a host-side
                // mirror of the container bin path gets created too.
                // TODO: almost certainly vestigial; drop once the notebook
                // image stops expecting the mirrored directory.
                self.ensure_dir(&self.config.container_bin_placeholder())?;
            }
        }
        let command = self.commands().compile(name);
        self.run_checked(&command)?;
        Ok(self.config.layout.binary_file(name))
    }

    /// Runs the compiled binary with the given arguments.
    pub fn run_binary(&self, name: &str, args: &[String]) -> Result<RunOutcome> {
        let command = self.commands().execute(name, args);
        self.run_checked(&command)
    }

    /// Interprets `out/llvm/<name>.ll` directly under `lli`.
    pub fn run_ir(&self, name: &str) -> Result<RunOutcome> {
        let command = self.commands().run_ir(name);
        self.run_checked(&command)
    }

    fn run_checked(&self, command: &ToolCommand) -> Result<RunOutcome> {
        let outcome = runner::run(command, &self.config.work_dir)?;
        if self.config.exit_policy == ExitPolicy::Strict && !outcome.success() {
            return Err(ToolchainError::ExitStatus {
                command: command.to_string(),
                code: outcome.code,
            });
        }
        Ok(outcome)
    }

    fn ensure_dir(&self, relative: &Path) -> Result<PathBuf> {
        let path = self.config.host_path(relative);
        fs::create_dir_all(&path).map_err(|source| ToolchainError::CreateDir {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

fn write_artifact<S>(path: &Path, source: &S) -> Result<()>
where
    S: IrEmitter + ?Sized,
{
    let file = File::create(path).map_err(|source| ToolchainError::Artifact {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    source
        .emit_ir(&mut writer)
        .map_err(|source| ToolchainError::Artifact {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(|source| ToolchainError::Artifact {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
