//! Native and containerized command construction.
//!
//! Every pipeline stage describes the same logical invocation; the two
//! backends only differ in how artifact paths are rooted and whether the
//! program is wrapped in `docker exec`. Stage code never branches on the
//! mode beyond picking a backend once.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::command::ToolCommand;
use crate::config::ToolchainConfig;

/// Which backend executes toolchain commands for the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Toolchain binaries found on the host.
    Native,
    /// Toolchain binaries reached through `docker exec`.
    Containerized,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Native => write!(f, "native"),
            ExecutionMode::Containerized => write!(f, "containerized"),
        }
    }
}

/// Optimization level handed to `opt`.
///
/// Any level outside `0..=3` collapses to the most aggressive setting,
/// so callers can pass user input straight through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptLevel {
    O0,
    O1,
    O2,
    O3,
}

impl OptLevel {
    /// The `opt` flag; doubles as the artifact name suffix, as in
    /// `add-O2.ll`.
    pub fn flag(self) -> &'static str {
        match self {
            OptLevel::O0 => "-O0",
            OptLevel::O1 => "-O1",
            OptLevel::O2 => "-O2",
            OptLevel::O3 => "-O3",
        }
    }
}

impl Default for OptLevel {
    fn default() -> Self {
        OptLevel::O3
    }
}

impl From<i32> for OptLevel {
    fn from(level: i32) -> Self {
        match level {
            0 => OptLevel::O0,
            1 => OptLevel::O1,
            2 => OptLevel::O2,
            _ => OptLevel::O3,
        }
    }
}

impl fmt::Display for OptLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

/// Strategy for turning a logical tool invocation into a concrete command.
pub trait Backend {
    fn mode(&self) -> ExecutionMode;

    /// The path the tool itself will see for a workspace-relative artifact.
    fn tool_path(&self, relative: &Path) -> String;

    /// Wraps `program args...` for this backend.
    fn command(&self, program: &str, args: Vec<String>) -> ToolCommand;
}

/// Runs tools directly on the host, inside the working root.
pub struct NativeBackend;

impl Backend for NativeBackend {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Native
    }

    fn tool_path(&self, relative: &Path) -> String {
        relative.display().to_string()
    }

    fn command(&self, program: &str, args: Vec<String>) -> ToolCommand {
        ToolCommand::new(program).args(args)
    }
}

/// Runs tools inside a long-running container via `docker exec -t`.
pub struct ContainerBackend {
    docker: String,
    container: String,
    root: PathBuf,
}

impl ContainerBackend {
    pub fn new(
        docker: impl Into<String>,
        container: impl Into<String>,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            docker: docker.into(),
            container: container.into(),
            root: root.into(),
        }
    }
}

impl Backend for ContainerBackend {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Containerized
    }

    fn tool_path(&self, relative: &Path) -> String {
        self.root.join(relative).display().to_string()
    }

    fn command(&self, program: &str, args: Vec<String>) -> ToolCommand {
        ToolCommand::new(&self.docker)
            .args(["exec", "-t", self.container.as_str()])
            .arg(program)
            .args(args)
    }
}

/// Builds the exact command line for each pipeline stage.
pub struct CommandBuilder<'a> {
    backend: &'a dyn Backend,
    config: &'a ToolchainConfig,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(backend: &'a dyn Backend, config: &'a ToolchainConfig) -> Self {
        Self { backend, config }
    }

    /// `opt <-O?> <ir> -So <optimized-ir>`
    pub fn optimize(&self, name: &str, level: OptLevel) -> ToolCommand {
        let layout = &self.config.layout;
        self.backend.command(
            &self.config.opt,
            vec![
                level.flag().to_string(),
                self.backend.tool_path(&layout.ir_file(name)),
                "-So".to_string(),
                self.backend.tool_path(&layout.optimized_ir_file(name, level)),
            ],
        )
    }

    /// `clang -O3 -lm <driver.c> <ir> -o <binary>`
    pub fn compile(&self, name: &str) -> ToolCommand {
        let layout = &self.config.layout;
        self.backend.command(
            &self.config.clang,
            vec![
                "-O3".to_string(),
                "-lm".to_string(),
                self.backend.tool_path(&self.config.driver_source),
                self.backend.tool_path(&layout.ir_file(name)),
                "-o".to_string(),
                self.backend.tool_path(&layout.binary_file(name)),
            ],
        )
    }

    /// `lli <ir>`
    pub fn run_ir(&self, name: &str) -> ToolCommand {
        self.backend.command(
            &self.config.lli,
            vec![self.backend.tool_path(&self.config.layout.ir_file(name))],
        )
    }

    /// `<binary> args...`
    pub fn execute(&self, name: &str, args: &[String]) -> ToolCommand {
        let binary = self.backend.tool_path(&self.config.layout.binary_file(name));
        self.backend.command(&binary, args.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn native<'a>(config: &'a ToolchainConfig, backend: &'a NativeBackend) -> CommandBuilder<'a> {
        CommandBuilder::new(backend, config)
    }

    fn containerized(config: &ToolchainConfig) -> ContainerBackend {
        ContainerBackend::new(
            config.docker.clone(),
            config.container_name.clone(),
            config.container_root.clone(),
        )
    }

    #[test]
    fn opt_levels_map_onto_flags() {
        assert_eq!(OptLevel::from(0).flag(), "-O0");
        assert_eq!(OptLevel::from(1).flag(), "-O1");
        assert_eq!(OptLevel::from(2).flag(), "-O2");
        assert_eq!(OptLevel::from(3).flag(), "-O3");
    }

    #[test]
    fn out_of_range_levels_collapse_to_o3() {
        assert_eq!(OptLevel::from(-7), OptLevel::O3);
        assert_eq!(OptLevel::from(4), OptLevel::O3);
        assert_eq!(OptLevel::from(42), OptLevel::O3);
    }

    #[test]
    fn native_optimize_command() {
        let config = ToolchainConfig::default();
        let builder = native(&config, &NativeBackend);
        let command = builder.optimize("add", OptLevel::O2);
        assert_eq!(
            command.tokens(),
            vec!["opt", "-O2", "out/llvm/add.ll", "-So", "out/llvm/add-O2.ll"]
        );
    }

    #[test]
    fn containerized_optimize_command() {
        let config = ToolchainConfig::default();
        let backend = containerized(&config);
        let builder = CommandBuilder::new(&backend, &config);
        let command = builder.optimize("add", OptLevel::O2);
        assert_eq!(
            command.tokens(),
            vec![
                "docker",
                "exec",
                "-t",
                "mll_docker",
                "opt",
                "-O2",
                "/home/jovyan/mll/out/llvm/add.ll",
                "-So",
                "/home/jovyan/mll/out/llvm/add-O2.ll",
            ]
        );
    }

    #[test]
    fn native_compile_command() {
        let config = ToolchainConfig::default();
        let builder = native(&config, &NativeBackend);
        let command = builder.compile("f");
        assert_eq!(
            command.tokens(),
            vec![
                "clang",
                "-O3",
                "-lm",
                "src/main.c",
                "out/llvm/f.ll",
                "-o",
                "out/bin/f",
            ]
        );
    }

    #[test]
    fn containerized_compile_command() {
        let config = ToolchainConfig::default();
        let backend = containerized(&config);
        let builder = CommandBuilder::new(&backend, &config);
        let command = builder.compile("f");
        assert_eq!(
            command.tokens(),
            vec![
                "docker",
                "exec",
                "-t",
                "mll_docker",
                "clang",
                "-O3",
                "-lm",
                "/home/jovyan/mll/src/main.c",
                "/home/jovyan/mll/out/llvm/f.ll",
                "-o",
                "/home/jovyan/mll/out/bin/f",
            ]
        );
    }

    #[test]
    fn native_run_ir_command() {
        let config = ToolchainConfig::default();
        let builder = native(&config, &NativeBackend);
        assert_eq!(
            builder.run_ir("add").tokens(),
            vec!["lli", "out/llvm/add.ll"]
        );
    }

    #[test]
    fn native_execute_preserves_argument_order() {
        let config = ToolchainConfig::default();
        let builder = native(&config, &NativeBackend);
        let args = vec!["1".to_string(), "-3".to_string(), "x".to_string()];
        assert_eq!(
            builder.execute("add", &args).tokens(),
            vec!["out/bin/add", "1", "-3", "x"]
        );
    }

    #[test]
    fn containerized_execute_targets_the_container_binary() {
        let config = ToolchainConfig::default();
        let backend = containerized(&config);
        let builder = CommandBuilder::new(&backend, &config);
        assert_eq!(
            builder.execute("add", &[]).tokens(),
            vec![
                "docker",
                "exec",
                "-t",
                "mll_docker",
                "/home/jovyan/mll/out/bin/add",
            ]
        );
    }

    #[test]
    fn renamed_tools_flow_into_commands() {
        let config = ToolchainConfig {
            opt: "opt-18".to_string(),
            ..ToolchainConfig::default()
        };
        let builder = native(&config, &NativeBackend);
        assert_eq!(builder.optimize("g", OptLevel::O0).tokens()[0], "opt-18");
    }
}
