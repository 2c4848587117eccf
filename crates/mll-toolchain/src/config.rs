use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::backend::OptLevel;

/// How a stage reacts to a toolchain command finishing with a non-zero
/// status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExitPolicy {
    /// Log the status and carry on; callers inspect the outcome.
    #[default]
    Lenient,
    /// Treat any non-zero status as a fatal error.
    Strict,
}

/// Where stage artifacts live, relative to the working root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactLayout {
    pub llvm_dir: PathBuf,
    pub bin_dir: PathBuf,
    pub plots_dir: PathBuf,
    pub dot_dir: PathBuf,
}

impl Default for ArtifactLayout {
    fn default() -> Self {
        Self {
            llvm_dir: PathBuf::from("out/llvm"),
            bin_dir: PathBuf::from("out/bin"),
            plots_dir: PathBuf::from("out/plots"),
            dot_dir: PathBuf::from("out/dot"),
        }
    }
}

impl ArtifactLayout {
    /// `out/llvm/<name>.ll`
    pub fn ir_file(&self, name: &str) -> PathBuf {
        self.llvm_dir.join(format!("{name}.ll"))
    }

    /// `out/llvm/<name>-O<level>.ll`
    pub fn optimized_ir_file(&self, name: &str, level: OptLevel) -> PathBuf {
        self.llvm_dir.join(format!("{name}{}.ll", level.flag()))
    }

    /// `out/bin/<name>`
    pub fn binary_file(&self, name: &str) -> PathBuf {
        self.bin_dir.join(name)
    }
}

/// Complete configuration for one toolchain run.
///
/// The defaults reproduce the notebook environment this grew out of: a
/// long-running `mll_docker` container exposing the project under
/// `/home/jovyan/mll`, artifacts under `out/`, and the C driver at
/// `src/main.c`. Everything is a plain field so embedders and tests can
/// swap any piece without touching process code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Host directory spawned commands run in; all relative artifact
    /// paths are rooted here.
    pub work_dir: PathBuf,
    /// Name of the container holding the toolchain.
    pub container_name: String,
    /// Filesystem root of this project inside the container.
    pub container_root: PathBuf,
    /// Program used to wrap containerized invocations.
    pub docker: String,
    /// Compiler and linker program, also the probe target.
    pub clang: String,
    /// IR optimizer program.
    pub opt: String,
    /// IR interpreter program.
    pub lli: String,
    /// C driver source linked into every binary.
    pub driver_source: PathBuf,
    /// Artifact directory conventions.
    pub layout: ArtifactLayout,
    /// Reaction to non-zero exit statuses.
    pub exit_policy: ExitPolicy,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            container_name: "mll_docker".to_string(),
            container_root: PathBuf::from("/home/jovyan/mll"),
            docker: "docker".to_string(),
            clang: "clang".to_string(),
            opt: "opt".to_string(),
            lli: "lli".to_string(),
            driver_source: PathBuf::from("src/main.c"),
            layout: ArtifactLayout::default(),
            exit_policy: ExitPolicy::default(),
        }
    }
}

impl ToolchainConfig {
    /// Host path of a workspace-relative artifact.
    pub fn host_path(&self, relative: &Path) -> PathBuf {
        self.work_dir.join(relative)
    }

    /// Host-side mirror of the container bin directory, relative to the
    /// working root. The containerized compile stage creates this on the
    /// host; see [`crate::stages::Toolchain::compile`].
    pub fn container_bin_placeholder(&self) -> PathBuf {
        let stripped = self
            .container_root
            .strip_prefix("/")
            .unwrap_or(&self.container_root);
        stripped.join(&self.layout.bin_dir)
    }
}
