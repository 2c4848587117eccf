//! Drives the external LLVM toolchain for generated mll programs.
//!
//! The expression layer emits LLVM IR as text; everything after that is
//! delegated to real toolchain binaries. This crate stages the IR under
//! `out/llvm/`, rewrites it with `opt`, links it against the C driver with
//! `clang`, and runs the result either as a compiled binary or directly
//! under `lli`.
//!
//! Commands run natively when a host toolchain answers a version probe,
//! and inside a long-running docker container otherwise. The probe happens
//! once per [`Toolchain`]; every stage of a run then agrees on the same
//! backend.

pub mod backend;
pub mod command;
pub mod config;
pub mod error;
pub mod probe;
pub mod runner;
pub mod stages;

pub use backend::{Backend, CommandBuilder, ContainerBackend, ExecutionMode, NativeBackend, OptLevel};
pub use command::ToolCommand;
pub use config::{ArtifactLayout, ExitPolicy, ToolchainConfig};
pub use error::{Result, ToolchainError};
pub use runner::RunOutcome;
pub use stages::{IrEmitter, Toolchain};
