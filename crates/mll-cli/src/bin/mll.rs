//! mll command line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::error;

use mll_cli::cli::{CliConfig, ModeSelection};
use mll_cli::commands::{
    build_command, exec_command, import_command, info_command, opt_command, probe_command,
    run_command, run_ir_command, BuildArgs, ExecArgs, ImportArgs, OptArgs, RunArgs, RunIrArgs,
};
use mll_cli::{CliError, Result};
use mll_toolchain::ExitPolicy;

#[derive(Parser)]
#[command(name = "mll")]
#[command(about = "Drive the LLVM toolchain for generated mll programs")]
#[command(version)]
#[command(after_help = "\
Examples:
  mll probe
  mll import add.ll
  mll opt add -O2
  mll build add-O2
  mll exec add-O2 1 2
  mll run add -O2 -- 1 2")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Explicit log level
    #[arg(long, value_enum, global = true)]
    log: Option<LogLevel>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Change to this directory before doing anything
    #[arg(short = 'C', long = "directory", global = true)]
    directory: Option<PathBuf>,

    /// Backend selection for this invocation
    #[arg(long, value_enum, global = true)]
    mode: Option<ModeSelection>,

    /// Treat any non-zero toolchain exit as fatal
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether the host toolchain answers a version probe
    Probe,
    /// Stage an existing IR file under out/llvm/
    Import(ImportArgs),
    /// Optimize staged IR with opt
    Opt(OptArgs),
    /// Link staged IR against the C driver with clang
    Build(BuildArgs),
    /// Run a previously built binary
    Exec(ExecArgs),
    /// Interpret staged IR under lli
    RunIr(RunIrArgs),
    /// Optimize, build, and execute in one go
    Run(RunArgs),
    /// Show the effective configuration and selected backend
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet, cli.log);

    if let Some(directory) = &cli.directory {
        std::env::set_current_dir(directory).map_err(|err| {
            CliError::InvalidInput(format!("cannot change to {}: {err}", directory.display()))
        })?;
    }

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(mode) = cli.mode {
        config.run.mode = mode;
    }
    if cli.strict {
        config.toolchain.exit_policy = ExitPolicy::Strict;
    }

    let result = match cli.command {
        Commands::Probe => probe_command(&config),
        Commands::Import(args) => import_command(args, &config),
        Commands::Opt(args) => opt_command(args, &config),
        Commands::Build(args) => build_command(args, &config),
        Commands::Exec(args) => exec_command(args, &config),
        Commands::RunIr(args) => run_ir_command(args, &config),
        Commands::Run(args) => run_command(args, &config),
        Commands::Info => info_command(&config),
    };

    if let Err(err) = result {
        error!("{err}");
        std::process::exit(1);
    }
    Ok(())
}

fn setup_logging(verbose: u8, quiet: bool, log: Option<LogLevel>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;

    let filter = if let Some(level) = log {
        EnvFilter::new(level.as_str())
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime());

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
