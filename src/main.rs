use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ecfg::{
    find_config_file, load_config, merge_settings, render, run, should_use_colors, CliSettings,
    EcfgToml, OutputContext, OutputFormat,
};
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "ecfg")]
#[command(version, about = "Print the effective .editorconfig properties of files")]
struct Cli {
    /// Target files or directories
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Config file name looked up in each directory (default: .editorconfig)
    #[arg(short = 'f', long, value_name = "NAME")]
    config_name: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Specify ecfg.toml path (overrides auto-discovery)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Include hidden files when walking directories
    #[arg(long)]
    hidden: bool,

    /// Do not respect .gitignore when walking directories
    #[arg(long)]
    no_ignore: bool,

    /// Force colored output
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log which config files are read (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let toml_config = match load_configuration(&cli.config) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {message}");
            return ExitCode::from(1);
        }
    };

    // Merge configurations: CLI > TOML > defaults
    let settings = merge_settings(&build_cli_settings(&cli), toml_config.as_ref());

    let use_colors =
        settings.format == OutputFormat::Plain && should_use_colors(cli.color, cli.no_color);
    let ctx = OutputContext::new(settings.format, use_colors, io::stderr().is_terminal());

    let result = match run(&cli.paths, &settings, &ctx) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    match render(&result.reports, &ctx) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    }

    if result.has_errors() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

/// Load ecfg.toml. An explicit `--config` that fails is an error; a
/// discovered one that fails is only a warning.
fn load_configuration(explicit_path: &Option<PathBuf>) -> Result<Option<EcfgToml>, String> {
    if let Some(path) = explicit_path {
        return load_config(path)
            .map(Some)
            .map_err(|e| format!("{}: {e}", path.display()));
    }

    let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|d| find_config_file(&d))
    else {
        return Ok(None);
    };

    match load_config(&path) {
        Ok(config) => {
            debug!(path = %path.display(), "using settings");
            Ok(Some(config))
        }
        Err(e) => {
            warn!("failed to load {}: {e}", path.display());
            Ok(None)
        }
    }
}

fn build_cli_settings(cli: &Cli) -> CliSettings {
    // Boolean flags in clap are always present (default false), so we
    // treat false as "not set" for proper merging with config file.
    CliSettings {
        config_name: cli.config_name.clone(),
        format: cli.format,
        hidden: cli.hidden.then_some(true),
        no_ignore: cli.no_ignore.then_some(true),
    }
}
