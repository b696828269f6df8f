//! Hierarchical `.editorconfig` resolution.
//!
//! ```no_run
//! use std::path::Path;
//! use ecfg::Resolver;
//!
//! let resolver = Resolver::os();
//! let props = resolver.resolve(Path::new("/project/src/main.rs")).unwrap();
//! if let Some(style) = props.get("indent_style") {
//!     println!("indent_style = {style}");
//! }
//! ```

pub mod colors;
pub mod config;
pub mod editorconfig;
pub mod error;
pub mod glob;
mod output;
pub mod progress;
pub mod properties;
pub mod resolver;
pub mod walker;

pub use colors::{should_use_colors, Colors};
pub use config::{
    find_config_file, find_file_upward, load_config, merge_settings, CliSettings, ConfigError,
    EcfgToml, OutputFormat, Settings,
};
pub use editorconfig::{parse, ConfigFile, ConfigLevel, DEFAULT_CONFIG_NAME};
pub use error::{PatternError, ResolveError};
pub use glob::{compile_pattern, numeric_range_regex, CompiledPattern, Interval, MatchTarget};
pub use output::{render, OutputContext, Report};
pub use progress::ProgressReporter;
pub use properties::{PropertyTable, PropertyValue};
pub use resolver::{
    normalize_lexically, FileSystem, MemoryFileSystem, OsFileSystem, ResolutionCache, Resolver,
    ResolverOptions,
};
pub use walker::walk_paths;

use std::io;
use std::path::{Path, PathBuf};

/// Outcome of resolving every file named on the command line.
#[derive(Debug, Default)]
pub struct RunResult {
    pub reports: Vec<Report>,
    pub errors: usize,
}

impl RunResult {
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

/// Main entry point: resolve properties for all files in the given paths.
///
/// Paths are made absolute against the current directory. Directories are
/// walked; each file found is resolved. Per-path failures are reported on
/// stderr and counted, not returned.
pub fn run(paths: &[PathBuf], settings: &Settings, ctx: &OutputContext) -> io::Result<RunResult> {
    let cwd = std::env::current_dir()?;
    let absolute: Vec<PathBuf> = paths.iter().map(|p| absolutize(&cwd, p)).collect();

    let resolver = Resolver::with_options(
        OsFileSystem,
        ResolverOptions {
            config_name: settings.config_name.clone(),
        },
    );
    let mut result = RunResult::default();

    // Count files for progress bar (2-pass approach)
    let file_count = walk_paths(&absolute, &settings.walk)
        .filter_map(|r| r.ok())
        .count() as u64;
    let progress = ProgressReporter::new(file_count, ctx.show_progress);

    for entry in walk_paths(&absolute, &settings.walk) {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                eprintln!("Error: {e}");
                result.errors += 1;
                continue;
            }
        };

        if let Some(name) = path.file_name() {
            progress.resolving(&name.to_string_lossy());
        }

        match resolver.resolve(&path) {
            Ok(properties) => result.reports.push(Report { path, properties }),
            Err(e) => {
                eprintln!("Error: {e}");
                result.errors += 1;
            }
        }

        progress.inc();
    }

    progress.finish();
    Ok(result)
}

/// Join `path` onto `cwd` if relative, then drop `.` and fold `..` lexically.
fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    normalize_lexically(&joined)
}
