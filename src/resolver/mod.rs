//! Hierarchical resolution of properties for a file.
//!
//! Starting at the file's directory and walking toward the filesystem root,
//! each directory's config file contributes the properties of its matching
//! sections and its preamble. Closer directories take precedence over
//! farther ones; within one file, later sections take precedence over earlier
//! ones. Section properties take precedence over preamble properties from any
//! level. The walk stops after a config file declaring `root = true`.

mod cache;
mod fs;

pub use cache::ResolutionCache;
pub use fs::{FileSystem, MemoryFileSystem, OsFileSystem};

use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::editorconfig::{ConfigLevel, DEFAULT_CONFIG_NAME};
use crate::error::ResolveError;
use crate::properties::PropertyTable;

/// Resolver settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// File name looked up in each directory
    pub config_name: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            config_name: DEFAULT_CONFIG_NAME.to_string(),
        }
    }
}

/// Resolves and memoizes the effective properties of files.
pub struct Resolver<F: FileSystem = OsFileSystem> {
    fs: F,
    options: ResolverOptions,
    cache: Arc<ResolutionCache>,
}

impl Resolver<OsFileSystem> {
    /// Resolver over the host filesystem with default options.
    pub fn os() -> Self {
        Self::new(OsFileSystem)
    }
}

impl<F: FileSystem> Resolver<F> {
    pub fn new(fs: F) -> Self {
        Self::with_cache(fs, ResolverOptions::default(), Arc::default())
    }

    pub fn with_options(fs: F, options: ResolverOptions) -> Self {
        Self::with_cache(fs, options, Arc::default())
    }

    /// Use a cache owned by the caller, e.g. one shared with a file watcher
    /// that calls [`ResolutionCache::invalidate_prefix`] on changes.
    pub fn with_cache(fs: F, options: ResolverOptions, cache: Arc<ResolutionCache>) -> Self {
        Self { fs, options, cache }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    pub fn cache(&self) -> &Arc<ResolutionCache> {
        &self.cache
    }

    /// Effective properties for the file at `path`.
    ///
    /// `path` must be absolute; `.` and `..` are folded lexically first, so
    /// `/a/b/../c/f` resolves (and caches) as `/a/c/f`. Results are cached
    /// until invalidated; a cached result is returned without touching the
    /// filesystem.
    pub fn resolve(&self, path: &Path) -> Result<Arc<PropertyTable>, ResolveError> {
        let path = absolute_normalized(path)?;
        Ok(self.cache.get_or_compute(&path, || self.compute(&path)))
    }

    /// Resolve without reading or writing the cache.
    pub fn resolve_uncached(&self, path: &Path) -> Result<PropertyTable, ResolveError> {
        let path = absolute_normalized(path)?;
        Ok(self.compute(&path))
    }

    fn compute(&self, path: &Path) -> PropertyTable {
        let basename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut global = PropertyTable::new();
        let mut sections = PropertyTable::new();
        let mut dir = path.parent();

        while let Some(current) = dir {
            if let Some(level) = self.load_level(current) {
                let relative = relative_path(path, current);
                sections.fill_from(&level.matching_properties(&basename, &relative));
                global.fill_from(&level.global);

                if level.is_root {
                    debug!(dir = %current.display(), "stopping at root config");
                    break;
                }
            }
            dir = current.parent();
        }

        global.overlay(&sections);
        global
    }

    /// Read and compile the config file in `dir`, if there is a readable one.
    fn load_level(&self, dir: &Path) -> Option<ConfigLevel> {
        let config_path = dir.join(&self.options.config_name);
        match self.fs.read_to_string(&config_path) {
            Ok(text) => {
                debug!(path = %config_path.display(), "read config");
                Some(ConfigLevel::from_text(&text))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                debug!(path = %config_path.display(), "skipping unreadable config: {e}");
                None
            }
        }
    }
}

fn absolute_normalized(path: &Path) -> Result<PathBuf, ResolveError> {
    if !path.is_absolute() {
        return Err(ResolveError::RelativePath(path.to_path_buf()));
    }
    Ok(normalize_lexically(path))
}

/// Drop `.` and fold `..` without consulting the filesystem.
///
/// `..` at the root stays at the root. Symlinks are not followed.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// `path` relative to `dir`, `/`-separated.
fn relative_path(path: &Path, dir: &Path) -> String {
    let Ok(rest) = path.strip_prefix(dir) else {
        return String::new();
    };
    rest.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
