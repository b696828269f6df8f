use ignore::WalkBuilder;
use std::io;
use std::path::PathBuf;

use crate::config::WalkSettings;

/// Expand paths into the files to resolve.
///
/// A file path is yielded as-is, even if hidden or ignored, since it was
/// named explicitly. A directory is walked recursively; `settings` controls
/// whether hidden files and `.gitignore` rules apply. Config files named
/// `.editorconfig` are hidden and so skipped by default.
pub fn walk_paths(
    paths: &[PathBuf],
    settings: &WalkSettings,
) -> impl Iterator<Item = io::Result<PathBuf>> {
    let mut all_files = vec![];

    for path in paths {
        if path.is_file() {
            all_files.push(Ok(path.clone()));
            continue;
        }
        if !path.exists() {
            all_files.push(Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file or directory: {}", path.display()),
            )));
            continue;
        }

        let walker = WalkBuilder::new(path)
            .hidden(!settings.hidden)
            .git_ignore(settings.git_ignore)
            .git_global(settings.git_ignore)
            .git_exclude(settings.git_ignore)
            .sort_by_file_path(|a, b| a.cmp(b))
            .build();

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_file()) {
                        all_files.push(Ok(entry.into_path()));
                    }
                }
                Err(e) => {
                    all_files.push(Err(io::Error::other(e.to_string())));
                }
            }
        }
    }

    all_files.into_iter()
}
