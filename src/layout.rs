//! Theme file discovery
//!
//! Maps theme names to SVG previews (`<sources>/<prefix><name>.<ext>`) and
//! generated files (`<themes>/<name>.<ext>`), and lists what is on disk.

use crate::config::Config;
use crate::extract;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Source and output locations for one run
#[derive(Debug, Clone)]
pub struct Layout {
    pub sources_dir: PathBuf,
    pub themes_dir: PathBuf,
    pub source_prefix: String,
    pub source_extension: String,
    pub theme_extension: String,
}

impl Layout {
    pub fn from_config(config: &Config) -> Self {
        Self {
            sources_dir: config.sources_dir.clone(),
            themes_dir: config.themes_dir.clone(),
            source_prefix: config.source_prefix.clone(),
            source_extension: config.source_extension.clone(),
            theme_extension: config.theme_extension.clone(),
        }
    }

    /// SVG preview path for a theme
    pub fn source_path(&self, name: &str) -> PathBuf {
        self.sources_dir.join(format!(
            "{}{name}.{}",
            self.source_prefix, self.source_extension
        ))
    }

    /// Generated theme file path for a theme
    pub fn theme_path(&self, name: &str) -> PathBuf {
        self.themes_dir
            .join(format!("{name}.{}", self.theme_extension))
    }

    /// Theme name for an SVG preview path
    pub fn theme_name(&self, source: &Path) -> String {
        extract::theme_name(source, &self.source_prefix)
    }

    /// SVG previews as `(theme name, path)`, sorted by file name
    pub fn sources(&self) -> io::Result<Vec<(String, PathBuf)>> {
        let paths = list_files(&self.sources_dir, |file_name| {
            file_name.starts_with(&self.source_prefix)
                && has_extension(file_name, &self.source_extension)
        })?;

        Ok(paths
            .into_iter()
            .map(|path| (self.theme_name(&path), path))
            .collect())
    }

    /// Generated theme files as `(theme name, path)`, sorted by file name
    pub fn themes(&self) -> io::Result<Vec<(String, PathBuf)>> {
        let paths = list_files(&self.themes_dir, |file_name| {
            has_extension(file_name, &self.theme_extension)
        })?;

        Ok(paths
            .into_iter()
            .map(|path| {
                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                (name, path)
            })
            .collect())
    }
}

fn has_extension(file_name: &str, extension: &str) -> bool {
    file_name
        .strip_suffix(extension)
        .and_then(|rest| rest.strip_suffix('.'))
        .is_some_and(|stem| !stem.is_empty())
}

/// Regular files in `dir` whose names pass `keep`; a missing directory is empty
fn list_files<F>(dir: &Path, keep: F) -> io::Result<Vec<PathBuf>>
where
    F: Fn(&str) -> bool,
{
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        if keep(&*file_name.to_string_lossy()) {
            paths.push(entry.path());
        }
    }

    paths.sort();
    Ok(paths)
}
