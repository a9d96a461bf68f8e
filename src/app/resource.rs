use std::path::{Component, Path, PathBuf};

use crate::http::error::HttpError;

/// Reads static files below a root directory by their URL path.
#[derive(Debug, Clone)]
pub struct StaticResources {
    root: PathBuf,
}

impl StaticResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Contents of the file at `logical_path`, e.g. `/css/styles.css`.
    pub fn read(&self, logical_path: &str) -> Result<String, HttpError> {
        let relative = Path::new(logical_path.trim_start_matches('/'));

        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(HttpError::not_found(logical_path));
        }

        std::fs::read_to_string(self.root.join(relative)).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => HttpError::not_found(logical_path),
            _ => HttpError::from(e),
        })
    }

    /// URL paths of every file under the root, sorted.
    pub fn discover(&self) -> std::io::Result<Vec<String>> {
        let mut paths = Vec::new();
        if self.root.is_dir() {
            collect_files(&self.root, &self.root, &mut paths)?;
        }
        paths.sort();
        Ok(paths)
    }
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<String>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(root, &path, out)?;
        } else if let Ok(relative) = path.strip_prefix(root) {
            let segments: Vec<_> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            out.push(format!("/{}", segments.join("/")));
        }
    }
    Ok(())
}
