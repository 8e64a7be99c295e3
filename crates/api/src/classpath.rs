//! The resolved value returned by a classpath lookup.
//!
//! A [`ClassPath`] stores one ordered list of files and derives every other
//! representation (URIs, URLs, a joined search path) from it on demand.

use crate::error::{ClassPathError, ClassPathResult};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use url::Url;

/// Immutable, ordered collection of classpath entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassPath {
    files: Vec<PathBuf>,
}

impl ClassPath {
    /// Copy `files` into a new classpath, keeping their order.
    pub fn new(files: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            files: files.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The entries as plain filesystem paths, in original order.
    pub fn as_files(&self) -> &[PathBuf] {
        &self.files
    }

    /// The entries as `file:` URIs.
    ///
    /// Relative entries resolve against the current working directory.
    /// Fails on the first entry that cannot be expressed as a URI; no entry
    /// is ever skipped.
    pub fn as_uris(&self) -> ClassPathResult<Vec<lsp_types::Uri>> {
        self.files
            .iter()
            .map(|path| {
                let url = file_url(path, "URI")?;
                url.as_str()
                    .parse::<lsp_types::Uri>()
                    .map_err(|e| ClassPathError::conversion(path, "URI", e.to_string()))
            })
            .collect()
    }

    /// The entries as `file:` URLs.
    pub fn as_urls(&self) -> ClassPathResult<Vec<Url>> {
        self.files.iter().map(|path| file_url(path, "URL")).collect()
    }

    /// Join the entries with the platform path-list separator, the form
    /// accepted by `java -classpath`.
    pub fn to_search_path(&self) -> ClassPathResult<OsString> {
        if let Some(path) = self.files.iter().find(|p| std::env::join_paths([p]).is_err()) {
            return Err(ClassPathError::conversion(
                path,
                "search path",
                "entry contains the path list separator",
            ));
        }
        std::env::join_paths(&self.files)
            .map_err(|e| ClassPathError::conversion(PathBuf::new(), "search path", e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.files.iter()
    }
}

impl<'a> IntoIterator for &'a ClassPath {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Relative entries are made absolute against the working directory. This is
/// path arithmetic only; symlinks and `..` are left as they are.
fn file_url(path: &Path, target: &'static str) -> ClassPathResult<Url> {
    let absolute = std::path::absolute(path)
        .map_err(|e| ClassPathError::conversion(path, target, e.to_string()))?;
    Url::from_file_path(&absolute)
        .map_err(|_| ClassPathError::conversion(path, target, "not a file path"))
}
