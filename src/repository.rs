//! Template repository: enumerates the templates available under a configured
//! root directory and resolves a template name to its file tree.
//! Read-only filesystem inspection; the templates root is always an explicit
//! parameter, never derived from the process working directory.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// A named template and the root of its file tree.
///
/// One descriptor per top-level directory under the templates root.
/// Immutable once enumerated; template internals are opaque payloads.
#[derive(Debug, Clone)]
pub struct TemplateDescriptor {
    pub name: String,
    pub root_path: PathBuf,
}

/// Resolves template names against a templates root directory.
pub struct TemplateRepository {
    templates_root: PathBuf,
}

impl TemplateRepository {
    /// Creates a repository over the given templates root.
    pub fn new<P: AsRef<Path>>(templates_root: P) -> Self {
        Self { templates_root: templates_root.as_ref().to_path_buf() }
    }

    pub fn templates_root(&self) -> &Path {
        &self.templates_root
    }

    /// Lists all available templates, sorted by name.
    ///
    /// Top-level entries that are not directories are skipped.
    ///
    /// # Errors
    /// * `Error::RepositoryUnavailable` if the templates root does not exist
    ///   or cannot be read
    pub fn list(&self) -> Result<Vec<TemplateDescriptor>> {
        let entries = fs::read_dir(&self.templates_root)
            .map_err(|_| self.unavailable())?;

        let mut templates = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| self.unavailable())?;
            let path = entry.path();
            if !path.is_dir() {
                debug!("Skipping non-directory entry: {}", path.display());
                continue;
            }
            match entry.file_name().to_str() {
                Some(name) => templates.push(TemplateDescriptor {
                    name: name.to_string(),
                    root_path: path,
                }),
                None => {
                    debug!("Skipping non-UTF-8 entry: {}", path.display());
                }
            }
        }

        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(templates)
    }

    /// Resolves a template name to its descriptor.
    ///
    /// # Errors
    /// * `Error::RepositoryUnavailable` if the templates root itself is missing
    /// * `Error::TemplateNotFound` if no directory with that name exists
    pub fn resolve(&self, name: &str) -> Result<TemplateDescriptor> {
        if !self.templates_root.is_dir() {
            return Err(self.unavailable());
        }

        // A template name must match a single directory name; anything with
        // path separators or parent components can never name a template and
        // must not escape the templates root.
        if name.is_empty()
            || name == ".."
            || name.contains(std::path::is_separator)
        {
            return Err(Error::TemplateNotFound { template_name: name.to_string() });
        }

        let root_path = self.templates_root.join(name);
        if !root_path.is_dir() {
            return Err(Error::TemplateNotFound { template_name: name.to_string() });
        }

        debug!("Resolved template '{}' to {}", name, root_path.display());

        Ok(TemplateDescriptor { name: name.to_string(), root_path })
    }

    fn unavailable(&self) -> Error {
        Error::RepositoryUnavailable {
            templates_root: self.templates_root.display().to_string(),
        }
    }
}
