//! Project instancing: copies a resolved template tree into a fresh target
//! directory, then applies substitution rules to the declared files.
//! Copying is best-effort with per-file failure reporting; only the entry
//! guard and target-directory creation can fail the whole call.

use crate::error::{Error, FileError, FileErrorCause, Result};
use crate::report::ScaffoldResult;
use crate::repository::TemplateRepository;
use crate::substitution::{self, SubstitutionRule};
use log::debug;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Everything needed for one instancing run. Constructed once per invocation.
#[derive(Debug)]
pub struct ScaffoldRequest {
    /// Name of the template to instantiate
    pub template_name: String,
    /// Directory to create; must not exist yet
    pub target_dir: PathBuf,
    /// Substitution rules, applied in declaration order after copying
    pub rules: Vec<SubstitutionRule>,
}

/// Orchestrates template resolution, tree copying and substitution.
pub struct Instancer<'a> {
    repository: &'a TemplateRepository,
}

impl<'a> Instancer<'a> {
    pub fn new(repository: &'a TemplateRepository) -> Self {
        Self { repository }
    }

    /// Scaffolds a new project from the request's template.
    ///
    /// # Returns
    /// * `Result<ScaffoldResult>` - accumulated created/substituted files and
    ///   per-file errors
    ///
    /// # Errors
    /// Fatal, returned before or without leaving a partial target directory:
    /// * `Error::TemplateNotFound` if the template name does not resolve
    /// * `Error::TargetAlreadyExists` if the target directory exists; the
    ///   instancer never merges into or overwrites an existing directory
    /// * `Error::TargetCreationFailed` if the target directory cannot be
    ///   created
    ///
    /// Per-file copy and substitution failures are not errors of this call;
    /// they are reported in the result and do not stop remaining work.
    pub fn instance(&self, request: &ScaffoldRequest) -> Result<ScaffoldResult> {
        let template = self.repository.resolve(&request.template_name)?;
        let target_dir = &request.target_dir;

        // exists() follows symlinks, so a dangling link occupying the name
        // would slip past it; symlink_metadata() sees the link itself.
        if target_dir.symlink_metadata().is_ok() {
            return Err(Error::TargetAlreadyExists {
                target_dir: target_dir.display().to_string(),
            });
        }

        // Only the target directory itself; template-internal subdirectories
        // are created by the copy pass.
        fs::create_dir(target_dir).map_err(|source| Error::TargetCreationFailed {
            target_dir: target_dir.display().to_string(),
            source,
        })?;

        debug!(
            "Instancing template '{}' into {}",
            template.name,
            target_dir.display()
        );

        let mut created_files = BTreeSet::new();
        let mut errors = Vec::new();
        copy_tree(&template.root_path, target_dir, &mut created_files, &mut errors);

        let mut substituted_files = BTreeSet::new();
        for rule in &request.rules {
            apply_rule(rule, target_dir, &created_files, &mut substituted_files, &mut errors);
        }

        Ok(ScaffoldResult::new(created_files, substituted_files, errors))
    }
}

/// Copies the template tree under `target_dir`, preserving relative paths.
///
/// The walk is sorted by file name so that the recorded sets and error order
/// are deterministic, and directories are always visited before their
/// contents. A failed directory creation surfaces again as a copy failure
/// for each file that depended on it.
fn copy_tree(
    template_root: &Path,
    target_dir: &Path,
    created_files: &mut BTreeSet<PathBuf>,
    errors: &mut Vec<FileError>,
) {
    let walker = WalkDir::new(template_root).min_depth(1).sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map(|p| relative_to(p, template_root))
                    .unwrap_or_default();
                errors.push(FileError::new(path, FileErrorCause::CopyFailed(err.into())));
                continue;
            }
        };

        let relative = relative_to(entry.path(), template_root);
        let destination = target_dir.join(&relative);

        if entry.file_type().is_dir() {
            debug!("Creating directory: {}", destination.display());
            if let Err(err) = fs::create_dir_all(&destination) {
                errors.push(FileError::new(relative, FileErrorCause::CopyFailed(err)));
            }
        } else {
            debug!("Copying file: {}", destination.display());
            match fs::copy(entry.path(), &destination) {
                Ok(_) => {
                    created_files.insert(relative);
                }
                Err(err) => {
                    errors.push(FileError::new(relative, FileErrorCause::CopyFailed(err)));
                }
            }
        }
    }
}

/// Rewrites one declared file in place with the rule's token values.
///
/// A rule whose file was not successfully copied is reported as
/// `SubstitutionTargetMissing`; the file is never invented.
fn apply_rule(
    rule: &SubstitutionRule,
    target_dir: &Path,
    created_files: &BTreeSet<PathBuf>,
    substituted_files: &mut BTreeSet<PathBuf>,
    errors: &mut Vec<FileError>,
) {
    if !created_files.contains(&rule.relative_path) {
        errors.push(FileError::new(
            rule.relative_path.clone(),
            FileErrorCause::SubstitutionTargetMissing,
        ));
        return;
    }

    let file_path = target_dir.join(&rule.relative_path);
    debug!("Substituting tokens in: {}", file_path.display());

    let rewritten = fs::read_to_string(&file_path)
        .map(|content| substitution::apply(&content, &rule.tokens))
        .and_then(|content| fs::write(&file_path, content));

    match rewritten {
        Ok(()) => {
            substituted_files.insert(rule.relative_path.clone());
        }
        Err(err) => {
            errors.push(FileError::new(
                rule.relative_path.clone(),
                FileErrorCause::SubstitutionWriteFailed(err),
            ));
        }
    }
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
