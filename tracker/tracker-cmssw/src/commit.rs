//! Staged commit of a document set.
//!
//! Documents are first written into a hidden staging directory inside the
//! output directory. Only when all of them are written are they renamed into
//! place. Files they replace are moved to a hidden backup directory first, so
//! a failed rename can restore the previous state. Both directories live on
//! the output directory's filesystem and are removed when dropped.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::engine::{BuiltDocument, Subsystem};
use crate::error::{Result, TranslateError};
use crate::writer::DocumentWriter;

const STAGING_PREFIX: &str = ".tk2cmssw-staging-";
const BACKUP_PREFIX: &str = ".tk2cmssw-backup-";

/// Documents written to a staging directory, ready to be moved into place.
#[derive(Debug)]
pub(crate) struct StagedSet {
    subsystem: Subsystem,
    dir: TempDir,
    file_names: Vec<String>,
}

/// Write every document into a fresh staging directory inside `output_dir`.
pub(crate) fn stage(
    subsystem: Subsystem,
    documents: &[BuiltDocument],
    writer: &dyn DocumentWriter,
    output_dir: &Path,
) -> Result<StagedSet> {
    let mut seen = HashSet::new();
    if let Some(doc) = documents.iter().find(|d| !seen.insert(d.file_name.as_str())) {
        return Err(TranslateError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("file name '{}' is configured for more than one document", doc.file_name),
        )));
    }

    fs::create_dir_all(output_dir)?;
    let dir = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(output_dir)?;

    let mut file_names = Vec::with_capacity(documents.len());
    for doc in documents {
        let path = dir.path().join(&doc.file_name);
        writer
            .write(&doc.root, &path)
            .map_err(|source| TranslateError::Write {
                subsystem,
                document: doc.kind,
                path: path.clone(),
                source,
            })?;
        tracing::debug!(document = %doc.kind, path = %path.display(), "document staged");
        file_names.push(doc.file_name.clone());
    }

    Ok(StagedSet {
        subsystem,
        dir,
        file_names,
    })
}

impl StagedSet {
    /// Move the staged files into `output_dir`, returning how many existing files were replaced.
    pub(crate) fn commit(self, output_dir: &Path) -> Result<usize> {
        fs::create_dir_all(output_dir)?;
        let backup = tempfile::Builder::new()
            .prefix(BACKUP_PREFIX)
            .tempdir_in(output_dir)?;

        install(self.dir.path(), &self.file_names, output_dir, backup.path()).map_err(
            |(path, source)| TranslateError::Commit {
                subsystem: self.subsystem,
                path,
                source,
            },
        )
    }
}

/// Rename staged files into `output_dir`, backing up the files they replace.
///
/// On failure every installed file is removed and every backup restored
/// before the failing path is returned.
fn install(
    staging: &Path,
    file_names: &[String],
    output_dir: &Path,
    backup: &Path,
) -> std::result::Result<usize, (PathBuf, io::Error)> {
    let mut backed_up: Vec<&str> = Vec::new();
    let mut installed: Vec<&str> = Vec::new();

    for name in file_names {
        let target = output_dir.join(name);
        let step = move_aside(&target, &backup.join(name)).and_then(|moved| {
            if moved {
                backed_up.push(name);
            }
            fs::rename(staging.join(name), &target)
        });
        if let Err(err) = step {
            tracing::warn!(path = %target.display(), error = %err, "commit failed, rolling back");
            rollback(output_dir, backup, &installed, &backed_up);
            return Err((target, err));
        }
        installed.push(name);
    }
    Ok(backed_up.len())
}

/// Move `target` to `backup` if it exists; true if something was moved.
fn move_aside(target: &Path, backup: &Path) -> io::Result<bool> {
    match fs::symlink_metadata(target) {
        Ok(_) => fs::rename(target, backup).map(|()| true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

fn rollback(output_dir: &Path, backup: &Path, installed: &[&str], backed_up: &[&str]) {
    for name in installed {
        let path = output_dir.join(name);
        if let Err(err) = fs::remove_file(&path) {
            tracing::warn!(path = %path.display(), error = %err, "could not remove new file");
        }
    }
    for name in backed_up {
        let path = output_dir.join(name);
        if let Err(err) = fs::rename(backup.join(name), &path) {
            tracing::warn!(path = %path.display(), error = %err, "could not restore previous file");
        }
    }
}
