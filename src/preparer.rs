//! Core preparation pipeline.
//! One linear pass per invocation: resolve paths against the base directory,
//! copy each template to its destination, rewrite the copy's placeholder
//! tokens, report what was written. No retries and no rollback; files
//! written before a failure stay on disk.

use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{TemplateFile, TemplateSet};
use crate::error::{ConfitError, ConfitResult};
use crate::placeholders::PlaceholderMap;
use crate::substitute::Substituter;

/// One destination file produced by a preparation run.
#[derive(Debug)]
pub struct PreparedFile {
    /// Resolved template path
    pub source: PathBuf,
    /// Resolved destination path
    pub destination: PathBuf,
}

/// Resolves the directory against which template and destination paths are
/// anchored.
///
/// # Arguments
/// * `base_dir` - Explicit directory from the command line, if any
///
/// # Returns
/// * `ConfitResult<PathBuf>` - The explicit directory, or the directory
///   containing the running executable when none was given
///
/// # Errors
/// * `ConfitError::InvalidArgumentError` if the directory does not exist
pub fn resolve_base_dir(base_dir: Option<PathBuf>) -> ConfitResult<PathBuf> {
    let dir = match base_dir {
        Some(dir) => dir,
        None => executable_dir()?,
    };

    if !dir.is_dir() {
        return Err(ConfitError::InvalidArgumentError(format!(
            "base directory '{}' does not exist",
            dir.display()
        )));
    }

    Ok(dir)
}

fn executable_dir() -> ConfitResult<PathBuf> {
    let exe = std::env::current_exe().map_err(ConfitError::IoError)?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        ConfitError::InvalidArgumentError(
            "cannot determine the directory containing the executable".to_string(),
        )
    })
}

fn resolve_path(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

fn copy_template(source: &Path, destination: &Path) -> ConfitResult<()> {
    if !source.is_file() {
        return Err(ConfitError::file_access(
            source,
            io::Error::new(io::ErrorKind::NotFound, "template file does not exist"),
        ));
    }

    // fs::copy onto the source path itself truncates the template to zero
    // bytes before reading it, so a self-referential manifest entry must be
    // rejected up front.
    if is_same_file(source, destination) {
        return Err(ConfitError::file_access(
            destination,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "template and destination are the same file",
            ),
        ));
    }

    fs::copy(source, destination)
        .map(|_| ())
        .map_err(|e| ConfitError::file_access(destination, e))
}

fn is_same_file(source: &Path, destination: &Path) -> bool {
    match (source.canonicalize(), destination.canonicalize()) {
        (Ok(source), Ok(destination)) => source == destination,
        // A destination that does not exist yet cannot be the template.
        _ => false,
    }
}

fn read_file(path: &Path) -> ConfitResult<String> {
    fs::read_to_string(path).map_err(|e| ConfitError::file_access(path, e))
}

fn write_file(path: &Path, content: &str) -> ConfitResult<()> {
    fs::write(path, content).map_err(|e| ConfitError::file_access(path, e))
}

/// Prepares every file of a template set, in declaration order.
///
/// Per entry: copy the template over the destination (contents and
/// permissions, full overwrite), read the copy back as text, replace every
/// placeholder occurrence, write the result, truncating.
///
/// # Arguments
/// * `base_dir` - Anchor for relative template and destination paths
/// * `set` - Template set to prepare
/// * `placeholders` - Token to value map for this invocation
/// * `substituter` - Substitution engine configured for the set
///
/// # Returns
/// * `ConfitResult<Vec<PreparedFile>>` - Resolved paths of every written
///   destination, in processing order
///
/// # Errors
/// * `ConfitError::FileAccessError` on a missing template, a destination
///   whose directory is missing or unwritable, a destination that resolves
///   to the same file as its template, or a non-UTF-8 template.
///   Entries processed before the failure remain on disk.
pub fn prepare(
    base_dir: &Path,
    set: &TemplateSet,
    placeholders: &PlaceholderMap,
    substituter: &dyn Substituter,
) -> ConfitResult<Vec<PreparedFile>> {
    debug!("Preparing {} file(s) in {}", set.files.len(), base_dir.display());
    let mut prepared = Vec::with_capacity(set.files.len());

    for TemplateFile { source, destination } in &set.files {
        let source = resolve_path(base_dir, source);
        let destination = resolve_path(base_dir, destination);

        debug!("Copying file: {} -> {}", source.display(), destination.display());
        copy_template(&source, &destination)?;

        let content = read_file(&destination)?;
        let substituted = substituter.substitute(&content, placeholders)?;

        debug!("Writing file: {}", destination.display());
        write_file(&destination, &substituted)?;

        prepared.push(PreparedFile { source, destination });
    }

    Ok(prepared)
}
