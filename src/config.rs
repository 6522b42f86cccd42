//! Manifest handling for confit template sets.
//! This module provides functionality for loading and parsing the manifest
//! that maps each variant to its template files and placeholder bindings.

use crate::error::{ConfitError, ConfitResult};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Supported manifest file names, tried in order inside the base directory
pub const MANIFEST_FILES: [&str; 3] = ["confit.json", "confit.yml", "confit.yaml"];

/// Built-in manifest mirroring the historical preparation scripts
pub const DEFAULT_MANIFEST: &str = include_str!("confit.default.yml");

/// How placeholder tokens are applied to a destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubstitutionMode {
    /// Chained `replace` per token in binding order; a value containing a
    /// later token's literal text is substituted again by that later step
    #[default]
    Sequential,
    /// One left-to-right pass over the text; emitted values are never
    /// rescanned by other tokens
    Simultaneous,
}

/// A single template to copy and rewrite.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateFile {
    /// Template path, resolved against the base directory when relative
    pub source: PathBuf,
    /// Output path, resolved against the base directory when relative
    pub destination: PathBuf,
}

/// Everything one variant needs: which files to prepare, which tokens to
/// replace, and how.
#[derive(Debug, Deserialize)]
pub struct TemplateSet {
    /// Human-readable name used in the completion message
    #[serde(default)]
    pub description: Option<String>,

    /// Ordered (source, destination) pairs; processed in declaration order
    pub files: Vec<TemplateFile>,

    /// Token to value-name bindings. Declaration order is the order in
    /// which tokens are applied during substitution.
    #[serde(default)]
    pub placeholders: IndexMap<String, String>,

    /// Value names whose supplied strings are stripped of trailing slashes
    /// before substitution. Every entry must name a value the variant
    /// supplies.
    #[serde(default)]
    pub trim_trailing_slash: Vec<String>,

    /// Substitution engine for this set
    #[serde(default)]
    pub substitution: SubstitutionMode,
}

/// Parsed manifest: an ordered map from variant key to template set.
#[derive(Debug)]
pub struct Manifest {
    sets: IndexMap<String, TemplateSet>,
}

impl Manifest {
    /// Looks up the template set for a variant key.
    ///
    /// # Arguments
    /// * `key` - Variant key (`app`, `backend`, `host`)
    ///
    /// # Returns
    /// * `ConfitResult<&TemplateSet>` - The set defined for the key
    ///
    /// # Errors
    /// * `ConfitError::ConfigError` if the key is absent or its file list
    ///   is empty
    pub fn template_set(&self, key: &str) -> ConfitResult<&TemplateSet> {
        let set = self.sets.get(key).ok_or_else(|| {
            ConfitError::ConfigError(format!(
                "no template set named '{}' in manifest (available: {})",
                key,
                self.sets.keys().cloned().collect::<Vec<_>>().join(", ")
            ))
        })?;

        if set.files.is_empty() {
            return Err(ConfitError::ConfigError(format!(
                "template set '{}' defines no files",
                key
            )));
        }

        Ok(set)
    }

    /// Variant keys in declaration order.
    pub fn variant_keys(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }
}

/// Loads the manifest for an invocation.
///
/// Resolution order: an explicit `--manifest` path wins; otherwise the
/// manifest files are tried inside the base directory; otherwise the
/// built-in manifest is used.
///
/// # Arguments
/// * `base_dir` - Directory searched for manifest files
/// * `manifest_path` - Explicit manifest path from the command line
///
/// # Returns
/// * `ConfitResult<Manifest>` - The parsed manifest
///
/// # Errors
/// * `ConfitError::InvalidArgumentError` if an explicit path is not a file
/// * `ConfitError::ConfigError` if the manifest cannot be parsed
pub fn load_manifest(base_dir: &Path, manifest_path: Option<&Path>) -> ConfitResult<Manifest> {
    if let Some(path) = manifest_path {
        if !path.is_file() {
            return Err(ConfitError::InvalidArgumentError(format!(
                "manifest '{}' does not exist",
                path.display()
            )));
        }
        debug!("Loading manifest from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| ConfitError::file_access(path, e))?;
        return parse_manifest(&content);
    }

    for file in MANIFEST_FILES {
        let path = base_dir.join(file);
        if path.exists() {
            debug!("Loading manifest from {}", path.display());
            let content =
                fs::read_to_string(&path).map_err(|e| ConfitError::file_access(&path, e))?;
            return parse_manifest(&content);
        }
    }

    debug!("No manifest file found, using the built-in template sets");
    parse_manifest(DEFAULT_MANIFEST)
}

/// Parses manifest content.
///
/// # Arguments
/// * `content` - Raw manifest content as string
///
/// # Returns
/// * `ConfitResult<Manifest>` - Parsed manifest with declaration order kept
///
/// # Errors
/// * `ConfitError::ConfigError` if parsing fails
///
/// # Note
/// Tries JSON first, then YAML, mirroring the supported file formats.
pub fn parse_manifest(content: &str) -> ConfitResult<Manifest> {
    let sets: IndexMap<String, TemplateSet> = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| ConfitError::ConfigError(format!("Invalid manifest format: {}", e)))?,
    };

    Ok(Manifest { sets })
}
