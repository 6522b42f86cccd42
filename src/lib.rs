//! confit prepares example-application configuration files from templates.
//! It copies each versioned template to its destination path and replaces
//! literal placeholder tokens with values supplied on the command line.

/// Command-line interface module for the confit application
pub mod cli;

/// Manifest handling for confit template sets
/// Supports JSON and YAML formats (confit.json, confit.yml, confit.yaml)
pub mod config;

/// Error types and handling for the confit application
pub mod error;

/// Placeholder map construction from a template set's token bindings
/// and the values supplied by the invoked variant
pub mod placeholders;

/// Core preparation pipeline
/// Copies each template and rewrites its placeholder tokens in place
pub mod preparer;

/// Literal substring substitution engines
pub mod substitute;
