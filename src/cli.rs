//! Command-line interface implementation for confit.
//! Provides argument parsing and the per-variant flag contracts using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::placeholders::VariantValues;

/// Command-line arguments structure for confit.
#[derive(Parser, Debug)]
#[command(author, version, about = "confit: example application configuration preparer", long_about = None)]
pub struct Args {
    /// Directory against which template and destination paths resolve.
    /// Defaults to the directory containing the confit executable.
    #[arg(short = 'd', long, value_name = "DIR", global = true)]
    pub base_dir: Option<PathBuf>,

    /// Manifest file overriding the built-in template sets
    #[arg(short, long, value_name = "FILE", global = true)]
    pub manifest: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Which sample application to configure
    #[command(subcommand)]
    pub variant: Variant,
}

/// One subcommand per historical preparation script, each keeping its
/// original flag names and short options.
#[derive(Subcommand, Debug)]
pub enum Variant {
    /// Configure the example client application
    App {
        /// Your service URL
        #[arg(short, long, value_name = "URL")]
        baseurl: String,

        /// Your mobile app client ID
        #[arg(short, long, value_name = "ID")]
        clientid: String,

        /// Your application backend URL
        #[arg(short, long, value_name = "URL")]
        appbackendurl: String,
    },
    /// Configure the tenant backend sample
    Backend {
        /// Your tenant service URL
        #[arg(short, long, value_name = "URL")]
        baseurl: String,

        /// Your tenant ID
        #[arg(short, long, value_name = "ID")]
        tenantid: String,

        /// Your tenant admin key
        #[arg(short, long, value_name = "KEY")]
        adminkey: String,
    },
    /// Configure the mobile host sample
    Host {
        /// Your host ID
        #[arg(short = 's', long, value_name = "ID")]
        hostid: String,

        /// Your tenant ID
        #[arg(short, long, value_name = "ID")]
        tenantid: String,

        /// Your tenant admin key
        #[arg(short, long, value_name = "KEY")]
        adminkey: String,
    },
}

impl Variant {
    /// Manifest key identifying this variant's template set.
    pub fn key(&self) -> &'static str {
        match self {
            Variant::App { .. } => "app",
            Variant::Backend { .. } => "backend",
            Variant::Host { .. } => "host",
        }
    }

    /// Supplied flag values keyed by flag name, in declaration order.
    pub fn values(&self) -> VariantValues {
        let mut values = VariantValues::new();
        match self {
            Variant::App { baseurl, clientid, appbackendurl } => {
                values.insert("baseurl".to_string(), baseurl.clone());
                values.insert("clientid".to_string(), clientid.clone());
                values.insert("appbackendurl".to_string(), appbackendurl.clone());
            }
            Variant::Backend { baseurl, tenantid, adminkey } => {
                values.insert("baseurl".to_string(), baseurl.clone());
                values.insert("tenantid".to_string(), tenantid.clone());
                values.insert("adminkey".to_string(), adminkey.clone());
            }
            Variant::Host { hostid, tenantid, adminkey } => {
                values.insert("hostid".to_string(), hostid.clone());
                values.insert("tenantid".to_string(), tenantid.clone());
                values.insert("adminkey".to_string(), adminkey.clone());
            }
        }
        values
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With a diagnostic on stderr and a non-zero status code if required
///   arguments are missing, before any file operation begins
/// * With clap's default handling for `--help` and `--version`
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    }
}
