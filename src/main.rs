//! confit's main application entry point and orchestration logic.
//! Handles command-line argument parsing, the linear preparation flow,
//! and coordinates interactions between different modules.

use confit::{
    cli::{get_args, Args},
    config::load_manifest,
    error::{default_error_handler, ConfitResult},
    placeholders::build_placeholders,
    preparer::{prepare, resolve_base_dir},
    substitute::substituter_for,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Arguments
/// * `args` - Parsed command line arguments
///
/// # Returns
/// * `ConfitResult<()>` - Success or error status of the preparation run
///
/// # Flow
/// 1. Resolves the base directory anchor
/// 2. Loads the manifest (explicit path, discovered file, or built-in)
/// 3. Selects the invoked variant's template set
/// 4. Builds the placeholder map from the supplied flag values
/// 5. Copies each template and rewrites its placeholder tokens
fn run(args: Args) -> ConfitResult<()> {
    let base_dir = resolve_base_dir(args.base_dir)?;
    let manifest = load_manifest(&base_dir, args.manifest.as_deref())?;

    let set = manifest.template_set(args.variant.key())?;
    let values = args.variant.values();
    let placeholders = build_placeholders(set, &values)?;
    let substituter = substituter_for(set.substitution);

    let prepared = prepare(&base_dir, set, &placeholders, &*substituter)?;

    for file in &prepared {
        println!("Prepared: '{}'", file.destination.display());
    }
    println!("{} configured.", set.description.as_deref().unwrap_or(args.variant.key()));
    Ok(())
}
