//! Placeholder map construction.
//! Resolves a template set's token bindings against the values supplied on
//! the command line, producing the ordered map the substitution engines use.

use crate::config::TemplateSet;
use crate::error::{ConfitError, ConfitResult};
use indexmap::IndexMap;
use log::debug;

/// Flag values supplied by a variant invocation, keyed by flag name.
pub type VariantValues = IndexMap<String, String>;

/// Placeholder token to replacement value, in application order.
pub type PlaceholderMap = IndexMap<String, String>;

/// Builds the placeholder map for one invocation.
///
/// Tokens are inserted in the template set's declaration order, which is the
/// order substitution applies them. Values listed in the set's
/// `trim_trailing_slash` have all trailing `/` characters removed first.
///
/// # Arguments
/// * `set` - Template set providing token bindings and normalization
/// * `values` - Flag values from the parsed variant
///
/// # Returns
/// * `ConfitResult<PlaceholderMap>` - Token to final replacement value
///
/// # Errors
/// * `ConfitError::ConfigError` if a binding or a `trim_trailing_slash`
///   entry names a value the variant does not supply
pub fn build_placeholders(
    set: &TemplateSet,
    values: &VariantValues,
) -> ConfitResult<PlaceholderMap> {
    for value_name in &set.trim_trailing_slash {
        if !values.contains_key(value_name) {
            return Err(ConfitError::ConfigError(format!(
                "trim_trailing_slash names unknown value '{}' (supplied: {})",
                value_name,
                values.keys().cloned().collect::<Vec<_>>().join(", ")
            )));
        }
    }

    let mut placeholders = PlaceholderMap::new();

    for (token, value_name) in &set.placeholders {
        let value = values.get(value_name).ok_or_else(|| {
            ConfitError::ConfigError(format!(
                "placeholder '{}' is bound to unknown value '{}' (supplied: {})",
                token,
                value_name,
                values.keys().cloned().collect::<Vec<_>>().join(", ")
            ))
        })?;

        let value = if set.trim_trailing_slash.contains(value_name) {
            debug!("Trimming trailing slashes from '{}'", value_name);
            value.trim_end_matches('/').to_string()
        } else {
            value.clone()
        };

        placeholders.insert(token.clone(), value);
    }

    Ok(placeholders)
}
