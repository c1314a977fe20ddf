//! Environment variable expansion for configuration strings.

use std::borrow::Cow;
use std::env::VarError;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Only strings containing `${` are expanded, so color values and bare
/// `$VAR` text pass through untouched. `field` names the setting in errors.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    match shellexpand::env(value) {
        Ok(expanded) => Ok(Cow::into_owned(expanded)),
        Err(err) => {
            let reason = match err.cause {
                VarError::NotPresent => "not set",
                VarError::NotUnicode(_) => "not valid unicode",
            };
            Err(ConfigError::EnvVar {
                field: field.to_owned(),
                message: format!("${{{}}} {reason}", err.var_name),
            })
        }
    }
}
