//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Bare `$VAR` is left alone, so cookies containing `$` survive unchanged.
/// `field` names the config key in the error message.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of a referenced variable that is not set.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_cookie_from_env() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("POSTIE_EXPAND_COOKIE", "oscid=secret");
        }
        let result = expand_env("${POSTIE_EXPAND_COOKIE}", "oschina.cookie").unwrap();
        assert_eq!(result, "oscid=secret");
        unsafe {
            std::env::remove_var("POSTIE_EXPAND_COOKIE");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("POSTIE_EXPAND_UNSET");
        }
        let result = expand_env(
            "https://my.oschina.net/u/${POSTIE_EXPAND_UNSET:-100}",
            "oschina.base_url",
        )
        .unwrap();
        assert_eq!(result, "https://my.oschina.net/u/100");
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("POSTIE_EXPAND_MISSING");
        }
        let err = expand_env("${POSTIE_EXPAND_MISSING}", "oschina.cookie").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let message = err.to_string();
        assert!(message.contains("POSTIE_EXPAND_MISSING"));
        assert!(message.contains("oschina.cookie"));
    }

    #[test]
    fn test_bare_dollar_kept() {
        let result = expand_env("oscid=a$b; user=$USER", "oschina.cookie").unwrap();
        assert_eq!(result, "oscid=a$b; user=$USER");
    }
}
