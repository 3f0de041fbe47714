use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Runtime settings for the storefront client.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the hosted document store's REST endpoint.
    pub store_url: String,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    /// Duration of a flash sale, used to derive the countdown target.
    pub flash_sale_hours: u64,
    /// Discount percentage applied by flash-sale styling when a product
    /// carries no discount field.
    pub default_discount_pct: f64,
}

/// Load store configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_store_config() -> Result<StoreConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_store_config_from_env()
}

/// Load store configuration from environment variables already in the process.
///
/// Unlike [`load_store_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_store_config_from_env() -> Result<StoreConfig, ConfigError> {
    build_store_config(|key| std::env::var(key))
}

/// Build store configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_store_config<F>(lookup: F) -> Result<StoreConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let store_url = require("VITRINE_STORE_URL")?;

    let fetch_timeout_secs = parse_u64("VITRINE_FETCH_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("VITRINE_USER_AGENT", "vitrine/0.1 (storefront)");
    let flash_sale_hours = parse_u64("VITRINE_FLASH_SALE_HOURS", "48")?;

    let default_discount_pct = parse_f64("VITRINE_DEFAULT_DISCOUNT_PCT", "15")?;
    if !(0.0..=100.0).contains(&default_discount_pct) {
        return Err(ConfigError::InvalidEnvVar {
            var: "VITRINE_DEFAULT_DISCOUNT_PCT".to_string(),
            reason: format!("{default_discount_pct} is not a percentage in [0, 100]"),
        });
    }

    Ok(StoreConfig {
        store_url,
        fetch_timeout_secs,
        user_agent,
        flash_sale_hours,
        default_discount_pct,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid values.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("VITRINE_STORE_URL", "https://store.example.com/v1");
        m
    }

    #[test]
    fn missing_store_url_is_an_error() {
        let env = HashMap::new();
        let err = build_store_config(lookup_from_map(&env)).unwrap_err();
        assert!(
            matches!(err, ConfigError::MissingEnvVar(ref var) if var == "VITRINE_STORE_URL"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn defaults_apply_when_optional_vars_absent() {
        let env = full_env();
        let config = build_store_config(lookup_from_map(&env)).unwrap();
        assert_eq!(config.store_url, "https://store.example.com/v1");
        assert_eq!(config.fetch_timeout_secs, 30);
        assert_eq!(config.flash_sale_hours, 48);
        assert_eq!(config.default_discount_pct, 15.0);
    }

    #[test]
    fn overrides_are_parsed() {
        let mut env = full_env();
        env.insert("VITRINE_FETCH_TIMEOUT_SECS", "5");
        env.insert("VITRINE_FLASH_SALE_HOURS", "24");
        env.insert("VITRINE_DEFAULT_DISCOUNT_PCT", "10.5");
        let config = build_store_config(lookup_from_map(&env)).unwrap();
        assert_eq!(config.fetch_timeout_secs, 5);
        assert_eq!(config.flash_sale_hours, 24);
        assert_eq!(config.default_discount_pct, 10.5);
    }

    #[test]
    fn non_numeric_timeout_is_an_error() {
        let mut env = full_env();
        env.insert("VITRINE_FETCH_TIMEOUT_SECS", "soon");
        let err = build_store_config(lookup_from_map(&env)).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "VITRINE_FETCH_TIMEOUT_SECS")
        );
    }

    #[test]
    fn out_of_range_discount_is_an_error() {
        let mut env = full_env();
        env.insert("VITRINE_DEFAULT_DISCOUNT_PCT", "150");
        let err = build_store_config(lookup_from_map(&env)).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "VITRINE_DEFAULT_DISCOUNT_PCT")
        );
    }
}
