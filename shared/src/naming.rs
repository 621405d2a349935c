use crate::ProfileError;

/// Environment variable carrying the profile table name, set by CDK
pub const TABLE_NAME_VAR: &str = "TABLE_NAME";

/// Configuration resolved once at cold start
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub table_name: String,
}

impl RuntimeConfig {
    /// Create runtime config from the Lambda environment
    pub fn from_env() -> Result<Self, ProfileError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create runtime config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProfileError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = lookup(TABLE_NAME_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ProfileError::Config(format!("{} not set", TABLE_NAME_VAR)))?;

        Ok(Self { table_name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_table_name_from_lookup() {
        let vars = HashMap::from([("TABLE_NAME".to_string(), "appre-test-users".to_string())]);

        let config = RuntimeConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();

        assert_eq!(config.table_name, "appre-test-users");
    }

    #[test]
    fn test_missing_table_name_is_config_error() {
        let err = RuntimeConfig::from_lookup(|_| None).unwrap_err();

        assert!(matches!(err, ProfileError::Config(_)));
        assert_eq!(err.to_string(), "Configuration error: TABLE_NAME not set");
    }

    #[test]
    fn test_blank_table_name_is_rejected() {
        let result = RuntimeConfig::from_lookup(|_| Some("  ".to_string()));

        assert!(result.is_err());
    }
}
