use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table name (default: "goaltracker")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub table_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - DynamoDB table name (default: "goaltracker")
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("DYNAMODB_TABLE_NAME")
                .unwrap_or_else(|_| "goaltracker".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
