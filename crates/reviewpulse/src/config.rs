use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "reviews.db")
    pub sqlite_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "reviews.db")
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "reviews.db".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env var mutations share process state; keep them in one test
    #[test]
    fn test_sqlite_path() {
        env::remove_var("SQLITE_PATH");
        assert_eq!(Config::from_env().sqlite_path, "reviews.db");

        env::set_var("SQLITE_PATH", "/tmp/reviewpulse-test.db");
        assert_eq!(Config::from_env().sqlite_path, "/tmp/reviewpulse-test.db");
        env::remove_var("SQLITE_PATH");
    }
}
