use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub guard: GuardConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

/// Redirect targets used by the route guards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Where an unauthenticated user is sent from a protected page.
    pub login_path: String,
    /// Where a non-admin (or already-authenticated) user is sent.
    pub dashboard_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub debug_logging: bool,
    /// Default fixture file for the CLI's in-memory store.
    pub fixture_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("GUARD_LOGIN_PATH") {
            self.guard.login_path = v;
        }
        if let Ok(v) = env::var("GUARD_DASHBOARD_PATH") {
            self.guard.dashboard_path = v;
        }
        if let Ok(v) = env::var("STORE_DEBUG_LOGGING") {
            self.store.debug_logging = v.parse().unwrap_or(self.store.debug_logging);
        }
        if let Ok(v) = env::var("PHARMACY_FIXTURE") {
            self.store.fixture_path = Some(v);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            guard: GuardConfig::default(),
            store: StoreConfig {
                debug_logging: true,
                fixture_path: None,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            guard: GuardConfig::default(),
            store: StoreConfig {
                debug_logging: true,
                fixture_path: None,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            guard: GuardConfig::default(),
            store: StoreConfig {
                debug_logging: false,
                fixture_path: None,
            },
        }
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            dashboard_path: "/dashboard".to_string(),
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
