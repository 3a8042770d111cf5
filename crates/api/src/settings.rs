//! Service Settings

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime configuration for the service
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Listen address for the HTTP server
    pub listen_addr: String,
    /// Path to the trained estimator artifact; absence selects rule-only mode
    pub model_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            model_path: "models/failure_model.onnx".to_string(),
        }
    }
}

impl Settings {
    /// Layered load: baked-in defaults, then an optional `noderisk.toml`,
    /// then `NODERISK_*` environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Settings::default();

        Config::builder()
            .set_default("listen_addr", defaults.listen_addr)?
            .set_default("model_path", defaults.model_path)?
            .add_source(File::with_name("noderisk").required(false))
            .add_source(Environment::with_prefix("NODERISK"))
            .build()?
            .try_deserialize()
    }
}
