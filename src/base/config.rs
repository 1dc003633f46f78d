//! Load configuration via `config` crate with env-override support.

use std::{net::SocketAddr, ops::Deref, path::Path, sync::Arc};

use serde::Deserialize;

use super::types::Res;

/// Default base URL of the OpenAI-compatible inference server (a local Ollama).
fn default_llm_api_base() -> String {
    "http://localhost:11434/v1".to_string()
}

/// Default API key; local inference servers accept anything.
fn default_llm_api_key() -> String {
    "dummy_key".to_string()
}

/// Default model to use.
fn default_llm_model() -> String {
    "llama3".to_string()
}

/// Default sampling temperature.
fn default_llm_temperature() -> f32 {
    0.7
}

/// Default location of the facts document.
fn default_facts_path() -> String {
    "my_facts.txt".to_string()
}

/// Default listen address.
fn default_bind_address() -> String {
    "127.0.0.1:5000".to_string()
}

/// Configuration for the lannz-ai application.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<ConfigInner> for Config {
    fn from(inner: ConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// Base URL of the OpenAI-compatible API (`LANNZ_AI_LLM_API_BASE`).
    #[serde(default = "default_llm_api_base")]
    pub llm_api_base: String,
    /// API key sent to the inference server (`LANNZ_AI_LLM_API_KEY`).
    #[serde(default = "default_llm_api_key")]
    pub llm_api_key: String,
    /// Model identifier (`LANNZ_AI_LLM_MODEL`).
    #[serde(default = "default_llm_model")]
    pub llm_model: String,
    /// Sampling temperature (`LANNZ_AI_LLM_TEMPERATURE`).
    /// Value between 0 and 2. Higher values like 0.8 make output more random,
    /// while lower values like 0.2 make it more focused and deterministic.
    #[serde(default = "default_llm_temperature")]
    pub llm_temperature: f32,
    /// Upstream HTTP timeout in seconds (`LANNZ_AI_LLM_TIMEOUT_SECS`).
    /// When unset, the HTTP client default applies.
    #[serde(default)]
    pub llm_timeout_secs: Option<u64>,
    /// Path to the facts document (`LANNZ_AI_FACTS_PATH`).
    #[serde(default = "default_facts_path")]
    pub facts_path: String,
    /// Address the HTTP server binds to (`LANNZ_AI_BIND_ADDRESS`).
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            llm_api_base: default_llm_api_base(),
            llm_api_key: default_llm_api_key(),
            llm_model: default_llm_model(),
            llm_temperature: default_llm_temperature(),
            llm_timeout_secs: None,
            facts_path: default_facts_path(),
            bind_address: default_bind_address(),
        }
    }
}

impl Config {
    /// Load the configuration.
    ///
    /// Values come from the config file (the explicit path, or `.hidden/config.toml` if it exists),
    /// overridden by `LANNZ_AI_*` environment variables.
    pub fn load(explicit_path: Option<&Path>) -> Res<Self> {
        let mut cfg = config::Config::builder();

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        cfg = cfg.add_source(config::Environment::default().prefix("LANNZ_AI"));

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    /// Check the loaded values for sanity.
    pub fn validate(&self) -> Res<()> {
        if self.llm_api_base.trim().is_empty() {
            return Err(anyhow::anyhow!("LLM API base URL must not be empty."));
        }

        if self.llm_model.trim().is_empty() {
            return Err(anyhow::anyhow!("LLM model must not be empty."));
        }

        if !(0.0..=2.0).contains(&self.llm_temperature) {
            return Err(anyhow::anyhow!("LLM temperature must be between 0 and 2."));
        }

        if self.llm_timeout_secs == Some(0) {
            return Err(anyhow::anyhow!("LLM timeout must be at least 1 second."));
        }

        self.socket_addr()?;

        Ok(())
    }

    /// The parsed listen address.
    pub fn socket_addr(&self) -> Res<SocketAddr> {
        self.bind_address
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid bind address `{}`: {e}", self.bind_address))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("lannz-ai-{}-{name}.toml", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_match_local_ollama() {
        let config = Config::default();

        assert_eq!(config.llm_api_base, "http://localhost:11434/v1");
        assert_eq!(config.llm_model, "llama3");
        assert_eq!(config.llm_temperature, 0.7);
        assert_eq!(config.facts_path, "my_facts.txt");
        assert_eq!(config.socket_addr().unwrap().port(), 5000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let path = write_config(
            "file",
            r#"
                llm_api_base = "http://inference.internal:8000/v1"
                llm_model = "mistral"
                llm_timeout_secs = 30
                bind_address = "0.0.0.0:8080"
            "#,
        );

        let config = Config::load(Some(&path)).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.llm_api_base, "http://inference.internal:8000/v1");
        assert_eq!(config.llm_model, "mistral");
        assert_eq!(config.llm_timeout_secs, Some(30));
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
        // Unspecified keys fall back to defaults.
        assert_eq!(config.llm_temperature, 0.7);
    }

    #[test]
    fn test_environment_overrides_file() {
        let path = write_config("env", "llm_api_key = \"from-file\"\n");

        // SAFETY: no other test reads or writes this variable.
        unsafe { std::env::set_var("LANNZ_AI_LLM_API_KEY", "from-env") };
        let result = Config::load(Some(&path));
        unsafe { std::env::remove_var("LANNZ_AI_LLM_API_KEY") };
        let _ = std::fs::remove_file(&path);

        assert_eq!(result.unwrap().llm_api_key, "from-env");
    }

    #[test]
    fn test_rejects_out_of_range_temperature() {
        let path = write_config("temperature", "llm_temperature = 2.5\n");

        let result = Config::load(Some(&path));
        let _ = std::fs::remove_file(&path);

        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_bad_bind_address() {
        let config = Config::from(ConfigInner {
            bind_address: "not-an-address".to_string(),
            ..Default::default()
        });

        assert!(config.validate().is_err());
    }
}
