//! Runtime settings.
//!
//! Resolution order: built-in defaults, then an optional `senti.toml`,
//! then `SENTI_*` environment variables. Command-line flags are applied
//! on top by the binary.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::error::{SentiError, SentiResult};

/// Default sentiment backend URL.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Default request timeout in seconds. Local LLM inference can be slow.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default model name shown in the busy message and page title.
pub const DEFAULT_MODEL_NAME: &str = "Mistral";

/// Settings file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "senti.toml";

const ENV_BACKEND_URL: &str = "SENTI_BACKEND_URL";
const ENV_TIMEOUT_SECS: &str = "SENTI_TIMEOUT_SECS";

/// Resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub backend_url: String,
    pub timeout_secs: u64,
    pub model_name: String,
    pub page: PageSettings,
}

/// Page chrome for the browser shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    pub title: String,
    pub caption: String,
}

/// On-disk form of [`Settings`]; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    backend_url: Option<String>,
    timeout_secs: Option<u64>,
    model_name: Option<String>,
    #[serde(default)]
    page: PageFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PageFile {
    title: Option<String>,
    caption: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            model_name: DEFAULT_MODEL_NAME.to_string(),
            page: PageSettings::for_model(DEFAULT_MODEL_NAME),
        }
    }
}

impl PageSettings {
    /// Default chrome for the given model name.
    pub fn for_model(model_name: &str) -> Self {
        Self {
            title: format!("Sentiment Analyzer ({})", model_name),
            caption: "Built with FastAPI + Ollama + Rust".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from defaults, an optional TOML file and the environment.
    ///
    /// An explicit `path` must exist. Without one, `senti.toml` in the
    /// current directory is used when present. Call [`Settings::validate`]
    /// once any further overrides are applied.
    pub fn load(path: Option<&Path>) -> SentiResult<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// [`Settings::load`] with environment variables read through `lookup`.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> SentiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(SentiError::config(format!(
                        "config file not found: {}",
                        p.display()
                    )));
                }
                settings.merge_file(p)?;
            }
            None => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.exists() {
                    settings.merge_file(local)?;
                }
            }
        }

        settings.apply_env(lookup)?;
        Ok(settings)
    }

    /// Parse settings from TOML text on top of the defaults.
    pub fn from_toml_str(content: &str) -> SentiResult<Self> {
        let mut settings = Self::default();
        settings.merge_toml(content)?;
        Ok(settings)
    }

    fn merge_file(&mut self, path: &Path) -> SentiResult<()> {
        debug!(path = %path.display(), "Loading settings file");
        let content = std::fs::read_to_string(path)?;
        self.merge_toml(&content)
            .map_err(|e| SentiError::config(format!("{}: {}", path.display(), e)))
    }

    fn merge_toml(&mut self, content: &str) -> SentiResult<()> {
        let file: SettingsFile = toml::from_str(content)?;

        if let Some(url) = file.backend_url {
            self.backend_url = url;
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout_secs = secs;
        }
        if let Some(name) = file.model_name {
            // Page chrome follows the model unless set explicitly below.
            self.page = PageSettings::for_model(&name);
            self.model_name = name;
        }
        if let Some(title) = file.page.title {
            self.page.title = title;
        }
        if let Some(caption) = file.page.caption {
            self.page.caption = caption;
        }
        Ok(())
    }

    /// Apply `SENTI_*` overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> SentiResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BACKEND_URL).filter(|v| !v.trim().is_empty()) {
            debug!(backend_url = %url, "Backend URL overridden from environment");
            self.backend_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.trim().is_empty()) {
            self.timeout_secs = raw.trim().parse().map_err(|_| {
                SentiError::config(format!("{} must be a whole number of seconds, got '{}'", ENV_TIMEOUT_SECS, raw))
            })?;
        }
        Ok(())
    }

    /// Check that the settings can drive an inference client.
    pub fn validate(&self) -> SentiResult<()> {
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://")) {
            return Err(SentiError::config(format!(
                "backend URL must start with http:// or https://, got '{}'",
                self.backend_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(SentiError::config("timeout must be at least 1 second"));
        }
        Ok(())
    }

    /// Full URL of the analyze endpoint.
    pub fn analyze_url(&self) -> String {
        format!("{}/analyze/", self.backend_url.trim_end_matches('/'))
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Message shown while a request is in flight.
    pub fn busy_message(&self) -> String {
        format!("Analyzing sentiment using {}...", self.model_name)
    }
}
