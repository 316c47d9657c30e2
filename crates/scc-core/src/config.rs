use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::content::Profile;

pub const CONFIG_DIR_NAME: &str = "scc";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const ENV_RELAY_SERVICE_ID: &str = "SCC_RELAY_SERVICE_ID";
pub const ENV_RELAY_TEMPLATE_ID: &str = "SCC_RELAY_TEMPLATE_ID";
pub const ENV_RELAY_PUBLIC_KEY: &str = "SCC_RELAY_PUBLIC_KEY";
pub const ENV_LOG_LEVEL: &str = "SCC_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub profile: Profile,
    pub contact: ContactConfig,
    pub boot: BootConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    #[default]
    Relay,
    Mailto,
}

impl DeliveryMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Relay => "relay",
            Self::Mailto => "mailto",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ContactConfig {
    pub delivery: DeliveryMode,
    /// Falls back to the profile's email when unset.
    pub to_email: Option<String>,
    pub relay: RelayConfig,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            delivery: DeliveryMode::Relay,
            to_email: None,
            relay: RelayConfig::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            timeout_secs: 15,
        }
    }
}

impl RelayConfig {
    pub fn has_credentials(&self) -> bool {
        !self.service_id.trim().is_empty()
            && !self.template_id.trim().is_empty()
            && !self.public_key.trim().is_empty()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct BootConfig {
    pub skip: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Applies environment overrides; `lookup` is `std::env::var` in production.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let relay = &mut self.contact.relay;
        for (key, slot) in [
            (ENV_RELAY_SERVICE_ID, &mut relay.service_id),
            (ENV_RELAY_TEMPLATE_ID, &mut relay.template_id),
            (ENV_RELAY_PUBLIC_KEY, &mut relay.public_key),
        ] {
            if let Some(value) = lookup(key).filter(|value| !value.trim().is_empty()) {
                *slot = value;
            }
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|value| !value.trim().is_empty()) {
            self.logging.level = level;
        }
    }

    pub fn contact_recipient(&self) -> String {
        self.contact
            .to_email
            .clone()
            .filter(|email| !email.trim().is_empty())
            .unwrap_or_else(|| self.profile.email.clone())
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.logging
            .dir
            .clone()
            .or_else(|| dirs::data_local_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("logs")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.contact.delivery, DeliveryMode::Relay);
        assert_eq!(config.logging.level, "info");
        assert!(!config.boot.skip);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[contact]\ndelivery = \"mailto\"\nto_email = \"hire@example.com\"\n\n[boot]\nskip = true"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.contact.delivery, DeliveryMode::Mailto);
        assert_eq!(config.contact_recipient(), "hire@example.com");
        assert!(config.boot.skip);
        assert_eq!(config.contact.relay.timeout_secs, 15);
        assert_eq!(config.profile, Profile::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[contact\ndelivery = ").unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn env_overrides_relay_credentials() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_RELAY_SERVICE_ID, "svc"),
            (ENV_RELAY_TEMPLATE_ID, "tpl"),
            (ENV_RELAY_PUBLIC_KEY, "key"),
            (ENV_LOG_LEVEL, "debug"),
        ]);
        let mut config = Config::default();
        assert!(!config.contact.relay.has_credentials());

        config.apply_env(|key| vars.get(key).map(|value| value.to_string()));

        assert!(config.contact.relay.has_credentials());
        assert_eq!(config.contact.relay.service_id, "svc");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let mut config = Config::default();
        config.contact.relay.service_id = "from-file".to_string();
        config.apply_env(|_| Some("  ".to_string()));
        assert_eq!(config.contact.relay.service_id, "from-file");
    }

    #[test]
    fn recipient_defaults_to_profile_email() {
        let config = Config::default();
        assert_eq!(config.contact_recipient(), config.profile.email);
    }
}
