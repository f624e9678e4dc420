//! Layered configuration: defaults, then a TOML file named by `FIFTY_CONFIG`,
//! then `FIFTY_*` environment variables. Command-line flags are applied last
//! by [`Config::settings`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::time::Duration;

use fifty_ai::AI_KINDS;
use fifty_engine::rules::{MAX_OPPONENTS, MIN_OPPONENTS};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub opponents: usize,
    pub seed: Option<u64>,
    /// Pause before each computer move in interactive play
    pub think_ms: u64,
    pub ai: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            opponents: 1,
            seed: None,
            think_ms: 1500,
            ai: "baseline".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub opponents: ValueSource,
    pub seed: ValueSource,
    pub think_ms: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            opponents: ValueSource::Default,
            seed: ValueSource::Default,
            think_ms: ValueSource::Default,
            ai: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

/// Everything a game command needs once flags and configuration are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSettings {
    pub opponents: usize,
    pub seed: u64,
    pub think: Duration,
    pub ai: String,
}

impl Config {
    /// Applies command-line overrides. A missing seed everywhere is replaced
    /// by a random one.
    pub fn settings(
        &self,
        opponents: Option<u8>,
        seed: Option<u64>,
        think_ms: Option<u64>,
    ) -> GameSettings {
        GameSettings {
            opponents: opponents.map(usize::from).unwrap_or(self.opponents),
            seed: seed.or(self.seed).unwrap_or_else(rand::random),
            think: Duration::from_millis(think_ms.unwrap_or(self.think_ms)),
            ai: self.ai.clone(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("FIFTY_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.opponents {
            cfg.opponents = v;
            sources.opponents = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.think_ms {
            cfg.think_ms = v;
            sources.think_ms = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Some(seed) = env_value("FIFTY_SEED") {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid FIFTY_SEED: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(n) = env_value("FIFTY_OPPONENTS") {
        cfg.opponents = n
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid FIFTY_OPPONENTS: {}", n)))?;
        sources.opponents = ValueSource::Env;
    }
    if let Some(ms) = env_value("FIFTY_THINK_MS") {
        cfg.think_ms = ms
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid FIFTY_THINK_MS: {}", ms)))?;
        sources.think_ms = ValueSource::Env;
    }
    if let Some(ai) = env_value("FIFTY_AI") {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    opponents: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    think_ms: Option<u64>,
    #[serde(default)]
    ai: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(MIN_OPPONENTS..=MAX_OPPONENTS).contains(&cfg.opponents) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: opponents must be between {} and {}",
            MIN_OPPONENTS, MAX_OPPONENTS
        )));
    }
    if !AI_KINDS.contains(&cfg.ai.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai '{}' (known: {})",
            cfg.ai,
            AI_KINDS.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const VARS: [&str; 5] = [
        "FIFTY_CONFIG",
        "FIFTY_SEED",
        "FIFTY_OPPONENTS",
        "FIFTY_THINK_MS",
        "FIFTY_AI",
    ];

    fn clear_env() {
        for key in VARS {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    fn set_env(key: &str, value: &str) {
        unsafe {
            std::env::set_var(key, value);
        }
    }

    #[test]
    #[serial]
    fn defaults_without_file_or_env() {
        clear_env();
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.opponents, ValueSource::Default);
        assert_eq!(resolved.sources.think_ms, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn file_overrides_defaults_and_env_overrides_file() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "opponents = 2\nseed = 7\nthink_ms = 0").unwrap();
        set_env("FIFTY_CONFIG", file.path().to_str().unwrap());
        set_env("FIFTY_SEED", "99");

        let resolved = load_with_sources().unwrap();
        clear_env();

        assert_eq!(resolved.config.opponents, 2);
        assert_eq!(resolved.sources.opponents, ValueSource::File);
        assert_eq!(resolved.config.think_ms, 0);
        assert_eq!(resolved.config.seed, Some(99));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert_eq!(resolved.sources.ai, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn out_of_range_opponents_are_rejected() {
        clear_env();
        set_env("FIFTY_OPPONENTS", "4");
        let result = load();
        clear_env();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    #[serial]
    fn unknown_ai_is_rejected() {
        clear_env();
        set_env("FIFTY_AI", "oracle");
        let result = load();
        clear_env();
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("oracle"), "{}", msg);
    }

    #[test]
    #[serial]
    fn malformed_file_is_a_parse_error() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "opponents = \"many\"").unwrap();
        set_env("FIFTY_CONFIG", file.path().to_str().unwrap());
        let result = load();
        clear_env();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn flags_override_config() {
        let cfg = Config {
            opponents: 2,
            seed: Some(5),
            think_ms: 1500,
            ai: "baseline".into(),
        };
        let s = cfg.settings(Some(3), None, Some(0));
        assert_eq!(s.opponents, 3);
        assert_eq!(s.seed, 5);
        assert_eq!(s.think, Duration::ZERO);

        let s = cfg.settings(None, Some(11), None);
        assert_eq!(s.opponents, 2);
        assert_eq!(s.seed, 11);
        assert_eq!(s.think, Duration::from_millis(1500));
    }
}
