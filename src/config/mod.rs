use std::{
    fmt,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{errors::ConfigError, utils};

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Color palette used by the shell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Plain,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Plain => "plain",
        };
        f.write_str(name)
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "plain" => Ok(Theme::Plain),
            other => Err(ConfigError::Invalid(format!(
                "unknown theme `{other}` (expected light, dark or plain)"
            ))),
        }
    }
}

/// Presentation preferences. Ledger entries are never stored here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "Config::default_show_intro")]
    pub show_intro: bool,
}

impl Config {
    fn default_currency_symbol() -> String {
        "$".into()
    }

    fn default_show_intro() -> bool {
        true
    }

    pub fn set_currency_symbol(&mut self, symbol: &str) -> Result<(), ConfigError> {
        let symbol = symbol.trim();
        if symbol.is_empty() || symbol.chars().count() > 4 {
            return Err(ConfigError::Invalid(format!(
                "currency symbol `{symbol}` must be 1 to 4 characters"
            )));
        }
        self.currency_symbol = symbol.to_string();
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            theme: Theme::default(),
            show_intro: Self::default_show_intro(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(utils::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Loads the stored configuration, or defaults when nothing was saved yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_flushed(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_flushed(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
