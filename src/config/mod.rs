use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub roster_file: String,
    pub shifts_file: String,
    #[serde(default = "default_role")]
    pub default_role: String,
    #[serde(default = "default_gender")]
    pub default_gender: String,
}

fn default_role() -> String {
    "admin".to_string()
}

fn default_gender() -> String {
    "M".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_file: Self::roster_file_default().to_string_lossy().to_string(),
            shifts_file: Self::shifts_file_default().to_string_lossy().to_string(),
            default_role: default_role(),
            default_gender: default_gender(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftroster")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".shiftroster")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftroster.conf")
    }

    pub fn roster_file_default() -> PathBuf {
        Self::config_dir().join("roster.csv")
    }

    pub fn shifts_file_default() -> PathBuf {
        Self::config_dir().join("shifts.csv")
    }

    /// The operations log lives beside the roster table, so a `--dir`
    /// override keeps everything in one place.
    pub fn log_file(&self) -> PathBuf {
        let roster = PathBuf::from(&self.roster_file);
        match roster.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join("shiftroster.log"),
            _ => PathBuf::from("shiftroster.log"),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
    }

    /// Point both tables (and the log) at a custom data directory.
    pub fn apply_data_dir(&mut self, dir: &str) {
        let dir = crate::utils::path::expand_tilde(dir);
        self.roster_file = dir.join("roster.csv").to_string_lossy().to_string();
        self.shifts_file = dir.join("shifts.csv").to_string_lossy().to_string();
    }

    /// Initialize the configuration file, pointing at `custom_dir` when
    /// given. In test mode nothing is written to the user's config dir.
    pub fn init_all(custom_dir: Option<&str>, is_test: bool) -> AppResult<Config> {
        let mut config = Config::default();
        if let Some(dir) = custom_dir {
            config.apply_data_dir(dir);
        }

        if !is_test {
            let dir = Self::config_dir();
            fs::create_dir_all(&dir)?;

            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = Path::new(&config.roster_file).parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
