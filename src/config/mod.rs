use crate::core::calculator::Rules;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_rounding_minutes")]
    pub rounding_minutes: u32,
    #[serde(default = "default_overtime_threshold_hours")]
    pub overtime_threshold_hours: f64,
    #[serde(default = "default_fixed_break_minutes")]
    pub fixed_break_minutes: u32,
    #[serde(default)]
    pub default_hourly_rate: Option<f64>,
    #[serde(default)]
    pub default_location: String,
}

fn default_data_file() -> String {
    Config::data_file_path().to_string_lossy().to_string()
}
fn default_rounding_minutes() -> u32 {
    1
}
fn default_overtime_threshold_hours() -> f64 {
    8.0
}
fn default_fixed_break_minutes() -> u32 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            rounding_minutes: default_rounding_minutes(),
            overtime_threshold_hours: default_overtime_threshold_hours(),
            fixed_break_minutes: default_fixed_break_minutes(),
            default_hourly_rate: None,
            default_location: String::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("worktime")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".worktime")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worktime.conf")
    }

    /// Return the default path of the JSON data file
    pub fn data_file_path() -> PathBuf {
        Self::config_dir().join("work_data.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.check()?;
        Ok(cfg)
    }

    fn check(&self) -> AppResult<()> {
        if !self.overtime_threshold_hours.is_finite() || self.overtime_threshold_hours < 0.0 {
            return Err(AppError::Config(format!(
                "overtime_threshold_hours must be >= 0, got {}",
                self.overtime_threshold_hours
            )));
        }
        if let Some(rate) = self.default_hourly_rate
            && (!rate.is_finite() || rate < 0.0)
        {
            return Err(AppError::Config(format!(
                "default_hourly_rate must be >= 0, got {}",
                rate
            )));
        }
        Ok(())
    }

    /// Resolved data file path (`~/` expanded).
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    pub fn rules(&self) -> Rules {
        Rules {
            rounding_minutes: self.rounding_minutes,
            overtime_threshold_minutes: (self.overtime_threshold_hours * 60.0).round() as i64,
        }
    }

    /// Initialize configuration and data files
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(self)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        // Create empty data file if not exists
        let data_path = self.data_path();
        if !data_path.exists() {
            if let Some(parent) = data_path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(&data_path, "{}\n")?;
        }

        Ok(())
    }
}
