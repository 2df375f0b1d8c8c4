use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_work_hours")]
    pub default_work_hours: f64,
    #[serde(default = "default_break_minutes")]
    pub default_break_minutes: i64,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_work_hours() -> f64 {
    8.0
}
fn default_break_minutes() -> i64 {
    60
}
fn default_language() -> String {
    "system".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_work_hours: default_work_hours(),
            default_break_minutes: default_break_minutes(),
            language: default_language(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("leavetime")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".leavetime")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("leavetime.conf")
    }

    /// Return the full path of the SQLite state database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("leavetime.sqlite")
    }

    /// Load configuration from file, or return defaults when the file is
    /// missing or does not parse.
    pub fn load() -> Self {
        let path = Self::config_file();

        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    }

    /// Work preferences with the defaults applied: negative or non-finite
    /// values fall back to 8h work / 60m break before they ever reach the
    /// calculator.
    pub fn work_preferences(&self) -> (f64, i64) {
        let work_hours = if self.default_work_hours.is_finite() && self.default_work_hours >= 0.0 {
            self.default_work_hours
        } else {
            default_work_hours()
        };

        let break_minutes = if self.default_break_minutes >= 0 {
            self.default_break_minutes
        } else {
            default_break_minutes()
        };

        (work_hours, break_minutes)
    }

    /// DB path for a user-provided name: absolute paths are kept as-is,
    /// bare names land inside the config directory.
    pub fn resolve_db_path(custom_db: Option<&str>) -> PathBuf {
        match custom_db {
            Some(name) => {
                let p = crate::utils::path::expand_tilde(name);
                if p.is_absolute() {
                    p
                } else {
                    Self::config_dir().join(p)
                }
            }
            None => Self::database_file(),
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = Self::resolve_db_path(custom_db.as_deref());

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
