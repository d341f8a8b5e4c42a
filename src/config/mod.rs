use crate::errors::{AppError, AppResult};
use crate::models::period::PeriodAnchor;
use crate::utils::date::Calendar;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // anchor migrations, src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub anchor: PeriodAnchor,
    #[serde(default)]
    pub calendar: Calendar,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// YAML template document; the bundled one is used when unset.
    #[serde(default)]
    pub template: Option<String>,
    /// YAML field map; the standard map is used when unset.
    #[serde(default)]
    pub field_map: Option<String>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_output_dir() -> String {
    Config::config_dir()
        .join("reports")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            anchor: PeriodAnchor::default(),
            calendar: Calendar::default(),
            output_dir: default_output_dir(),
            template: None,
            field_map: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("paysheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".paysheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("paysheet.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("paysheet.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    ///
    /// An existing config file keeps its anchor, calendar, output and
    /// template settings; only `database` may change. The anchor is moved
    /// exclusively through `migrate::migrate_anchor`.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        let existing = if path.exists() {
            Some(Self::load_from(&path)?)
        } else {
            None
        };

        // DB name: user provided, already configured, or default
        let db_path = if let Some(name) = custom_db {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else if let Some(cfg) = &existing {
            expand_tilde(&cfg.database)
        } else {
            Self::database_file()
        };

        let kept_existing = existing.is_some();
        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..existing.unwrap_or_default()
        };

        // Write config file
        if !is_test {
            config.save()?;
            if kept_existing {
                println!(
                    "✅ Config file: {:?} (kept anchor {} v{})",
                    path, config.anchor.date, config.anchor.version
                );
            } else {
                println!("✅ Config file: {:?}", path);
            }
        }

        // Create empty DB file if not exists
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
