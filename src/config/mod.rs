//! User settings handed to the analytics services, persisted as JSON.

use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use crate::{
    errors::{LedgerError, LedgerResult},
    ledger::BudgetConfig,
};

const HOME_ENV: &str = "EXPENSE_CORE_HOME";
const APP_DIR: &str = "expense_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub budget: BudgetConfig,
    /// Days the expense total is averaged over.
    pub period_days: u32,
    pub savings_goal: f64,
    /// Display only; amounts carry no currency.
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            budget: Self::default_budget(),
            period_days: 30,
            savings_goal: 100_000.0,
            currency_symbol: "₹".into(),
        }
    }
}

impl Config {
    pub fn default_budget() -> BudgetConfig {
        BudgetConfig::new(45_000.0)
            .with_category("Travel", 3_000.0)
            .with_category("Food", 2_500.0)
            .with_category("Groceries", 5_000.0)
            .with_category("Utilities", 2_000.0)
            .with_category("Entertainment", 2_000.0)
            .with_category("Healthcare", 1_500.0)
    }

    /// Averaging period in the signed form the summary services expect.
    pub fn period_days(&self) -> i64 {
        i64::from(self.period_days)
    }

    pub fn validate(&self) -> LedgerResult<()> {
        check_limit("monthly budget", self.budget.monthly)?;
        for entry in self.budget.categories.iter() {
            check_limit(&format!("budget for `{}`", entry.category), entry.limit)?;
        }
        check_limit("savings goal", self.savings_goal)?;
        if self.period_days == 0 {
            return Err(LedgerError::validation("period_days must be positive"));
        }
        Ok(())
    }
}

fn check_limit(label: &str, value: f64) -> LedgerResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(LedgerError::validation(format!(
            "{label} must be a finite non-negative number, got {value}"
        )));
    }
    Ok(())
}

/// Loads and saves [`Config`] at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Resolves `$EXPENSE_CORE_HOME/config.json`, falling back to the platform
    /// config directory.
    pub fn from_env() -> Self {
        Self::new(app_config_dir().join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the config file, returning defaults when it does not exist yet.
    pub fn load(&self) -> LedgerResult<Config> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "config file missing, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data).map_err(|err| {
            warn!(path = %self.path.display(), error = %err, "config file is not valid JSON");
            LedgerError::from(err)
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> LedgerResult<()> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }
}

fn app_config_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> LedgerResult<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
