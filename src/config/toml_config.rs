use crate::core::catalog::Catalog;
use crate::domain::model::{DevelopmentRecord, ExportFormat, PhaseRule};
use crate::domain::ports::{CatalogSource, SettingsProvider};
use crate::utils::error::{Result, WeekError};
use crate::utils::validation::{validate_choice, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_OUTPUT_PATH: &str = "./output";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
    /// 有資料時取代內建目錄
    #[serde(default)]
    pub weeks: Vec<DevelopmentRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsConfig {
    pub phase_rule: Option<String>,
    pub output_path: Option<String>,
    pub default_format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| WeekError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| WeekError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn has_custom_catalog(&self) -> bool {
        !self.weeks.is_empty()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(rule) = &self.settings.phase_rule {
            validate_choice::<PhaseRule>("settings.phase_rule", rule)?;
        }
        if let Some(format) = &self.settings.default_format {
            validate_choice::<ExportFormat>("settings.default_format", format)?;
        }
        if let Some(path) = &self.settings.output_path {
            validate_path("settings.output_path", path)?;
        }
        if self.has_custom_catalog() {
            Catalog::new(self.weeks.clone())?;
        }
        Ok(())
    }
}

impl CatalogSource for TomlConfig {
    fn load_catalog(&self) -> Result<Catalog> {
        if self.has_custom_catalog() {
            tracing::debug!("Using custom catalog with {} weeks", self.weeks.len());
            Ok(Catalog::new(self.weeks.clone())?)
        } else {
            Ok(Catalog::builtin().clone())
        }
    }
}

// 無效值在 validate 階段就會被擋下，這裡退回預設值
impl SettingsProvider for TomlConfig {
    fn phase_rule(&self) -> PhaseRule {
        self.settings
            .phase_rule
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        self.settings
            .output_path
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn default_format(&self) -> ExportFormat {
        self.settings
            .default_format
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
