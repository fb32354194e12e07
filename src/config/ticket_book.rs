use crate::core::report::OutputFormat;
use crate::core::sorter::TicketField;
use crate::core::TicketSource;
use crate::domain::model::AirlineTicket;
use crate::utils::error::{AviaError, Result};
use crate::utils::validation::{validate_file_extension, validate_path};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["toml", "json"];

/// A file of tickets plus an optional default sort plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketBook {
    pub sort: Option<SortSection>,
    #[serde(default)]
    pub tickets: Vec<AirlineTicket>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SortSection {
    #[serde(default)]
    pub keys: Vec<String>,
    pub format: Option<OutputFormat>,
}

impl TicketBook {
    /// 從檔案載入，依副檔名選擇 TOML 或 JSON
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.to_string_lossy();
        validate_path("input", &path_str)?;
        validate_file_extension("input", &path_str, &SUPPORTED_EXTENSIONS)?;

        tracing::debug!("Reading ticket book from {}", path_str);
        let content = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| AviaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        Ok(serde_json::from_str(&processed)?)
    }

    /// Sort keys named in the `[sort]` section, in file order.
    pub fn sort_keys(&self) -> Result<Vec<TicketField>> {
        self.sort
            .as_ref()
            .map(|section| {
                section
                    .keys
                    .iter()
                    .map(|key| key.parse::<TicketField>())
                    .collect::<Result<Vec<_>>>()
            })
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.sort.as_ref().and_then(|section| section.format)
    }
}

impl TicketSource for TicketBook {
    fn load(&self) -> Result<Vec<AirlineTicket>> {
        if self.tickets.is_empty() {
            return Err(AviaError::MissingConfigError {
                field: "tickets".to_string(),
            });
        }
        Ok(self.tickets.clone())
    }
}

/// 替換環境變數 (例如 ${DATA_YEAR})，未設定的變數保留原樣
fn substitute_env_vars(content: &str) -> String {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}
