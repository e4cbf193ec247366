//! Inspector configuration
//!
//! Built-in defaults, optionally overridden by a YAML file, then by
//! command-line flags:
//!
//! ```yaml
//! file: 골구조도.xlsx
//! sheet: Sheet1
//! header_rows: 10
//! report_columns: [L, M, N]
//! keywords: [형틀, 철근, TON]
//! truncate:
//!   headers: 30
//!   ranges: 50
//!   keywords: 20
//! ```

use crate::error::{InspectError, InspectResult};
use crate::excel::column_index;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Workbook read when no path is given
pub const DEFAULT_WORKBOOK: &str = "골구조도.xlsx";

/// Number of leading rows treated as the header area
pub const DEFAULT_HEADER_ROWS: u32 = 10;

/// Fixed columns of the range report (L, M, N)
pub const DEFAULT_REPORT_COLUMNS: &[&str] = &["L", "M", "N"];

/// Formwork, gang form, aluminium form, rebar, concrete, quantity and unit labels
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "형틀",
    "갱폼",
    "알폼",
    "철근",
    "콘크리트",
    "물량",
    "M2",
    "TON",
    "M3",
];

/// Maximum characters printed for literal values, per report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TruncateWidths {
    pub headers: usize,
    pub ranges: usize,
    pub keywords: usize,
}

impl Default for TruncateWidths {
    fn default() -> Self {
        Self {
            headers: 30,
            ranges: 50,
            keywords: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InspectConfig {
    pub file: PathBuf,
    pub sheet: Option<String>,
    pub header_rows: u32,
    /// Column letters (`L`) or 1-based numbers (`12`)
    pub report_columns: Vec<String>,
    pub keywords: Vec<String>,
    pub truncate: TruncateWidths,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_WORKBOOK),
            sheet: None,
            header_rows: DEFAULT_HEADER_ROWS,
            report_columns: DEFAULT_REPORT_COLUMNS.iter().map(|s| s.to_string()).collect(),
            keywords: DEFAULT_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            truncate: TruncateWidths::default(),
        }
    }
}

/// Values given on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub file: Option<PathBuf>,
    pub sheet: Option<String>,
    pub header_rows: Option<u32>,
    pub report_columns: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
}

impl InspectConfig {
    pub fn from_yaml_str(yaml: &str) -> InspectResult<Self> {
        let config: InspectConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: &Path) -> InspectResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            InspectError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Defaults, or the YAML file when one is given
    pub fn load(path: Option<&Path>) -> InspectResult<Self> {
        match path {
            Some(p) => Self::from_yaml_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides and re-validate
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> InspectResult<Self> {
        if let Some(file) = overrides.file {
            self.file = file;
        }
        if overrides.sheet.is_some() {
            self.sheet = overrides.sheet;
        }
        if let Some(rows) = overrides.header_rows {
            self.header_rows = rows;
        }
        if let Some(columns) = overrides.report_columns {
            self.report_columns = columns;
        }
        if let Some(keywords) = overrides.keywords {
            self.keywords = keywords;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> InspectResult<()> {
        if self.header_rows == 0 {
            return Err(InspectError::Config(
                "header_rows must be at least 1".to_string(),
            ));
        }
        let widths = self.truncate;
        if widths.headers == 0 || widths.ranges == 0 || widths.keywords == 0 {
            return Err(InspectError::Config(
                "truncate widths must be at least 1".to_string(),
            ));
        }
        if self.keywords.is_empty() {
            return Err(InspectError::Config("keyword list is empty".to_string()));
        }
        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(InspectError::Config("keywords must not be blank".to_string()));
        }
        self.report_column_indices()?;
        Ok(())
    }

    /// Resolve `report_columns` to 1-based column indices
    pub fn report_column_indices(&self) -> InspectResult<Vec<u32>> {
        self.report_columns
            .iter()
            .map(|spec| parse_column(spec))
            .collect()
    }
}

/// Parse a column given as letters (`L`) or a 1-based number (`12`)
pub fn parse_column(spec: &str) -> InspectResult<u32> {
    let spec = spec.trim();
    let parsed = if spec.chars().all(|c| c.is_ascii_digit()) {
        spec.parse::<u32>().ok().filter(|n| *n > 0)
    } else {
        column_index(spec)
    };
    parsed.ok_or_else(|| InspectError::Config(format!("invalid column: '{}'", spec)))
}
