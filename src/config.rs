use crate::core::errors::{ExplorerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional per-run configuration file, looked up at the results root
pub const CONFIG_FILE_NAME: &str = "alpine-explorer.toml";

/// Floor for the schema-inference lookahead; smaller values misclassify
/// columns whose early rows are empty
pub const MIN_INFER_SCHEMA_ROWS: usize = 250;

/// Run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Rows of lookahead used to infer column types during consolidation
    #[serde(default = "default_infer_schema_rows")]
    pub infer_schema_rows: usize,

    /// Directory where artifacts are written, relative paths resolved
    /// against the current working directory
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_infer_schema_rows() -> usize {
    MIN_INFER_SCHEMA_ROWS
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            infer_schema_rows: default_infer_schema_rows(),
            output_dir: default_output_dir(),
        }
    }
}

impl ExplorerConfig {
    /// Load configuration from `alpine-explorer.toml` under `root`, falling
    /// back to defaults when the file is absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config: ExplorerConfig = toml::from_str(&content).map_err(|e| {
            ExplorerError::Configuration(format!("failed to parse '{}': {}", path.display(), e))
        })?;
        Ok(config.normalize())
    }

    /// Clamp values to their supported ranges.
    pub fn normalize(mut self) -> Self {
        if self.infer_schema_rows < MIN_INFER_SCHEMA_ROWS {
            log::warn!(
                "infer_schema_rows {} below minimum, using {}",
                self.infer_schema_rows,
                MIN_INFER_SCHEMA_ROWS
            );
            self.infer_schema_rows = MIN_INFER_SCHEMA_ROWS;
        }
        self
    }
}
