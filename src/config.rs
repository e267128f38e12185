use crate::crud_generator::RenderOptions;
use crate::error::ConfigError;
use crate::types::IdentifierStrategy;
use serde_derive::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub output_suffix: String,
    pub output_extension: String,
    pub output_dir: Option<PathBuf>,
    pub struct_suffix: String,
    pub identifier: IdentifierStrategy,
    pub include_internal_tables: bool,
    pub rustfmt: bool,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_suffix: "_crud".into(),
            output_extension: "rs".into(),
            output_dir: None,
            struct_suffix: "Crud".into(),
            identifier: IdentifierStrategy::PrimaryKey,
            include_internal_tables: false,
            rustfmt: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

impl GeneratorConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        let config: GeneratorConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let path_like = |value: &str| {
            value.contains(|c: char| c == '/' || c == '\\') || value == "." || value == ".."
        };

        if path_like(&self.output_suffix) {
            return Err(ConfigError::InvalidValue {
                field: "output_suffix",
                reason: format!("'{}' must not contain path separators", self.output_suffix),
            });
        }

        if self.output_extension.is_empty()
            || self.output_extension.contains('.')
            || path_like(&self.output_extension)
        {
            return Err(ConfigError::InvalidValue {
                field: "output_extension",
                reason: format!(
                    "'{}' must be a bare extension such as 'rs'",
                    self.output_extension
                ),
            });
        }

        if self.struct_suffix.is_empty()
            || !self
                .struct_suffix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ConfigError::InvalidValue {
                field: "struct_suffix",
                reason: format!(
                    "'{}' must be non-empty and contain only ASCII letters, digits or '_'",
                    self.struct_suffix
                ),
            });
        }

        // `<Table>Column` is the name of the generated column enum
        if self.struct_suffix == "Column" {
            return Err(ConfigError::InvalidValue {
                field: "struct_suffix",
                reason: "'Column' would clash with the generated column enums".into(),
            });
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("'{}' is neither 'pretty' nor 'json'", self.logging.format),
            });
        }

        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            struct_suffix: self.struct_suffix.clone(),
            identifier: self.identifier,
        }
    }

    pub fn init_logging(&self) {
        self.logging.init();
    }
}

impl LoggingConfig {
    /// Installs the global subscriber. Output goes to stderr so stdout only
    /// carries messages meant for the user. `RUST_LOG` overrides `level`.
    pub fn init(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.level));

        // a second initialization (tests) is ignored
        let _ = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
    }
}
