//! Render configuration, read from a project-local `sqlexpr.toml`.
//!
//! ```toml
//! [render]
//! dialect = "mysql"
//! placeholder = "question"
//! skip_top_level_wrap = true
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{SqlExprError, SqlExprResult};
use crate::transpiler::dialect::{Dialect, PlaceholderStyle};

/// Default config file name, looked up relative to the working directory.
pub const CONFIG_FILE: &str = "sqlexpr.toml";

/// Settings for a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub dialect: Dialect,
    /// Overrides the dialect's placeholder style.
    pub placeholder: Option<PlaceholderStyle>,
    /// Render the outermost operator without its enclosing parens.
    pub skip_top_level_wrap: bool,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    render: RenderConfig,
}

impl RenderConfig {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: PlaceholderStyle) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn with_skip_wrap(mut self, skip: bool) -> Self {
        self.skip_top_level_wrap = skip;
        self
    }

    /// Effective placeholder style.
    pub fn placeholder_style(&self) -> PlaceholderStyle {
        self.placeholder
            .unwrap_or_else(|| self.dialect.default_placeholder())
    }

    /// Parse the `[render]` table of a TOML document.
    pub fn from_toml(content: &str) -> SqlExprResult<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.render)
    }

    /// Read config from `path`.
    pub fn load(path: impl AsRef<Path>) -> SqlExprResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SqlExprError::Config(format!(
                "{} not found",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Read `sqlexpr.toml` from the working directory, falling back to defaults
    /// when the file is absent.
    pub fn discover() -> SqlExprResult<Self> {
        Self::discover_in(".")
    }

    /// Read `sqlexpr.toml` from `dir`, falling back to defaults when absent.
    pub fn discover_in(dir: impl AsRef<Path>) -> SqlExprResult<Self> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}
