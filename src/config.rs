use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::Error;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

static COMPILED_DEFAULT: LazyLock<Config> = LazyLock::new(|| {
    toml::from_str(DEFAULT_CONFIG).expect("default_config.toml is validated by build.rs")
});

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    /// Written after every rendered element.
    pub line_terminator: String,
    /// Prefix for the `class` attribute of code blocks with a language tag.
    pub language_class_prefix: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_terminator: "\n".to_string(),
            language_class_prefix: "language-".to_string(),
        }
    }
}

impl Config {
    /// The configuration embedded at build time.
    pub fn compiled_default() -> Self {
        Self::compiled().clone()
    }

    /// Shared, parsed-once view of the embedded configuration.
    pub(crate) fn compiled() -> &'static Self {
        &COMPILED_DEFAULT
    }

    /// Load config from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn compiled_default_matches_default() {
        assert_eq!(Config::compiled_default(), Config::default());
    }

    #[test]
    fn compiled_default_is_parsed_once() {
        assert!(std::ptr::eq(Config::compiled(), Config::compiled()));
        assert_eq!(Config::compiled_default(), *Config::compiled());
    }

    #[test]
    fn load_partial_config() {
        let file = write_config("[render]\nlanguage_class_prefix = \"lang-\"\n");
        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.render.language_class_prefix, "lang-");
        assert_eq!(config.render.line_terminator, "\n");
    }

    #[test]
    fn load_empty_config() {
        let file = write_config("");
        assert_eq!(Config::load(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::ConfigRead { .. })));
    }

    #[test]
    fn load_invalid_toml() {
        let file = write_config("[render\nline_terminator = 3");
        let result = Config::load(file.path());
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }
}
