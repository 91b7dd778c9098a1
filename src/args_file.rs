//! Argument files for the command-line front end
//!
//! Arguments can be kept in a TOML document with a `[vars]` table:
//!
//! ```toml
//! [vars]
//! name = "world"
//! count = 3
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading an argument file
#[derive(Error, Debug)]
pub enum ArgsFileError {
    #[error("Failed to read argument file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse argument file TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("argument '{name}' has unsupported type {kind}")]
    UnsupportedValue { name: String, kind: String },
}

/// TOML structure for deserializing argument files
#[derive(Deserialize)]
struct TomlArgs {
    #[serde(default)]
    vars: toml::Table,
}

/// Arguments loaded from a file, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgsFile {
    pub vars: Vec<(String, String)>,
}

impl ArgsFile {
    /// Load arguments from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ArgsFileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load arguments from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ArgsFileError> {
        let parsed: TomlArgs = toml::from_str(content)?;

        let vars = parsed
            .vars
            .into_iter()
            .map(|(name, value)| {
                let text = match value {
                    toml::Value::String(s) => s,
                    toml::Value::Integer(i) => i.to_string(),
                    toml::Value::Float(f) => f.to_string(),
                    toml::Value::Boolean(b) => b.to_string(),
                    other => {
                        return Err(ArgsFileError::UnsupportedValue {
                            name,
                            kind: other.type_str().to_string(),
                        })
                    }
                };
                Ok((name, text))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { vars })
    }

    /// Override or append a single argument
    pub fn set(&mut self, name: &str, value: &str) {
        match self.vars.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.vars.push((name.to_string(), value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_preserves_order() {
        let args = ArgsFile::from_str(
            r#"
[vars]
zeta = "last letter"
alpha = 1
flag = true
ratio = 0.5
"#,
        )
        .expect("Should parse");

        assert_eq!(
            args.vars,
            vec![
                ("zeta".to_string(), "last letter".to_string()),
                ("alpha".to_string(), "1".to_string()),
                ("flag".to_string(), "true".to_string()),
                ("ratio".to_string(), "0.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_table_is_empty() {
        let args = ArgsFile::from_str("").expect("Should parse");
        assert!(args.vars.is_empty());
    }

    #[test]
    fn test_unsupported_value() {
        let err = ArgsFile::from_str("[vars]\nlist = [1, 2]").unwrap_err();
        assert!(matches!(err, ArgsFileError::UnsupportedValue { ref name, .. } if name == "list"));
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn test_invalid_toml_error() {
        assert!(ArgsFile::from_str("this is not valid toml {{{{").is_err());
    }

    #[test]
    fn test_set_overrides_in_place() {
        let mut args = ArgsFile::from_str("[vars]\na = \"1\"\nb = \"2\"").unwrap();
        args.set("a", "3");
        args.set("c", "4");
        assert_eq!(
            args.vars,
            vec![
                ("a".to_string(), "3".to_string()),
                ("b".to_string(), "2".to_string()),
                ("c".to_string(), "4".to_string()),
            ]
        );
    }
}
