//! j2d_options: project configuration.
//!
//! A project file is JSON with camelCase keys, every field optional:
//!
//! ```json
//! {
//!   "sourceRoots": ["src"],
//!   "files": ["extra/Tool.java"],
//!   "exclude": ["src/generated"],
//!   "outDir": "out",
//!   "bestEffortKeys": false,
//!   "renames": { "Ltest/Main;.foo(I)V": "foo2" }
//! }
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use indexmap::IndexMap;
use j2d_path::{combine_paths, get_directory_path, normalize_path};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read project file '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid project file '{path}'")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid rename '{0}', expected KEY=NAME")]
    InvalidRename(String),
}

/// The project file as written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectConfig {
    pub source_roots: Option<Vec<String>>,
    pub files: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub out_dir: Option<String>,
    pub best_effort_keys: Option<bool>,
    /// Binding key to new name, applied in file order.
    pub renames: Option<IndexMap<String, String>>,
}

/// One post-translation rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub key: String,
    pub new_name: String,
}

impl std::str::FromStr for Rename {
    type Err = ConfigError;

    /// `KEY=NAME`, split at the last `=`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.rsplit_once('=') {
            Some((key, new_name)) if !key.is_empty() && !new_name.is_empty() => Ok(Rename {
                key: key.to_string(),
                new_name: new_name.to_string(),
            }),
            _ => Err(ConfigError::InvalidRename(text.to_string())),
        }
    }
}

/// Settings for one batch, with every path resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompilerOptions {
    pub source_roots: Vec<String>,
    pub files: Vec<String>,
    pub exclude: Vec<String>,
    pub out_dir: Option<String>,
    pub best_effort_keys: bool,
    pub renames: Vec<Rename>,
}

impl ProjectConfig {
    /// Resolve relative paths against `base_dir`.
    pub fn resolve(self, base_dir: &str) -> CompilerOptions {
        let resolve_all = |paths: Option<Vec<String>>| -> Vec<String> {
            paths
                .unwrap_or_default()
                .iter()
                .map(|path| normalize_path(&combine_paths(base_dir, path)))
                .collect()
        };
        CompilerOptions {
            source_roots: resolve_all(self.source_roots),
            files: resolve_all(self.files),
            exclude: resolve_all(self.exclude),
            out_dir: self.out_dir.map(|dir| normalize_path(&combine_paths(base_dir, &dir))),
            best_effort_keys: self.best_effort_keys.unwrap_or(false),
            renames: self
                .renames
                .unwrap_or_default()
                .into_iter()
                .map(|(key, new_name)| Rename { key, new_name })
                .collect(),
        }
    }
}

pub fn parse_config(content: &str) -> Result<ProjectConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// Read a project file and resolve it against its own directory.
pub fn load_compiler_options(path: &str) -> Result<CompilerOptions, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    let config = parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })?;
    let base_dir = get_directory_path(path);
    Ok(config.resolve(&base_dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"{
                "sourceRoots": ["src"],
                "files": ["extra/Tool.java"],
                "exclude": ["src/generated"],
                "outDir": "out",
                "bestEffortKeys": true,
                "renames": { "Ltest/Main;.foo(I)V": "foo2", "Ltest/Main;": "Entry" }
            }"#,
        )
        .expect("valid config");
        assert_eq!(config.source_roots, Some(vec!["src".to_string()]));
        assert_eq!(config.best_effort_keys, Some(true));

        let options = config.resolve("/project/");
        assert_eq!(options.source_roots, vec!["/project/src"]);
        assert_eq!(options.files, vec!["/project/extra/Tool.java"]);
        assert_eq!(options.exclude, vec!["/project/src/generated"]);
        assert_eq!(options.out_dir.as_deref(), Some("/project/out"));
        assert!(options.best_effort_keys);
        let keys: Vec<&str> = options.renames.iter().map(|rename| rename.key.as_str()).collect();
        assert_eq!(keys, ["Ltest/Main;.foo(I)V", "Ltest/Main;"]);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let options = parse_config("{}").expect("valid config").resolve("");
        assert_eq!(options, CompilerOptions::default());
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let config = ProjectConfig { source_roots: Some(vec!["/abs/src".to_string()]), ..ProjectConfig::default() };
        assert_eq!(config.resolve("/project/").source_roots, vec!["/abs/src"]);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(parse_config(r#"{ "sourceRoot": "src" }"#).is_err());
    }

    #[test]
    fn test_parse_rename() {
        let rename: Rename = "Ltest/Main;.foo(I)V=foo2".parse().expect("valid rename");
        assert_eq!(rename, Rename { key: "Ltest/Main;.foo(I)V".to_string(), new_name: "foo2".to_string() });
        assert!("foo2".parse::<Rename>().is_err());
        assert!("key=".parse::<Rename>().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("java2dart.json");
        std::fs::write(&path, r#"{ "sourceRoots": ["src"], "outDir": "out" }"#).expect("write config");
        let path = j2d_path::path_to_string(&path);
        let options = load_compiler_options(&path).expect("load");
        let base = normalize_path(&get_directory_path(&path));
        assert_eq!(options.source_roots, vec![format!("{}/src", base)]);

        let missing = load_compiler_options("/definitely/not/here.json");
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}
