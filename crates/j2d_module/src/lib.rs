//! j2d_module: source file discovery.
//!
//! Turns the configured source roots and explicit files into the batch's
//! file list. The list is sorted and free of duplicates, which fixes the
//! order in which files are translated.

use j2d_path::{has_java_file_extension, normalize_path, path_to_string};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("source root '{path}' does not exist or is not a directory")]
    MissingRoot { path: String },
    #[error("cannot read directory '{path}'")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// What to collect.
#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    /// Directories searched recursively for `.java` files.
    pub roots: Vec<String>,
    /// Files taken as given, whatever their extension.
    pub files: Vec<String>,
    /// Files and directories to leave out. A directory excludes everything
    /// below it.
    pub exclude: Vec<String>,
}

impl SourceSet {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty() && self.files.is_empty()
    }
}

/// Collects the batch's files: every `.java` file below each root plus the
/// explicit files, minus exclusions, sorted and de-duplicated.
///
/// Explicit files are not checked for existence here; reading them is the
/// driver's job and reports the failing path.
pub fn discover_source_files(sources: &SourceSet) -> Result<Vec<String>, ModuleError> {
    let exclude: Vec<String> = sources.exclude.iter().map(|path| normalize_path(path)).collect();
    let mut result = Vec::new();

    for root in &sources.roots {
        let root_path = Path::new(root);
        if !root_path.is_dir() {
            return Err(ModuleError::MissingRoot { path: root.clone() });
        }
        walk_directory(root_path, &exclude, &mut result)?;
    }
    for file in &sources.files {
        let file = normalize_path(file);
        if !is_excluded(&file, &exclude) {
            result.push(file);
        }
    }

    result.sort();
    result.dedup();
    tracing::debug!(roots = sources.roots.len(), files = result.len(), "discovered source files");
    Ok(result)
}

fn walk_directory(dir: &Path, exclude: &[String], result: &mut Vec<String>) -> Result<(), ModuleError> {
    let entries = std::fs::read_dir(dir).map_err(|source| ModuleError::ReadDir {
        path: path_to_string(dir),
        source,
    })?;

    for entry in entries.flatten() {
        let path = entry.path();
        let path_str = normalize_path(&path_to_string(&path));
        if is_excluded(&path_str, exclude) {
            continue;
        }

        if path.is_dir() {
            // Hidden directories (.git, .idea, ...) never hold sources.
            let hidden = path.file_name().and_then(|name| name.to_str()).is_some_and(|name| name.starts_with('.'));
            if !hidden {
                walk_directory(&path, exclude, result)?;
            }
        } else if path.is_file() && has_java_file_extension(&path_str) {
            result.push(path_str);
        }
    }
    Ok(())
}

fn is_excluded(path: &str, exclude: &[String]) -> bool {
    exclude.iter().any(|pattern| Path::new(path).starts_with(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(root: &Path, relative: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create directories");
        }
        fs::write(path, "class X {}").expect("write source");
    }

    fn root_of(dir: &tempfile::TempDir) -> String {
        normalize_path(&path_to_string(dir.path()))
    }

    #[test]
    fn test_discovers_java_files_recursively_in_sorted_order() {
        let dir = tempfile::tempdir().expect("temp dir");
        write(dir.path(), "test/Second.java");
        write(dir.path(), "test/Main.java");
        write(dir.path(), "a/Z.java");
        write(dir.path(), "notes.txt");
        write(dir.path(), ".git/Hidden.java");

        let root = root_of(&dir);
        let files = discover_source_files(&SourceSet { roots: vec![root.clone()], ..SourceSet::default() })
            .expect("discovery");
        assert_eq!(
            files,
            vec![format!("{}/a/Z.java", root), format!("{}/test/Main.java", root), format!("{}/test/Second.java", root)]
        );
    }

    #[test]
    fn test_explicit_files_are_merged_and_deduplicated() {
        let dir = tempfile::tempdir().expect("temp dir");
        write(dir.path(), "test/Main.java");
        let root = root_of(&dir);
        let sources = SourceSet {
            roots: vec![root.clone()],
            files: vec![format!("{}/test/./Main.java", root), format!("{}/Extra.java", root)],
            exclude: Vec::new(),
        };
        let files = discover_source_files(&sources).expect("discovery");
        assert_eq!(files, vec![format!("{}/Extra.java", root), format!("{}/test/Main.java", root)]);
    }

    #[test]
    fn test_exclusions() {
        let dir = tempfile::tempdir().expect("temp dir");
        write(dir.path(), "src/Main.java");
        write(dir.path(), "src/generated/Gen.java");
        let root = root_of(&dir);
        let sources = SourceSet {
            roots: vec![format!("{}/src", root)],
            files: Vec::new(),
            exclude: vec![format!("{}/src/generated", root)],
        };
        assert_eq!(discover_source_files(&sources).expect("discovery"), vec![format!("{}/src/Main.java", root)]);
        assert!(!is_excluded("/p/src/generatedX/A.java", &["/p/src/generated".to_string()]));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let sources = SourceSet { roots: vec!["/definitely/not/here".to_string()], ..SourceSet::default() };
        assert!(matches!(discover_source_files(&sources), Err(ModuleError::MissingRoot { .. })));
    }
}
