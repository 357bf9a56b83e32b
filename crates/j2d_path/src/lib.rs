//! j2d_path: path normalization and extension handling.
//!
//! Paths are handled as `/`-separated strings so that file identities,
//! diagnostics and emitted paths read the same on every platform.

use std::path::{Component, Path, PathBuf};

/// Source and output file extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    Java,
    Dart,
}

impl Extension {
    /// The extension including the dot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Extension::Java => ".java",
            Extension::Dart => ".dart",
        }
    }

    pub fn from_path(path: &str) -> Option<Extension> {
        let lower = path.to_ascii_lowercase();
        if lower.ends_with(".java") {
            Some(Extension::Java)
        } else if lower.ends_with(".dart") {
            Some(Extension::Dart)
        } else {
            None
        }
    }
}

/// Convert backslashes to forward slashes.
pub fn normalize_slashes(path: &str) -> String {
    path.replace('\\', "/")
}

/// Forward slashes, with `.` segments removed and `..` segments folded into
/// their parent where one exists.
pub fn normalize_path(path: &str) -> String {
    let path = normalize_slashes(path);
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }
    let joined = segments.join("/");
    if rooted {
        format!("/{}", joined)
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Check if a path is rooted (absolute).
pub fn is_rooted(path: &str) -> bool {
    let bytes = path.as_bytes();
    match bytes {
        [] => false,
        [b'/' | b'\\', ..] => true,
        // Windows drive, `C:/` or `C:\`
        [drive, b':', b'/' | b'\\', ..] => drive.is_ascii_alphabetic(),
        _ => false,
    }
}

/// `relative` resolved against `base`, unless it is rooted already.
pub fn combine_paths(base: &str, relative: &str) -> String {
    if is_rooted(relative) || base.is_empty() {
        return relative.to_string();
    }
    format!("{}{}", ensure_trailing_directory_separator(base), relative)
}

/// Everything up to and including the last `/`.
pub fn get_directory_path(path: &str) -> String {
    let normalized = normalize_slashes(path);
    match normalized.rfind('/') {
        Some(last_slash) => normalized[..=last_slash].to_string(),
        None => String::new(),
    }
}

/// The file name after the last separator.
pub fn get_base_name(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(last_slash) => &path[last_slash + 1..],
        None => path,
    }
}

/// Remove the file extension, if the last segment has one.
pub fn remove_extension(path: &str) -> &str {
    let base_start = path.rfind(['/', '\\']).map_or(0, |slash| slash + 1);
    match path[base_start..].rfind('.') {
        Some(dot) if dot > 0 => &path[..base_start + dot],
        _ => path,
    }
}

pub fn change_extension(path: &str, extension: Extension) -> String {
    format!("{}{}", remove_extension(path), extension.as_str())
}

pub fn ensure_trailing_directory_separator(path: &str) -> String {
    if path.ends_with('/') || path.ends_with('\\') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

pub fn has_java_file_extension(path: &str) -> bool {
    Extension::from_path(path) == Some(Extension::Java)
}

/// Relative path from directory `from` to `to`. Both are compared
/// component-wise after normalization.
pub fn get_relative_path(from: &str, to: &str) -> String {
    let from_path = PathBuf::from(normalize_path(from));
    let to_path = PathBuf::from(normalize_path(to));
    let mut from_components = from_path.components().filter(|c| *c != Component::CurDir).peekable();
    let mut to_components = to_path.components().filter(|c| *c != Component::CurDir).peekable();

    while let (Some(a), Some(b)) = (from_components.peek(), to_components.peek()) {
        if a != b {
            break;
        }
        from_components.next();
        to_components.next();
    }

    let mut relative = PathBuf::new();
    for _ in from_components {
        relative.push("..");
    }
    for component in to_components {
        relative.push(component);
    }
    normalize_slashes(&relative.to_string_lossy())
}

/// A `Path` rendered with forward slashes.
pub fn path_to_string(path: &Path) -> String {
    normalize_slashes(&path.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_from_path() {
        assert_eq!(Extension::from_path("test/Main.java"), Some(Extension::Java));
        assert_eq!(Extension::from_path("Main.JAVA"), Some(Extension::Java));
        assert_eq!(Extension::from_path("out/main.dart"), Some(Extension::Dart));
        assert_eq!(Extension::from_path("Main.class"), None);
        assert!(has_java_file_extension("a/B.java"));
        assert!(!has_java_file_extension("a/B.javax"));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("a\\b\\c"), "a/b/c");
        assert_eq!(normalize_path("./a/./b/../c"), "a/c");
        assert_eq!(normalize_path("../a"), "../a");
        assert_eq!(normalize_path("/a/../../b"), "/b");
        assert_eq!(normalize_path("a/.."), ".");
    }

    #[test]
    fn test_directory_and_base_name() {
        assert_eq!(get_directory_path("/src/test/Main.java"), "/src/test/");
        assert_eq!(get_directory_path("Main.java"), "");
        assert_eq!(get_base_name("src/test/Main.java"), "Main.java");
        assert_eq!(get_base_name("src\\Main.java"), "Main.java");
    }

    #[test]
    fn test_change_extension() {
        assert_eq!(change_extension("src/test/Main.java", Extension::Dart), "src/test/Main.dart");
        assert_eq!(change_extension("src/v1.2/Main", Extension::Dart), "src/v1.2/Main.dart");
        assert_eq!(remove_extension(".hidden"), ".hidden");
    }

    #[test]
    fn test_is_rooted() {
        assert!(is_rooted("/usr/src"));
        assert!(is_rooted("C:\\src"));
        assert!(!is_rooted("src/test"));
        assert!(!is_rooted(""));
    }

    #[test]
    fn test_combine_and_relative_paths() {
        assert_eq!(combine_paths("/a/b", "C.java"), "/a/b/C.java");
        assert_eq!(combine_paths("/a/b/", "C.java"), "/a/b/C.java");
        assert_eq!(combine_paths("", "C.java"), "C.java");
        assert_eq!(combine_paths("/a", "/b/C.java"), "/b/C.java");
        assert_eq!(get_relative_path("/p/src", "/p/src/test/Main.java"), "test/Main.java");
        assert_eq!(get_relative_path("/p/src", "/p/lib/A.java"), "../lib/A.java");
    }
}
