//! j2d_emitter: Dart file output.
//!
//! Prints translated units and decides where each `.dart` file goes: next
//! to its Java source, or under an output directory mirroring the source
//! tree below its source root.

use j2d_dart_ast::{CompilationUnit, IdentifierTable};
use j2d_path::{change_extension, combine_paths, get_base_name, get_relative_path, normalize_path, Extension};
use j2d_printer::{Printer, PrinterOptions};
use std::path::Path;

/// The emitter produces output files from translated units.
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    /// Output directory override.
    pub out_dir: Option<String>,
    /// Source roots, for paths relative to the output directory.
    pub roots: Vec<String>,
}

/// A file produced by the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: String,
    pub text: String,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print `unit` as the output for `source_path`. Identifier text is read
    /// from `identifiers` now, so renames must already be applied.
    pub fn emit(&self, source_path: &str, unit: &CompilationUnit, identifiers: &IdentifierTable) -> OutputFile {
        let mut printer = Printer::with_options(identifiers, PrinterOptions { trailing_newline: true });
        OutputFile {
            path: self.output_path(source_path),
            text: printer.print_unit(unit),
        }
    }

    /// Write output files to disk.
    pub fn write_output_files(&self, files: &[OutputFile]) -> std::io::Result<()> {
        for file in files {
            if let Some(parent) = Path::new(&file.path).parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&file.path, &file.text)?;
        }
        Ok(())
    }

    /// `src/test/Main.java` with root `src` and out dir `out` becomes
    /// `out/test/Main.dart`. A source outside every root lands directly in
    /// the out dir; without an out dir the output sits beside the source.
    pub fn output_path(&self, source_path: &str) -> String {
        let source_path = normalize_path(source_path);
        let Some(out_dir) = &self.out_dir else {
            return change_extension(&source_path, Extension::Dart);
        };
        let relative = self
            .roots
            .iter()
            .map(|root| normalize_path(root))
            .find(|root| Path::new(&source_path).starts_with(root))
            .map(|root| get_relative_path(&root, &source_path))
            .unwrap_or_else(|| get_base_name(&source_path).to_string());
        change_extension(&combine_paths(out_dir, &relative), Extension::Dart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use j2d_nodebuilder::NodeBuilder;

    #[test]
    fn test_output_path_beside_source() {
        let emitter = Emitter::new();
        assert_eq!(emitter.output_path("src/test/Main.java"), "src/test/Main.dart");
    }

    #[test]
    fn test_output_path_with_out_dir() {
        let emitter = Emitter { out_dir: Some("out".to_string()), roots: vec!["/p/src".to_string()] };
        assert_eq!(emitter.output_path("/p/src/test/Main.java"), "out/test/Main.dart");
        assert_eq!(emitter.output_path("/elsewhere/Tool.java"), "out/Tool.dart");
    }

    #[test]
    fn test_emit_and_write() {
        let mut identifiers = IdentifierTable::new();
        let name = j2d_dart_ast::SimpleIdentifier { id: identifiers.create("A") };
        let class = NodeBuilder::new().class_declaration(name, Vec::new(), Vec::new());
        let unit = CompilationUnit { declarations: vec![class] };

        let dir = tempfile::tempdir().expect("temp dir");
        let out_dir = j2d_path::path_to_string(dir.path());
        let emitter = Emitter { out_dir: Some(out_dir.clone()), roots: vec!["/p/src".to_string()] };
        let file = emitter.emit("/p/src/test/A.java", &unit, &identifiers);
        assert_eq!(file.text, "class A {}\n");
        assert_eq!(file.path, format!("{}/test/A.dart", out_dir));

        emitter.write_output_files(std::slice::from_ref(&file)).expect("write");
        assert_eq!(std::fs::read_to_string(&file.path).expect("read back"), "class A {}\n");
    }
}
