//! j2d_compiler: batch orchestration.
//!
//! A batch runs in two phases. [`Program`] collects the Java sources and
//! translates all of them through one binding registry. The resulting
//! [`TranslatedProgram`] is the only place renames can be applied, so a
//! rename always sees every identifier of the batch.

mod error;
mod frontend;

pub use error::DriverError;

use indexmap::IndexMap;
use j2d_core::StringInterner;
use j2d_dart_ast as dart;
use j2d_emitter::{Emitter, OutputFile};
use j2d_module::{discover_source_files, SourceSet};
use j2d_options::CompilerOptions;
use j2d_printer::print_unit;
use j2d_translator::{BindingRegistry, KeyCollision, KeyPolicy};

/// The sources of one batch, before translation.
pub struct Program {
    pub options: CompilerOptions,
    /// Source text by file path.
    sources: IndexMap<String, String>,
}

impl Program {
    pub fn new(options: CompilerOptions) -> Self {
        Self { options, sources: IndexMap::new() }
    }

    /// Add a source file. Adding the same path again replaces its text.
    pub fn add_source(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.sources.insert(path.into(), text.into());
    }

    /// Discover the configured roots and files and read them from disk.
    pub fn load_root_files(&mut self) -> Result<(), DriverError> {
        let sources = SourceSet {
            roots: self.options.source_roots.clone(),
            files: self.options.files.clone(),
            exclude: self.options.exclude.clone(),
        };
        for path in discover_source_files(&sources)? {
            let text = std::fs::read_to_string(&path).map_err(|source| DriverError::Io { path: path.clone(), source })?;
            self.add_source(path, text);
        }
        Ok(())
    }

    pub fn source_paths(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Translate every source, in path order. Any failure aborts the whole
    /// batch and no unit is returned.
    pub fn translate(mut self) -> Result<TranslatedProgram, DriverError> {
        self.sources.sort_keys();
        let interner = StringInterner::new();
        let env = frontend::index_sources(self.sources.iter().map(|(path, text)| (path.as_str(), text.as_str())), &interner)?;

        let policy = if self.options.best_effort_keys { KeyPolicy::BestEffort } else { KeyPolicy::ResolvedOnly };
        let mut registry = BindingRegistry::new(policy);
        let mut units = IndexMap::with_capacity(self.sources.len());
        for (path, text) in &self.sources {
            let unit = frontend::translate_source(path, text, &env, &interner, &mut registry)?;
            units.insert(path.clone(), unit);
        }

        tracing::info!(files = units.len(), keys = registry.len(), occurrences = registry.occurrence_count(), "translated batch");
        for collision in registry.collisions() {
            tracing::warn!(key = %collision.key, scopes = %collision.scopes.join(", "), "best-effort key shared by several scopes");
        }
        Ok(TranslatedProgram { options: self.options, units, registry })
    }
}

/// A fully translated batch.
pub struct TranslatedProgram {
    pub options: CompilerOptions,
    units: IndexMap<String, dart::CompilationUnit>,
    registry: BindingRegistry,
}

impl TranslatedProgram {
    /// Translated units by source path, in translation order.
    pub fn units(&self) -> impl Iterator<Item = (&str, &dart::CompilationUnit)> {
        self.units.iter().map(|(path, unit)| (path.as_str(), unit))
    }

    pub fn unit(&self, path: &str) -> Option<&dart::CompilationUnit> {
        self.units.get(path)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn registry(&self) -> &BindingRegistry {
        &self.registry
    }

    pub fn collisions(&self) -> Vec<KeyCollision> {
        self.registry.collisions()
    }

    /// Rename every occurrence of `key`, in every unit.
    pub fn rename_all(&mut self, key: &str, new_name: &str) -> Result<usize, DriverError> {
        let renamed = self.registry.rename_all(key, new_name)?;
        if renamed == 0 {
            tracing::warn!(key, "rename matched no identifier");
        } else {
            tracing::info!(key, new_name, renamed, "renamed");
        }
        Ok(renamed)
    }

    /// Apply the configured renames in order. Returns the total number of
    /// identifiers changed. The configured list is left intact, also when a
    /// rename fails part way.
    pub fn apply_renames(&mut self) -> Result<usize, DriverError> {
        let renames = self.options.renames.clone();
        let mut total = 0;
        for rename in &renames {
            total += self.rename_all(&rename.key, &rename.new_name)?;
        }
        Ok(total)
    }

    /// The canonical rendering of one unit.
    pub fn render(&self, path: &str) -> Option<String> {
        self.units.get(path).map(|unit| print_unit(self.registry.identifiers(), unit))
    }

    pub fn render_all(&self) -> Vec<(String, String)> {
        self.units
            .iter()
            .map(|(path, unit)| (path.clone(), print_unit(self.registry.identifiers(), unit)))
            .collect()
    }

    fn emitter(&self) -> Emitter {
        Emitter { out_dir: self.options.out_dir.clone(), roots: self.options.source_roots.clone() }
    }

    /// Output files for every unit, without touching the disk.
    pub fn emit(&self) -> Vec<OutputFile> {
        let emitter = self.emitter();
        self.units
            .iter()
            .map(|(path, unit)| emitter.emit(path, unit, self.registry.identifiers()))
            .collect()
    }

    /// Emit and write every unit.
    pub fn write_outputs(&self) -> Result<Vec<OutputFile>, DriverError> {
        let files = self.emit();
        self.emitter().write_output_files(&files).map_err(|source| DriverError::Io {
            path: self.options.out_dir.clone().unwrap_or_default(),
            source,
        })?;
        tracing::info!(files = files.len(), "wrote output files");
        Ok(files)
    }
}
