//! The translator context threaded through every rule.

use crate::error::TranslateResult;
use crate::registry::BindingRegistry;
use j2d_ast as java;
use j2d_ast::ResolvedNames;
use j2d_core::intern::StringInterner;
use j2d_dart_ast as dart;
use j2d_dart_ast::SimpleIdentifier;
use j2d_nodebuilder::NodeBuilder;

/// Translates Java syntax trees of one batch into Dart syntax trees.
///
/// A translator is cheap to create; the driver makes one per compilation
/// unit and shares the [`BindingRegistry`] across all of them.
pub struct Translator<'t> {
    pub(crate) interner: &'t StringInterner,
    pub(crate) names: &'t dyn ResolvedNames,
    pub(crate) registry: &'t mut BindingRegistry,
    pub(crate) builder: NodeBuilder,
}

impl<'t> Translator<'t> {
    pub fn new(interner: &'t StringInterner, names: &'t dyn ResolvedNames, registry: &'t mut BindingRegistry) -> Self {
        Self {
            interner,
            names,
            registry,
            builder: NodeBuilder::new(),
        }
    }

    pub fn registry(&self) -> &BindingRegistry {
        &*self.registry
    }

    /// A Dart identifier for a Java name, registered under the name's
    /// binding key.
    pub(crate) fn identifier(&mut self, name: &java::Identifier) -> SimpleIdentifier {
        let text = self.interner.resolve(name.text);
        let identifier = self.registry.new_identifier(text);
        self.registry.register(self.names.binding_key(name), &identifier);
        identifier
    }

    /// A Dart identifier that no rename can reach: labels and primitive
    /// type names.
    pub(crate) fn plain_identifier(&mut self, text: &str) -> SimpleIdentifier {
        self.registry.new_identifier(text)
    }

    pub(crate) fn label(&mut self, label: &java::Identifier) -> SimpleIdentifier {
        let text = self.interner.resolve(label.text);
        self.plain_identifier(text)
    }

    /// Runs `translate` with fallback keys attributed to the declaration
    /// `name` nested in the current scope.
    pub(crate) fn in_scope<T>(
        &mut self,
        name: &java::Identifier,
        translate: impl FnOnce(&mut Self) -> TranslateResult<T>,
    ) -> TranslateResult<T> {
        self.registry.enter_scope(self.interner.resolve(name.text));
        let result = translate(self);
        self.registry.exit_scope();
        result
    }

    pub(crate) fn translate_all<T, U>(
        &mut self,
        nodes: &[T],
        mut translate: impl FnMut(&mut Self, &T) -> TranslateResult<U>,
    ) -> TranslateResult<Vec<U>> {
        let mut translated = Vec::with_capacity(nodes.len());
        for node in nodes {
            translated.push(translate(self, node)?);
        }
        Ok(translated)
    }
}

/// Translates one compilation unit, registering its identifiers in
/// `registry`.
///
/// On error nothing is returned for the unit; identifiers registered before
/// the failure stay in the registry, which the driver discards with the
/// failed batch.
pub fn translate_unit(
    unit: &java::CompilationUnit<'_>,
    interner: &StringInterner,
    names: &dyn ResolvedNames,
    registry: &mut BindingRegistry,
) -> TranslateResult<dart::CompilationUnit> {
    registry.begin_unit(unit.file_name.as_str());
    let before = registry.occurrence_count();
    let mut translator = Translator::new(interner, names, registry);
    let translated = translator.translate_compilation_unit(unit)?;
    tracing::debug!(
        file = %unit.file_name,
        classes = translated.declarations.len(),
        registered = translator.registry().occurrence_count() - before,
        "translated unit"
    );
    Ok(translated)
}
