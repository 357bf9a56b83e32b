use crate::dispatch::unsupported;
use crate::error::TranslateResult;
use crate::literals::primitive_type_name;
use crate::translator::Translator;
use j2d_ast as java;
use j2d_dart_ast as dart;

impl Translator<'_> {
    pub(crate) fn translate_primitive_type(&mut self, node: &java::PrimitiveType) -> dart::TypeName {
        let name = self.plain_identifier(primitive_type_name(node.keyword));
        self.builder.type_name(name)
    }

    /// A qualified name becomes one identifier spelling the whole dotted
    /// name, registered under the binding of its last segment.
    pub(crate) fn translate_simple_type(&mut self, node: &java::SimpleType<'_>) -> dart::TypeName {
        let name = if node.qualifier.is_empty() {
            self.identifier(&node.name)
        } else {
            let mut text = String::new();
            for segment in node.qualifier.iter().chain(std::iter::once(&node.name)) {
                if !text.is_empty() {
                    text.push('.');
                }
                text.push_str(self.interner.resolve(segment.text));
            }
            let identifier = self.registry.new_identifier(text);
            self.registry.register(self.names.binding_key(&node.name), &identifier);
            identifier
        };
        self.builder.type_name(name)
    }

    /// `List<String>`. The diamond `List<>` has no Dart spelling and loses
    /// its brackets.
    pub(crate) fn translate_parameterized_type(
        &mut self,
        node: &java::ParameterizedType<'_>,
    ) -> TranslateResult<dart::TypeName> {
        let java::TypeNode::Simple(base) = node.base else {
            return Err(unsupported(node.base.data(), "parameterized type over a non-class type"));
        };
        let base = self.translate_simple_type(base);
        if node.type_arguments.is_empty() {
            return Ok(base);
        }
        let arguments = self.translate_all(node.type_arguments, Self::translate_type)?;
        Ok(self.builder.parameterized_type_name(base.name, arguments))
    }
}
