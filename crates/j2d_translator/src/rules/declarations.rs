use crate::dispatch::unsupported;
use crate::error::TranslateResult;
use crate::translator::Translator;
use j2d_ast as java;
use j2d_dart_ast as dart;

impl Translator<'_> {
    /// Classes and interfaces both become Dart classes. Only the name, the
    /// type parameters and the members carry over; `extends` and
    /// `implements` clauses are dropped.
    pub(crate) fn translate_type_declaration(
        &mut self,
        node: &java::TypeDeclaration<'_>,
    ) -> TranslateResult<dart::ClassDeclaration> {
        let name = self.identifier(&node.name);
        let (type_parameters, members) = self.in_scope(&node.name, |this| {
            let type_parameters = this.translate_all(node.type_parameters, Self::translate_type_parameter)?;
            let members = this.translate_all(node.members, Self::translate_body_declaration)?;
            Ok((type_parameters, members))
        })?;
        Ok(self.builder.class_declaration(name, type_parameters, members))
    }

    pub(crate) fn translate_type_parameter(
        &mut self,
        node: &java::TypeParameter<'_>,
    ) -> TranslateResult<dart::TypeParameter> {
        if node.bounds.len() > 1 {
            return Err(unsupported(&node.data, "type parameter with more than one bound"));
        }
        let name = self.identifier(&node.name);
        let bound = match node.bounds.first() {
            Some(bound) => Some(self.translate_type(bound)?),
            None => None,
        };
        Ok(dart::TypeParameter { name, bound })
    }

    pub(crate) fn translate_field_declaration(
        &mut self,
        node: &java::FieldDeclaration<'_>,
    ) -> TranslateResult<dart::ClassMember> {
        let variables = match node.fragments.first() {
            Some(first) => self.in_scope(&first.name, |this| this.translate_variable_list(node.type_node, node.fragments))?,
            None => self.translate_variable_list(node.type_node, node.fragments)?,
        };
        Ok(self.builder.field_declaration(variables))
    }

    /// Methods and constructors. Thrown exception lists are dropped.
    pub(crate) fn translate_method_declaration(
        &mut self,
        node: &java::MethodDeclaration<'_>,
    ) -> TranslateResult<dart::ClassMember> {
        if !node.type_parameters.is_empty() {
            return Err(unsupported(&node.data, "generic method"));
        }
        let return_type = match node.return_type {
            Some(return_type) => Some(self.translate_type(return_type)?),
            None => None,
        };
        let name = self.identifier(&node.name);
        let (parameters, body) = self.in_scope(&node.name, |this| {
            let parameters = this.translate_all(node.parameters, Self::translate_formal_parameter)?;
            let body = match node.body {
                Some(body) => Some(this.translate_block(body)?),
                None => None,
            };
            Ok((parameters, body))
        })?;
        Ok(self.builder.method_declaration(return_type, name, parameters, body))
    }

    pub(crate) fn translate_formal_parameter(
        &mut self,
        node: &java::SingleVariableDeclaration<'_>,
    ) -> TranslateResult<dart::SimpleFormalParameter> {
        if node.is_varargs {
            return Err(unsupported(&node.data, "variable arity parameter"));
        }
        let type_name = self.translate_type(node.type_node)?;
        let identifier = self.identifier(&node.name);
        Ok(dart::SimpleFormalParameter { type_name, identifier })
    }

    /// The declared type followed by its declarators, shared by fields,
    /// local variables and for-loop initializers.
    pub(crate) fn translate_variable_list(
        &mut self,
        type_node: &java::TypeNode<'_>,
        fragments: &[java::VariableDeclarationFragment<'_>],
    ) -> TranslateResult<dart::VariableDeclarationList> {
        let type_name = self.translate_type(type_node)?;
        let variables = self.translate_all(fragments, Self::translate_fragment)?;
        Ok(self.builder.variable_list(type_name, variables))
    }

    pub(crate) fn translate_fragment(
        &mut self,
        node: &java::VariableDeclarationFragment<'_>,
    ) -> TranslateResult<dart::VariableDeclaration> {
        if node.extra_dimensions > 0 {
            return Err(unsupported(&node.data, "array dimensions after a variable name"));
        }
        let name = self.identifier(&node.name);
        let initializer = match node.initializer {
            Some(initializer) => Some(self.translate_expression(initializer)?),
            None => None,
        };
        Ok(dart::VariableDeclaration { name, initializer })
    }
}
