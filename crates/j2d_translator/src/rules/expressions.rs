use crate::dispatch::unsupported;
use crate::error::{TranslateError, TranslateResult};
use crate::literals::{normalize_number, NumberLiteral};
use crate::operators::{assignment_operator, binary_operator, postfix_operator, prefix_operator, PrefixOperator};
use crate::translator::Translator;
use j2d_ast as java;
use j2d_dart_ast as dart;

impl Translator<'_> {
    pub(crate) fn translate_number_literal(&mut self, node: &java::NumberLiteral<'_>) -> dart::Expression {
        match normalize_number(node.token) {
            NumberLiteral::Int(lexeme) => self.builder.integer_literal(lexeme),
            NumberLiteral::Double(lexeme) => self.builder.double_literal(lexeme),
        }
    }

    pub(crate) fn translate_assignment(&mut self, node: &java::Assignment<'_>) -> TranslateResult<dart::Expression> {
        let operator = assignment_operator(node.operator)
            .ok_or_else(|| operator_error(node.operator, &node.data))?;
        let left = self.translate_expression(node.left)?;
        let right = self.translate_expression(node.right)?;
        Ok(self.builder.binary(left, operator, right))
    }

    /// The operator is looked up before either operand is visited, so an
    /// `instanceof` fails on the operator rather than on its type operand.
    pub(crate) fn translate_infix_expression(
        &mut self,
        node: &java::InfixExpression<'_>,
    ) -> TranslateResult<dart::Expression> {
        let operator = binary_operator(node.operator).ok_or_else(|| operator_error(node.operator, &node.data))?;
        let left = self.translate_expression(node.left)?;
        let right = self.translate_expression(node.right)?;
        Ok(self.builder.binary(left, operator, right))
    }

    pub(crate) fn translate_prefix_expression(
        &mut self,
        node: &java::PrefixExpression<'_>,
    ) -> TranslateResult<dart::Expression> {
        let operator = prefix_operator(node.operator).ok_or_else(|| operator_error(node.operator, &node.data))?;
        let operand = self.translate_expression(node.operand)?;
        Ok(match operator {
            PrefixOperator::Elided => operand,
            PrefixOperator::Token(token) => self.builder.prefix(token, operand),
        })
    }

    pub(crate) fn translate_postfix_expression(
        &mut self,
        node: &java::PostfixExpression<'_>,
    ) -> TranslateResult<dart::Expression> {
        let operator = postfix_operator(node.operator).ok_or_else(|| operator_error(node.operator, &node.data))?;
        let operand = self.translate_expression(node.operand)?;
        Ok(self.builder.postfix(operand, operator))
    }

    /// `(T) e` is just `e`.
    pub(crate) fn translate_cast_expression(&mut self, node: &java::CastExpression<'_>) -> TranslateResult<dart::Expression> {
        self.translate_expression(node.expression)
    }

    pub(crate) fn translate_method_invocation(
        &mut self,
        node: &java::MethodInvocation<'_>,
    ) -> TranslateResult<dart::Expression> {
        if !node.type_arguments.is_empty() {
            return Err(unsupported(&node.data, "explicit type arguments on an invocation"));
        }
        let target = match node.expression {
            Some(target) => Some(self.translate_expression(target)?),
            None => None,
        };
        let method_name = self.identifier(&node.name);
        let arguments = self.translate_all(node.arguments, Self::translate_expression)?;
        Ok(self.builder.method_invocation(target, method_name, arguments))
    }

    pub(crate) fn translate_instance_creation(
        &mut self,
        node: &java::ClassInstanceCreation<'_>,
    ) -> TranslateResult<dart::Expression> {
        if node.anonymous_body.is_some() {
            return Err(unsupported(&node.data, "anonymous class"));
        }
        let constructor_name = self.translate_type(node.type_node)?;
        let arguments = self.translate_all(node.arguments, Self::translate_expression)?;
        Ok(self.builder.instance_creation(constructor_name, arguments))
    }
}

/// An operator with no entry in its table. The error names the operator
/// token, which is what has no Dart form.
fn operator_error(operator: java::SyntaxKind, data: &java::NodeData) -> TranslateError {
    let detail = match operator.keyword_text() {
        Some(keyword) => format!("operator `{}` has no Dart equivalent", keyword),
        None => format!("operator {:?} has no Dart equivalent", operator),
    };
    TranslateError::unsupported(operator, data.range, detail)
}
