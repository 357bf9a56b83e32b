use crate::dispatch::unsupported;
use crate::error::{TranslateError, TranslateResult};
use crate::translator::Translator;
use j2d_ast as java;
use j2d_dart_ast as dart;

impl Translator<'_> {
    pub(crate) fn translate_block(&mut self, node: &java::Block<'_>) -> TranslateResult<dart::Block> {
        let statements = self.translate_all(node.statements, Self::translate_statement)?;
        Ok(dart::Block { statements })
    }

    pub(crate) fn translate_expression_statement(
        &mut self,
        node: &java::ExpressionStatement<'_>,
    ) -> TranslateResult<dart::Statement> {
        let expression = self.translate_expression(node.expression)?;
        Ok(self.builder.expression_statement(expression))
    }

    pub(crate) fn translate_variable_declaration_statement(
        &mut self,
        node: &java::VariableDeclarationStatement<'_>,
    ) -> TranslateResult<dart::Statement> {
        let variables = self.translate_variable_list(node.type_node, node.fragments)?;
        Ok(self.builder.variable_statement(variables))
    }

    pub(crate) fn translate_if_statement(&mut self, node: &java::IfStatement<'_>) -> TranslateResult<dart::Statement> {
        let condition = self.translate_expression(node.expression)?;
        let then_statement = self.translate_statement(node.then_statement)?;
        let else_statement = match node.else_statement {
            Some(else_statement) => Some(self.translate_statement(else_statement)?),
            None => None,
        };
        Ok(self.builder.if_statement(condition, then_statement, else_statement))
    }

    pub(crate) fn translate_while_statement(
        &mut self,
        node: &java::WhileStatement<'_>,
    ) -> TranslateResult<dart::Statement> {
        let condition = self.translate_expression(node.expression)?;
        let body = self.translate_statement(node.body)?;
        Ok(self.builder.while_statement(condition, body))
    }

    pub(crate) fn translate_do_statement(&mut self, node: &java::DoStatement<'_>) -> TranslateResult<dart::Statement> {
        let body = self.translate_statement(node.body)?;
        let condition = self.translate_expression(node.expression)?;
        Ok(self.builder.do_statement(body, condition))
    }

    /// A lone variable declaration initializer becomes the loop's declared
    /// variables; any other lone initializer is kept as an expression.
    pub(crate) fn translate_for_statement(&mut self, node: &java::ForStatement<'_>) -> TranslateResult<dart::Statement> {
        let (variables, initialization) = match node.initializers {
            [] => (None, None),
            [java::Expression::VariableDeclaration(declaration)] => {
                (Some(self.translate_variable_list(declaration.type_node, declaration.fragments)?), None)
            }
            [initializer] => (None, Some(self.translate_expression(initializer)?)),
            _ => return Err(unsupported(&node.data, "for statement with more than one initializer")),
        };
        let condition = match node.expression {
            Some(condition) => Some(self.translate_expression(condition)?),
            None => None,
        };
        let updaters = self.translate_all(node.updaters, Self::translate_expression)?;
        let body = self.translate_statement(node.body)?;
        Ok(self.builder.for_statement(variables, initialization, condition, updaters, body))
    }

    pub(crate) fn translate_enhanced_for_statement(
        &mut self,
        node: &java::EnhancedForStatement<'_>,
    ) -> TranslateResult<dart::Statement> {
        let loop_parameter = self.translate_formal_parameter(&node.parameter)?;
        let iterable = self.translate_expression(node.expression)?;
        let body = self.translate_statement(node.body)?;
        Ok(self.builder.for_each_statement(loop_parameter, iterable, body))
    }

    /// Each case label opens a switch member; the statements after it, up
    /// to the next label, belong to that member.
    pub(crate) fn translate_switch_statement(
        &mut self,
        node: &java::SwitchStatement<'_>,
    ) -> TranslateResult<dart::Statement> {
        let expression = self.translate_expression(node.expression)?;
        let mut members: Vec<dart::SwitchMember> = Vec::new();
        for statement in node.statements {
            if let java::Statement::SwitchCase(case) = statement {
                let expression = match case.expression {
                    Some(expression) => Some(self.translate_expression(expression)?),
                    None => None,
                };
                members.push(self.builder.switch_member(expression));
                continue;
            }
            if members.is_empty() {
                let data = statement.data();
                return Err(TranslateError::malformed(data.kind, data.range, "statement before the first case label"));
            }
            let translated = self.translate_statement(statement)?;
            if let Some(member) = members.last_mut() {
                member.statements_mut().push(translated);
            }
        }
        Ok(dart::Statement::Switch(dart::SwitchStatement { expression, members }))
    }

    pub(crate) fn translate_break_statement(&mut self, node: &java::BreakStatement) -> TranslateResult<dart::Statement> {
        let label = node.label.as_ref().map(|label| self.label(label));
        Ok(dart::Statement::Break(dart::BreakStatement { label }))
    }

    pub(crate) fn translate_continue_statement(
        &mut self,
        node: &java::ContinueStatement,
    ) -> TranslateResult<dart::Statement> {
        let label = node.label.as_ref().map(|label| self.label(label));
        Ok(dart::Statement::Continue(dart::ContinueStatement { label }))
    }

    pub(crate) fn translate_return_statement(
        &mut self,
        node: &java::ReturnStatement<'_>,
    ) -> TranslateResult<dart::Statement> {
        let expression = match node.expression {
            Some(expression) => Some(self.translate_expression(expression)?),
            None => None,
        };
        Ok(dart::Statement::Return(dart::ReturnStatement { expression }))
    }

    pub(crate) fn translate_throw_statement(
        &mut self,
        node: &java::ThrowStatement<'_>,
    ) -> TranslateResult<dart::Statement> {
        let expression = self.translate_expression(node.expression)?;
        Ok(dart::Statement::Throw(dart::ThrowStatement { expression }))
    }

    pub(crate) fn translate_try_statement(&mut self, node: &java::TryStatement<'_>) -> TranslateResult<dart::Statement> {
        let body = self.translate_block(&node.body)?;
        let catch_clauses = self.translate_all(node.catch_clauses, Self::translate_catch_clause)?;
        let finally_block = match &node.finally {
            Some(finally) => Some(self.translate_block(finally)?),
            None => None,
        };
        Ok(dart::Statement::Try(dart::TryStatement { body, catch_clauses, finally_block }))
    }

    /// `catch (E e) {}` becomes `on E catch (e) {}`.
    pub(crate) fn translate_catch_clause(&mut self, node: &java::CatchClause<'_>) -> TranslateResult<dart::CatchClause> {
        let exception_type = self.translate_type(node.exception.type_node)?;
        let exception_parameter = self.identifier(&node.exception.name);
        let body = self.translate_block(&node.body)?;
        Ok(dart::CatchClause { exception_type, exception_parameter, body })
    }

    /// `a: b: s` nests one label per Java node; Dart takes the whole chain
    /// on a single statement.
    pub(crate) fn translate_labeled_statement(
        &mut self,
        node: &java::LabeledStatement<'_>,
    ) -> TranslateResult<dart::Statement> {
        let mut labels = vec![self.label(&node.label)];
        let mut body = node.body;
        while let java::Statement::Labeled(inner) = body {
            labels.push(self.label(&inner.label));
            body = inner.body;
        }
        let statement = self.translate_statement(body)?;
        Ok(self.builder.labeled_statement(labels, statement))
    }

    /// The lock expression is dropped; only the guarded block remains.
    pub(crate) fn translate_synchronized_statement(
        &mut self,
        node: &java::SynchronizedStatement<'_>,
    ) -> TranslateResult<dart::Statement> {
        Ok(dart::Statement::Block(self.translate_block(&node.body)?))
    }

    pub(crate) fn translate_assert_statement(
        &mut self,
        node: &java::AssertStatement<'_>,
    ) -> TranslateResult<dart::Statement> {
        if node.message.is_some() {
            return Err(unsupported(&node.data, "assert with a message"));
        }
        let condition = self.translate_expression(node.expression)?;
        Ok(dart::Statement::Assert(dart::AssertStatement { condition }))
    }
}
