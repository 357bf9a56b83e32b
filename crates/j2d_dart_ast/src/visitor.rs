//! Read-only traversal of the Dart tree.

use crate::node::*;

/// A visitor over the Dart tree. Default implementations walk into
/// children; override the hooks of interest.
pub trait DartVisitor {
    fn visit_compilation_unit(&mut self, unit: &CompilationUnit) {
        for declaration in &unit.declarations {
            self.visit_class_declaration(declaration);
        }
    }

    fn visit_class_declaration(&mut self, node: &ClassDeclaration) {
        self.visit_identifier(&node.name);
        if let Some(list) = &node.type_parameters {
            for parameter in &list.type_parameters {
                self.visit_identifier(&parameter.name);
                if let Some(bound) = &parameter.bound {
                    self.visit_type_name(bound);
                }
            }
        }
        for member in &node.members {
            match member {
                ClassMember::Method(method) => self.visit_method_declaration(method),
                ClassMember::Field(field) => self.visit_variable_list(&field.variables),
            }
        }
    }

    fn visit_method_declaration(&mut self, node: &MethodDeclaration) {
        if let Some(return_type) = &node.return_type {
            self.visit_type_name(return_type);
        }
        self.visit_identifier(&node.name);
        for parameter in &node.parameters.parameters {
            self.visit_formal_parameter(parameter);
        }
        if let Some(body) = &node.body {
            self.visit_block(body);
        }
    }

    fn visit_formal_parameter(&mut self, node: &SimpleFormalParameter) {
        self.visit_type_name(&node.type_name);
        self.visit_identifier(&node.identifier);
    }

    fn visit_type_name(&mut self, node: &TypeName) {
        self.visit_identifier(&node.name);
        for argument in node.type_arguments.iter().flatten() {
            self.visit_type_name(argument);
        }
    }

    fn visit_variable_list(&mut self, node: &VariableDeclarationList) {
        self.visit_type_name(&node.type_name);
        for variable in &node.variables {
            self.visit_identifier(&variable.name);
            if let Some(initializer) = &variable.initializer {
                self.visit_expression(initializer);
            }
        }
    }

    fn visit_block(&mut self, node: &Block) {
        for statement in &node.statements {
            self.visit_statement(statement);
        }
    }

    fn visit_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Block(block) => self.visit_block(block),
            Statement::If(node) => {
                self.visit_expression(&node.condition);
                self.visit_statement(&node.then_statement);
                if let Some(else_statement) = &node.else_statement {
                    self.visit_statement(else_statement);
                }
            }
            Statement::While(node) => {
                self.visit_expression(&node.condition);
                self.visit_statement(&node.body);
            }
            Statement::Do(node) => {
                self.visit_statement(&node.body);
                self.visit_expression(&node.condition);
            }
            Statement::For(node) => {
                if let Some(variables) = &node.variables {
                    self.visit_variable_list(variables);
                }
                if let Some(initialization) = &node.initialization {
                    self.visit_expression(initialization);
                }
                if let Some(condition) = &node.condition {
                    self.visit_expression(condition);
                }
                for updater in &node.updaters {
                    self.visit_expression(updater);
                }
                self.visit_statement(&node.body);
            }
            Statement::ForEach(node) => {
                self.visit_formal_parameter(&node.loop_parameter);
                self.visit_expression(&node.iterable);
                self.visit_statement(&node.body);
            }
            Statement::Switch(node) => {
                self.visit_expression(&node.expression);
                for member in &node.members {
                    if let SwitchMember::Case(case) = member {
                        self.visit_expression(&case.expression);
                    }
                    for statement in member.statements() {
                        self.visit_statement(statement);
                    }
                }
            }
            Statement::Try(node) => {
                self.visit_block(&node.body);
                for clause in &node.catch_clauses {
                    self.visit_type_name(&clause.exception_type);
                    self.visit_identifier(&clause.exception_parameter);
                    self.visit_block(&clause.body);
                }
                if let Some(finally_block) = &node.finally_block {
                    self.visit_block(finally_block);
                }
            }
            Statement::Labeled(node) => {
                for label in &node.labels {
                    self.visit_label(label);
                }
                self.visit_statement(&node.statement);
            }
            Statement::Break(BreakStatement { label }) | Statement::Continue(ContinueStatement { label }) => {
                if let Some(label) = label {
                    self.visit_label(label);
                }
            }
            Statement::Return(node) => {
                if let Some(expression) = &node.expression {
                    self.visit_expression(expression);
                }
            }
            Statement::Throw(node) => self.visit_expression(&node.expression),
            Statement::Expression(node) => self.visit_expression(&node.expression),
            Statement::VariableDeclaration(node) => self.visit_variable_list(&node.variables),
            Statement::Assert(node) => self.visit_expression(&node.condition),
            Statement::Empty => {}
        }
    }

    fn visit_expression(&mut self, expression: &Expression) {
        match expression {
            Expression::Binary(node) => {
                self.visit_expression(&node.left);
                self.visit_expression(&node.right);
            }
            Expression::Prefix(node) => self.visit_expression(&node.operand),
            Expression::Postfix(node) => self.visit_expression(&node.operand),
            Expression::Identifier(identifier) => self.visit_identifier(identifier),
            Expression::MethodInvocation(node) => {
                if let Some(target) = &node.target {
                    self.visit_expression(target);
                }
                self.visit_identifier(&node.method_name);
                for argument in &node.arguments {
                    self.visit_expression(argument);
                }
            }
            Expression::InstanceCreation(node) => {
                self.visit_type_name(&node.constructor_name);
                for argument in &node.arguments {
                    self.visit_expression(argument);
                }
            }
            Expression::IntegerLiteral(_)
            | Expression::DoubleLiteral(_)
            | Expression::BooleanLiteral(_)
            | Expression::This => {}
        }
    }

    /// Any identifier that is not a statement label.
    fn visit_identifier(&mut self, _identifier: &SimpleIdentifier) {}

    fn visit_label(&mut self, _label: &SimpleIdentifier) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::IdentifierTable;

    #[derive(Default)]
    struct Collect {
        identifiers: usize,
        labels: usize,
    }

    impl DartVisitor for Collect {
        fn visit_identifier(&mut self, _identifier: &SimpleIdentifier) {
            self.identifiers += 1;
        }

        fn visit_label(&mut self, _label: &SimpleIdentifier) {
            self.labels += 1;
        }
    }

    #[test]
    fn labels_are_kept_apart() {
        let mut table = IdentifierTable::new();
        let label = SimpleIdentifier { id: table.create("outer") };
        let x = SimpleIdentifier { id: table.create("x") };
        let statement = Statement::Labeled(LabeledStatement {
            labels: vec![label],
            statement: Box::new(Statement::Break(BreakStatement { label: Some(label) })),
        });
        let mut collect = Collect::default();
        collect.visit_statement(&statement);
        collect.visit_expression(&Expression::Identifier(x));
        assert_eq!(collect.labels, 2);
        assert_eq!(collect.identifiers, 1);
    }
}
