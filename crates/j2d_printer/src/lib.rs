//! j2d_printer: Dart tree to text.
//!
//! Renders the canonical single-line form: members and statements are
//! separated by one space, braces are kept even around empty bodies and no
//! line breaks are emitted. Identifier text is looked up in the batch's
//! [`IdentifierTable`] at print time, so output printed after a rename
//! shows the new names.

use j2d_dart_ast::*;

/// Options for the printer.
#[derive(Debug, Clone, Default)]
pub struct PrinterOptions {
    /// Append `\n` to non-empty output.
    pub trailing_newline: bool,
}

pub struct Printer<'t> {
    output: String,
    options: PrinterOptions,
    identifiers: &'t IdentifierTable,
}

impl<'t> Printer<'t> {
    pub fn new(identifiers: &'t IdentifierTable) -> Self {
        Self::with_options(identifiers, PrinterOptions::default())
    }

    pub fn with_options(identifiers: &'t IdentifierTable, options: PrinterOptions) -> Self {
        Self {
            output: String::with_capacity(1024),
            options,
            identifiers,
        }
    }

    /// Print a compilation unit. An empty unit prints as the empty string.
    pub fn print_unit(&mut self, unit: &CompilationUnit) -> String {
        self.output.clear();
        for (i, declaration) in unit.declarations.iter().enumerate() {
            if i > 0 {
                self.write(" ");
            }
            self.print_class_declaration(declaration);
        }
        if self.options.trailing_newline && !self.output.is_empty() {
            self.write("\n");
        }
        std::mem::take(&mut self.output)
    }

    pub fn print_statement_to_string(&mut self, statement: &Statement) -> String {
        self.output.clear();
        self.print_statement(statement);
        std::mem::take(&mut self.output)
    }

    pub fn print_expression_to_string(&mut self, expression: &Expression) -> String {
        self.output.clear();
        self.print_expression(expression);
        std::mem::take(&mut self.output)
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn print_class_declaration(&mut self, node: &ClassDeclaration) {
        self.write("class ");
        self.print_identifier(&node.name);
        if let Some(list) = &node.type_parameters {
            self.print_type_parameters(list);
        }
        self.write(" {");
        for (i, member) in node.members.iter().enumerate() {
            if i > 0 {
                self.write(" ");
            }
            match member {
                ClassMember::Method(method) => self.print_method_declaration(method),
                ClassMember::Field(field) => {
                    self.print_variable_list(&field.variables);
                    self.write(";");
                }
            }
        }
        self.write("}");
    }

    fn print_type_parameters(&mut self, list: &TypeParameterList) {
        self.write("<");
        for (i, parameter) in list.type_parameters.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_identifier(&parameter.name);
            if let Some(bound) = &parameter.bound {
                self.write(" extends ");
                self.print_type_name(bound);
            }
        }
        self.write(">");
    }

    fn print_method_declaration(&mut self, node: &MethodDeclaration) {
        if let Some(return_type) = &node.return_type {
            self.print_type_name(return_type);
            self.write(" ");
        }
        self.print_identifier(&node.name);
        self.write("(");
        for (i, parameter) in node.parameters.parameters.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_formal_parameter(parameter);
        }
        self.write(")");
        match &node.body {
            Some(body) => {
                self.write(" ");
                self.print_block(body);
            }
            None => self.write(";"),
        }
    }

    fn print_formal_parameter(&mut self, node: &SimpleFormalParameter) {
        self.print_type_name(&node.type_name);
        self.write(" ");
        self.print_identifier(&node.identifier);
    }

    fn print_type_name(&mut self, node: &TypeName) {
        self.print_identifier(&node.name);
        if let Some(arguments) = &node.type_arguments {
            self.write("<");
            for (i, argument) in arguments.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }
                self.print_type_name(argument);
            }
            self.write(">");
        }
    }

    /// `T a = 1, b` without a terminator.
    fn print_variable_list(&mut self, node: &VariableDeclarationList) {
        self.print_type_name(&node.type_name);
        self.write(" ");
        for (i, variable) in node.variables.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_identifier(&variable.name);
            if let Some(initializer) = &variable.initializer {
                self.write(" = ");
                self.print_expression(initializer);
            }
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn print_block(&mut self, node: &Block) {
        self.write("{");
        self.print_statements(&node.statements);
        self.write("}");
    }

    fn print_statements(&mut self, statements: &[Statement]) {
        for (i, statement) in statements.iter().enumerate() {
            if i > 0 {
                self.write(" ");
            }
            self.print_statement(statement);
        }
    }

    fn print_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Block(block) => self.print_block(block),
            Statement::If(node) => {
                self.write("if (");
                self.print_expression(&node.condition);
                self.write(") ");
                self.print_statement(&node.then_statement);
                if let Some(else_statement) = &node.else_statement {
                    self.write(" else ");
                    self.print_statement(else_statement);
                }
            }
            Statement::While(node) => {
                self.write("while (");
                self.print_expression(&node.condition);
                self.write(") ");
                self.print_statement(&node.body);
            }
            Statement::Do(node) => {
                self.write("do ");
                self.print_statement(&node.body);
                self.write(" while (");
                self.print_expression(&node.condition);
                self.write(");");
            }
            Statement::For(node) => self.print_for_statement(node),
            Statement::ForEach(node) => {
                self.write("for (");
                self.print_formal_parameter(&node.loop_parameter);
                self.write(" in ");
                self.print_expression(&node.iterable);
                self.write(") ");
                self.print_statement(&node.body);
            }
            Statement::Switch(node) => self.print_switch_statement(node),
            Statement::Try(node) => self.print_try_statement(node),
            Statement::Labeled(node) => {
                for label in &node.labels {
                    self.print_identifier(label);
                    self.write(": ");
                }
                self.print_statement(&node.statement);
            }
            Statement::Break(node) => self.print_jump("break", node.label.as_ref()),
            Statement::Continue(node) => self.print_jump("continue", node.label.as_ref()),
            Statement::Return(node) => {
                self.write("return");
                if let Some(expression) = &node.expression {
                    self.write(" ");
                    self.print_expression(expression);
                }
                self.write(";");
            }
            Statement::Throw(node) => {
                self.write("throw ");
                self.print_expression(&node.expression);
                self.write(";");
            }
            Statement::Expression(node) => {
                self.print_expression(&node.expression);
                self.write(";");
            }
            Statement::VariableDeclaration(node) => {
                self.print_variable_list(&node.variables);
                self.write(";");
            }
            Statement::Assert(node) => {
                self.write("assert (");
                self.print_expression(&node.condition);
                self.write(");");
            }
            Statement::Empty => self.write(";"),
        }
    }

    fn print_jump(&mut self, keyword: &str, label: Option<&SimpleIdentifier>) {
        self.write(keyword);
        if let Some(label) = label {
            self.write(" ");
            self.print_identifier(label);
        }
        self.write(";");
    }

    fn print_for_statement(&mut self, node: &ForStatement) {
        self.write("for (");
        if let Some(variables) = &node.variables {
            self.print_variable_list(variables);
        } else if let Some(initialization) = &node.initialization {
            self.print_expression(initialization);
        }
        self.write(";");
        if let Some(condition) = &node.condition {
            self.write(" ");
            self.print_expression(condition);
        }
        self.write(";");
        if !node.updaters.is_empty() {
            self.write(" ");
            self.print_expression_list(&node.updaters);
        }
        self.write(") ");
        self.print_statement(&node.body);
    }

    fn print_switch_statement(&mut self, node: &SwitchStatement) {
        self.write("switch (");
        self.print_expression(&node.expression);
        self.write(") {");
        for (i, member) in node.members.iter().enumerate() {
            if i > 0 {
                self.write(" ");
            }
            match member {
                SwitchMember::Case(case) => {
                    self.write("case ");
                    self.print_expression(&case.expression);
                    self.write(":");
                }
                SwitchMember::Default(_) => self.write("default:"),
            }
            if !member.statements().is_empty() {
                self.write(" ");
                self.print_statements(member.statements());
            }
        }
        self.write("}");
    }

    fn print_try_statement(&mut self, node: &TryStatement) {
        self.write("try ");
        self.print_block(&node.body);
        for clause in &node.catch_clauses {
            self.write(" on ");
            self.print_type_name(&clause.exception_type);
            self.write(" catch (");
            self.print_identifier(&clause.exception_parameter);
            self.write(") ");
            self.print_block(&clause.body);
        }
        if let Some(finally_block) = &node.finally_block {
            self.write(" finally ");
            self.print_block(finally_block);
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn print_expression(&mut self, expression: &Expression) {
        match expression {
            Expression::Binary(node) => {
                let precedence = node.operator.precedence();
                let right_associative = node.operator.is_assignment();
                let non_associative = node.operator.is_non_associative();
                self.print_operand(&node.left, |child| {
                    child < precedence || (child == precedence && (right_associative || non_associative))
                });
                self.write(" ");
                self.write(node.operator.lexeme());
                self.write(" ");
                self.print_operand(&node.right, |child| {
                    child < precedence || (child == precedence && !right_associative)
                });
            }
            Expression::Prefix(node) => {
                let operator = node.operator.lexeme();
                self.write(operator);
                let start = self.output.len();
                self.print_operand(&node.operand, |_| true);
                // `- -x` must not fuse into `--x`.
                let last = operator.chars().last();
                if matches!(last, Some('-' | '+')) && self.output[start..].chars().next() == last {
                    self.output.insert(start, ' ');
                }
            }
            Expression::Postfix(node) => {
                self.print_operand(&node.operand, |_| true);
                self.write(node.operator.lexeme());
            }
            Expression::Identifier(identifier) => self.print_identifier(identifier),
            Expression::IntegerLiteral(literal) => self.write(&literal.lexeme),
            Expression::DoubleLiteral(literal) => self.write(&literal.lexeme),
            Expression::BooleanLiteral(value) => self.write(if *value { "true" } else { "false" }),
            Expression::MethodInvocation(node) => {
                if let Some(target) = &node.target {
                    self.print_operand(target, |_| true);
                    self.write(".");
                }
                self.print_identifier(&node.method_name);
                self.print_arguments(&node.arguments);
            }
            Expression::InstanceCreation(node) => {
                self.write("new ");
                self.print_type_name(&node.constructor_name);
                self.print_arguments(&node.arguments);
            }
            Expression::This => self.write("this"),
        }
    }

    /// Prints a sub-expression, parenthesized when it is a binary
    /// expression whose operator precedence `needs_parens` rejects.
    fn print_operand(&mut self, expression: &Expression, needs_parens: impl Fn(u8) -> bool) {
        match expression {
            Expression::Binary(child) if needs_parens(child.operator.precedence()) => {
                self.write("(");
                self.print_expression(expression);
                self.write(")");
            }
            _ => self.print_expression(expression),
        }
    }

    fn print_arguments(&mut self, arguments: &[Expression]) {
        self.write("(");
        self.print_expression_list(arguments);
        self.write(")");
    }

    fn print_expression_list(&mut self, expressions: &[Expression]) {
        for (i, expression) in expressions.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_expression(expression);
        }
    }

    fn print_identifier(&mut self, identifier: &SimpleIdentifier) {
        let name = self.identifiers.name(identifier.id);
        self.output.push_str(name);
    }

    // ========================================================================
    // Core write helpers
    // ========================================================================

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }
}

/// Print one unit with default options.
pub fn print_unit(identifiers: &IdentifierTable, unit: &CompilationUnit) -> String {
    Printer::new(identifiers).print_unit(unit)
}
