//! j2d_nodebuilder: Dart node construction.
//!
//! Assembles the multi-part Dart nodes (boxed children, optional lists,
//! label chains) so that the translator's rules stay one line per output
//! construct and never build the same shape two different ways.

use j2d_dart_ast::*;

pub struct NodeBuilder;

impl NodeBuilder {
    pub fn new() -> Self {
        Self
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    pub fn class_declaration(
        &self,
        name: SimpleIdentifier,
        type_parameters: Vec<TypeParameter>,
        members: Vec<ClassMember>,
    ) -> ClassDeclaration {
        ClassDeclaration {
            name,
            type_parameters: self.type_parameter_list(type_parameters),
            members,
        }
    }

    /// `None` when there are no parameters, so that no `<>` is printed.
    pub fn type_parameter_list(&self, type_parameters: Vec<TypeParameter>) -> Option<TypeParameterList> {
        if type_parameters.is_empty() {
            None
        } else {
            Some(TypeParameterList { type_parameters })
        }
    }

    pub fn method_declaration(
        &self,
        return_type: Option<TypeName>,
        name: SimpleIdentifier,
        parameters: Vec<SimpleFormalParameter>,
        body: Option<Block>,
    ) -> ClassMember {
        ClassMember::Method(MethodDeclaration {
            return_type,
            name,
            parameters: FormalParameterList { parameters },
            body,
        })
    }

    pub fn field_declaration(&self, variables: VariableDeclarationList) -> ClassMember {
        ClassMember::Field(FieldDeclaration { variables })
    }

    /// A type name without type arguments.
    ///
    /// # Example
    /// ```
    /// use j2d_dart_ast::IdentifierTable;
    /// use j2d_dart_ast::SimpleIdentifier;
    /// use j2d_nodebuilder::NodeBuilder;
    /// let mut table = IdentifierTable::new();
    /// let name = SimpleIdentifier { id: table.create("int") };
    /// let type_name = NodeBuilder::new().type_name(name);
    /// assert!(type_name.type_arguments.is_none());
    /// ```
    pub fn type_name(&self, name: SimpleIdentifier) -> TypeName {
        TypeName { name, type_arguments: None }
    }

    pub fn parameterized_type_name(&self, name: SimpleIdentifier, arguments: Vec<TypeName>) -> TypeName {
        TypeName { name, type_arguments: Some(arguments) }
    }

    pub fn variable_list(&self, type_name: TypeName, variables: Vec<VariableDeclaration>) -> VariableDeclarationList {
        VariableDeclarationList { type_name, variables }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn if_statement(&self, condition: Expression, then_statement: Statement, else_statement: Option<Statement>) -> Statement {
        Statement::If(IfStatement {
            condition,
            then_statement: Box::new(then_statement),
            else_statement: else_statement.map(Box::new),
        })
    }

    pub fn while_statement(&self, condition: Expression, body: Statement) -> Statement {
        Statement::While(WhileStatement { condition, body: Box::new(body) })
    }

    pub fn do_statement(&self, body: Statement, condition: Expression) -> Statement {
        Statement::Do(DoStatement { body: Box::new(body), condition })
    }

    pub fn for_statement(
        &self,
        variables: Option<VariableDeclarationList>,
        initialization: Option<Expression>,
        condition: Option<Expression>,
        updaters: Vec<Expression>,
        body: Statement,
    ) -> Statement {
        Statement::For(ForStatement {
            variables,
            initialization,
            condition,
            updaters,
            body: Box::new(body),
        })
    }

    pub fn for_each_statement(&self, loop_parameter: SimpleFormalParameter, iterable: Expression, body: Statement) -> Statement {
        Statement::ForEach(ForEachStatement { loop_parameter, iterable, body: Box::new(body) })
    }

    /// A switch member opening a new group: `case e:` or, without an
    /// expression, `default:`.
    pub fn switch_member(&self, expression: Option<Expression>) -> SwitchMember {
        match expression {
            Some(expression) => SwitchMember::Case(SwitchCase { expression, statements: Vec::new() }),
            None => SwitchMember::Default(SwitchDefault::default()),
        }
    }

    /// One statement for a whole label chain, labels outermost first.
    ///
    /// # Example
    /// ```
    /// use j2d_dart_ast::{IdentifierTable, SimpleIdentifier, Statement};
    /// use j2d_nodebuilder::NodeBuilder;
    /// let mut table = IdentifierTable::new();
    /// let l1 = SimpleIdentifier { id: table.create("l1") };
    /// let l2 = SimpleIdentifier { id: table.create("l2") };
    /// let Statement::Labeled(labeled) = NodeBuilder::new().labeled_statement(vec![l1, l2], Statement::Empty) else {
    ///     unreachable!()
    /// };
    /// assert_eq!(labeled.labels, vec![l1, l2]);
    /// ```
    pub fn labeled_statement(&self, labels: Vec<SimpleIdentifier>, statement: Statement) -> Statement {
        Statement::Labeled(LabeledStatement { labels, statement: Box::new(statement) })
    }

    pub fn expression_statement(&self, expression: Expression) -> Statement {
        Statement::Expression(ExpressionStatement { expression })
    }

    pub fn variable_statement(&self, variables: VariableDeclarationList) -> Statement {
        Statement::VariableDeclaration(VariableDeclarationStatement { variables })
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn binary(&self, left: Expression, operator: TokenType, right: Expression) -> Expression {
        Expression::Binary(BinaryExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn prefix(&self, operator: TokenType, operand: Expression) -> Expression {
        Expression::Prefix(PrefixExpression { operator, operand: Box::new(operand) })
    }

    pub fn postfix(&self, operand: Expression, operator: TokenType) -> Expression {
        Expression::Postfix(PostfixExpression { operand: Box::new(operand), operator })
    }

    pub fn integer_literal(&self, lexeme: impl Into<String>) -> Expression {
        Expression::IntegerLiteral(IntegerLiteral { lexeme: lexeme.into() })
    }

    pub fn double_literal(&self, lexeme: impl Into<String>) -> Expression {
        Expression::DoubleLiteral(DoubleLiteral { lexeme: lexeme.into() })
    }

    pub fn method_invocation(
        &self,
        target: Option<Expression>,
        method_name: SimpleIdentifier,
        arguments: Vec<Expression>,
    ) -> Expression {
        Expression::MethodInvocation(MethodInvocation {
            target: target.map(Box::new),
            method_name,
            arguments,
        })
    }

    pub fn instance_creation(&self, constructor_name: TypeName, arguments: Vec<Expression>) -> Expression {
        Expression::InstanceCreation(InstanceCreationExpression { constructor_name, arguments })
    }
}

impl Default for NodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
