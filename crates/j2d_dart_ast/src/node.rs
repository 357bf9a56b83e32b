//! Dart syntax tree.
//!
//! The variant set is closed: exactly the constructs the translator can
//! produce. Nodes carry no source positions.

use crate::identifier::IdentifierId;
use crate::token::TokenType;

/// An identifier occurrence. Its text lives in the batch's
/// [`IdentifierTable`](crate::IdentifierTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimpleIdentifier {
    pub id: IdentifierId,
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompilationUnit {
    pub declarations: Vec<ClassDeclaration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDeclaration {
    pub name: SimpleIdentifier,
    pub type_parameters: Option<TypeParameterList>,
    pub members: Vec<ClassMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    Method(MethodDeclaration),
    Field(FieldDeclaration),
}

/// A method or, when `return_type` is `None`, a constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDeclaration {
    pub return_type: Option<TypeName>,
    pub name: SimpleIdentifier,
    pub parameters: FormalParameterList,
    /// `None` renders as `;`.
    pub body: Option<Block>,
}

impl MethodDeclaration {
    pub fn is_constructor(&self) -> bool {
        self.return_type.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDeclaration {
    pub variables: VariableDeclarationList,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormalParameterList {
    pub parameters: Vec<SimpleFormalParameter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimpleFormalParameter {
    pub type_name: TypeName,
    pub identifier: SimpleIdentifier,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeParameterList {
    pub type_parameters: Vec<TypeParameter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeParameter {
    pub name: SimpleIdentifier,
    pub bound: Option<TypeName>,
}

/// `int`, `String`, `List<T>`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeName {
    pub name: SimpleIdentifier,
    pub type_arguments: Option<Vec<TypeName>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarationList {
    pub type_name: TypeName,
    pub variables: Vec<VariableDeclaration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub name: SimpleIdentifier,
    pub initializer: Option<Expression>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Block(Block),
    If(IfStatement),
    While(WhileStatement),
    Do(DoStatement),
    For(ForStatement),
    ForEach(ForEachStatement),
    Switch(SwitchStatement),
    Try(TryStatement),
    Labeled(LabeledStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    Return(ReturnStatement),
    Throw(ThrowStatement),
    Expression(ExpressionStatement),
    VariableDeclaration(VariableDeclarationStatement),
    Assert(AssertStatement),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_statement: Box<Statement>,
    pub else_statement: Option<Box<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoStatement {
    pub body: Box<Statement>,
    pub condition: Expression,
}

/// A classic `for`. At most one of `variables` and `initialization` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub variables: Option<VariableDeclarationList>,
    pub initialization: Option<Expression>,
    pub condition: Option<Expression>,
    pub updaters: Vec<Expression>,
    pub body: Box<Statement>,
}

/// `for (T x in xs)`
#[derive(Debug, Clone, PartialEq)]
pub struct ForEachStatement {
    pub loop_parameter: SimpleFormalParameter,
    pub iterable: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatement {
    pub expression: Expression,
    pub members: Vec<SwitchMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SwitchMember {
    Case(SwitchCase),
    Default(SwitchDefault),
}

impl SwitchMember {
    pub fn statements(&self) -> &[Statement] {
        match self {
            SwitchMember::Case(case) => &case.statements,
            SwitchMember::Default(default) => &default.statements,
        }
    }

    pub fn statements_mut(&mut self) -> &mut Vec<Statement> {
        match self {
            SwitchMember::Case(case) => &mut case.statements,
            SwitchMember::Default(default) => &mut default.statements,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub expression: Expression,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SwitchDefault {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TryStatement {
    pub body: Block,
    pub catch_clauses: Vec<CatchClause>,
    pub finally_block: Option<Block>,
}

/// `on T catch (e) {...}`
#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub exception_type: TypeName,
    pub exception_parameter: SimpleIdentifier,
    pub body: Block,
}

/// One statement carrying every label of a Java label chain.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledStatement {
    pub labels: Vec<SimpleIdentifier>,
    pub statement: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStatement {
    pub label: Option<SimpleIdentifier>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStatement {
    pub label: Option<SimpleIdentifier>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThrowStatement {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarationStatement {
    pub variables: VariableDeclarationList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssertStatement {
    pub condition: Expression,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Binary(BinaryExpression),
    Prefix(PrefixExpression),
    Postfix(PostfixExpression),
    Identifier(SimpleIdentifier),
    IntegerLiteral(IntegerLiteral),
    DoubleLiteral(DoubleLiteral),
    BooleanLiteral(bool),
    MethodInvocation(MethodInvocation),
    InstanceCreation(InstanceCreationExpression),
    This,
}

/// Binary operators and assignments alike.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub left: Box<Expression>,
    pub operator: TokenType,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub operator: TokenType,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostfixExpression {
    pub operand: Box<Expression>,
    pub operator: TokenType,
}

/// Literal text as it will be printed, e.g. `0xBEEF`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral {
    pub lexeme: String,
}

/// Literal text as it will be printed; always contains a `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubleLiteral {
    pub lexeme: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodInvocation {
    pub target: Option<Box<Expression>>,
    pub method_name: SimpleIdentifier,
    pub arguments: Vec<Expression>,
}

/// `new T(args)`
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceCreationExpression {
    pub constructor_name: TypeName,
    pub arguments: Vec<Expression>,
}
