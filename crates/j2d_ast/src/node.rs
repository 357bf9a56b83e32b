//! Java syntax tree.
//!
//! Nodes live in a `bumpalo` arena owned by whoever drives the parser and
//! refer to their children by shared reference. The shapes follow the Java
//! language grammar closely; nothing here knows about Dart.

use crate::syntax_kind::SyntaxKind;
use crate::types::*;
use j2d_core::intern::InternedString;
use j2d_core::text::TextRange;

// ============================================================================
// Core Node Wrapper
// ============================================================================

#[derive(Debug, Clone)]
pub struct NodeData {
    pub kind: SyntaxKind,
    pub range: TextRange,
    pub id: NodeId,
}

impl NodeData {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Self {
        Self {
            kind,
            range: TextRange::new(pos, end),
            id: NodeId::INVALID,
        }
    }
}

pub type NodeList<'a, T> = &'a [T];

pub type OptionalNode<'a, T> = Option<&'a T>;

/// A simple name. Every identifier carries its own id, which is what the
/// binder keys its resolutions by.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub data: NodeData,
    pub text: InternedString,
}

// ============================================================================
// Compilation Unit
// ============================================================================

#[derive(Debug)]
pub struct CompilationUnit<'a> {
    pub data: NodeData,
    pub package: Option<PackageDeclaration<'a>>,
    pub imports: NodeList<'a, ImportDeclaration<'a>>,
    pub types: NodeList<'a, TypeDeclaration<'a>>,
    pub file_name: String,
}

#[derive(Debug)]
pub struct PackageDeclaration<'a> {
    pub data: NodeData,
    pub name: NodeList<'a, Identifier>,
}

#[derive(Debug)]
pub struct ImportDeclaration<'a> {
    pub data: NodeData,
    pub name: NodeList<'a, Identifier>,
    pub is_static: bool,
    /// `import a.b.*;`
    pub on_demand: bool,
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug)]
pub struct TypeDeclaration<'a> {
    pub data: NodeData,
    pub modifiers: ModifierFlags,
    pub is_interface: bool,
    pub name: Identifier,
    pub type_parameters: NodeList<'a, TypeParameter<'a>>,
    pub superclass: OptionalNode<'a, TypeNode<'a>>,
    pub interfaces: NodeList<'a, TypeNode<'a>>,
    pub members: NodeList<'a, BodyDeclaration<'a>>,
}

#[derive(Debug)]
pub struct TypeParameter<'a> {
    pub data: NodeData,
    pub name: Identifier,
    pub bounds: NodeList<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub enum BodyDeclaration<'a> {
    Field(FieldDeclaration<'a>),
    Method(MethodDeclaration<'a>),
    Type(TypeDeclaration<'a>),
    Initializer(Initializer<'a>),
}

#[derive(Debug)]
pub struct FieldDeclaration<'a> {
    pub data: NodeData,
    pub modifiers: ModifierFlags,
    pub type_node: &'a TypeNode<'a>,
    pub fragments: NodeList<'a, VariableDeclarationFragment<'a>>,
}

#[derive(Debug)]
pub struct MethodDeclaration<'a> {
    pub data: NodeData,
    pub modifiers: ModifierFlags,
    pub type_parameters: NodeList<'a, TypeParameter<'a>>,
    /// `None` for constructors.
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
    pub name: Identifier,
    pub parameters: NodeList<'a, SingleVariableDeclaration<'a>>,
    pub thrown_exceptions: NodeList<'a, TypeNode<'a>>,
    /// `None` for abstract and native methods.
    pub body: OptionalNode<'a, Block<'a>>,
}

impl MethodDeclaration<'_> {
    pub fn is_constructor(&self) -> bool {
        self.return_type.is_none()
    }
}

/// Instance or static initializer block.
#[derive(Debug)]
pub struct Initializer<'a> {
    pub data: NodeData,
    pub modifiers: ModifierFlags,
    pub body: Block<'a>,
}

/// A parameter, catch parameter or enhanced-for variable.
#[derive(Debug)]
pub struct SingleVariableDeclaration<'a> {
    pub data: NodeData,
    pub modifiers: ModifierFlags,
    pub type_node: &'a TypeNode<'a>,
    pub is_varargs: bool,
    pub name: Identifier,
}

#[derive(Debug)]
pub struct VariableDeclarationFragment<'a> {
    pub data: NodeData,
    pub name: Identifier,
    /// `int x[]` style dimensions written after the name.
    pub extra_dimensions: u32,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

// ============================================================================
// Types
// ============================================================================

#[derive(Debug)]
pub enum TypeNode<'a> {
    Primitive(PrimitiveType),
    Simple(SimpleType<'a>),
    Parameterized(ParameterizedType<'a>),
    Array(ArrayType<'a>),
    Wildcard(WildcardType<'a>),
}

/// `int`, `boolean`, `void`, ...
#[derive(Debug)]
pub struct PrimitiveType {
    pub data: NodeData,
    pub keyword: SyntaxKind,
}

#[derive(Debug)]
pub struct SimpleType<'a> {
    pub data: NodeData,
    /// Leading segments of a qualified name (`java.util` in `java.util.List`).
    pub qualifier: NodeList<'a, Identifier>,
    pub name: Identifier,
}

#[derive(Debug)]
pub struct ParameterizedType<'a> {
    pub data: NodeData,
    pub base: &'a TypeNode<'a>,
    pub type_arguments: NodeList<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct ArrayType<'a> {
    pub data: NodeData,
    pub element_type: &'a TypeNode<'a>,
    pub dimensions: u32,
}

/// `?`, `? extends T`, `? super T`
#[derive(Debug)]
pub struct WildcardType<'a> {
    pub data: NodeData,
    pub bound: OptionalNode<'a, TypeNode<'a>>,
    pub is_upper_bound: bool,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug)]
pub enum Statement<'a> {
    Block(Block<'a>),
    Empty(NodeData),
    Expression(ExpressionStatement<'a>),
    VariableDeclaration(VariableDeclarationStatement<'a>),
    TypeDeclaration(&'a TypeDeclaration<'a>),
    If(IfStatement<'a>),
    While(WhileStatement<'a>),
    Do(DoStatement<'a>),
    For(ForStatement<'a>),
    EnhancedFor(EnhancedForStatement<'a>),
    Switch(SwitchStatement<'a>),
    /// Only valid directly inside a switch body.
    SwitchCase(SwitchCase<'a>),
    Break(BreakStatement),
    Continue(ContinueStatement),
    Return(ReturnStatement<'a>),
    Throw(ThrowStatement<'a>),
    Try(TryStatement<'a>),
    Labeled(LabeledStatement<'a>),
    Synchronized(SynchronizedStatement<'a>),
    Assert(AssertStatement<'a>),
    /// `this(...)` or `super(...)` at the start of a constructor.
    ConstructorInvocation(ConstructorInvocation<'a>),
}

#[derive(Debug)]
pub struct Block<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
}

#[derive(Debug)]
pub struct ExpressionStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct VariableDeclarationStatement<'a> {
    pub data: NodeData,
    pub modifiers: ModifierFlags,
    pub type_node: &'a TypeNode<'a>,
    pub fragments: NodeList<'a, VariableDeclarationFragment<'a>>,
}

#[derive(Debug)]
pub struct IfStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub then_statement: &'a Statement<'a>,
    pub else_statement: OptionalNode<'a, Statement<'a>>,
}

#[derive(Debug)]
pub struct WhileStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub body: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct DoStatement<'a> {
    pub data: NodeData,
    pub body: &'a Statement<'a>,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct ForStatement<'a> {
    pub data: NodeData,
    /// Either one [`Expression::VariableDeclaration`] or any number of
    /// expression statements separated by commas.
    pub initializers: NodeList<'a, Expression<'a>>,
    pub expression: OptionalNode<'a, Expression<'a>>,
    pub updaters: NodeList<'a, Expression<'a>>,
    pub body: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct EnhancedForStatement<'a> {
    pub data: NodeData,
    pub parameter: SingleVariableDeclaration<'a>,
    pub expression: &'a Expression<'a>,
    pub body: &'a Statement<'a>,
}

/// Case labels are statements of the switch body, in source order, exactly
/// like the statements they precede.
#[derive(Debug)]
pub struct SwitchStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub statements: NodeList<'a, Statement<'a>>,
}

/// `case e:` or, with no expression, `default:`.
#[derive(Debug)]
pub struct SwitchCase<'a> {
    pub data: NodeData,
    pub expression: OptionalNode<'a, Expression<'a>>,
}

impl SwitchCase<'_> {
    pub fn is_default(&self) -> bool {
        self.expression.is_none()
    }
}

#[derive(Debug)]
pub struct BreakStatement {
    pub data: NodeData,
    pub label: Option<Identifier>,
}

#[derive(Debug)]
pub struct ContinueStatement {
    pub data: NodeData,
    pub label: Option<Identifier>,
}

#[derive(Debug)]
pub struct ReturnStatement<'a> {
    pub data: NodeData,
    pub expression: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct ThrowStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct TryStatement<'a> {
    pub data: NodeData,
    pub body: Block<'a>,
    pub catch_clauses: NodeList<'a, CatchClause<'a>>,
    pub finally: Option<Block<'a>>,
}

#[derive(Debug)]
pub struct CatchClause<'a> {
    pub data: NodeData,
    pub exception: SingleVariableDeclaration<'a>,
    pub body: Block<'a>,
}

#[derive(Debug)]
pub struct LabeledStatement<'a> {
    pub data: NodeData,
    pub label: Identifier,
    pub body: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct SynchronizedStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub body: Block<'a>,
}

#[derive(Debug)]
pub struct AssertStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub message: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct ConstructorInvocation<'a> {
    pub data: NodeData,
    pub is_super: bool,
    pub arguments: NodeList<'a, Expression<'a>>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug)]
pub enum Expression<'a> {
    Name(Identifier),
    NumberLiteral(NumberLiteral<'a>),
    BooleanLiteral(BooleanLiteral),
    StringLiteral(StringLiteral<'a>),
    CharacterLiteral(StringLiteral<'a>),
    NullLiteral(NodeData),
    This(NodeData),
    Super(NodeData),
    Parenthesized(ParenthesizedExpression<'a>),
    Assignment(Assignment<'a>),
    Infix(InfixExpression<'a>),
    Prefix(PrefixExpression<'a>),
    Postfix(PostfixExpression<'a>),
    Cast(CastExpression<'a>),
    MethodInvocation(MethodInvocation<'a>),
    ClassInstanceCreation(ClassInstanceCreation<'a>),
    FieldAccess(FieldAccess<'a>),
    ArrayAccess(ArrayAccess<'a>),
    ArrayCreation(ArrayCreation<'a>),
    ArrayInitializer(ArrayInitializer<'a>),
    Conditional(ConditionalExpression<'a>),
    /// Only appears as a for-statement initializer.
    VariableDeclaration(VariableDeclarationExpression<'a>),
    /// The type on the right of `instanceof`.
    TypeOperand(TypeOperand<'a>),
}

/// The literal token exactly as written, suffix included (`10L`, `0x1F`, `2.5f`).
#[derive(Debug)]
pub struct NumberLiteral<'a> {
    pub data: NodeData,
    pub token: &'a str,
}

#[derive(Debug)]
pub struct BooleanLiteral {
    pub data: NodeData,
    pub value: bool,
}

/// String or character literal; `token` keeps the quotes and escapes.
#[derive(Debug)]
pub struct StringLiteral<'a> {
    pub data: NodeData,
    pub token: &'a str,
}

#[derive(Debug)]
pub struct ParenthesizedExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct Assignment<'a> {
    pub data: NodeData,
    pub left: &'a Expression<'a>,
    /// One of the assignment tokens, `EqualsToken` ..= `CaretEqualsToken`.
    pub operator: SyntaxKind,
    pub right: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct InfixExpression<'a> {
    pub data: NodeData,
    pub left: &'a Expression<'a>,
    pub operator: SyntaxKind,
    pub right: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct PrefixExpression<'a> {
    pub data: NodeData,
    pub operator: SyntaxKind,
    pub operand: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct PostfixExpression<'a> {
    pub data: NodeData,
    pub operand: &'a Expression<'a>,
    pub operator: SyntaxKind,
}

#[derive(Debug)]
pub struct CastExpression<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct MethodInvocation<'a> {
    pub data: NodeData,
    pub expression: OptionalNode<'a, Expression<'a>>,
    pub type_arguments: NodeList<'a, TypeNode<'a>>,
    pub name: Identifier,
    pub arguments: NodeList<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct ClassInstanceCreation<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
    pub arguments: NodeList<'a, Expression<'a>>,
    /// Members of an anonymous class body, if one was given.
    pub anonymous_body: Option<NodeList<'a, BodyDeclaration<'a>>>,
}

#[derive(Debug)]
pub struct FieldAccess<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub name: Identifier,
}

#[derive(Debug)]
pub struct ArrayAccess<'a> {
    pub data: NodeData,
    pub array: &'a Expression<'a>,
    pub index: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct ArrayCreation<'a> {
    pub data: NodeData,
    pub element_type: &'a TypeNode<'a>,
    pub dimensions: NodeList<'a, Expression<'a>>,
    pub extra_dimensions: u32,
    pub initializer: OptionalNode<'a, ArrayInitializer<'a>>,
}

#[derive(Debug)]
pub struct ArrayInitializer<'a> {
    pub data: NodeData,
    pub expressions: NodeList<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct ConditionalExpression<'a> {
    pub data: NodeData,
    pub condition: &'a Expression<'a>,
    pub when_true: &'a Expression<'a>,
    pub when_false: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct VariableDeclarationExpression<'a> {
    pub data: NodeData,
    pub modifiers: ModifierFlags,
    pub type_node: &'a TypeNode<'a>,
    pub fragments: NodeList<'a, VariableDeclarationFragment<'a>>,
}

#[derive(Debug)]
pub struct TypeOperand<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
}
