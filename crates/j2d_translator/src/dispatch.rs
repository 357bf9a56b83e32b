//! Rule selection.
//!
//! Every Java node category has one `match` with an arm per concrete node
//! kind. Kinds without a Dart form get an explicit arm that fails with
//! [`TranslateError::UnsupportedConstruct`], so adding a node kind to the
//! Java tree does not compile until it is decided here.

use crate::error::{TranslateError, TranslateResult};
use crate::translator::Translator;
use j2d_ast as java;
use j2d_ast::SyntaxKind;
use j2d_dart_ast as dart;

/// Any translatable Java node.
#[derive(Debug, Clone, Copy)]
pub enum JavaNode<'a> {
    CompilationUnit(&'a java::CompilationUnit<'a>),
    TypeDeclaration(&'a java::TypeDeclaration<'a>),
    BodyDeclaration(&'a java::BodyDeclaration<'a>),
    Statement(&'a java::Statement<'a>),
    Block(&'a java::Block<'a>),
    Expression(&'a java::Expression<'a>),
    Type(&'a java::TypeNode<'a>),
    TypeParameter(&'a java::TypeParameter<'a>),
    SingleVariableDeclaration(&'a java::SingleVariableDeclaration<'a>),
    VariableDeclarationFragment(&'a java::VariableDeclarationFragment<'a>),
    CatchClause(&'a java::CatchClause<'a>),
    Identifier(&'a java::Identifier),
}

impl JavaNode<'_> {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            JavaNode::CompilationUnit(node) => node.data.kind,
            JavaNode::TypeDeclaration(node) => node.data.kind,
            JavaNode::BodyDeclaration(node) => node.kind(),
            JavaNode::Statement(node) => node.kind(),
            JavaNode::Block(node) => node.data.kind,
            JavaNode::Expression(node) => node.kind(),
            JavaNode::Type(node) => node.kind(),
            JavaNode::TypeParameter(node) => node.data.kind,
            JavaNode::SingleVariableDeclaration(node) => node.data.kind,
            JavaNode::VariableDeclarationFragment(node) => node.data.kind,
            JavaNode::CatchClause(node) => node.data.kind,
            JavaNode::Identifier(node) => node.data.kind,
        }
    }
}

/// The Dart node produced for a [`JavaNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum DartNode {
    CompilationUnit(dart::CompilationUnit),
    ClassDeclaration(dart::ClassDeclaration),
    ClassMember(dart::ClassMember),
    Statement(dart::Statement),
    Block(dart::Block),
    Expression(dart::Expression),
    TypeName(dart::TypeName),
    TypeParameter(dart::TypeParameter),
    FormalParameter(dart::SimpleFormalParameter),
    VariableDeclaration(dart::VariableDeclaration),
    CatchClause(dart::CatchClause),
    Identifier(dart::SimpleIdentifier),
}

impl<'t> Translator<'t> {
    /// Translates any node. A missing node translates to a missing node.
    pub fn translate(&mut self, node: Option<JavaNode<'_>>) -> TranslateResult<Option<DartNode>> {
        let Some(node) = node else {
            return Ok(None);
        };
        let translated = match node {
            JavaNode::CompilationUnit(unit) => DartNode::CompilationUnit(self.translate_compilation_unit(unit)?),
            JavaNode::TypeDeclaration(declaration) => {
                DartNode::ClassDeclaration(self.translate_type_declaration(declaration)?)
            }
            JavaNode::BodyDeclaration(member) => DartNode::ClassMember(self.translate_body_declaration(member)?),
            JavaNode::Statement(statement) => DartNode::Statement(self.translate_statement(statement)?),
            JavaNode::Block(block) => DartNode::Block(self.translate_block(block)?),
            JavaNode::Expression(expression) => DartNode::Expression(self.translate_expression(expression)?),
            JavaNode::Type(type_node) => DartNode::TypeName(self.translate_type(type_node)?),
            JavaNode::TypeParameter(parameter) => DartNode::TypeParameter(self.translate_type_parameter(parameter)?),
            JavaNode::SingleVariableDeclaration(parameter) => {
                DartNode::FormalParameter(self.translate_formal_parameter(parameter)?)
            }
            JavaNode::VariableDeclarationFragment(fragment) => {
                DartNode::VariableDeclaration(self.translate_fragment(fragment)?)
            }
            JavaNode::CatchClause(clause) => DartNode::CatchClause(self.translate_catch_clause(clause)?),
            JavaNode::Identifier(name) => DartNode::Identifier(self.identifier(name)),
        };
        Ok(Some(translated))
    }

    pub fn translate_compilation_unit(&mut self, unit: &java::CompilationUnit<'_>) -> TranslateResult<dart::CompilationUnit> {
        let declarations = self.translate_all(unit.types, Self::translate_type_declaration)?;
        Ok(dart::CompilationUnit { declarations })
    }

    pub(crate) fn translate_body_declaration(&mut self, member: &java::BodyDeclaration<'_>) -> TranslateResult<dart::ClassMember> {
        match member {
            java::BodyDeclaration::Field(field) => self.translate_field_declaration(field),
            java::BodyDeclaration::Method(method) => self.translate_method_declaration(method),
            java::BodyDeclaration::Type(nested) => Err(unsupported(&nested.data, "member type")),
            java::BodyDeclaration::Initializer(initializer) => Err(unsupported(&initializer.data, "initializer block")),
        }
    }

    pub(crate) fn translate_statement(&mut self, statement: &java::Statement<'_>) -> TranslateResult<dart::Statement> {
        use java::Statement as S;
        match statement {
            S::Block(block) => Ok(dart::Statement::Block(self.translate_block(block)?)),
            S::Empty(_) => Ok(dart::Statement::Empty),
            S::Expression(node) => self.translate_expression_statement(node),
            S::VariableDeclaration(node) => self.translate_variable_declaration_statement(node),
            S::If(node) => self.translate_if_statement(node),
            S::While(node) => self.translate_while_statement(node),
            S::Do(node) => self.translate_do_statement(node),
            S::For(node) => self.translate_for_statement(node),
            S::EnhancedFor(node) => self.translate_enhanced_for_statement(node),
            S::Switch(node) => self.translate_switch_statement(node),
            S::Break(node) => self.translate_break_statement(node),
            S::Continue(node) => self.translate_continue_statement(node),
            S::Return(node) => self.translate_return_statement(node),
            S::Throw(node) => self.translate_throw_statement(node),
            S::Try(node) => self.translate_try_statement(node),
            S::Labeled(node) => self.translate_labeled_statement(node),
            S::Synchronized(node) => self.translate_synchronized_statement(node),
            S::Assert(node) => self.translate_assert_statement(node),
            S::SwitchCase(node) => Err(TranslateError::malformed(
                node.data.kind,
                node.data.range,
                "case label outside a switch body",
            )),
            S::TypeDeclaration(node) => Err(unsupported(&node.data, "local class")),
            S::ConstructorInvocation(node) => Err(unsupported(&node.data, "explicit constructor invocation")),
        }
    }

    pub(crate) fn translate_expression(&mut self, expression: &java::Expression<'_>) -> TranslateResult<dart::Expression> {
        use java::Expression as E;
        match expression {
            E::Name(name) => Ok(dart::Expression::Identifier(self.identifier(name))),
            E::NumberLiteral(node) => Ok(self.translate_number_literal(node)),
            E::BooleanLiteral(node) => Ok(dart::Expression::BooleanLiteral(node.value)),
            E::This(_) => Ok(dart::Expression::This),
            E::Assignment(node) => self.translate_assignment(node),
            E::Infix(node) => self.translate_infix_expression(node),
            E::Prefix(node) => self.translate_prefix_expression(node),
            E::Postfix(node) => self.translate_postfix_expression(node),
            E::Cast(node) => self.translate_cast_expression(node),
            E::MethodInvocation(node) => self.translate_method_invocation(node),
            E::ClassInstanceCreation(node) => self.translate_instance_creation(node),
            E::VariableDeclaration(node) => Err(TranslateError::malformed(
                node.data.kind,
                node.data.range,
                "variable declaration expression outside a for initializer",
            )),
            E::StringLiteral(node) => Err(unsupported(&node.data, "string literal")),
            E::CharacterLiteral(node) => Err(unsupported(&node.data, "character literal")),
            E::NullLiteral(data) => Err(unsupported(data, "null literal")),
            E::Super(data) => Err(unsupported(data, "super expression")),
            E::Parenthesized(node) => Err(unsupported(&node.data, "parenthesized expression")),
            E::FieldAccess(node) => Err(unsupported(&node.data, "field access")),
            E::ArrayAccess(node) => Err(unsupported(&node.data, "array access")),
            E::ArrayCreation(node) => Err(unsupported(&node.data, "array creation")),
            E::ArrayInitializer(node) => Err(unsupported(&node.data, "array initializer")),
            E::Conditional(node) => Err(unsupported(&node.data, "conditional expression")),
            E::TypeOperand(node) => Err(unsupported(&node.data, "type operand")),
        }
    }

    pub(crate) fn translate_type(&mut self, type_node: &java::TypeNode<'_>) -> TranslateResult<dart::TypeName> {
        match type_node {
            java::TypeNode::Primitive(primitive) => Ok(self.translate_primitive_type(primitive)),
            java::TypeNode::Simple(simple) => Ok(self.translate_simple_type(simple)),
            java::TypeNode::Parameterized(parameterized) => self.translate_parameterized_type(parameterized),
            java::TypeNode::Array(array) => Err(unsupported(&array.data, "array type")),
            java::TypeNode::Wildcard(wildcard) => Err(unsupported(&wildcard.data, "wildcard type")),
        }
    }
}

pub(crate) fn unsupported(data: &java::NodeData, detail: &str) -> TranslateError {
    TranslateError::unsupported(data.kind, data.range, detail)
}
