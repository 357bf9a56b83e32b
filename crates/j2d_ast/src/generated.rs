//! `data()` and `kind()` accessors for the node enums.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;

impl<'a> Statement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Statement::Block(n) => &n.data,
            Statement::Empty(d) => d,
            Statement::Expression(n) => &n.data,
            Statement::VariableDeclaration(n) => &n.data,
            Statement::TypeDeclaration(n) => &n.data,
            Statement::If(n) => &n.data,
            Statement::While(n) => &n.data,
            Statement::Do(n) => &n.data,
            Statement::For(n) => &n.data,
            Statement::EnhancedFor(n) => &n.data,
            Statement::Switch(n) => &n.data,
            Statement::SwitchCase(n) => &n.data,
            Statement::Break(n) => &n.data,
            Statement::Continue(n) => &n.data,
            Statement::Return(n) => &n.data,
            Statement::Throw(n) => &n.data,
            Statement::Try(n) => &n.data,
            Statement::Labeled(n) => &n.data,
            Statement::Synchronized(n) => &n.data,
            Statement::Assert(n) => &n.data,
            Statement::ConstructorInvocation(n) => &n.data,
        }
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }
}

impl<'a> Expression<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Expression::Name(n) => &n.data,
            Expression::NumberLiteral(n) => &n.data,
            Expression::BooleanLiteral(n) => &n.data,
            Expression::StringLiteral(n) => &n.data,
            Expression::CharacterLiteral(n) => &n.data,
            Expression::NullLiteral(d) => d,
            Expression::This(d) => d,
            Expression::Super(d) => d,
            Expression::Parenthesized(n) => &n.data,
            Expression::Assignment(n) => &n.data,
            Expression::Infix(n) => &n.data,
            Expression::Prefix(n) => &n.data,
            Expression::Postfix(n) => &n.data,
            Expression::Cast(n) => &n.data,
            Expression::MethodInvocation(n) => &n.data,
            Expression::ClassInstanceCreation(n) => &n.data,
            Expression::FieldAccess(n) => &n.data,
            Expression::ArrayAccess(n) => &n.data,
            Expression::ArrayCreation(n) => &n.data,
            Expression::ArrayInitializer(n) => &n.data,
            Expression::Conditional(n) => &n.data,
            Expression::VariableDeclaration(n) => &n.data,
            Expression::TypeOperand(n) => &n.data,
        }
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }
}

impl<'a> TypeNode<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            TypeNode::Primitive(n) => &n.data,
            TypeNode::Simple(n) => &n.data,
            TypeNode::Parameterized(n) => &n.data,
            TypeNode::Array(n) => &n.data,
            TypeNode::Wildcard(n) => &n.data,
        }
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }
}

impl<'a> BodyDeclaration<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            BodyDeclaration::Field(n) => &n.data,
            BodyDeclaration::Method(n) => &n.data,
            BodyDeclaration::Type(n) => &n.data,
            BodyDeclaration::Initializer(n) => &n.data,
        }
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }
}
