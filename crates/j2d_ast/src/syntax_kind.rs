//! SyntaxKind: every Java token and node kind the front-end produces.

/// The kind of a token or node.
///
/// Variant order matters: tokens, then keywords, then nodes. Range checks
/// such as [`SyntaxKind::is_keyword`] compare discriminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    // ========================================================================
    // Tokens
    // ========================================================================
    Unknown,
    EndOfFileToken,

    // Literals
    NumericLiteral,
    StringLiteral,
    CharacterLiteral,

    Identifier,

    // Separators
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    SemicolonToken,
    CommaToken,
    AtToken,
    ColonToken,
    ColonColonToken,
    QuestionToken,
    MinusGreaterThanToken,

    // Operators
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    SlashToken,
    PercentToken,
    PlusPlusToken,
    MinusMinusToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    GreaterThanGreaterThanGreaterThanToken,
    AmpersandToken,
    BarToken,
    CaretToken,
    ExclamationToken,
    TildeToken,
    AmpersandAmpersandToken,
    BarBarToken,

    // Assignment
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    GreaterThanGreaterThanGreaterThanEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    CaretEqualsToken,

    // ========================================================================
    // Keywords
    // ========================================================================
    AbstractKeyword,
    AssertKeyword,
    BooleanKeyword,
    BreakKeyword,
    ByteKeyword,
    CaseKeyword,
    CatchKeyword,
    CharKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DefaultKeyword,
    DoKeyword,
    DoubleKeyword,
    ElseKeyword,
    EnumKeyword,
    ExtendsKeyword,
    FalseKeyword,
    FinalKeyword,
    FinallyKeyword,
    FloatKeyword,
    ForKeyword,
    GotoKeyword,
    IfKeyword,
    ImplementsKeyword,
    ImportKeyword,
    InstanceOfKeyword,
    IntKeyword,
    InterfaceKeyword,
    LongKeyword,
    NativeKeyword,
    NewKeyword,
    NullKeyword,
    PackageKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    ReturnKeyword,
    ShortKeyword,
    StaticKeyword,
    StrictfpKeyword,
    SuperKeyword,
    SwitchKeyword,
    SynchronizedKeyword,
    ThisKeyword,
    ThrowKeyword,
    ThrowsKeyword,
    TransientKeyword,
    TrueKeyword,
    TryKeyword,
    VoidKeyword,
    VolatileKeyword,
    WhileKeyword,

    // ========================================================================
    // Nodes
    // ========================================================================
    CompilationUnit,
    PackageDeclaration,
    ImportDeclaration,
    TypeDeclaration,
    TypeParameter,
    FieldDeclaration,
    MethodDeclaration,
    Initializer,
    SingleVariableDeclaration,
    VariableDeclarationFragment,

    // Types
    PrimitiveType,
    SimpleType,
    ParameterizedType,
    ArrayType,
    WildcardType,

    // Statements
    Block,
    EmptyStatement,
    ExpressionStatement,
    VariableDeclarationStatement,
    TypeDeclarationStatement,
    IfStatement,
    WhileStatement,
    DoStatement,
    ForStatement,
    EnhancedForStatement,
    SwitchStatement,
    SwitchCase,
    BreakStatement,
    ContinueStatement,
    ReturnStatement,
    ThrowStatement,
    TryStatement,
    CatchClause,
    LabeledStatement,
    SynchronizedStatement,
    AssertStatement,
    ConstructorInvocation,
    SuperConstructorInvocation,

    // Expressions
    SimpleName,
    NumberLiteral,
    BooleanLiteral,
    StringLiteralExpression,
    CharacterLiteralExpression,
    NullLiteral,
    ThisExpression,
    SuperExpression,
    ParenthesizedExpression,
    Assignment,
    InfixExpression,
    PrefixExpression,
    PostfixExpression,
    CastExpression,
    MethodInvocation,
    ClassInstanceCreation,
    FieldAccess,
    ArrayAccess,
    ArrayCreation,
    ArrayInitializer,
    ConditionalExpression,
    VariableDeclarationExpression,
    TypeOperand,
}

impl SyntaxKind {
    pub const FIRST_PUNCTUATION: SyntaxKind = SyntaxKind::OpenBraceToken;
    pub const LAST_PUNCTUATION: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_ASSIGNMENT: SyntaxKind = SyntaxKind::EqualsToken;
    pub const LAST_ASSIGNMENT: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::AbstractKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::WhileKeyword;
    pub const FIRST_NODE: SyntaxKind = SyntaxKind::CompilationUnit;

    #[inline]
    pub fn is_keyword(self) -> bool {
        self >= Self::FIRST_KEYWORD && self <= Self::LAST_KEYWORD
    }

    #[inline]
    pub fn is_punctuation(self) -> bool {
        self >= Self::FIRST_PUNCTUATION && self <= Self::LAST_PUNCTUATION
    }

    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        self >= Self::FIRST_ASSIGNMENT && self <= Self::LAST_ASSIGNMENT
    }

    #[inline]
    pub fn is_node(self) -> bool {
        self >= Self::FIRST_NODE
    }

    pub fn is_primitive_type_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::BooleanKeyword
                | SyntaxKind::ByteKeyword
                | SyntaxKind::CharKeyword
                | SyntaxKind::ShortKeyword
                | SyntaxKind::IntKeyword
                | SyntaxKind::LongKeyword
                | SyntaxKind::FloatKeyword
                | SyntaxKind::DoubleKeyword
                | SyntaxKind::VoidKeyword
        )
    }

    pub fn is_modifier_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::PublicKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::StaticKeyword
                | SyntaxKind::AbstractKeyword
                | SyntaxKind::FinalKeyword
                | SyntaxKind::NativeKeyword
                | SyntaxKind::SynchronizedKeyword
                | SyntaxKind::TransientKeyword
                | SyntaxKind::VolatileKeyword
                | SyntaxKind::StrictfpKeyword
                | SyntaxKind::DefaultKeyword
        )
    }

    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        let kind = match text {
            "abstract" => SyntaxKind::AbstractKeyword,
            "assert" => SyntaxKind::AssertKeyword,
            "boolean" => SyntaxKind::BooleanKeyword,
            "break" => SyntaxKind::BreakKeyword,
            "byte" => SyntaxKind::ByteKeyword,
            "case" => SyntaxKind::CaseKeyword,
            "catch" => SyntaxKind::CatchKeyword,
            "char" => SyntaxKind::CharKeyword,
            "class" => SyntaxKind::ClassKeyword,
            "const" => SyntaxKind::ConstKeyword,
            "continue" => SyntaxKind::ContinueKeyword,
            "default" => SyntaxKind::DefaultKeyword,
            "do" => SyntaxKind::DoKeyword,
            "double" => SyntaxKind::DoubleKeyword,
            "else" => SyntaxKind::ElseKeyword,
            "enum" => SyntaxKind::EnumKeyword,
            "extends" => SyntaxKind::ExtendsKeyword,
            "false" => SyntaxKind::FalseKeyword,
            "final" => SyntaxKind::FinalKeyword,
            "finally" => SyntaxKind::FinallyKeyword,
            "float" => SyntaxKind::FloatKeyword,
            "for" => SyntaxKind::ForKeyword,
            "goto" => SyntaxKind::GotoKeyword,
            "if" => SyntaxKind::IfKeyword,
            "implements" => SyntaxKind::ImplementsKeyword,
            "import" => SyntaxKind::ImportKeyword,
            "instanceof" => SyntaxKind::InstanceOfKeyword,
            "int" => SyntaxKind::IntKeyword,
            "interface" => SyntaxKind::InterfaceKeyword,
            "long" => SyntaxKind::LongKeyword,
            "native" => SyntaxKind::NativeKeyword,
            "new" => SyntaxKind::NewKeyword,
            "null" => SyntaxKind::NullKeyword,
            "package" => SyntaxKind::PackageKeyword,
            "private" => SyntaxKind::PrivateKeyword,
            "protected" => SyntaxKind::ProtectedKeyword,
            "public" => SyntaxKind::PublicKeyword,
            "return" => SyntaxKind::ReturnKeyword,
            "short" => SyntaxKind::ShortKeyword,
            "static" => SyntaxKind::StaticKeyword,
            "strictfp" => SyntaxKind::StrictfpKeyword,
            "super" => SyntaxKind::SuperKeyword,
            "switch" => SyntaxKind::SwitchKeyword,
            "synchronized" => SyntaxKind::SynchronizedKeyword,
            "this" => SyntaxKind::ThisKeyword,
            "throw" => SyntaxKind::ThrowKeyword,
            "throws" => SyntaxKind::ThrowsKeyword,
            "transient" => SyntaxKind::TransientKeyword,
            "true" => SyntaxKind::TrueKeyword,
            "try" => SyntaxKind::TryKeyword,
            "void" => SyntaxKind::VoidKeyword,
            "volatile" => SyntaxKind::VolatileKeyword,
            "while" => SyntaxKind::WhileKeyword,
            _ => return None,
        };
        Some(kind)
    }

    pub fn keyword_text(self) -> Option<&'static str> {
        let text = match self {
            SyntaxKind::AbstractKeyword => "abstract",
            SyntaxKind::AssertKeyword => "assert",
            SyntaxKind::BooleanKeyword => "boolean",
            SyntaxKind::BreakKeyword => "break",
            SyntaxKind::ByteKeyword => "byte",
            SyntaxKind::CaseKeyword => "case",
            SyntaxKind::CatchKeyword => "catch",
            SyntaxKind::CharKeyword => "char",
            SyntaxKind::ClassKeyword => "class",
            SyntaxKind::ConstKeyword => "const",
            SyntaxKind::ContinueKeyword => "continue",
            SyntaxKind::DefaultKeyword => "default",
            SyntaxKind::DoKeyword => "do",
            SyntaxKind::DoubleKeyword => "double",
            SyntaxKind::ElseKeyword => "else",
            SyntaxKind::EnumKeyword => "enum",
            SyntaxKind::ExtendsKeyword => "extends",
            SyntaxKind::FalseKeyword => "false",
            SyntaxKind::FinalKeyword => "final",
            SyntaxKind::FinallyKeyword => "finally",
            SyntaxKind::FloatKeyword => "float",
            SyntaxKind::ForKeyword => "for",
            SyntaxKind::GotoKeyword => "goto",
            SyntaxKind::IfKeyword => "if",
            SyntaxKind::ImplementsKeyword => "implements",
            SyntaxKind::ImportKeyword => "import",
            SyntaxKind::InstanceOfKeyword => "instanceof",
            SyntaxKind::IntKeyword => "int",
            SyntaxKind::InterfaceKeyword => "interface",
            SyntaxKind::LongKeyword => "long",
            SyntaxKind::NativeKeyword => "native",
            SyntaxKind::NewKeyword => "new",
            SyntaxKind::NullKeyword => "null",
            SyntaxKind::PackageKeyword => "package",
            SyntaxKind::PrivateKeyword => "private",
            SyntaxKind::ProtectedKeyword => "protected",
            SyntaxKind::PublicKeyword => "public",
            SyntaxKind::ReturnKeyword => "return",
            SyntaxKind::ShortKeyword => "short",
            SyntaxKind::StaticKeyword => "static",
            SyntaxKind::StrictfpKeyword => "strictfp",
            SyntaxKind::SuperKeyword => "super",
            SyntaxKind::SwitchKeyword => "switch",
            SyntaxKind::SynchronizedKeyword => "synchronized",
            SyntaxKind::ThisKeyword => "this",
            SyntaxKind::ThrowKeyword => "throw",
            SyntaxKind::ThrowsKeyword => "throws",
            SyntaxKind::TransientKeyword => "transient",
            SyntaxKind::TrueKeyword => "true",
            SyntaxKind::TryKeyword => "try",
            SyntaxKind::VoidKeyword => "void",
            SyntaxKind::VolatileKeyword => "volatile",
            SyntaxKind::WhileKeyword => "while",
            _ => return None,
        };
        Some(text)
    }

    pub fn punctuation_text(self) -> Option<&'static str> {
        let text = match self {
            SyntaxKind::OpenBraceToken => "{",
            SyntaxKind::CloseBraceToken => "}",
            SyntaxKind::OpenParenToken => "(",
            SyntaxKind::CloseParenToken => ")",
            SyntaxKind::OpenBracketToken => "[",
            SyntaxKind::CloseBracketToken => "]",
            SyntaxKind::DotToken => ".",
            SyntaxKind::DotDotDotToken => "...",
            SyntaxKind::SemicolonToken => ";",
            SyntaxKind::CommaToken => ",",
            SyntaxKind::AtToken => "@",
            SyntaxKind::ColonToken => ":",
            SyntaxKind::ColonColonToken => "::",
            SyntaxKind::QuestionToken => "?",
            SyntaxKind::MinusGreaterThanToken => "->",
            SyntaxKind::LessThanToken => "<",
            SyntaxKind::GreaterThanToken => ">",
            SyntaxKind::LessThanEqualsToken => "<=",
            SyntaxKind::GreaterThanEqualsToken => ">=",
            SyntaxKind::EqualsEqualsToken => "==",
            SyntaxKind::ExclamationEqualsToken => "!=",
            SyntaxKind::PlusToken => "+",
            SyntaxKind::MinusToken => "-",
            SyntaxKind::AsteriskToken => "*",
            SyntaxKind::SlashToken => "/",
            SyntaxKind::PercentToken => "%",
            SyntaxKind::PlusPlusToken => "++",
            SyntaxKind::MinusMinusToken => "--",
            SyntaxKind::LessThanLessThanToken => "<<",
            SyntaxKind::GreaterThanGreaterThanToken => ">>",
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken => ">>>",
            SyntaxKind::AmpersandToken => "&",
            SyntaxKind::BarToken => "|",
            SyntaxKind::CaretToken => "^",
            SyntaxKind::ExclamationToken => "!",
            SyntaxKind::TildeToken => "~",
            SyntaxKind::AmpersandAmpersandToken => "&&",
            SyntaxKind::BarBarToken => "||",
            SyntaxKind::EqualsToken => "=",
            SyntaxKind::PlusEqualsToken => "+=",
            SyntaxKind::MinusEqualsToken => "-=",
            SyntaxKind::AsteriskEqualsToken => "*=",
            SyntaxKind::SlashEqualsToken => "/=",
            SyntaxKind::PercentEqualsToken => "%=",
            SyntaxKind::LessThanLessThanEqualsToken => "<<=",
            SyntaxKind::GreaterThanGreaterThanEqualsToken => ">>=",
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => ">>>=",
            SyntaxKind::AmpersandEqualsToken => "&=",
            SyntaxKind::BarEqualsToken => "|=",
            SyntaxKind::CaretEqualsToken => "^=",
            _ => return None,
        };
        Some(text)
    }

    /// Source text of a token kind, if it has a fixed spelling.
    pub fn token_text(self) -> Option<&'static str> {
        self.punctuation_text().or_else(|| self.keyword_text())
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_round_trip() {
        for text in ["class", "instanceof", "synchronized", "while", "abstract"] {
            let kind = SyntaxKind::from_keyword(text).unwrap();
            assert!(kind.is_keyword());
            assert_eq!(kind.keyword_text(), Some(text));
        }
        assert_eq!(SyntaxKind::from_keyword("var"), None);
    }

    #[test]
    fn ranges() {
        assert!(SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken.is_assignment_operator());
        assert!(!SyntaxKind::EqualsEqualsToken.is_assignment_operator());
        assert!(SyntaxKind::CommaToken.is_punctuation());
        assert!(!SyntaxKind::Identifier.is_punctuation());
        assert!(SyntaxKind::SwitchCase.is_node());
        assert!(!SyntaxKind::WhileKeyword.is_node());
    }

    #[test]
    fn token_text_covers_both_tables() {
        assert_eq!(SyntaxKind::GreaterThanGreaterThanGreaterThanToken.token_text(), Some(">>>"));
        assert_eq!(SyntaxKind::InstanceOfKeyword.token_text(), Some("instanceof"));
        assert_eq!(SyntaxKind::Block.token_text(), None);
    }
}
